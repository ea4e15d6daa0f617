//! Versioned persisted form of the whole patient → draft mapping.

use crate::models::SessionDraft;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current schema version of the stored document.
pub const SCHEMA_VERSION: u32 = 1;

/// Patient id → draft. Ordered so that the serialized document is stable.
pub type DraftMap = BTreeMap<String, SessionDraft>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub drafts: DraftMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDocument {
    pub state: PersistedState,
    pub version: u32,
}

/// Result of reading the stored document at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// Nothing stored yet.
    Empty,
    /// Document read; number of drafts restored.
    Loaded { drafts: usize },
    /// Stored document could not be used; the store starts empty.
    Discarded { reason: String },
}

impl PersistedDocument {
    pub fn new(drafts: DraftMap) -> Self {
        Self {
            state: PersistedState { drafts },
            version: SCHEMA_VERSION,
        }
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a stored document. Any version other than [`SCHEMA_VERSION`] is
    /// rejected: schema bumps reset local drafts.
    pub fn decode(raw: &str) -> Result<DraftMap, String> {
        let doc: PersistedDocument =
            serde_json::from_str(raw).map_err(|e| format!("malformed document: {}", e))?;

        if doc.version != SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema version {} (expected {})",
                doc.version, SCHEMA_VERSION
            ));
        }

        Ok(doc.state.drafts)
    }
}

/// Read-or-default: make sure `patient_id` has a draft and return the
/// updated mapping together with a copy of that draft.
pub fn with_default<F>(mut drafts: DraftMap, patient_id: &str, make_default: F) -> (DraftMap, SessionDraft)
where
    F: FnOnce() -> SessionDraft,
{
    let draft = drafts
        .entry(patient_id.to_string())
        .or_insert_with(make_default)
        .clone();
    (drafts, draft)
}
