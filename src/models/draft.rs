use super::evolution::{DEFAULT_EVOLUTION_PROGRESS, EvolutionStatus};
use super::file::{FileCategory, SessionDraftFile};
use super::protocol::{ProtocolPatch, SessionDraftProtocol};
use super::session_type::SessionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running sub-state of a draft, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Finished,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not started",
            SessionState::Running => "running",
            SessionState::Finished => "finished",
        }
    }
}

/// In-progress clinical session for one patient.
///
/// Every transition below consumes the draft and returns the next value, so
/// the store can treat each mutation as "read-or-default, transform, write
/// back". Missing fields in a stored document fall back to `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionDraft {
    pub session_name: String,
    pub session_type: SessionType,
    pub is_session_running: bool,
    pub is_completed: bool,
    pub session_started_at: Option<DateTime<Utc>>,
    pub elapsed_seconds: u64,
    pub notes: String,
    pub protocols: Vec<SessionDraftProtocol>,
    pub files: Vec<SessionDraftFile>,
    pub has_evolution: bool,
    pub evolution_progress: u8,
    pub evolution_status: EvolutionStatus,
    pub last_saved_at: Option<DateTime<Utc>>,
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self {
            session_name: String::new(),
            session_type: SessionType::Session,
            is_session_running: false,
            is_completed: false,
            session_started_at: None,
            elapsed_seconds: 0,
            notes: String::new(),
            protocols: Vec::new(),
            files: Vec::new(),
            has_evolution: false,
            evolution_progress: DEFAULT_EVOLUTION_PROGRESS,
            evolution_status: EvolutionStatus::NotStarted,
            last_saved_at: None,
        }
    }
}

/// Shallow update of the scalar fields; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub session_name: Option<String>,
    pub session_type: Option<SessionType>,
    pub notes: Option<String>,
}

impl DraftPatch {
    pub fn is_empty(&self) -> bool {
        self.session_name.is_none() && self.session_type.is_none() && self.notes.is_none()
    }
}

impl SessionDraft {
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        if self.is_session_running {
            SessionState::Running
        } else if self.is_completed {
            SessionState::Finished
        } else {
            SessionState::NotStarted
        }
    }

    pub fn merged(mut self, patch: DraftPatch) -> Self {
        if let Some(name) = patch.session_name {
            self.session_name = name;
        }
        if let Some(t) = patch.session_type {
            self.session_type = t;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self
    }

    /// NotStarted/Finished → Running. Already running: unchanged.
    pub fn started(mut self, now: DateTime<Utc>) -> Self {
        if self.is_session_running {
            return self;
        }
        self.is_session_running = true;
        self.is_completed = false;
        self.session_started_at = Some(now);
        self
    }

    /// Running → Finished, folding the running interval into `elapsed_seconds`.
    /// Not running: unchanged.
    pub fn finished(mut self, now: DateTime<Utc>) -> Self {
        if !self.is_session_running {
            return self;
        }
        let interval = self
            .session_started_at
            .map(|started| (now - started).num_seconds().max(0) as u64)
            .unwrap_or(0);

        self.elapsed_seconds += interval;
        self.is_session_running = false;
        self.is_completed = true;
        self.session_started_at = None;
        self
    }

    pub fn with_protocol(mut self, protocol: SessionDraftProtocol) -> Self {
        self.protocols.push(protocol);
        self
    }

    pub fn with_protocol_patched(mut self, protocol_id: &str, patch: ProtocolPatch) -> Self {
        if let Some(p) = self.protocols.iter_mut().find(|p| p.id == protocol_id) {
            p.apply(patch);
        }
        self
    }

    pub fn without_protocol(mut self, protocol_id: &str) -> Self {
        self.protocols.retain(|p| p.id != protocol_id);
        self
    }

    pub fn with_files(mut self, files: impl IntoIterator<Item = SessionDraftFile>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn without_file(mut self, file_id: &str) -> Self {
        self.files.retain(|f| f.id != file_id);
        self
    }

    pub fn with_file_category(mut self, file_id: &str, category: FileCategory) -> Self {
        if let Some(f) = self.files.iter_mut().find(|f| f.id == file_id) {
            f.category = category;
        }
        self
    }

    pub fn with_evolution_enabled(mut self, enabled: bool) -> Self {
        self.has_evolution = enabled;
        self
    }

    pub fn with_evolution_progress(mut self, progress: u8) -> Self {
        self.evolution_progress = progress;
        self
    }

    pub fn with_evolution_status(mut self, status: EvolutionStatus) -> Self {
        self.evolution_status = status;
        self
    }

    pub fn saved(mut self, now: DateTime<Utc>) -> Self {
        self.last_saved_at = Some(now);
        self
    }

    pub fn protocol(&self, protocol_id: &str) -> Option<&SessionDraftProtocol> {
        self.protocols.iter().find(|p| p.id == protocol_id)
    }

    pub fn file(&self, file_id: &str) -> Option<&SessionDraftFile> {
        self.files.iter().find(|f| f.id == file_id)
    }
}
