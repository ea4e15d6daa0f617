//! Per-patient session draft store.
//!
//! One `DraftStore` owns the patient → draft mapping. Every mutation goes
//! through the same path: read-or-default, transform, write back, then
//! write-through of the whole mapping to the configured [`DraftStorage`].

pub mod clock;
pub mod document;
pub mod ids;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use document::{DraftMap, HydrationOutcome, PersistedDocument, SCHEMA_VERSION, with_default};
pub use storage::{DraftStorage, MemoryStorage};

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{
    DraftPatch, EvolutionStatus, FileCategory, FileUpload, ProtocolPatch, ProtocolType,
    SessionDraft, SessionDraftFile, SessionDraftProtocol,
};
use crate::utils::date::default_session_name;
use chrono::{DateTime, Utc};

pub const DEFAULT_STORAGE_KEY: &str = "session-draft-store";
pub const DEFAULT_SESSION_NAME_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub storage_key: String,
    pub session_name_format: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            session_name_format: DEFAULT_SESSION_NAME_FORMAT.to_string(),
        }
    }
}

impl From<&Config> for StoreOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            storage_key: cfg.storage_key.clone(),
            session_name_format: cfg.session_name_format.clone(),
        }
    }
}

pub struct DraftStore<S: DraftStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    options: StoreOptions,
    drafts: DraftMap,
    hydrated: bool,
}

impl<S: DraftStorage, C: Clock> DraftStore<S, C> {
    /// Build an empty, not yet hydrated store.
    pub fn new(storage: S, clock: C, options: StoreOptions) -> Self {
        Self {
            storage,
            clock,
            options,
            drafts: DraftMap::new(),
            hydrated: false,
        }
    }

    /// Build and hydrate in one step.
    pub fn open(storage: S, clock: C, options: StoreOptions) -> (Self, HydrationOutcome) {
        let mut store = Self::new(storage, clock, options);
        let outcome = store.hydrate();
        (store, outcome)
    }

    /// Load the stored mapping, replacing whatever is in memory.
    ///
    /// Never fails: unreadable, malformed or foreign-version documents leave
    /// the store empty and are reported as [`HydrationOutcome::Discarded`].
    pub fn hydrate(&mut self) -> HydrationOutcome {
        let outcome = match self.storage.get_item(&self.options.storage_key) {
            Ok(None) => {
                self.drafts = DraftMap::new();
                HydrationOutcome::Empty
            }
            Ok(Some(raw)) => match PersistedDocument::decode(&raw) {
                Ok(mut drafts) => {
                    self.name_unnamed(&mut drafts);
                    let count = drafts.len();
                    self.drafts = drafts;
                    HydrationOutcome::Loaded { drafts: count }
                }
                Err(reason) => {
                    self.drafts = DraftMap::new();
                    HydrationOutcome::Discarded { reason }
                }
            },
            Err(e) => {
                self.drafts = DraftMap::new();
                HydrationOutcome::Discarded {
                    reason: format!("storage unreadable: {}", e),
                }
            }
        };

        self.hydrated = true;
        outcome
    }

    /// Stored drafts without a session name get the same default a fresh
    /// draft would get at this instant.
    fn name_unnamed(&self, drafts: &mut DraftMap) {
        let now = self.clock.now();
        for draft in drafts.values_mut().filter(|d| d.session_name.is_empty()) {
            draft.session_name = default_session_name(now, &self.options.session_name_format);
        }
    }

    /// Until this is true a missing draft may simply not be loaded yet.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn draft(&self, patient_id: &str) -> Option<&SessionDraft> {
        self.drafts.get(patient_id)
    }

    pub fn drafts(&self) -> &DraftMap {
        &self.drafts
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// A brand-new draft as of the current clock instant.
    pub fn default_draft(&self) -> SessionDraft {
        self.default_draft_at(self.clock.now())
    }

    fn default_draft_at(&self, now: DateTime<Utc>) -> SessionDraft {
        SessionDraft::new(default_session_name(now, &self.options.session_name_format))
    }

    pub fn ensure_draft(&mut self, patient_id: &str) -> AppResult<()> {
        self.mutate(patient_id, |draft, _| draft)
    }

    pub fn update_draft(&mut self, patient_id: &str, patch: DraftPatch) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.merged(patch))
    }

    pub fn start_session(&mut self, patient_id: &str) -> AppResult<()> {
        self.mutate(patient_id, |draft, now| draft.started(now))
    }

    pub fn finish_session(&mut self, patient_id: &str) -> AppResult<()> {
        self.mutate(patient_id, |draft, now| draft.finished(now))
    }

    /// Append an empty protocol entry and return its id.
    pub fn add_protocol(&mut self, patient_id: &str, protocol_type: ProtocolType) -> AppResult<String> {
        let id = ids::new_entry_id();
        let entry_id = id.clone();
        self.mutate(patient_id, move |draft, now| {
            draft.with_protocol(SessionDraftProtocol::new(entry_id, protocol_type, now))
        })?;
        Ok(id)
    }

    pub fn update_protocol(
        &mut self,
        patient_id: &str,
        protocol_id: &str,
        patch: ProtocolPatch,
    ) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| {
            draft.with_protocol_patched(protocol_id, patch)
        })
    }

    pub fn remove_protocol(&mut self, patient_id: &str, protocol_id: &str) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.without_protocol(protocol_id))
    }

    /// Append one metadata entry per upload, in input order. Returns the new ids.
    pub fn add_files(&mut self, patient_id: &str, uploads: Vec<FileUpload>) -> AppResult<Vec<String>> {
        let new_ids: Vec<String> = uploads.iter().map(|_| ids::new_entry_id()).collect();
        let entry_ids = new_ids.clone();
        self.mutate(patient_id, move |draft, now| {
            draft.with_files(
                entry_ids
                    .into_iter()
                    .zip(uploads)
                    .map(|(id, upload)| SessionDraftFile::from_upload(id, upload, now)),
            )
        })?;
        Ok(new_ids)
    }

    pub fn remove_file(&mut self, patient_id: &str, file_id: &str) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.without_file(file_id))
    }

    pub fn update_file_category(
        &mut self,
        patient_id: &str,
        file_id: &str,
        category: FileCategory,
    ) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| {
            draft.with_file_category(file_id, category)
        })
    }

    pub fn set_evolution_enabled(&mut self, patient_id: &str, enabled: bool) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.with_evolution_enabled(enabled))
    }

    /// No range check here; callers pass a value from the step list.
    pub fn set_evolution_progress(&mut self, patient_id: &str, progress: u8) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.with_evolution_progress(progress))
    }

    pub fn set_evolution_status(&mut self, patient_id: &str, status: EvolutionStatus) -> AppResult<()> {
        self.mutate(patient_id, move |draft, _| draft.with_evolution_status(status))
    }

    /// Stamp `lastSavedAt`. Informational only: every mutation is already durable.
    pub fn save_draft(&mut self, patient_id: &str) -> AppResult<()> {
        self.mutate(patient_id, |draft, now| draft.saved(now))
    }

    pub fn reset_draft(&mut self, patient_id: &str) -> AppResult<()> {
        let fresh = self.default_draft();
        self.mutate(patient_id, move |_, _| fresh)
    }

    fn mutate<F>(&mut self, patient_id: &str, transform: F) -> AppResult<()>
    where
        F: FnOnce(SessionDraft, DateTime<Utc>) -> SessionDraft,
    {
        let now = self.clock.now();
        let existed = self.drafts.contains_key(patient_id);

        let drafts = std::mem::take(&mut self.drafts);
        let (mut drafts, current) =
            with_default(drafts, patient_id, || self.default_draft_at(now));

        let next = transform(current.clone(), now);
        let changed = !existed || next != current;
        drafts.insert(patient_id.to_string(), next);
        self.drafts = drafts;

        if changed {
            self.persist()?;
        }
        Ok(())
    }

    /// Write-through of the whole mapping. Skipped before hydration so an
    /// early write cannot clobber what is stored.
    fn persist(&self) -> AppResult<()> {
        if !self.hydrated {
            return Ok(());
        }
        let raw = PersistedDocument::new(self.drafts.clone()).encode()?;
        self.storage.set_item(&self.options.storage_key, &raw)
    }
}
