use crate::models::SessionDraft;

/// What the host should do with a draft found at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeDecision {
    /// Nothing worth asking about.
    Fresh,
    /// A saved, unfinished draft exists: offer "resume vs. start over".
    Prompt,
}

/// Prompt only for drafts that were explicitly saved and are not completed.
pub fn resume_decision(draft: &SessionDraft) -> ResumeDecision {
    if !draft.is_completed && draft.last_saved_at.is_some() {
        ResumeDecision::Prompt
    } else {
        ResumeDecision::Fresh
    }
}
