use serde::{Deserialize, Serialize};

/// Allowed values for `evolutionProgress`, in display order.
pub const EVOLUTION_PROGRESS_STEPS: [u8; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

pub const DEFAULT_EVOLUTION_PROGRESS: u8 = EVOLUTION_PROGRESS_STEPS[0];

pub fn is_valid_progress(progress: u8) -> bool {
    EVOLUTION_PROGRESS_STEPS.contains(&progress)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionStatus {
    #[default]
    NotStarted,
    InProgress,
    Achieved,
}

impl EvolutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvolutionStatus::NotStarted => "not_started",
            EvolutionStatus::InProgress => "in_progress",
            EvolutionStatus::Achieved => "achieved",
        }
    }

    /// Accepts both `in_progress` and `in-progress`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('-', "_").as_str() {
            "not_started" => Some(EvolutionStatus::NotStarted),
            "in_progress" => Some(EvolutionStatus::InProgress),
            "achieved" => Some(EvolutionStatus::Achieved),
            _ => None,
        }
    }
}
