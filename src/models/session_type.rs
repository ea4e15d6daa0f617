use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Session,
    Evolution,
    Anamnesis,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Session => "session",
            SessionType::Evolution => "evolution",
            SessionType::Anamnesis => "anamnesis",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "session" => Some(SessionType::Session),
            "evolution" => Some(SessionType::Evolution),
            "anamnesis" => Some(SessionType::Anamnesis),
            _ => None,
        }
    }
}
