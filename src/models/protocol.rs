use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolType {
    SpeechAssessment,
    MotorCoordination,
    SchoolFollowUp,
}

impl ProtocolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::SpeechAssessment => "speech-assessment",
            ProtocolType::MotorCoordination => "motor-coordination",
            ProtocolType::SchoolFollowUp => "school-follow-up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProtocolType::SpeechAssessment => "Speech assessment",
            ProtocolType::MotorCoordination => "Motor coordination",
            ProtocolType::SchoolFollowUp => "School follow-up",
        }
    }

    /// Accepts both `speech-assessment` and `speech_assessment`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('_', "-").as_str() {
            "speech-assessment" => Some(ProtocolType::SpeechAssessment),
            "motor-coordination" => Some(ProtocolType::MotorCoordination),
            "school-follow-up" => Some(ProtocolType::SchoolFollowUp),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraftProtocol {
    pub id: String,
    pub protocol_type: ProtocolType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl SessionDraftProtocol {
    /// New entry with empty content.
    pub fn new(id: String, protocol_type: ProtocolType, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            protocol_type,
            content: String::new(),
            created_at,
        }
    }

    pub fn apply(&mut self, patch: ProtocolPatch) {
        if let Some(t) = patch.protocol_type {
            self.protocol_type = t;
        }
        if let Some(c) = patch.content {
            self.content = c;
        }
    }
}

/// Partial update for a protocol entry; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolPatch {
    pub protocol_type: Option<ProtocolType>,
    pub content: Option<String>,
}
