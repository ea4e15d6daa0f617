use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Anamnesis,
    Report,
    Protocol,
    #[default]
    Other,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Anamnesis => "anamnesis",
            FileCategory::Report => "report",
            FileCategory::Protocol => "protocol",
            FileCategory::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "anamnesis" => Some(FileCategory::Anamnesis),
            "report" => Some(FileCategory::Report),
            "protocol" => Some(FileCategory::Protocol),
            "other" => Some(FileCategory::Other),
            _ => None,
        }
    }
}

/// Raw file handed over by the caller (file picker, CLI path, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub size_bytes: u64,
    pub category: Option<FileCategory>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            category: None,
        }
    }

    pub fn with_category(mut self, category: FileCategory) -> Self {
        self.category = Some(category);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraftFile {
    pub id: String,
    pub file_name: String,
    pub category: FileCategory,
    pub size_kb: u64,
    pub created_at: DateTime<Utc>,
}

impl SessionDraftFile {
    /// Normalize an upload into stored metadata.
    pub fn from_upload(id: String, upload: FileUpload, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            file_name: upload.file_name,
            category: upload.category.unwrap_or_default(),
            size_kb: size_to_kb(upload.size_bytes),
            created_at,
        }
    }
}

/// Bytes → KB, rounded to nearest; non-empty files never show as 0 KB.
pub fn size_to_kb(size_bytes: u64) -> u64 {
    if size_bytes == 0 {
        return 0;
    }
    ((size_bytes + 512) / 1024).max(1)
}
