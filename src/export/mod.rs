pub mod fs_utils;
pub mod json;

pub use json::{DraftExport, ExportedDraft};
