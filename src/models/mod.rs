pub mod draft;
pub mod evolution;
pub mod file;
pub mod protocol;
pub mod session_type;

pub use draft::{DraftPatch, SessionDraft, SessionState};
pub use evolution::EvolutionStatus;
pub use file::{FileCategory, FileUpload, SessionDraftFile};
pub use protocol::{ProtocolPatch, ProtocolType, SessionDraftProtocol};
pub use session_type::SessionType;
