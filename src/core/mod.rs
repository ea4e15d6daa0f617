pub mod backup;
pub mod elapsed;
pub mod evolution;
pub mod export;
pub mod files;
pub mod list;
pub mod log;
pub mod protocol;
pub mod resume;
pub mod session;
pub mod store;
pub mod ticker;
pub mod watch;

pub use elapsed::current_elapsed_seconds;
pub use store::{FileStore, open_store};
