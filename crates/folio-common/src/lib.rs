pub mod errors;
pub mod id;

pub use errors::{ConfigError, FolioError};
pub use id::{new_id, SessionId};
