pub mod errors;
pub mod id;

pub use errors::{BridgeError, ConfigError, PlayerError};
pub use id::WindowIdentity;

pub type Result<T> = std::result::Result<T, PlayerError>;
