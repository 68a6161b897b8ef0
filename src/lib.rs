pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod shutdown;
pub mod types;

pub use error::CredgateError;
pub use service::SecretsManagerService;
pub use types::DbCredentials;
