pub mod credentials;

pub use credentials::DbCredentials;
