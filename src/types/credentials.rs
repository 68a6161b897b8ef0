use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CredgateError;

/// Database credentials as stored in the secret payload and returned to callers.
///
/// Extra keys in the payload are ignored on parse and never re-emitted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbCredentials {
    pub username: String,
    pub password: String,
    pub host: String,
}

impl DbCredentials {
    /// Parse a secret's string payload.
    pub fn from_secret_string(payload: &str) -> Result<Self, CredgateError> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}
