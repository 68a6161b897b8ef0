use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runtime configuration.
///
/// `region` and `secret_id` are fixed for the deployment (us-east-1,
/// `my-db-credentials`). Only the keys in [`ENV_KEYS`] can be overridden with a
/// `CREDGATE_`-prefixed environment variable, e.g. `CREDGATE_ENDPOINT_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub region: String,
    pub secret_id: String,
    /// Secrets Manager endpoint override, for local emulators.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            secret_id: "my-db-credentials".to_string(),
            endpoint_url: None,
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

/// Fields readable from `CREDGATE_*` environment variables.
pub const ENV_KEYS: &[&str] = &["endpoint_url", "listen_addr", "loglevel"];

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("CREDGATE_").only(ENV_KEYS))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("invalid CREDGATE_* configuration: {e}"))
});
