use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::CredgateError;
use crate::types::DbCredentials;

/// A backend that resolves a secret identifier to its string payload.
///
/// `Ok(None)` means the store answered but the secret carries no string value.
#[async_trait]
pub trait SecretSource: Send + Sync {
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, CredgateError>;
}

/// AWS Secrets Manager backed source.
#[derive(Clone, Debug)]
pub struct AwsSecretsManager {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsManager {
    pub fn new(client: aws_sdk_secretsmanager::Client) -> Self {
        Self { client }
    }

    /// Build a region-scoped client from the ambient AWS credential chain.
    pub async fn from_config(cfg: &Config) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(cfg.region.clone()));
        if let Some(url) = cfg.endpoint_url.as_deref() {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;
        Self::new(aws_sdk_secretsmanager::Client::new(&sdk_config))
    }
}

#[async_trait]
impl SecretSource for AwsSecretsManager {
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, CredgateError> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| CredgateError::SecretStore(DisplayErrorContext(&e).to_string()))?;
        Ok(resp.secret_string)
    }
}

/// Fetches the configured database secret on every call.
pub struct SecretsManagerService {
    source: Arc<dyn SecretSource>,
    secret_id: String,
}

impl SecretsManagerService {
    pub fn new(source: Arc<dyn SecretSource>, secret_id: impl Into<String>) -> Self {
        Self {
            source,
            secret_id: secret_id.into(),
        }
    }

    /// Returns `None` on any failure; the cause is logged once and not propagated.
    pub async fn fetch(&self) -> Option<DbCredentials> {
        self.try_fetch()
            .await
            .inspect_err(|e| {
                error!(secret_id = %self.secret_id, error = %e, "error retrieving secret");
            })
            .ok()
    }

    async fn try_fetch(&self) -> Result<DbCredentials, CredgateError> {
        let payload = self
            .source
            .get_secret_string(&self.secret_id)
            .await?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CredgateError::EmptySecret {
                secret_id: self.secret_id.clone(),
            })?;
        let creds = DbCredentials::from_secret_string(&payload)?;
        debug!(secret_id = %self.secret_id, host = %creds.host, "secret retrieved");
        Ok(creds)
    }
}
