use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handlers::database::get_db_credentials;
use crate::service::SecretsManagerService;

pub const CREDENTIALS_PATH: &str = "/api/database/credentials";

#[derive(Clone)]
pub struct AppState {
    pub secrets: Arc<SecretsManagerService>,
}

impl AppState {
    pub fn new(secrets: SecretsManagerService) -> Self {
        Self {
            secrets: Arc::new(secrets),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(CREDENTIALS_PATH, get(get_db_credentials))
        .with_state(state)
}
