use axum::{Json, extract::State};

use crate::error::CredgateError;
use crate::router::AppState;
use crate::types::DbCredentials;

/// GET /api/database/credentials -> the configured secret as JSON, or 404.
pub async fn get_db_credentials(
    State(state): State<AppState>,
) -> Result<Json<DbCredentials>, CredgateError> {
    let credentials = state
        .secrets
        .fetch()
        .await
        .ok_or(CredgateError::Unavailable)?;
    Ok(Json(credentials))
}
