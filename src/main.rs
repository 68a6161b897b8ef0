use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use credgate::CredgateError;
use credgate::service::{AwsSecretsManager, SecretsManagerService};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), CredgateError> {
    dotenvy::dotenv().ok();

    let cfg = &credgate::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        region = %cfg.region,
        secret_id = %cfg.secret_id,
        endpoint_url = %cfg.endpoint_url.as_deref().unwrap_or("<default>"),
        loglevel = %cfg.loglevel,
    );

    // One SDK client for the whole process; it is shared by every request.
    let source = AwsSecretsManager::from_config(cfg).await;
    let secrets = SecretsManagerService::new(Arc::new(source), cfg.secret_id.clone());

    let state = credgate::router::AppState::new(secrets);
    let app = credgate::router::app_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(credgate::shutdown::shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
