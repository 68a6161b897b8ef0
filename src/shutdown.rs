use std::future::{Future, pending};
use tracing::{info, warn};

/// Resolves on Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    wait_for_shutdown(tokio::signal::ctrl_c(), terminate).await
}

/// Waits for whichever signal fires first. A Ctrl-C listener that fails to
/// install never resolves, so the server keeps running until `terminate`.
pub async fn wait_for_shutdown<C, T>(ctrl_c: C, terminate: T)
where
    C: Future<Output = std::io::Result<()>>,
    T: Future<Output = ()>,
{
    let ctrl_c = async {
        if let Err(e) = ctrl_c.await {
            warn!(error = %e, "failed to install Ctrl-C handler");
            pending::<()>().await
        }
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
