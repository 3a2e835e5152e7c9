use axum::Router;
use simplesite_common::config::ListenUrl;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Serves `router` on every address that can be bound, until Ctrl-C.
///
/// Addresses that fail to bind are skipped. Fails if none can be bound.
pub async fn serve(router: Router, urls: &[ListenUrl]) -> anyhow::Result<()> {
    let mut servers = JoinSet::new();

    for url in urls {
        let listener = match TcpListener::bind(url.authority()).await {
            Ok(listener) => listener,
            Err(e) => {
                warn!(url = %url, error = %e, "could not bind listen address, skipping");
                continue;
            }
        };

        info!(url = %url, "listening");
        let app = router.clone();
        servers.spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        });
    }

    if servers.is_empty() {
        anyhow::bail!("none of the {} listen addresses could be bound", urls.len());
    }

    while let Some(result) = servers.join_next().await {
        result??;
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
