use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{telemetry, Config, MongoStore, SharedStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    let config = Config::load().context("failed to load configuration")?;

    let store = MongoStore::connect(&config.mongodb_url)
        .await
        .context("failed to connect to MongoDB")?;
    tracing::info!("connected to MongoDB");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    let shared: SharedStore = Arc::new(store.clone());
    todo_server::run(listener, shared, shutdown_signal()).await?;

    store.shutdown().await;
    tracing::info!("disconnected from MongoDB");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down");
}
