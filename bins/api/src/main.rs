//! Adelanta backend API: config, telemetry, seeded store, axum server.

use std::net::SocketAddr;

use anyhow::Result;

use adelanta_api::AppState;
use adelanta_config::AppConfig;
use adelanta_store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    adelanta_telemetry::init()?;

    let mut store = Store::new(&config);
    if config.seed_demo {
        store.seed_demo_data();
        tracing::info!("demo data seeded");
    }

    let app = adelanta_api::router(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, advance_bps = config.advance_bps, "adelanta backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(%err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received, draining");
}
