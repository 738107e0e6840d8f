//! # IGF Catalog Binary
//!
//! The entry point that assembles the application from the store backend
//! selected at compile time (cargo features) and at run time (`STORE`).

use std::sync::Arc;

use anyhow::Context;
use igf_api::AppState;
use igf_config::{Settings, StoreBackend};
use igf_core::DocumentStore;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Feature-gated imports: only the compiled-in backends can be selected
#[cfg(feature = "store-mongo")]
use igf_store_mongo::MongoGameStore;

#[cfg(feature = "store-memory")]
use igf_store_memory::MemoryGameStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // 1. Load settings from the environment
    let settings = Settings::load()?;

    // 2. Initialize the store implementation
    let store = build_store(&settings).await?;
    info!(backend = %settings.store, "Store ready");

    // 3. Wrap in AppState and build the router
    let app = igf_api::router(Arc::new(AppState::new(store)));

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("🎮 IGF catalog starting on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// `RUST_LOG` drives filtering; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn build_store(settings: &Settings) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match settings.store {
        #[cfg(feature = "store-mongo")]
        StoreBackend::Mongo => {
            use secrecy::ExposeSecret;

            let mongo = settings
                .mongo
                .as_ref()
                .context("MongoDB settings missing")?;
            let store = MongoGameStore::connect(
                mongo.uri.expose_secret(),
                &mongo.database,
                &mongo.collection,
            )
            .await
            .context("failed to connect to MongoDB")?;
            Ok(Arc::new(store))
        }
        #[cfg(feature = "store-memory")]
        StoreBackend::Memory => {
            warn!("Using the in-memory store: games are lost on restart");
            Ok(Arc::new(MemoryGameStore::new()))
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("store backend {other} is not compiled into this binary"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
