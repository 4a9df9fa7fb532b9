//! Matchday Back binary entrypoint wiring the REST API, storage supervision and tracing.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::{Context, bail};
use axum::Router;
use matchday_back::{
    config::AppConfig,
    dao::football_store::{FootballStore, memory::MemoryFootballStore},
    routes,
    state::{AppState, SharedState},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const STORAGE_BACKEND_ENV: &str = "STORAGE_BACKEND";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    if config.admin_token().is_none() {
        info!("no admin token configured; admin routes will reject every request");
    }
    let app_state = AppState::new(config);

    let backend = env::var(STORAGE_BACKEND_ENV).unwrap_or_else(|_| "mongo".into());
    match backend.trim().to_ascii_lowercase().as_str() {
        "memory" => {
            info!("using in-memory storage; data is lost on shutdown");
            let store: Arc<dyn FootballStore> = Arc::new(MemoryFootballStore::new());
            app_state.install_store(store).await;
        }
        "mongo" => spawn_mongo_supervisor(app_state.clone())?,
        other => bail!("unknown {STORAGE_BACKEND_ENV} `{other}` (expected `mongo` or `memory`)"),
    }

    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Keep a MongoDB-backed store installed, toggling degraded mode while it is unreachable.
#[cfg(feature = "mongo-store")]
fn spawn_mongo_supervisor(state: SharedState) -> anyhow::Result<()> {
    use matchday_back::{
        dao::{
            football_store::mongodb::{MongoConfig, MongoFootballStore},
            storage::StorageError,
        },
        services::storage_supervisor,
    };

    tokio::spawn(storage_supervisor::run(state, || async {
        let config = MongoConfig::from_env().await?;
        let store = MongoFootballStore::connect(config).await?;
        Ok::<_, StorageError>(Arc::new(store) as Arc<dyn FootballStore>)
    }));
    Ok(())
}

#[cfg(not(feature = "mongo-store"))]
fn spawn_mongo_supervisor(_state: SharedState) -> anyhow::Result<()> {
    bail!("this build has no MongoDB support; set {STORAGE_BACKEND_ENV}=memory")
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler; waiting for Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
