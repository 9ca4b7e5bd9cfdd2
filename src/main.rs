//! Bistro Client — headless session shell for the restaurant backend.
//!
//! Wires the session core, REST client, routing guard inputs, and the
//! realtime channel together, then keeps the session fresh until
//! shutdown.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use bistro_api::{ApiClient, AuthClient};
use bistro_core::config::AppConfig;
use bistro_core::error::AppError;
use bistro_realtime::RealtimeChannel;
use bistro_realtime::message::{EVENT_NEW_ORDER, EVENT_PAYMENT, EVENT_UPDATE_ORDER};
use bistro_session::{Credentials, RefreshCoordinator, RefreshLoop, TokenStore};

mod shell;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BISTRO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main client run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bistro client v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Session core ─────────────────────────────────────
    let store = Arc::new(TokenStore::with_default_sinks());
    let backend = Arc::new(AuthClient::new(&config.api)?);
    let coordinator = Arc::new(RefreshCoordinator::new(
        Arc::clone(&store),
        Arc::clone(&backend) as Arc<dyn bistro_session::AuthBackend>,
    ));
    let api = Arc::new(ApiClient::new(
        &config.api,
        Arc::clone(&store),
        Arc::clone(&coordinator),
    )?);

    // ── Step 2: Establish a session from the environment ─────────
    if let (Ok(email), Ok(password)) = (
        std::env::var("BISTRO_EMAIL"),
        std::env::var("BISTRO_PASSWORD"),
    ) {
        use bistro_session::AuthBackend;

        let pair = backend.login(&Credentials { email, password }).await?;
        store
            .set_tokens(&pair.access_token, &pair.refresh_token)
            .map_err(AppError::from)?;

        let account = api.me().await?;
        tracing::info!(account = account.id, role = %account.role.as_str(), "Session established");
    } else {
        tracing::info!("No credentials in environment; starting unauthenticated");
    }

    for item in shell::visible_items(&store.session_state()) {
        tracing::debug!(label = item.label, href = item.href, "Nav item visible");
    }

    // ── Step 3: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 4: Background refresh loop ──────────────────────────
    let refresh_loop = RefreshLoop::new(Arc::clone(&coordinator), config.session.clone());
    let loop_shutdown = shutdown_rx.clone();
    let refresh_handle = tokio::spawn(async move {
        refresh_loop
            .run(loop_shutdown, |err| {
                tracing::warn!(error = %err, "Session ended by refresh loop");
            })
            .await;
    });

    // ── Step 5: Realtime channel ─────────────────────────────────
    let channel = match store.access() {
        Some(access) => match RealtimeChannel::connect(&config.realtime, &access).await {
            Ok(channel) => {
                spawn_event_logger(&channel, EVENT_NEW_ORDER);
                spawn_event_logger(&channel, EVENT_UPDATE_ORDER);
                spawn_event_logger(&channel, EVENT_PAYMENT);
                Some(channel)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Realtime channel unavailable; continuing without it");
                None
            }
        },
        None => None,
    };

    // ── Step 6: Wait for shutdown ────────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
    let _ = shutdown_tx.send(true);

    if let Some(channel) = channel {
        channel.close();
    }
    shell::logout(&store, backend.as_ref()).await?;

    let _ = tokio::time::timeout(std::time::Duration::from_secs(10), refresh_handle).await;

    tracing::info!("Bistro client shut down gracefully");
    Ok(())
}

/// Log every event on a named realtime stream.
fn spawn_event_logger(channel: &RealtimeChannel, event: &'static str) {
    let mut receiver = channel.subscribe(event);
    tokio::spawn(async move {
        while let Ok(domain_event) = receiver.recv().await {
            tracing::info!(event, payload = ?domain_event.payload, "Realtime event");
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
