//! # scoreboardd — live scoreboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` from the configured filter
//! - Construct the match store and event bus (adapters)
//! - Construct the scoreboard service, injecting them via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use scoreboard_adapter_http_axum::state::AppState;
use scoreboard_adapter_storage_memory::InMemoryMatchStore;
use scoreboard_app::event_bus::InProcessEventBus;
use scoreboard_app::services::scoreboard_service::ScoreboardService;
use scoreboard_domain::event::ScoreboardEvent;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Store
    let store = InMemoryMatchStore::new();

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(config.scoreboard.event_bus_capacity));
    tokio::spawn(log_events(event_bus.subscribe()));

    // Services
    let scoreboard_service = ScoreboardService::new(store, Arc::clone(&event_bus))
        .with_name_policy(config.scoreboard.team_name_policy);

    // HTTP
    let app = scoreboard_adapter_http_axum::router::build(AppState::new(scoreboard_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        team_name_policy = %config.scoreboard.team_name_policy,
        "scoreboardd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("scoreboardd stopped");
    Ok(())
}

async fn log_events(mut events: broadcast::Receiver<ScoreboardEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                let game = event.game();
                tracing::info!(
                    event = event.name(),
                    home_team = game.home_team(),
                    away_team = game.away_team(),
                    home_score = game.home_score(),
                    away_score = game.away_score(),
                    "scoreboard event"
                );
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event logger lagged behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
