//! Tournament rooms server.
//!
//! Serves the in-memory tournament store over HTTP.

use std::net::SocketAddr;

use anyhow::Error;
use pico_args::Arguments;
use tourney::{TournamentManager, TournamentStore, demo};
use tourney_server::{api, config::ServerConfig, logging, metrics};

const HELP: &str = "\
Run the tournament rooms server

USAGE:
  tourney_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address    [default: env SERVER_BIND or 127.0.0.1:5000]
  --metrics-bind  IP:PORT  Prometheus scrape address     [default: env METRICS_BIND, disabled if unset]

FLAGS:
  --seed-demo              Load the demo tournament on startup
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND                Server bind address (e.g., 0.0.0.0:8080)
  METRICS_BIND               Prometheus exporter address
  SEED_DEMO                  Load the demo tournament (true/false)
  ROOM_MAX_PLAYERS           Players allowed per room [default: 4]
  END_REQUIRES_EMPTY_ROOMS   Refuse to end tournaments with seated players (true/false)
  RUST_LOG                   Log filter (e.g., info,tourney=debug)
";

struct Args {
    bind: Option<SocketAddr>,
    metrics_bind: Option<SocketAddr>,
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        seed_demo: pargs.contains("--seed-demo"),
        bind: pargs.opt_value_from_str("--bind")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.metrics_bind, args.seed_demo)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(|e| anyhow::anyhow!(e))?;
        tracing::info!("Metrics exporter listening on {}", addr);
    }

    let seed = if config.seed_demo {
        demo::sample_tournaments()
    } else {
        Vec::new()
    };
    let store = TournamentStore::with_tournaments(config.store, seed);
    tracing::info!(
        "Store ready: {} tournament(s), {} players per room, end policy {}",
        store.len(),
        config.store.max_players_per_room,
        config.store.end_policy
    );
    metrics::tournaments_active(store.len());

    let state = api::AppState {
        tournament_manager: TournamentManager::from_store(store),
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    tracing::info!("Server is started on {}. Press Ctrl+C to stop.", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
