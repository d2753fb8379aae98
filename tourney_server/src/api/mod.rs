//! HTTP API for the tournament server.
//!
//! # Modules
//!
//! - [`tournaments`]: tournament, room and player handlers
//! - [`extract`]: path and body extractors with JSON rejections
//! - [`request_id`]: request correlation and per-request metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET    /tournaments                                                  - List tournaments
//! POST   /tournaments                                                  - Create tournament
//! GET    /tournaments/{tournament_id}                                  - Get tournament
//! DELETE /tournaments/{tournament_id}                                  - Delete tournament
//! POST   /tournaments/{tournament_id}/rooms                            - Add room
//! DELETE /tournaments/{tournament_id}/rooms/{room_id}                  - Delete room
//! POST   /tournaments/{tournament_id}/rooms/{room_id}/players          - Add player
//! DELETE /tournaments/{tournament_id}/rooms/{room_id}/players/{player_id}
//! PUT    /tournaments/{tournament_id}/rooms/{room_id}/players/{player_id}/score
//! PUT    /tournaments/{tournament_id}/end                              - End tournament
//! GET    /health                                                       - Health check
//! ```
//!
//! Errors are always returned as `{"error": "<message>"}`.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use tourney::{StoreConfig, TournamentManager};
//! use tourney_server::api::{AppState, create_router};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     tournament_manager: TournamentManager::new(StoreConfig::default()),
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
};
use serde_json::json;
use tourney::TournamentManager;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub tournament_manager: TournamentManager,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let tournament_routes = Router::new()
        .route(
            "/tournaments",
            get(tournaments::list_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/tournaments/{tournament_id}",
            get(tournaments::get_tournament).delete(tournaments::delete_tournament),
        )
        .route("/tournaments/{tournament_id}/rooms", post(tournaments::add_room))
        .route(
            "/tournaments/{tournament_id}/rooms/{room_id}",
            delete(tournaments::delete_room),
        )
        .route(
            "/tournaments/{tournament_id}/rooms/{room_id}/players",
            post(tournaments::add_player),
        )
        .route(
            "/tournaments/{tournament_id}/rooms/{room_id}/players/{player_id}",
            delete(tournaments::delete_player),
        )
        .route(
            "/tournaments/{tournament_id}/rooms/{room_id}/players/{player_id}/score",
            put(tournaments::edit_player_score),
        )
        .route("/tournaments/{tournament_id}/end", put(tournaments::end_tournament));

    Router::new()
        .route("/health", get(health_check))
        .merge(tournament_routes)
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// ```bash
/// curl http://localhost:5000/health
/// # {"status":"healthy","version":"1.0.0","tournaments":1,"room_capacity":4,
/// #  "end_policy":"allow_occupied_rooms","timestamp":"2026-01-01T10:30:00+00:00"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.tournament_manager.tournament_count().await;
    let config = state.tournament_manager.config().await;
    crate::metrics::tournaments_active(count);

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "tournaments": count,
        "room_capacity": config.max_players_per_room,
        "end_policy": config.end_policy.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found!" })),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed!" })),
    )
}
