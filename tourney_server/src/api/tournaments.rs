//! Tournament management API handlers.
//!
//! Each handler resolves identifiers from the path, parses the JSON body where
//! one is expected, calls into the [`TournamentManager`](tourney::TournamentManager)
//! and maps the outcome to a status code and JSON payload.
//!
//! # Examples
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:5000/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Friday Night"}'
//! ```
//!
//! Set a player's score:
//! ```bash
//! curl -X PUT http://localhost:5000/tournaments/T/rooms/R/players/P/score \
//!   -H "Content-Type: application/json" \
//!   -d '{"score": 42}'
//! ```

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tourney::{ErrorKind, Player, Room, Tournament, TournamentError, tournament::validation};

use super::{
    AppState,
    extract::{ApiPath, JsonBody},
    request_id::RequestId,
};
use crate::{logging, metrics};

#[derive(Debug, Default, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddPlayerRequest {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditScoreRequest {
    pub score: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TournamentCreatedResponse {
    pub message: String,
    pub tournament: Tournament,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub message: String,
    pub room: Room,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub message: String,
    pub player: Player,
}

#[derive(Debug, Serialize)]
pub struct EndTournamentResponse {
    pub message: String,
    pub winner: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Map a store error to its response, logging the detailed form
fn reject(operation: &'static str, err: TournamentError) -> ApiError {
    logging::log_store_rejection(operation, &err);
    metrics::tournament_operation(operation, false);

    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.client_message(),
        }),
    )
}

/// List all tournaments.
///
/// Winners of ended tournaments are settled before the list is returned.
///
/// # Errors
///
/// - `500 Internal Server Error`: No tournaments exist
pub async fn list_tournaments(State(state): State<AppState>) -> ApiResult<Vec<Tournament>> {
    let tournaments = state
        .tournament_manager
        .list_all()
        .await
        .map_err(|e| reject("list_all", e))?;

    metrics::tournament_operation("list_all", true);
    Ok(Json(tournaments))
}

/// Get a single tournament.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
pub async fn get_tournament(
    State(state): State<AppState>,
    ApiPath(tournament_id): ApiPath<String>,
) -> ApiResult<Tournament> {
    let tournament = state
        .tournament_manager
        .get_by_id(&tournament_id)
        .await
        .map_err(|e| reject("get_by_id", e))?;

    metrics::tournament_operation("get_by_id", true);
    Ok(Json(tournament))
}

/// Create a new tournament.
///
/// # Request Body
///
/// ```json
/// {"name": "Friday Night"}
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Tournament created successfully!",
///   "tournament": {"id": "…", "name": "Friday Night", "winner_name": "", "is_ended": false, "rooms": []}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: First schema violation, e.g. `"name" is required`
pub async fn create_tournament(
    State(state): State<AppState>,
    request_id: RequestId,
    JsonBody(request): JsonBody<CreateTournamentRequest>,
) -> ApiResult<TournamentCreatedResponse> {
    let tournament = state
        .tournament_manager
        .create(request.name)
        .await
        .map_err(|e| reject("create", e))?;

    tracing::info!(
        request_id = %request_id.as_str(),
        tournament_id = %tournament.id,
        "Tournament created"
    );
    metrics::tournament_operation("create", true);
    metrics::tournaments_active(state.tournament_manager.tournament_count().await);

    Ok(Json(TournamentCreatedResponse {
        message: "Tournament created successfully!".to_string(),
        tournament,
    }))
}

/// Add an empty room to a tournament.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
/// - `400 Bad Request`: Tournament has ended
pub async fn add_room(
    State(state): State<AppState>,
    ApiPath(tournament_id): ApiPath<String>,
) -> ApiResult<RoomResponse> {
    let room = state
        .tournament_manager
        .add_room(&tournament_id)
        .await
        .map_err(|e| reject("add_room", e))?;

    metrics::tournament_operation("add_room", true);
    Ok(Json(RoomResponse {
        message: "Room added successfully!".to_string(),
        room,
    }))
}

/// Seat a player in a room.
///
/// # Request Body
///
/// ```json
/// {"name": "Alice"}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Tournament or room doesn't exist
/// - `400 Bad Request`: Tournament has ended, room is full, or name is missing
pub async fn add_player(
    State(state): State<AppState>,
    ApiPath((tournament_id, room_id)): ApiPath<(String, String)>,
    JsonBody(request): JsonBody<AddPlayerRequest>,
) -> ApiResult<PlayerResponse> {
    let player = state
        .tournament_manager
        .add_player(&tournament_id, &room_id, request.name)
        .await
        .map_err(|e| reject("add_player", e))?;

    metrics::tournament_operation("add_player", true);
    Ok(Json(PlayerResponse {
        message: "Player added successfully!".to_string(),
        player,
    }))
}

/// Overwrite a player's score.
///
/// Scores stay editable after the tournament has ended.
///
/// # Request Body
///
/// ```json
/// {"score": 42}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Tournament, room or player doesn't exist
/// - `400 Bad Request`: Score missing or not an integer
pub async fn edit_player_score(
    State(state): State<AppState>,
    ApiPath((tournament_id, room_id, player_id)): ApiPath<(String, String, String)>,
    JsonBody(request): JsonBody<EditScoreRequest>,
) -> ApiResult<PlayerResponse> {
    let score =
        validation::required("score", request.score).map_err(|e| reject("set_score", e))?;

    let player = state
        .tournament_manager
        .set_player_score(&tournament_id, &room_id, &player_id, score)
        .await
        .map_err(|e| reject("set_score", e))?;

    metrics::tournament_operation("set_score", true);
    Ok(Json(PlayerResponse {
        message: "Player score updated successfully!".to_string(),
        player,
    }))
}

/// End a tournament and announce the winner.
///
/// Repeating the call on an ended tournament returns the recorded winner.
///
/// # Response
///
/// ```json
/// {"message": "Tournament ended successfully!", "winner": "Draw between A and B"}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
/// - `400 Bad Request`: Rooms still occupied (only when configured to require empty rooms)
pub async fn end_tournament(
    State(state): State<AppState>,
    ApiPath(tournament_id): ApiPath<String>,
) -> ApiResult<EndTournamentResponse> {
    let outcome = state
        .tournament_manager
        .end_tournament(&tournament_id)
        .await
        .map_err(|e| reject("end", e))?;

    metrics::tournament_operation("end", true);
    let text = if outcome.already_ended {
        "Tournament has already ended."
    } else {
        "Tournament ended successfully!"
    };

    Ok(Json(EndTournamentResponse {
        message: text.to_string(),
        winner: outcome.winner,
    }))
}

/// Delete a room from a tournament.
///
/// # Errors
///
/// - `404 Not Found`: Tournament or room doesn't exist
pub async fn delete_room(
    State(state): State<AppState>,
    ApiPath((tournament_id, room_id)): ApiPath<(String, String)>,
) -> ApiResult<MessageResponse> {
    state
        .tournament_manager
        .delete_room(&tournament_id, &room_id)
        .await
        .map_err(|e| reject("delete_room", e))?;

    metrics::tournament_operation("delete_room", true);
    Ok(Json(MessageResponse {
        message: "Room deleted successfully!".to_string(),
    }))
}

/// Delete a player from a room.
///
/// # Errors
///
/// - `404 Not Found`: Tournament, room or player doesn't exist
pub async fn delete_player(
    State(state): State<AppState>,
    ApiPath((tournament_id, room_id, player_id)): ApiPath<(String, String, String)>,
) -> ApiResult<MessageResponse> {
    state
        .tournament_manager
        .delete_player(&tournament_id, &room_id, &player_id)
        .await
        .map_err(|e| reject("delete_player", e))?;

    metrics::tournament_operation("delete_player", true);
    Ok(Json(MessageResponse {
        message: "Player deleted successfully!".to_string(),
    }))
}

/// Delete a tournament.
///
/// # Errors
///
/// - `404 Not Found`: Tournament doesn't exist
pub async fn delete_tournament(
    State(state): State<AppState>,
    ApiPath(tournament_id): ApiPath<String>,
) -> ApiResult<MessageResponse> {
    state
        .tournament_manager
        .delete_tournament(&tournament_id)
        .await
        .map_err(|e| reject("delete_tournament", e))?;

    metrics::tournament_operation("delete_tournament", true);
    metrics::tournaments_active(state.tournament_manager.tournament_count().await);

    Ok(Json(MessageResponse {
        message: "Tournament deleted successfully!".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_status_mapping() {
        let (status, Json(body)) = reject("get_by_id", TournamentError::TournamentNotFound("t".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Tournament not found!");

        let (status, _) = reject("add_room", TournamentError::TournamentEnded("t".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, Json(body)) = reject("list_all", TournamentError::NoTournaments);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal Server Error!");
    }
}
