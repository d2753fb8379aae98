//! Tournament error types.

use super::models::{PlayerId, RoomId, TournamentId};
use thiserror::Error;

/// Broad classification used to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An identifier did not resolve
    NotFound,
    /// A state or shape precondition was violated
    Conflict,
    /// Unexpected failure
    Internal,
}

/// Tournament errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Tournament {0} has ended")]
    TournamentEnded(TournamentId),

    #[error("Room {room_id} is full ({capacity} players)")]
    RoomFull { room_id: RoomId, capacity: usize },

    #[error("Tournament {0} still has seated players")]
    RoomsOccupied(TournamentId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No tournaments found")]
    NoTournaments,
}

impl TournamentError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::TournamentNotFound(_)
            | TournamentError::RoomNotFound(_)
            | TournamentError::PlayerNotFound(_) => ErrorKind::NotFound,
            TournamentError::TournamentEnded(_)
            | TournamentError::RoomFull { .. }
            | TournamentError::RoomsOccupied(_)
            | TournamentError::Validation(_) => ErrorKind::Conflict,
            TournamentError::NoTournaments => ErrorKind::Internal,
        }
    }

    /// Get a client-safe error message
    ///
    /// Identifiers are left out and internal failures collapse to a generic
    /// message.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::TournamentNotFound(_) => "Tournament not found!".to_string(),
            TournamentError::RoomNotFound(_) => "Room not found!".to_string(),
            TournamentError::PlayerNotFound(_) => "Player not found!".to_string(),
            TournamentError::TournamentEnded(_) => {
                "Tournament has ended. No further modifications allowed.".to_string()
            }
            TournamentError::RoomFull { .. } => "Room is full. Add a new room first.".to_string(),
            TournamentError::RoomsOccupied(_) => {
                "Tournament still has players in its rooms. Remove them before ending.".to_string()
            }
            TournamentError::Validation(message) => message.clone(),
            TournamentError::NoTournaments => "Internal Server Error!".to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
