//! Store configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Players a room can hold unless configured otherwise
pub const DEFAULT_MAX_PLAYERS_PER_ROOM: usize = 4;

/// Rule applied when ending a tournament that is still open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndPolicy {
    /// End regardless of who is still seated
    #[default]
    AllowOccupiedRooms,
    /// Refuse to end while any room has players
    RequireEmptyRooms,
}

impl fmt::Display for EndPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndPolicy::AllowOccupiedRooms => write!(f, "allow_occupied_rooms"),
            EndPolicy::RequireEmptyRooms => write!(f, "require_empty_rooms"),
        }
    }
}

/// Tunables for a [`TournamentStore`](super::TournamentStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum players per room
    pub max_players_per_room: usize,
    /// Ending rule
    pub end_policy: EndPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_players_per_room: DEFAULT_MAX_PLAYERS_PER_ROOM,
            end_policy: EndPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_players_per_room == 0 {
            return Err("Room capacity must be at least 1".to_string());
        }

        Ok(())
    }
}
