//! Winner calculation.
//!
//! Every player of every room is scanned once, rooms in order and players in
//! seating order. The highest score wins; players sharing the highest score
//! produce a draw listing them in scan order.

use super::models::Room;
use std::fmt;

/// Score a player must beat to enter the running
const SCORE_FLOOR: i64 = -1;

/// Final standing of a tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standing {
    /// Exactly one player holds the top score
    Winner(String),
    /// Zero or several players hold the top score
    Draw(Vec<String>),
}

impl Standing {
    /// Decide the standing over all rooms
    pub fn decide(rooms: &[Room]) -> Self {
        let mut max_score = SCORE_FLOOR;
        let mut leaders: Vec<&str> = Vec::new();

        for player in rooms.iter().flat_map(|room| room.players.iter()) {
            if player.score > max_score {
                max_score = player.score;
                leaders.clear();
                leaders.push(&player.name);
            } else if player.score == max_score {
                leaders.push(&player.name);
            }
        }

        if leaders.len() == 1 {
            Standing::Winner(leaders[0].to_string())
        } else {
            Standing::Draw(leaders.into_iter().map(str::to_string).collect())
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standing::Winner(name) => write!(f, "{name}"),
            Standing::Draw(names) => write!(f, "Draw between {}", names.join(" and ")),
        }
    }
}

/// Announce the winner of the given rooms
///
/// A draw between nobody (no players, or every score below the floor)
/// renders as `"Draw between "`.
pub fn calculate_winner(rooms: &[Room]) -> String {
    Standing::decide(rooms).to_string()
}
