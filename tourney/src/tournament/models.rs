//! Tournament data models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament ID type
pub type TournamentId = String;

/// Room ID type
pub type RoomId = String;

/// Player ID type
pub type PlayerId = String;

/// Generate a fresh identifier (hyphenated UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// A scored participant seated in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
}

impl Player {
    /// Create a player with a fresh ID and a score of zero
    pub fn new(name: String) -> Self {
        Self {
            id: generate_id(),
            name,
            score: 0,
        }
    }
}

/// A group of players inside a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "roomId")]
    pub room_id: RoomId,
    pub players: Vec<Player>,
}

impl Room {
    /// Create an empty room with a fresh ID
    pub fn new() -> Self {
        Self {
            room_id: generate_id(),
            players: Vec::new(),
        }
    }

    /// Whether another player can be seated under the given capacity
    pub fn has_seat(&self, capacity: usize) -> bool {
        self.players.len() < capacity
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level tournament record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Empty until the winner is decided
    pub winner_name: String,
    pub is_ended: bool,
    pub rooms: Vec<Room>,
}

impl Tournament {
    /// Create an open tournament with a fresh ID and no rooms
    pub fn new(name: String) -> Self {
        Self {
            id: generate_id(),
            name,
            winner_name: String::new(),
            is_ended: false,
            rooms: Vec::new(),
        }
    }

    /// Whether any room still has a seated player
    pub fn has_seated_players(&self) -> bool {
        self.rooms.iter().any(|room| !room.players.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_uuid_v4() {
        let id = generate_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(generate_id(), id);
    }

    #[test]
    fn test_new_tournament_is_open_and_empty() {
        let tournament = Tournament::new("Spring Open".to_string());
        assert_eq!(tournament.name, "Spring Open");
        assert!(tournament.winner_name.is_empty());
        assert!(!tournament.is_ended);
        assert!(tournament.rooms.is_empty());
        assert!(!tournament.has_seated_players());
    }

    #[test]
    fn test_room_serializes_with_room_id_key() {
        let mut room = Room::new();
        room.room_id = "room-1".to_string();
        room.players.push(Player {
            id: "p-1".to_string(),
            name: "Ann".to_string(),
            score: -3,
        });

        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "roomId": "room-1",
                "players": [{"id": "p-1", "name": "Ann", "score": -3}]
            })
        );
    }

    #[test]
    fn test_room_has_seat() {
        let mut room = Room::new();
        assert!(room.has_seat(1));
        room.players.push(Player::new("Ann".to_string()));
        assert!(!room.has_seat(1));
        assert!(room.has_seat(4));
    }

    #[test]
    fn test_has_seated_players_spans_rooms() {
        let mut tournament = Tournament::new("Count".to_string());
        let mut first = Room::new();
        first.players.push(Player::new("A".to_string()));
        first.players.push(Player::new("B".to_string()));
        let mut second = Room::new();
        second.players.push(Player::new("C".to_string()));
        tournament.rooms = vec![Room::new(), first, second];
        assert!(tournament.has_seated_players());

        tournament.rooms.truncate(1);
        assert!(!tournament.has_seated_players());
    }
}
