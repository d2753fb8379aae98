//! Demo data loaded on request at startup.

use super::models::{Player, Room, Tournament};

fn player(id: &str, name: &str, score: i64) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        score,
    }
}

/// One ended tournament with two full rooms and an undecided winner
pub fn sample_tournaments() -> Vec<Tournament> {
    vec![Tournament {
        id: "tournament_id_1".to_string(),
        name: "Test Tournament".to_string(),
        winner_name: String::new(),
        is_ended: true,
        rooms: vec![
            Room {
                room_id: "room_id_1".to_string(),
                players: vec![
                    player("room1_player1_id", "Room1_Player1", 20),
                    player("room1_player2_id", "Room1_Player2", 15),
                    player("room1_player3_id", "Room1_Player3", 35),
                    player("room1_player4_id", "Room1_Player4", 17),
                ],
            },
            Room {
                room_id: "room_id_2".to_string(),
                players: vec![
                    player("room2_player1_id", "Room2_Player1", 22),
                    player("room2_player2_id", "Room2_Player2", 35),
                    player("room2_player3_id", "Room2_Player3", 33),
                    player("room2_player4_id", "Room2_Player4", 7),
                ],
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::calculate_winner;

    #[test]
    fn test_sample_is_ended_without_winner() {
        let sample = sample_tournaments();
        assert_eq!(sample.len(), 1);
        assert!(sample[0].is_ended);
        assert!(sample[0].winner_name.is_empty());
        let seated: usize = sample[0].rooms.iter().map(|room| room.players.len()).sum();
        assert_eq!(seated, 8);
    }

    #[test]
    fn test_sample_winner_is_a_draw() {
        let sample = sample_tournaments();
        assert_eq!(
            calculate_winner(&sample[0].rooms),
            "Draw between Room1_Player3 and Room2_Player2"
        );
    }
}
