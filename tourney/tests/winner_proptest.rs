/// Property-based tests for winner calculation and room capacity using proptest
///
/// These tests check the announcement format and the seating limit across
/// randomly generated rooms and join attempts.
use proptest::prelude::*;
use tourney::{Player, Room, Standing, StoreConfig, TournamentStore, calculate_winner};

// Strategy to generate a player with a short name and a non-negative score
fn player_strategy() -> impl Strategy<Value = Player> {
    ("[A-Z][a-z]{0,5}", 0i64..50).prop_map(|(name, score)| Player {
        id: format!("id-{name}-{score}"),
        name,
        score,
    })
}

// Strategy to generate a room of up to four players
fn room_strategy() -> impl Strategy<Value = Room> {
    prop::collection::vec(player_strategy(), 0..=4).prop_map(|players| Room {
        room_id: "room".to_string(),
        players,
    })
}

fn rooms_strategy() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::vec(room_strategy(), 0..6)
}

proptest! {
    #[test]
    fn test_winner_holds_top_score(rooms in rooms_strategy()) {
        let players: Vec<&Player> = rooms.iter().flat_map(|r| r.players.iter()).collect();
        let top = players.iter().map(|p| p.score).max();

        match Standing::decide(&rooms) {
            Standing::Winner(name) => {
                let top = top.unwrap();
                let leaders: Vec<&&Player> = players.iter().filter(|p| p.score == top).collect();
                prop_assert_eq!(leaders.len(), 1);
                prop_assert_eq!(&leaders[0].name, &name);
            }
            Standing::Draw(names) => {
                let expected: Vec<String> = match top {
                    Some(top) => players
                        .iter()
                        .filter(|p| p.score == top)
                        .map(|p| p.name.clone())
                        .collect(),
                    None => Vec::new(),
                };
                prop_assert_ne!(expected.len(), 1);
                prop_assert_eq!(names, expected);
            }
        }
    }

    #[test]
    fn test_calculate_winner_is_deterministic(rooms in rooms_strategy()) {
        prop_assert_eq!(calculate_winner(&rooms), calculate_winner(&rooms));
    }

    #[test]
    fn test_draw_announcement_format(rooms in rooms_strategy()) {
        let announcement = calculate_winner(&rooms);
        if let Standing::Draw(names) = Standing::decide(&rooms) {
            prop_assert!(announcement.starts_with("Draw between "));
            prop_assert!(!announcement.contains(','));
            prop_assert_eq!(announcement, format!("Draw between {}", names.join(" and ")));
        }
    }

    #[test]
    fn test_room_never_exceeds_capacity(attempts in 0usize..20) {
        let mut store = TournamentStore::new(StoreConfig::default());
        let tournament = store.create(Some("Prop".to_string())).unwrap();
        let room = store.add_room(&tournament.id).unwrap();

        let mut seated = 0;
        for i in 0..attempts {
            if store
                .add_player(&tournament.id, &room.room_id, Some(format!("P{i}")))
                .is_ok()
            {
                seated += 1;
            }
        }

        prop_assert_eq!(seated, attempts.min(4));
        let stored = store.get_by_id(&tournament.id).unwrap();
        prop_assert!(stored.rooms[0].players.len() <= 4);
    }
}
