//! Integration tests for the tournament lifecycle
//!
//! These tests drive the shared manager from creation through scoring,
//! ending and cleanup.

use tourney::{
    EndPolicy, ErrorKind, StoreConfig, TournamentError, TournamentManager, TournamentStore, demo,
};

async fn create_with_room(manager: &TournamentManager, name: &str) -> (String, String) {
    let tournament = manager.create(Some(name.to_string())).await.unwrap();
    let room = manager.add_room(&tournament.id).await.unwrap();
    (tournament.id, room.room_id)
}

#[tokio::test]
async fn test_full_tournament_lifecycle() {
    let manager = TournamentManager::new(StoreConfig::default());
    let (tournament_id, first_room) = create_with_room(&manager, "League Night").await;
    let second_room = manager.add_room(&tournament_id).await.unwrap().room_id;

    let scores = [
        (&first_room, "Ann", 12),
        (&first_room, "Ben", 30),
        (&second_room, "Cid", 30),
        (&second_room, "Dee", 4),
    ];
    for (room_id, name, score) in scores {
        let player = manager
            .add_player(&tournament_id, room_id, Some(name.to_string()))
            .await
            .unwrap();
        manager
            .set_player_score(&tournament_id, room_id, &player.id, score)
            .await
            .unwrap();
    }

    let outcome = manager.end_tournament(&tournament_id).await.unwrap();
    assert_eq!(outcome.winner, "Draw between Ben and Cid");
    assert!(!outcome.already_ended);

    let again = manager.end_tournament(&tournament_id).await.unwrap();
    assert_eq!(again.winner, outcome.winner);
    assert!(again.already_ended);

    let err = manager.add_room(&tournament_id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    manager.delete_tournament(&tournament_id).await.unwrap();
    assert_eq!(
        manager.list_all().await.unwrap_err(),
        TournamentError::NoTournaments
    );
}

#[tokio::test]
async fn test_ended_tournament_refuses_new_players() {
    let manager = TournamentManager::new(StoreConfig::default());
    let (tournament_id, room_id) = create_with_room(&manager, "Closed").await;
    manager.end_tournament(&tournament_id).await.unwrap();

    let err = manager
        .add_player(&tournament_id, &room_id, Some("Late".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err, TournamentError::TournamentEnded(tournament_id.clone()));
    assert_eq!(
        err.client_message(),
        "Tournament has ended. No further modifications allowed."
    );
}

#[tokio::test]
async fn test_custom_room_capacity() {
    let config = StoreConfig {
        max_players_per_room: 2,
        end_policy: EndPolicy::AllowOccupiedRooms,
    };
    let manager = TournamentManager::new(config);
    let (tournament_id, room_id) = create_with_room(&manager, "Pairs").await;

    for name in ["A", "B"] {
        manager
            .add_player(&tournament_id, &room_id, Some(name.to_string()))
            .await
            .unwrap();
    }
    let err = manager
        .add_player(&tournament_id, &room_id, Some("C".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.client_message(), "Room is full. Add a new room first.");
}

#[tokio::test]
async fn test_demo_seed_settles_winner_on_first_read() {
    let store = TournamentStore::with_tournaments(StoreConfig::default(), demo::sample_tournaments());
    let manager = TournamentManager::from_store(store);

    let listed = manager.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0].winner_name,
        "Draw between Room1_Player3 and Room2_Player2"
    );

    // Scores edited after the winner is recorded do not change it
    manager
        .set_player_score("tournament_id_1", "room_id_1", "room1_player1_id", 500)
        .await
        .unwrap();
    let fetched = manager.get_by_id("tournament_id_1").await.unwrap();
    assert_eq!(
        fetched.winner_name,
        "Draw between Room1_Player3 and Room2_Player2"
    );
}

#[tokio::test]
async fn test_not_found_chain() {
    let manager = TournamentManager::new(StoreConfig::default());
    let (tournament_id, room_id) = create_with_room(&manager, "Chain").await;

    let cases = [
        manager.delete_player("nope", &room_id, "p").await,
        manager.delete_player(&tournament_id, "nope", "p").await,
        manager.delete_player(&tournament_id, &room_id, "p").await,
    ];
    let expected = [
        TournamentError::TournamentNotFound("nope".to_string()),
        TournamentError::RoomNotFound("nope".to_string()),
        TournamentError::PlayerNotFound("p".to_string()),
    ];

    for (result, expected) in cases.into_iter().zip(expected) {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err, expected);
    }
}
