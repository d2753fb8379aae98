//! # Tourney
//!
//! In-memory tournament bookkeeping: tournaments own rooms, rooms own up to
//! four players, and ending a tournament announces the player (or players)
//! holding the highest score.
//!
//! ## Core Modules
//!
//! - [`tournament`]: data model, schema validation, winner calculation and the
//!   [`TournamentStore`] with its async [`TournamentManager`] facade
//!
//! ## Example
//!
//! ```
//! use tourney::{StoreConfig, TournamentStore};
//!
//! let mut store = TournamentStore::new(StoreConfig::default());
//! let tournament = store.create(Some("Friday Night".to_string())).unwrap();
//! let room = store.add_room(&tournament.id).unwrap();
//! let alice = store
//!     .add_player(&tournament.id, &room.room_id, Some("Alice".to_string()))
//!     .unwrap();
//! store
//!     .set_player_score(&tournament.id, &room.room_id, &alice.id, 42)
//!     .unwrap();
//!
//! let outcome = store.end_tournament(&tournament.id).unwrap();
//! assert_eq!(outcome.winner, "Alice");
//! ```

/// Tournaments, rooms, players and the store that owns them.
pub mod tournament;
pub use tournament::{
    EndOutcome, EndPolicy, ErrorKind, Player, PlayerId, Room, RoomId, Standing, StoreConfig,
    Tournament, TournamentError, TournamentId, TournamentManager, TournamentResult,
    TournamentStore, calculate_winner, demo, generate_id,
};
