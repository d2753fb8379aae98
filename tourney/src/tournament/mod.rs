//! Tournament module for room-based score tournaments.
//!
//! This module provides:
//! - The tournament → room → player data model
//! - Schema validation of freshly built records
//! - Winner calculation over every room of a tournament
//! - The in-memory [`TournamentStore`] and its lock-guarded [`TournamentManager`]
//!
//! ## Example
//!
//! ```
//! use tourney::tournament::{StoreConfig, TournamentManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = TournamentManager::new(StoreConfig::default());
//!
//!     let tournament = manager.create(Some("Sunday Cup".to_string())).await?;
//!     let room = manager.add_room(&tournament.id).await?;
//!     manager
//!         .add_player(&tournament.id, &room.room_id, Some("Bob".to_string()))
//!         .await?;
//!
//!     let outcome = manager.end_tournament(&tournament.id).await?;
//!     println!("Winner: {}", outcome.winner);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod demo;
pub mod errors;
pub mod manager;
pub mod models;
pub mod store;
pub mod validation;
pub mod winner;

pub use config::{DEFAULT_MAX_PLAYERS_PER_ROOM, EndPolicy, StoreConfig};
pub use errors::{ErrorKind, TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{Player, PlayerId, Room, RoomId, Tournament, TournamentId, generate_id};
pub use store::{EndOutcome, TournamentStore};
pub use winner::{Standing, calculate_winner};
