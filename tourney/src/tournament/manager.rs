//! Tournament manager shared across request handlers.

use super::{
    config::StoreConfig,
    errors::TournamentResult,
    models::{Player, Room, Tournament},
    store::{EndOutcome, TournamentStore},
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tournament manager
///
/// Owns the single [`TournamentStore`] behind one coarse lock. Every
/// operation, reads included, holds the write guard for its whole duration
/// because reads may settle the winner of an ended tournament.
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<RwLock<TournamentStore>>,
}

impl TournamentManager {
    /// Create a manager over an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self::from_store(TournamentStore::new(config))
    }

    /// Create a manager over an existing store
    pub fn from_store(store: TournamentStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Number of tournaments currently held
    pub async fn tournament_count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Store configuration
    pub async fn config(&self) -> StoreConfig {
        *self.store.read().await.config()
    }

    /// List all tournaments
    pub async fn list_all(&self) -> TournamentResult<Vec<Tournament>> {
        self.store.write().await.list_all()
    }

    /// Get a tournament by ID
    pub async fn get_by_id(&self, tournament_id: &str) -> TournamentResult<Tournament> {
        self.store.write().await.get_by_id(tournament_id)
    }

    /// Create a tournament
    pub async fn create(&self, name: Option<String>) -> TournamentResult<Tournament> {
        self.store.write().await.create(name)
    }

    /// Add a room to a tournament
    pub async fn add_room(&self, tournament_id: &str) -> TournamentResult<Room> {
        self.store.write().await.add_room(tournament_id)
    }

    /// Add a player to a room
    pub async fn add_player(
        &self,
        tournament_id: &str,
        room_id: &str,
        name: Option<String>,
    ) -> TournamentResult<Player> {
        self.store
            .write()
            .await
            .add_player(tournament_id, room_id, name)
    }

    /// Set a player's score
    pub async fn set_player_score(
        &self,
        tournament_id: &str,
        room_id: &str,
        player_id: &str,
        score: i64,
    ) -> TournamentResult<Player> {
        self.store
            .write()
            .await
            .set_player_score(tournament_id, room_id, player_id, score)
    }

    /// End a tournament
    pub async fn end_tournament(&self, tournament_id: &str) -> TournamentResult<EndOutcome> {
        self.store.write().await.end_tournament(tournament_id)
    }

    /// Delete a room
    pub async fn delete_room(&self, tournament_id: &str, room_id: &str) -> TournamentResult<()> {
        self.store.write().await.delete_room(tournament_id, room_id)
    }

    /// Delete a player
    pub async fn delete_player(
        &self,
        tournament_id: &str,
        room_id: &str,
        player_id: &str,
    ) -> TournamentResult<()> {
        self.store
            .write()
            .await
            .delete_player(tournament_id, room_id, player_id)
    }

    /// Delete a tournament
    pub async fn delete_tournament(&self, tournament_id: &str) -> TournamentResult<()> {
        self.store.write().await.delete_tournament(tournament_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let manager = TournamentManager::new(StoreConfig::default());
        let other = manager.clone();

        let tournament = manager.create(Some("Shared".to_string())).await.unwrap();
        assert_eq!(other.tournament_count().await, 1);
        assert_eq!(other.get_by_id(&tournament.id).await.unwrap(), tournament);
    }

    #[tokio::test]
    async fn test_concurrent_joins_respect_capacity() {
        let manager = TournamentManager::new(StoreConfig::default());
        let tournament = manager.create(Some("Rush".to_string())).await.unwrap();
        let room = manager.add_room(&tournament.id).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let manager = manager.clone();
            let tournament_id = tournament.id.clone();
            let room_id = room.room_id.clone();
            handles.push(tokio::spawn(async move {
                manager
                    .add_player(&tournament_id, &room_id, Some(format!("P{i}")))
                    .await
            }));
        }

        let mut seated = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                seated += 1;
            }
        }

        assert_eq!(seated, 4);
        let stored = manager.get_by_id(&tournament.id).await.unwrap();
        assert_eq!(stored.rooms[0].players.len(), 4);
    }
}
