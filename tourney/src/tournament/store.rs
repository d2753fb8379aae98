//! In-memory tournament store.
//!
//! Tournaments are kept in creation order. Every lookup is a linear scan by
//! exact identifier, resolved tournament → room → player, and fails with the
//! not-found error of the first level that does not resolve.

use super::config::{EndPolicy, StoreConfig};
use super::errors::{TournamentError, TournamentResult};
use super::models::{Player, Room, Tournament};
use super::validation;
use super::winner::calculate_winner;

/// Result of ending a tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOutcome {
    /// Winner announcement
    pub winner: String,
    /// The tournament had already been ended before this call
    pub already_ended: bool,
}

/// Ordered, in-memory collection of tournaments
#[derive(Debug, Clone, Default)]
pub struct TournamentStore {
    config: StoreConfig,
    tournaments: Vec<Tournament>,
}

impl TournamentStore {
    /// Create an empty store
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            tournaments: Vec::new(),
        }
    }

    /// Create a store holding the given records, in order
    pub fn with_tournaments(config: StoreConfig, tournaments: Vec<Tournament>) -> Self {
        Self {
            config,
            tournaments,
        }
    }

    /// Store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of tournaments
    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    /// Whether the store holds no tournaments
    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// List every tournament, settling the winner of ended ones
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::NoTournaments`] when the store is empty.
    pub fn list_all(&mut self) -> TournamentResult<Vec<Tournament>> {
        if self.tournaments.is_empty() {
            return Err(TournamentError::NoTournaments);
        }

        for tournament in &mut self.tournaments {
            settle_winner(tournament);
        }

        Ok(self.tournaments.clone())
    }

    /// Get one tournament, settling its winner if it has ended
    pub fn get_by_id(&mut self, tournament_id: &str) -> TournamentResult<Tournament> {
        let tournament = self.tournament_mut(tournament_id)?;
        settle_winner(tournament);
        Ok(tournament.clone())
    }

    /// Create a tournament and append it to the store
    ///
    /// The new record is validated before insertion; the first schema
    /// violation is returned as [`TournamentError::Validation`].
    pub fn create(&mut self, name: Option<String>) -> TournamentResult<Tournament> {
        let name = validation::required_string("name", name)?;
        let tournament = Tournament::new(name);
        validation::validate_tournament(&tournament, self.config.max_players_per_room)?;

        log::info!("Created tournament {} ({})", tournament.id, tournament.name);
        self.tournaments.push(tournament.clone());
        Ok(tournament)
    }

    /// Add an empty room to an open tournament
    pub fn add_room(&mut self, tournament_id: &str) -> TournamentResult<Room> {
        let tournament = self.tournament_mut(tournament_id)?;
        ensure_open(tournament)?;

        let room = Room::new();
        tournament.rooms.push(room.clone());
        log::debug!("Added room {} to tournament {}", room.room_id, tournament_id);
        Ok(room)
    }

    /// Seat a new player in a room of an open tournament
    pub fn add_player(
        &mut self,
        tournament_id: &str,
        room_id: &str,
        name: Option<String>,
    ) -> TournamentResult<Player> {
        let capacity = self.config.max_players_per_room;
        let tournament = self.tournament_mut(tournament_id)?;
        ensure_open(tournament)?;

        let room = room_mut(tournament, room_id)?;
        if !room.has_seat(capacity) {
            return Err(TournamentError::RoomFull {
                room_id: room.room_id.clone(),
                capacity,
            });
        }

        let player = Player::new(validation::required_string("name", name)?);
        room.players.push(player.clone());
        log::debug!("Seated player {} in room {}", player.id, room_id);
        Ok(player)
    }

    /// Overwrite a player's score
    ///
    /// Scores stay editable after the tournament has ended.
    pub fn set_player_score(
        &mut self,
        tournament_id: &str,
        room_id: &str,
        player_id: &str,
        score: i64,
    ) -> TournamentResult<Player> {
        let tournament = self.tournament_mut(tournament_id)?;
        let room = room_mut(tournament, room_id)?;
        let player = room
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))?;

        player.score = score;
        Ok(player.clone())
    }

    /// End a tournament and announce its winner
    ///
    /// Ending an ended tournament changes nothing and reports the recorded
    /// winner again (computing it first if it was never settled).
    pub fn end_tournament(&mut self, tournament_id: &str) -> TournamentResult<EndOutcome> {
        let policy = self.config.end_policy;
        let tournament = self.tournament_mut(tournament_id)?;

        if tournament.is_ended {
            settle_winner(tournament);
            return Ok(EndOutcome {
                winner: tournament.winner_name.clone(),
                already_ended: true,
            });
        }

        if policy == EndPolicy::RequireEmptyRooms && tournament.has_seated_players() {
            return Err(TournamentError::RoomsOccupied(tournament.id.clone()));
        }

        tournament.winner_name = calculate_winner(&tournament.rooms);
        tournament.is_ended = true;
        log::info!(
            "Tournament {} ended, winner: {}",
            tournament.id,
            tournament.winner_name
        );

        Ok(EndOutcome {
            winner: tournament.winner_name.clone(),
            already_ended: false,
        })
    }

    /// Remove a room from a tournament
    pub fn delete_room(&mut self, tournament_id: &str, room_id: &str) -> TournamentResult<()> {
        let tournament = self.tournament_mut(tournament_id)?;
        let index = room_index(tournament, room_id)?;
        tournament.rooms.remove(index);
        Ok(())
    }

    /// Remove a player from a room
    pub fn delete_player(
        &mut self,
        tournament_id: &str,
        room_id: &str,
        player_id: &str,
    ) -> TournamentResult<()> {
        let tournament = self.tournament_mut(tournament_id)?;
        let room = room_mut(tournament, room_id)?;
        let index = room
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))?;

        room.players.remove(index);
        Ok(())
    }

    /// Remove a tournament
    pub fn delete_tournament(&mut self, tournament_id: &str) -> TournamentResult<()> {
        let index = self
            .tournaments
            .iter()
            .position(|t| t.id == tournament_id)
            .ok_or_else(|| TournamentError::TournamentNotFound(tournament_id.to_string()))?;

        let removed = self.tournaments.remove(index);
        log::info!("Deleted tournament {} ({})", removed.id, removed.name);
        Ok(())
    }

    fn tournament_mut(&mut self, tournament_id: &str) -> TournamentResult<&mut Tournament> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == tournament_id)
            .ok_or_else(|| TournamentError::TournamentNotFound(tournament_id.to_string()))
    }
}

fn room_mut<'a>(tournament: &'a mut Tournament, room_id: &str) -> TournamentResult<&'a mut Room> {
    tournament
        .rooms
        .iter_mut()
        .find(|r| r.room_id == room_id)
        .ok_or_else(|| TournamentError::RoomNotFound(room_id.to_string()))
}

fn room_index(tournament: &Tournament, room_id: &str) -> TournamentResult<usize> {
    tournament
        .rooms
        .iter()
        .position(|r| r.room_id == room_id)
        .ok_or_else(|| TournamentError::RoomNotFound(room_id.to_string()))
}

fn ensure_open(tournament: &Tournament) -> TournamentResult<()> {
    if tournament.is_ended {
        return Err(TournamentError::TournamentEnded(tournament.id.clone()));
    }
    Ok(())
}

/// Fill in the winner of an ended tournament that has none yet
fn settle_winner(tournament: &mut Tournament) {
    if tournament.is_ended && tournament.winner_name.is_empty() {
        tournament.winner_name = calculate_winner(&tournament.rooms);
    }
}
