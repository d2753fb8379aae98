//! Schema checks for tournament records and request fields.
//!
//! Rules are applied in field order and only the first violation is reported,
//! as `"<path>" <rule>`.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Player, Room, Tournament};
use uuid::Uuid;

/// Require a present, non-empty string field
pub fn required_string(field: &str, value: Option<String>) -> TournamentResult<String> {
    match value {
        None => Err(violation(field, "is required")),
        Some(value) if value.is_empty() => Err(violation(field, "is not allowed to be empty")),
        Some(value) => Ok(value),
    }
}

/// Require a present value
pub fn required<T>(field: &str, value: Option<T>) -> TournamentResult<T> {
    value.ok_or_else(|| violation(field, "is required"))
}

/// Validate a complete tournament record
pub fn validate_tournament(tournament: &Tournament, room_capacity: usize) -> TournamentResult<()> {
    check_guid("id", &tournament.id)?;
    check_non_empty("name", &tournament.name)?;

    for (index, room) in tournament.rooms.iter().enumerate() {
        validate_room(&format!("rooms[{index}]"), room, room_capacity)?;
    }

    Ok(())
}

fn validate_room(path: &str, room: &Room, capacity: usize) -> TournamentResult<()> {
    check_guid(&format!("{path}.roomId"), &room.room_id)?;

    if room.players.len() > capacity {
        return Err(violation(
            &format!("{path}.players"),
            &format!("must contain less than or equal to {capacity} items"),
        ));
    }

    for (index, player) in room.players.iter().enumerate() {
        validate_player(&format!("{path}.players[{index}]"), player)?;
    }

    Ok(())
}

fn validate_player(path: &str, player: &Player) -> TournamentResult<()> {
    check_guid(&format!("{path}.id"), &player.id)?;
    check_non_empty(&format!("{path}.name"), &player.name)
}

fn check_guid(field: &str, value: &str) -> TournamentResult<()> {
    match Uuid::parse_str(value) {
        Ok(uuid) if uuid.get_version_num() == 4 => Ok(()),
        _ => Err(violation(field, "must be a valid GUID")),
    }
}

fn check_non_empty(field: &str, value: &str) -> TournamentResult<()> {
    if value.is_empty() {
        return Err(violation(field, "is not allowed to be empty"));
    }
    Ok(())
}

fn violation(field: &str, rule: &str) -> TournamentError {
    TournamentError::Validation(format!("\"{field}\" {rule}"))
}
