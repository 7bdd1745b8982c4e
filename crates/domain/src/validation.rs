// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::parse_clock;
use crate::error::DomainError;
use crate::types::{Match, MatchId, Player, PlayerId};
use std::collections::HashSet;
use time::Date;
use time::macros::format_description;

/// Validates that a match's basic field constraints are met.
///
/// This is an opt-in check for callers. The scheduling engine reads match
/// fields leniently and never calls it.
///
/// # Arguments
///
/// * `m` - The match to validate
///
/// # Errors
///
/// Returns an error if:
/// - The match id is empty
/// - The date is not a valid ISO `YYYY-MM-DD` calendar date
/// - The start time is not a valid `HH:MM` wall-clock time
/// - The duration is zero
pub fn validate_match_fields(m: &Match) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if m.id.value().trim().is_empty() {
        return Err(DomainError::InvalidMatchId(String::from(
            "Match id cannot be empty",
        )));
    }

    // Rule: date must be a real calendar date
    let iso_date = format_description!("[year]-[month]-[day]");
    Date::parse(&m.date, &iso_date).map_err(|e| DomainError::DateParseError {
        date_string: m.date.clone(),
        error: e.to_string(),
    })?;

    // Rule: start time must be a real wall-clock time
    parse_clock(&m.start_time)?;

    // Rule: duration must be positive
    if m.duration_minutes == 0 {
        return Err(DomainError::InvalidDuration {
            match_id: m.id.clone(),
            minutes: m.duration_minutes,
        });
    }

    Ok(())
}

/// Validates that a player's basic field constraints are met.
///
/// # Errors
///
/// Returns an error if the player id is empty.
pub fn validate_player_fields(player: &Player) -> Result<(), DomainError> {
    if player.id.value().trim().is_empty() {
        return Err(DomainError::InvalidPlayerId(String::from(
            "Player id cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that match identifiers are unique.
///
/// # Errors
///
/// Returns `DomainError::DuplicateMatchId` naming the first repeated id.
pub fn validate_match_ids_unique(matches: &[Match]) -> Result<(), DomainError> {
    let mut seen: HashSet<&MatchId> = HashSet::with_capacity(matches.len());
    for m in matches {
        if !seen.insert(&m.id) {
            return Err(DomainError::DuplicateMatchId(m.id.clone()));
        }
    }
    Ok(())
}

/// Validates that player identifiers are unique.
///
/// # Errors
///
/// Returns `DomainError::DuplicatePlayerId` naming the first repeated id.
pub fn validate_player_ids_unique(players: &[Player]) -> Result<(), DomainError> {
    let mut seen: HashSet<&PlayerId> = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(&player.id) {
            return Err(DomainError::DuplicatePlayerId(player.id.clone()));
        }
    }
    Ok(())
}
