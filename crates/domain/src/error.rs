// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{MatchId, PlayerId};

/// Errors that can occur during domain validation.
///
/// The scheduling engine itself never produces these. They come from the
/// strict parsers and from the opt-in record validation helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A match identifier is empty.
    InvalidMatchId(String),
    /// A player identifier is empty.
    InvalidPlayerId(String),
    /// Two matches share the same identifier.
    DuplicateMatchId(MatchId),
    /// Two players share the same identifier.
    DuplicatePlayerId(PlayerId),
    /// Failed to parse a calendar date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a wall-clock start time from string.
    InvalidStartTime {
        /// The invalid time string.
        time_string: String,
        /// Description of the validation error.
        reason: String,
    },
    /// Match duration must be positive.
    InvalidDuration {
        /// The match the duration belongs to.
        match_id: MatchId,
        /// The invalid duration value.
        minutes: u32,
    },
    /// The competition format label is not one of the known formats.
    UnknownFormat(String),
    /// The conflict classification label is not recognized.
    UnknownConflictKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMatchId(msg) => write!(f, "Invalid match id: {msg}"),
            Self::InvalidPlayerId(msg) => write!(f, "Invalid player id: {msg}"),
            Self::DuplicateMatchId(id) => {
                write!(f, "Match with id '{}' appears more than once", id.value())
            }
            Self::DuplicatePlayerId(id) => {
                write!(f, "Player with id '{}' appears more than once", id.value())
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStartTime {
                time_string,
                reason,
            } => {
                write!(f, "Invalid start time '{time_string}': {reason}")
            }
            Self::InvalidDuration { match_id, minutes } => {
                write!(
                    f,
                    "Invalid duration for match '{}': {minutes} minutes. Must be greater than 0",
                    match_id.value()
                )
            }
            Self::UnknownFormat(label) => write!(f, "Unknown match format: '{label}'"),
            Self::UnknownConflictKind(label) => {
                write!(f, "Unknown conflict kind: '{label}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
