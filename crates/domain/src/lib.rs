// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod clock;
mod error;
mod format;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{TimeInterval, minutes_since_midnight, parse_clock};
pub use error::DomainError;
pub use format::{MatchFormat, required_squad_size};

// Re-export public types
pub use types::{
    ALL_TAG, Competition, CompetitionId, Match, MatchId, Player, PlayerId, PlayerMatchStats,
    RosterEntry, selector_admits,
};
pub use validation::{
    validate_match_fields, validate_match_ids_unique, validate_player_fields,
    validate_player_ids_unique,
};
