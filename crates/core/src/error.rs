// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{DomainError, MatchId, PlayerId};

/// Errors reported by snapshot validation.
///
/// The engine operations are infallible; these only come from
/// [`crate::Snapshot::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A lineup references a match that is not in the snapshot.
    RosterForUnknownMatch(MatchId),
    /// A lineup references a player that is not in the snapshot.
    RosterWithUnknownPlayer {
        /// The match whose lineup is inconsistent.
        match_id: MatchId,
        /// The unknown player.
        player_id: PlayerId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RosterForUnknownMatch(match_id) => {
                write!(f, "Roster references unknown match '{match_id}'")
            }
            Self::RosterWithUnknownPlayer {
                match_id,
                player_id,
            } => {
                write!(
                    f,
                    "Roster for match '{match_id}' references unknown player '{player_id}'"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
