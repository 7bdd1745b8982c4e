// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::scope::ScopeFilter;
use matchday_domain::{
    Competition, Match, MatchId, Player, PlayerId, RosterEntry, validate_match_fields,
    validate_match_ids_unique, validate_player_fields, validate_player_ids_unique,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashSet};

/// `null` and missing collections both read as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An in-memory snapshot of the dashboard's data, supplied by the caller.
///
/// The engine never mutates a snapshot; every derived view is recomputed
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Active matches.
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<Match>,
    /// The full player population.
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
    /// Competitions, used to resolve match formats.
    #[serde(default, alias = "leagues", deserialize_with = "null_as_default")]
    pub competitions: Vec<Competition>,
    /// Selected lineups keyed by match.
    #[serde(default, alias = "matchRosters", deserialize_with = "null_as_default")]
    pub rosters: BTreeMap<MatchId, Vec<RosterEntry>>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: Vec::new(),
            players: Vec::new(),
            competitions: Vec::new(),
            rosters: BTreeMap::new(),
        }
    }

    /// Looks up a match by id.
    #[must_use]
    pub fn find_match(&self, match_id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == match_id)
    }

    /// Returns the selected lineup of a match; empty if none was recorded.
    #[must_use]
    pub fn roster_for(&self, match_id: &MatchId) -> &[RosterEntry] {
        self.rosters
            .get(match_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the subset of this snapshot admitted by a scope filter.
    #[must_use]
    pub fn scoped(&self, filter: &ScopeFilter) -> Self {
        filter.apply(self)
    }

    /// Validates every record and the references between them.
    ///
    /// Opt-in: the engine reads records leniently and never calls this.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    /// - An invalid match or player record
    /// - A duplicated match or player id
    /// - A lineup for a match that does not exist
    /// - A lineup naming a player that does not exist
    pub fn validate(&self) -> Result<(), CoreError> {
        for m in &self.matches {
            validate_match_fields(m)?;
        }
        for player in &self.players {
            validate_player_fields(player)?;
        }
        validate_match_ids_unique(&self.matches)?;
        validate_player_ids_unique(&self.players)?;

        let player_ids: HashSet<&PlayerId> = self.players.iter().map(|p| &p.id).collect();
        for (match_id, roster) in &self.rosters {
            if self.find_match(match_id).is_none() {
                return Err(CoreError::RosterForUnknownMatch(match_id.clone()));
            }
            if let Some(entry) = roster.iter().find(|e| !player_ids.contains(&e.player_id)) {
                return Err(CoreError::RosterWithUnknownPlayer {
                    match_id: match_id.clone(),
                    player_id: entry.player_id.clone(),
                });
            }
        }

        Ok(())
    }
}
