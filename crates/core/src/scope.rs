// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Global group/level scoping of a snapshot.
//!
//! This is the dashboard's "currently viewing" selector, applied by callers
//! before they hand matches and players to the engine. The engine functions
//! themselves never filter.
//!
//! A selector narrows in two stages, group first and then level. Each stage:
//!
//! - keeps the competitions whose tag equals the selector
//! - keeps the matches whose own tag equals the selector, or whose
//!   competition was kept
//! - keeps the players whose own tag equals the selector, or who take part
//!   in any kept competition
//!
//! A selector of `"all"` skips its stage.

use crate::snapshot::Snapshot;
use matchday_domain::{ALL_TAG, Competition, CompetitionId, Match, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// The tag a scoping stage compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Group,
    Level,
}

impl Tag {
    fn of_competition(self, c: &Competition) -> &str {
        match self {
            Self::Group => &c.group,
            Self::Level => &c.level,
        }
    }

    fn of_match(self, m: &Match) -> &str {
        match self {
            Self::Group => &m.group,
            Self::Level => &m.level,
        }
    }

    fn of_player(self, p: &Player) -> &str {
        match self {
            Self::Group => &p.group,
            Self::Level => &p.level,
        }
    }
}

/// Group and level selectors. `"all"` means unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeFilter {
    /// Age group selector.
    pub group: String,
    /// Level selector.
    pub level: String,
}

impl Default for ScopeFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl ScopeFilter {
    /// Creates a filter from explicit selectors.
    #[must_use]
    pub fn new(group: &str, level: &str) -> Self {
        Self {
            group: group.to_string(),
            level: level.to_string(),
        }
    }

    /// Creates an unrestricted filter.
    #[must_use]
    pub fn all() -> Self {
        Self::new(ALL_TAG, ALL_TAG)
    }

    /// Returns whether this filter admits everything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.group == ALL_TAG && self.level == ALL_TAG
    }

    /// Applies the filter, returning the admitted subset of the snapshot.
    ///
    /// Record order is preserved. Lineups are kept only for admitted matches.
    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> Snapshot {
        let mut scoped: Snapshot = snapshot.clone();
        if self.group != ALL_TAG {
            narrow(&mut scoped, Tag::Group, &self.group);
        }
        if self.level != ALL_TAG {
            narrow(&mut scoped, Tag::Level, &self.level);
        }

        let kept: HashSet<_> = scoped.matches.iter().map(|m| m.id.clone()).collect();
        scoped.rosters.retain(|match_id, _| kept.contains(match_id));

        debug!(
            group = %self.group,
            level = %self.level,
            matches = scoped.matches.len(),
            players = scoped.players.len(),
            competitions = scoped.competitions.len(),
            "Applied scope filter"
        );

        scoped
    }
}

fn narrow(snapshot: &mut Snapshot, tag: Tag, selector: &str) {
    snapshot
        .competitions
        .retain(|c| tag.of_competition(c) == selector);
    let competition_ids: HashSet<CompetitionId> = snapshot
        .competitions
        .iter()
        .map(|c| c.id.clone())
        .collect();

    snapshot.matches.retain(|m| {
        tag.of_match(m) == selector || competition_ids.contains(&m.competition_id)
    });
    snapshot.players.retain(|p| {
        tag.of_player(p) == selector
            || p
                .participating_competition_ids
                .iter()
                .any(|id| competition_ids.contains(id))
    });
}
