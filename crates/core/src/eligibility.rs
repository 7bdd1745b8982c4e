// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster eligibility.
//!
//! A player may be selected into a match's lineup when either:
//!
//! - their age group and level tags match the match's tags (a match tag of
//!   `"all"` admits any player tag), or
//! - they are enrolled in the match's competition, regardless of tags.
//!
//! The tag conjunction is evaluated as one unit and then OR'd with
//! competition membership:
//!
//! ```text
//! (group_admits AND level_admits) OR enrolled_in_competition
//! ```
//!
//! A player from another age group who is enrolled in the competition is
//! therefore eligible. The stricter reading,
//! `group_admits AND (level_admits OR enrolled)`, is not what this module
//! implements; see the tests pinning the current behaviour.

use matchday_domain::{Match, Player, selector_admits};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Why a player is eligible for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EligibilityReason {
    /// The player's group and level tags match the match's tags.
    TagMatch,
    /// The player is enrolled in the match's competition.
    CompetitionMember,
}

/// Returns why `player` may be selected for `m`, or `None` if they may not.
///
/// When both rules hold, `TagMatch` is reported.
#[must_use]
pub fn eligibility_reason(m: &Match, player: &Player) -> Option<EligibilityReason> {
    let tags_match: bool =
        selector_admits(&m.group, &player.group) && selector_admits(&m.level, &player.level);

    if tags_match {
        Some(EligibilityReason::TagMatch)
    } else if player.participates_in(&m.competition_id) {
        Some(EligibilityReason::CompetitionMember)
    } else {
        None
    }
}

/// Returns whether `player` may be selected for `m`.
#[must_use]
pub fn is_player_eligible(m: &Match, player: &Player) -> bool {
    eligibility_reason(m, player).is_some()
}

/// Returns the players eligible for a match's lineup.
///
/// # Arguments
///
/// * `m` - The match being staffed
/// * `players` - The full player population
///
/// # Returns
///
/// The eligible players in roster order. Empty, not an error, when no
/// player qualifies. Inputs are not modified.
#[must_use]
pub fn resolve_eligible_players<'a>(m: &Match, players: &'a [Player]) -> Vec<&'a Player> {
    let eligible: Vec<&Player> = players
        .iter()
        .filter(|player| is_player_eligible(m, player))
        .collect();

    debug!(
        match_id = %m.id,
        candidates = players.len(),
        eligible = eligible.len(),
        "Resolved roster eligibility"
    );

    eligible
}
