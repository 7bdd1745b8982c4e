// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use matchday_domain::{Competition, Match, MatchFormat};
use serde::{Deserialize, Serialize};

/// Lineup size compared with what the match's format requires.
///
/// Advisory only: an under-strength lineup is flagged, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadAssessment {
    /// The format the requirement comes from.
    pub format: MatchFormat,
    /// Players the format requires. 0 means no requirement applies.
    pub required: u32,
    /// Players currently selected.
    pub selected: u32,
    /// Players missing to reach `required`.
    pub shortfall: u32,
    /// Whether `shortfall` is non-zero.
    #[serde(rename = "isUnderStrength")]
    under_strength: bool,
}

impl SquadAssessment {
    /// Returns whether the lineup is smaller than the format requires.
    #[must_use]
    pub const fn is_under_strength(&self) -> bool {
        self.under_strength
    }
}

/// Compares a lineup size against a format's requirement.
#[must_use]
pub fn assess_squad(format: MatchFormat, selected: usize) -> SquadAssessment {
    let required: u32 = format.required_squad_size();
    let selected: u32 = u32::try_from(selected).unwrap_or(u32::MAX);
    let shortfall: u32 = required.saturating_sub(selected);
    SquadAssessment {
        format,
        required,
        selected,
        shortfall,
        under_strength: shortfall > 0,
    }
}

/// Resolves a match's format through its competition.
///
/// A match whose competition is unknown has an `Unspecified` format.
#[must_use]
pub fn resolve_match_format(m: &Match, competitions: &[Competition]) -> MatchFormat {
    competitions
        .iter()
        .find(|c| c.id == m.competition_id)
        .map_or(MatchFormat::Unspecified, |c| c.format)
}
