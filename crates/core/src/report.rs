// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-snapshot evaluation.
//!
//! Combines conflict detection, roster eligibility and squad assessment into
//! one annotation per match. The report is **computed**, not stored: it is a
//! pure function of the snapshot and is rebuilt on every change.

use crate::conflict::{ConflictRecord, MatchConflicts, detect_conflicts};
use crate::eligibility::resolve_eligible_players;
use crate::scope::ScopeFilter;
use crate::snapshot::Snapshot;
use crate::squad::{SquadAssessment, assess_squad, resolve_match_format};
use matchday_domain::{Match, MatchId, Player, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the dashboard shows next to a single match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnnotation {
    /// The annotated match.
    pub match_id: MatchId,
    /// Conflict classification; `none` with empty lists when conflict-free.
    pub conflict: ConflictRecord,
    /// Players eligible for the lineup, in roster order.
    pub eligible_player_ids: Vec<PlayerId>,
    /// Lineup size against the format requirement.
    pub squad: SquadAssessment,
}

/// The annotations of every match in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    /// Conflict map; conflict-free matches are absent.
    pub conflicts: MatchConflicts,
    /// One annotation per match, in snapshot order.
    pub matches: Vec<MatchAnnotation>,
}

impl ScheduleReport {
    /// Returns the annotation of a match.
    #[must_use]
    pub fn annotation(&self, match_id: &MatchId) -> Option<&MatchAnnotation> {
        self.matches.iter().find(|a| &a.match_id == match_id)
    }

    /// Returns the matches whose lineup is smaller than their format needs.
    pub fn under_strength(&self) -> impl Iterator<Item = &MatchAnnotation> {
        self.matches.iter().filter(|a| a.squad.is_under_strength())
    }
}

/// Annotates a single match against a snapshot and a precomputed conflict map.
///
/// # Arguments
///
/// * `m` - The match to annotate
/// * `snapshot` - Supplies competitions and rosters
/// * `players` - The population lineup candidates are drawn from
/// * `conflicts` - The conflict map of the match list `m` belongs to
#[must_use]
pub fn annotate_match(
    m: &Match,
    snapshot: &Snapshot,
    players: &[Player],
    conflicts: &MatchConflicts,
) -> MatchAnnotation {
    let eligible_player_ids: Vec<PlayerId> = resolve_eligible_players(m, players)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();
    let format = resolve_match_format(m, &snapshot.competitions);

    MatchAnnotation {
        match_id: m.id.clone(),
        conflict: conflicts.get(&m.id).cloned().unwrap_or_default(),
        eligible_player_ids,
        squad: assess_squad(format, snapshot.roster_for(&m.id).len()),
    }
}

fn evaluate_matches(snapshot: &Snapshot, players: &[Player]) -> ScheduleReport {
    let conflicts: MatchConflicts = detect_conflicts(&snapshot.matches);
    let matches: Vec<MatchAnnotation> = snapshot
        .matches
        .iter()
        .map(|m| annotate_match(m, snapshot, players, &conflicts))
        .collect();

    let report = ScheduleReport { conflicts, matches };
    info!(
        matches = report.matches.len(),
        candidates = players.len(),
        conflicted = report.conflicts.len(),
        under_strength = report.under_strength().count(),
        "Evaluated schedule snapshot"
    );
    report
}

/// Evaluates a whole snapshot.
///
/// # Arguments
///
/// * `snapshot` - The caller's current data
///
/// # Returns
///
/// A report holding the conflict map and one annotation per match.
#[must_use]
pub fn evaluate_snapshot(snapshot: &Snapshot) -> ScheduleReport {
    evaluate_matches(snapshot, &snapshot.players)
}

/// Evaluates the matches admitted by a scope filter.
///
/// Conflicts are detected among the scoped matches only. Lineup candidates
/// are still drawn from the full player population, so a player enrolled in
/// a match's competition stays eligible even when their own tags, or the
/// competition's, fall outside the scope.
#[must_use]
pub fn evaluate_in_scope(snapshot: &Snapshot, filter: &ScopeFilter) -> ScheduleReport {
    let scoped: Snapshot = snapshot.scoped(filter);
    evaluate_matches(&scoped, &snapshot.players)
}
