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

mod conflict;
mod eligibility;
mod error;
mod report;
mod scope;
mod snapshot;
mod squad;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use conflict::{ConflictKind, ConflictRecord, MatchConflicts, classify_pair, detect_conflicts};
pub use eligibility::{
    EligibilityReason, eligibility_reason, is_player_eligible, resolve_eligible_players,
};
pub use error::CoreError;
pub use matchday_domain::required_squad_size;
pub use report::{
    MatchAnnotation, ScheduleReport, annotate_match, evaluate_in_scope, evaluate_snapshot,
};
pub use scope::ScopeFilter;
pub use snapshot::Snapshot;
pub use squad::{SquadAssessment, assess_squad, resolve_match_format};
