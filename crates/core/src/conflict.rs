// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match-scheduling conflict detection.
//!
//! Every match is classified against every other match in the same list:
//!
//! - `overlap`: it shares a date with at least one match whose time
//!   interval intersects its own (hard conflict)
//! - `sameday`: it shares a date with at least one match but overlaps none
//!   of them (soft warning)
//! - `none`: it is alone on its date, and is omitted from the result
//!
//! ## Invariants
//!
//! - Matches on different dates never conflict; dates are compared by exact
//!   string equality
//! - The relation is symmetric: if A lists B, B lists A
//! - `overlap` dominates `sameday` in a match's aggregate classification
//! - The result does not depend on input order
//!
//! Classification is a pure function of the match list. Callers recompute
//! it whenever the list changes; nothing is cached here.

use matchday_domain::{DomainError, Match, MatchId, TimeInterval};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// Classification of a match, or of a pair of matches, against the schedule.
///
/// Variants are ordered by severity so that escalation is `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// No other match on the same date.
    #[default]
    None,
    /// Same date, no time overlap.
    SameDay,
    /// Same date and intersecting time intervals.
    Overlap,
}

impl ConflictKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SameDay => "sameday",
            Self::Overlap => "overlap",
        }
    }
}

impl FromStr for ConflictKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "sameday" => Ok(Self::SameDay),
            "overlap" => Ok(Self::Overlap),
            _ => Err(DomainError::UnknownConflictKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The conflict annotation of a single match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    /// Aggregate classification of the match.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// Every other match on the same date, ordered by start time, then end
    /// time, then id.
    pub conflicting_with: Vec<MatchId>,
    /// The subset of `conflicting_with` whose intervals intersect this one.
    pub overlapping_with: Vec<MatchId>,
}

impl ConflictRecord {
    /// Records a pairwise classification against `other`.
    ///
    /// `Overlap` is always recorded and always wins; `SameDay` never
    /// downgrades an existing `Overlap`. An id is listed at most once, even
    /// when several records on the date share it.
    fn record(&mut self, other: &MatchId, kind: ConflictKind) {
        if !self.conflicts_with(other) {
            self.conflicting_with.push(other.clone());
        }
        if kind == ConflictKind::Overlap && !self.overlaps_with(other) {
            self.overlapping_with.push(other.clone());
        }
        self.kind = self.kind.max(kind);
    }

    /// Returns whether this record lists `other` as a conflict.
    #[must_use]
    pub fn conflicts_with(&self, other: &MatchId) -> bool {
        self.conflicting_with.contains(other)
    }

    /// Returns whether this record lists `other` as overlapping.
    #[must_use]
    pub fn overlaps_with(&self, other: &MatchId) -> bool {
        self.overlapping_with.contains(other)
    }
}

/// Conflict annotations keyed by match id.
///
/// Matches without conflicts are absent; [`MatchConflicts::kind_of`]
/// reports them as [`ConflictKind::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchConflicts {
    records: BTreeMap<MatchId, ConflictRecord>,
}

impl MatchConflicts {
    /// Creates an empty conflict map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Returns the record for a match, if it has any conflict.
    #[must_use]
    pub fn get(&self, match_id: &MatchId) -> Option<&ConflictRecord> {
        self.records.get(match_id)
    }

    /// Returns the classification of a match; absent matches are `None`.
    #[must_use]
    pub fn kind_of(&self, match_id: &MatchId) -> ConflictKind {
        self.records
            .get(match_id)
            .map_or(ConflictKind::None, |record| record.kind)
    }

    /// Returns whether a match has any conflict.
    #[must_use]
    pub fn contains(&self, match_id: &MatchId) -> bool {
        self.records.contains_key(match_id)
    }

    /// Returns the number of matches with a conflict.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no match has a conflict.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts matches with the given aggregate classification.
    #[must_use]
    pub fn count_of(&self, kind: ConflictKind) -> usize {
        self.records.values().filter(|r| r.kind == kind).count()
    }

    /// Iterates over the annotated matches in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&MatchId, &ConflictRecord)> {
        self.records.iter()
    }

    /// Consumes the map and returns the underlying records.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<MatchId, ConflictRecord> {
        self.records
    }

    fn record_pair(&mut self, a: &MatchId, b: &MatchId, kind: ConflictKind) {
        self.records.entry(a.clone()).or_default().record(b, kind);
        self.records.entry(b.clone()).or_default().record(a, kind);
    }
}

/// Classifies two intervals known to share a date.
///
/// Uses the half-open test `a.start < b.end && b.start < a.end`: matches that
/// merely touch (one ends exactly when the other starts) are `SameDay`, and so
/// is any pair involving a zero-length match.
#[must_use]
pub const fn classify_pair(a: &TimeInterval, b: &TimeInterval) -> ConflictKind {
    if a.overlaps(b) {
        ConflictKind::Overlap
    } else {
        ConflictKind::SameDay
    }
}

/// Computes the conflict classification of every match in the list.
///
/// # Arguments
///
/// * `matches` - The active matches, in any order
///
/// # Returns
///
/// A map from match id to its conflict record. Matches alone on their date
/// are omitted. An empty or single-match list yields an empty map.
///
/// # Algorithm
///
/// 1. Group matches by exact date string
/// 2. Skip groups with fewer than two matches
/// 3. Within a group, derive each match's interval, order by start time,
///    end time and id, and compare every unordered pair once
///
/// A malformed start time counts as midnight and a zero duration yields a
/// zero-length interval that can be same-day but never overlaps.
#[must_use]
pub fn detect_conflicts(matches: &[Match]) -> MatchConflicts {
    let mut days: BTreeMap<&str, Vec<TimeInterval>> = BTreeMap::new();
    for m in matches {
        days.entry(m.date.as_str())
            .or_default()
            .push(TimeInterval::from_match(m));
    }

    debug!(
        matches = matches.len(),
        dates = days.len(),
        "Detecting match conflicts"
    );

    let mut conflicts: MatchConflicts = MatchConflicts::new();
    for (date, mut day) in days {
        if day.len() < 2 {
            continue;
        }
        detect_day_conflicts(date, &mut day, &mut conflicts);
    }

    debug!(
        overlap = conflicts.count_of(ConflictKind::Overlap),
        sameday = conflicts.count_of(ConflictKind::SameDay),
        "Match conflict detection complete"
    );

    conflicts
}

/// Compares every pair of intervals within one date group.
///
/// Each match id is only ever written by comparisons within its own date
/// group, so groups are independent of one another.
fn detect_day_conflicts(date: &str, day: &mut [TimeInterval], conflicts: &mut MatchConflicts) {
    day.sort_by(|a, b| {
        (a.start_minutes, a.end_minutes, &a.match_id).cmp(&(
            b.start_minutes,
            b.end_minutes,
            &b.match_id,
        ))
    });

    for (i, a) in day.iter().enumerate() {
        for b in &day[i + 1..] {
            if a.match_id == b.match_id {
                warn!(
                    date,
                    match_id = %a.match_id,
                    "Duplicate match id on the same date, skipping self-comparison"
                );
                continue;
            }

            let kind: ConflictKind = classify_pair(a, b);
            trace!(
                date,
                a = %a.match_id,
                b = %b.match_id,
                kind = kind.as_str(),
                "Classified match pair"
            );
            conflicts.record_pair(&a.match_id, &b.match_id, kind);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_kind_ordering_escalates_to_overlap() {
        assert!(ConflictKind::None < ConflictKind::SameDay);
        assert!(ConflictKind::SameDay < ConflictKind::Overlap);
        assert_eq!(
            ConflictKind::Overlap.max(ConflictKind::SameDay),
            ConflictKind::Overlap
        );
    }

    #[test]
    fn test_classify_pair() {
        let at = |id: &str, start: &str, minutes: u32| {
            TimeInterval::from_match(&Match::new(id, "2025-05-15", start, minutes))
        };

        assert_eq!(
            classify_pair(&at("a", "10:00", 90), &at("b", "11:00", 90)),
            ConflictKind::Overlap
        );
        assert_eq!(
            classify_pair(&at("a", "10:00", 60), &at("b", "11:00", 60)),
            ConflictKind::SameDay
        );
        assert_eq!(
            classify_pair(&at("a", "09:00", 180), &at("b", "10:00", 0)),
            ConflictKind::SameDay
        );
    }

    #[test]
    fn test_conflict_kind_from_str() {
        assert_eq!("none".parse::<ConflictKind>().unwrap(), ConflictKind::None);
        assert_eq!(
            "sameday".parse::<ConflictKind>().unwrap(),
            ConflictKind::SameDay
        );
        assert_eq!(
            "overlap".parse::<ConflictKind>().unwrap(),
            ConflictKind::Overlap
        );
        assert!(matches!(
            "clash".parse::<ConflictKind>(),
            Err(DomainError::UnknownConflictKind(_))
        ));
    }

    #[test]
    fn test_record_keeps_overlap_after_sameday() {
        let mut record: ConflictRecord = ConflictRecord::default();
        record.record(&MatchId::new("b"), ConflictKind::Overlap);
        record.record(&MatchId::new("c"), ConflictKind::SameDay);

        assert_eq!(record.kind, ConflictKind::Overlap);
        assert_eq!(
            record.conflicting_with,
            vec![MatchId::new("b"), MatchId::new("c")]
        );
        assert_eq!(record.overlapping_with, vec![MatchId::new("b")]);
    }

    #[test]
    fn test_record_lists_each_id_once() {
        let mut record: ConflictRecord = ConflictRecord::default();
        record.record(&MatchId::new("b"), ConflictKind::SameDay);
        record.record(&MatchId::new("b"), ConflictKind::Overlap);
        record.record(&MatchId::new("b"), ConflictKind::Overlap);

        assert_eq!(record.kind, ConflictKind::Overlap);
        assert_eq!(record.conflicting_with, vec![MatchId::new("b")]);
        assert_eq!(record.overlapping_with, vec![MatchId::new("b")]);
    }

    #[test]
    fn test_record_upgrades_sameday_to_overlap() {
        let mut record: ConflictRecord = ConflictRecord::default();
        record.record(&MatchId::new("c"), ConflictKind::SameDay);
        record.record(&MatchId::new("b"), ConflictKind::Overlap);

        assert_eq!(record.kind, ConflictKind::Overlap);
    }

    #[test]
    fn test_record_serializes_with_type_field() {
        let mut record: ConflictRecord = ConflictRecord::default();
        record.record(&MatchId::new("m2"), ConflictKind::SameDay);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "sameday");
        assert_eq!(json["conflictingWith"][0], "m2");
        assert!(json["overlappingWith"].as_array().unwrap().is_empty());
    }
}
