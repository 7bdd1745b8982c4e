// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock parsing and derived match intervals.
//!
//! ## Invariants
//!
//! - Parsing never fails: malformed labels resolve to minute 0 (midnight)
//! - `end_minutes = start_minutes + duration`, so a zero-length interval
//!   is possible and never overlaps anything
//! - Intervals are half-open: touching endpoints do not overlap

use crate::error::DomainError;
use crate::types::{Match, MatchId};
use serde::{Deserialize, Serialize};
use time::Time;

/// Parses an `H:MM`, `HH:MM` or `HH:MM:SS` label into a wall-clock time.
///
/// Seconds, when present, are validated and then ignored by callers that
/// work in whole minutes.
///
/// # Errors
///
/// Returns `DomainError::InvalidStartTime` if the label has no `:`
/// separator, a component is not numeric, or the time is out of range.
pub fn parse_clock(label: &str) -> Result<Time, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidStartTime {
        time_string: label.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = label.trim();
    if !trimmed.contains(':') {
        return Err(invalid("expected HH:MM"));
    }

    let mut parts = trimmed.split(':');
    let mut component = |name: &str| -> Result<u8, DomainError> {
        match parts.next() {
            Some(part) if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => part
                .parse::<u8>()
                .map_err(|_| invalid(&format!("{name} out of range"))),
            Some(_) => Err(invalid(&format!("{name} is not a number"))),
            None => Ok(0),
        }
    };

    let hour = component("hour")?;
    let minute = component("minute")?;
    let second = component("second")?;
    if parts.next().is_some() {
        return Err(invalid("too many components"));
    }

    Time::from_hms(hour, minute, second).map_err(|err| invalid(&err.to_string()))
}

/// Converts a start-time label into minutes since midnight.
///
/// Malformed labels degrade to 0 rather than raising an error, so a single
/// bad record never aborts detection for a whole schedule.
#[must_use]
pub fn minutes_since_midnight(label: &str) -> u32 {
    match parse_clock(label) {
        Ok(clock) => u32::from(clock.hour()) * 60 + u32::from(clock.minute()),
        Err(err) => {
            if !label.is_empty() {
                tracing::debug!(label, %err, "Treating malformed start time as midnight");
            }
            0
        }
    }
}

/// The time span a match occupies on its calendar date.
///
/// Derived from a [`Match`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    /// The match this interval belongs to.
    pub match_id: MatchId,
    /// Start, in minutes since midnight.
    pub start_minutes: u32,
    /// End, in minutes since midnight (exclusive).
    pub end_minutes: u32,
}

impl TimeInterval {
    /// Derives the interval of a match.
    #[must_use]
    pub fn from_match(m: &Match) -> Self {
        let start_minutes = minutes_since_midnight(&m.start_time);
        Self {
            match_id: m.id.clone(),
            start_minutes,
            end_minutes: start_minutes.saturating_add(m.duration_minutes),
        }
    }

    /// Returns the length of the interval in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    /// Half-open overlap test.
    ///
    /// `a.start < b.end && b.start < a.end`, with both intervals non-empty.
    /// Back-to-back intervals, where one ends exactly when the other starts,
    /// do not overlap, and a zero-length interval overlaps nothing.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes < self.end_minutes
            && other.start_minutes < other.end_minutes
            && self.start_minutes < other.end_minutes
            && other.start_minutes < self.end_minutes
    }
}
