// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MatchId, PlayerId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidMatchId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid match id: test");

    let err: DomainError = DomainError::InvalidPlayerId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid player id: test");

    let err: DomainError = DomainError::DuplicateMatchId(MatchId::new("m1"));
    assert_eq!(format!("{err}"), "Match with id 'm1' appears more than once");

    let err: DomainError = DomainError::DuplicatePlayerId(PlayerId::new("p1"));
    assert_eq!(
        format!("{err}"),
        "Player with id 'p1' appears more than once"
    );

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2025-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2025-13-01': bad month"
    );

    let err: DomainError = DomainError::InvalidStartTime {
        time_string: String::from("25:00"),
        reason: String::from("hour out of range"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid start time '25:00': hour out of range"
    );

    let err: DomainError = DomainError::InvalidDuration {
        match_id: MatchId::new("m1"),
        minutes: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid duration for match 'm1': 0 minutes. Must be greater than 0"
    );

    let err: DomainError = DomainError::UnknownFormat(String::from("7人制"));
    assert_eq!(format!("{err}"), "Unknown match format: '7人制'");

    let err: DomainError = DomainError::UnknownConflictKind(String::from("clash"));
    assert_eq!(format!("{err}"), "Unknown conflict kind: 'clash'");
}
