// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Match, MatchId, Player, PlayerId, validate_match_fields,
    validate_match_ids_unique, validate_player_fields, validate_player_ids_unique,
};

#[test]
fn test_validate_match_fields_accepts_valid_match() {
    let m: Match = Match::new("m1", "2025-05-15", "10:00", 90);

    let result: Result<(), DomainError> = validate_match_fields(&m);
    assert!(result.is_ok());
}

#[test]
fn test_validate_match_fields_rejects_empty_id() {
    let m: Match = Match::new("  ", "2025-05-15", "10:00", 90);

    let result: Result<(), DomainError> = validate_match_fields(&m);
    assert!(matches!(result, Err(DomainError::InvalidMatchId(_))));
}

#[test]
fn test_validate_match_fields_rejects_bad_date() {
    for date in ["", "2025-13-01", "2025-02-30", "15/05/2025"] {
        let m: Match = Match::new("m1", date, "10:00", 90);

        let result: Result<(), DomainError> = validate_match_fields(&m);
        assert!(
            matches!(result, Err(DomainError::DateParseError { .. })),
            "date {date:?} should be rejected"
        );
    }
}

#[test]
fn test_validate_match_fields_rejects_bad_start_time() {
    let m: Match = Match::new("m1", "2025-05-15", "25:00", 90);

    let result: Result<(), DomainError> = validate_match_fields(&m);
    assert!(matches!(result, Err(DomainError::InvalidStartTime { .. })));
}

#[test]
fn test_validate_match_fields_rejects_zero_duration() {
    let m: Match = Match::new("m1", "2025-05-15", "10:00", 0);

    let result: Result<(), DomainError> = validate_match_fields(&m);
    assert_eq!(
        result,
        Err(DomainError::InvalidDuration {
            match_id: MatchId::new("m1"),
            minutes: 0,
        })
    );
}

#[test]
fn test_validate_player_fields_rejects_empty_id() {
    let player: Player = Player::new("", "Nobody", "國小組", "U10");

    let result: Result<(), DomainError> = validate_player_fields(&player);
    assert!(matches!(result, Err(DomainError::InvalidPlayerId(_))));
}

#[test]
fn test_validate_match_ids_unique() {
    let matches: Vec<Match> = vec![
        Match::new("m1", "2025-05-15", "10:00", 90),
        Match::new("m2", "2025-05-15", "12:00", 90),
    ];
    assert!(validate_match_ids_unique(&matches).is_ok());
    assert!(validate_match_ids_unique(&[]).is_ok());
}

#[test]
fn test_validate_match_ids_unique_reports_duplicate() {
    let matches: Vec<Match> = vec![
        Match::new("m1", "2025-05-15", "10:00", 90),
        Match::new("m2", "2025-05-15", "12:00", 90),
        Match::new("m1", "2025-05-16", "10:00", 90),
    ];

    let result: Result<(), DomainError> = validate_match_ids_unique(&matches);
    assert_eq!(result, Err(DomainError::DuplicateMatchId(MatchId::new("m1"))));
}

#[test]
fn test_validate_player_ids_unique_reports_duplicate() {
    let players: Vec<Player> = vec![
        Player::new("p1", "A", "國小組", "U10"),
        Player::new("p1", "B", "國小組", "U10"),
    ];

    let result: Result<(), DomainError> = validate_player_ids_unique(&players);
    assert_eq!(
        result,
        Err(DomainError::DuplicatePlayerId(PlayerId::new("p1")))
    );
}
