// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for snapshot loading and validation.

use crate::tests::helpers::{create_test_match, create_test_snapshot};
use crate::{CoreError, Snapshot};
use matchday_domain::{DomainError, MatchId, PlayerId, RosterEntry};

#[test]
fn test_valid_snapshot_passes_validation() {
    let snapshot: Snapshot = create_test_snapshot();

    let result: Result<(), CoreError> = snapshot.validate();

    assert!(result.is_ok());
}

#[test]
fn test_validation_rejects_bad_match_record() {
    let mut snapshot: Snapshot = create_test_snapshot();
    snapshot
        .matches
        .push(create_test_match("match9", "2025-05-15", "10:00", 0));

    let result: Result<(), CoreError> = snapshot.validate();

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDuration { .. }))
    ));
}

#[test]
fn test_validation_rejects_duplicate_match_ids() {
    let mut snapshot: Snapshot = create_test_snapshot();
    snapshot
        .matches
        .push(create_test_match("match1", "2025-06-01", "10:00", 60));

    let result: Result<(), CoreError> = snapshot.validate();

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateMatchId(
            MatchId::new("match1")
        )))
    );
}

#[test]
fn test_validation_rejects_roster_for_unknown_match() {
    let mut snapshot: Snapshot = create_test_snapshot();
    snapshot
        .rosters
        .insert(MatchId::new("ghost"), vec![RosterEntry::new("player1", "")]);

    let result: Result<(), CoreError> = snapshot.validate();

    assert_eq!(
        result,
        Err(CoreError::RosterForUnknownMatch(MatchId::new("ghost")))
    );
}

#[test]
fn test_validation_rejects_roster_with_unknown_player() {
    let mut snapshot: Snapshot = create_test_snapshot();
    snapshot.rosters.insert(
        MatchId::new("match2"),
        vec![RosterEntry::new("player4", ""), RosterEntry::new("nobody", "")],
    );

    let result: Result<(), CoreError> = snapshot.validate();

    assert_eq!(
        result,
        Err(CoreError::RosterWithUnknownPlayer {
            match_id: MatchId::new("match2"),
            player_id: PlayerId::new("nobody"),
        })
    );
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::RosterForUnknownMatch(MatchId::new("ghost"));
    assert_eq!(format!("{err}"), "Roster references unknown match 'ghost'");

    let err: CoreError = CoreError::RosterWithUnknownPlayer {
        match_id: MatchId::new("m1"),
        player_id: PlayerId::new("p9"),
    };
    assert_eq!(
        format!("{err}"),
        "Roster for match 'm1' references unknown player 'p9'"
    );

    let err: CoreError = CoreError::from(DomainError::InvalidMatchId(String::from("empty")));
    assert_eq!(format!("{err}"), "Domain violation: Invalid match id: empty");
}

#[test]
fn test_null_and_missing_lists_load_as_empty() {
    let snapshot: Snapshot =
        serde_json::from_str(r#"{ "matches": null, "players": null }"#).unwrap();

    assert_eq!(snapshot, Snapshot::new());

    let empty: Snapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Snapshot::new());
}

#[test]
fn test_snapshot_accepts_dashboard_field_names() {
    let json = r#"{
        "matches": [
            { "id": "match1", "date": "2025-05-15", "startTime": "10:00",
              "durationMinutes": 90, "leagueId": "league1",
              "group": "國小組", "levelU": "U10" }
        ],
        "leagues": [
            { "id": "league1", "name": "U10", "group": "國小組", "levelU": "U10", "format": "8人制" }
        ],
        "players": [
            { "id": "player1", "name": "林志明", "participatingLeagueIds": ["league1"],
              "group": "國小組", "levelU": "U10", "injured": "否" }
        ],
        "matchRosters": {
            "match1": [ { "playerId": "player1", "position": "中鋒 (CF)" } ]
        }
    }"#;

    let snapshot: Snapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot.matches.len(), 1);
    assert_eq!(snapshot.competitions.len(), 1);
    assert_eq!(snapshot.roster_for(&MatchId::new("match1")).len(), 1);
    assert!(snapshot.roster_for(&MatchId::new("match2")).is_empty());
    assert!(snapshot.validate().is_ok());
}
