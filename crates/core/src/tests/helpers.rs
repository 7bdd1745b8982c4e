// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Snapshot;
use matchday_domain::{Competition, Match, MatchFormat, MatchId, Player, RosterEntry};

pub fn create_test_match(id: &str, date: &str, start_time: &str, duration_minutes: u32) -> Match {
    Match::new(id, date, start_time, duration_minutes)
}

pub fn ids(values: &[&str]) -> Vec<MatchId> {
    values.iter().map(|v| MatchId::new(v)).collect()
}

pub fn create_test_competitions() -> Vec<Competition> {
    vec![
        Competition::new(
            "league1",
            "桃園市國小U10春季聯賽",
            "國小組",
            "U10",
            MatchFormat::EightASide,
        ),
        Competition::new(
            "league2",
            "幼兒足球體驗賽",
            "幼兒組",
            "U6",
            MatchFormat::FiveASide,
        ),
        Competition::new(
            "league3",
            "大專足球甲級聯賽",
            "大學組",
            "甲組",
            MatchFormat::ElevenASide,
        ),
    ]
}

pub fn create_test_players() -> Vec<Player> {
    vec![
        Player::new("player1", "林志明", "國小組", "U10").with_competitions(&["league1"]),
        Player::new("player2", "陳小安", "國小組", "U10").with_competitions(&["league1", "league2"]),
        Player::new("player3", "王大勇", "大學組", "甲組").with_competitions(&["league3"]),
        Player::new("player4", "李小美", "幼兒組", "U6").with_competitions(&["league2"]),
    ]
}

pub fn create_test_snapshot() -> Snapshot {
    let matches = vec![
        create_test_match("match1", "2025-05-15", "10:00", 90)
            .with_competition("league1")
            .with_tags("國小組", "U10"),
        create_test_match("match2", "2025-05-15", "11:00", 90)
            .with_competition("league2")
            .with_tags("幼兒組", "U6"),
        create_test_match("match3", "2025-05-15", "13:00", 60)
            .with_competition("league3")
            .with_tags("大學組", "甲組"),
        create_test_match("match4", "2025-05-22", "09:00", 60)
            .with_competition("league1")
            .with_tags("國小組", "U10"),
    ];

    let mut snapshot = Snapshot::new();
    snapshot.matches = matches;
    snapshot.players = create_test_players();
    snapshot.competitions = create_test_competitions();
    snapshot.rosters.insert(
        MatchId::new("match1"),
        vec![
            RosterEntry::new("player1", "中鋒 (CF)"),
            RosterEntry::new("player2", "中後衛 (CB)"),
        ],
    );
    snapshot
}
