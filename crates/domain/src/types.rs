// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::format::MatchFormat;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The wildcard tag value. A selector of `"all"` admits every tag.
pub const ALL_TAG: &str = "all";

/// Returns whether a group/level selector admits the given tag value.
///
/// The wildcard [`ALL_TAG`] admits everything; any other selector must
/// match the value exactly.
#[must_use]
pub fn selector_admits(selector: &str, value: &str) -> bool {
    selector == ALL_TAG || selector == value
}

fn all_tag() -> String {
    String::from(ALL_TAG)
}

/// The dashboard stores the injury flag either as a boolean or as a
/// "是"/"否" label.
#[derive(Deserialize)]
#[serde(untagged)]
enum InjuryFlag {
    Flag(bool),
    Label(String),
}

fn deserialize_injured<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match InjuryFlag::deserialize(deserializer)? {
        InjuryFlag::Flag(flag) => flag,
        InjuryFlag::Label(label) => matches!(label.trim(), "是" | "yes" | "true"),
    })
}

/// Durations arrive as numbers, numeric strings or `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum DurationValue {
    Minutes(u32),
    Text(String),
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<DurationValue>::deserialize(deserializer)? {
        Some(DurationValue::Minutes(minutes)) => minutes,
        Some(DurationValue::Text(text)) => text.trim().parse().unwrap_or(0),
        None => 0,
    })
}

/// Identifier of a match.
///
/// Identifiers are opaque strings assigned by the upstream API and are
/// compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Creates a new `MatchId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new `PlayerId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a competition (league or cup).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CompetitionId(String);

impl CompetitionId {
    /// Creates a new `CompetitionId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-player statistics recorded after a match has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerMatchStats {
    /// Goals scored.
    #[serde(default)]
    pub goals: u32,
    /// Assists provided.
    #[serde(default)]
    pub assists: u32,
    /// Yellow cards received.
    #[serde(default)]
    pub yellow: u32,
    /// Red cards received.
    #[serde(default)]
    pub red: u32,
}

/// A scheduled match.
///
/// Records arrive already validated by the upstream API. The scheduling
/// engine reads `date`, `start_time` and `duration_minutes` leniently:
/// a malformed start time counts as midnight and a missing duration as
/// zero minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// The unique match identifier.
    pub id: MatchId,
    /// Calendar date as an ISO `YYYY-MM-DD` string.
    ///
    /// Matches are grouped by exact string equality of this field.
    #[serde(default)]
    pub date: String,
    /// Wall-clock start time as `HH:MM` (24h).
    #[serde(default)]
    pub start_time: String,
    /// Scheduled length of the match in minutes. Missing, `null` or
    /// unparsable values read as 0.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub duration_minutes: u32,
    /// The competition this match belongs to.
    #[serde(default, alias = "leagueId")]
    pub competition_id: CompetitionId,
    /// The opposing team.
    #[serde(default, alias = "opponentTeamId")]
    pub opponent_id: String,
    /// Venue.
    #[serde(default)]
    pub location: String,
    /// Age group tag (e.g. "國小組"), or `"all"`.
    #[serde(default = "all_tag")]
    pub group: String,
    /// Level tag (e.g. "U10"), or `"all"`.
    #[serde(default = "all_tag", rename = "levelU", alias = "level")]
    pub level: String,
    /// Statistics keyed by player.
    #[serde(default)]
    pub stats: BTreeMap<PlayerId, PlayerMatchStats>,
}

impl Match {
    /// Creates a new `Match` with wildcard tags and no competition.
    ///
    /// # Arguments
    ///
    /// * `id` - The match identifier
    /// * `date` - The ISO calendar date
    /// * `start_time` - The `HH:MM` start time
    /// * `duration_minutes` - The scheduled length in minutes
    #[must_use]
    pub fn new(id: &str, date: &str, start_time: &str, duration_minutes: u32) -> Self {
        Self {
            id: MatchId::new(id),
            date: date.to_string(),
            start_time: start_time.to_string(),
            duration_minutes,
            competition_id: CompetitionId::default(),
            opponent_id: String::new(),
            location: String::new(),
            group: all_tag(),
            level: all_tag(),
            stats: BTreeMap::new(),
        }
    }

    /// Sets the competition this match belongs to.
    #[must_use]
    pub fn with_competition(mut self, competition_id: &str) -> Self {
        self.competition_id = CompetitionId::new(competition_id);
        self
    }

    /// Sets the age group and level tags.
    #[must_use]
    pub fn with_tags(mut self, group: &str, level: &str) -> Self {
        self.group = group.to_string();
        self.level = level.to_string();
        self
    }
}

/// A player on the club roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The unique player identifier.
    pub id: PlayerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Age group tag.
    #[serde(default)]
    pub group: String,
    /// Level tag.
    #[serde(default, rename = "levelU", alias = "level")]
    pub level: String,
    /// Competitions the player is enrolled in.
    #[serde(default, alias = "participatingLeagueIds")]
    pub participating_competition_ids: Vec<CompetitionId>,
    /// Preferred positions.
    #[serde(default)]
    pub positions: Vec<String>,
    /// Whether the player is currently injured.
    #[serde(default, deserialize_with = "deserialize_injured")]
    pub injured: bool,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl Player {
    /// Creates a new `Player` with the given tags and no competitions.
    ///
    /// # Arguments
    ///
    /// * `id` - The player identifier
    /// * `name` - The display name
    /// * `group` - The age group tag
    /// * `level` - The level tag
    #[must_use]
    pub fn new(id: &str, name: &str, group: &str, level: &str) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.to_string(),
            group: group.to_string(),
            level: level.to_string(),
            participating_competition_ids: Vec::new(),
            positions: Vec::new(),
            injured: false,
            notes: String::new(),
        }
    }

    /// Enrolls the player in the given competitions.
    #[must_use]
    pub fn with_competitions(mut self, competition_ids: &[&str]) -> Self {
        self.participating_competition_ids = competition_ids
            .iter()
            .map(|id| CompetitionId::new(id))
            .collect();
        self
    }

    /// Returns whether the player is enrolled in the given competition.
    #[must_use]
    pub fn participates_in(&self, competition_id: &CompetitionId) -> bool {
        self.participating_competition_ids.contains(competition_id)
    }
}

/// A competition (league) that matches are played in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    /// The unique competition identifier.
    pub id: CompetitionId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Age group tag.
    #[serde(default)]
    pub group: String,
    /// Level tag.
    #[serde(default, rename = "levelU", alias = "level")]
    pub level: String,
    /// Player-count format of the competition.
    #[serde(default)]
    pub format: MatchFormat,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl Competition {
    /// Creates a new `Competition`.
    #[must_use]
    pub fn new(id: &str, name: &str, group: &str, level: &str, format: MatchFormat) -> Self {
        Self {
            id: CompetitionId::new(id),
            name: name.to_string(),
            group: group.to_string(),
            level: level.to_string(),
            format,
            notes: String::new(),
        }
    }
}

/// One line of a match lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    /// The selected player.
    pub player_id: PlayerId,
    /// The position the player is assigned to.
    #[serde(default)]
    pub position: String,
}

impl RosterEntry {
    /// Creates a new `RosterEntry`.
    #[must_use]
    pub fn new(player_id: &str, position: &str) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            position: position.to_string(),
        }
    }
}
