// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Competition formats and the squad size each one implies.
//!
//! The squad size is advisory. It is used to flag under-strength lineups
//! and never to reject one. Unrecognized or empty labels map to
//! [`MatchFormat::Unspecified`], which requires 0 players and therefore
//! never produces a warning.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The player-count mode of a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchFormat {
    /// Five players per side.
    FiveASide,
    /// Eight players per side.
    EightASide,
    /// Eleven players per side.
    ElevenASide,
    /// No format recorded.
    #[default]
    Unspecified,
}

impl MatchFormat {
    /// Resolves a format label, mapping anything unknown to `Unspecified`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "5人制" | "5-a-side" => Self::FiveASide,
            "8人制" | "8-a-side" => Self::EightASide,
            "11人制" | "11-a-side" => Self::ElevenASide,
            _ => Self::Unspecified,
        }
    }

    /// Returns the canonical label of this format.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FiveASide => "5人制",
            Self::EightASide => "8人制",
            Self::ElevenASide => "11人制",
            Self::Unspecified => "",
        }
    }

    /// Returns the number of players a lineup in this format needs.
    #[must_use]
    pub const fn required_squad_size(&self) -> u32 {
        match self {
            Self::FiveASide => 5,
            Self::EightASide => 8,
            Self::ElevenASide => 11,
            Self::Unspecified => 0,
        }
    }
}

/// Returns the squad size required by a format label.
///
/// `required_squad_size("8人制") == 8`; empty and unknown labels yield 0.
#[must_use]
pub fn required_squad_size(format_label: &str) -> u32 {
    MatchFormat::from_label(format_label).required_squad_size()
}

impl FromStr for MatchFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::Unspecified);
        }
        match Self::from_label(s) {
            Self::Unspecified => Err(DomainError::UnknownFormat(s.to_string())),
            format => Ok(format),
        }
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for MatchFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// Lenient: a record carrying a format nobody recognizes still loads.
impl<'de> Deserialize<'de> for MatchFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.map_or(Self::Unspecified, |label| Self::from_label(&label)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_required_squad_size_for_known_labels() {
        assert_eq!(required_squad_size("5人制"), 5);
        assert_eq!(required_squad_size("8人制"), 8);
        assert_eq!(required_squad_size("11人制"), 11);
    }

    #[test]
    fn test_required_squad_size_accepts_english_aliases() {
        assert_eq!(required_squad_size("5-a-side"), 5);
        assert_eq!(required_squad_size("8-a-side"), 8);
        assert_eq!(required_squad_size("11-a-side"), 11);
    }

    #[test]
    fn test_required_squad_size_is_zero_for_empty_or_unknown() {
        assert_eq!(required_squad_size(""), 0);
        assert_eq!(required_squad_size("unknown"), 0);
        assert_eq!(required_squad_size("7人制"), 0);
    }

    #[test]
    fn test_from_str_rejects_unknown_label() {
        let result = "7人制".parse::<MatchFormat>();
        assert_eq!(
            result,
            Err(DomainError::UnknownFormat(String::from("7人制")))
        );
    }

    #[test]
    fn test_from_str_treats_empty_as_unspecified() {
        assert_eq!("".parse::<MatchFormat>().unwrap(), MatchFormat::Unspecified);
        assert_eq!(
            "8人制".parse::<MatchFormat>().unwrap(),
            MatchFormat::EightASide
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&MatchFormat::ElevenASide).unwrap();
        assert_eq!(json, "\"11人制\"");

        let format: MatchFormat = serde_json::from_str("\"5人制\"").unwrap();
        assert_eq!(format, MatchFormat::FiveASide);

        let format: MatchFormat = serde_json::from_str("\"futsal\"").unwrap();
        assert_eq!(format, MatchFormat::Unspecified);

        let format: MatchFormat = serde_json::from_str("null").unwrap();
        assert_eq!(format, MatchFormat::Unspecified);
    }
}
