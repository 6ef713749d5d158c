//! Difficulty levels
//!
//! A level decides the piece size used to split words and how many points a
//! solved round is worth.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown level '{0}' (expected easy, medium or hard)")]
pub struct LevelError(String);

impl Level {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of characters in every piece except a word's last one
    #[must_use]
    pub const fn piece_size(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::Hard => 1,
        }
    }

    /// Points awarded for a solved round
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            other => Err(LevelError(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_levels_use_smaller_pieces() {
        assert!(Level::Easy.piece_size() > Level::Medium.piece_size());
        assert!(Level::Medium.piece_size() > Level::Hard.piece_size());
        assert_eq!(Level::Hard.piece_size(), 1);
    }

    #[test]
    fn harder_levels_are_worth_more() {
        assert!(Level::Easy.points() < Level::Medium.points());
        assert!(Level::Medium.points() < Level::Hard.points());
    }

    #[test]
    fn parse_names_and_shortcuts() {
        assert_eq!("easy".parse::<Level>(), Ok(Level::Easy));
        assert_eq!("MEDIUM".parse::<Level>(), Ok(Level::Medium));
        assert_eq!(" h ".parse::<Level>(), Ok(Level::Hard));
        assert!("extreme".parse::<Level>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }
}
