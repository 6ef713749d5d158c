//! Piece and input slot types

use std::fmt;

/// Position class of a piece within its word
///
/// Fixed at round creation from the piece's array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Begin,
    Middle,
    End,
}

impl PieceType {
    /// Single-character tag used by the text front-end
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Begin => 'B',
            Self::Middle => 'M',
            Self::End => 'E',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Begin => "begin",
            Self::Middle => "middle",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// A shuffled word fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub content: String,
    pub piece_type: PieceType,
    pub added: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(content: String, piece_type: PieceType) -> Self {
        Self {
            content,
            piece_type,
            added: false,
        }
    }
}

/// Target word slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Word number as shown to the player (1 or 2)
    #[inline]
    #[must_use]
    pub const fn number(self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word {}", self.number())
    }
}

/// Build state of one word input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Empty,
    BuildInProgress,
    Completed,
}
