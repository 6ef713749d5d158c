//! Change notifications
//!
//! `Game` queues one event per observable state change and never queues one
//! for a no-op. The presentation layer drains the queue after each call.

use super::cursor::CursorPosition;
use crate::core::Slot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new piece array replaced the previous round
    RoundStarted,
    /// The round was solved or given up
    RoundEnded { solved: bool },
    PieceAdded { slot: Slot, index: usize },
    /// Exactly the indexes that left `slot`
    PiecesRemoved { slot: Slot, indexes: Vec<usize> },
    /// Any word input changed
    InputChanged,
    /// Whether both words are complete flipped
    CompletionChanged { complete: bool },
    /// At least one piece moved between the pool and an input
    SelectionChanged,
    CursorMoved { position: Option<CursorPosition> },
    ScoreChanged,
}
