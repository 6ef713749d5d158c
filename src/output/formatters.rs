//! Formatting utilities for terminal output

use crate::core::Piece;
use crate::engine::{Rejection, Status};

/// Player-facing text for a status code
#[must_use]
pub const fn status_message(status: Status) -> &'static str {
    match status {
        Status::RoundStarted => "New round started",
        Status::NoRoundInProgress => "No round in progress, type 'n' for a new one",
        Status::LevelChanged => "Level changed, applies from the next round",
        Status::PieceAdded => "Piece added",
        Status::PieceNotAdded(reason) => rejection_message(reason),
        Status::PieceUnavailable => "That piece is not in the pool",
        Status::PiecesRemoved => "Pieces removed",
        Status::InvalidRemoval => "That word has no piece at this position",
        Status::InputCleared => "Input cleared",
        Status::NothingToClear => "Nothing to clear",
        Status::InputIncomplete => "Both words must be complete before submitting",
        Status::Solved => "Correct!",
        Status::IncorrectWords => "Incorrect words, try again",
        Status::SolutionShown => "Solution shown",
        Status::CursorEnabled => "Cursor mode on",
        Status::CursorDisabled => "Cursor mode off",
        Status::CursorMoved => "Cursor moved",
        Status::CursorRequired => "Turn cursor mode on first ('k')",
        Status::Ignored => "Nothing to do",
    }
}

/// Player-facing text for a rejected piece
#[must_use]
pub const fn rejection_message(reason: Rejection) -> &'static str {
    match reason {
        Rejection::NotABegin => "Piece not added: a word must start with a begin piece",
        Rejection::DuplicateBegin => "Piece not added: this word already has its begin piece",
        Rejection::SlotCompleted => "Piece not added: this word is already complete",
        Rejection::CloseNotAllowed => {
            "Piece not added: place the remaining pieces before closing the second word"
        }
    }
}

/// Format a pool piece as `n:content` with its type tag, 1-based
#[must_use]
pub fn piece_label(index: usize, piece: &Piece) -> String {
    format!("{}:{}{}", index + 1, piece.content, piece.piece_type.tag())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
