//! Engine error type
//!
//! Only failures caused by external input surface here. Expected gameplay
//! rejections are reported through `Status` and `AddOutcome` instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Piece size must be at least 1")]
    ZeroPieceSize,
    #[error("Piece size {piece_size} is not smaller than '{word}' ({length} characters)")]
    PieceSizeTooLarge {
        word: String,
        length: usize,
        piece_size: usize,
    },
    #[error("Boundary indexes {boundaries:?} are invalid for {piece_count} pieces")]
    InvalidBoundaries {
        boundaries: [usize; 4],
        piece_count: usize,
    },
}
