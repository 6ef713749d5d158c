//! Piece ownership for the current round
//!
//! The registry holds the shuffled piece array, classifies every index as
//! begin, middle or end, and tracks which pieces the player has moved into a
//! word input. Mutators return whether anything changed so the caller can
//! decide whether to notify.

use super::EngineError;
use super::splitter::{Boundaries, MixedPieces};
use crate::core::{Piece, PieceType, WordPair};
use tracing::debug;

/// Owner of the current round's pieces
#[derive(Debug, Clone, Default)]
pub struct PieceRegistry {
    pieces: Vec<Piece>,
    pair: Option<WordPair>,
    boundaries: Option<Boundaries>,
}

impl PieceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with a freshly mixed round
    ///
    /// Every piece starts out not added.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidBoundaries` if any boundary index is out
    /// of range or two boundaries share an index. The registry is left
    /// untouched in that case.
    pub fn load_round(&mut self, pair: WordPair, mixed: MixedPieces) -> Result<(), EngineError> {
        let (contents, boundaries) = mixed.into_parts();
        let indexes = boundaries.as_array();
        let piece_count = contents.len();

        let in_range = indexes.iter().all(|&i| i < piece_count);
        let distinct = indexes
            .iter()
            .enumerate()
            .all(|(n, i)| !indexes[..n].contains(i));
        if !in_range || !distinct {
            return Err(EngineError::InvalidBoundaries {
                boundaries: indexes,
                piece_count,
            });
        }

        self.pieces = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Piece::new(content, classify(index, &boundaries)))
            .collect();

        debug!(pair = %pair, pieces = piece_count, "round loaded");

        self.pair = Some(pair);
        self.boundaries = Some(boundaries);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn has_round(&self) -> bool {
        self.pair.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn pair(&self) -> Option<&WordPair> {
        self.pair.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn boundaries(&self) -> Option<Boundaries> {
        self.boundaries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Mark one piece as moved into a word input
    ///
    /// Returns `true` if the flag changed.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn mark_added(&mut self, index: usize) -> bool {
        let piece = &mut self.pieces[index];
        let changed = !piece.added;
        piece.added = true;
        changed
    }

    /// Mark pieces as back in the mixed pool
    ///
    /// Returns `true` if at least one flag changed.
    ///
    /// # Panics
    /// Panics if any index is out of range.
    pub fn mark_removed(&mut self, indexes: &[usize]) -> bool {
        let mut changed = false;
        for &index in indexes {
            let piece = &mut self.pieces[index];
            changed |= piece.added;
            piece.added = false;
        }
        changed
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn piece_type(&self, index: usize) -> PieceType {
        self.pieces[index].piece_type
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn is_added(&self, index: usize) -> bool {
        self.pieces[index].added
    }

    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn content(&self, index: usize) -> &str {
        &self.pieces[index].content
    }

    #[must_use]
    pub fn count_unadded(&self) -> usize {
        self.pieces.iter().filter(|p| !p.added).count()
    }

    /// Positions of pieces still in the mixed pool, ascending
    #[must_use]
    pub fn available_indexes(&self) -> Vec<usize> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.added)
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn contents(&self) -> Vec<&str> {
        self.pieces.iter().map(|p| p.content.as_str()).collect()
    }

    #[must_use]
    pub fn types(&self) -> Vec<PieceType> {
        self.pieces.iter().map(|p| p.piece_type).collect()
    }

    #[must_use]
    pub fn added_flags(&self) -> Vec<bool> {
        self.pieces.iter().map(|p| p.added).collect()
    }
}

fn classify(index: usize, boundaries: &Boundaries) -> PieceType {
    if index == boundaries.first_begin || index == boundaries.second_begin {
        PieceType::Begin
    } else if index == boundaries.first_end || index == boundaries.second_end {
        PieceType::End
    } else {
        PieceType::Middle
    }
}
