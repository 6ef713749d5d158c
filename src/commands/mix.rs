//! Mix command
//!
//! Splits and shuffles one pair and reports the resulting piece array.

use crate::core::{Level, PieceType, WordPair};
use crate::engine::{Boundaries, PieceRegistry, RandomSource, mix_words};
use anyhow::Result;

/// Shuffled pieces of a pair with their classification
pub struct MixReport {
    pub pair: WordPair,
    pub level: Level,
    pub pieces: Vec<(String, PieceType)>,
    pub boundaries: Boundaries,
}

/// Mix `pair` at `level` and classify every piece
///
/// # Errors
///
/// Returns an error if the pair is too short to be split at the level's
/// piece size.
pub fn mix_pair<R: RandomSource + ?Sized>(
    pair: WordPair,
    level: Level,
    rng: &mut R,
) -> Result<MixReport> {
    let mixed = mix_words(&pair, level.piece_size(), rng)?;
    let boundaries = mixed.boundaries();

    let mut registry = PieceRegistry::new();
    registry.load_round(pair.clone(), mixed)?;

    let pieces = registry
        .pieces()
        .iter()
        .map(|piece| (piece.content.clone(), piece.piece_type))
        .collect();

    Ok(MixReport {
        pair,
        level,
        pieces,
        boundaries,
    })
}
