//! Random pair selection

use crate::core::WordPair;
use crate::engine::RandomSource;

/// Hands out random pairs that split at a given piece size
///
/// The same pair is never returned twice in a row unless it is the only one
/// that fits.
#[derive(Debug, Clone)]
pub struct PairPicker {
    pairs: Vec<WordPair>,
    last: Option<usize>,
}

impl PairPicker {
    #[must_use]
    pub const fn new(pairs: Vec<WordPair>) -> Self {
        Self { pairs, last: None }
    }

    /// Pick a pair whose words are both longer than `piece_size`
    ///
    /// Returns `None` if no pair fits.
    pub fn next<R: RandomSource + ?Sized>(
        &mut self,
        piece_size: usize,
        rng: &mut R,
    ) -> Option<WordPair> {
        let fitting: Vec<usize> = self
            .pairs
            .iter()
            .enumerate()
            .filter(|(_, pair)| pair.fits(piece_size))
            .map(|(i, _)| i)
            .collect();

        let candidates: Vec<usize> = if fitting.len() > 1 {
            fitting
                .iter()
                .copied()
                .filter(|&i| Some(i) != self.last)
                .collect()
        } else {
            fitting
        };

        if candidates.is_empty() {
            return None;
        }

        let chosen = candidates[rng.pick(candidates.len())];
        self.last = Some(chosen);
        Some(self.pairs[chosen].clone())
    }
}
