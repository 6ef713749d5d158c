//! Word mixing
//!
//! Splits both words of a pair into fixed-size pieces and scatters all pieces
//! over one flat array. Placement samples array slots without replacement, so
//! every slot is filled exactly once.

use super::EngineError;
use super::random::RandomSource;
use crate::core::WordPair;

/// Array positions of each word's first and last piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub first_begin: usize,
    pub first_end: usize,
    pub second_begin: usize,
    pub second_end: usize,
}

impl Boundaries {
    #[must_use]
    pub const fn as_array(&self) -> [usize; 4] {
        [
            self.first_begin,
            self.first_end,
            self.second_begin,
            self.second_end,
        ]
    }
}

/// Shuffled pieces of one word pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedPieces {
    pieces: Vec<String>,
    boundaries: Boundaries,
}

impl MixedPieces {
    /// Wrap an already shuffled piece array
    ///
    /// No validation happens here; `PieceRegistry::load_round` checks the
    /// boundaries against the array.
    #[must_use]
    pub const fn new(pieces: Vec<String>, boundaries: Boundaries) -> Self {
        Self { pieces, boundaries }
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    #[inline]
    #[must_use]
    pub const fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Boundaries) {
        (self.pieces, self.boundaries)
    }
}

/// Split a word into ordered pieces of `piece_size` characters
///
/// Every piece but the last has exactly `piece_size` characters; the last one
/// holds the remainder. Splits on characters, not bytes.
///
/// # Panics
/// Panics if `piece_size` is zero.
///
/// # Examples
/// ```
/// use wordmix::engine::split_word;
///
/// assert_eq!(split_word("wordone", 3), vec!["wor", "don", "e"]);
/// assert_eq!(split_word("secondword", 3), vec!["sec", "ond", "wor", "d"]);
/// ```
#[must_use]
pub fn split_word(word: &str, piece_size: usize) -> Vec<String> {
    assert!(piece_size > 0, "piece size must be positive");

    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(piece_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Split both words of `pair` and shuffle all pieces into one array
///
/// Pieces are placed in word order (first word start to end, then second
/// word), each into a uniformly drawn slot among those still free.
///
/// # Errors
/// Returns `EngineError` if `piece_size` is zero or not strictly smaller than
/// either word, since such a word would not yield distinct begin and end
/// pieces.
pub fn mix_words<R: RandomSource + ?Sized>(
    pair: &WordPair,
    piece_size: usize,
    rng: &mut R,
) -> Result<MixedPieces, EngineError> {
    if piece_size == 0 {
        return Err(EngineError::ZeroPieceSize);
    }

    for word in [pair.first(), pair.second()] {
        let length = word.chars().count();
        if length <= piece_size {
            return Err(EngineError::PieceSizeTooLarge {
                word: word.to_string(),
                length,
                piece_size,
            });
        }
    }

    let first_pieces = split_word(pair.first(), piece_size);
    let second_pieces = split_word(pair.second(), piece_size);
    let first_count = first_pieces.len();
    let total = first_count + second_pieces.len();

    let mut free_slots: Vec<usize> = (0..total).collect();
    let mut placed: Vec<String> = vec![String::new(); total];
    let mut positions = Vec::with_capacity(total);

    for piece in first_pieces.into_iter().chain(second_pieces) {
        let drawn = rng.pick(free_slots.len());
        let slot = free_slots.remove(drawn);
        placed[slot] = piece;
        positions.push(slot);
    }

    let boundaries = Boundaries {
        first_begin: positions[0],
        first_end: positions[first_count - 1],
        second_begin: positions[first_count],
        second_end: positions[total - 1],
    };

    Ok(MixedPieces::new(placed, boundaries))
}
