//! Reference word pair representation
//!
//! A `WordPair` holds the two reference words of a round and whether they are
//! synonyms or antonyms. Lengths are measured in characters, never bytes.

use std::fmt;
use thiserror::Error;

/// Two reference words plus their relation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    first: String,
    second: String,
    are_synonyms: bool,
}

/// Error type for invalid word pairs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("Word pair contains an empty word")]
    EmptyWord,
    #[error("Word '{0}' must contain letters only")]
    InvalidCharacters(String),
}

impl WordPair {
    /// Create a new pair from two words
    ///
    /// Surrounding whitespace is trimmed; the words keep their case.
    ///
    /// # Errors
    /// Returns `PairError` if either word is empty or contains anything other
    /// than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use wordmix::core::WordPair;
    ///
    /// let pair = WordPair::new("happy", "joyful", true).unwrap();
    /// assert_eq!(pair.first(), "happy");
    /// assert!(pair.fits(3));
    ///
    /// assert!(WordPair::new("", "joyful", true).is_err());
    /// assert!(WordPair::new("ha ppy", "joyful", true).is_err());
    /// ```
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        are_synonyms: bool,
    ) -> Result<Self, PairError> {
        let first = validate(first.into())?;
        let second = validate(second.into())?;

        Ok(Self {
            first,
            second,
            are_synonyms,
        })
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Get the word occupying the given slot position (0 = first, 1 = second)
    #[must_use]
    pub fn word(&self, position: usize) -> &str {
        if position == 0 { &self.first } else { &self.second }
    }

    #[inline]
    #[must_use]
    pub const fn are_synonyms(&self) -> bool {
        self.are_synonyms
    }

    /// Check whether both words split into at least two pieces of `piece_size`
    #[must_use]
    pub fn fits(&self, piece_size: usize) -> bool {
        piece_size > 0
            && self.first.chars().count() > piece_size
            && self.second.chars().count() > piece_size
    }

    /// Check whether two assembled words solve this pair, in either order
    #[must_use]
    pub fn matches(&self, first: &str, second: &str) -> bool {
        (first == self.first && second == self.second)
            || (first == self.second && second == self.first)
    }
}

fn validate(word: String) -> Result<String, PairError> {
    let trimmed = word.trim();

    if trimmed.is_empty() {
        return Err(PairError::EmptyWord);
    }

    if !trimmed.chars().all(char::is_alphabetic) {
        return Err(PairError::InvalidCharacters(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = if self.are_synonyms {
            "synonyms"
        } else {
            "antonyms"
        };
        write!(f, "{} / {} ({relation})", self.first, self.second)
    }
}
