//! Pair list loading utilities
//!
//! Pair files hold one pair per line: `<first> <second> <syn|ant>`. Blank
//! lines and lines starting with `#` are ignored.

use crate::core::{PairError, WordPair};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read pair file: {0}")]
    Io(#[from] io::Error),
    #[error("Pair file contains no valid pairs")]
    NoPairs,
}

/// Why a single line could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected '<first> <second> <syn|ant>'")]
    FieldCount,
    #[error("unknown relation '{0}' (expected syn or ant)")]
    Relation(String),
    #[error(transparent)]
    Pair(#[from] PairError),
}

/// Load pairs from a file
///
/// Malformed lines and repeated pairs are skipped with a warning.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::NoPairs` if it yields no valid pair.
///
/// # Examples
/// ```no_run
/// use wordmix::wordlists::loader::load_from_file;
///
/// let pairs = load_from_file("data/pairs.txt").unwrap();
/// println!("Loaded {} pairs", pairs.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordPair>, LoadError> {
    let content = fs::read_to_string(path)?;
    let pairs = parse_pairs(&content);

    if pairs.is_empty() {
        return Err(LoadError::NoPairs);
    }
    Ok(pairs)
}

/// Parse pair-file content, skipping bad and duplicate lines
#[must_use]
pub fn parse_pairs(content: &str) -> Vec<WordPair> {
    let mut seen = FxHashSet::default();
    let mut pairs = Vec::new();

    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            None => {}
            Some(Ok(pair)) => {
                if seen.insert(pair.clone()) {
                    pairs.push(pair);
                } else {
                    warn!(line = number + 1, %pair, "duplicate pair skipped");
                }
            }
            Some(Err(err)) => {
                warn!(line = number + 1, error = %err, "invalid pair line skipped");
            }
        }
    }

    pairs
}

/// Parse one line; `None` for blank and comment lines
#[must_use]
pub fn parse_line(line: &str) -> Option<Result<WordPair, LineError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [first, second, relation] = fields.as_slice() else {
        return Some(Err(LineError::FieldCount));
    };

    let are_synonyms = match relation.to_lowercase().as_str() {
        "syn" | "synonym" | "synonyms" => true,
        "ant" | "antonym" | "antonyms" => false,
        other => return Some(Err(LineError::Relation(other.to_string()))),
    };

    Some(WordPair::new(*first, *second, are_synonyms).map_err(LineError::from))
}

/// Convert the embedded table to `WordPair`s, skipping invalid entries
///
/// # Examples
/// ```
/// use wordmix::wordlists::loader::pairs_from_slice;
/// use wordmix::wordlists::PAIRS;
///
/// let pairs = pairs_from_slice(PAIRS);
/// assert_eq!(pairs.len(), PAIRS.len());
/// ```
#[must_use]
pub fn pairs_from_slice(slice: &[(&str, &str, bool)]) -> Vec<WordPair> {
    slice
        .iter()
        .filter_map(|&(first, second, syn)| WordPair::new(first, second, syn).ok())
        .collect()
}
