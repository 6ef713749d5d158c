//! Word pairs for the game
//!
//! Provides an embedded pair list compiled into the binary, a loader for
//! custom pair files and a picker that hands out pairs fitting a level.

mod embedded;
pub mod loader;
mod picker;

pub use embedded::{PAIRS, PAIRS_COUNT};
pub use picker::PairPicker;
