//! Core domain types for the word-assembly game
//!
//! This module contains the plain value types shared by the engine, the word
//! lists and the command layer. Nothing here owns round state.

mod level;
mod pair;
mod piece;

pub use level::{Level, LevelError};
pub use pair::{PairError, WordPair};
pub use piece::{InputState, Piece, PieceType, Slot};
