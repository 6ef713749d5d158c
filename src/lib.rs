//! Word Mix
//!
//! A word-reconstruction puzzle engine. Two related words (synonyms or
//! antonyms) are cut into fixed-size pieces and shuffled together; the player
//! rebuilds both words by moving pieces into two inputs, either directly or
//! with a keyboard-style cursor.
//!
//! # Quick Start
//!
//! ```rust
//! use wordmix::core::{Level, Slot, WordPair};
//! use wordmix::engine::{Game, ScriptedSource, Status};
//!
//! let pair = WordPair::new("happy", "joyful", true).unwrap();
//! let mut game = Game::new(Level::Easy, ScriptedSource::default());
//! game.new_round(pair).unwrap();
//!
//! // Unshuffled order: hap py | joy ful
//! game.add_piece(Slot::First, 0);
//! game.add_piece(Slot::First, 1);
//! game.add_piece(Slot::Second, 2);
//! game.add_piece(Slot::Second, 3);
//! assert_eq!(game.submit(), Status::Solved);
//! ```

// Core domain types
pub mod core;

// Mixing, assembly, cursor and round coordination
pub mod engine;

// Word pairs
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
