//! Word-assembly game engine
//!
//! Leaf-first: the splitter mixes a word pair into shuffled pieces, the
//! registry owns and classifies them, the assembler enforces the piece
//! sequencing rules for both target words, and the cursor controller offers
//! keyboard-only navigation over all three containers. `Game` coordinates
//! them and is the only type callers are expected to drive.

pub mod assembler;
pub mod cursor;
mod error;
pub mod events;
mod game;
pub mod random;
pub mod registry;
pub mod score;
pub mod splitter;

pub use assembler::{AddOutcome, InputAssembler, Rejection, Removal, WordInput};
pub use cursor::{CursorCommand, CursorController, CursorPosition};
pub use error::EngineError;
pub use events::GameEvent;
pub use game::{Game, GameConfig, Status};
pub use random::{RandomSource, ScriptedSource};
pub use registry::PieceRegistry;
pub use score::ScoreBoard;
pub use splitter::{Boundaries, MixedPieces, mix_words, split_word};
