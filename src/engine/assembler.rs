//! Input building state machine
//!
//! Each of the two target words is built by appending piece indexes. A word
//! must open with a begin piece, continue with middle pieces and close with
//! an end piece. Removal always drops a contiguous suffix.
//!
//! ```text
//!            begin            end
//!   Empty ─────────► Build ─────────► Completed
//!     ▲                │ ▲ middle        │
//!     │   remove(0)    │ └───────┘       │ remove(k > 0)
//!     └────────────────┘◄────────────────┘
//! ```

use crate::core::{InputState, PieceType, Slot};
use tracing::debug;

/// Ordered piece indexes committed to one target word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordInput {
    indexes: Vec<usize>,
    state: InputState,
}

impl WordInput {
    #[inline]
    #[must_use]
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> InputState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == InputState::Completed
    }

    fn reset(&mut self) {
        self.indexes.clear();
        self.state = InputState::Empty;
    }
}

/// Why a piece was not added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// An empty word can only start with a begin piece
    NotABegin,
    /// The word already has its begin piece
    DuplicateBegin,
    /// The word is already closed
    SlotCompleted,
    /// Closing this word would complete both while pieces remain unassigned
    CloseNotAllowed,
}

/// Result of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added {
        /// The piece closed its word
        word_completed: bool,
        /// Both words just became complete
        completion_changed: bool,
    },
    Rejected(Rejection),
}

impl AddOutcome {
    #[inline]
    #[must_use]
    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Result of a suffix removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub slot: Slot,
    /// Exactly the indexes dropped, in their former order
    pub removed: Vec<usize>,
    /// Both words were complete before the removal
    pub completion_changed: bool,
}

/// Builder for both target words
#[derive(Debug, Clone, Default)]
pub struct InputAssembler {
    inputs: [WordInput; 2],
    close_allowed: bool,
}

impl InputAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn input(&self, slot: Slot) -> &WordInput {
        &self.inputs[slot.index()]
    }

    #[inline]
    #[must_use]
    pub const fn state(&self, slot: Slot) -> InputState {
        self.inputs[slot.index()].state
    }

    /// Both words are closed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.inputs.iter().all(WordInput::is_completed)
    }

    /// Neither word has any piece
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.iter().all(WordInput::is_empty)
    }

    /// One word is closed and the other has not been started
    #[must_use]
    pub fn is_half_built(&self) -> bool {
        Slot::ALL.iter().any(|&slot| {
            self.state(slot) == InputState::Completed
                && self.state(slot.other()) == InputState::Empty
        })
    }

    /// Allow the next close attempt while the other word is complete
    ///
    /// The permission is one-shot: the first such close attempt consumes it,
    /// and any removal revokes it. Grant it only when the piece about to be
    /// added is the last unassigned one.
    pub fn grant_close(&mut self) {
        self.close_allowed = true;
    }

    #[inline]
    #[must_use]
    pub const fn is_close_allowed(&self) -> bool {
        self.close_allowed
    }

    /// Try to append `index` to `slot`
    pub fn add_piece(&mut self, slot: Slot, index: usize, piece_type: PieceType) -> AddOutcome {
        debug_assert!(
            !self.inputs.iter().any(|input| input.indexes.contains(&index)),
            "piece {index} is already part of an input"
        );

        let other_completed = self.input(slot.other()).is_completed();
        let next_state = match (self.state(slot), piece_type) {
            (InputState::Completed, _) => Err(Rejection::SlotCompleted),
            (InputState::Empty, PieceType::Begin) => Ok(InputState::BuildInProgress),
            (InputState::Empty, _) => Err(Rejection::NotABegin),
            (InputState::BuildInProgress, PieceType::Begin) => Err(Rejection::DuplicateBegin),
            (InputState::BuildInProgress, PieceType::Middle) => Ok(InputState::BuildInProgress),
            (InputState::BuildInProgress, PieceType::End) if other_completed => {
                if self.close_allowed {
                    self.close_allowed = false;
                    Ok(InputState::Completed)
                } else {
                    Err(Rejection::CloseNotAllowed)
                }
            }
            (InputState::BuildInProgress, PieceType::End) => Ok(InputState::Completed),
        };

        match next_state {
            Ok(state) => {
                let input = &mut self.inputs[slot.index()];
                input.indexes.push(index);
                input.state = state;

                let word_completed = state == InputState::Completed;
                AddOutcome::Added {
                    word_completed,
                    completion_changed: word_completed && other_completed,
                }
            }
            Err(reason) => {
                debug!(%slot, index, ?piece_type, ?reason, "piece rejected");
                AddOutcome::Rejected(reason)
            }
        }
    }

    /// Truncate `slot` to its first `range_start` pieces
    ///
    /// # Panics
    /// Panics if `range_start` is not a valid position in the slot; removing
    /// from an empty slot is a caller bug.
    pub fn remove_pieces(&mut self, slot: Slot, range_start: usize) -> Removal {
        let was_complete = self.is_complete();
        let input = &mut self.inputs[slot.index()];
        assert!(
            range_start < input.indexes.len(),
            "removal start {range_start} out of range for {} pieces",
            input.indexes.len()
        );

        let removed = input.indexes.split_off(range_start);
        input.state = if range_start == 0 {
            InputState::Empty
        } else {
            InputState::BuildInProgress
        };
        self.close_allowed = false;

        Removal {
            slot,
            removed,
            completion_changed: was_complete,
        }
    }

    /// Empty every non-empty word
    ///
    /// Returns one `Removal` per word that changed; an empty result means
    /// there was nothing to clear.
    pub fn clear_input(&mut self) -> Vec<Removal> {
        let mut removals = Vec::with_capacity(2);
        for slot in Slot::ALL {
            if !self.input(slot).is_empty() {
                removals.push(self.remove_pieces(slot, 0));
            }
        }
        removals
    }

    /// Reset both words for a new set of pieces
    ///
    /// Returns `true` if both words had been complete, i.e. completion
    /// changed.
    pub fn on_new_pieces(&mut self) -> bool {
        let was_complete = self.is_complete();
        for input in &mut self.inputs {
            input.reset();
        }
        self.close_allowed = false;
        was_complete
    }
}
