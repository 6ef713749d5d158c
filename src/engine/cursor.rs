//! Keyboard-only navigation
//!
//! The cursor is an optional overlay over three containers: the mixed piece
//! pool and the two word inputs. At most one position is active at a time,
//! either a selection in the pool or a removal start inside one input. The
//! controller owns no piece data; every decision reads the registry and the
//! assembler passed in by the caller.

use super::assembler::InputAssembler;
use super::registry::PieceRegistry;
use crate::core::{InputState, PieceType, Slot};
use tracing::trace;

/// The single active cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// Selected piece index in the mixed pool
    Pool(usize),
    /// First input position of the chunk marked for removal
    Removal(Slot, usize),
}

/// What acting on the current position should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    Add { slot: Slot, index: usize },
    Remove { slot: Slot, start: usize },
}

/// Containers in ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Pool,
    Input(Slot),
}

const RING: [Container; 3] = [
    Container::Pool,
    Container::Input(Slot::First),
    Container::Input(Slot::Second),
];

#[derive(Debug, Clone, Default)]
pub struct CursorController {
    position: Option<CursorPosition>,
}

impl CursorController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.position.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<CursorPosition> {
        self.position
    }

    /// Selected pool index, if the pool holds the cursor
    #[must_use]
    pub const fn pool_index(&self) -> Option<usize> {
        match self.position {
            Some(CursorPosition::Pool(index)) => Some(index),
            _ => None,
        }
    }

    /// Removal start in `slot`, if that input holds the cursor
    #[must_use]
    pub fn removal_index(&self, slot: Slot) -> Option<usize> {
        match self.position {
            Some(CursorPosition::Removal(s, start)) if s == slot => Some(start),
            _ => None,
        }
    }

    /// Turn cursor mode on
    ///
    /// While input is incomplete the cursor starts in the pool on the most
    /// useful piece; once both words are closed it starts on the last piece
    /// of word 1. Returns `false` if already enabled or there is nothing to
    /// point at.
    pub fn enable(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        if self.is_enabled() {
            return false;
        }
        self.position = initial_position(registry, assembler);
        self.is_enabled()
    }

    /// Turn cursor mode off; returns `false` if it was already off
    pub fn disable(&mut self) -> bool {
        self.position.take().is_some()
    }

    /// Re-seat an enabled cursor on a freshly loaded round
    pub fn restart(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.set(initial_position(registry, assembler))
    }

    /// Move to the next non-empty container
    ///
    /// Ring order is pool, word 1, word 2, back to pool. Inputs with nothing
    /// to remove are skipped, and so is the pool once every piece is placed,
    /// in which case the cursor wraps on to word 1.
    pub fn next_container(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        let Some(position) = self.position else {
            return false;
        };

        let current = match position {
            CursorPosition::Pool(_) => 0,
            CursorPosition::Removal(Slot::First, _) => 1,
            CursorPosition::Removal(Slot::Second, _) => 2,
        };

        let landed = (1..=RING.len())
            .map(|step| RING[(current + step) % RING.len()])
            .find_map(|container| land(container, registry, assembler));

        match landed {
            Some(next) => self.set(Some(next)),
            None => false,
        }
    }

    /// Step forward
    ///
    /// In the pool this moves to the next available piece, wrapping around.
    /// In an input it grows the removal chunk by one piece, stopping at the
    /// first piece of the word.
    pub fn increase(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        match self.position {
            Some(CursorPosition::Pool(index)) => {
                let next = cycle_pool(registry, index, true);
                self.set(next.map(CursorPosition::Pool))
            }
            Some(CursorPosition::Removal(slot, start)) => {
                debug_assert!(start < assembler.input(slot).len());
                self.set(Some(CursorPosition::Removal(slot, start.saturating_sub(1))))
            }
            None => false,
        }
    }

    /// Step backward
    ///
    /// In the pool this moves to the previous available piece, wrapping
    /// around. In an input it shrinks the removal chunk by one piece, never
    /// below the word's last piece.
    pub fn decrease(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        match self.position {
            Some(CursorPosition::Pool(index)) => {
                let next = cycle_pool(registry, index, false);
                self.set(next.map(CursorPosition::Pool))
            }
            Some(CursorPosition::Removal(slot, start)) => {
                let last = assembler.input(slot).len().saturating_sub(1);
                self.set(Some(CursorPosition::Removal(slot, (start + 1).min(last))))
            }
            None => false,
        }
    }

    /// The action the current position stands for
    ///
    /// `slot` picks the target word for pool selections. In removal mode both
    /// slots act the same and remove from the word holding the cursor.
    #[must_use]
    pub const fn act(&self, slot: Slot) -> Option<CursorCommand> {
        match self.position {
            Some(CursorPosition::Pool(index)) => Some(CursorCommand::Add { slot, index }),
            Some(CursorPosition::Removal(holder, start)) => Some(CursorCommand::Remove {
                slot: holder,
                start,
            }),
            None => None,
        }
    }

    /// Bring the cursor back to the pool after a removal
    pub fn after_removal(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        if !self.is_enabled() {
            return false;
        }
        match land(Container::Pool, registry, assembler) {
            Some(position) => self.set(Some(position)),
            None => self.refresh(registry, assembler),
        }
    }

    /// Keep the cursor valid after pieces moved
    ///
    /// A pool selection whose piece got placed moves on; when only one piece
    /// is left it is selected, and when nothing is left the cursor moves to
    /// the last piece of word 1. A removal start past the end of its shrunken
    /// input is clamped, or moved to the pool if the input emptied.
    pub fn refresh(&mut self, registry: &PieceRegistry, assembler: &InputAssembler) -> bool {
        let next = match self.position {
            None => return false,
            Some(CursorPosition::Pool(index)) => {
                if assembler.is_complete() || registry.count_unadded() == 0 {
                    land(Container::Input(Slot::First), registry, assembler)
                        .or_else(|| land(Container::Input(Slot::Second), registry, assembler))
                } else if registry.count_unadded() == 1 {
                    registry
                        .available_indexes()
                        .first()
                        .map(|&only| CursorPosition::Pool(only))
                } else if index >= registry.len() || registry.is_added(index) {
                    preferred_pool_index(registry, assembler).map(CursorPosition::Pool)
                } else {
                    Some(CursorPosition::Pool(index))
                }
            }
            Some(CursorPosition::Removal(slot, start)) => {
                let len = assembler.input(slot).len();
                if len == 0 {
                    initial_position(registry, assembler)
                } else {
                    Some(CursorPosition::Removal(slot, start.min(len - 1)))
                }
            }
        };

        // Never drop out of cursor mode just because nothing fits right now
        match next {
            Some(position) => self.set(Some(position)),
            None => false,
        }
    }

    fn set(&mut self, position: Option<CursorPosition>) -> bool {
        if self.position == position {
            return false;
        }
        trace!(from = ?self.position, to = ?position, "cursor moved");
        self.position = position;
        true
    }
}

fn initial_position(
    registry: &PieceRegistry,
    assembler: &InputAssembler,
) -> Option<CursorPosition> {
    if assembler.is_complete() {
        land(Container::Input(Slot::First), registry, assembler)
    } else {
        preferred_pool_index(registry, assembler).map(CursorPosition::Pool)
    }
}

fn land(
    container: Container,
    registry: &PieceRegistry,
    assembler: &InputAssembler,
) -> Option<CursorPosition> {
    match container {
        Container::Pool => preferred_pool_index(registry, assembler).map(CursorPosition::Pool),
        Container::Input(slot) => {
            let len = assembler.input(slot).len();
            (len > 0).then(|| CursorPosition::Removal(slot, len - 1))
        }
    }
}

/// Pick the pool piece the player most likely wants next
///
/// With no input, or one word closed and the other untouched, that is a
/// begin piece. A word in progress that lacks only its end piece gets that
/// end piece. Otherwise it is a middle piece, or an end piece once no middle
/// piece is left. Falls back to the first available piece.
#[must_use]
pub fn preferred_pool_index(registry: &PieceRegistry, assembler: &InputAssembler) -> Option<usize> {
    let available = registry.available_indexes();
    let first_of = |wanted: PieceType| {
        available
            .iter()
            .copied()
            .find(|&index| registry.piece_type(index) == wanted)
    };

    if assembler.is_empty() || assembler.is_half_built() {
        return first_of(PieceType::Begin).or_else(|| available.first().copied());
    }
    if let Some(end) = missing_end(registry, assembler) {
        return Some(end);
    }

    let wanted = if first_of(PieceType::Middle).is_some() {
        PieceType::Middle
    } else {
        PieceType::End
    };

    first_of(wanted).or_else(|| available.first().copied())
}

/// The end piece of a word whose input holds every other piece of it
///
/// The word an input is building is the one its begin piece came from.
fn missing_end(registry: &PieceRegistry, assembler: &InputAssembler) -> Option<usize> {
    let pair = registry.pair()?;
    let boundaries = registry.boundaries()?;

    Slot::ALL.into_iter().find_map(|slot| {
        let input = assembler.input(slot);
        if input.state() != InputState::BuildInProgress {
            return None;
        }
        let begin = *input.indexes().first()?;
        let (position, end) = if begin == boundaries.first_begin {
            (0, boundaries.first_end)
        } else if begin == boundaries.second_begin {
            (1, boundaries.second_end)
        } else {
            return None;
        };

        // A begin piece is always a full piece, so its length is the piece size
        let piece_size = registry.content(begin).chars().count();
        let piece_count = pair.word(position).chars().count().div_ceil(piece_size);
        (input.len() + 1 == piece_count && !registry.is_added(end)).then_some(end)
    })
}

fn cycle_pool(registry: &PieceRegistry, index: usize, forward: bool) -> Option<usize> {
    let available = registry.available_indexes();
    if available.is_empty() {
        return None;
    }

    let next = if forward {
        available
            .iter()
            .copied()
            .find(|&i| i > index)
            .unwrap_or(available[0])
    } else {
        available
            .iter()
            .rev()
            .copied()
            .find(|&i| i < index)
            .unwrap_or(available[available.len() - 1])
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordPair;
    use crate::engine::splitter::{Boundaries, MixedPieces};

    /// "wordone" / "secondword" at piece size 3, unshuffled:
    /// 0 wor(B) 1 don(M) 2 e(E) 3 sec(B) 4 ond(M) 5 wor(M) 6 d(E)
    fn setup() -> (PieceRegistry, InputAssembler, CursorController) {
        let pair = WordPair::new("wordone", "secondword", true).unwrap();
        let pieces = ["wor", "don", "e", "sec", "ond", "wor", "d"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let boundaries = Boundaries {
            first_begin: 0,
            first_end: 2,
            second_begin: 3,
            second_end: 6,
        };
        let mut registry = PieceRegistry::new();
        registry
            .load_round(pair, MixedPieces::new(pieces, boundaries))
            .unwrap();
        (registry, InputAssembler::new(), CursorController::new())
    }

    fn add(registry: &mut PieceRegistry, assembler: &mut InputAssembler, slot: Slot, index: usize) {
        if index == 6 && assembler.input(slot.other()).is_completed() {
            assembler.grant_close();
        }
        let outcome = assembler.add_piece(slot, index, registry.piece_type(index));
        assert!(outcome.is_added(), "{outcome:?}");
        registry.mark_added(index);
    }

    fn complete(registry: &mut PieceRegistry, assembler: &mut InputAssembler) {
        for index in [0, 1, 2] {
            add(registry, assembler, Slot::First, index);
        }
        for index in [3, 4, 5, 6] {
            add(registry, assembler, Slot::Second, index);
        }
    }

    #[test]
    fn enable_on_empty_input_selects_first_begin() {
        let (registry, assembler, mut cursor) = setup();
        assert!(cursor.enable(&registry, &assembler));
        assert_eq!(cursor.position(), Some(CursorPosition::Pool(0)));
        assert!(!cursor.enable(&registry, &assembler));
    }

    #[test]
    fn enable_mid_word_prefers_middle() {
        let (mut registry, mut assembler, mut cursor) = setup();
        add(&mut registry, &mut assembler, Slot::First, 0);
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(1));
    }

    #[test]
    fn enable_half_built_prefers_begin() {
        let (mut registry, mut assembler, mut cursor) = setup();
        for index in [0, 1, 2] {
            add(&mut registry, &mut assembler, Slot::First, index);
        }
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(3));
    }

    #[test]
    fn enable_without_middles_prefers_end() {
        let (mut registry, mut assembler, mut cursor) = setup();
        for index in [0, 1, 2] {
            add(&mut registry, &mut assembler, Slot::First, index);
        }
        for index in [3, 4, 5] {
            add(&mut registry, &mut assembler, Slot::Second, index);
        }
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(6));
    }

    #[test]
    fn enable_prefers_end_of_word_missing_only_its_end() {
        let (mut registry, mut assembler, mut cursor) = setup();
        add(&mut registry, &mut assembler, Slot::First, 0);
        add(&mut registry, &mut assembler, Slot::First, 1);
        cursor.enable(&registry, &assembler);
        // "ond" and "wor" are still in the pool but only "e" fits word 1
        assert_eq!(cursor.pool_index(), Some(2));
    }

    #[test]
    fn end_preference_follows_the_word_being_built() {
        let (mut registry, mut assembler, mut cursor) = setup();
        // Word 2 built in the first input
        for index in [3, 4, 5] {
            add(&mut registry, &mut assembler, Slot::First, index);
        }
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(6));
    }

    #[test]
    fn removal_back_to_missing_end_selects_it() {
        let (mut registry, mut assembler, mut cursor) = setup();
        add(&mut registry, &mut assembler, Slot::First, 0);
        cursor.enable(&registry, &assembler);
        add(&mut registry, &mut assembler, Slot::First, 1);
        add(&mut registry, &mut assembler, Slot::First, 2);
        add(&mut registry, &mut assembler, Slot::Second, 3);

        let removal = assembler.remove_pieces(Slot::First, 2);
        registry.mark_removed(&removal.removed);
        assert!(cursor.after_removal(&registry, &assembler));
        assert_eq!(cursor.pool_index(), Some(2));
    }

    #[test]
    fn enable_on_complete_input_targets_word_one_removal() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::First), Some(2));
        assert_eq!(cursor.pool_index(), None);
        assert_eq!(cursor.removal_index(Slot::Second), None);
    }

    #[test]
    fn enable_without_round_stays_disabled() {
        let mut cursor = CursorController::new();
        assert!(!cursor.enable(&PieceRegistry::new(), &InputAssembler::new()));
        assert!(!cursor.is_enabled());
    }

    #[test]
    fn disable_clears_position() {
        let (registry, assembler, mut cursor) = setup();
        cursor.enable(&registry, &assembler);
        assert!(cursor.disable());
        assert!(!cursor.disable());
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn disabled_cursor_ignores_navigation() {
        let (registry, assembler, mut cursor) = setup();
        assert!(!cursor.next_container(&registry, &assembler));
        assert!(!cursor.increase(&registry, &assembler));
        assert!(!cursor.decrease(&registry, &assembler));
        assert_eq!(cursor.act(Slot::First), None);
    }

    #[test]
    fn next_container_skips_empty_inputs() {
        let (registry, assembler, mut cursor) = setup();
        cursor.enable(&registry, &assembler);
        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.position(), Some(CursorPosition::Pool(0)));
    }

    #[test]
    fn next_container_cycles_through_inputs() {
        let (mut registry, mut assembler, mut cursor) = setup();
        add(&mut registry, &mut assembler, Slot::First, 0);
        add(&mut registry, &mut assembler, Slot::First, 1);
        add(&mut registry, &mut assembler, Slot::Second, 3);
        cursor.enable(&registry, &assembler);

        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::First), Some(1));
        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::Second), Some(0));
        cursor.next_container(&registry, &assembler);
        assert!(cursor.pool_index().is_some());
    }

    #[test]
    fn next_container_skips_pool_when_complete() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);

        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::Second), Some(3));
        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::First), Some(2));
    }

    #[test]
    fn three_steps_never_lose_the_cursor() {
        let (mut registry, mut assembler, mut cursor) = setup();
        let steps: [(Slot, usize); 7] = [
            (Slot::First, 0),
            (Slot::Second, 3),
            (Slot::First, 1),
            (Slot::Second, 4),
            (Slot::Second, 5),
            (Slot::First, 2),
            (Slot::Second, 6),
        ];
        cursor.enable(&registry, &assembler);
        for (slot, index) in steps {
            add(&mut registry, &mut assembler, slot, index);
            cursor.refresh(&registry, &assembler);
            for _ in 0..3 {
                cursor.next_container(&registry, &assembler);
                assert!(cursor.is_enabled());
            }
        }
    }

    #[test]
    fn pool_navigation_is_circular_over_available_pieces() {
        let (mut registry, mut assembler, mut cursor) = setup();
        add(&mut registry, &mut assembler, Slot::First, 0);
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(1));

        cursor.decrease(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(6)); // wraps past added piece 0
        cursor.increase(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(1));
        cursor.increase(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(2));
    }

    #[test]
    fn removal_navigation_is_bounded() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::First), Some(2));

        // Shrinking never selects zero pieces
        assert!(!cursor.decrease(&registry, &assembler));
        assert_eq!(cursor.removal_index(Slot::First), Some(2));

        // Growing stops at the whole word
        assert!(cursor.increase(&registry, &assembler));
        assert!(cursor.increase(&registry, &assembler));
        assert!(!cursor.increase(&registry, &assembler));
        assert_eq!(cursor.removal_index(Slot::First), Some(0));

        assert!(cursor.decrease(&registry, &assembler));
        assert_eq!(cursor.removal_index(Slot::First), Some(1));
    }

    #[test]
    fn act_in_pool_targets_requested_word() {
        let (registry, assembler, mut cursor) = setup();
        cursor.enable(&registry, &assembler);
        assert_eq!(
            cursor.act(Slot::Second),
            Some(CursorCommand::Add {
                slot: Slot::Second,
                index: 0
            })
        );
    }

    #[test]
    fn act_in_removal_ignores_requested_word() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);

        let expected = Some(CursorCommand::Remove {
            slot: Slot::First,
            start: 2,
        });
        assert_eq!(cursor.act(Slot::First), expected);
        assert_eq!(cursor.act(Slot::Second), expected);
    }

    #[test]
    fn refresh_selects_last_remaining_piece() {
        let (mut registry, mut assembler, mut cursor) = setup();
        for index in [0, 1, 2, 3, 4] {
            let slot = if index < 3 { Slot::First } else { Slot::Second };
            add(&mut registry, &mut assembler, slot, index);
        }
        cursor.enable(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(5));

        add(&mut registry, &mut assembler, Slot::Second, 5);
        cursor.refresh(&registry, &assembler);
        assert_eq!(cursor.pool_index(), Some(6));
    }

    #[test]
    fn refresh_after_final_add_moves_to_word_one() {
        let (mut registry, mut assembler, mut cursor) = setup();
        cursor.enable(&registry, &assembler);
        complete(&mut registry, &mut assembler);
        cursor.refresh(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::First), Some(2));
    }

    #[test]
    fn refresh_clamps_removal_start() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);
        cursor.next_container(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::Second), Some(3));

        let removal = assembler.remove_pieces(Slot::Second, 2);
        registry.mark_removed(&removal.removed);
        cursor.refresh(&registry, &assembler);
        assert_eq!(cursor.removal_index(Slot::Second), Some(1));
    }

    #[test]
    fn after_removal_returns_to_pool() {
        let (mut registry, mut assembler, mut cursor) = setup();
        complete(&mut registry, &mut assembler);
        cursor.enable(&registry, &assembler);

        let removal = assembler.remove_pieces(Slot::First, 2);
        registry.mark_removed(&removal.removed);
        assert!(cursor.after_removal(&registry, &assembler));
        assert_eq!(cursor.pool_index(), Some(2));
    }
}
