//! Round coordination
//!
//! `Game` owns the registry, the assembler and the cursor, sequences the
//! round lifecycle (new round, input, submit, solved or retry) and is the one
//! entry point for front-ends. Every call returns a `Status` for the
//! presentation layer to phrase, and queues `GameEvent`s for whatever
//! changed.

use super::assembler::{AddOutcome, InputAssembler, Rejection, Removal, WordInput};
use super::cursor::{CursorCommand, CursorController, CursorPosition};
use super::events::GameEvent;
use super::random::RandomSource;
use super::registry::PieceRegistry;
use super::score::ScoreBoard;
use super::EngineError;
use super::splitter::mix_words;
use crate::core::{InputState, Level, Piece, PieceType, Slot, WordPair};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Settings a game is created with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub level: Level,
    /// Fixed seed for reproducible shuffles; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Outcome of a game call, mapped to text by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    RoundStarted,
    NoRoundInProgress,
    LevelChanged,
    PieceAdded,
    PieceNotAdded(Rejection),
    /// The piece index is out of range or already placed
    PieceUnavailable,
    PiecesRemoved,
    /// The removal start is not a position in that word
    InvalidRemoval,
    InputCleared,
    NothingToClear,
    /// Both words must be complete before submitting
    InputIncomplete,
    Solved,
    IncorrectWords,
    SolutionShown,
    CursorEnabled,
    CursorDisabled,
    CursorMoved,
    /// An action needs cursor mode to be on
    CursorRequired,
    /// Nothing changed
    Ignored,
}

/// The word-assembly game
pub struct Game<R: RandomSource = StdRng> {
    rng: R,
    level: Level,
    registry: PieceRegistry,
    assembler: InputAssembler,
    cursor: CursorController,
    score: ScoreBoard,
    events: Vec<GameEvent>,
    round_active: bool,
}

impl Game<StdRng> {
    /// Create a game seeded from `config`
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(config.level, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an explicit random source
    ///
    /// # Examples
    /// ```
    /// use wordmix::core::{Level, Slot, WordPair};
    /// use wordmix::engine::{Game, ScriptedSource, Status};
    ///
    /// // An all-zero script keeps pieces in word order
    /// let mut game = Game::new(Level::Easy, ScriptedSource::default());
    /// let pair = WordPair::new("wordone", "secondword", false).unwrap();
    /// assert_eq!(game.new_round(pair).unwrap(), Status::RoundStarted);
    /// assert_eq!(game.piece_contents(), vec!["wor", "don", "e", "sec", "ond", "wor", "d"]);
    ///
    /// assert_eq!(game.add_piece(Slot::First, 0), Status::PieceAdded);
    /// assert_eq!(game.add_piece(Slot::First, 2), Status::PieceAdded);
    /// assert!(!game.is_complete());
    /// ```
    pub fn new(level: Level, rng: R) -> Self {
        Self {
            rng,
            level,
            registry: PieceRegistry::new(),
            assembler: InputAssembler::new(),
            cursor: CursorController::new(),
            score: ScoreBoard::new(),
            events: Vec::new(),
            round_active: false,
        }
    }

    // ---- Round lifecycle ----

    /// Mix `pair` at the current level and start a round with it
    ///
    /// # Errors
    /// Returns `EngineError` if the pair cannot be split at the current piece
    /// size. The previous round stays in place in that case.
    pub fn new_round(&mut self, pair: WordPair) -> Result<Status, EngineError> {
        let mixed = mix_words(&pair, self.level.piece_size(), &mut self.rng)?;
        self.registry.load_round(pair, mixed)?;

        self.track_cursor(|game| {
            if game.assembler.on_new_pieces() {
                game.events
                    .push(GameEvent::CompletionChanged { complete: false });
            }
            game.round_active = true;
            game.score.round_started(game.level);
            game.cursor.restart(&game.registry, &game.assembler);
        });

        debug!(level = %self.level, pieces = self.registry.len(), "round started");
        self.events.push(GameEvent::RoundStarted);
        self.events.push(GameEvent::InputChanged);
        self.events.push(GameEvent::SelectionChanged);
        self.events.push(GameEvent::ScoreChanged);
        Ok(Status::RoundStarted)
    }

    /// Change the level used by the next round
    pub fn set_level(&mut self, level: Level) -> Status {
        if level == self.level {
            return Status::Ignored;
        }
        debug!(from = %self.level, to = %level, "level changed");
        self.level = level;
        Status::LevelChanged
    }

    /// Check the assembled words against the reference pair
    ///
    /// Either order is accepted. A wrong answer leaves the round running so
    /// the player can retry.
    pub fn submit(&mut self) -> Status {
        if !self.round_active {
            return Status::NoRoundInProgress;
        }
        if !self.assembler.is_complete() {
            return Status::InputIncomplete;
        }

        let first = self.assembled_word(Slot::First);
        let second = self.assembled_word(Slot::Second);
        let solved = self
            .registry
            .pair()
            .is_some_and(|pair| pair.matches(&first, &second));

        debug!(%first, %second, solved, "input submitted");
        if !solved {
            return Status::IncorrectWords;
        }

        self.round_active = false;
        self.score.round_won(self.level);
        self.events.push(GameEvent::RoundEnded { solved: true });
        self.events.push(GameEvent::ScoreChanged);
        Status::Solved
    }

    /// Give the round up; the reference words stay readable for display
    pub fn show_solution(&mut self) -> Status {
        if !self.round_active {
            return Status::NoRoundInProgress;
        }
        self.round_active = false;
        self.events.push(GameEvent::RoundEnded { solved: false });
        Status::SolutionShown
    }

    // ---- Input ----

    /// Move the pool piece at `index` to the end of `slot`
    pub fn add_piece(&mut self, slot: Slot, index: usize) -> Status {
        if !self.round_active {
            return Status::NoRoundInProgress;
        }
        if index >= self.registry.len() || self.registry.is_added(index) {
            return Status::PieceUnavailable;
        }
        self.track_cursor(|game| game.apply_add(slot, index))
    }

    /// Return the pieces of `slot` from `start` onwards to the pool
    pub fn remove_pieces(&mut self, slot: Slot, start: usize) -> Status {
        if !self.round_active {
            return Status::NoRoundInProgress;
        }
        if start >= self.assembler.input(slot).len() {
            return Status::InvalidRemoval;
        }
        self.track_cursor(|game| {
            game.apply_removal(slot, start);
            game.cursor.refresh(&game.registry, &game.assembler);
            Status::PiecesRemoved
        })
    }

    /// Return every placed piece to the pool
    pub fn clear_input(&mut self) -> Status {
        if !self.round_active {
            return Status::NoRoundInProgress;
        }
        self.track_cursor(|game| {
            let removals = game.assembler.clear_input();
            if removals.is_empty() {
                return Status::NothingToClear;
            }
            for removal in removals {
                game.record_removal(removal);
            }
            game.cursor.refresh(&game.registry, &game.assembler);
            Status::InputCleared
        })
    }

    fn apply_add(&mut self, slot: Slot, index: usize) -> Status {
        let piece_type = self.registry.piece_type(index);

        // Closing the second word is only legal with this piece as the last
        // unassigned one, which finishes the whole input
        if piece_type == PieceType::End
            && self.assembler.state(slot) == InputState::BuildInProgress
            && self.assembler.input(slot.other()).is_completed()
            && self.registry.count_unadded() == 1
        {
            self.assembler.grant_close();
        }

        match self.assembler.add_piece(slot, index, piece_type) {
            AddOutcome::Added {
                completion_changed, ..
            } => {
                if self.registry.mark_added(index) {
                    self.events.push(GameEvent::SelectionChanged);
                }
                self.events.push(GameEvent::PieceAdded { slot, index });
                self.events.push(GameEvent::InputChanged);
                if completion_changed {
                    self.events
                        .push(GameEvent::CompletionChanged { complete: true });
                }
                self.cursor.refresh(&self.registry, &self.assembler);
                Status::PieceAdded
            }
            AddOutcome::Rejected(reason) => Status::PieceNotAdded(reason),
        }
    }

    fn apply_removal(&mut self, slot: Slot, start: usize) {
        let removal = self.assembler.remove_pieces(slot, start);
        self.record_removal(removal);
    }

    fn record_removal(&mut self, removal: Removal) {
        if self.registry.mark_removed(&removal.removed) {
            self.events.push(GameEvent::SelectionChanged);
        }
        self.events.push(GameEvent::PiecesRemoved {
            slot: removal.slot,
            indexes: removal.removed,
        });
        self.events.push(GameEvent::InputChanged);
        if removal.completion_changed {
            self.events
                .push(GameEvent::CompletionChanged { complete: false });
        }
    }

    // ---- Cursor mode ----

    pub fn enable_cursor(&mut self) -> Status {
        if !self.registry.has_round() {
            return Status::NoRoundInProgress;
        }
        let enabled = self.track_cursor(|game| game.cursor.enable(&game.registry, &game.assembler));
        if enabled {
            Status::CursorEnabled
        } else {
            Status::Ignored
        }
    }

    pub fn disable_cursor(&mut self) -> Status {
        if self.track_cursor(|game| game.cursor.disable()) {
            Status::CursorDisabled
        } else {
            Status::Ignored
        }
    }

    /// Flip cursor mode
    pub fn toggle_cursor(&mut self) -> Status {
        if self.cursor.is_enabled() {
            self.disable_cursor()
        } else {
            self.enable_cursor()
        }
    }

    pub fn cursor_next_container(&mut self) -> Status {
        let moved = self.track_cursor(|game| {
            game.cursor.next_container(&game.registry, &game.assembler)
        });
        Self::moved_status(moved)
    }

    pub fn cursor_increase(&mut self) -> Status {
        let moved = self.track_cursor(|game| game.cursor.increase(&game.registry, &game.assembler));
        Self::moved_status(moved)
    }

    pub fn cursor_decrease(&mut self) -> Status {
        let moved = self.track_cursor(|game| game.cursor.decrease(&game.registry, &game.assembler));
        Self::moved_status(moved)
    }

    /// Act on the cursor position
    ///
    /// A pool selection is added to `slot`; a removal position removes from
    /// its own word whichever slot was asked for.
    pub fn cursor_act(&mut self, slot: Slot) -> Status {
        let Some(command) = self.cursor.act(slot) else {
            return Status::CursorRequired;
        };
        if !self.round_active {
            return Status::NoRoundInProgress;
        }

        self.track_cursor(|game| match command {
            CursorCommand::Add { slot, index } => game.apply_add(slot, index),
            CursorCommand::Remove { slot, start } => {
                game.apply_removal(slot, start);
                game.cursor.after_removal(&game.registry, &game.assembler);
                Status::PiecesRemoved
            }
        })
    }

    const fn moved_status(moved: bool) -> Status {
        if moved {
            Status::CursorMoved
        } else {
            Status::Ignored
        }
    }

    /// Run `f` and queue a cursor event if the position changed
    fn track_cursor<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let before = self.cursor.position();
        let result = f(self);
        let after = self.cursor.position();
        if before != after {
            self.events.push(GameEvent::CursorMoved { position: after });
        }
        result
    }

    // ---- Queries ----

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn is_round_active(&self) -> bool {
        self.round_active
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        self.registry.pieces()
    }

    #[must_use]
    pub fn piece_contents(&self) -> Vec<&str> {
        self.registry.contents()
    }

    #[must_use]
    pub fn piece_types(&self) -> Vec<PieceType> {
        self.registry.types()
    }

    #[must_use]
    pub fn piece_added_flags(&self) -> Vec<bool> {
        self.registry.added_flags()
    }

    #[must_use]
    pub fn available_indexes(&self) -> Vec<usize> {
        self.registry.available_indexes()
    }

    #[inline]
    #[must_use]
    pub const fn input(&self, slot: Slot) -> &WordInput {
        self.assembler.input(slot)
    }

    #[must_use]
    pub fn input_indexes(&self, slot: Slot) -> &[usize] {
        self.assembler.input(slot).indexes()
    }

    /// The text currently built in `slot`
    #[must_use]
    pub fn assembled_word(&self, slot: Slot) -> String {
        self.input_indexes(slot)
            .iter()
            .map(|&index| self.registry.content(index))
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assembler.is_complete()
    }

    #[inline]
    #[must_use]
    pub const fn is_cursor_enabled(&self) -> bool {
        self.cursor.is_enabled()
    }

    #[inline]
    #[must_use]
    pub const fn cursor_position(&self) -> Option<CursorPosition> {
        self.cursor.position()
    }

    /// The current round's pair, for win and solution display
    #[inline]
    #[must_use]
    pub const fn reference_words(&self) -> Option<&WordPair> {
        self.registry.pair()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn reset_score(&mut self) {
        if self.score != ScoreBoard::default() {
            self.score.reset();
            self.events.push(GameEvent::ScoreChanged);
        }
    }

    /// Drain queued change notifications, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::ScriptedSource;

    /// Unshuffled "wordone" / "secondword" at piece size 3:
    /// 0 wor(B) 1 don(M) 2 e(E) 3 sec(B) 4 ond(M) 5 wor(M) 6 d(E)
    fn game() -> Game<ScriptedSource> {
        let mut game = Game::new(Level::Easy, ScriptedSource::default());
        let pair = WordPair::new("wordone", "secondword", false).unwrap();
        game.new_round(pair).unwrap();
        game.take_events();
        game
    }

    fn fill(game: &mut Game<ScriptedSource>, first: &[usize], second: &[usize]) {
        for &index in first {
            assert_eq!(game.add_piece(Slot::First, index), Status::PieceAdded);
        }
        for &index in second {
            assert_eq!(game.add_piece(Slot::Second, index), Status::PieceAdded);
        }
    }

    #[test]
    fn new_round_loads_pieces_and_scores() {
        let game = game();
        assert_eq!(game.pieces().len(), 7);
        assert!(game.is_round_active());
        assert_eq!(game.score().rounds_played, 1);
        assert_eq!(game.score().available, 1);
    }

    #[test]
    fn new_round_rejects_pairs_too_short_for_level() {
        let mut game = Game::new(Level::Easy, ScriptedSource::default());
        let pair = WordPair::new("big", "enormous", true).unwrap();
        assert!(matches!(
            game.new_round(pair),
            Err(EngineError::PieceSizeTooLarge { .. })
        ));
        assert!(!game.is_round_active());
    }

    #[test]
    fn closing_word_one_with_word_two_untouched() {
        let mut game = game();
        fill(&mut game, &[0, 2], &[]);
        assert_eq!(game.input(Slot::First).state(), InputState::Completed);
        assert!(!game.is_complete());
    }

    #[test]
    fn adding_placed_piece_is_unavailable() {
        let mut game = game();
        fill(&mut game, &[0], &[]);
        assert_eq!(game.add_piece(Slot::Second, 0), Status::PieceUnavailable);
        assert_eq!(game.add_piece(Slot::Second, 42), Status::PieceUnavailable);
    }

    #[test]
    fn second_close_refused_while_pieces_remain() {
        let mut game = game();
        // Word 1 built from pieces of the wrong word, leaving spares behind
        fill(&mut game, &[3, 6], &[0]);
        assert_eq!(
            game.add_piece(Slot::Second, 2),
            Status::PieceNotAdded(Rejection::CloseNotAllowed)
        );
    }

    #[test]
    fn second_close_allowed_for_last_piece() {
        let mut game = game();
        fill(&mut game, &[0, 1, 2], &[3, 4, 5]);
        game.take_events();

        assert_eq!(game.add_piece(Slot::Second, 6), Status::PieceAdded);
        assert!(game.is_complete());
        assert!(
            game.take_events()
                .contains(&GameEvent::CompletionChanged { complete: true })
        );
    }

    #[test]
    fn add_emits_expected_events() {
        let mut game = game();
        game.add_piece(Slot::First, 0);
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::SelectionChanged,
                GameEvent::PieceAdded {
                    slot: Slot::First,
                    index: 0
                },
                GameEvent::InputChanged,
            ]
        );
    }

    #[test]
    fn rejected_add_emits_nothing() {
        let mut game = game();
        assert_eq!(
            game.add_piece(Slot::First, 1),
            Status::PieceNotAdded(Rejection::NotABegin)
        );
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn removal_returns_pieces_to_pool() {
        let mut game = game();
        fill(&mut game, &[0, 1, 2], &[]);
        game.take_events();

        assert_eq!(game.remove_pieces(Slot::First, 1), Status::PiecesRemoved);
        assert_eq!(game.input_indexes(Slot::First), &[0]);
        assert_eq!(game.available_indexes(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::SelectionChanged,
                GameEvent::PiecesRemoved {
                    slot: Slot::First,
                    indexes: vec![1, 2]
                },
                GameEvent::InputChanged,
            ]
        );
    }

    #[test]
    fn invalid_removal_is_reported() {
        let mut game = game();
        assert_eq!(game.remove_pieces(Slot::First, 0), Status::InvalidRemoval);
        fill(&mut game, &[0], &[]);
        assert_eq!(game.remove_pieces(Slot::First, 1), Status::InvalidRemoval);
    }

    #[test]
    fn clear_input_reports_nothing_when_empty() {
        let mut game = game();
        assert_eq!(game.clear_input(), Status::NothingToClear);
        fill(&mut game, &[0], &[3]);
        assert_eq!(game.clear_input(), Status::InputCleared);
        assert_eq!(game.available_indexes().len(), 7);
    }

    #[test]
    fn submit_accepts_either_order() {
        let mut game = game();
        fill(&mut game, &[3, 4, 5, 6], &[0, 1, 2]);
        assert_eq!(game.assembled_word(Slot::First), "secondword");
        assert_eq!(game.submit(), Status::Solved);
        assert!(!game.is_round_active());
        assert_eq!(game.score().obtained, 1);
        assert_eq!(game.submit(), Status::NoRoundInProgress);
    }

    #[test]
    fn submit_requires_complete_input() {
        let mut game = game();
        fill(&mut game, &[0, 1, 2], &[3, 4]);
        assert_eq!(game.submit(), Status::InputIncomplete);

        fill(&mut game, &[], &[5, 6]);
        assert_eq!(game.submit(), Status::Solved);
    }

    #[test]
    fn submit_incorrect_keeps_reference_words() {
        let mut game = Game::new(Level::Hard, ScriptedSource::default());
        let pair = WordPair::new("abc", "cba", false).unwrap();
        game.new_round(pair.clone()).unwrap();
        // 0 a(B) 1 b(M) 2 c(E) 3 c(B) 4 b(M) 5 a(E)
        fill(&mut game, &[0, 4, 2], &[3, 1, 5]);

        assert_eq!(game.assembled_word(Slot::First), "abc");
        assert_eq!(game.assembled_word(Slot::Second), "cba");
        assert_eq!(game.submit(), Status::Solved);

        let mut game = Game::new(Level::Hard, ScriptedSource::default());
        game.new_round(pair.clone()).unwrap();
        fill(&mut game, &[0, 1, 5], &[3, 4, 2]);
        assert_eq!(game.assembled_word(Slot::First), "aba");
        assert_eq!(game.submit(), Status::IncorrectWords);
        assert!(game.is_round_active());
        assert_eq!(game.reference_words(), Some(&pair));
    }

    #[test]
    fn show_solution_ends_round() {
        let mut game = game();
        assert_eq!(game.show_solution(), Status::SolutionShown);
        assert_eq!(game.add_piece(Slot::First, 0), Status::NoRoundInProgress);
        assert_eq!(game.reference_words().unwrap().first(), "wordone");
        assert_eq!(game.score().obtained, 0);
    }

    #[test]
    fn level_change_applies_to_next_round() {
        let mut game = game();
        assert_eq!(game.set_level(Level::Hard), Status::LevelChanged);
        assert_eq!(game.set_level(Level::Hard), Status::Ignored);
        assert_eq!(game.pieces().len(), 7);

        let pair = WordPair::new("wordone", "secondword", false).unwrap();
        game.new_round(pair).unwrap();
        assert_eq!(game.pieces().len(), 17);
    }

    #[test]
    fn new_round_after_complete_input_reports_completion_change() {
        let mut game = game();
        fill(&mut game, &[0, 1, 2], &[3, 4, 5, 6]);
        game.take_events();

        let pair = WordPair::new("wordone", "secondword", false).unwrap();
        game.new_round(pair).unwrap();
        let events = game.take_events();
        assert!(events.contains(&GameEvent::CompletionChanged { complete: false }));
        assert!(events.contains(&GameEvent::RoundStarted));
        assert!(game.input(Slot::First).is_empty());
    }

    #[test]
    fn cursor_act_requires_cursor_mode() {
        let mut game = game();
        assert_eq!(game.cursor_act(Slot::First), Status::CursorRequired);
        assert_eq!(game.cursor_increase(), Status::Ignored);
        assert_eq!(game.cursor_next_container(), Status::Ignored);
    }

    #[test]
    fn cursor_plays_a_full_round() {
        let mut game = game();
        assert_eq!(game.enable_cursor(), Status::CursorEnabled);
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(0)));

        // wor, don, e into word 1
        assert_eq!(game.cursor_act(Slot::First), Status::PieceAdded);
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(1)));
        assert_eq!(game.cursor_act(Slot::First), Status::PieceAdded);
        // Only the end piece of word 1 is missing
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(2)));
        assert_eq!(game.cursor_act(Slot::First), Status::PieceAdded);

        // Half built: begin piece of word 2 is preferred
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(3)));
        for _ in 0..3 {
            assert_eq!(game.cursor_act(Slot::Second), Status::PieceAdded);
        }
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(6)));
        assert_eq!(game.cursor_act(Slot::Second), Status::PieceAdded);

        assert!(game.is_complete());
        assert_eq!(
            game.cursor_position(),
            Some(CursorPosition::Removal(Slot::First, 2))
        );
        assert_eq!(game.submit(), Status::Solved);
    }

    #[test]
    fn cursor_removal_returns_to_pool() {
        let mut game = game();
        fill(&mut game, &[0, 1, 2], &[3, 4, 5, 6]);
        game.enable_cursor();
        game.cursor_next_container();
        game.cursor_increase();
        assert_eq!(
            game.cursor_position(),
            Some(CursorPosition::Removal(Slot::Second, 2))
        );
        game.take_events();

        // Either act key removes in removal mode
        assert_eq!(game.cursor_act(Slot::First), Status::PiecesRemoved);
        assert_eq!(game.input_indexes(Slot::Second), &[3, 4]);
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(5)));

        let events = game.take_events();
        assert!(events.contains(&GameEvent::CompletionChanged { complete: false }));
        assert!(events.contains(&GameEvent::CursorMoved {
            position: Some(CursorPosition::Pool(5))
        }));
    }

    #[test]
    fn cursor_moves_to_missing_end_after_direct_adds() {
        let mut game = game();
        fill(&mut game, &[0, 1], &[]);
        game.enable_cursor();
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(2)));
        assert_eq!(game.cursor_act(Slot::First), Status::PieceAdded);
        assert_eq!(game.input(Slot::First).state(), InputState::Completed);
    }

    #[test]
    fn direct_add_keeps_cursor_valid() {
        let mut game = game();
        game.enable_cursor();
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(0)));
        game.add_piece(Slot::First, 0);
        assert_eq!(game.cursor_position(), Some(CursorPosition::Pool(1)));
    }

    #[test]
    fn cursor_enable_and_disable_emit_once() {
        let mut game = game();
        game.enable_cursor();
        assert_eq!(game.enable_cursor(), Status::Ignored);
        assert_eq!(game.disable_cursor(), Status::CursorDisabled);
        assert_eq!(game.disable_cursor(), Status::Ignored);

        let moves = game
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::CursorMoved { .. }))
            .count();
        assert_eq!(moves, 2);
    }

    #[test]
    fn enable_cursor_needs_a_round() {
        let mut game = Game::new(Level::Easy, ScriptedSource::default());
        assert_eq!(game.enable_cursor(), Status::NoRoundInProgress);
    }

    #[test]
    fn reset_score_only_notifies_on_change() {
        let mut game = game();
        game.reset_score();
        assert_eq!(game.take_events(), vec![GameEvent::ScoreChanged]);
        game.reset_score();
        assert!(game.take_events().is_empty());
    }
}
