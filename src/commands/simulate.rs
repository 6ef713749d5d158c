//! Simulation command
//!
//! Plays many rounds with a random agent and checks the engine's invariants
//! after every move. Rounds run in parallel; each owns its game and seed, so
//! results are reproducible for a given base seed.

use crate::core::{InputState, Level, PieceType, Slot, WordPair};
use crate::engine::{CursorPosition, Game, RandomSource, Rejection, Status};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub level: Level,
    pub seed: u64,
    /// Moves allowed per round before the agent gives up
    pub max_moves: usize,
    /// Share of moves made through the cursor, in `[0, 1]`
    pub cursor_share: f64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, level: Level, seed: u64) -> Self {
        Self {
            rounds,
            level,
            seed,
            max_moves: 400,
            cursor_share: 0.3,
            show_progress: true,
        }
    }
}

/// Aggregated outcome of a simulation
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub solved: usize,
    pub total_moves: usize,
    pub rejections: FxHashMap<Rejection, usize>,
    pub violations: Vec<String>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn average_moves(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.rounds as f64
        }
    }
}

struct RoundReport {
    solved: bool,
    moves: usize,
    rejections: Vec<Rejection>,
    violations: Vec<String>,
}

/// Play `config.rounds` rounds over `pairs`
///
/// Pairs are used in turn; those too short for the level are skipped.
///
/// # Errors
///
/// Returns an error if no pair fits the level or the progress bar template
/// is invalid.
pub fn run_simulation(config: &SimulationConfig, pairs: &[WordPair]) -> Result<SimulationResult> {
    let piece_size = config.level.piece_size();
    let fitting: Vec<&WordPair> = pairs.iter().filter(|p| p.fits(piece_size)).collect();
    if fitting.is_empty() {
        bail!("No word pair is long enough for the {} level", config.level);
    }

    let pb = if config.show_progress {
        ProgressBar::new(config.rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let reports: Vec<RoundReport> = (0..config.rounds)
        .into_par_iter()
        .map(|round| {
            let pair = fitting[round % fitting.len()].clone();
            let report = play_round(config, pair, config.seed.wrapping_add(round as u64));
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut result = SimulationResult {
        rounds: config.rounds,
        solved: 0,
        total_moves: 0,
        rejections: FxHashMap::default(),
        violations: Vec::new(),
        duration: start.elapsed(),
    };
    for (round, report) in reports.into_iter().enumerate() {
        result.solved += usize::from(report.solved);
        result.total_moves += report.moves;
        for reason in report.rejections {
            *result.rejections.entry(reason).or_insert(0) += 1;
        }
        result.violations.extend(
            report
                .violations
                .into_iter()
                .map(|v| format!("round {round}: {v}")),
        );
    }

    Ok(result)
}

fn play_round(config: &SimulationConfig, pair: WordPair, seed: u64) -> RoundReport {
    let mut agent = StdRng::seed_from_u64(seed);
    let mut game = Game::new(config.level, StdRng::seed_from_u64(seed ^ 0x5eed));
    let mut report = RoundReport {
        solved: false,
        moves: 0,
        rejections: Vec::new(),
        violations: Vec::new(),
    };

    if let Err(err) = game.new_round(pair) {
        report.violations.push(err.to_string());
        return report;
    }

    while report.moves < config.max_moves {
        report.moves += 1;

        let status = if agent.random_bool(config.cursor_share) {
            cursor_move(&mut game, &mut agent)
        } else {
            direct_move(&mut game, &mut agent)
        };

        match status {
            Status::Solved => report.solved = true,
            Status::PieceNotAdded(reason) => report.rejections.push(reason),
            Status::IncorrectWords => {
                game.clear_input();
            }
            _ => {}
        }

        if let Err(violation) = check_invariants(&game) {
            report.violations.push(violation);
            break;
        }
        if report.solved {
            break;
        }
    }

    report
}

fn direct_move(game: &mut Game<StdRng>, agent: &mut StdRng) -> Status {
    if game.is_complete() {
        return game.submit();
    }

    let slot = if agent.random_bool(0.5) {
        Slot::First
    } else {
        Slot::Second
    };

    // Mostly add; occasionally undo part of a word
    let input_len = game.input(slot).len();
    if input_len > 0 && agent.random_bool(0.15) {
        return game.remove_pieces(slot, agent.random_range(0..input_len));
    }

    let available = game.available_indexes();
    if available.is_empty() {
        return Status::Ignored;
    }
    let index = available[agent.random_range(0..available.len())];
    game.add_piece(slot, index)
}

fn cursor_move(game: &mut Game<StdRng>, agent: &mut StdRng) -> Status {
    if !game.is_cursor_enabled() {
        return game.enable_cursor();
    }
    match agent.random_range(0..6) {
        0 => game.cursor_next_container(),
        1 => game.cursor_increase(),
        2 => game.cursor_decrease(),
        3 => game.cursor_act(Slot::First),
        4 => game.cursor_act(Slot::Second),
        _ => game.disable_cursor(),
    }
}

/// Verify the cross-component invariants of a game
///
/// # Errors
///
/// Returns a description of the first violated invariant.
pub fn check_invariants<R: RandomSource>(game: &Game<R>) -> Result<(), String> {
    let pieces = game.pieces();
    let mut placed = vec![false; pieces.len()];

    for slot in Slot::ALL {
        let input = game.input(slot);
        let indexes = input.indexes();

        let expected = match indexes.last() {
            None => InputState::Empty,
            Some(&last) if pieces[last].piece_type == PieceType::End => InputState::Completed,
            Some(_) => InputState::BuildInProgress,
        };
        if input.state() != expected {
            return Err(format!(
                "{slot} is {:?} but its pieces imply {expected:?}",
                input.state()
            ));
        }

        if indexes
            .first()
            .is_some_and(|&first| pieces[first].piece_type != PieceType::Begin)
        {
            return Err(format!("{slot} does not start with a begin piece"));
        }

        for &index in indexes {
            if placed[index] {
                return Err(format!("piece {index} is placed twice"));
            }
            placed[index] = true;
        }
    }

    for (index, piece) in pieces.iter().enumerate() {
        if piece.added != placed[index] {
            return Err(format!("piece {index} added flag disagrees with inputs"));
        }
    }

    match game.cursor_position() {
        Some(CursorPosition::Pool(index)) if index >= pieces.len() || pieces[index].added => {
            Err(format!("cursor selects unavailable piece {index}"))
        }
        Some(CursorPosition::Removal(slot, start)) if start >= game.input(slot).len() => {
            Err(format!("cursor removal start {start} outside {slot}"))
        }
        _ => Ok(()),
    }
}
