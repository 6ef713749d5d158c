//! Interactive play mode
//!
//! Line-oriented front-end over `Game`. Every typed line is parsed into a
//! `PlayCommand`, executed, and the resulting status printed. Piece and input
//! positions are 1-based for the player.

use crate::core::{Level, Slot, WordPair};
use crate::engine::{Game, GameConfig, Status};
use crate::output::{
    print_board, print_help, print_no_pair, print_round_over, print_score, print_status,
};
use crate::wordlists::PairPicker;
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// A parsed player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Add the pool piece at a 0-based index to a word
    Add(Slot, usize),
    /// Remove from a 0-based input position onwards
    Remove(Slot, usize),
    Clear,
    Submit,
    GiveUp,
    NewRound,
    SetLevel(Level),
    ToggleCursor,
    NextContainer,
    Increase,
    Decrease,
    Act(Slot),
    Show,
    Score,
    ResetScore,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'h' for help)")]
    Unknown(String),
    #[error("'{0}' needs a position, e.g. '{0} 3'")]
    MissingPosition(String),
    #[error("Positions start at 1, got '{0}'")]
    InvalidPosition(String),
    #[error("'{0}' needs a level, e.g. '{0} hard'")]
    MissingLevel(String),
    #[error("{0}")]
    Level(#[from] crate::core::LevelError),
}

/// Parse one input line
///
/// # Errors
///
/// Returns `CommandError` for unknown commands and malformed arguments.
///
/// # Examples
/// ```
/// use wordmix::commands::{PlayCommand, parse_command};
/// use wordmix::core::Slot;
///
/// assert_eq!(parse_command("a1 3"), Ok(PlayCommand::Add(Slot::First, 2)));
/// assert_eq!(parse_command("+"), Ok(PlayCommand::Increase));
/// assert!(parse_command("a1 0").is_err());
/// ```
pub fn parse_command(input: &str) -> Result<PlayCommand, CommandError> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(PlayCommand::Show);
    };
    let head = head.to_lowercase();
    let argument = parts.next();

    let command = match head.as_str() {
        "a1" => PlayCommand::Add(Slot::First, position(&head, argument)?),
        "a2" => PlayCommand::Add(Slot::Second, position(&head, argument)?),
        "r1" => PlayCommand::Remove(Slot::First, position(&head, argument)?),
        "r2" => PlayCommand::Remove(Slot::Second, position(&head, argument)?),
        "c" | "clear" => PlayCommand::Clear,
        "s" | "submit" => PlayCommand::Submit,
        "g" | "give" | "solution" => PlayCommand::GiveUp,
        "n" | "new" => PlayCommand::NewRound,
        "l" | "level" => {
            let name = argument.ok_or_else(|| CommandError::MissingLevel(head.clone()))?;
            PlayCommand::SetLevel(name.parse()?)
        }
        "k" | "cursor" => PlayCommand::ToggleCursor,
        "t" | "tab" => PlayCommand::NextContainer,
        "+" | "=" => PlayCommand::Increase,
        "-" => PlayCommand::Decrease,
        "1" => PlayCommand::Act(Slot::First),
        "2" => PlayCommand::Act(Slot::Second),
        "show" | "b" => PlayCommand::Show,
        "score" => PlayCommand::Score,
        "reset" => PlayCommand::ResetScore,
        "h" | "help" | "?" => PlayCommand::Help,
        "q" | "quit" | "exit" => PlayCommand::Quit,
        _ => return Err(CommandError::Unknown(input.trim().to_string())),
    };
    Ok(command)
}

/// Turn a 1-based argument into a 0-based position
fn position(head: &str, argument: Option<&str>) -> Result<usize, CommandError> {
    let raw = argument.ok_or_else(|| CommandError::MissingPosition(head.to_string()))?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidPosition(raw.to_string())),
    }
}

/// What the front-end should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Status(Status),
    /// No pair is long enough for this level; the previous round stays
    NoPairFits(Level),
    Show,
    Score,
    Help,
    Quit,
}

/// A game plus the pairs it draws rounds from
pub struct PlaySession {
    game: Game,
    picker: PairPicker,
    rng: StdRng,
}

impl PlaySession {
    /// Create a session; the pair picker gets its own seeded stream
    #[must_use]
    pub fn new(config: &GameConfig, pairs: Vec<WordPair>) -> Self {
        let rng = config.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(1))
        });

        Self {
            game: Game::from_config(config),
            picker: PairPicker::new(pairs),
            rng,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Start a round with a random pair that fits the current level
    ///
    /// # Errors
    ///
    /// Returns an error if no pair can be split at the current level.
    pub fn start_round(&mut self) -> Result<Status> {
        let Some(pair) = self.next_pair() else {
            bail!(
                "No word pair is long enough for the {} level",
                self.game.level()
            );
        };
        Ok(self.game.new_round(pair)?)
    }

    fn next_pair(&mut self) -> Option<WordPair> {
        let piece_size = self.game.level().piece_size();
        let pair = self.picker.next(piece_size, &mut self.rng)?;
        debug!(%pair, "pair picked");
        Some(pair)
    }

    /// Apply one command to the game
    ///
    /// # Errors
    ///
    /// Returns an error if a picked pair cannot be mixed. A level with no
    /// fitting pair is reported as `Step::NoPairFits` instead.
    pub fn execute(&mut self, command: PlayCommand) -> Result<Step> {
        let status = match command {
            PlayCommand::Add(slot, index) => self.game.add_piece(slot, index),
            PlayCommand::Remove(slot, start) => self.game.remove_pieces(slot, start),
            PlayCommand::Clear => self.game.clear_input(),
            PlayCommand::Submit => self.game.submit(),
            PlayCommand::GiveUp => self.game.show_solution(),
            PlayCommand::NewRound => {
                let Some(pair) = self.next_pair() else {
                    return Ok(Step::NoPairFits(self.game.level()));
                };
                self.game.new_round(pair)?
            }
            PlayCommand::SetLevel(level) => self.game.set_level(level),
            PlayCommand::ToggleCursor => self.game.toggle_cursor(),
            PlayCommand::NextContainer => self.game.cursor_next_container(),
            PlayCommand::Increase => self.game.cursor_increase(),
            PlayCommand::Decrease => self.game.cursor_decrease(),
            PlayCommand::Act(slot) => self.game.cursor_act(slot),
            PlayCommand::Show => return Ok(Step::Show),
            PlayCommand::Score => return Ok(Step::Score),
            PlayCommand::ResetScore => {
                self.game.reset_score();
                return Ok(Step::Score);
            }
            PlayCommand::Help => return Ok(Step::Help),
            PlayCommand::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Status(status))
    }
}

/// Run the interactive loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or when no pair fits the chosen level.
pub fn run_play<I: BufRead>(session: &mut PlaySession, input: I) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Word Mix - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Rebuild both words from the shuffled pieces. Type 'h' for help.\n");

    session.start_round()?;
    print_board(session.game());

    let mut lines = input.lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("❌ {err}");
                continue;
            }
        };

        match session.execute(command)? {
            Step::Quit => break,
            Step::Help => print_help(),
            Step::Score => print_score(session.game().score()),
            Step::Show => print_board(session.game()),
            Step::NoPairFits(level) => print_no_pair(level),
            Step::Status(status @ (Status::Solved | Status::SolutionShown)) => {
                print_round_over(status, session.game());
                match session.execute(PlayCommand::NewRound)? {
                    Step::NoPairFits(level) => print_no_pair(level),
                    _ => print_board(session.game()),
                }
            }
            Step::Status(status) => {
                print_status(status);
                if status != Status::Ignored {
                    print_board(session.game());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    print_score(session.game().score());
    Ok(())
}
