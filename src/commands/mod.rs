//! Command implementations

pub mod mix;
pub mod play;
pub mod simulate;

pub use mix::{MixReport, mix_pair};
pub use play::{PlayCommand, PlaySession, Step, parse_command, run_play};
pub use simulate::{SimulationConfig, SimulationResult, check_invariants, run_simulation};
