//! Terminal output formatting
//!
//! Display utilities for the game board, command results and pretty-printing.
//! This is the only place status codes are turned into text.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_help, print_mix_report, print_no_pair, print_round_over, print_score,
    print_simulation_result, print_status,
};
