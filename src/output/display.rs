//! Display functions for the board and command results

use super::formatters::{create_progress_bar, piece_label, status_message};
use crate::commands::{MixReport, SimulationResult};
use crate::core::{Level, PieceType, Slot};
use crate::engine::{CursorPosition, Game, RandomSource, ScoreBoard, Status};
use colored::Colorize;

/// Print the pool, both word inputs and the cursor
pub fn print_board<R: RandomSource>(game: &Game<R>) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(pair) = game.reference_words() {
        let relation = if pair.are_synonyms() {
            "synonyms"
        } else {
            "antonyms"
        };
        println!(
            "Level: {}   Find two {}",
            game.level().to_string().bright_yellow(),
            relation.bright_cyan().bold()
        );
    }

    let cursor = game.cursor_position();
    let pool: Vec<String> = game
        .pieces()
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            let label = piece_label(index, piece);
            if cursor == Some(CursorPosition::Pool(index)) {
                format!("[{label}]").black().on_bright_yellow().to_string()
            } else if piece.added {
                label.bright_black().strikethrough().to_string()
            } else {
                colorize(&label, piece.piece_type)
            }
        })
        .collect();
    println!("Pieces: {}", pool.join("  "));

    for slot in Slot::ALL {
        let input = game.input(slot);
        let removal_start = match cursor {
            Some(CursorPosition::Removal(s, start)) if s == slot => Some(start),
            _ => None,
        };
        let parts: Vec<String> = input
            .indexes()
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let content = &game.pieces()[index].content;
                if removal_start.is_some_and(|start| position >= start) {
                    content.black().on_bright_red().to_string()
                } else {
                    content.bright_white().bold().to_string()
                }
            })
            .collect();
        println!("Word {}: {} {:?}", slot.number(), parts.join("|"), input.state());
    }
    println!("{}", "─".repeat(60).cyan());
}

fn colorize(label: &str, piece_type: PieceType) -> String {
    match piece_type {
        PieceType::Begin => label.green().to_string(),
        PieceType::Middle => label.white().to_string(),
        PieceType::End => label.magenta().to_string(),
    }
}

/// Print the text for a status code
pub fn print_status(status: Status) {
    let message = status_message(status);
    match status {
        Status::PieceNotAdded(_)
        | Status::PieceUnavailable
        | Status::InvalidRemoval
        | Status::IncorrectWords
        | Status::CursorRequired
        | Status::NoRoundInProgress => println!("❌ {}", message.red()),
        Status::Ignored | Status::CursorMoved => {}
        _ => println!("✓ {message}"),
    }
}

/// Print that no pair can be split at `level`
pub fn print_no_pair(level: Level) {
    println!(
        "❌ {}",
        format!("No word pair is long enough for the {level} level, change it with 'l'").red()
    );
}

/// Print the end of a round: a win banner or the solution
pub fn print_round_over<R: RandomSource>(status: Status, game: &Game<R>) {
    let Some(pair) = game.reference_words() else {
        return;
    };

    if status == Status::Solved {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!(
            "{}",
            "    🎉  C O R R E C T !  🎉    ".bright_green().bold()
        );
        println!("{}", "═".repeat(60).bright_cyan());
        println!(
            "\n  {} and {}",
            pair.first().to_uppercase().bright_white().bold(),
            pair.second().to_uppercase().bright_white().bold()
        );
    } else {
        println!(
            "\n💡 The words were {} and {}",
            pair.first().to_uppercase().bright_yellow().bold(),
            pair.second().to_uppercase().bright_yellow().bold()
        );
    }
    print_score(game.score());
}

/// Print the running score
pub fn print_score(score: &ScoreBoard) {
    let bar = create_progress_bar(f64::from(score.obtained), f64::from(score.available), 30);
    println!(
        "\n📊 Score: {} / {}  [{}] {:.1}%",
        score.obtained.to_string().bright_yellow().bold(),
        score.available,
        bar.green(),
        score.success_rate()
    );
    println!(
        "   Rounds won: {} of {}\n",
        score.rounds_won, score.rounds_played
    );
}

/// Print the list of play commands
pub fn print_help() {
    println!("\n{}", "Commands".bright_cyan().bold());
    println!("  a1 N / a2 N   add piece N to word 1 / word 2");
    println!("  r1 N / r2 N   remove word 1 / word 2 from position N onwards");
    println!("  c             clear both words");
    println!("  s             submit");
    println!("  g             give up and show the solution");
    println!("  n             new round");
    println!("  l LEVEL       set level (easy, medium, hard)");
    println!("  score         show score");
    println!("  reset         reset the score");
    println!("  q             quit");
    println!("\n{}", "Cursor mode".bright_cyan().bold());
    println!("  k             toggle cursor mode");
    println!("  t             next container (pieces, word 1, word 2)");
    println!("  + / -         next / previous piece, or grow / shrink removal");
    println!("  1 / 2         add to word 1 / word 2, or remove the marked pieces\n");
}

/// Print the result of the mix command
pub fn print_mix_report(report: &MixReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MIX:".bright_cyan().bold(),
        report.pair.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nLevel {} (piece size {}), {} pieces\n",
        report.level,
        report.level.piece_size(),
        report.pieces.len()
    );

    for (index, (content, piece_type)) in report.pieces.iter().enumerate() {
        println!(
            "  {:>3}  {:<8} {}",
            index + 1,
            colorize(content, *piece_type),
            piece_type
        );
    }

    let b = report.boundaries;
    println!(
        "\nWord 1: begin {} end {}   Word 2: begin {} end {}",
        b.first_begin + 1,
        b.first_end + 1,
        b.second_begin + 1,
        b.second_end + 1
    );
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Rounds:".bright_cyan().bold());
    println!("   Played:           {}", result.rounds);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   Average moves:    {}",
        format!("{:.1}", result.average_moves()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.rejections.is_empty() {
        println!("\n📈 {}", "Rejected pieces:".bright_cyan().bold());
        let mut rejections: Vec<_> = result.rejections.iter().collect();
        rejections.sort_by(|a, b| b.1.cmp(a.1));
        for (reason, count) in rejections {
            println!("   {count:6}  {reason:?}");
        }
    }

    println!();
    if result.violations.is_empty() {
        println!("{}", "✅ All invariants held".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} invariant violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(10) {
            println!("   • {violation}");
        }
    }
}
