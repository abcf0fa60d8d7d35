//! Display functions for command results

use super::formatters::{create_progress_bar, games_per_second, lives_bar};
use crate::commands::{Checkpoint, EvaluationReport, SolveResult, TrainingReport};
use colored::Colorize;

/// Print one progress line during training
pub fn print_checkpoint(checkpoint: &Checkpoint) {
    println!(
        "{} games played: {} WINS {} LOSSES {:.0} ACCURACY",
        checkpoint.games,
        checkpoint.wins.to_string().green(),
        checkpoint.losses.to_string().red(),
        checkpoint.window_accuracy
    );
}

/// Print the summary of a training run
pub fn print_training_report(report: &TrainingReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TRAINING RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nAgent performance: {} games played, {} WINS {} LOSSES {} ACCURACY",
        report.games,
        report.wins.to_string().green(),
        report.losses.to_string().red(),
        format!("{:.0}", report.accuracy()).bright_yellow().bold()
    );

    let seconds = report.duration.as_secs_f64();
    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Time taken:       {seconds:.2}s");
    println!(
        "   Games/second:     {:.1}",
        games_per_second(report.games, seconds)
    );
    println!("   Learned values:   {}", report.table_size);

    if let Some(last) = report.checkpoints.last() {
        let bar = create_progress_bar(last.window_accuracy, 100.0, 40);
        println!("\n📈 {}", "Latest window:".bright_cyan().bold());
        println!("   {} {:5.1}%", bar.green(), last.window_accuracy);
    }
}

/// Print the result of evaluating a frozen policy
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", report.total);
    println!(
        "   Won:              {} {}",
        report.won,
        format!("({:.1}%)", report.accuracy()).green()
    );
    if report.lost > 0 {
        println!(
            "   Lost:             {} {}",
            report.lost,
            format!("({:.1}%)", 100.0 - report.accuracy()).red()
        );
    }
    println!(
        "   Average misses:   {}",
        format!("{:.2}", report.average_misses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.won == 0 {
        return;
    }

    println!("\n📈 {}", "Lives left on wins:".bright_cyan().bold());
    for (&lives, &count) in report.lives_left_distribution.iter().rev() {
        let pct = count as f64 / report.won as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {lives}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the agent's step-by-step play of one word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let letter = step.letter.to_ascii_uppercase().to_string();
        let letter = if step.hit {
            letter.green().bold()
        } else {
            letter.red().bold()
        };
        println!(
            "\nMove {}: {}  {}  {}",
            i + 1,
            letter,
            step.pattern,
            lives_bar(step.lives, result.starting_lives)
        );

        if verbose {
            println!("  Value:  {:.3}", step.value);
            println!("  Reward: {:.3}", step.reward);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} moves!", result.steps.len())
                .green()
                .bold()
        );
        println!("   Fewest possible:  {}", result.fewest_moves);
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} moves", result.steps.len())
                .red()
                .bold()
        );
    }
}
