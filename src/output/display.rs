//! Display functions for command results

use super::formatters::{format_similarity, similarity_bar};
use crate::commands::{Board, ClueAnalysis, SolveResult, WordSimilarity};
use colored::Colorize;

/// Print a dealt board
pub fn print_board(board: &Board) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "BOARD".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!(
        "   Hit:   {}",
        board.words_to_hit.join(", ").to_uppercase().green()
    );
    println!(
        "   Avoid: {}",
        board.words_to_avoid.join(", ").to_uppercase().red()
    );
}

/// Print the ranked clues for a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Clues for: {}",
        result.words_to_hit.join(", ").to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for word in &result.missing_words {
        println!(
            "{}",
            format!("⚠ No embedding for '{word}', skipped").yellow()
        );
    }

    if verbose {
        println!(
            "   Algorithm: {}   Strategy: {} ({:.2})",
            result.algorithm, result.strategy, result.threshold
        );
        println!("   Time:      {:.3}s", result.duration.as_secs_f64());
    }

    if result.guesses.is_empty() {
        println!(
            "\n{}",
            "No clue clears the threshold. Try a riskier strategy."
                .red()
                .bold()
        );
        return;
    }

    println!();
    for (i, guess) in result.guesses.iter().enumerate() {
        let score = guess.score().unwrap_or_default();
        println!(
            "  {:>2}. {:<16} {} {}",
            i + 1,
            guess.clue().to_uppercase().bright_yellow().bold(),
            format!("{score:6.3}").green(),
            format!(
                "({} {})",
                guess.num_words_linked(),
                guess.linked_words().join(", ")
            )
            .bright_black()
        );
    }
}

/// Print how a clue relates to every board word
pub fn print_analysis_result(result: &ClueAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CLUE ANALYSIS:".bright_cyan().bold(),
        result.clue.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎯 {} (link above {:.2})",
        "Words to hit".bright_cyan().bold(),
        result.threshold
    );
    for hit in &result.hits {
        print_similarity_row(hit, true);
    }

    if !result.avoids.is_empty() {
        println!(
            "\n💣 {} (must stay below {:.2})",
            "Words to avoid".bright_cyan().bold(),
            result.avoid_limit
        );
        for avoid in &result.avoids {
            print_similarity_row(avoid, false);
        }
    }

    println!();
    if !result.legal {
        println!(
            "{}",
            "❌ Illegal: the clue overlaps a word it links".red().bold()
        );
    }
    match &result.guess {
        Some(guess) => println!(
            "{}",
            format!(
                "✅ Acceptable for {} word(s), score {:.3}",
                guess.num_words_linked(),
                guess.score().unwrap_or_default()
            )
            .green()
            .bold()
        ),
        None => println!("{}", "❌ Rejected by the scorer".red().bold()),
    }
}

fn print_similarity_row(row: &WordSimilarity, hit: bool) {
    let bar = similarity_bar(row.similarity.unwrap_or_default(), 20);
    let bar = if row.passes == hit {
        bar.green()
    } else {
        bar.red()
    };
    let mark = if row.passes { "✓" } else { "✗" };

    println!(
        "   {:<14} [{}] {} {}",
        row.word.to_uppercase(),
        bar,
        format_similarity(row.similarity),
        mark
    );
}
