//! Display functions for game events and command results

use super::formatters::{create_progress_bar, length_badge, verdict_label};
use crate::commands::{AnalysisResult, CheckResult, SolveResult};
use crate::core::Verdict;
use colored::Colorize;

/// Print the outcome of a single submission
pub fn print_verdict(root: &str, used_words: &[String], verdict: Verdict) {
    match verdict {
        Verdict::Accepted => {
            let word = used_words.first().map_or("", String::as_str);
            println!(
                "  {} {} {}  ({} found)\n",
                "✓".green().bold(),
                length_badge(word.chars().count()).bright_cyan(),
                word.bright_white().bold(),
                used_words.len()
            );
        }
        Verdict::Rejected(reason) => {
            println!("  {} {}", "✗".red().bold(), reason.title().red().bold());
            println!("    {}\n", reason.message(root));
        }
    }
}

/// Print the accepted words, most recent first
pub fn print_used_words(used_words: &[String]) {
    if used_words.is_empty() {
        println!("  No words yet.\n");
        return;
    }

    println!("\n  Your words:");
    for word in used_words {
        println!(
            "    {} {}",
            length_badge(word.chars().count()).bright_cyan(),
            word
        );
    }
    println!();
}

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking against: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for outcome in &result.outcomes {
        let Some(verdict) = outcome.verdict else {
            println!("  {:<20} {}", format!("{:?}", outcome.input), "(ignored)".bright_black());
            continue;
        };

        let label = verdict_label(verdict);
        let label = if verdict.is_accepted() {
            label.green().bold()
        } else {
            label.red()
        };
        println!("  {:<20} {label}", outcome.input);
    }

    println!(
        "\n{}",
        format!("{} of {} accepted", result.accepted, result.outcomes.len()).bold()
    );
}

/// Print every word found for a root
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n  No words found.");
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n{} {}", length_badge(len).bright_cyan(), "letters".bright_black());
        }
        println!("   {word}");
    }

    println!(
        "\n📊 {} words, {} letters",
        result.words.len().to_string().bright_yellow().bold(),
        result.total_letters
    );
}

/// Print the root analysis summary
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots tested:     {}", result.roots_tested);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let max = result.best.first().map_or(0, |score| score.words) as f64;

    println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
    for score in &result.best {
        println!(
            "   {:<12} {} {:4}  longest: {}",
            score.root,
            create_progress_bar(score.words as f64, max, 30).green(),
            score.words,
            score.longest.as_deref().unwrap_or("-")
        );
    }

    println!("\n🪨 {}", "Poorest roots:".bright_cyan().bold());
    for score in &result.worst {
        println!(
            "   {:<12} {} {:4}  longest: {}",
            score.root,
            create_progress_bar(score.words as f64, max, 30).yellow(),
            score.words,
            score.longest.as_deref().unwrap_or("-")
        );
    }
}
