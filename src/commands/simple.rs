//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::GameSession;
use crate::output::{print_used_words, print_verdict};
use crate::wordlists::RootPicker;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    NewRound,
    List,
    Help,
    Guess(String),
}

impl LineCommand {
    /// Commands start with '/', anything else is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => Self::Quit,
            "/new" | "/n" => Self::NewRound,
            "/list" | "/l" => Self::List,
            "/help" | "/h" | "/?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<D: Dictionary + ?Sized>(
    session: &mut GameSession<'_, D>,
    picker: &mut RootPicker,
) -> Result<()> {
    let stdin = io::stdin();
    play_lines(session, picker, stdin.lock())
}

/// Drive the game from any line source; stops at `/quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn play_lines<D: Dictionary + ?Sized, R: BufRead>(
    session: &mut GameSession<'_, D>,
    picker: &mut RootPicker,
    input: R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    print_root(session);

    let mut lines = input.lines();
    loop {
        print!("{}: ", "Enter a word".bright_white());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match LineCommand::parse(&line?) {
            LineCommand::Quit => break,
            LineCommand::NewRound => {
                session.reset(picker.pick());
                println!("\n🔄 New round started!");
                print_root(session);
            }
            LineCommand::List => print_used_words(session.used_words()),
            LineCommand::Help => print_help(),
            LineCommand::Guess(raw) => {
                if let Some(verdict) = session.submit_candidate(&raw) {
                    print_verdict(session.root().text(), session.used_words(), verdict);
                }
            }
        }
    }

    println!(
        "\n👋 Thanks for playing! You found {} {}.\n",
        session.used_words().len(),
        if session.used_words().len() == 1 {
            "word"
        } else {
            "words"
        }
    );
    Ok(())
}

fn print_root<D: Dictionary + ?Sized>(session: &GameSession<'_, D>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        session.root().text().to_uppercase().bright_yellow().bold()
    );
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_help() {
    println!("Make as many words as you can from the letters of the root word.");
    println!("Each letter can be used as many times as it appears in the root.\n");
    println!("Commands: /new for a new root, /list to show your words, /quit to exit\n");
}
