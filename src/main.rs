//! Word Scramble - CLI
//!
//! Word game with TUI and line modes, plus helpers to check, solve and analyze roots.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use word_scramble::{
    commands::{SolveConfig, analyze_roots, check_words, run_simple, solve_root},
    dictionary::WordSet,
    game::{GameConfig, GameSession},
    logging::{LogConfig, init_logging},
    output::{print_analysis_result, print_check_result, print_solve_result},
    wordlists::{RootPicker, start_words_or_embedded},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find the words hidden inside a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start words: path to a newline-separated file (default: built-in list)
    #[arg(short = 's', long, global = true)]
    start_words: Option<String>,

    /// Dictionary: path to a newline-separated file (default: built-in list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Reject the root word itself as an answer
    #[arg(long, global = true)]
    reject_root: bool,

    /// Seed for picking root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Check words against a root and print each verdict
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word hidden in a root
    Solve {
        /// The root word
        root: String,

        /// Shortest word length to list
        #[arg(short = 'm', long, default_value = "1")]
        min_len: usize,

        /// Also list the root itself
        #[arg(long)]
        include_root: bool,
    },

    /// Count the hidden words of every start word
    Analyze {
        /// Limit number of roots to analyze
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -d flag
fn load_dictionary(path: Option<&str>) -> Result<WordSet> {
    match path {
        None => Ok(WordSet::embedded()),
        Some(path) => WordSet::load(path).with_context(|| format!("loading dictionary {path}")),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let mut log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    if matches!(command, Commands::Play) && cli.log_file.is_none() {
        // stderr output would tear the TUI
        log_config = log_config.disabled();
    }
    init_logging(&log_config).context("initializing logging")?;

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    if dictionary.is_empty() {
        warn!("dictionary is empty, no word will be accepted");
    }

    let config = GameConfig::new()
        .with_reject_root(cli.reject_root)
        .with_seed(cli.seed);

    match command {
        Commands::Play => run_play_command(&cli, &dictionary, config),
        Commands::Simple => run_simple_command(&cli, &dictionary, config),
        Commands::Check { root, words } => {
            let result = check_words(&root, &words, &dictionary, config)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solve {
            root,
            min_len,
            include_root,
        } => {
            let solve_config = SolveConfig::new(root)
                .with_min_length(min_len)
                .with_include_root(include_root);
            let result = solve_root(&solve_config, &dictionary)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Analyze { limit } => {
            let roots = start_words_or_embedded(cli.start_words.as_deref());
            println!("🎯 Analyzing {} roots...", limit.unwrap_or(roots.len()).min(roots.len()));
            let result = analyze_roots(&roots, &dictionary, limit, true);
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn new_picker(cli: &Cli, config: GameConfig) -> RootPicker {
    RootPicker::new(start_words_or_embedded(cli.start_words.as_deref()), config.seed)
}

fn run_simple_command(cli: &Cli, dictionary: &WordSet, config: GameConfig) -> Result<()> {
    let mut picker = new_picker(cli, config);
    let mut session = GameSession::new(picker.pick(), dictionary, config);
    run_simple(&mut session, &mut picker)
}

fn run_play_command(cli: &Cli, dictionary: &WordSet, config: GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let mut picker = new_picker(cli, config);
    let session = GameSession::new(picker.pick(), dictionary, config);
    run_tui(App::new(session, picker))
}
