//! Hangman RL - CLI
//!
//! Trains a tabular Q-learning agent to play Hangman, then evaluates it, shows
//! it solving a word, or lets you play with it as a hint engine.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hangman_rl::{
    commands::{TrainConfig, run_evaluation, run_training, solve_word},
    core::STARTING_LIVES,
    learning::{AgentConfig, QAgent},
    output::{print_checkpoint, print_evaluation_report, print_solve_result, print_training_report},
    wordlists::Corpus,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_rl",
    about = "Hangman played by a tabular Q-learning agent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args)]
struct GlobalOptions {
    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of words to load from the wordlist
    #[arg(long, global = true, default_value_t = 10_000)]
    words: usize,

    /// Lives at the start of every game
    #[arg(short, long, global = true, default_value_t = STARTING_LIVES)]
    lives: u32,

    /// Learning rate α
    #[arg(long, global = true, default_value_t = 0.7)]
    learning_rate: f64,

    /// Discount factor γ
    #[arg(long, global = true, default_value_t = 1.0)]
    discount: f64,

    /// Exploration rate ε
    #[arg(long, global = true, default_value_t = 0.0)]
    epsilon: f64,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every move of every game
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the agent and report its accuracy (default)
    Train {
        /// Number of games to train on
        #[arg(short = 'n', long, default_value_t = 5_000_000)]
        games: usize,

        /// Print a progress line every this many games
        #[arg(short, long, default_value_t = 1000)]
        progress: usize,
    },

    /// Train, then play every corpus word with the frozen policy
    Evaluate {
        /// Number of games to train on first
        #[arg(short = 'n', long, default_value_t = 5_000_000)]
        games: usize,
    },

    /// Train, then show the agent solving a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Number of games to train on first
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        games: usize,

        /// Show values and rewards for every move
        #[arg(short, long)]
        verbose: bool,
    },

    /// Interactive TUI mode with the agent as a hint engine
    Play {
        /// Number of games to train the hint agent on
        #[arg(short = 'n', long, default_value_t = 20_000)]
        games: usize,
    },
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the corpus based on the -w flag
fn load_corpus(options: &GlobalOptions) -> Result<Corpus> {
    let corpus = match options.wordlist.as_str() {
        "embedded" => Corpus::embedded(options.words),
        path => Corpus::from_file(path, options.words),
    }
    .with_context(|| format!("loading wordlist '{}'", options.wordlist))?;

    tracing::info!(words = corpus.len(), "words loaded");
    Ok(corpus)
}

fn agent_config(options: &GlobalOptions) -> AgentConfig {
    AgentConfig {
        learning_rate: options.learning_rate,
        discount: options.discount,
        epsilon: options.epsilon,
        seed: options.seed,
        ..AgentConfig::default()
    }
}

fn train_config(options: &GlobalOptions, games: usize, progress_every: usize) -> TrainConfig {
    TrainConfig {
        games,
        progress_every,
        starting_lives: options.lives,
        debug: options.debug,
        seed: options.seed,
    }
}

/// Train a fresh agent, printing progress lines as checkpoints arrive
fn train(options: &GlobalOptions, corpus: &Corpus, games: usize, progress: usize) -> QAgent {
    let mut agent = QAgent::new(&agent_config(options));
    let config = train_config(options, games, progress);
    let report = run_training(&mut agent, corpus, &config, print_checkpoint);
    print_training_report(&report);
    agent
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options;

    init_tracing(options.debug);

    let corpus = load_corpus(&options)?;

    // Default to Train mode if no command given
    let command = cli.command.unwrap_or(Commands::Train {
        games: 5_000_000,
        progress: 1000,
    });

    match command {
        Commands::Train { games, progress } => {
            train(&options, &corpus, games, progress);
            Ok(())
        }
        Commands::Evaluate { games } => {
            let agent = train(&options, &corpus, games, 0);
            let report = run_evaluation(agent.table(), corpus.words(), options.lives);
            print_evaluation_report(&report);
            Ok(())
        }
        Commands::Solve {
            word,
            games,
            verbose,
        } => run_solve_command(&options, &corpus, &word, games, verbose),
        Commands::Play { games } => run_play_command(&options, &corpus, games),
    }
}

fn run_solve_command(
    options: &GlobalOptions,
    corpus: &Corpus,
    word: &str,
    games: usize,
    verbose: bool,
) -> Result<()> {
    let agent = train(options, corpus, games, 0);
    let result = solve_word(agent.policy(), word, options.lives)
        .with_context(|| format!("invalid target word '{word}'"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command(options: &GlobalOptions, corpus: &Corpus, games: usize) -> Result<()> {
    use hangman_rl::interactive::{App, run_tui};

    let agent = train(options, corpus, games, 0);
    let table = agent.into_table();

    let app = App::new(corpus, &table, options.lives, options.seed);
    run_tui(app)
}
