//! Wordle FSM - CLI
//!
//! Console Wordle with a main menu, colored feedback, and an on-screen keyboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_fsm::{
    commands::Session,
    core::Word,
    input::ConsoleInput,
    output::{ColorMode, ConsoleSurface},
    wordlists::{SecretSource, WordPool, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_fsm",
    about = "Guess the secret 5-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Color output: auto (default), always, never
    #[arg(short, long, global = true, default_value = "auto")]
    color: String,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Main menu (default)
    Menu {
        /// Use this secret for every round instead of a random one
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Play a single round and exit
    Play {
        /// Use this secret instead of a random one
        #[arg(short, long)]
        secret: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the secret pool based on the -w flag
fn load_pool(wordlist_mode: &str) -> Result<WordPool> {
    match wordlist_mode {
        "builtin" => Ok(WordPool::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            log::info!("{:<32}{} words from {path}", "loaded word list", words.len());
            WordPool::new(words).with_context(|| format!("no usable words in {path}"))
        }
    }
}

/// Pick the secret source: a fixed word if given, else random from the word list
fn secret_source(secret: Option<&str>, wordlist_mode: &str) -> Result<SecretSource> {
    match secret {
        Some(text) => {
            let word = Word::new(text).with_context(|| format!("invalid secret '{text}'"))?;
            Ok(SecretSource::Fixed(word))
        }
        None => Ok(SecretSource::Random(load_pool(wordlist_mode)?)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu { secret: None });

    let mut input = ConsoleInput::stdio();
    let mut surface = ConsoleSurface::stdout(ColorMode::from_name(&cli.color));
    log::debug!("{:<32}{}", "color output", surface.color());

    match command {
        Commands::Menu { secret } => {
            let source = secret_source(secret.as_deref(), &cli.wordlist)?;
            let stats = Session::new(source, rand::rng(), &mut input, &mut surface)
                .run()
                .context("failed to read input")?;
            log::info!("{:<32}{:?}", "session finished", stats);
        }
        Commands::Play { secret } => {
            let source = secret_source(secret.as_deref(), &cli.wordlist)?;
            let mut session = Session::new(source, rand::rng(), &mut input, &mut surface);
            session.play_round().context("failed to read input")?;
        }
    }

    Ok(())
}
