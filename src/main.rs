//! Wordle - CLI
//!
//! Play today's Wordle in the terminal, in a TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use wordle_terminal::{
    commands::{reset_status, run_simple, saved_share},
    core::Word,
    game::{Game, GameConfig, GameState},
    interactive::{App, run_tui},
    logging::init_tracing,
    output::{print_finish, print_share},
    puzzle::{NytSource, OfflineSource, Puzzle, PuzzleSource},
    state::StateStore,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "6 attempts to find a 5-letter word: the daily Wordle in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: revealed hints must be used in subsequent guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Play a random word instead of fetching today's puzzle
    #[arg(long, global = true)]
    offline: bool,

    /// Play a specific 5-letter word
    #[arg(long, global = true, value_name = "WORD")]
    word: Option<Word>,

    /// Where the game is saved (default: ~/.wordle)
    #[arg(long, global = true, env = "WORDLE_STATE_FILE", value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Append logs to this file (filter with WORDLE_LOG)
    #[arg(long, global = true, env = "WORDLE_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Print the share string of the saved game
    Share,

    /// Delete the saved game
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref()).context("unable to open log file")?;

    let store = match &cli.state_file {
        Some(path) => StateStore::new(path),
        None => StateStore::in_home_dir()?,
    };

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, store),
        Commands::Simple => run_simple_command(&cli, &store),
        Commands::Share => run_share_command(&store),
        Commands::Reset => {
            println!("{}", reset_status(&store)?);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, store: StateStore) -> Result<()> {
    let words = WordList::embedded();
    let game = prepare_game(cli, &words, &store)?;

    let state = run_tui(App::new(game, store))?;
    print_summary(&words, state);
    Ok(())
}

fn run_simple_command(cli: &Cli, store: &StateStore) -> Result<()> {
    let words = WordList::embedded();
    let game = prepare_game(cli, &words, store)?;

    let state = run_simple(game, store)?;
    if state.is_finished() {
        print_share(&Game::resume(&words, state).share());
    }
    Ok(())
}

fn run_share_command(store: &StateStore) -> Result<()> {
    match saved_share(store)? {
        Some(share) => print_share(&share),
        None => println!("No saved game to share."),
    }
    Ok(())
}

/// Build the game: puzzle, then custom word, hard mode and saved game
fn prepare_game<'a>(cli: &Cli, words: &'a WordList, store: &StateStore) -> Result<Game<'a>> {
    let puzzle = load_puzzle(cli, words)?;
    let saved = store.load().with_context(|| {
        format!(
            "unable to load saved game from {} (run `wordle reset` to discard it)",
            store.path().display()
        )
    })?;

    let mut config = GameConfig::default()
        .with_hard_mode(cli.hard)
        .with_saved(saved);
    if let Some(word) = &cli.word {
        config = config.with_word(word.clone());
    }

    let game = Game::new(words, puzzle, config);
    info!(
        puzzle = game.state().puzzle_number(),
        round = game.state().round(),
        hard_mode = game.state().hard_mode(),
        "game ready"
    );
    Ok(game)
}

fn load_puzzle(cli: &Cli, words: &WordList) -> Result<Puzzle> {
    if cli.offline || cli.word.is_some() {
        return Ok(OfflineSource::new(words).todays_puzzle()?);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching today's puzzle...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let puzzle = NytSource::today().todays_puzzle();
    spinner.finish_and_clear();

    puzzle.context("unable to fetch today's wordle (try --offline)")
}

fn print_summary(words: &WordList, state: GameState) {
    if !state.is_finished() {
        return;
    }

    let game = Game::resume(words, state);
    print_finish(&game);
    print_share(&game.share());
}
