//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{Game, GameState};
use crate::output::{print_finish, print_keyboard, print_result};
use crate::state::StateStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(game: Game, store: &StateStore) -> Result<GameState> {
    let stdin = io::stdin();
    play_lines(game, store, &mut stdin.lock())
}

/// Play with guesses read from any line source
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn play_lines<R: BufRead>(
    mut game: Game,
    store: &StateStore,
    input: &mut R,
) -> Result<GameState> {
    println!("\n{}", "6 attempts to find a 5-letter word".bright_cyan().bold());
    println!("Type a guess and press Enter, or 'quit' to leave.\n");

    for (i, result) in game.state().results().iter().enumerate() {
        print_result(i + 1, result);
    }

    while !game.finish() {
        print!("{} ", format!("Guess {}:", game.state().round() + 1).bold());
        io::stdout().flush().context("unable to write prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("unable to read guess")? == 0 {
            break;
        }

        let guess = line.trim();
        if guess.eq_ignore_ascii_case("quit") || guess.eq_ignore_ascii_case("q") {
            break;
        }

        match game.try_guess(guess).map(|_| ()) {
            Ok(()) => {
                let state = game.state();
                if let Some(result) = state.results().last() {
                    print_result(state.round(), result);
                }
                if let Err(e) = store.save(game.state()) {
                    warn!(error = %e, "unable to save game");
                    println!("{}", e.to_string().red());
                }
                print_keyboard(game.state());
                println!();
            }
            Err(e) => println!("  {}", e.to_string().red().italic()),
        }
    }

    print_finish(&game);
    Ok(game.into_state())
}
