//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use crate::engine::{AddWordOutcome, GameEngine, GuessOutcome, RenderState};
use crate::store::WordStore;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or if the store reports a
/// persistence failure (stats cannot be committed).
pub fn run_simple<S: WordStore>(engine: &mut GameEngine<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("You can miss {} times before the round is lost.\n", crate::core::MAX_ATTEMPTS);
    println!("Commands: 'add <word>' to grow the vocabulary, 'quit' to exit\n");

    loop {
        print_round_state(&engine.render_state());

        let input = get_user_input("Guess a letter (or command)")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            cmd if cmd.starts_with("add ") || cmd == "add" => {
                let candidate = cmd.strip_prefix("add").unwrap_or("").trim();
                handle_add_word(engine, candidate)?;
            }
            raw => handle_guess(engine, raw)?,
        }
    }
}

fn handle_guess<S: WordStore>(engine: &mut GameEngine<S>, raw: &str) -> Result<(), String> {
    match engine.guess_letter(raw).map_err(|e| e.to_string())? {
        GuessOutcome::InvalidInput => {
            println!("\n❌ Please enter a single alphabetic character.\n");
        }
        GuessOutcome::AlreadyGuessed(letter) => {
            println!("\nYou've already guessed '{letter}'.\n");
        }
        GuessOutcome::Hit(letter) => {
            println!("\n✓ '{letter}' is in the word!\n");
        }
        GuessOutcome::Miss { attempts_remaining } => {
            println!("\n✗ Not in the word. {attempts_remaining} attempts remaining.\n");
        }
        GuessOutcome::RoundWon { word } => {
            let stats = engine.stats();
            println!("\n{}", "═".repeat(62).bright_cyan());
            println!(
                "{}",
                "        🎉  Y O U   G U E S S E D   I T !  🎉        "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(62).bright_cyan());
            println!(
                "\n  The word was {}",
                word.text().to_uppercase().bright_yellow().bold()
            );
            println!(
                "  Games: {} | Won: {} | Win rate: {:.0}%",
                stats.games_played,
                stats.games_won,
                stats.win_rate()
            );
            println!("\n🔄 Next round started!\n");
        }
        GuessOutcome::RoundLost { word } => {
            let stats = engine.stats();
            println!(
                "\n{}",
                format!("💀 Game over! The word was: {}", word.text().to_uppercase())
                    .red()
                    .bold()
            );
            println!(
                "  Games: {} | Won: {} | Win rate: {:.0}%",
                stats.games_played,
                stats.games_won,
                stats.win_rate()
            );
            println!("\n🔄 Next round started!\n");
        }
    }
    Ok(())
}

fn handle_add_word<S: WordStore>(
    engine: &mut GameEngine<S>,
    candidate: &str,
) -> Result<(), String> {
    match engine.submit_new_word(candidate).map_err(|e| e.to_string())? {
        AddWordOutcome::InvalidInput => {
            println!("\n❌ Please enter a valid word (only alphabetic characters).\n");
        }
        AddWordOutcome::Added => {
            println!(
                "\n{}",
                format!("✓ '{}' added to the vocabulary.", candidate.to_lowercase()).green()
            );
            println!();
        }
        AddWordOutcome::DuplicateRejected => {
            println!(
                "\n'{}' is already in the vocabulary.\n",
                candidate.to_lowercase()
            );
        }
    }
    Ok(())
}

fn print_round_state(state: &RenderState) {
    println!("────────────────────────────────────────────────────────────");
    println!("  {}", state.masked_word.to_uppercase().bold());
    println!(
        "  Attempts remaining: {} | Games: {} | Won: {}",
        state.attempts_remaining, state.stats.games_played, state.stats.games_won
    );
    if !state.incorrect_letters.is_empty() {
        let missed: String = state
            .incorrect_letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  Missed: {}", missed.red());
    }
    println!("────────────────────────────────────────────────────────────");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
