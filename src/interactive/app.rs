//! TUI application state and logic

use crate::engine::{AddWordOutcome, GameEngine, GuessOutcome};
use crate::store::{StoreError, WordStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: WordStore> {
    pub engine: GameEngine<S>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Which of the two engine events the input line feeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a letter to guess
    Guess,
    /// Typing a word to add to the vocabulary
    AddWord,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordStore> App<S> {
    #[must_use]
    pub fn new(engine: GameEngine<S>) -> Self {
        Self {
            engine,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter and press Enter. TAB to add a new word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Dispatch the input buffer as a guess and translate the outcome
    pub fn submit_guess(&mut self) -> Result<(), StoreError> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.engine.guess_letter(&input)? {
            GuessOutcome::InvalidInput => {
                self.add_message(
                    "Please enter a single alphabetic character.",
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed(letter) => {
                self.add_message(
                    &format!("You've already guessed '{letter}'."),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Hit(letter) => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
            }
            GuessOutcome::Miss { attempts_remaining } => {
                self.add_message(
                    &format!("Not in the word. {attempts_remaining} attempts remaining."),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::RoundWon { word } => {
                self.add_message(
                    &format!("🎉 You guessed the word: {}!", word.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("Next round started. Good luck!", MessageStyle::Info);
            }
            GuessOutcome::RoundLost { word } => {
                self.add_message(
                    &format!("💀 Game over! The word was: {}", word.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Next round started. Good luck!", MessageStyle::Info);
            }
        }

        Ok(())
    }

    /// Dispatch the input buffer as a vocabulary submission
    pub fn submit_word(&mut self) -> Result<(), StoreError> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.engine.submit_new_word(&input)? {
            AddWordOutcome::InvalidInput => {
                self.add_message(
                    "Please enter a valid word (only alphabetic characters).",
                    MessageStyle::Error,
                );
            }
            AddWordOutcome::Added => {
                self.add_message(
                    &format!("'{}' added to the vocabulary.", input.trim().to_lowercase()),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::Guess;
            }
            AddWordOutcome::DuplicateRejected => {
                self.add_message(
                    &format!(
                        "'{}' is already in the vocabulary.",
                        input.trim().to_lowercase()
                    ),
                    MessageStyle::Info,
                );
                self.input_mode = InputMode::Guess;
            }
        }

        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Raw mode and the alternate screen are acquired here and restored before
/// returning, so a failing game loop still leaves the terminal usable.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the store fails to persist.
pub fn run_tui<S: WordStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Guess => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::AddWord;
                        app.input_buffer.clear();
                        app.add_message(
                            "Enter a word to add to the vocabulary",
                            MessageStyle::Info,
                        );
                    }
                    KeyCode::Char(c) => {
                        // One letter per guess; keep the buffer a single char
                        if app.input_buffer.is_empty() {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess()?;
                    }
                    _ => {}
                },
                InputMode::AddWord => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Guess;
                        app.input_buffer.clear();
                        app.add_message("Cancelled word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Guess;
                        app.input_buffer.clear();
                    }
                    KeyCode::Char(c) => {
                        if c.is_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_word()?;
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
