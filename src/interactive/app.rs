//! TUI application state and logic

use crate::core::contracts::{Action, State};
use crate::core::{Choice, GameState, Status};
use crate::learning::{FrozenPolicy, QTable, build_rng};
use crate::wordlists::Corpus;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub policy: FrozenPolicy<'a>,
    pub starting_lives: u32,
    pub game: GameState,
    pub hint: Option<Hint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

/// The agent's suggestion for the current position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hint {
    pub choice: Choice,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub hints_used: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a Corpus, table: &'a QTable, starting_lives: u32, seed: Option<u64>) -> Self {
        let mut rng = build_rng(seed);
        let game = GameState::new(corpus.random(&mut rng).clone(), starting_lives);

        let mut app = Self {
            corpus,
            policy: FrozenPolicy::new(table),
            starting_lives,
            game,
            hint: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message("Welcome! Type a letter to guess.", MessageStyle::Info);
        app.add_message("Press '?' to ask the trained agent for a hint.", MessageStyle::Info);
        app.check_finished();
        app
    }

    pub fn new_game(&mut self) {
        let word = self.corpus.random(&mut self.rng).clone();
        self.game = GameState::new(word, self.starting_lives);
        self.hint = None;
        self.messages.clear();
        self.add_message(
            &format!("New game: {} letters.", self.game.word().len()),
            MessageStyle::Info,
        );
        self.check_finished();
    }

    /// Guess `letter` in the current game
    pub fn guess(&mut self, letter: char) {
        if self.game.is_complete() {
            return;
        }

        let Some(choice) = Choice::new(letter) else {
            self.add_message(&format!("'{letter}' is not a letter!"), MessageStyle::Error);
            return;
        };

        if self.game.has_attempted(choice.letter()) {
            self.add_message(
                &format!("Already tried {}.", choice.as_char().to_ascii_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let hit = self.game.word().has_letter(choice.letter());
        choice.apply(&mut self.game);
        self.hint = None;

        let upper = choice.as_char().to_ascii_uppercase();
        if hit {
            self.add_message(&format!("{upper} is in the word!"), MessageStyle::Success);
        } else {
            self.add_message(&format!("No {upper}."), MessageStyle::Error);
        }

        self.check_finished();
    }

    /// Ask the agent for its greedy choice
    pub fn request_hint(&mut self) {
        if self.game.is_complete() {
            return;
        }

        if let Some(choice) = self.policy.best(&self.game) {
            let value = self.policy.value(&self.game, &choice);
            self.hint = Some(Hint { choice, value });
            self.stats.hints_used += 1;
            self.add_message(
                &format!(
                    "Agent suggests {} (value {value:.2})",
                    choice.as_char().to_ascii_uppercase()
                ),
                MessageStyle::Info,
            );
        }
    }

    fn check_finished(&mut self) {
        match self.game.status() {
            Status::Active => {}
            Status::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.add_message("🎉 Saved! You guessed the word.", MessageStyle::Success);
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            Status::Lost => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("💀 Hanged! The word was {}.", self.game.word().text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
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

    /// Apply a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.request_hint(),
            KeyCode::Char('n') if self.game.is_complete() => self.new_game(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn corpus(word: &str) -> Corpus {
        Corpus::new(vec![Word::new(word).unwrap()], 1).unwrap()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }

    #[test]
    fn letters_guess_and_finish_game() {
        let corpus = corpus("cat");
        let table = QTable::new(0.7, 1.0, 0.0);
        let mut app = App::new(&corpus, &table, 6, Some(1));

        press(&mut app, 'c');
        press(&mut app, 'x');
        assert_eq!(app.game.pattern().key(), "c__");
        assert_eq!(app.game.lives(), 5);

        press(&mut app, 'A');
        press(&mut app, 't');
        assert_eq!(app.game.status(), Status::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn repeated_letter_is_rejected() {
        let corpus = corpus("cat");
        let table = QTable::new(0.7, 1.0, 0.0);
        let mut app = App::new(&corpus, &table, 6, Some(1));

        press(&mut app, 'x');
        press(&mut app, 'x');
        assert_eq!(app.game.lives(), 5);
        assert_eq!(app.game.moves(), 1);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn n_guesses_while_active_and_restarts_when_done() {
        let corpus = corpus("a");
        let table = QTable::new(0.7, 1.0, 0.0);
        let mut app = App::new(&corpus, &table, 1, Some(1));

        press(&mut app, 'n');
        assert_eq!(app.game.status(), Status::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.win_rate(), 0.0);

        press(&mut app, 'n');
        assert_eq!(app.game.status(), Status::Active);
        assert_eq!(app.game.moves(), 0);
    }

    #[test]
    fn hint_reports_greedy_choice() {
        let corpus = corpus("cat");
        let mut table = QTable::new(0.7, 1.0, 0.0);
        table.set("___".into(), "t".into(), 4.5);
        let mut app = App::new(&corpus, &table, 6, Some(1));

        press(&mut app, '?');
        let hint = app.hint.unwrap();
        assert_eq!(hint.choice.as_char(), 't');
        assert_eq!(hint.value, 4.5);
        assert_eq!(app.stats.hints_used, 1);

        press(&mut app, 't');
        assert!(app.hint.is_none());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let corpus = corpus("cat");
        let table = QTable::new(0.7, 1.0, 0.0);

        let mut app = App::new(&corpus, &table, 6, Some(1));
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&corpus, &table, 6, Some(1));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.game.moves(), 0);
    }

    #[test]
    fn messages_are_capped() {
        let corpus = corpus("cat");
        let table = QTable::new(0.7, 1.0, 0.0);
        let mut app = App::new(&corpus, &table, 6, Some(1));
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
