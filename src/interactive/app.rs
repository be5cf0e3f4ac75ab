//! TUI application state and logic

use crate::core::{RootWord, Verdict};
use crate::dictionary::Dictionary;
use crate::game::GameSession;
use crate::wordlists::RootPicker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized> {
    pub session: GameSession<'a, D>,
    pub picker: RootPicker,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

/// Modal popup shown for a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
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

impl<'a, D: Dictionary + ?Sized> App<'a, D> {
    #[must_use]
    pub fn new(session: GameSession<'a, D>, picker: RootPicker) -> Self {
        Self {
            session,
            picker,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Make words from the letters of the root word!".to_string(),
                style: MessageStyle::Info,
            }],
            alert: None,
            rounds_played: 1,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a candidate
    ///
    /// The buffer is cleared only when the word is accepted, so a rejected word can be fixed.
    pub fn submit(&mut self) {
        match self.session.submit_candidate(&self.input_buffer) {
            None => {}
            Some(Verdict::Accepted) => {
                self.input_buffer.clear();
                let word = self.session.used_words().first().cloned().unwrap_or_default();
                self.add_message(
                    &format!("✓ {} (+{})", word.to_uppercase(), word.chars().count()),
                    MessageStyle::Success,
                );
            }
            Some(Verdict::Rejected(reason)) => {
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.session.root().text()),
                });
                self.add_message(reason.title(), MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        let root = self.picker.pick();
        self.start_round(root);
    }

    pub fn start_round(&mut self, root: RootWord) {
        self.session.reset(root);
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!(
                "New round! Root word: {}",
                self.session.root().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
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
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The alert is modal: it must be dismissed before anything else
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
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
pub fn run_tui<D: Dictionary + ?Sized>(app: App<'_, D>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
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
