use crate::config::UiConfig;
use crate::game::{GameOutcome, GameSession, Phase, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Longest name accepted by the name-entry fields.
pub const MAX_NAME_LEN: usize = 20;

/// Which of the two name fields receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Second,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::First => NameField::Second,
            NameField::Second => NameField::First,
        }
    }
}

pub struct App {
    session: GameSession,
    config: UiConfig,
    name_inputs: [String; 2],
    focused_field: NameField,
    selected_column: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        let selected_column = config.initial_column.min(COLS - 1);
        App {
            session: GameSession::new(),
            config,
            name_inputs: [String::new(), String::new()],
            focused_field: NameField::First,
            selected_column,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                info!("quitting");
                break;
            }

            if event::poll(poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn name_input(&self, field: NameField) -> &str {
        match field {
            NameField::First => &self.name_inputs[0],
            NameField::Second => &self.name_inputs[1],
        }
    }

    pub fn focused_field(&self) -> NameField {
        self.focused_field
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_preview(&self) -> bool {
        self.config.show_preview
    }

    /// Whether the restart control is offered: after the first move, or once
    /// the game has ended in a draw.
    pub fn restart_available(&self) -> bool {
        match self.session.phase() {
            Phase::Playing => self.session.has_move_occurred(),
            Phase::Finished(GameOutcome::Draw) => true,
            _ => false,
        }
    }

    /// Route a key press to the view for the current phase.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.session.phase() {
            Phase::Setup => self.handle_name_entry_key(key),
            Phase::Playing | Phase::Finished(GameOutcome::Draw) => self.handle_game_key(key),
            Phase::Finished(GameOutcome::Winner(_)) => self.handle_winner_key(key),
        }
    }

    fn handle_name_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focused_field = self.focused_field.toggle();
            }
            KeyCode::Backspace => {
                self.focused_input_mut().pop();
            }
            KeyCode::Enter => {
                let [first, second] = &self.name_inputs;
                if self.session.start_game(first, second) {
                    self.selected_column = self.config.initial_column.min(COLS - 1);
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                let input = self.focused_input_mut();
                if input.chars().count() < MAX_NAME_LEN {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                // Digits select a column directly, 1-based
                if let Some(digit) = c.to_digit(10) {
                    self.selected_column = digit as usize - 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let report = self.session.play_move(self.selected_column);
                debug!(column = self.selected_column, ?report, "drop requested");
            }
            KeyCode::Char('r') => {
                if self.restart_available() {
                    self.session.restart();
                    self.selected_column = self.config.initial_column.min(COLS - 1);
                }
            }
            _ => {}
        }
    }

    fn handle_winner_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Play again: back to an empty name-entry screen
                self.session.full_reset();
                self.name_inputs = [String::new(), String::new()];
                self.focused_field = NameField::First;
            }
            _ => {}
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focused_field {
            NameField::First => &mut self.name_inputs[0],
            NameField::Second => &mut self.name_inputs[1],
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        match self.session.phase() {
            Phase::Setup => super::name_entry_view::render(frame, self),
            Phase::Playing | Phase::Finished(GameOutcome::Draw) => {
                super::game_view::render(frame, self)
            }
            Phase::Finished(GameOutcome::Winner(_)) => super::winner_view::render(frame, self),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
