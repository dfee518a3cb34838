//! Main TUI application state and logic

use crate::code::Language;
use crate::input::{format_input, parse_input, random_input, SAMPLES};
use crate::playback::Player;
use crate::settings::{self, speed, SettingsStore};
use crate::trace::generate;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::panes::{self, CodeScrollState, StatusRenderData};
use super::theme::DEFAULT_THEME;

/// The main application state
pub struct App {
    /// Playback over the current run
    pub player: Player,

    /// Active code representation
    pub language: Language,

    /// Where speed and language preferences are persisted
    settings: Box<dyn SettingsStore>,

    /// Input of the current run, as shown to the user
    pub input_text: String,

    /// Pending input while the editor is open
    pub editor: Option<String>,

    /// Cached repository star count, if fresh
    pub stars: Option<u64>,

    /// Per-pane scroll state
    pub code_scroll: CodeScrollState,
    pub input_scroll: usize,
    pub groups_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time playback advanced (or was started)
    pub last_advance: Instant,
}

impl App {
    /// Create a new app over an already generated run
    pub fn new(
        player: Player,
        language: Language,
        input: &[String],
        store: Box<dyn SettingsStore>,
    ) -> Self {
        let stars = settings::cached_stars(store.as_ref(), Utc::now());
        App {
            player,
            language,
            settings: store,
            input_text: format_input(input),
            editor: None,
            stars,
            code_scroll: CodeScrollState::default(),
            input_scroll: 0,
            groups_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_advance: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.player.tick(self.last_advance.elapsed()) {
                self.last_advance = Instant::now();
                self.status_message = if self.player.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            // Poll with a timeout so playback keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, input editor (while open), narration, status bar
        let editor_height = if self.editor.is_some() { 3 } else { 0 };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(editor_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Input (top) | Map (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(columns[1]);

        let step = self.player.current();

        panes::render_code_pane(
            frame,
            columns[0],
            self.language,
            step,
            &mut self.code_scroll,
        );
        panes::render_input_pane(frame, right_rows[0], step, &mut self.input_scroll);
        panes::render_groups_pane(frame, right_rows[1], step, &mut self.groups_scroll);

        if let Some(text) = &self.editor {
            let block = Block::default()
                .title(" Input: JSON array or comma list ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.secondary));
            let line = Line::from(vec![
                Span::styled(text.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), main_chunks[1]);
        }

        panes::render_narration(frame, main_chunks[2], step);

        panes::render_status_bar(
            frame,
            main_chunks[3],
            &StatusRenderData {
                message: &self.status_message,
                current_step: self.player.position(),
                total_steps: self.player.len(),
                language: self.language,
                speed: self.player.speed(),
                stars: self.stars,
                is_playing: self.player.is_playing(),
                is_editing: self.editor.is_some(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Char(' ') => {
                self.player.toggle_play();
                if self.player.is_playing() {
                    self.last_advance = Instant::now();
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.player.seek_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Tab => self.cycle_language(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(speed::faster(self.player.speed()));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.change_speed(speed::slower(self.player.speed()));
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.player.reset();
                self.editor = Some(self.input_text.clone());
                self.status_message = "Editing input".to_string();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let input = random_input(&mut rand::thread_rng());
                self.load(input, "Random input");
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match SAMPLES.get(index) {
                    Some(sample) => self.load(sample.to_vec(), sample.label),
                    None => {
                        self.status_message =
                            format!("No sample {} (1 to {})", index + 1, SAMPLES.len());
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(text) = self.editor.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.editor = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => match parse_input(text) {
                Ok(input) => {
                    self.editor = None;
                    self.load(input, "Custom input");
                }
                Err(e) => {
                    debug!("Rejected input: {}", e);
                    self.status_message = e.to_string();
                }
            },
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            _ => {}
        }
    }

    /// Generate a run for `input` and start it from the first step
    fn load(&mut self, input: Vec<String>, label: &str) {
        let steps = generate(&input);
        info!("Loaded {} ({} strings, {} steps)", label, input.len(), steps.len());
        self.player.replace(steps);
        self.input_text = format_input(&input);
        self.input_scroll = 0;
        self.groups_scroll = 0;
        self.status_message = format!("{}: {}", label, self.input_text);
    }

    fn cycle_language(&mut self) {
        self.language = self.language.next();
        self.code_scroll = CodeScrollState::default();
        self.status_message = match settings::save_language(self.settings.as_mut(), self.language) {
            Ok(()) => format!("Language: {}", self.language.name()),
            Err(e) => {
                warn!("Failed to save language: {}", e);
                format!("Language: {} (not saved: {})", self.language.name(), e)
            }
        };
    }

    fn change_speed(&mut self, new_speed: f64) {
        self.player.set_speed(new_speed);
        self.status_message = match settings::save_speed(self.settings.as_mut(), new_speed) {
            Ok(()) => format!("Speed: {}x", new_speed),
            Err(e) => {
                warn!("Failed to save speed: {}", e);
                format!("Speed: {}x (not saved: {})", new_speed, e)
            }
        };
    }

    /// Step forward in the run
    fn step_forward(&mut self) {
        self.status_message = match self.player.step_forward() {
            Ok(()) => "Stepped forward".to_string(),
            Err(e) => format!("Cannot step forward: {}", e),
        };
    }

    /// Step backward in the run
    fn step_backward(&mut self) {
        self.status_message = match self.player.step_backward() {
            Ok(()) => "Stepped backward".to_string(),
            Err(e) => format!("Cannot step backward: {}", e),
        };
    }
}
