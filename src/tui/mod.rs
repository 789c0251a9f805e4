//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod preview;
pub mod settings_form;
pub mod shape_picker;
pub mod theme;
pub mod theme_picker;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{APP_NAME, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::export;
use crate::models::ColorTheme;
use crate::services::CalligramLayout;
use settings_form::{SettingsAction, SettingsFormState};
use shape_picker::{PickerAction, ShapePickerState};
use theme::Theme;
use theme_picker::{ThemePickerAction, ThemePickerState};

/// The currently open modal overlay, if any.
#[derive(Debug, Clone)]
pub enum Overlay {
    /// Shape selection list
    ShapePicker(ShapePickerState),
    /// Color theme selection list
    ThemePicker(ThemePickerState),
    /// Typography settings form
    Settings(SettingsFormState),
}

/// Top-level application state for the studio.
pub struct AppState {
    /// The calligram being edited, with its derived caches
    pub layout: CalligramLayout,
    /// Id of the most recently applied color theme (for picker focus)
    pub color_theme_id: String,
    /// Application configuration
    pub config: Config,
    /// TUI chrome theme
    pub theme: Theme,
    /// Open modal overlay
    pub overlay: Option<Overlay>,
    /// One-line feedback shown in the status bar
    pub status_message: String,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the studio state from configuration defaults.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut layout = CalligramLayout::new(config.defaults.shape, CANVAS_WIDTH, CANVAS_HEIGHT);
        layout.style = config.defaults.style.clone();

        let color_theme_id = config.defaults.color_theme.clone();
        if let Some(theme) = ColorTheme::find(&color_theme_id) {
            layout.style.color = theme.text;
            layout.style.background_color = theme.background;
        }

        Self {
            layout,
            color_theme_id,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            overlay: None,
            status_message: "Type your text · Ctrl+S export · Ctrl+Q quit".to_string(),
            should_quit: false,
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Saves the current shape, theme, and style as the startup
    /// defaults. Reports the outcome in the status bar.
    pub fn save_defaults(&mut self) {
        self.config.defaults.shape = self.layout.shape();
        self.config.defaults.color_theme = self.color_theme_id.clone();
        self.config.defaults.style = self.layout.style.clone();
        match self.config.save() {
            Ok(()) => self.set_status("✓ Saved current settings as defaults"),
            Err(e) => self.set_status(format!("Could not save defaults: {e}")),
        }
    }

    /// Exports the current calligram, reporting the outcome in the
    /// status bar. Export failures never propagate past this point.
    pub fn export_current(&mut self) {
        let path = export::default_output_path(self.layout.shape());
        match export::save_svg(
            &path,
            self.layout.fragments(),
            &self.layout.style,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        ) {
            Ok(()) => self.set_status(format!("✓ Saved {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {e}")),
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill the screen with the chrome background first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let status_height = if state.config.ui.show_hints { 4 } else { 3 };
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Title bar
            Constraint::Min(10),                // Main content
            Constraint::Length(status_height),  // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    render_status_bar(f, chunks[2], state);

    // Render overlay on top if one is open
    match &state.overlay {
        Some(Overlay::ShapePicker(picker)) => shape_picker::render(f, picker, &state.theme),
        Some(Overlay::ThemePicker(picker)) => theme_picker::render(f, picker, &state.theme),
        Some(Overlay::Settings(form)) => {
            settings_form::render(f, form, &state.layout.style, &state.theme);
        }
        None => {}
    }
}

/// Render title bar with app name and current shape
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(
        " {} — {} · {} points",
        APP_NAME,
        state.layout.shape().display_name(),
        state.layout.points().len()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render main content: text editor on the left, preview on the right
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    render_text_editor(f, chunks[0], state);
    preview::render(
        f,
        chunks[1],
        state.layout.fragments(),
        &state.layout.style,
        &state.theme,
    );
}

/// Render the text input pane
fn render_text_editor(f: &mut Frame, area: Rect, state: &AppState) {
    let text = state.layout.text();
    let display = if text.is_empty() {
        Span::styled(
            "Enter your poem or text here...",
            Style::default().fg(state.theme.text_muted),
        )
    } else {
        Span::styled(text, Style::default().fg(state.theme.text))
    };

    let editor = Paragraph::new(Line::from(display))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Text ")
                .border_style(Style::default().fg(state.theme.accent))
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(editor, area);
}

/// Render status message plus optional key hints
fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", state.status_message),
        Style::default().fg(state.theme.text),
    ))];

    if state.config.ui.show_hints {
        lines.push(Line::from(Span::styled(
            " Ctrl+P shape · Ctrl+T theme · Ctrl+O typography · Ctrl+S export · Ctrl+D save defaults · Ctrl+Q quit",
            Style::default().fg(state.theme.text_muted),
        )));
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(status, area);
}

/// Handles a key event. Returns true when the application should exit.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Overlays capture input first
    if let Some(overlay) = &mut state.overlay {
        match overlay {
            Overlay::ShapePicker(picker) => match picker.handle_key(key) {
                PickerAction::Open => {}
                PickerAction::Cancel => state.overlay = None,
                PickerAction::Select(shape) => {
                    state.layout.set_shape(shape);
                    state.overlay = None;
                    state.set_status(format!("Shape: {}", shape.display_name()));
                }
            },
            Overlay::ThemePicker(picker) => match picker.handle_key(key) {
                ThemePickerAction::Open => {}
                ThemePickerAction::Cancel => state.overlay = None,
                ThemePickerAction::Select(color_theme) => {
                    state.layout.style.color = color_theme.text;
                    state.layout.style.background_color = color_theme.background;
                    state.color_theme_id = color_theme.id.to_string();
                    state.overlay = None;
                    state.set_status(format!("Theme: {}", color_theme.name));
                }
            },
            Overlay::Settings(form) => {
                if form.handle_key(key, &mut state.layout.style) == SettingsAction::Close {
                    state.overlay = None;
                }
            }
        }
        return Ok(false);
    }

    // Control-key commands
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('s') => state.export_current(),
            KeyCode::Char('d') => state.save_defaults(),
            KeyCode::Char('p') => {
                state.overlay = Some(Overlay::ShapePicker(ShapePickerState::new(
                    state.layout.shape(),
                )));
            }
            KeyCode::Char('t') => {
                state.overlay = Some(Overlay::ThemePicker(ThemePickerState::new(
                    &state.color_theme_id,
                )));
            }
            KeyCode::Char('o') => {
                state.overlay = Some(Overlay::Settings(SettingsFormState::new()));
            }
            _ => {}
        }
        return Ok(false);
    }

    // Plain keys edit the text
    match key.code {
        KeyCode::Char(ch) => {
            let mut text = state.layout.text().to_string();
            text.push(ch);
            state.layout.set_text(text);
        }
        KeyCode::Enter => {
            let mut text = state.layout.text().to_string();
            text.push('\n');
            state.layout.set_text(text);
        }
        KeyCode::Backspace => {
            let mut text = state.layout.text().to_string();
            text.pop();
            state.layout.set_text(text);
        }
        _ => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShapeKind;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn state() -> AppState {
        AppState::new(Config::new())
    }

    #[test]
    fn test_new_state_applies_config_theme() {
        let state = state();
        assert_eq!(state.layout.shape(), ShapeKind::Heart);
        assert_eq!(state.color_theme_id, "default");
        assert_eq!(state.layout.style.background_color.to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_typing_updates_fragments() {
        let mut state = state();
        handle_key_event(&mut state, key(KeyCode::Char('h'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Char('i'))).unwrap();
        assert_eq!(state.layout.text(), "hi");
        assert!(!state.layout.fragments().is_empty());
        handle_key_event(&mut state, key(KeyCode::Backspace)).unwrap();
        assert_eq!(state.layout.text(), "h");
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut state = state();
        assert!(handle_key_event(&mut state, ctrl('q')).unwrap());
    }

    #[test]
    fn test_shape_picker_flow() {
        let mut state = state();
        handle_key_event(&mut state, ctrl('p')).unwrap();
        assert!(matches!(state.overlay, Some(Overlay::ShapePicker(_))));
        // Heart is first; move down to Dove and select
        handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.overlay.is_none());
        assert_eq!(state.layout.shape(), ShapeKind::Dove);
    }

    #[test]
    fn test_theme_picker_applies_colors() {
        let mut state = state();
        handle_key_event(&mut state, ctrl('t')).unwrap();
        // default -> dark
        handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(state.color_theme_id, "dark");
        assert_eq!(state.layout.style.background_color.to_hex(), "#121212");
        assert_eq!(state.layout.style.color.to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_escape_cancels_overlay_without_changes() {
        let mut state = state();
        let shape_before = state.layout.shape();
        handle_key_event(&mut state, ctrl('p')).unwrap();
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.overlay.is_none());
        assert_eq!(state.layout.shape(), shape_before);
    }
}
