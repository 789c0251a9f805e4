//! Color theme picker overlay.
//!
//! Lists the built-in background/text presets with a small swatch of
//! each pair.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{ColorTheme, COLOR_THEMES};
use crate::tui::theme::Theme;

/// State for the color theme picker overlay.
#[derive(Debug, Clone)]
pub struct ThemePickerState {
    /// Currently highlighted list index
    pub selected: usize,
}

/// Outcome of a key press inside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePickerAction {
    /// Keep the overlay open
    Open,
    /// Close without changing anything
    Cancel,
    /// Apply the highlighted theme
    Select(ColorTheme),
}

impl ThemePickerState {
    /// Creates a picker with the given theme id highlighted (index 0 if
    /// the id is unknown, e.g. after manual color overrides).
    #[must_use]
    pub fn new(current_id: &str) -> Self {
        let selected = COLOR_THEMES
            .iter()
            .position(|theme| theme.id == current_id)
            .unwrap_or(0);
        Self { selected }
    }

    /// Handles a key event, returning what the caller should do.
    pub fn handle_key(&mut self, key: KeyEvent) -> ThemePickerAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                ThemePickerAction::Open
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < COLOR_THEMES.len() {
                    self.selected += 1;
                }
                ThemePickerAction::Open
            }
            KeyCode::Enter => ThemePickerAction::Select(COLOR_THEMES[self.selected]),
            KeyCode::Esc => ThemePickerAction::Cancel,
            _ => ThemePickerAction::Open,
        }
    }
}

/// Renders the theme picker as a centered dialog.
pub fn render(f: &mut Frame, state: &ThemePickerState, theme: &Theme) {
    let area = centered_rect(38, COLOR_THEMES.len() as u16 + 6, f.area());
    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = COLOR_THEMES
        .iter()
        .map(|color_theme| {
            let swatch = Span::styled(
                " Aa ",
                Style::default()
                    .fg(color_theme.text.to_ratatui_color())
                    .bg(color_theme.background.to_ratatui_color()),
            );
            let name = Span::raw(format!("  {}", color_theme.name));
            ListItem::new(Line::from(vec![swatch, name]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Choose a Color Theme ")
                .style(Style::default().fg(theme.text).bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let hints = Paragraph::new("↑/↓ move · Enter select · Esc cancel")
        .style(Style::default().fg(theme.text_muted).bg(theme.background))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[1]);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_opens_on_current_theme() {
        let state = ThemePickerState::new("sunset");
        assert_eq!(COLOR_THEMES[state.selected].id, "sunset");
    }

    #[test]
    fn test_unknown_id_defaults_to_first() {
        let state = ThemePickerState::new("not-a-theme");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_select_returns_the_theme() {
        let mut state = ThemePickerState::new("default");
        state.handle_key(key(KeyCode::Down));
        match state.handle_key(key(KeyCode::Enter)) {
            ThemePickerAction::Select(theme) => assert_eq!(theme.id, "dark"),
            other => panic!("expected Select, got {other:?}"),
        }
    }
}
