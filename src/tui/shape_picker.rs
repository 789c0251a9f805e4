//! Shape picker overlay.
//!
//! A centered list of the ten silhouettes. Selection is immediate on
//! Enter; Esc keeps the current shape.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::ShapeKind;
use crate::tui::theme::Theme;

/// State for the shape picker overlay.
#[derive(Debug, Clone)]
pub struct ShapePickerState {
    /// Currently highlighted list index
    pub selected: usize,
}

/// Outcome of a key press inside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Keep the overlay open
    Open,
    /// Close without changing anything
    Cancel,
    /// Apply the highlighted shape
    Select(ShapeKind),
}

impl ShapePickerState {
    /// Creates a picker with the given shape highlighted.
    #[must_use]
    pub fn new(current: ShapeKind) -> Self {
        let selected = ShapeKind::ALL
            .iter()
            .position(|shape| *shape == current)
            .unwrap_or(0);
        Self { selected }
    }

    /// Handles a key event, returning what the caller should do.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                PickerAction::Open
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < ShapeKind::ALL.len() {
                    self.selected += 1;
                }
                PickerAction::Open
            }
            KeyCode::Enter => PickerAction::Select(ShapeKind::ALL[self.selected]),
            KeyCode::Esc => PickerAction::Cancel,
            _ => PickerAction::Open,
        }
    }
}

/// Renders the shape picker as a centered dialog.
pub fn render(f: &mut Frame, state: &ShapePickerState, theme: &Theme) {
    let area = centered_rect(34, ShapeKind::ALL.len() as u16 + 6, f.area());
    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);

    let items: Vec<ListItem> = ShapeKind::ALL
        .iter()
        .map(|shape| ListItem::new(format!("  {}", shape.display_name())))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select a Shape ")
                .style(Style::default().fg(theme.text).bg(theme.background))
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let hints = Paragraph::new("↑/↓ move · Enter select · Esc cancel")
        .style(Style::default().fg(theme.text_muted).bg(theme.background))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[1]);
}

/// Computes a centered rect of fixed size within `area`.
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
