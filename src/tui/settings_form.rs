//! Typography settings form overlay.
//!
//! Five fields: font size, family, weight, style, and letter
//! spacing. Up/Down moves between
//! fields, Left/Right adjusts the focused one; every adjustment is
//! applied immediately.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{
    all_fonts, FontStyle, FontWeight, StyleParameters, FONT_SIZE_RANGE, LETTER_SPACING_RANGE,
};
use crate::tui::theme::Theme;

/// The adjustable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// Font size slider (8-24 px)
    FontSize,
    /// Font family from the catalog
    FontFamily,
    /// Weight cycle (normal/bold/lighter)
    FontWeight,
    /// Style cycle (normal/italic)
    FontStyle,
    /// Letter spacing slider (0-10 px)
    LetterSpacing,
}

impl SettingsField {
    const ALL: [Self; 5] = [
        Self::FontSize,
        Self::FontFamily,
        Self::FontWeight,
        Self::FontStyle,
        Self::LetterSpacing,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::FontSize => "Font Size",
            Self::FontFamily => "Font Family",
            Self::FontWeight => "Font Weight",
            Self::FontStyle => "Font Style",
            Self::LetterSpacing => "Letter Spacing",
        }
    }
}

/// State for the settings form overlay.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    /// Index of the focused field
    pub focused: usize,
}

/// Outcome of a key press inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Keep the overlay open
    Open,
    /// Close the form
    Close,
}

impl SettingsFormState {
    /// Creates the form with the first field focused.
    #[must_use]
    pub const fn new() -> Self {
        Self { focused: 0 }
    }

    /// Handles a key event, adjusting `style` in place.
    pub fn handle_key(&mut self, key: KeyEvent, style: &mut StyleParameters) -> SettingsAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.focused = self.focused.saturating_sub(1);
                SettingsAction::Open
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.focused + 1 < SettingsField::ALL.len() {
                    self.focused += 1;
                }
                SettingsAction::Open
            }
            KeyCode::Left | KeyCode::Char('h') => {
                Self::adjust(SettingsField::ALL[self.focused], style, -1);
                SettingsAction::Open
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Self::adjust(SettingsField::ALL[self.focused], style, 1);
                SettingsAction::Open
            }
            KeyCode::Esc | KeyCode::Enter => SettingsAction::Close,
            _ => SettingsAction::Open,
        }
    }

    /// Steps one field by one notch in either direction.
    fn adjust(field: SettingsField, style: &mut StyleParameters, direction: i8) {
        match field {
            SettingsField::FontSize => {
                let size = if direction > 0 {
                    style.font_size.saturating_add(1)
                } else {
                    style.font_size.saturating_sub(1)
                };
                style.set_font_size(size);
            }
            SettingsField::LetterSpacing => {
                let spacing = if direction > 0 {
                    style.letter_spacing.saturating_add(1)
                } else {
                    style.letter_spacing.saturating_sub(1)
                };
                style.set_letter_spacing(spacing);
            }
            SettingsField::FontFamily => {
                let fonts = all_fonts();
                let current = fonts
                    .iter()
                    .position(|f| *f == style.font_family)
                    .unwrap_or(0);
                let next = if direction > 0 {
                    (current + 1) % fonts.len()
                } else {
                    (current + fonts.len() - 1) % fonts.len()
                };
                style.font_family = fonts[next].to_string();
            }
            SettingsField::FontWeight => {
                style.font_weight = cycle(&FontWeight::ALL, style.font_weight, direction);
            }
            SettingsField::FontStyle => {
                style.font_style = cycle(&FontStyle::ALL, style.font_style, direction);
            }
        }
    }
}

impl Default for SettingsFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Steps through a closed set of choices, wrapping at the ends.
fn cycle<T: Copy + PartialEq>(choices: &[T], current: T, direction: i8) -> T {
    let index = choices.iter().position(|c| *c == current).unwrap_or(0);
    let next = if direction > 0 {
        (index + 1) % choices.len()
    } else {
        (index + choices.len() - 1) % choices.len()
    };
    choices[next]
}

/// Renders the settings form as a centered dialog.
pub fn render(f: &mut Frame, state: &SettingsFormState, style: &StyleParameters, theme: &Theme) {
    let area = centered_rect(46, SettingsField::ALL.len() as u16 + 6, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Customize Typography ")
        .style(Style::default().fg(theme.text).bg(theme.background))
        .border_style(Style::default().fg(theme.primary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = SettingsField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = match field {
                SettingsField::FontSize => format!(
                    "◂ {:>2}px ▸  ({}-{})",
                    style.font_size, FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1
                ),
                SettingsField::FontFamily => format!("◂ {} ▸", style.font_family),
                SettingsField::FontWeight => format!("◂ {} ▸", style.font_weight.as_css()),
                SettingsField::FontStyle => format!("◂ {} ▸", style.font_style.as_css()),
                SettingsField::LetterSpacing => format!(
                    "◂ {:>2}px ▸  ({}-{})",
                    style.letter_spacing, LETTER_SPACING_RANGE.0, LETTER_SPACING_RANGE.1
                ),
            };
            let focused = index == state.focused;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(format!(" {:<16}", field.label()), label_style),
                Span::styled(value, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[0]);

    let hints = Paragraph::new("↑/↓ field · ◂/▸ adjust · Esc close")
        .style(Style::default().fg(theme.text_muted))
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
