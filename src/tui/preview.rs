//! Live calligram preview widget.
//!
//! Scales the 800x600 logical canvas into the preview pane and plots
//! each fragment's characters at its anchor point, horizontally
//! centered — a terminal-cell approximation of the centered anchoring
//! the SVG exporter uses. Characters landing on the same cell simply
//! overwrite; the preview is an impression, not the artifact.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::models::{Fragment, StyleParameters};
use crate::tui::theme::Theme;

/// Plots fragments into a character grid of the given cell dimensions.
///
/// Exposed for tests; rendering wraps this in a styled paragraph.
#[must_use]
pub fn plot_fragments(fragments: &[Fragment], columns: usize, rows: usize) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; columns]; rows];
    if columns == 0 || rows == 0 {
        return grid;
    }

    for fragment in fragments {
        let col = (fragment.point.x / CANVAS_WIDTH * columns as f64) as isize;
        let row = (fragment.point.y / CANVAS_HEIGHT * rows as f64) as isize;
        if !(0..rows as isize).contains(&row) {
            continue;
        }

        let chars: Vec<char> = fragment.text.chars().collect();
        let start = col - (chars.len() / 2) as isize;
        for (offset, ch) in chars.iter().enumerate() {
            let cell = start + offset as isize;
            if (0..columns as isize).contains(&cell) {
                grid[row as usize][cell as usize] = *ch;
            }
        }
    }

    grid
}

/// Renders the preview pane.
pub fn render(
    f: &mut Frame,
    area: Rect,
    fragments: &[Fragment],
    style: &StyleParameters,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let grid = plot_fragments(fragments, inner.width as usize, inner.height as usize);
    let text_style = Style::default()
        .fg(style.color.to_ratatui_color())
        .bg(style.background_color.to_ratatui_color());

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_iter().collect::<String>(), text_style)))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_empty_fragments_yield_blank_grid() {
        let grid = plot_fragments(&[], 10, 5);
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.iter().all(|c| *c == ' ')));
    }

    #[test]
    fn test_center_fragment_lands_in_grid_center() {
        let fragments = vec![Fragment::new(Point::new(400.0, 300.0), "X".to_string())];
        let grid = plot_fragments(&fragments, 21, 11);
        assert_eq!(grid[5][10], 'X');
    }

    #[test]
    fn test_fragment_text_is_centered_horizontally() {
        let fragments = vec![Fragment::new(Point::new(400.0, 300.0), "abc".to_string())];
        let grid = plot_fragments(&fragments, 20, 10);
        let row: String = grid[5].iter().collect();
        assert!(row.contains("abc"));
    }

    #[test]
    fn test_out_of_canvas_points_are_clipped() {
        let fragments = vec![
            Fragment::new(Point::new(-50.0, 300.0), "L".to_string()),
            Fragment::new(Point::new(400.0, 900.0), "B".to_string()),
        ];
        let grid = plot_fragments(&fragments, 10, 10);
        assert!(grid.iter().all(|row| row.iter().all(|c| *c != 'B')));
    }

    #[test]
    fn test_zero_sized_grid_is_safe() {
        let fragments = vec![Fragment::new(Point::new(1.0, 1.0), "x".to_string())];
        assert!(plot_fragments(&fragments, 0, 0).is_empty());
    }
}
