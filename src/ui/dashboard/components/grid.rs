//! Dashboard grid component
//!
//! Lays out and renders the status cells. The same geometry is used for mouse
//! hit-testing so clicks land on the cell that was drawn.

use super::super::state::DashboardState;
use super::super::utils::{blink_on, tone_color};
use crate::board::layout::GridLayout;
use crate::consts::wallboard_consts::BLINK_PHASE_MS;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use std::time::Duration;

/// Screen rectangles of each cell, in cell order.
///
/// `viewport` is the whole terminal; everything outside `grid_area` counts as
/// chrome when sizing rows.
pub fn cell_rects(viewport: Rect, grid_area: Rect, cell_count: usize) -> Vec<Rect> {
    let reserve = viewport.height.saturating_sub(grid_area.height) as f64;
    let layout = GridLayout::compute_with_reserve(cell_count, viewport.height as f64, reserve);
    if layout.columns == 0 {
        return Vec::new();
    }

    let row_height = layout.cell_height.max(0.0).floor() as u16;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Start)
        .constraints(vec![Constraint::Length(row_height); layout.rows])
        .split(grid_area);

    let mut rects = Vec::with_capacity(cell_count);
    for (row_index, row_area) in row_areas.iter().enumerate() {
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, layout.columns as u32);
                layout.columns
            ])
            .split(*row_area);
        for (column_index, cell_area) in column_areas.iter().enumerate() {
            if row_index * layout.columns + column_index < cell_count {
                rects.push(*cell_area);
            }
        }
    }
    rects
}

/// Index of the cell under a terminal position, if any.
pub fn hit_test(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    rects.iter().position(|rect| rect.contains(position))
}

/// Render the status grid.
pub fn render_grid(f: &mut Frame, area: Rect, state: &DashboardState) {
    let controller = &state.controller;
    let cells = controller.cells();
    if cells.is_empty() {
        let empty = Paragraph::new("No items to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(empty, area);
        return;
    }

    let rects = cell_rects(f.area(), area, cells.len());
    let elapsed = controller.since_render();
    let show_cursor = !controller.selection_visible();
    let blink = blink_on(
        state.start_time.elapsed(),
        Duration::from_millis(BLINK_PHASE_MS),
    );

    for (index, (cell, rect)) in cells.iter().zip(rects).enumerate() {
        let mut style = Style::default().fg(Color::White);
        if let Some(bg) = tone_color(cell.presentation.tone) {
            style = style.bg(bg);
        }
        if cell.is_acknowledged() && blink {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let mut lines = vec![Line::from(Span::styled(
            cell.item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(message) = cell.presentation.visible_message(elapsed) {
            lines.push(Line::from(message.text.clone()));
        }

        let at_cursor = show_cursor && index == controller.cursor();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if at_cursor {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(Style::default().fg(if at_cursor {
                Color::LightYellow
            } else {
                Color::Black
            }));
        if cell.is_acknowledged() {
            block = block.title(" ALARM ");
        }

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style)
            .block(block);
        f.render_widget(widget, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_follow_the_grid_layout() {
        let viewport = Rect::new(0, 0, 100, 40);
        let grid_area = Rect::new(0, 4, 100, 30);
        let rects = cell_rects(viewport, grid_area, 7);

        assert_eq!(rects.len(), 7);
        // Two rows of 15 lines each, five columns of 20.
        assert_eq!(rects[0], Rect::new(0, 4, 20, 15));
        assert_eq!(rects[4].x, 80);
        assert_eq!(rects[5], Rect::new(0, 19, 20, 15));
    }

    #[test]
    fn hit_test_finds_the_clicked_cell() {
        let viewport = Rect::new(0, 0, 100, 40);
        let rects = cell_rects(viewport, Rect::new(0, 4, 100, 30), 7);
        assert_eq!(hit_test(&rects, 0, 4), Some(0));
        assert_eq!(hit_test(&rects, 25, 20), Some(6));
        assert_eq!(hit_test(&rects, 45, 20), None);
        assert_eq!(hit_test(&rects, 90, 25), None);
        assert_eq!(hit_test(&rects, 10, 1), None);
    }

    #[test]
    fn no_cells_no_rects() {
        let viewport = Rect::new(0, 0, 80, 24);
        assert!(cell_rects(viewport, viewport, 0).is_empty());
    }
}
