//! Selection panel component
//!
//! Renders the group, screen and size selectors side by side

use super::super::state::DashboardState;
use crate::board::selection::SelectorKind;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the three selectors, highlighting the focused one.
pub fn render_selection_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let kinds = [SelectorKind::Group, SelectorKind::Screen, SelectorKind::Size];
    for (kind, chunk) in kinds.into_iter().zip(chunks.iter()) {
        let selector = state.controller.selector(kind);
        let focused = state.controller.focus() == kind;

        let (border_color, value_style) = if focused {
            (
                Color::LightYellow,
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Color::DarkGray, Style::default().fg(Color::White))
        };

        let value = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(selector.current_label(), value_style),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  ({} options)", selector.options().len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let block = Block::default()
            .title(kind.to_string())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        f.render_widget(
            Paragraph::new(value)
                .alignment(Alignment::Center)
                .block(block),
            *chunk,
        );
    }
}
