//! Dashboard header component
//!
//! Renders the title and the current page / health summary line

use super::super::state::{DashboardState, FetchingState};
use crate::board::Status;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and page summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = match state.fetching_state() {
        FetchingState::Active { started_at } => format!(
            "STATUS WALLBOARD v{} - REFRESHING {} ({}s)",
            version,
            state.feed,
            started_at.elapsed().as_secs()
        ),
        FetchingState::Idle => format!("STATUS WALLBOARD v{} - {}", version, state.feed),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let controller = &state.controller;
    let page = match controller.page_selection() {
        Some(page) => format!(
            "Group {} | Screen {} | Size {}",
            page.group, page.screen, page.size
        ),
        None => "No page selected".to_string(),
    };

    let cells = controller.cells();
    let (mut healthy, mut unhealthy, mut errors) = (0, 0, 0);
    for cell in cells {
        match cell.item.status {
            Status::Healthy => healthy += 1,
            Status::Unhealthy => unhealthy += 1,
            Status::Error => errors += 1,
            Status::Unknown(_) => {}
        }
    }
    let alarmed = cells.iter().filter(|c| c.is_acknowledged()).count();

    let summary = Line::from(vec![
        Span::styled(
            format!("{} items ", controller.item_count()),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled(format!("{} ", page), Style::default().fg(Color::White)),
        Span::styled(format!("● {} ", healthy), Style::default().fg(Color::Green)),
        Span::styled(format!("● {} ", unhealthy), Style::default().fg(Color::Red)),
        Span::styled(format!("● {} ", errors), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("⚠ {} alarmed", alarmed),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        header_chunks[1],
    );
}
