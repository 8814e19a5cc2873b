//! Dashboard main renderer

use super::components::{footer, grid, header, logs, prompt, selection};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Screen regions of the dashboard for one frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub selection: Option<Rect>,
    pub grid: Rect,
    pub logs: Option<Rect>,
    pub footer: Rect,
}

/// Splits the frame. With the selectors hidden the grid takes everything but
/// the header and footer.
pub fn regions(area: Rect, selection_visible: bool) -> Regions {
    if selection_visible {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);
        Regions {
            header: chunks[0],
            selection: Some(chunks[1]),
            grid: chunks[2],
            logs: Some(chunks[3]),
            footer: chunks[4],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(2),
            ])
            .split(area);
        Regions {
            header: chunks[0],
            selection: None,
            grid: chunks[1],
            logs: None,
            footer: chunks[2],
        }
    }
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let selection_visible = state.controller.selection_visible();
    let regions = regions(f.area(), selection_visible);

    header::render_header(f, regions.header, state);
    if let Some(area) = regions.selection {
        selection::render_selection_panel(f, area, state);
    }
    grid::render_grid(f, regions.grid, state);
    if let Some(area) = regions.logs {
        logs::render_logs_panel(f, area, state);
    }
    footer::render_footer(f, regions.footer, selection_visible);

    if let Some(message) = state.controller.prompt() {
        prompt::render_prompt(f, message);
    }
}
