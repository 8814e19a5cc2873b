//! Dashboard footer component
//!
//! Renders the key bindings for the current mode

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, selection_visible: bool) {
    let footer_text = if selection_visible {
        "[Tab] Next | [←→] Change | [Enter] Show | [R] Refresh | [S] Hide | [Q] Quit"
    } else {
        "[Click/Space] Alarm | [Arrows] Move | [R] Refresh | [S] Selectors | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
