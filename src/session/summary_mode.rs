//! Summary mode execution
//!
//! Fetches the feed once and prints how it paginates, without a terminal UI.

use super::{SessionData, messages::print_session_starting};
use crate::board::layout::GridLayout;
use crate::board::pagination;
use crate::events::EventType;
use crate::feed::load_items;
use crate::{print_cmd_info, print_cmd_warn};
use std::error::Error;

/// Runs the application in summary mode
///
/// # Arguments
/// * `session` - Session data from setup
/// * `viewport_height` - Height in pixels used for the layout figures
pub async fn run_summary_mode(
    session: SessionData,
    viewport_height: f64,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("summary", &session.feed);

    let (items, event) = load_items(session.source.as_ref()).await;
    if event.event_type == EventType::Error {
        print_cmd_warn!("Feed unavailable", "{}", event.msg);
    }

    let total = items.len();
    if total == 0 {
        print_cmd_warn!("Empty feed", "No items to display");
        return Ok(());
    }

    print_cmd_info!(
        "Feed",
        "{} items in {} groups",
        total,
        pagination::group_count(total)
    );
    for line in summary_lines(total, viewport_height) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per group followed by one indented line per screen.
fn summary_lines(total: usize, viewport_height: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for group in pagination::group_labels(total) {
        lines.push(format!(
            "Group {}: {} items, {} screens",
            group,
            pagination::group_item_count(total, group),
            pagination::screen_count(total, group)
        ));
        for screen in pagination::screen_labels(total, group) {
            let range = pagination::screen_range(total, group, screen);
            let sizes = pagination::selectable_sizes(total, group, screen);
            let line = match pagination::default_size(&sizes) {
                Some(size) => {
                    let layout = GridLayout::compute(size, viewport_height);
                    format!(
                        "  Screen {}: items {}-{}, sizes 2-{}, default {} ({}x{} at {:.0}px)",
                        screen,
                        range.start + 1,
                        range.end,
                        sizes.last().copied().unwrap_or(size),
                        size,
                        layout.columns,
                        layout.rows,
                        layout.cell_height
                    )
                }
                None => format!(
                    "  Screen {}: items {}-{}, no selectable size",
                    screen,
                    range.start + 1,
                    range.end
                ),
            };
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_for_230_items() {
        let lines = summary_lines(230, 1080.0);
        assert_eq!(
            lines,
            vec![
                "Group 1: 150 items, 3 screens",
                "  Screen 1: items 1-50, sizes 2-50, default 50 (5x10 at 98px)",
                "  Screen 2: items 51-100, sizes 2-50, default 50 (5x10 at 98px)",
                "  Screen 3: items 101-150, sizes 2-50, default 50 (5x10 at 98px)",
                "Group 2: 80 items, 2 screens",
                "  Screen 1: items 151-200, sizes 2-50, default 50 (5x10 at 98px)",
                "  Screen 2: items 201-230, sizes 2-30, default 30 (5x6 at 163px)",
            ]
        );
    }

    #[test]
    fn single_item_screen_has_no_size() {
        let lines = summary_lines(151, 1080.0);
        assert_eq!(lines.last().unwrap(), "  Screen 1: items 151-151, no selectable size");
    }
}
