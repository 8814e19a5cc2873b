//! Key and mouse routing for the dashboard

use crate::audio::AudioCue;
use crate::board::{DashboardController, DisplaySurface};
use crate::ui::dashboard::components::grid::{cell_rects, hit_test};
use crate::ui::dashboard::renderer::regions;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// What the event loop has to do after a key was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Refresh,
    Quit,
}

/// Applies a key press to the controller.
///
/// While the prompt is up, any key only dismisses it. Arrows and Enter act on
/// the selectors while they are shown, and on the grid cursor otherwise.
pub fn route_key(
    controller: &mut DashboardController,
    code: KeyCode,
    surface: &mut dyn DisplaySurface,
    audio: &dyn AudioCue,
) -> KeyAction {
    if controller.prompt().is_some() {
        controller.dismiss_prompt();
        return KeyAction::None;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('r') => return KeyAction::Refresh,
        KeyCode::Char('s') => {
            controller.toggle_selection_surface();
            return KeyAction::None;
        }
        _ => {}
    }

    if controller.selection_visible() {
        match code {
            KeyCode::Tab => controller.focus_next(),
            KeyCode::BackTab => controller.focus_previous(),
            KeyCode::Left | KeyCode::Up => controller.step_focused(-1),
            KeyCode::Right | KeyCode::Down => controller.step_focused(1),
            KeyCode::Enter => {
                let _ = controller.submit(surface);
            }
            _ => {}
        }
    } else {
        match code {
            KeyCode::Left => controller.move_cursor(-1, 0),
            KeyCode::Right => controller.move_cursor(1, 0),
            KeyCode::Up => controller.move_cursor(0, -1),
            KeyCode::Down => controller.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                controller.interact_at_cursor(audio);
            }
            _ => {}
        }
    }
    KeyAction::None
}

/// Applies a left click at a terminal position. Returns the index of the cell
/// that was hit, if any.
pub fn route_click(
    controller: &mut DashboardController,
    viewport: Rect,
    column: u16,
    row: u16,
    audio: &dyn AudioCue,
) -> Option<usize> {
    if controller.prompt().is_some() {
        controller.dismiss_prompt();
        return None;
    }
    let grid = regions(viewport, controller.selection_visible()).grid;
    let rects = cell_rects(viewport, grid, controller.cells().len());
    let index = hit_test(&rects, column, row)?;
    controller.interact(index, audio);
    Some(index)
}
