//! Dashboard orchestration
//!
//! Holds the current feed snapshot, drives the group -> screen -> size cascade,
//! builds the grid cells and routes operator interactions to them.

use super::ack::{CellState, SessionMode, Transition};
use super::item::{Item, Status};
use super::layout::GridLayout;
use super::pagination;
use super::selection::{Selector, SelectorKind};
use crate::audio::AudioCue;
use crate::consts::wallboard_consts::MAX_GRID_CELLS;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use std::time::{Duration, Instant};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select all dropdowns before proceeding.")]
    NoSizeSelected,
}

/// The display the dashboard is drawn on.
#[cfg_attr(test, automock)]
pub trait DisplaySurface {
    /// Best-effort request to take over the whole display. Failures are not reported.
    fn request_fullscreen(&mut self);
}

/// A complete group/screen/size choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    pub group: usize,
    pub screen: usize,
    pub size: usize,
}

#[derive(Debug)]
pub struct DashboardController {
    /// Current feed snapshot.
    items: Vec<Item>,
    /// Generation of the most recently issued fetch.
    generation: u64,
    group: Selector,
    screen: Selector,
    size: Selector,
    focus: SelectorKind,
    session: SessionMode,
    selection_visible: bool,
    cells: Vec<CellState>,
    cursor: usize,
    rendered_at: Option<Instant>,
    /// Blocking prompt shown until dismissed.
    prompt: Option<String>,
    pending_events: Vec<Event>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
            group: Selector::new(SelectorKind::Group),
            screen: Selector::new(SelectorKind::Screen),
            size: Selector::new(SelectorKind::Size),
            focus: SelectorKind::Group,
            session: SessionMode::default(),
            selection_visible: true,
            cells: Vec::new(),
            cursor: 0,
            rendered_at: None,
            prompt: None,
            pending_events: Vec::new(),
        }
    }

    // Snapshot handling

    /// Starts a new fetch generation. Results tagged with older generations are dropped.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a fetched snapshot if it belongs to the latest generation.
    pub fn apply_snapshot(&mut self, generation: u64, items: Vec<Item>) -> bool {
        if generation != self.generation {
            self.log(
                format!(
                    "Discarded stale feed result #{} (latest is #{})",
                    generation, self.generation
                ),
                EventType::Refresh,
                LogLevel::Debug,
            );
            return false;
        }

        let previous = (
            self.group.selected(),
            self.screen.selected(),
            self.size.selected(),
        );
        self.items = items;
        self.log(
            format!(
                "Loaded {} items in {} groups",
                self.items.len(),
                pagination::group_count(self.items.len())
            ),
            EventType::Success,
            LogLevel::Info,
        );
        self.bind_groups();
        self.restore_selection(previous);
        true
    }

    /// Re-applies a selection made against the previous snapshot where it is still valid.
    fn restore_selection(&mut self, previous: (Option<usize>, Option<usize>, Option<usize>)) {
        let (Some(group), Some(screen), size) = previous else {
            return;
        };
        if self.group.selected() != Some(group) {
            if !self.group.select(group) {
                return;
            }
            self.on_group_changed();
        }
        if self.screen.selected() != Some(screen) {
            if !self.screen.select(screen) {
                return;
            }
            self.on_screen_changed();
        }
        if let Some(size) = size {
            if self.size.selected() != Some(size) && self.size.select(size) {
                self.on_size_changed();
            }
        }
    }

    // Selection cascade

    fn bind_groups(&mut self) {
        self.group
            .replace_options(pagination::group_labels(self.items.len()));
        if self.group.select(1) {
            self.on_group_changed();
        } else {
            self.screen.clear();
            self.size.clear();
            self.clear_grid();
        }
    }

    fn on_group_changed(&mut self) {
        let total = self.items.len();
        let screens = self
            .group
            .selected()
            .map(|group| pagination::screen_labels(total, group))
            .unwrap_or_default();
        self.screen.replace_options(screens);
        if self.screen.select(1) {
            self.on_screen_changed();
        } else {
            self.size.clear();
            self.clear_grid();
        }
    }

    fn on_screen_changed(&mut self) {
        let total = self.items.len();
        let sizes = match (self.group.selected(), self.screen.selected()) {
            (Some(group), Some(screen)) => pagination::selectable_sizes(total, group, screen),
            _ => Vec::new(),
        };
        let default = pagination::default_size(&sizes);
        self.size.replace_options(sizes);
        match default {
            Some(size) => {
                self.size.select(size);
                self.on_size_changed();
            }
            None => self.clear_grid(),
        }
    }

    fn on_size_changed(&mut self) {
        match self.size.selected() {
            Some(size) => self.render_grid(size),
            None => self.clear_grid(),
        }
    }

    fn dispatch(&mut self, kind: SelectorKind) {
        match kind {
            SelectorKind::Group => self.on_group_changed(),
            SelectorKind::Screen => self.on_screen_changed(),
            SelectorKind::Size => self.on_size_changed(),
        }
    }

    /// Selects `value` on a selector as if the operator picked it, cascading downstream.
    pub fn select(&mut self, kind: SelectorKind, value: usize) -> bool {
        if !self.selector_mut(kind).select(value) {
            return false;
        }
        self.dispatch(kind);
        true
    }

    /// Moves the focused selector by `delta` options, cascading on change.
    pub fn step_focused(&mut self, delta: isize) {
        let kind = self.focus;
        if self.selector_mut(kind).step(delta) {
            self.dispatch(kind);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Confirms the size selection: enters fullscreen, hides the selectors and renders.
    pub fn submit(&mut self, surface: &mut dyn DisplaySurface) -> Result<(), SubmitError> {
        let Some(size) = self.size.selected().filter(|size| *size > 0) else {
            let err = SubmitError::NoSizeSelected;
            self.prompt = Some(err.to_string());
            self.log(
                "Submit rejected: no size selected".to_string(),
                EventType::Error,
                LogLevel::Warn,
            );
            return Err(err);
        };

        if self.session.enter_fullscreen() {
            surface.request_fullscreen();
            self.log(
                "Entered fullscreen mode".to_string(),
                EventType::Success,
                LogLevel::Info,
            );
        }
        self.selection_visible = false;
        self.render_grid(size);
        Ok(())
    }

    // Grid

    fn render_grid(&mut self, size: usize) {
        let (Some(group), Some(screen)) = (self.group.selected(), self.screen.selected()) else {
            self.clear_grid();
            return;
        };
        let range = pagination::screen_range(self.items.len(), group, screen);
        let count = size.min(MAX_GRID_CELLS).min(range.len());
        self.cells = self.items[range.start..range.start + count]
            .iter()
            .cloned()
            .map(CellState::new)
            .collect();
        self.cursor = 0;
        self.rendered_at = Some(Instant::now());

        let unknown = self
            .cells
            .iter()
            .filter(|cell| matches!(cell.item.status, Status::Unknown(_)))
            .count();
        if unknown > 0 {
            log::warn!("{} items with unrecognized status rendered unpainted", unknown);
            self.log(
                format!("{} items have an unrecognized status", unknown),
                EventType::Error,
                LogLevel::Warn,
            );
        }
        self.log(
            format!(
                "Rendered {} cells for group {}, screen {}",
                count, group, screen
            ),
            EventType::Refresh,
            LogLevel::Debug,
        );
    }

    fn clear_grid(&mut self) {
        self.cells.clear();
        self.cursor = 0;
        self.rendered_at = None;
    }

    /// Toggles the acknowledgment of the cell at `index`.
    pub fn interact(&mut self, index: usize, audio: &dyn AudioCue) -> Transition {
        let session = self.session;
        let Some(cell) = self.cells.get_mut(index) else {
            return Transition::Ignored;
        };
        let transition = cell.interact(&session, audio);
        let name = cell.item.name.clone();
        match transition {
            Transition::Alarmed => self.pending_events.push(Event::operator(
                format!("Alarm raised on {}", name),
                EventType::Alarm,
            )),
            Transition::Cleared => self.pending_events.push(Event::operator(
                format!("Alarm cleared on {}", name),
                EventType::Success,
            )),
            Transition::Ignored => {}
        }
        transition
    }

    pub fn interact_at_cursor(&mut self, audio: &dyn AudioCue) -> Transition {
        self.interact(self.cursor, audio)
    }

    /// Moves the keyboard cursor by whole cells and rows, staying inside the grid.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        if self.cells.is_empty() {
            return;
        }
        let columns = GridLayout::compute(self.cells.len(), 0.0).columns as isize;
        let target = self.cursor as isize + dx + dy * columns;
        if (0..self.cells.len() as isize).contains(&target) {
            self.cursor = target as usize;
        }
    }

    // Surface state

    pub fn toggle_selection_surface(&mut self) {
        self.selection_visible = !self.selection_visible;
    }

    pub fn dismiss_prompt(&mut self) {
        self.prompt = None;
    }

    // Accessors

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn selector(&self, kind: SelectorKind) -> &Selector {
        match kind {
            SelectorKind::Group => &self.group,
            SelectorKind::Screen => &self.screen,
            SelectorKind::Size => &self.size,
        }
    }

    fn selector_mut(&mut self, kind: SelectorKind) -> &mut Selector {
        match kind {
            SelectorKind::Group => &mut self.group,
            SelectorKind::Screen => &mut self.screen,
            SelectorKind::Size => &mut self.size,
        }
    }

    pub fn page_selection(&self) -> Option<PageSelection> {
        Some(PageSelection {
            group: self.group.selected()?,
            screen: self.screen.selected()?,
            size: self.size.selected()?,
        })
    }

    pub fn focus(&self) -> SelectorKind {
        self.focus
    }

    pub fn session(&self) -> SessionMode {
        self.session
    }

    pub fn selection_visible(&self) -> bool {
        self.selection_visible
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Time since the grid was last rebuilt.
    pub fn since_render(&self) -> Duration {
        self.rendered_at
            .map(|at| at.elapsed())
            .unwrap_or_default()
    }

    /// Takes the activity events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending_events)
    }

    fn log(&mut self, msg: String, event_type: EventType, log_level: LogLevel) {
        self.pending_events
            .push(Event::controller_with_level(msg, event_type, log_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockAudioCue;
    use crate::board::ack::AckState;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(format!("svc-{i:03}"), Status::Healthy))
            .collect()
    }

    fn loaded(n: usize) -> DashboardController {
        let mut controller = DashboardController::new();
        let generation = controller.begin_refresh();
        assert!(controller.apply_snapshot(generation, items(n)));
        controller
    }

    fn silent_audio() -> MockAudioCue {
        let mut audio = MockAudioCue::new();
        audio.expect_play().return_const(());
        audio
    }

    #[test]
    fn snapshot_cascades_to_default_selection() {
        let controller = loaded(230);
        assert_eq!(controller.selector(SelectorKind::Group).options(), &[1, 2]);
        assert_eq!(controller.selector(SelectorKind::Screen).options(), &[1, 2, 3]);
        assert_eq!(
            controller.page_selection(),
            Some(PageSelection {
                group: 1,
                screen: 1,
                size: 50
            })
        );
        assert_eq!(controller.cells().len(), 50);
        assert!(!controller.session().is_fullscreen());
        assert!(controller.selection_visible());
    }

    #[test]
    fn group_change_recomputes_screens_and_sizes() {
        let mut controller = loaded(230);
        assert!(controller.select(SelectorKind::Group, 2));
        assert_eq!(controller.selector(SelectorKind::Screen).options(), &[1, 2]);
        assert!(controller.select(SelectorKind::Screen, 2));

        let sizes = controller.selector(SelectorKind::Size).options();
        assert_eq!(sizes.len(), 15);
        assert_eq!(sizes.last(), Some(&30));
        // 50 is not offered for a 30 item screen, so the largest size is chosen.
        assert_eq!(controller.selector(SelectorKind::Size).selected(), Some(30));
        assert_eq!(controller.cells().len(), 30);
        assert_eq!(controller.cells()[0].item.name, "svc-200");
    }

    #[test]
    fn empty_feed_leaves_placeholders_and_blocks_submit() {
        let mut controller = loaded(0);
        for kind in [SelectorKind::Group, SelectorKind::Screen, SelectorKind::Size] {
            assert!(controller.selector(kind).options().is_empty());
            assert_eq!(controller.selector(kind).current_label(), kind.placeholder());
        }
        assert!(controller.cells().is_empty());

        let mut surface = MockDisplaySurface::new();
        surface.expect_request_fullscreen().times(0);
        assert_eq!(
            controller.submit(&mut surface),
            Err(SubmitError::NoSizeSelected)
        );
        assert_eq!(
            controller.prompt(),
            Some("Please select all dropdowns before proceeding.")
        );
        assert!(!controller.session().is_fullscreen());
        assert!(controller.selection_visible());

        controller.dismiss_prompt();
        assert_eq!(controller.prompt(), None);
    }

    #[test]
    fn submit_enters_fullscreen_once() {
        let mut controller = loaded(120);
        let mut surface = MockDisplaySurface::new();
        surface.expect_request_fullscreen().times(1).return_const(());

        assert!(controller.submit(&mut surface).is_ok());
        assert!(controller.session().is_fullscreen());
        assert!(!controller.selection_visible());

        // A later size change re-renders without another fullscreen request.
        assert!(controller.select(SelectorKind::Size, 8));
        assert_eq!(controller.cells().len(), 8);
        assert!(controller.session().is_fullscreen());
        assert!(controller.submit(&mut surface).is_ok());
    }

    #[test]
    fn clicks_before_fullscreen_do_nothing() {
        let mut controller = loaded(10);
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(0);

        assert_eq!(controller.interact(0, &audio), Transition::Ignored);
        assert_eq!(controller.cells()[0].state(), AckState::Idle);
    }

    #[test]
    fn clicks_in_fullscreen_toggle_with_single_cue() {
        let mut controller = loaded(10);
        let mut surface = MockDisplaySurface::new();
        surface.expect_request_fullscreen().return_const(());
        controller.submit(&mut surface).unwrap();
        controller.drain_events();

        let mut audio = MockAudioCue::new();
        audio.expect_play().times(1).return_const(());
        assert_eq!(controller.interact(3, &audio), Transition::Alarmed);
        assert_eq!(controller.interact(3, &audio), Transition::Cleared);
        assert_eq!(controller.cells()[3].state(), AckState::Idle);
        assert_eq!(controller.interact(99, &audio), Transition::Ignored);

        let events = controller.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Alarm);
    }

    #[test]
    fn rerender_resets_acknowledgments() {
        let mut controller = loaded(10);
        let mut surface = MockDisplaySurface::new();
        surface.expect_request_fullscreen().return_const(());
        controller.submit(&mut surface).unwrap();
        controller.interact(0, &silent_audio());
        assert!(controller.cells()[0].is_acknowledged());

        controller.select(SelectorKind::Size, 4);
        assert!(!controller.cells()[0].is_acknowledged());
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut controller = DashboardController::new();
        let first = controller.begin_refresh();
        let second = controller.begin_refresh();

        assert!(controller.apply_snapshot(second, items(60)));
        assert!(!controller.apply_snapshot(first, items(500)));
        assert_eq!(controller.item_count(), 60);
    }

    #[test]
    fn refresh_keeps_a_still_valid_selection() {
        let mut controller = loaded(230);
        controller.select(SelectorKind::Group, 2);
        controller.select(SelectorKind::Screen, 2);
        controller.select(SelectorKind::Size, 10);

        let generation = controller.begin_refresh();
        controller.apply_snapshot(generation, items(240));
        assert_eq!(
            controller.page_selection(),
            Some(PageSelection {
                group: 2,
                screen: 2,
                size: 10
            })
        );

        // The feed shrinks below group 2: fall back to defaults.
        let generation = controller.begin_refresh();
        controller.apply_snapshot(generation, items(40));
        assert_eq!(
            controller.page_selection(),
            Some(PageSelection {
                group: 1,
                screen: 1,
                size: 40
            })
        );
    }

    #[test]
    fn placeholder_selection_clears_downstream() {
        let mut controller = loaded(100);
        // Step the group selector back onto its placeholder.
        controller.step_focused(-1);
        assert_eq!(controller.selector(SelectorKind::Group).selected(), None);
        assert!(controller.selector(SelectorKind::Screen).options().is_empty());
        assert!(controller.selector(SelectorKind::Size).options().is_empty());
        assert!(controller.cells().is_empty());
    }

    #[test]
    fn odd_screen_never_offers_its_full_count() {
        let controller = loaded(7);
        assert_eq!(controller.selector(SelectorKind::Size).options(), &[2, 4, 6]);
        assert_eq!(controller.cells().len(), 6);
    }

    #[test]
    fn cursor_moves_within_grid() {
        let mut controller = loaded(12);
        controller.select(SelectorKind::Size, 12);
        controller.move_cursor(1, 0);
        assert_eq!(controller.cursor(), 1);
        controller.move_cursor(0, 1);
        assert_eq!(controller.cursor(), 6);
        controller.move_cursor(0, 2);
        assert_eq!(controller.cursor(), 6);
        controller.move_cursor(-1, -1);
        assert_eq!(controller.cursor(), 0);
    }

    #[test]
    fn unknown_status_is_reported() {
        let mut controller = DashboardController::new();
        let generation = controller.begin_refresh();
        let mut feed = items(3);
        feed.push(Item::new("odd", Status::Unknown("Paused".into())));
        controller.apply_snapshot(generation, feed);

        let events = controller.drain_events();
        assert!(
            events
                .iter()
                .any(|e| e.msg.contains("unrecognized status") && e.log_level == LogLevel::Warn)
        );
    }
}
