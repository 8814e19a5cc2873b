//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::board::DashboardController;
use crate::consts::wallboard_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// State for tracking feed fetches
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
}

/// Dashboard state: the controller plus what only the terminal view needs.
#[derive(Debug)]
pub struct DashboardState {
    /// Selection, grid and acknowledgment logic.
    pub controller: DashboardController,
    /// Feed location shown in the header.
    pub feed: String,
    /// The start time of the application; the blink phase is measured from it.
    pub start_time: Instant,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Current fetching state
    fetching_state: FetchingState,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            controller: DashboardController::new(),
            feed: ui_config.feed,
            start_time,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            fetching_state: FetchingState::Idle,
        }
    }

    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
