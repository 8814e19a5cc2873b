//! Dashboard state update logic
//!
//! Contains the methods that move feed results and controller events into the
//! dashboard state

use super::state::{DashboardState, FetchingState};
use crate::events::EventType;
use crate::runtime::FeedUpdate;

use std::time::Instant;

impl DashboardState {
    /// Collect controller activity into the activity log.
    pub fn update(&mut self) {
        self.collect_controller_events();
    }

    /// Marks a fetch as started and returns the generation to tag it with.
    pub fn begin_refresh(&mut self) -> u64 {
        self.set_fetching_state(FetchingState::Active {
            started_at: Instant::now(),
        });
        self.controller.begin_refresh()
    }

    /// Apply a finished fetch. A superseded generation leaves nothing behind but
    /// the controller's debug line: its items and outcome event are dropped.
    pub fn apply_feed_update(&mut self, update: FeedUpdate) {
        let FeedUpdate {
            generation,
            items,
            event,
        } = update;
        if !self.controller.apply_snapshot(generation, items) {
            self.collect_controller_events();
            return;
        }
        if event.event_type == EventType::Error {
            log::warn!("{}", event.msg);
        }
        self.add_to_activity_log(event);
        self.set_fetching_state(FetchingState::Idle);
        self.collect_controller_events();
    }

    fn collect_controller_events(&mut self) {
        for event in self.controller.drain_events() {
            self.add_to_activity_log(event);
        }
    }
}
