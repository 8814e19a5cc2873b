//! Per-cell acknowledgment state machine.
//!
//! A cell toggles between `Idle` and `Alarmed` on operator interaction, but only
//! once the session has entered fullscreen mode. Entering `Alarmed` plays the
//! audio cue once and starts the blink; leaving it only stops the blink.

use super::item::Item;
use super::presenter::{Presentation, present};
use crate::audio::AudioCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    Idle,
    Alarmed,
}

/// Session-wide display mode. Fullscreen is entered once and never left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionMode {
    fullscreen: bool,
}

impl SessionMode {
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Marks the session fullscreen. Returns whether this call changed the mode.
    pub fn enter_fullscreen(&mut self) -> bool {
        let changed = !self.fullscreen;
        self.fullscreen = true;
        changed
    }
}

/// Outcome of one interaction with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not fullscreen yet; nothing happened.
    Ignored,
    /// `Idle -> Alarmed`.
    Alarmed,
    /// `Alarmed -> Idle`.
    Cleared,
}

/// A rendered grid cell.
#[derive(Debug, Clone)]
pub struct CellState {
    pub item: Item,
    pub presentation: Presentation,
    state: AckState,
}

impl CellState {
    pub fn new(item: Item) -> Self {
        let presentation = present(&item);
        Self {
            item,
            presentation,
            state: AckState::Idle,
        }
    }

    pub fn state(&self) -> AckState {
        self.state
    }

    /// Whether the cell is alarmed (blinking).
    pub fn is_acknowledged(&self) -> bool {
        self.state == AckState::Alarmed
    }

    pub fn interact(&mut self, session: &SessionMode, audio: &dyn AudioCue) -> Transition {
        if !session.is_fullscreen() {
            return Transition::Ignored;
        }
        match self.state {
            AckState::Idle => {
                audio.play();
                self.state = AckState::Alarmed;
                Transition::Alarmed
            }
            AckState::Alarmed => {
                self.state = AckState::Idle;
                Transition::Cleared
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockAudioCue;
    use crate::board::item::Status;

    fn cell() -> CellState {
        CellState::new(Item::new("web-01", Status::Unhealthy))
    }

    #[test]
    fn new_cells_start_idle() {
        assert_eq!(cell().state(), AckState::Idle);
        assert!(!cell().is_acknowledged());
    }

    #[test]
    fn interaction_outside_fullscreen_is_ignored() {
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(0);
        let session = SessionMode::default();

        let mut cell = cell();
        assert_eq!(cell.interact(&session, &audio), Transition::Ignored);
        assert_eq!(cell.interact(&session, &audio), Transition::Ignored);
        assert_eq!(cell.state(), AckState::Idle);
    }

    #[test]
    fn double_toggle_returns_to_idle_with_one_cue() {
        let mut audio = MockAudioCue::new();
        audio.expect_play().times(1).return_const(());
        let mut session = SessionMode::default();
        assert!(session.enter_fullscreen());

        let mut cell = cell();
        assert_eq!(cell.interact(&session, &audio), Transition::Alarmed);
        assert!(cell.is_acknowledged());
        assert_eq!(cell.interact(&session, &audio), Transition::Cleared);
        assert_eq!(cell.state(), AckState::Idle);
    }

    #[test]
    fn entering_fullscreen_is_idempotent() {
        let mut session = SessionMode::default();
        assert!(!session.is_fullscreen());
        assert!(session.enter_fullscreen());
        assert!(!session.enter_fullscreen());
        assert!(session.is_fullscreen());
    }
}
