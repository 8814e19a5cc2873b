//! Status to visual encoding, including staggered error messages.

use super::item::{Item, Status};
use crate::consts::wallboard_consts::ERROR_MESSAGE_STAGGER_SECS;
use std::time::Duration;

/// Colour family a cell is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Healthy items.
    Affirmative,
    /// Unhealthy items.
    Negative,
    /// Items reporting errors.
    Attention,
}

/// One error fragment and when it first comes into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggeredMessage {
    pub text: String,
    pub delay: Duration,
}

/// How a single cell should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// `None` leaves the cell unpainted (unrecognized statuses).
    pub tone: Option<Tone>,
    pub messages: Vec<StaggeredMessage>,
}

impl Presentation {
    /// Message in view `elapsed` after the grid was drawn.
    ///
    /// Each fragment owns a window of the stagger length starting at its delay;
    /// after the last window the rotation starts again at the first fragment.
    pub fn visible_message(&self, elapsed: Duration) -> Option<&StaggeredMessage> {
        if self.messages.is_empty() {
            return None;
        }
        let cycle = ERROR_MESSAGE_STAGGER_SECS * self.messages.len() as u64;
        let index = (elapsed.as_secs() % cycle) / ERROR_MESSAGE_STAGGER_SECS;
        self.messages.get(index as usize)
    }
}

/// Maps an item to its visual encoding.
pub fn present(item: &Item) -> Presentation {
    match &item.status {
        Status::Healthy => Presentation {
            tone: Some(Tone::Affirmative),
            messages: Vec::new(),
        },
        Status::Unhealthy => Presentation {
            tone: Some(Tone::Negative),
            messages: Vec::new(),
        },
        Status::Error => Presentation {
            tone: Some(Tone::Attention),
            messages: error_messages(item.error_detail.as_deref().unwrap_or_default()),
        },
        Status::Unknown(_) => Presentation {
            tone: None,
            messages: Vec::new(),
        },
    }
}

/// Splits a comma separated error detail into staggered, trimmed fragments.
///
/// A missing or empty detail gives no fragments at all, not one empty fragment.
/// Empty fragments between commas are kept and hold their slot.
fn error_messages(detail: &str) -> Vec<StaggeredMessage> {
    if detail.is_empty() {
        return Vec::new();
    }
    detail
        .split(',')
        .enumerate()
        .map(|(index, msg)| StaggeredMessage {
            text: msg.trim().to_string(),
            delay: Duration::from_secs(index as u64 * ERROR_MESSAGE_STAGGER_SECS),
        })
        .collect()
}
