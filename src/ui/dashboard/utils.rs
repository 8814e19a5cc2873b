//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::board::presenter::Tone;
use crate::events::Source;
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Feed => Color::Cyan,
        Source::Controller => Color::Gray,
        Source::Operator => Color::Yellow,
    }
}

/// Background color for a cell tone; `None` leaves the terminal default.
pub fn tone_color(tone: Option<Tone>) -> Option<Color> {
    match tone? {
        Tone::Affirmative => Some(Color::Green),
        Tone::Negative => Some(Color::Red),
        Tone::Attention => Some(Color::DarkGray),
    }
}

/// Whether an alarmed cell is in the highlighted half of its blink, `elapsed`
/// into the session.
pub fn blink_on(elapsed: Duration, phase: Duration) -> bool {
    let phase_ms = phase.as_millis().max(1);
    (elapsed.as_millis() / phase_ms) % 2 == 0
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Failed to fetch feed: request timed out".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Failed to fetch feed: network error".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_month_day_hour_minute() {
        assert_eq!(format_compact_timestamp("2026-10-19 14:03:59"), "10-19 14:03");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn tones_map_to_status_colors() {
        assert_eq!(tone_color(Some(Tone::Affirmative)), Some(Color::Green));
        assert_eq!(tone_color(Some(Tone::Negative)), Some(Color::Red));
        assert_eq!(tone_color(Some(Tone::Attention)), Some(Color::DarkGray));
        assert_eq!(tone_color(None), None);
    }

    #[test]
    fn blink_alternates_every_phase() {
        let phase = Duration::from_millis(500);
        assert!(blink_on(Duration::ZERO, phase));
        assert!(blink_on(Duration::from_millis(499), phase));
        assert!(!blink_on(Duration::from_millis(500), phase));
        assert!(!blink_on(Duration::from_millis(999), phase));
        assert!(blink_on(Duration::from_millis(1000), phase));
    }

    #[test]
    fn blink_depends_only_on_elapsed_time() {
        // Redraw frequency has no say: the same instant always gives the same phase.
        let phase = Duration::from_millis(500);
        let at = Duration::from_millis(1_250);
        assert_eq!(blink_on(at, phase), blink_on(at, phase));
        assert!(blink_on(at, phase));
    }

    #[test]
    fn reqwest_noise_is_shortened() {
        assert_eq!(
            clean_http_error_message("Failed to fetch feed: Reqwest error: operation timed out"),
            "Failed to fetch feed: request timed out"
        );
        assert_eq!(clean_http_error_message("Loaded 3 items"), "Loaded 3 items");
    }
}
