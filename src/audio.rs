//! Audible alarm cue.

use std::io::Write;

#[cfg(test)]
use mockall::automock;

/// A one-shot sound played when a cell is alarmed. Playback is fire-and-forget:
/// implementations must swallow their own failures.
#[cfg_attr(test, automock)]
pub trait AudioCue {
    fn play(&self);
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play(&self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            log::debug!("terminal bell failed: {}", e);
        }
    }
}
