//! Terminal output for the non-interactive commands (`set-feed`, `reset`, `summary`)
//!
//! Everything goes to stdout as one tagged line per notice, so the output of
//! `summary` can be piped and grepped.

/// Kind of notice, which picks the tag and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Warn,
    Error,
    Success,
}

impl Notice {
    fn tag(self) -> &'static str {
        match self {
            Notice::Info => "INFO",
            Notice::Warn => "WARN",
            Notice::Error => "ERROR",
            Notice::Success => "SUCCESS",
        }
    }

    /// ANSI color, matching the dashboard's status palette.
    fn color(self) -> &'static str {
        match self {
            Notice::Info => "\x1b[1;36m",
            Notice::Warn => "\x1b[1;33m",
            Notice::Error => "\x1b[1;31m",
            Notice::Success => "\x1b[1;32m",
        }
    }
}

/// Formats a notice line. Empty details leave only the title.
pub fn format_notice(notice: Notice, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", notice.color(), notice.tag(), title);
    if !details.is_empty() {
        line.push_str(": ");
        line.push_str(details);
    }
    line
}

pub fn print_notice(notice: Notice, title: &str, details: &str) {
    println!("{}", format_notice(notice, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_notice(
            $crate::cli_messages::Notice::Info,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_notice(
            $crate::cli_messages::Notice::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Errors may come without details.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_notice($crate::cli_messages::Notice::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_notice($crate::cli_messages::Notice::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_notice(
            $crate::cli_messages::Notice::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_carries_tag_title_and_details() {
        let line = format_notice(Notice::Warn, "Empty feed", "No items to display");
        assert!(line.contains("[WARN]"));
        assert!(line.ends_with("Empty feed: No items to display"));
    }

    #[test]
    fn empty_details_leave_the_title() {
        let line = format_notice(Notice::Error, "No feed configured", "");
        assert!(line.ends_with("No feed configured"));
        assert!(!line.contains(": "));
    }
}
