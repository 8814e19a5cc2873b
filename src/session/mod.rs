pub mod messages;
pub mod setup;
pub mod summary_mode;
pub mod tui_mode;

pub use setup::{SessionData, setup_session};
pub use summary_mode::run_summary_mode;
pub use tui_mode::run_tui_mode;
