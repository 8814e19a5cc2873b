pub mod wallboard_consts {
    //! Wallboard Configuration Constants
    //!
    //! This module contains the fixed constants for pagination, grid layout and
    //! presentation, organized by functional area.

    // =============================================================================
    // PAGINATION
    // =============================================================================

    /// Number of feed items in one group, the coarsest pagination tier.
    pub const GROUP_SIZE: usize = 150;

    /// Number of items in one screen of a group.
    pub const SCREEN_SIZE: usize = 50;

    /// Upper bound on the number of cells rendered at once.
    pub const MAX_GRID_CELLS: usize = 50;

    /// Size selected by default after the size selector is rebuilt.
    pub const DEFAULT_GRID_SIZE: usize = 50;

    // =============================================================================
    // GRID LAYOUT
    // =============================================================================

    /// Maximum number of columns per grid row.
    pub const MAX_COLUMNS: usize = 5;

    /// Vertical space reserved for page chrome when sizing cells (pixels).
    pub const CHROME_RESERVE_PX: f64 = 100.0;

    /// Viewport height assumed by the headless summary when none is given (pixels).
    pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 1080.0;

    // =============================================================================
    // PRESENTATION
    // =============================================================================

    /// Reveal delay between consecutive error messages of one cell (seconds).
    pub const ERROR_MESSAGE_STAGGER_SECS: u64 = 12;

    /// Length of each on/off phase of an alarmed cell's blink (milliseconds).
    pub const BLINK_PHASE_MS: u64 = 500;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying feed results back to the UI loop.
    pub const FEED_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Feed request timeout configuration
    pub mod feed {
        use std::time::Duration;

        /// Connection timeout for feed requests (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Total request timeout for feed requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
