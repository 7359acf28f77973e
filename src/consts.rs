pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // LAYOUT CONFIGURATION
    // =============================================================================

    /// Viewport layout thresholds
    pub mod viewport {
        /// Widths below this many pixel equivalents use the compact layout
        /// (navigation collapses into a drawer).
        pub const COMPACT_THRESHOLD_PX: u32 = 1024;

        /// Pixel equivalents per terminal column.
        pub const PX_PER_COLUMN: u32 = 8;

        /// Width of the navigation sidebar, in columns.
        pub const SIDEBAR_WIDTH: u16 = 24;

        /// Convert a terminal width in columns to pixel equivalents.
        pub const fn columns_to_px(columns: u16) -> u32 {
            columns as u32 * PX_PER_COLUMN
        }
    }

    // =============================================================================
    // WEATHER CONFIGURATION
    // =============================================================================

    /// Forecast request configuration
    pub mod weather {
        /// Number of hourly points plotted in the temperature chart.
        pub const HOURLY_WINDOW: usize = 24;

        /// Variables requested for the current conditions block.
        pub const CURRENT_FIELDS: &str = "temperature_2m,weather_code";

        /// Variables requested for the hourly block.
        pub const HOURLY_FIELDS: &str = "temperature_2m";

        /// Timestamp format used by the forecast API for local times.
        pub const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

        /// Local date and time as shown on the conditions card.
        pub const DISPLAY_TIME_FORMAT: &str = "%A, %B %-d, %Y %I:%M %p";
    }

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// Event loop timing
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the login screen.
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Poll interval for terminal input in the UI loop.
        pub const POLL_INTERVAL_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
