//! Shared constants for end-to-end tests
//!
//! When the fixture data changes, update only this file.

// ============================================================================
// Platform Statistics
// ============================================================================

pub const TOTAL_RATINGS: &str = "33.8M";

pub const TOTAL_USERS: &str = "331K";

pub const TOTAL_MOVIES: &str = "86K";

pub const AVG_RATING: &str = "3.53";

/// Average rating as shown on the pages
pub const AVG_RATING_DISPLAY: &str = "3.53★";

// ============================================================================
// Hidden Gems
// ============================================================================

/// Rows in the default hidden gems fixture
pub const HIDDEN_GEMS_ROWS: usize = 194;

/// Rows shown in the hidden gems table
pub const HIDDEN_GEMS_SHOWN: usize = 50;

/// Genre of the first rows of the fixture, shown in the table
pub const LEADING_GENRE: &str = "Drama";

/// Genre of every row after the first 50, the most frequent overall
pub const TRAILING_GENRE: &str = "Documentary";

// ============================================================================
// Export File Names
// ============================================================================

pub const EXPORT_FILE_NAMES: [&str; 6] = [
    "platform_stats.csv",
    "user_segments.csv",
    "yearly_trends.csv",
    "genre_stats.csv",
    "hidden_gems.csv",
    "top_movies.csv",
];

// ============================================================================
// Timeouts
// ============================================================================

/// Max time to wait for the server to come up
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
