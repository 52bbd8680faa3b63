mod hidden_gems;
mod load;
mod platform_stats;
mod table;

pub use hidden_gems::{HiddenGem, HiddenGemsSummary, HIDDEN_GEMS_DISPLAY_LIMIT};
pub use load::{load_bundle, load_platform_stats, BundleOutcome, SummaryBundle};
pub use platform_stats::{PlatformStats, PlatformStatsOutcome};
pub use table::Table;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a summary table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    Missing(PathBuf),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("no header row")]
    NoHeader,

    #[error("unexpected schema: {0}")]
    Schema(String),
}

/// The summary datasets produced by the analytics pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    PlatformStats,
    UserSegments,
    YearlyTrends,
    GenreStats,
    HiddenGems,
    TopMovies,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::PlatformStats,
        Dataset::UserSegments,
        Dataset::YearlyTrends,
        Dataset::GenreStats,
        Dataset::HiddenGems,
        Dataset::TopMovies,
    ];

    /// Datasets that make up the insights page bundle.
    pub const SECONDARY: [Dataset; 5] = [
        Dataset::UserSegments,
        Dataset::YearlyTrends,
        Dataset::GenreStats,
        Dataset::HiddenGems,
        Dataset::TopMovies,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::PlatformStats => "platform_stats",
            Dataset::UserSegments => "user_segments",
            Dataset::YearlyTrends => "yearly_trends",
            Dataset::GenreStats => "genre_stats",
            Dataset::HiddenGems => "hidden_gems",
            Dataset::TopMovies => "top_movies",
        }
    }

    /// File name of the source table, also used for downloads.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name())
    }

    pub fn from_file_name(file_name: &str) -> Option<Dataset> {
        let name = file_name.strip_suffix(".csv")?;
        Dataset::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
