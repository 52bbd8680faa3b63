use std::fmt;

use crate::cache::DashboardCache;
use crate::embed::{Embed, ImageEmbed};
use crate::page::{ALL_VISUALIZATIONS, TAG_WORDCLOUD_PATH};
use crate::summary::PlatformStatsOutcome;

#[derive(Debug, PartialEq)]
pub enum AssetProblem {
    PlatformStatsFallback(String),
    NoData(String),
    MissingFragment { path: String, reason: String },
    MissingImage(String),
}

impl fmt::Display for AssetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetProblem::PlatformStatsFallback(reason) => {
                write!(f, "platform stats use default values: {}", reason)
            }
            AssetProblem::NoData(message) => write!(f, "{}", message),
            AssetProblem::MissingFragment { path, reason } => {
                write!(f, "visualization {} unavailable: {}", path, reason)
            }
            AssetProblem::MissingImage(path) => write!(f, "image {} unavailable", path),
        }
    }
}

/// Loads every dataset and every visualization the pages reference.
pub fn check_assets(cache: &DashboardCache) -> Vec<AssetProblem> {
    let mut problems = Vec::new();

    if let PlatformStatsOutcome::Fallback { reason, .. } = cache.platform_stats() {
        problems.push(AssetProblem::PlatformStatsFallback(reason.clone()));
    }

    if let Some(message) = cache.bundle().error_message() {
        problems.push(AssetProblem::NoData(message));
    }

    for viz in ALL_VISUALIZATIONS.iter() {
        if let Embed::Missing { path, reason } = cache.fragment(viz.path, viz.height) {
            problems.push(AssetProblem::MissingFragment { path, reason });
        }
    }

    if let ImageEmbed::Missing { path } = cache.image(TAG_WORDCLOUD_PATH) {
        problems.push(AssetProblem::MissingImage(path));
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AssetsLayout;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_assets_report_every_artifact() {
        let dir = TempDir::new().unwrap();
        let cache = DashboardCache::new(AssetsLayout::new(dir.path()));

        let problems = check_assets(&cache);

        assert!(matches!(
            problems[0],
            AssetProblem::PlatformStatsFallback(_)
        ));
        assert!(matches!(problems[1], AssetProblem::NoData(_)));
        let missing_fragments = problems
            .iter()
            .filter(|p| matches!(p, AssetProblem::MissingFragment { .. }))
            .count();
        assert_eq!(missing_fragments, ALL_VISUALIZATIONS.len());
        assert_eq!(
            problems.last(),
            Some(&AssetProblem::MissingImage(TAG_WORDCLOUD_PATH.to_owned()))
        );
    }

    #[test]
    fn present_fragments_are_not_reported() {
        let dir = TempDir::new().unwrap();
        let layout = AssetsLayout::new(dir.path());
        let viz = &ALL_VISUALIZATIONS[0];
        let file = layout.visualizations_dir().join(viz.path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "<div>ok</div>").unwrap();
        let cache = DashboardCache::new(layout);

        let problems = check_assets(&cache);

        assert!(!problems.iter().any(|p| matches!(
            p,
            AssetProblem::MissingFragment { path, .. } if path == viz.path
        )));
        assert_eq!(cache.cached_fragments_count(), 1);
    }
}
