use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{OnceLock, RwLock};

use crate::embed::{Embed, Embedder, ImageEmbed};
use crate::summary::{load_bundle, load_platform_stats, BundleOutcome, PlatformStatsOutcome};

/// Directory layout of the pipeline artifacts.
#[derive(Clone, Debug)]
pub struct AssetsLayout {
    pub root: PathBuf,
}

impl AssetsLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> AssetsLayout {
        AssetsLayout { root: root.into() }
    }

    pub fn summary_dir(&self) -> PathBuf {
        self.root.join("data").join("summary")
    }

    pub fn visualizations_dir(&self) -> PathBuf {
        self.root.join("visualizations")
    }
}

/// Process-wide cache of everything read from the assets directory.
///
/// Each entry is loaded on first use and never changes afterwards. Only
/// successfully read fragments are kept, so a missing one is retried on the
/// next render.
pub struct DashboardCache {
    layout: AssetsLayout,
    embedder: Embedder,
    platform_stats: OnceLock<PlatformStatsOutcome>,
    bundle: OnceLock<BundleOutcome>,
    fragments: RwLock<HashMap<String, Embed>>,
}

impl DashboardCache {
    pub fn new(layout: AssetsLayout) -> DashboardCache {
        let embedder = Embedder::new(layout.visualizations_dir());
        DashboardCache {
            layout,
            embedder,
            platform_stats: OnceLock::new(),
            bundle: OnceLock::new(),
            fragments: RwLock::new(HashMap::new()),
        }
    }

    pub fn embedder(&self) -> &Embedder {
        &self.embedder
    }

    pub fn platform_stats(&self) -> &PlatformStatsOutcome {
        self.platform_stats
            .get_or_init(|| load_platform_stats(&self.layout.summary_dir()))
    }

    pub fn bundle(&self) -> &BundleOutcome {
        self.bundle
            .get_or_init(|| load_bundle(&self.layout.summary_dir()))
    }

    pub fn fragment(&self, relative_path: &str, height: u32) -> Embed {
        if let Some(cached) = self.cached_fragment(relative_path) {
            return match cached {
                Embed::Fragment { path, html, .. } => Embed::Fragment { path, html, height },
                missing => missing,
            };
        }

        let embed = self.embedder.read_html(relative_path, height);
        if !embed.is_missing() {
            if let Ok(mut fragments) = self.fragments.write() {
                fragments.insert(relative_path.to_owned(), embed.clone());
            }
        }
        embed
    }

    pub fn image(&self, relative_path: &str) -> ImageEmbed {
        self.embedder.sniff_image(relative_path)
    }

    pub fn cached_fragments_count(&self) -> usize {
        self.fragments.read().map(|f| f.len()).unwrap_or(0)
    }

    fn cached_fragment(&self, relative_path: &str) -> Option<Embed> {
        self.fragments.read().ok()?.get(relative_path).cloned()
    }
}
