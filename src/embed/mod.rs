//! Pre-rendered visualization artifacts.
//!
//! Fragments and images are produced upstream and embedded as they are. A
//! read failure only affects the artifact itself: callers get a `Missing`
//! value and carry on composing the page.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum Embed {
    Fragment {
        path: String,
        html: Arc<str>,
        height: u32,
    },
    Missing {
        path: String,
        reason: String,
    },
}

impl Embed {
    pub fn is_missing(&self) -> bool {
        matches!(self, Embed::Missing { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            Embed::Fragment { path, .. } => path,
            Embed::Missing { path, .. } => path,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageEmbed {
    Found { path: String },
    Missing { path: String },
}

/// A loaded image artifact with its sniffed content type.
#[derive(Debug)]
pub struct ImageFile {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct Embedder {
    root: PathBuf,
}

impl Embedder {
    pub fn new<P: Into<PathBuf>>(root: P) -> Embedder {
        Embedder { root: root.into() }
    }

    /// Resolves a path relative to the visualizations root, rejecting any
    /// path that could escape it.
    pub fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_path);
        if relative_path.is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }

    pub fn read_html(&self, relative_path: &str, height: u32) -> Embed {
        let missing = |reason: String| {
            warn!("Could not load visualization {}: {}", relative_path, reason);
            Embed::Missing {
                path: relative_path.to_owned(),
                reason,
            }
        };

        let Some(path) = self.resolve(relative_path) else {
            return missing("invalid path".to_owned());
        };
        match std::fs::read_to_string(&path) {
            Ok(html) => {
                debug!("Read visualization {:?} ({} bytes)", path, html.len());
                Embed::Fragment {
                    path: relative_path.to_owned(),
                    html: html.into(),
                    height,
                }
            }
            Err(err) => missing(err.to_string()),
        }
    }

    pub fn read_image(&self, relative_path: &str) -> Option<ImageFile> {
        let path = self.resolve(relative_path)?;
        let bytes = std::fs::read(&path).ok()?;
        let kind = infer::get(&bytes)?;
        if kind.matcher_type() != infer::MatcherType::Image {
            debug!("{:?} is {}, not an image", path, kind.mime_type());
            return None;
        }
        Some(ImageFile {
            mime_type: kind.mime_type(),
            bytes,
        })
    }

    pub fn sniff_image(&self, relative_path: &str) -> ImageEmbed {
        match self.read_image(relative_path) {
            Some(_) => ImageEmbed::Found {
                path: relative_path.to_owned(),
            },
            None => {
                warn!("Image not found: {}", relative_path);
                ImageEmbed::Missing {
                    path: relative_path.to_owned(),
                }
            }
        }
    }
}
