use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::media::item::PlayableItem;
use crate::media::mime::{classify, is_video};

/// Reasons a catalog scan can fail as a whole.
///
/// Problems with a single entry never fail the scan; they are logged and the
/// entry is skipped.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot read directory {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("watched directory no longer exists: {0}")]
    Vanished(PathBuf),
}

/// Scan `dir` one level deep and return every video in it.
///
/// A missing directory yields an empty list. Subdirectories are not
/// descended into, hidden entries are ignored, and the result is sorted by
/// file name so that repeated scans of an unchanged directory are identical.
pub fn list_videos(dir: &Path, base_url: &str) -> Result<Vec<PlayableItem>, DiscoveryError> {
    let start = Instant::now();

    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(DiscoveryError::NotADirectory(dir.to_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Watched directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DiscoveryError::Read {
                path: dir.to_owned(),
                source: e,
            })
        }
    }

    let mut items = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the directory itself: the listing failed, not one entry.
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(DiscoveryError::Read {
                    path: dir.to_owned(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Cannot access entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(title) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if title.starts_with('.') {
            continue;
        }

        match classify(entry.path()) {
            Some(content_type) if is_video(&content_type) => {
                items.push(PlayableItem::new(title, base_url));
            }
            _ => {}
        }
    }

    tracing::debug!(
        "Found {} videos in {} ({:.1}ms)",
        items.len(),
        dir.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(items)
}

/// The watched directory bound to the address it is published under.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    base_url: String,
    required: bool,
}

impl Catalog {
    /// Remembers whether `dir` exists right now. A directory that disappears
    /// later is reported as [`DiscoveryError::Vanished`] instead of an empty
    /// catalog.
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let dir = dir.into();
        let required = dir.is_dir();
        Self {
            dir,
            base_url: base_url.into(),
            required,
        }
    }

    pub fn list(&self) -> Result<Vec<PlayableItem>, DiscoveryError> {
        if self.required && !self.dir.exists() {
            return Err(DiscoveryError::Vanished(self.dir.clone()));
        }
        list_videos(&self.dir, &self.base_url)
    }
}
