use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::LibraryError;

/// Lists the files of a music folder.
///
/// Implementations return every regular file they find, in listing order;
/// extension filtering happens in the playlist.
pub trait DirectoryListing {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, LibraryError>;
}

/// Filesystem listing backed by `walkdir`.
#[derive(Debug, Clone)]
pub struct WalkDirListing {
    follow_links: bool,
    include_hidden: bool,
    recursive: bool,
    max_depth: Option<usize>,
}

impl WalkDirListing {
    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self {
            follow_links: settings.follow_links,
            include_hidden: settings.include_hidden,
            recursive: settings.recursive,
            max_depth: settings.max_depth,
        }
    }
}

impl Default for WalkDirListing {
    fn default() -> Self {
        Self::from_settings(&LibrarySettings::default())
    }
}

impl DirectoryListing for WalkDirListing {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
        let meta = fs::metadata(dir).map_err(|source| LibraryError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(LibraryError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(dir).min_depth(1).follow_links(self.follow_links);

        // Non-recursive = only the folder's immediate children.
        let depth_cap = if self.recursive {
            self.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        let mut files = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|e| self.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = match entry {
                Ok(e) => e,
                Err(err) if err.depth() == 0 => {
                    return Err(LibraryError::DirectoryUnreadable {
                        path: dir.to_path_buf(),
                        source: io::Error::from(err),
                    });
                }
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        debug!("listed {} files under {}", files.len(), dir.display());
        Ok(files)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Normalize configured extensions: trimmed, lowercase, no leading dot.
pub fn normalize_extensions(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Case-insensitive extension check against an already normalized list.
pub fn is_supported(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}
