use std::path::PathBuf;

use crate::config::DisplayName;

use super::display::display_name;

/// One playable file in the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub display: String,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>, style: DisplayName) -> Self {
        let path = path.into();
        let display = display_name(&path, style);
        Self { path, display }
    }
}
