//! The ordered track list and its active index.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DisplayName, LibrarySettings};
use crate::error::LibraryError;

use super::model::Track;
use super::picker::{DirectoryPicker, PickOutcome};
use super::scan::{DirectoryListing, WalkDirListing, is_supported, normalize_extensions};

pub struct PlaylistManager {
    tracks: Vec<Track>,
    current_index: usize,
    directory: Option<PathBuf>,
    extensions: Vec<String>,
    display: DisplayName,
    listing: Box<dyn DirectoryListing>,
}

impl PlaylistManager {
    pub fn new(listing: Box<dyn DirectoryListing>, settings: &LibrarySettings) -> Self {
        Self {
            tracks: Vec::new(),
            current_index: 0,
            directory: None,
            extensions: normalize_extensions(&settings.extensions),
            display: settings.display,
            listing,
        }
    }

    /// A manager reading the real filesystem with `settings`.
    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self::new(Box::new(WalkDirListing::from_settings(settings)), settings)
    }

    /// Replace the playlist with the supported files of `dir`.
    ///
    /// The old list and index survive untouched if the folder can't be read.
    /// A readable folder without audio files yields `Ok(0)`.
    pub fn load(&mut self, dir: &Path) -> Result<usize, LibraryError> {
        let files = self.listing.list(dir)?;

        let tracks: Vec<Track> = files
            .into_iter()
            .filter(|p| is_supported(p, &self.extensions))
            .map(|p| Track::new(p, self.display))
            .collect();

        self.tracks = tracks;
        self.current_index = 0;
        self.directory = Some(dir.to_path_buf());

        info!("loaded {} tracks from {}", self.tracks.len(), dir.display());
        Ok(self.tracks.len())
    }

    /// Let `picker` choose a folder, then [`load`](Self::load) it.
    pub fn pick_via_dialog(
        &mut self,
        picker: &mut dyn DirectoryPicker,
    ) -> Result<PickOutcome, LibraryError> {
        let initial = self
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        match picker.choose(&initial) {
            Some(dir) => self.load(&dir).map(PickOutcome::Loaded),
            None => {
                debug!("folder picker cancelled");
                Ok(PickOutcome::Cancelled)
            }
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Active index. Always valid when the playlist is non-empty, 0 otherwise.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The track at the active index.
    pub fn queued(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    /// Folder of the last successful load.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Step forward with wraparound and return the new active track.
    pub fn advance(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + 1) % len;
        self.tracks.get(self.current_index)
    }

    /// Step backward with wraparound and return the new active track.
    pub fn retreat(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + len - 1) % len;
        self.tracks.get(self.current_index)
    }

    /// Jump to `index`; out-of-range indices leave the cursor alone.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current_index = index;
        self.tracks.get(index)
    }
}
