use std::path::{Path, PathBuf};

/// Asks the user for a music folder.
///
/// Returning `None` means the user cancelled; it is not an error.
pub trait DirectoryPicker {
    fn choose(&mut self, initial_dir: &Path) -> Option<PathBuf>;
}

/// Result of [`PlaylistManager::pick_via_dialog`](super::PlaylistManager::pick_via_dialog).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A folder was chosen and loaded; holds the new track count.
    Loaded(usize),
    /// The picker was dismissed; the playlist is untouched.
    Cancelled,
}
