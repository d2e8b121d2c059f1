use std::path::PathBuf;

/// Every request a front end can make of a [`Deck`](super::Deck).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PlayPause,
    Stop,
    Next,
    Prev,
    /// Jump to a playlist index.
    PlaySelected(usize),
    /// Absolute volume in percent.
    SetVolume(f64),
    /// Relative volume change in percent.
    NudgeVolume(f64),
    /// Absolute position in seconds.
    Seek(f64),
    /// Relative position change in seconds.
    SeekBy(f64),
    /// Replace the playlist with the contents of a folder.
    Load(PathBuf),
}
