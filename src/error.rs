//! Error types for the playback core.
//!
//! Only genuine failures live here. An empty folder and a cancelled folder
//! prompt are ordinary outcomes and are reported through return values.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a music directory.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// Failures reported by an [`AudioOutput`](crate::audio::AudioOutput).
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("audio device unavailable: {0}")]
    Device(String),

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("seek failed: {0}")]
    Seek(String),

    #[error("nothing is loaded")]
    NothingLoaded,
}

/// The output rejected a track. The transport has already fallen back to
/// `Stopped` by the time the caller sees this.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("failed to start {}: {source}", path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: AudioError,
    },
}

impl PlaybackError {
    /// Path of the track that failed to start.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::LoadFailed { path, .. } => path,
        }
    }
}

/// Anything a dispatched [`Command`](crate::player::Command) can fail with.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Output(#[from] AudioError),
}
