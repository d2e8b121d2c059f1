//! Seams to the audio facility.
//!
//! The core never decodes anything itself. It drives an [`AudioOutput`] and
//! asks a [`DurationProbe`] how long a file is.

use std::path::Path;
use std::time::Duration;

use crate::error::AudioError;

/// A single playback channel.
///
/// `load` replaces whatever was loaded before and leaves the new file paused
/// at offset zero. `load` after `stop` must work.
pub trait AudioOutput {
    fn load(&mut self, path: &Path) -> Result<(), AudioError>;
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
    /// `volume` is already clamped to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError>;
    fn seek(&mut self, position: Duration) -> Result<(), AudioError>;
    /// Playback position of the loaded file; zero when nothing is loaded.
    fn elapsed(&self) -> Duration;
    /// The loaded file has played to its end.
    fn is_finished(&self) -> bool;
}

/// Reads a file's length without touching the playing stream.
pub trait DurationProbe {
    fn duration_of(&self, path: &Path) -> Result<Duration, AudioError>;
}
