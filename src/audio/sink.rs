//! `rodio`-backed [`AudioOutput`].
//!
//! One output stream for the process, one `Sink` per loaded file. The volume
//! is remembered so every fresh sink starts at the current level.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::error::AudioError;

use super::output::AudioOutput;

pub struct RodioOutput {
    stream: OutputStream,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which tears through the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            volume: 1.0,
        })
    }
}

/// Create a paused `Sink` for the file at `path`.
fn create_sink(stream: &OutputStream, path: &Path) -> Result<Sink, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

impl AudioOutput for RodioOutput {
    fn load(&mut self, path: &Path) -> Result<(), AudioError> {
        self.stop();
        let sink = create_sink(&self.stream, path)?;
        sink.set_volume(self.volume);
        self.sink = Some(sink);
        debug!("loaded {}", path.display());
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let sink = self.sink.as_ref().ok_or(AudioError::NothingLoaded)?;
        sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        let sink = self.sink.as_ref().ok_or(AudioError::NothingLoaded)?;
        sink.try_seek(position)
            .map_err(|e| AudioError::Seek(e.to_string()))
    }

    fn elapsed(&self) -> Duration {
        self.sink
            .as_ref()
            .map_or(Duration::ZERO, |s| s.get_pos())
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.empty())
    }
}
