//! The play/pause/stop state machine.

use std::time::Duration;

use tracing::{debug, warn};

use crate::audio::AudioOutput;
use crate::error::{AudioError, PlaybackError};
use crate::library::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TransportState {
    /// Nothing has been loaded since startup.
    #[default]
    Idle,
    /// A track has been handed to the output but has not started yet.
    Loaded,
    Playing,
    Paused,
    Stopped,
}

impl TransportState {
    /// A file is open in the output, sounding or not.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Sole owner of the transport state and the output handle.
pub struct TransportController<O> {
    output: O,
    state: TransportState,
    current: Option<Track>,
}

impl<O: AudioOutput> TransportController<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            state: TransportState::Idle,
            current: None,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Halt whatever sounds and adopt `track` without starting it.
    pub fn cue(&mut self, track: Option<Track>) {
        self.output.stop();
        self.current = track;
        self.set_state(TransportState::Stopped);
    }

    /// Toggle between sounding and paused, starting `queued` if nothing is adopted yet.
    pub fn play_pause(&mut self, queued: Option<&Track>) -> Result<(), PlaybackError> {
        if self.current.is_none() {
            match queued {
                Some(t) => self.current = Some(t.clone()),
                None => return Ok(()),
            }
        }

        match self.state {
            TransportState::Playing => {
                self.output.pause();
                self.set_state(TransportState::Paused);
                Ok(())
            }
            TransportState::Paused => {
                self.output.unpause();
                self.set_state(TransportState::Playing);
                Ok(())
            }
            TransportState::Idle | TransportState::Stopped | TransportState::Loaded => self.start(),
        }
    }

    pub fn stop(&mut self) {
        self.output.stop();
        self.current = None;
        self.set_state(TransportState::Stopped);
    }

    /// Fully stop, adopt `track` and play it from the start.
    pub fn switch_to(&mut self, track: Track) -> Result<(), PlaybackError> {
        self.output.stop();
        self.set_state(TransportState::Stopped);
        self.current = Some(track);
        self.start()
    }

    pub fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.output.seek(position)
    }

    pub fn apply_volume(&mut self, level: f32) -> Result<(), AudioError> {
        self.output.set_volume(level)
    }

    /// Load the adopted track from offset 0 and start it.
    ///
    /// On any output failure the machine ends `Stopped` with no track.
    fn start(&mut self) -> Result<(), PlaybackError> {
        let Some(track) = self.current.clone() else {
            return Ok(());
        };

        self.set_state(TransportState::Loaded);
        let started = self
            .output
            .load(&track.path)
            .and_then(|()| self.output.play());

        match started {
            Ok(()) => {
                self.set_state(TransportState::Playing);
                Ok(())
            }
            Err(source) => {
                warn!("cannot start {}: {source}", track.path.display());
                self.output.stop();
                self.current = None;
                self.set_state(TransportState::Stopped);
                Err(PlaybackError::LoadFailed {
                    path: track.path,
                    source,
                })
            }
        }
    }

    fn set_state(&mut self, next: TransportState) {
        if self.state != next {
            debug!("transport {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
