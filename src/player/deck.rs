//! The explicit owner of playlist, transport, position and volume.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::{AudioOutput, DurationProbe};
use crate::config::Settings;
use crate::error::{AudioError, DeckError, LibraryError, PlaybackError};
use crate::library::{DirectoryPicker, PickOutcome, PlaylistManager, Track};

use super::command::Command;
use super::position::PositionTracker;
use super::transport::{TransportController, TransportState};
use super::volume::VolumeController;

/// Shown when no track is adopted.
pub const NOTHING_PLAYING: &str = "No song selected";

pub struct Deck<O, P> {
    playlist: PlaylistManager,
    transport: TransportController<O>,
    position: PositionTracker<P>,
    volume: VolumeController,
    auto_advance: bool,
}

impl<O: AudioOutput, P: DurationProbe> Deck<O, P> {
    /// Build a deck and apply `audio.initial_volume` to `output`.
    pub fn new(output: O, probe: P, playlist: PlaylistManager, settings: &Settings) -> Self {
        let mut deck = Self {
            playlist,
            transport: TransportController::new(output),
            position: PositionTracker::new(probe),
            volume: VolumeController::default(),
            auto_advance: settings.playback.auto_advance,
        };

        if let Err(e) = deck.set_volume(settings.audio.initial_volume) {
            warn!("initial volume not applied: {e}");
        }
        deck
    }

    // ---- playlist ----

    /// Replace the playlist with the supported files in `dir`.
    ///
    /// Playback stops and the first track (if any) is adopted. On error the
    /// playlist, the cursor and the transport are left as they were.
    pub fn load(&mut self, dir: &Path) -> Result<usize, LibraryError> {
        let count = self.playlist.load(dir)?;
        self.adopt_queued();
        Ok(count)
    }

    pub fn pick_via_dialog(
        &mut self,
        picker: &mut dyn DirectoryPicker,
    ) -> Result<PickOutcome, LibraryError> {
        let outcome = self.playlist.pick_via_dialog(picker)?;
        if let PickOutcome::Loaded(_) = outcome {
            self.adopt_queued();
        }
        Ok(outcome)
    }

    fn adopt_queued(&mut self) {
        self.transport.cue(self.playlist.queued().cloned());
        self.position.invalidate();
        self.position.sync(self.transport.current_track());
    }

    // ---- transport ----

    pub fn play_pause(&mut self) -> Result<(), PlaybackError> {
        let result = self.transport.play_pause(self.playlist.queued());
        self.position.sync(self.transport.current_track());
        result
    }

    pub fn stop(&mut self) {
        self.transport.stop();
        self.position.sync(None);
    }

    pub fn next(&mut self) -> Result<(), PlaybackError> {
        match self.playlist.advance().cloned() {
            Some(track) => self.switch_to(track),
            None => Ok(()),
        }
    }

    pub fn prev(&mut self) -> Result<(), PlaybackError> {
        match self.playlist.retreat().cloned() {
            Some(track) => self.switch_to(track),
            None => Ok(()),
        }
    }

    /// Jump to `index` and play it. Out-of-range indices change nothing.
    pub fn play_selected(&mut self, index: usize) -> Result<(), PlaybackError> {
        match self.playlist.select(index).cloned() {
            Some(track) => self.switch_to(track),
            None => {
                debug!("index {index} out of range");
                Ok(())
            }
        }
    }

    fn switch_to(&mut self, track: Track) -> Result<(), PlaybackError> {
        let result = self.transport.switch_to(track);
        self.position.sync(self.transport.current_track());
        result
    }

    /// Handle a track that has played to its end.
    ///
    /// Returns `true` when the end was observed and acted on.
    pub fn advance_if_finished(&mut self) -> Result<bool, PlaybackError> {
        if self.transport.state() != TransportState::Playing
            || !self.transport.output().is_finished()
        {
            return Ok(false);
        }

        if self.auto_advance {
            info!("track finished, advancing");
            self.next()?;
        } else {
            info!("track finished");
            self.stop();
        }
        Ok(true)
    }

    // ---- volume ----

    /// Set the volume in percent; out-of-range input is clamped.
    pub fn set_volume(&mut self, percent: f64) -> Result<f32, AudioError> {
        self.volume.set_volume(&mut self.transport, percent)
    }

    pub fn nudge_volume(&mut self, delta_percent: f64) -> Result<f32, AudioError> {
        self.volume.nudge(&mut self.transport, delta_percent)
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn volume_percent(&self) -> f64 {
        self.volume.percent()
    }

    // ---- position ----

    /// Seek to `seconds`, clamped to the track. A no-op unless playing or paused.
    pub fn set_position(&mut self, seconds: f64) -> Result<Option<Duration>, AudioError> {
        self.position.set_position(&mut self.transport, seconds)
    }

    pub fn seek_by(&mut self, delta_seconds: f64) -> Result<Option<Duration>, AudioError> {
        let from = self.get_position().as_secs_f64();
        self.set_position(from + delta_seconds)
    }

    pub fn get_position(&self) -> Duration {
        self.position.position(&self.transport)
    }

    pub fn get_duration(&self) -> Duration {
        self.position.duration()
    }

    // ---- read-only views ----

    pub fn tracks(&self) -> &[Track] {
        self.playlist.tracks()
    }

    pub fn current_index(&self) -> usize {
        self.playlist.current_index()
    }

    pub fn state(&self) -> TransportState {
        self.transport.state()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.transport.current_track()
    }

    pub fn directory(&self) -> Option<&Path> {
        self.playlist.directory()
    }

    pub fn now_playing(&self) -> &str {
        self.current_track()
            .map_or(NOTHING_PLAYING, |t| t.display.as_str())
    }

    pub fn output(&self) -> &O {
        self.transport.output()
    }

    pub fn dispatch(&mut self, cmd: Command) -> Result<(), DeckError> {
        debug!("dispatch {cmd:?}");
        match cmd {
            Command::PlayPause => self.play_pause()?,
            Command::Stop => self.stop(),
            Command::Next => self.next()?,
            Command::Prev => self.prev()?,
            Command::PlaySelected(i) => self.play_selected(i)?,
            Command::SetVolume(v) => {
                self.set_volume(v)?;
            }
            Command::NudgeVolume(d) => {
                self.nudge_volume(d)?;
            }
            Command::Seek(s) => {
                self.set_position(s)?;
            }
            Command::SeekBy(d) => {
                self.seek_by(d)?;
            }
            Command::Load(dir) => {
                self.load(&dir)?;
            }
        }
        Ok(())
    }
}
