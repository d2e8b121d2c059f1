//! Elapsed time, cached duration and time formatting.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::audio::{AudioOutput, DurationProbe};
use crate::error::AudioError;
use crate::library::Track;

use super::transport::TransportController;

pub struct PositionTracker<P> {
    probe: P,
    duration: Duration,
    cached_for: Option<PathBuf>,
}

impl<P: DurationProbe> PositionTracker<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            duration: Duration::ZERO,
            cached_for: None,
        }
    }

    /// Re-probe only when `current` is a different file than the cached one.
    pub fn sync(&mut self, current: Option<&Track>) {
        let path = current.map(|t| t.path.as_path());
        if path == self.cached_for.as_deref() {
            return;
        }

        self.duration = match path {
            Some(p) => self.probe.duration_of(p).unwrap_or_else(|e| {
                warn!("unknown duration: {e}");
                Duration::ZERO
            }),
            None => Duration::ZERO,
        };
        self.cached_for = path.map(|p| p.to_path_buf());
    }

    /// Forget the cache so the next [`sync`](Self::sync) probes again.
    pub fn invalidate(&mut self) {
        self.cached_for = None;
        self.duration = Duration::ZERO;
    }

    /// Zero when the length could not be determined.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn position<O: AudioOutput>(&self, transport: &TransportController<O>) -> Duration {
        if !transport.state().is_active() {
            return Duration::ZERO;
        }
        let elapsed = transport.output().elapsed();
        if self.duration.is_zero() {
            elapsed
        } else {
            elapsed.min(self.duration)
        }
    }

    /// Seek the active file. Returns the applied position, `None` when nothing is active.
    pub fn set_position<O: AudioOutput>(
        &self,
        transport: &mut TransportController<O>,
        seconds: f64,
    ) -> Result<Option<Duration>, AudioError> {
        if !transport.state().is_active() {
            return Ok(None);
        }
        let target = clamp_seek(seconds, self.duration);
        transport.seek(target)?;
        Ok(Some(target))
    }
}

/// Clamp to `[0, duration]`. An unknown (zero) duration leaves the upper end open.
fn clamp_seek(seconds: f64, duration: Duration) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    if !duration.is_zero() {
        if seconds >= duration.as_secs_f64() {
            return duration;
        }
        return Duration::from_secs_f64(seconds);
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

/// `MM:SS`, truncated to whole seconds. Minutes keep counting past 59.
pub fn format_time(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `MM:SS.t` with truncated tenths.
pub fn format_time_precise(d: Duration) -> String {
    format!("{}.{}", format_time(d), d.subsec_millis() / 100)
}
