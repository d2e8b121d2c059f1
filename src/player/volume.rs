use tracing::debug;

use crate::audio::AudioOutput;
use crate::error::AudioError;

use super::transport::TransportController;

/// Process-wide volume on the `0.0..=1.0` scale.
#[derive(Debug, Clone, Copy)]
pub struct VolumeController {
    level: f32,
}

impl Default for VolumeController {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

impl VolumeController {
    pub fn level(&self) -> f32 {
        self.level
    }

    /// The level in percent, as a slider would show it.
    pub fn percent(&self) -> f64 {
        (f64::from(self.level) * 100.0).round()
    }

    /// Clamp `percent` into `0..=100`, store it and forward it to the output.
    ///
    /// The level is kept even if the output refuses it.
    pub fn set_volume<O: AudioOutput>(
        &mut self,
        transport: &mut TransportController<O>,
        percent: f64,
    ) -> Result<f32, AudioError> {
        let level = percent_to_level(percent);
        self.level = level;
        debug!("volume {level:.2}");
        transport.apply_volume(level)?;
        Ok(level)
    }

    pub fn nudge<O: AudioOutput>(
        &mut self,
        transport: &mut TransportController<O>,
        delta_percent: f64,
    ) -> Result<f32, AudioError> {
        self.set_volume(transport, self.percent() + delta_percent)
    }
}

/// NaN maps to silence.
pub fn percent_to_level(percent: f64) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent.clamp(0.0, 100.0) / 100.0) as f32
}
