use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;

use crate::error::AudioError;

use super::output::DurationProbe;

/// Reads duration from container properties with `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagProbe;

impl DurationProbe for TagProbe {
    fn duration_of(&self, path: &Path) -> Result<Duration, AudioError> {
        let tagged = lofty::read_from_path(path).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(tagged.properties().duration())
    }
}
