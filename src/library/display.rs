use std::path::Path;

use crate::config::DisplayName;

/// Build the on-screen name for a track according to `style`.
///
/// Falls back to the full path when the requested component is missing or
/// not valid UTF-8, so a track never renders as an empty row.
pub fn display_name(path: &Path, style: DisplayName) -> String {
    let part = match style {
        DisplayName::FileName => path.file_name().and_then(|s| s.to_str()),
        DisplayName::Stem => path.file_stem().and_then(|s| s.to_str()),
        DisplayName::Path => None,
    };

    match part {
        Some(p) if !p.trim().is_empty() => p.to_string(),
        _ => path.display().to_string(),
    }
}
