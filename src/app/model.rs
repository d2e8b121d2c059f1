//! Application model types: `App` and `FolderPrompt`.

use std::env;
use std::path::PathBuf;

/// View state of the terminal UI.
pub struct App {
    /// Highlighted row in the track list. Independent of the playing track
    /// until the user presses enter.
    pub selected: usize,
    /// Move the cursor along with the playing track.
    pub follow_playback: bool,
    /// One-line message shown in the status box (errors, loads).
    pub status: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            selected: 0,
            follow_playback: true,
            status: None,
        }
    }

    /// Move the cursor down with wraparound.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Move the cursor up with wraparound.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + len - 1) % len;
    }

    /// Keep the cursor inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Snap the cursor to the playing index when following is on.
    pub fn follow(&mut self, playing: usize) {
        if self.follow_playback {
            self.selected = playing;
        }
    }

    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }

    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Text input for the "open folder" prompt.
#[derive(Debug, Clone, Default)]
pub struct FolderPrompt {
    pub input: String,
}

impl FolderPrompt {
    /// Start with `initial` prefilled.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            input: initial.into(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// The entered folder, with a leading `~` expanded. `None` when blank.
    pub fn path(&self) -> Option<PathBuf> {
        let raw = self.input.trim();
        if raw.is_empty() {
            return None;
        }
        if raw == "~" || raw.starts_with("~/") {
            if let Some(home) = env::var_os("HOME") {
                let rest = raw.trim_start_matches('~').trim_start_matches('/');
                return Some(PathBuf::from(home).join(rest));
            }
        }
        Some(PathBuf::from(raw))
    }
}
