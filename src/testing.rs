//! In-crate stand-ins for the external collaborators.
//!
//! Each fake keeps its state behind an `Rc<RefCell<_>>` so a test can keep a
//! handle after moving the fake into a `Deck`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::audio::{AudioOutput, DurationProbe};
use crate::config::{LibrarySettings, Settings};
use crate::error::{AudioError, LibraryError};
use crate::library::{DirectoryListing, DirectoryPicker, PlaylistManager};
use crate::player::Deck;

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Stop,
    SetVolume(f32),
    Seek(Duration),
}

#[derive(Debug, Default)]
pub struct OutputState {
    pub calls: Vec<OutputCall>,
    pub loaded: Option<PathBuf>,
    pub volume: f32,
    pub elapsed: Duration,
    pub finished: bool,
    pub broken: HashSet<PathBuf>,
    pub fail_seek: bool,
}

#[derive(Clone, Default)]
pub struct FakeOutput(pub Rc<RefCell<OutputState>>);

impl FakeOutput {
    pub fn handle(&self) -> Rc<RefCell<OutputState>> {
        self.0.clone()
    }
}

impl AudioOutput for FakeOutput {
    fn load(&mut self, path: &Path) -> Result<(), AudioError> {
        let mut s = self.0.borrow_mut();
        s.calls.push(OutputCall::Load(path.to_path_buf()));
        if s.broken.contains(path) {
            s.loaded = None;
            return Err(AudioError::Decode {
                path: path.to_path_buf(),
                reason: "corrupt file".into(),
            });
        }
        s.loaded = Some(path.to_path_buf());
        s.elapsed = Duration::ZERO;
        s.finished = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let mut s = self.0.borrow_mut();
        s.calls.push(OutputCall::Play);
        if s.loaded.is_none() {
            return Err(AudioError::NothingLoaded);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.0.borrow_mut().calls.push(OutputCall::Pause);
    }

    fn unpause(&mut self) {
        self.0.borrow_mut().calls.push(OutputCall::Unpause);
    }

    fn stop(&mut self) {
        let mut s = self.0.borrow_mut();
        s.calls.push(OutputCall::Stop);
        s.loaded = None;
        s.elapsed = Duration::ZERO;
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        let mut s = self.0.borrow_mut();
        s.calls.push(OutputCall::SetVolume(volume));
        s.volume = volume;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        let mut s = self.0.borrow_mut();
        s.calls.push(OutputCall::Seek(position));
        if s.fail_seek {
            return Err(AudioError::Seek("not seekable".into()));
        }
        s.elapsed = position;
        Ok(())
    }

    fn elapsed(&self) -> Duration {
        self.0.borrow().elapsed
    }

    fn is_finished(&self) -> bool {
        self.0.borrow().finished
    }
}

/// Durations keyed by path; unknown paths fail like an unreadable file.
#[derive(Clone, Default)]
pub struct FakeProbe {
    pub durations: Rc<RefCell<HashMap<PathBuf, Duration>>>,
    pub queries: Rc<Cell<usize>>,
}

impl FakeProbe {
    pub fn with(entries: &[(&str, u64)]) -> Self {
        let probe = Self::default();
        for (path, secs) in entries {
            probe
                .durations
                .borrow_mut()
                .insert(PathBuf::from(path), Duration::from_secs(*secs));
        }
        probe
    }
}

impl DurationProbe for FakeProbe {
    fn duration_of(&self, path: &Path) -> Result<Duration, AudioError> {
        self.queries.set(self.queries.get() + 1);
        self.durations
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| AudioError::Decode {
                path: path.to_path_buf(),
                reason: "no duration".into(),
            })
    }
}

/// Directory contents keyed by folder, returned in insertion order.
#[derive(Clone, Default)]
pub struct FakeListing {
    dirs: Rc<RefCell<HashMap<PathBuf, Vec<PathBuf>>>>,
}

impl FakeListing {
    pub fn with_dir(self, dir: &str, names: &[&str]) -> Self {
        let dir = PathBuf::from(dir);
        let files = names.iter().map(|n| dir.join(n)).collect();
        self.dirs.borrow_mut().insert(dir, files);
        self
    }
}

impl DirectoryListing for FakeListing {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, LibraryError> {
        self.dirs
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| LibraryError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            })
    }
}

/// Answers with a fixed choice and remembers where it was opened.
#[derive(Default)]
pub struct FakePicker {
    pub answer: Option<PathBuf>,
    pub offered: Option<PathBuf>,
}

impl FakePicker {
    pub fn choosing(dir: &str) -> Self {
        Self {
            answer: Some(PathBuf::from(dir)),
            offered: None,
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl DirectoryPicker for FakePicker {
    fn choose(&mut self, initial_dir: &Path) -> Option<PathBuf> {
        self.offered = Some(initial_dir.to_path_buf());
        self.answer.clone()
    }
}

pub fn playlist_with(listing: FakeListing) -> PlaylistManager {
    PlaylistManager::new(Box::new(listing), &LibrarySettings::default())
}

/// A deck over `/music` holding `names`, already loaded.
pub fn deck_with(names: &[&str]) -> (Deck<FakeOutput, FakeProbe>, Rc<RefCell<OutputState>>) {
    deck_with_settings(names, &Settings::default())
}

pub fn deck_with_settings(
    names: &[&str],
    settings: &Settings,
) -> (Deck<FakeOutput, FakeProbe>, Rc<RefCell<OutputState>>) {
    let listing = FakeListing::default().with_dir("/music", names);
    let entries: Vec<(String, u64)> = names
        .iter()
        .map(|n| (format!("/music/{n}"), 180))
        .collect();
    let entries: Vec<(&str, u64)> = entries.iter().map(|(p, s)| (p.as_str(), *s)).collect();

    let output = FakeOutput::default();
    let handle = output.handle();
    let playlist = PlaylistManager::new(Box::new(listing), &settings.library);
    let mut deck = Deck::new(output, FakeProbe::with(&entries), playlist, settings);
    let _ = deck.load(Path::new("/music"));
    (deck, handle)
}
