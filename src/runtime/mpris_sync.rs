use playdeck::audio::{AudioOutput, DurationProbe};
use playdeck::player::{Deck, TransportState};

use crate::mpris::MprisHandle;

/// What MPRIS last saw; compared every tick so only real changes are sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MprisSnapshot {
    pub index: Option<usize>,
    pub playback: TransportState,
    pub title: Option<String>,
}

impl MprisSnapshot {
    pub fn of<O: AudioOutput, P: DurationProbe>(deck: &Deck<O, P>) -> Self {
        let track = deck.current_track();
        Self {
            index: track.map(|_| deck.current_index()),
            playback: deck.state(),
            title: track.map(|t| t.display.clone()),
        }
    }
}

pub fn update_mpris<O: AudioOutput, P: DurationProbe>(mpris: &MprisHandle, deck: &Deck<O, P>) {
    let track = deck.current_track();
    let index = track.map(|_| deck.current_index());
    mpris.set_track_metadata(index, track, deck.get_duration());
    mpris.set_playback(deck.state());
}
