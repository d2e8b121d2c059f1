//! Transport state machine, position tracking and volume, bundled in a [`Deck`].

mod command;
mod deck;
mod position;
mod transport;
mod volume;

pub use command::Command;
pub use deck::{Deck, NOTHING_PLAYING};
pub use position::{PositionTracker, format_time, format_time_precise};
pub use transport::{TransportController, TransportState};
pub use volume::{VolumeController, percent_to_level};
