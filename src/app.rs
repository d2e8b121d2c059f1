//! Application module: the view state the TUI keeps next to the `Deck`.
//!
//! Playback state itself lives in the `Deck`; `App` only tracks the list
//! cursor, the status line and the folder prompt.

mod model;

pub use model::*;
