//! Core of the `playdeck` player: a folder-backed playlist driving a single
//! audio output through a play/pause/stop state machine.
//!
//! The front end (terminal UI, MPRIS) lives in the binary and only talks to
//! [`player::Deck`].

pub mod audio;
pub mod config;
pub mod error;
pub mod library;
pub mod player;

#[cfg(test)]
pub(crate) mod testing;
