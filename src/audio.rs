//! Audio output and metadata collaborators.

mod output;
mod probe;
mod sink;

pub use output::{AudioOutput, DurationProbe};
pub use probe::TagProbe;
pub use sink::RodioOutput;

#[cfg(test)]
mod tests;
