//! Mood module - journal entries pairing a date with a self-reported
//! emotional state and intensity.

mod entry;
mod errors;
mod label;
mod summary;
mod values;

pub use entry::MoodEntry;
pub use errors::MoodError;
pub use label::{MoodLabel, Valence};
pub use summary::{LabelCount, MoodSummary, ValenceBreakdown};
pub use values::{Intensity, Notes, MAX_NOTES_LENGTH};
