//! Enumerated emotions a user can log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Self-reported emotional state.
///
/// Declaration order is the canonical display order and breaks ties in
/// summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Excited,
    Grateful,
    Calm,
    Neutral,
    Tired,
    Sad,
    Anxious,
    Stressed,
    Angry,
}

/// Coarse grouping of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Positive,
    Neutral,
    Negative,
}

impl MoodLabel {
    /// Every label, in declaration order.
    pub const ALL: [MoodLabel; 10] = [
        MoodLabel::Happy,
        MoodLabel::Excited,
        MoodLabel::Grateful,
        MoodLabel::Calm,
        MoodLabel::Neutral,
        MoodLabel::Tired,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Stressed,
        MoodLabel::Angry,
    ];

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Excited => "excited",
            MoodLabel::Grateful => "grateful",
            MoodLabel::Calm => "calm",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Tired => "tired",
            MoodLabel::Sad => "sad",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Stressed => "stressed",
            MoodLabel::Angry => "angry",
        }
    }

    pub fn valence(&self) -> Valence {
        match self {
            MoodLabel::Happy | MoodLabel::Excited | MoodLabel::Grateful | MoodLabel::Calm => {
                Valence::Positive
            }
            MoodLabel::Neutral | MoodLabel::Tired => Valence::Neutral,
            MoodLabel::Sad | MoodLabel::Anxious | MoodLabel::Stressed | MoodLabel::Angry => {
                Valence::Negative
            }
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        MoodLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("mood", format!("unknown mood '{}'", s.trim()))
            })
    }
}
