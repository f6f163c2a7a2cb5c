//! Value objects for mood entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length for entry notes, in characters.
pub const MAX_NOTES_LENGTH: usize = 2000;

/// Strength of the reported mood on a 1 to 10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates an Intensity, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                "intensity",
                Self::MIN as i32,
                Self::MAX as i32,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Intensity::try_new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Free-text notes attached to an entry. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes(String);

impl Notes {
    /// Normalizes optional input: trims, maps blank to `None`, and enforces
    /// the length limit.
    pub fn parse(raw: Option<String>) -> Result<Option<Self>, ValidationError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let len = trimmed.chars().count();
        if len > MAX_NOTES_LENGTH {
            return Err(ValidationError::too_long("notes", MAX_NOTES_LENGTH, len));
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
