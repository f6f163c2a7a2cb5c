//! Aggregate statistics over a set of mood entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{MoodEntry, MoodLabel, Valence};

/// Number of entries logged with a given label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub mood: MoodLabel,
    pub count: u64,
}

/// Entry counts grouped by valence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValenceBreakdown {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

/// Summary statistics for a journal slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub total_entries: u64,
    /// Mean intensity rounded to two decimals; `None` when empty.
    pub average_intensity: Option<f64>,
    /// Non-zero label counts in label declaration order.
    pub by_mood: Vec<LabelCount>,
    pub most_frequent: Option<MoodLabel>,
    pub valence: ValenceBreakdown,
    pub first_entry_date: Option<NaiveDate>,
    pub last_entry_date: Option<NaiveDate>,
    /// Distinct calendar days with at least one entry.
    pub days_logged: u64,
    pub longest_streak_days: u64,
    /// Consecutive logged days ending at `last_entry_date`.
    pub current_streak_days: u64,
}

impl MoodSummary {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let mut label_counts: BTreeMap<MoodLabel, u64> = BTreeMap::new();
        let mut valence = ValenceBreakdown::default();
        let mut intensity_sum: u64 = 0;
        let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

        for entry in entries {
            *label_counts.entry(entry.mood()).or_insert(0) += 1;
            match entry.mood().valence() {
                Valence::Positive => valence.positive += 1,
                Valence::Neutral => valence.neutral += 1,
                Valence::Negative => valence.negative += 1,
            }
            intensity_sum += u64::from(entry.intensity().value());
            days.insert(entry.entry_date());
        }

        let total_entries = entries.len() as u64;
        let average_intensity = (total_entries > 0)
            .then(|| round2(intensity_sum as f64 / total_entries as f64));

        // Label order iteration; ties keep the earlier label.
        let most_frequent = label_counts
            .iter()
            .fold(None::<(MoodLabel, u64)>, |best, (&label, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((label, count)),
            })
            .map(|(label, _)| label);

        let by_mood = label_counts
            .into_iter()
            .map(|(mood, count)| LabelCount { mood, count })
            .collect();

        let (longest_streak_days, current_streak_days) = streaks(&days);

        Self {
            total_entries,
            average_intensity,
            by_mood,
            most_frequent,
            valence,
            first_entry_date: days.first().copied(),
            last_entry_date: days.last().copied(),
            days_logged: days.len() as u64,
            longest_streak_days,
            current_streak_days,
        }
    }
}

/// Returns (longest run, run ending at the latest day) over sorted days.
fn streaks(days: &BTreeSet<NaiveDate>) -> (u64, u64) {
    let mut longest = 0u64;
    let mut run = 0u64;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    (longest, run)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
