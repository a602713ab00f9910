use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::game::Difficulty;

/// Display format for score timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of a won round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u32,
    /// `None` only for the zero score every new player starts with
    pub difficulty: Option<Difficulty>,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl Score {
    /// Score for a round won after `attempts` guesses.
    ///
    /// `value = 100 * (bound / attempts + 1)` with floor division, so one
    /// attempt on Easy is worth 1100 and anything past the bound is worth 100.
    ///
    /// `attempts` must be at least 1. A round cannot be won without a guess,
    /// so callers never pass zero.
    pub fn compute(attempts: u32, difficulty: Difficulty) -> Self {
        Self::compute_at(attempts, difficulty, now())
    }

    /// Same as [`Score::compute`] with an explicit timestamp
    pub fn compute_at(attempts: u32, difficulty: Difficulty, timestamp: NaiveDateTime) -> Self {
        debug_assert!(attempts > 0, "score computed for a round without guesses");
        Self {
            value: 100 * (difficulty.bound() / attempts + 1),
            difficulty: Some(difficulty),
            timestamp: truncate_to_seconds(timestamp),
        }
    }

    /// The starting score of a new player
    pub fn zero() -> Self {
        Self {
            value: 0,
            difficulty: None,
            timestamp: now(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.difficulty.is_none()
    }

    pub fn difficulty_name(&self) -> &'static str {
        self.difficulty.map(|d| d.name()).unwrap_or("-")
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Stores timestamps in the same `YYYY-MM-DD HH:MM:SS` form they are shown in
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

fn now() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
