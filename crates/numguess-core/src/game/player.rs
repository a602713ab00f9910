use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::Score;

/// A player and the best score they have reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub username: String,
    best_score: Score,
    /// Position in the persisted collection, assigned on first save
    store_index: Option<usize>,
}

impl Player {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            best_score: Score::zero(),
            store_index: None,
        }
    }

    pub fn best_score(&self) -> &Score {
        &self.best_score
    }

    pub fn store_index(&self) -> Option<usize> {
        self.store_index
    }

    pub(crate) fn assign_store_index(&mut self, index: usize) {
        self.store_index = Some(index);
    }

    /// Keep `score` if it beats the current best.
    ///
    /// Equal or lower scores are discarded. Returns whether the best score
    /// was replaced.
    pub fn set_score(&mut self, score: Score) -> bool {
        if score.value > self.best_score.value {
            debug!(
                "{}: best score {} -> {}",
                self.username, self.best_score.value, score.value
            );
            self.best_score = score;
            true
        } else {
            false
        }
    }
}
