//! High score tracking
//!
//! Holds the best score reported during this process. Nothing is written to
//! storage; a restart starts from zero.

use serde::{Deserialize, Serialize};

/// Best score seen so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Create an empty record
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Report a finished session's score
    /// Returns true if it raised the record
    pub fn report_high_score(&mut self, score: u64) -> bool {
        if score > self.best {
            log::info!("New high score: {} (was {})", score, self.best);
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Current record
    pub fn get_high_score(&self) -> u64 {
        self.best
    }
}
