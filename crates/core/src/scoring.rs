//! Scoring module - line clear score and versus attack size
//!
//! Scores are per lock: clearing N rows in one lock is worth
//! `LINE_SCORES[N]` (100/300/500/800 for 1-4) and `N * 250` beyond the table.
//! There are no levels, combos or back-to-back bonuses.

use crate::types::{LINE_SCORES, OVERSIZED_CLEAR_SCORE_PER_ROW};

/// Score for clearing `cleared` rows with a single lock
pub fn line_clear_score(cleared: u32) -> u32 {
    match LINE_SCORES.get(cleared as usize) {
        Some(&score) => score,
        None => cleared.saturating_mul(OVERSIZED_CLEAR_SCORE_PER_ROW),
    }
}

/// Garbage rows sent to the opposing board (versus only)
pub fn attack_rows(cleared: u32) -> u32 {
    cleared.saturating_sub(1)
}
