//! End-of-match summary.

use serde::Serialize;

use crate::session::Session;
use crate::types::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub headline: String,
    pub rows: Vec<String>,
}

impl Session {
    /// Headline and result rows for a finished match
    ///
    /// Duration runs from the start to the end timestamp, or to the latest
    /// tick while the match is still running.
    pub fn summary(&self) -> Summary {
        let ended = self.ended_at.unwrap_or(self.last_tick_at);
        let seconds = ended.saturating_sub(self.started_at) as f64 / 1000.0;

        match self.mode {
            Mode::Coop => Summary {
                headline: format!("Shared board survived for {:.1}s.", seconds),
                rows: vec![
                    format!("Total score: {}", self.score),
                    format!("Total lines: {}", self.lines),
                    format!("Players: {}", self.config.active_ids.len()),
                ],
            },
            Mode::Versus => {
                let outcome = match self.winner {
                    Some(0) => "Team 1 wins.",
                    Some(_) => "Team 2 wins.",
                    None => "Draw.",
                };
                Summary {
                    headline: format!("{} Match time: {:.1}s.", outcome, seconds),
                    rows: vec![
                        format!("Team 1 lines: {}", self.team_lines[0]),
                        format!("Team 2 lines: {}", self.team_lines[1]),
                        format!("Total lines cleared: {}", self.lines),
                    ],
                }
            }
        }
    }
}
