//! Serializable views for HUDs and next-piece previews.

use serde::Serialize;

use crate::core::Matrix;
use crate::session::Session;
use crate::types::{Mode, PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub index: usize,
    pub label: String,
    pub cols: usize,
    pub rows: usize,
    pub dead: bool,
    pub pending_garbage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: String,
    pub status: String,
    pub running: bool,
    pub score: u32,
    pub lines: u32,
    /// Per-team lines, versus only
    pub team_lines: Option<[u32; 2]>,
    pub winner: Option<TeamId>,
    pub boards: Vec<BoardSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiecePreview {
    pub id: PlayerId,
    pub team: TeamId,
    pub is_bot: bool,
    /// `#rrggbb`
    pub color: String,
    pub matrix: Matrix,
    /// Garbage queued against this player's board
    pub pending_garbage: u32,
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode.label().to_string(),
            status: self.status.as_str().to_string(),
            running: self.running,
            score: self.score,
            lines: self.lines,
            team_lines: (self.mode == Mode::Versus).then_some(self.team_lines),
            winner: self.winner,
            boards: self
                .boards
                .iter()
                .map(|b| BoardSnapshot {
                    index: b.index(),
                    label: b.label().to_string(),
                    cols: b.cols(),
                    rows: b.rows(),
                    dead: b.is_dead(),
                    pending_garbage: b.pending_garbage(),
                })
                .collect(),
        }
    }

    /// Next-piece previews in board then lane order
    pub fn previews(&self) -> Vec<PiecePreview> {
        self.boards
            .iter()
            .flat_map(|board| {
                board.player_ids().iter().filter_map(move |id| {
                    self.players.get(id).map(|p| PiecePreview {
                        id: p.id,
                        team: p.team,
                        is_bot: p.is_bot,
                        color: p.color.to_hex(),
                        matrix: p.next_matrix(),
                        pending_garbage: board.pending_garbage(),
                    })
                })
            })
            .collect()
    }
}
