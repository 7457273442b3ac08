//! Spawning the next piece in a player's lane.

use log::debug;

use crate::core::Matrix;
use crate::session::Session;
use crate::types::{PlayerId, PLAYER_COLORS, TOP_MARGIN_ROWS};

/// Spawn column for the occupant in `lane` of `count` on a `cols`-wide board
///
/// A lone occupant spawns centered. Several occupants get evenly spaced lane
/// centers so their pieces appear side by side.
pub fn spawn_x(lane: usize, count: usize, cols: usize, width: usize) -> i32 {
    let span = cols.saturating_sub(width);
    if count <= 1 {
        return (span / 2) as i32;
    }
    let lane_center = (lane as f64 + 0.5) / count as f64;
    let x = (lane_center * span as f64 - width as f64 / 2.0 + 0.5).floor();
    x.clamp(0.0, span as f64) as i32
}

impl Session {
    /// Promote the next piece and place it at the top of the player's lane
    ///
    /// A collision at the spawn position kills the board.
    pub(crate) fn respawn(&mut self, board_index: usize, id: PlayerId) {
        let next = self.rng.next_shape();
        let Some(board) = self.boards.get_mut(board_index) else {
            return;
        };
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };

        player.kind = player.next_kind;
        player.matrix = Matrix::of(player.kind);
        player.next_kind = next;
        player.color = PLAYER_COLORS[id % PLAYER_COLORS.len()];
        player.y = -TOP_MARGIN_ROWS;
        player.bot_plan = None;
        player.locked_since = None;
        board.clear_bot_intent(id);

        let lane = board.lane_of(id).unwrap_or(0);
        player.x = spawn_x(lane, board.player_ids().len(), board.cols(), player.matrix.width());

        if self.player_collides(board_index, id) {
            debug!("player {} has no room to spawn on board {}", id, board_index);
            self.kill_board(board_index);
        }
    }
}
