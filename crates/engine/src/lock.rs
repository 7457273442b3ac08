//! Locking a piece into its board and resolving the line clear.
//!
//! Order of effects for one lock:
//! 1. a piece with any cell above row 0 kills the board and stops here
//! 2. cells are written, full rows cleared, score and line totals updated
//! 3. in versus, `cleared - 1` rows are queued on the opposing board
//! 4. the locking player respawns
//! 5. garbage pending against this board is applied

use log::debug;

use crate::core::{attack_rows, line_clear_score};
use crate::session::Session;
use crate::types::{Block, Millis, Mode, Owner, PlayerId, TeamId, VisualEvent};

impl Session {
    pub(crate) fn lock_piece(&mut self, board_index: usize, id: PlayerId, now: Millis) {
        let Some(player) = self.players.get(&id) else {
            return;
        };
        let cells = player.cells();
        let block = Block {
            color: player.color,
            owner: Owner::Player(id),
        };
        let team = player.team;

        if cells.iter().any(|&(_, y)| y < 0) {
            debug!("player {} locked above the field on board {}", id, board_index);
            self.kill_board(board_index);
            return;
        }

        let grid = self.boards[board_index].grid_mut();
        for &(x, y) in &cells {
            grid.set(x, y, Some(block));
        }

        self.clear_lines(board_index, team, now);
        self.respawn(board_index, id);
        self.apply_pending_garbage(board_index, now);
    }

    fn clear_lines(&mut self, board_index: usize, team: TeamId, now: Millis) {
        let rows = self.boards[board_index].grid_mut().clear_full_rows();
        if rows.is_empty() {
            return;
        }

        let cleared = rows.len() as u32;
        self.lines += cleared;
        self.score += line_clear_score(cleared);
        if let Some(team_lines) = self.team_lines.get_mut(team) {
            *team_lines += cleared;
        }
        self.push_event(VisualEvent::LineClear {
            board_index,
            rows,
            power: cleared,
            at: now,
        });

        if self.mode != Mode::Versus {
            return;
        }
        let attack = attack_rows(cleared);
        if attack == 0 {
            return;
        }
        if let Some(target) = self.opposing_board(team) {
            debug!(
                "board {} clears {} and sends {} rows to board {}",
                board_index, cleared, attack, target
            );
            self.queue_garbage(target, attack, now);
        }
    }
}
