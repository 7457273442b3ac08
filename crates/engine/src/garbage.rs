//! Queued attack rows and their application.
//!
//! Garbage is queued on a board when the opposing team clears two or more
//! rows, and rises from the bottom the next time a piece locks on that board.
//! Each row has a single random gap. Pieces that end up overlapping the new
//! rows are pushed upward; a piece that still overlaps after
//! `GARBAGE_NUDGE_LIMIT_ROWS` of buffer kills the board.

use log::debug;

use crate::session::Session;
use crate::types::{
    Block, Cell, Millis, VisualEvent, GARBAGE_NUDGE_LIMIT_ROWS, TOP_MARGIN_ROWS,
};

impl Session {
    pub(crate) fn queue_garbage(&mut self, board_index: usize, rows: u32, now: Millis) {
        let Some(board) = self.boards.get_mut(board_index) else {
            return;
        };
        board.queue_garbage(rows);
        self.push_event(VisualEvent::GarbageQueued {
            board_index,
            rows,
            at: now,
        });
    }

    /// Apply everything queued against the board, if it is still alive
    pub(crate) fn apply_pending_garbage(&mut self, board_index: usize, now: Millis) {
        let Some(board) = self.boards.get_mut(board_index) else {
            return;
        };
        if board.is_dead() || board.pending_garbage() == 0 {
            return;
        }
        let amount = board.take_pending_garbage();
        self.add_garbage_rows(board_index, amount, now);
    }

    /// Push `amount` gapped rows in from the bottom and nudge pieces clear
    pub(crate) fn add_garbage_rows(&mut self, board_index: usize, amount: u32, now: Millis) {
        match self.boards.get(board_index) {
            Some(board) if amount > 0 && !board.is_dead() => {}
            _ => return,
        }
        self.push_event(VisualEvent::GarbageRise {
            board_index,
            rows: amount,
            at: now,
        });
        debug!("{} garbage rows rise on board {}", amount, board_index);

        let cols = self.boards[board_index].cols();
        for _ in 0..amount {
            let gap = self.rng.next_range(cols as u32) as usize;
            let row: Vec<Cell> = (0..cols)
                .map(|x| if x == gap { None } else { Some(Block::garbage()) })
                .collect();
            self.boards[board_index].grid_mut().push_bottom_row(&row);
        }

        let ceiling = -TOP_MARGIN_ROWS - GARBAGE_NUDGE_LIMIT_ROWS;
        for lane in 0..self.boards[board_index].player_ids().len() {
            let id = self.boards[board_index].player_ids()[lane];
            while self.player_collides(board_index, id) {
                match self.players.get_mut(&id) {
                    Some(player) if player.y > ceiling => player.y -= 1,
                    _ => break,
                }
            }
            if self.player_collides(board_index, id) {
                debug!("player {} buried by garbage on board {}", id, board_index);
                self.kill_board(board_index);
                return;
            }
        }
    }
}
