//! Gravity and lock delay.
//!
//! A piece is *falling* while `locked_since` is `None` and *grounded* once it
//! holds the time it first came to rest on terrain. Only terrain (`Solid`)
//! starts or advances the clock; resting on another player's falling piece
//! (`Active`) keeps it falling.

use crate::core::{down_block_reason, try_move};
use crate::session::Session;
use crate::types::{BlockReason, Millis, PlayerId, LOCK_DELAY_MS};

impl Session {
    /// Move down one row, or advance the lock-delay clock when grounded
    pub(crate) fn gravity_step(&mut self, board_index: usize, id: PlayerId, now: Millis) {
        if try_move(&self.boards[board_index], &mut self.players, id, 0, 1) {
            self.set_locked_since(id, None);
            return;
        }

        match down_block_reason(&self.boards[board_index], &self.players, id) {
            BlockReason::Active => self.set_locked_since(id, None),
            BlockReason::Solid | BlockReason::None => self.advance_lock_clock(board_index, id, now),
        }
    }

    /// Re-check grounding outside the drop cadence
    pub(crate) fn apply_lock_delay(&mut self, board_index: usize, id: PlayerId, now: Millis) {
        if down_block_reason(&self.boards[board_index], &self.players, id) == BlockReason::Solid {
            self.advance_lock_clock(board_index, id, now);
        } else {
            self.set_locked_since(id, None);
        }
    }

    /// After an accepted move or rotation: leaving solid ground restarts the clock
    pub(crate) fn maybe_reset_lock_delay(&mut self, board_index: usize, id: PlayerId) {
        if down_block_reason(&self.boards[board_index], &self.players, id) != BlockReason::Solid {
            self.set_locked_since(id, None);
        }
    }

    fn advance_lock_clock(&mut self, board_index: usize, id: PlayerId, now: Millis) {
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        let Some(since) = player.locked_since else {
            player.locked_since = Some(now);
            return;
        };
        if now.saturating_sub(since) >= LOCK_DELAY_MS {
            self.lock_piece(board_index, id, now);
        }
    }

    fn set_locked_since(&mut self, id: PlayerId, value: Option<Millis>) {
        if let Some(player) = self.players.get_mut(&id) {
            player.locked_since = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SessionConfig;
    use crate::core::Matrix;
    use crate::input::InputSnapshot;
    use crate::session::Session;
    use crate::types::{Block, PlayerInput, ShapeKind};

    const RIGHT: PlayerInput = PlayerInput {
        left: false,
        right: true,
        down: false,
        rotate: false,
    };

    fn grounded_o() -> Session {
        let mut session = Session::new(&SessionConfig::coop(vec![0, 1]), 1, 0).unwrap();
        let p = session.player_mut(0).unwrap();
        p.matrix = Matrix::of(ShapeKind::O);
        p.x = 0;
        p.y = 18;
        session
    }

    #[test]
    fn test_grounding_starts_clock() {
        let mut session = grounded_o();
        session.gravity_step(0, 0, 100);
        assert_eq!(session.player(0).unwrap().locked_since, Some(100));
        session.gravity_step(0, 0, 400);
        assert_eq!(session.player(0).unwrap().locked_since, Some(100));
        assert!(!session.board(0).unwrap().grid().is_occupied(0, 19));
    }

    #[test]
    fn test_locks_after_delay() {
        let mut session = grounded_o();
        session.gravity_step(0, 0, 100);
        session.gravity_step(0, 0, 520);
        assert!(session.board(0).unwrap().grid().is_occupied(0, 19));
        assert!(session.board(0).unwrap().grid().is_occupied(1, 18));
        // respawned with a fresh clock
        let p = session.player(0).unwrap();
        assert_eq!(p.locked_since, None);
        assert!(p.y < 0);
    }

    #[test]
    fn test_resting_on_live_piece_does_not_start_clock() {
        let mut session = grounded_o();
        {
            let other = session.player_mut(1).unwrap();
            other.matrix = Matrix::of(ShapeKind::O);
            other.x = 0;
            other.y = 10;
        }
        {
            let me = session.player_mut(0).unwrap();
            me.y = 8;
            me.locked_since = Some(50);
        }
        session.gravity_step(0, 0, 100);
        assert_eq!(session.player(0).unwrap().y, 8);
        assert_eq!(session.player(0).unwrap().locked_since, None);
    }

    #[test]
    fn test_falling_clears_clock() {
        let mut session = grounded_o();
        {
            let p = session.player_mut(0).unwrap();
            p.y = 5;
            p.locked_since = Some(10);
        }
        session.gravity_step(0, 0, 100);
        assert_eq!(session.player(0).unwrap().y, 6);
        assert_eq!(session.player(0).unwrap().locked_since, None);
    }

    fn ledge_with_o_at(x: i32) -> Session {
        let mut session = grounded_o();
        {
            let board = session.board_mut(0).unwrap();
            board.grid_mut().set(0, 19, Some(Block::garbage()));
            board.grid_mut().set(1, 19, Some(Block::garbage()));
        }
        let p = session.player_mut(0).unwrap();
        p.x = x;
        p.y = 17;
        p.locked_since = Some(10);
        session
    }

    #[test]
    fn test_move_along_ledge_keeps_clock() {
        let mut session = ledge_with_o_at(0);
        session.tick(20, &InputSnapshot::idle().with(0, RIGHT));
        // column 1 still rests on the ledge
        assert_eq!(session.player(0).unwrap().x, 1);
        assert_eq!(session.player(0).unwrap().locked_since, Some(10));
    }

    #[test]
    fn test_move_off_ledge_resets_clock() {
        let mut session = ledge_with_o_at(1);
        session.tick(20, &InputSnapshot::idle().with(0, RIGHT));
        assert_eq!(session.player(0).unwrap().x, 2);
        assert_eq!(session.player(0).unwrap().locked_since, None);
    }

    #[test]
    fn test_rejected_move_keeps_clock() {
        let mut session = ledge_with_o_at(0);
        let left = PlayerInput {
            left: true,
            ..PlayerInput::IDLE
        };
        session.tick(20, &InputSnapshot::idle().with(0, left));
        assert_eq!(session.player(0).unwrap().x, 0);
        assert_eq!(session.player(0).unwrap().locked_since, Some(10));
    }

    const ROTATE: PlayerInput = PlayerInput {
        rotate: true,
        ..PlayerInput::IDLE
    };

    /// Vertical I standing on a block, grounded since t=5
    fn grounded_vertical_i() -> Session {
        let mut session = Session::new(&SessionConfig::coop(vec![0, 1]), 1, 0).unwrap();
        session
            .board_mut(0)
            .unwrap()
            .grid_mut()
            .set(0, 18, Some(Block::garbage()));
        let p = session.player_mut(0).unwrap();
        p.matrix = Matrix::of(ShapeKind::I).rotate_cw();
        p.x = 0;
        p.y = 14;
        p.locked_since = Some(5);
        session
    }

    #[test]
    fn test_rotate_off_ledge_resets_clock() {
        let mut session = grounded_vertical_i();
        session.tick(20, &InputSnapshot::idle().with(0, ROTATE));

        let p = session.player(0).unwrap();
        assert_eq!(p.matrix, Matrix::of(ShapeKind::I));
        assert_eq!((p.x, p.y), (0, 14));
        assert_eq!(p.locked_since, None);
    }

    #[test]
    fn test_rejected_rotation_keeps_clock() {
        let mut session = grounded_vertical_i();
        {
            // blocks every kick at rows 14 and 13
            let grid = session.board_mut(0).unwrap().grid_mut();
            grid.set(3, 14, Some(Block::garbage()));
            grid.set(3, 13, Some(Block::garbage()));
        }
        session.tick(20, &InputSnapshot::idle().with(0, ROTATE));

        let p = session.player(0).unwrap();
        assert_eq!(p.matrix, Matrix::of(ShapeKind::I).rotate_cw());
        assert_eq!(p.locked_since, Some(5));
        assert_eq!(p.last_rotate_at, Some(20));
    }
}
