//! Controls module - turning one tick of input into piece motion
//!
//! Per living player, in order:
//!
//! | Step | Rule |
//! |------|------|
//! | Left / right | first tick moves at once; then every `MOVE_REPEAT_MS` after `MOVE_FIRST_DELAY_MS` of holding |
//! | Rotate | at most once per `ROTATE_DEBOUNCE_MS`, counted from every attempt |
//! | Drop | gravity step every `SOFT_DROP_INTERVAL_MS` while `down`, otherwise every fall interval |
//! | Lock delay | re-evaluated after the drop step while the board lives |
//!
//! Pressing left and right together counts as neither.

use crate::bot::bot_input;
use crate::core::{try_move, try_rotate};
use crate::session::Session;
use crate::types::{
    Millis, PlayerId, PlayerInput, MOVE_FIRST_DELAY_MS, MOVE_REPEAT_MS, ROTATE_DEBOUNCE_MS,
    SOFT_DROP_INTERVAL_MS,
};

impl Session {
    /// Run one tick for `id`, using `human` unless the slot is a bot
    pub(crate) fn update_player(&mut self, board_index: usize, id: PlayerId, now: Millis, human: PlayerInput) {
        let (alive, is_bot) = match self.players.get(&id) {
            Some(p) => (p.alive, p.is_bot),
            None => return,
        };
        if !alive || self.boards[board_index].is_dead() {
            return;
        }

        let input = if is_bot {
            bot_input(&mut self.boards[board_index], &mut self.players, id, now, &mut self.rng)
        } else {
            human
        };

        self.handle_horizontal(board_index, id, now, -1, input.left && !input.right);
        self.handle_horizontal(board_index, id, now, 1, input.right && !input.left);

        if input.rotate {
            self.handle_rotate(board_index, id, now);
        }

        let interval = if input.down {
            SOFT_DROP_INTERVAL_MS
        } else {
            self.fall_interval
        };
        let due = match self.players.get_mut(&id) {
            Some(p) if now.saturating_sub(p.last_drop_at) >= interval => {
                p.last_drop_at = now;
                true
            }
            _ => false,
        };
        if due {
            self.gravity_step(board_index, id, now);
        }

        if !self.boards[board_index].is_dead() {
            self.apply_lock_delay(board_index, id, now);
        }
    }

    fn handle_horizontal(&mut self, board_index: usize, id: PlayerId, now: Millis, dx: i32, pressed: bool) {
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        let hold = if dx < 0 {
            &mut player.left
        } else {
            &mut player.right
        };

        if !pressed {
            hold.release();
            return;
        }

        let step = match hold.held_since {
            None => {
                hold.held_since = Some(now);
                hold.last_step = now;
                true
            }
            Some(since) => {
                let repeat = now.saturating_sub(since) >= MOVE_FIRST_DELAY_MS
                    && now.saturating_sub(hold.last_step) >= MOVE_REPEAT_MS;
                if repeat {
                    hold.last_step = now;
                }
                repeat
            }
        };

        if step && try_move(&self.boards[board_index], &mut self.players, id, dx, 0) {
            self.maybe_reset_lock_delay(board_index, id);
        }
    }

    fn handle_rotate(&mut self, board_index: usize, id: PlayerId, now: Millis) {
        let Some(player) = self.players.get_mut(&id) else {
            return;
        };
        let ready = player
            .last_rotate_at
            .map_or(true, |at| now.saturating_sub(at) >= ROTATE_DEBOUNCE_MS);
        if !ready {
            return;
        }
        player.last_rotate_at = Some(now);

        if try_rotate(&self.boards[board_index], &mut self.players, id) {
            self.maybe_reset_lock_delay(board_index, id);
        }
    }
}
