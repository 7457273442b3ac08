//! Turns a bot's plan into the same per-tick input a human would produce.

use crate::core::{Board, BotPlan, Player, PlayerMap, SimpleRng};
use crate::planner::make_plan;
use crate::types::{
    Millis, PlayerId, PlayerInput, BOT_INTENT_TTL_MS, BOT_PLAN_INTERVAL_MS, BOT_REEVALUATE_CHANCE,
};

/// Predicted danger above which the bot soft-drops from further away
const HURRY_DANGER: f64 = 0.7;

/// Input for bot `player_id` this tick
///
/// Stale intents on the board are dropped first. The plan is refreshed when
/// missing, older than `BOT_PLAN_INTERVAL_MS`, or on a
/// `BOT_REEVALUATE_CHANCE` roll. Without any plan the bot only soft-drops.
pub fn bot_input(
    board: &mut Board,
    players: &mut PlayerMap,
    player_id: PlayerId,
    now: Millis,
    rng: &mut SimpleRng,
) -> PlayerInput {
    board.expire_bot_intents(now, BOT_INTENT_TTL_MS);

    let Some(player) = players.get(&player_id) else {
        return PlayerInput::IDLE;
    };
    let stale = match (player.bot_plan, player.bot_last_plan_at) {
        (Some(_), Some(at)) => now.saturating_sub(at) > BOT_PLAN_INTERVAL_MS,
        _ => true,
    };

    if stale || rng.chance(BOT_REEVALUATE_CHANCE) {
        let plan = make_plan(board, players, player_id, now, rng);
        if let Some(player) = players.get_mut(&player_id) {
            player.bot_plan = plan;
            player.bot_last_plan_at = Some(now);
        }
    }

    match players.get(&player_id) {
        Some(player) => match player.bot_plan {
            Some(plan) => translate_plan(player, &plan),
            None => PlayerInput {
                down: true,
                ..PlayerInput::IDLE
            },
        },
        None => PlayerInput::IDLE,
    }
}

/// Steer the current piece toward `plan`
///
/// Rotation and horizontal movement happen together; soft drop starts once
/// the piece is within two rows of the target (four when the plan leaves the
/// board in danger).
pub fn translate_plan(player: &Player, plan: &BotPlan) -> PlayerInput {
    let lead = if plan.danger_after > HURRY_DANGER { 4 } else { 2 };
    PlayerInput {
        rotate: player.matrix != plan.matrix,
        left: player.x > plan.x,
        right: player.x < plan.x,
        down: player.y >= plan.y - lead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BotIntent, Matrix};
    use crate::types::{Block, ShapeKind};

    fn solo(kind: ShapeKind) -> (Board, PlayerMap) {
        let board = Board::new(0, "Shared Board", 0, 10, 20, vec![0]);
        let mut players = PlayerMap::new();
        players.insert(0, Player::new(0, true, 0, 0, kind, 0));
        (board, players)
    }

    fn target(matrix: Matrix, x: i32, y: i32, danger_after: f64) -> BotPlan {
        BotPlan {
            matrix,
            x,
            y,
            score: 0.0,
            danger_after,
        }
    }

    #[test]
    fn test_translate_plan_steering() {
        let (_, players) = solo(ShapeKind::T);
        let mut player = players[&0].clone();
        player.x = 5;
        player.y = 0;

        let t = Matrix::of(ShapeKind::T);
        let input = translate_plan(&player, &target(t.rotate_cw(), 2, 18, 0.1));
        assert!(input.rotate);
        assert!(input.left);
        assert!(!input.right);
        assert!(!input.down);

        let input = translate_plan(&player, &target(t, 7, 2, 0.1));
        assert!(!input.rotate);
        assert!(input.right);
        assert!(input.down);
    }

    #[test]
    fn test_translate_plan_hurries_when_dangerous() {
        let (_, players) = solo(ShapeKind::T);
        let mut player = players[&0].clone();
        player.y = 14;
        let t = Matrix::of(ShapeKind::T);
        assert!(!translate_plan(&player, &target(t, 0, 18, 0.5)).down);
        assert!(translate_plan(&player, &target(t, 0, 18, 0.9)).down);
    }

    #[test]
    fn test_bot_input_plans_and_records_time() {
        let (mut board, mut players) = solo(ShapeKind::T);
        let mut rng = SimpleRng::new(42);
        bot_input(&mut board, &mut players, 0, 1000, &mut rng);
        let player = &players[&0];
        assert!(player.bot_plan.is_some());
        assert_eq!(player.bot_last_plan_at, Some(1000));
        assert!(board.bot_intent(0).is_some());
    }

    #[test]
    fn test_bot_input_without_plan_soft_drops() {
        let mut board = Board::new(0, "Shared Board", 0, 3, 20, vec![0]);
        for x in 0..3 {
            board.grid_mut().set(x, 0, Some(Block::garbage()));
        }
        let mut players = PlayerMap::new();
        players.insert(0, Player::new(0, true, 0, 0, ShapeKind::I, 0));
        let mut rng = SimpleRng::new(1);

        let input = bot_input(&mut board, &mut players, 0, 0, &mut rng);
        assert_eq!(
            input,
            PlayerInput {
                down: true,
                ..PlayerInput::IDLE
            }
        );
    }

    #[test]
    fn test_stale_intents_expire() {
        let mut board = Board::new(0, "Shared Board", 0, 14, 20, vec![0, 1]);
        board.set_bot_intent(1, BotIntent { x: 3, at: 0 });
        let mut players = PlayerMap::new();
        players.insert(0, Player::new(0, true, 0, 0, ShapeKind::O, 0));
        players.insert(1, Player::new(1, false, 0, 0, ShapeKind::O, 0));
        let mut rng = SimpleRng::new(9);

        bot_input(&mut board, &mut players, 0, 1800, &mut rng);
        assert!(board.bot_intent(1).is_some());
        bot_input(&mut board, &mut players, 0, 1801, &mut rng);
        assert!(board.bot_intent(1).is_none());
    }
}
