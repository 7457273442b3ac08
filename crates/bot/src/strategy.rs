//! Per-plan context for a bot: how dangerous the board is, which role the
//! bot plays, where its lane is and where a teammate is heading.

use crate::core::{Board, PlayerMap};
use crate::metrics::{analyze, estimate_danger};
use crate::types::{PlayerId, Role};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strategy {
    pub danger: f64,
    pub role: Role,
    pub lane_center_x: f64,
    pub teammate_intent_x: Option<i32>,
}

/// Role of `player_id` among the bots on `board`
///
/// A lone bot is `Balanced`. With two or more, bots sorted by id alternate
/// `Builder`, `Cleaner`, `Builder`, ...
pub fn role_for_player(board: &Board, players: &PlayerMap, player_id: PlayerId) -> Role {
    let mut bot_ids: Vec<PlayerId> = board
        .player_ids()
        .iter()
        .copied()
        .filter(|id| players.get(id).is_some_and(|p| p.is_bot))
        .collect();
    if bot_ids.len() <= 1 {
        return Role::Balanced;
    }
    bot_ids.sort_unstable();

    match bot_ids.iter().position(|&id| id == player_id) {
        Some(i) if i % 2 == 0 => Role::Builder,
        Some(_) => Role::Cleaner,
        None => Role::Balanced,
    }
}

pub fn build_strategy(board: &Board, players: &PlayerMap, player_id: PlayerId) -> Strategy {
    let metrics = analyze(board.grid());
    let danger = estimate_danger(&metrics, board.rows());
    let role = role_for_player(board, players, player_id);

    let lane = board.lane_of(player_id).unwrap_or(0) as f64;
    let lanes = board.player_ids().len().max(1) as f64;
    let lane_center_x = ((lane + 0.5) / lanes) * board.cols() as f64;

    Strategy {
        danger,
        role,
        lane_center_x,
        teammate_intent_x: board.teammate_intent_x(player_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BotIntent, Player};
    use crate::types::ShapeKind;

    fn board_with(bots: &[bool]) -> (Board, PlayerMap) {
        let ids: Vec<PlayerId> = (0..bots.len()).collect();
        let board = Board::new(0, "Shared Board", 0, 10 + 4 * (bots.len() - 1), 20, ids);
        let players = bots
            .iter()
            .enumerate()
            .map(|(id, &is_bot)| (id, Player::new(id, is_bot, 0, 0, ShapeKind::T, 0)))
            .collect();
        (board, players)
    }

    #[test]
    fn test_single_bot_is_balanced() {
        let (board, players) = board_with(&[false, true]);
        assert_eq!(role_for_player(&board, &players, 1), Role::Balanced);
    }

    #[test]
    fn test_roles_alternate_by_id() {
        let (board, players) = board_with(&[true, false, true, true]);
        assert_eq!(role_for_player(&board, &players, 0), Role::Builder);
        assert_eq!(role_for_player(&board, &players, 2), Role::Cleaner);
        assert_eq!(role_for_player(&board, &players, 3), Role::Builder);
    }

    #[test]
    fn test_lane_center() {
        let (board, players) = board_with(&[true, true]);
        // 14 columns split into two lanes: centers at 3.5 and 10.5
        assert_eq!(build_strategy(&board, &players, 0).lane_center_x, 3.5);
        assert_eq!(build_strategy(&board, &players, 1).lane_center_x, 10.5);
    }

    #[test]
    fn test_teammate_intent_is_visible() {
        let (mut board, players) = board_with(&[true, true]);
        board.set_bot_intent(1, BotIntent { x: 9, at: 0 });
        let strategy = build_strategy(&board, &players, 0);
        assert_eq!(strategy.teammate_intent_x, Some(9));
        assert_eq!(strategy.danger, 0.0);
        assert_eq!(build_strategy(&board, &players, 1).teammate_intent_x, None);
    }
}
