//! Placement search
//!
//! Every distinct rotation of the current piece is tried at every column
//! where it fits horizontally. Each candidate is hard-dropped from the spawn
//! row onto a copy of the grid (other live pieces still block the drop),
//! completed rows are removed, and the resulting grid is scored.
//!
//! The score balances cleared lines against holes, height and roughness.
//! Weights shift when the board is in danger (`danger > 0.6`), and builders
//! prefer to keep rows nearly full for multi-line clears while cleaners and
//! balanced bots take lines as they come.

use arrayvec::ArrayVec;
use log::trace;

use crate::core::{active_cells, collides, Board, BotIntent, BotPlan, Matrix, PlayerMap, SimpleRng};
use crate::metrics::{analyze, estimate_danger};
use crate::strategy::{build_strategy, Strategy};
use crate::types::{Block, Millis, Owner, PlayerId, Role, TOP_MARGIN_ROWS};

/// Danger above which the bot plays for survival
const SAFE_MODE_DANGER: f64 = 0.6;
/// Danger above which a non-clearing move is penalized further in safe mode
const CRITICAL_DANGER: f64 = 0.8;
/// Teammate intents closer than this many columns are penalized
const INTENT_CLEARANCE: i32 = 2;
const INTENT_OVERLAP_PENALTY: f64 = 4.2;
const SIDE_BIAS_WEIGHT: f64 = 0.2;

/// Candidates kept for the weighted draw
const POOL_SIZE: usize = 4;

/// Score of `matrix` hard-dropped at column `x`, or `None` when it does not
/// even fit at the spawn row
pub fn evaluate_landing(
    board: &Board,
    players: &PlayerMap,
    player_id: PlayerId,
    matrix: &Matrix,
    x: i32,
    strategy: &Strategy,
) -> Option<BotPlan> {
    let mut y = -TOP_MARGIN_ROWS;
    if collides(board, players, player_id, matrix, x, y) {
        return None;
    }
    while !collides(board, players, player_id, matrix, x, y + 1) {
        y += 1;
    }

    let color = players.get(&player_id)?.color;
    let mut scratch = board.grid().clone();
    for (cx, cy) in active_cells(matrix, x, y) {
        if cy >= 0 {
            scratch.set(cx, cy, Some(Block { color, owner: Owner::Player(player_id) }));
        }
    }
    let cleared = scratch.clear_full_rows().len();
    let metrics = analyze(&scratch);

    let cols = board.cols() as f64;
    let side_bias = (x as f64 - (cols - matrix.width() as f64) / 2.0).abs() * SIDE_BIAS_WEIGHT;
    let builder = strategy.role == Role::Builder;
    let safe = strategy.danger > SAFE_MODE_DANGER;

    let line_weight = match (safe, builder) {
        (true, _) => 28.0,
        (false, true) => 12.0,
        (false, false) => 20.0,
    };
    let (hole_w, aggregate_w, bump_w, max_w) = if safe {
        (13.0, 0.95, 2.2, 2.6)
    } else {
        (10.0, 0.72, 1.5, 1.65)
    };

    let mut score = cleared as f64 * line_weight
        - metrics.holes as f64 * hole_w
        - metrics.aggregate_height as f64 * aggregate_w
        - metrics.bumpiness as f64 * bump_w
        - metrics.max_height as f64 * max_w
        - side_bias;

    if builder && !safe {
        score += metrics.near_full_rows as f64 * 4.4;
        if cleared == 1 {
            score -= 5.2;
        }
        if cleared >= 3 {
            score += 7.0;
        }
    }
    if !builder {
        if cleared >= 1 {
            score += 3.4;
        }
        score -= metrics.near_full_rows as f64 * 0.55;
    }
    if let Some(intent_x) = strategy.teammate_intent_x {
        if (x - intent_x).abs() <= INTENT_CLEARANCE {
            score -= INTENT_OVERLAP_PENALTY;
        }
    }
    score -= (x as f64 - strategy.lane_center_x).abs() * if builder { 0.35 } else { 0.18 };
    if safe && cleared == 0 && strategy.danger > CRITICAL_DANGER {
        score -= 8.0;
    }

    Some(BotPlan {
        matrix: *matrix,
        x,
        y,
        score,
        danger_after: estimate_danger(&metrics, board.rows()),
    })
}

/// Weighted draw among the best four candidates
///
/// Weights are 1.65, 1.30, 0.95, 0.60 by rank. Ties keep their input order.
pub fn pick_candidate(mut candidates: Vec<BotPlan>, rng: &mut SimpleRng) -> Option<BotPlan> {
    if candidates.is_empty() {
        return None;
    }
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let pool: ArrayVec<BotPlan, POOL_SIZE> = candidates.into_iter().take(POOL_SIZE).collect();
    let weights: ArrayVec<f64, POOL_SIZE> = (0..pool.len())
        .map(|i| (1.65 - i as f64 * 0.35).max(0.1))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut roll = rng.next_f64() * total;
    for (plan, weight) in pool.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(*plan);
        }
    }
    pool.first().copied()
}

/// Search, pick and publish a plan for `player_id`
///
/// The chosen column becomes the player's intent on the board. When nothing
/// fits, any previous intent is cleared.
pub fn make_plan(
    board: &mut Board,
    players: &PlayerMap,
    player_id: PlayerId,
    now: Millis,
    rng: &mut SimpleRng,
) -> Option<BotPlan> {
    let player = players.get(&player_id)?;
    let strategy = build_strategy(board, players, player_id);

    let mut candidates = Vec::new();
    for matrix in player.matrix.unique_rotations() {
        let max_x = board.cols() as i32 - matrix.width() as i32;
        for x in 0..=max_x {
            if let Some(plan) = evaluate_landing(board, players, player_id, &matrix, x, &strategy) {
                candidates.push(plan);
            }
        }
    }

    let chosen = pick_candidate(candidates, rng);
    match chosen {
        Some(plan) => {
            trace!(
                "bot {} on board {} targets x={} y={} score={:.2} (danger {:.2}, {:?})",
                player_id,
                board.index(),
                plan.x,
                plan.y,
                plan.score,
                strategy.danger,
                strategy.role
            );
            board.set_bot_intent(player_id, BotIntent { x: plan.x, at: now });
        }
        None => {
            trace!("bot {} on board {} found no placement", player_id, board.index());
            board.clear_bot_intent(player_id);
        }
    }
    chosen
}
