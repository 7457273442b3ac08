//! Player module - a competitor's falling piece and its timers
//!
//! The active piece is a [`Matrix`] anchored at `(x, y)`: `x` is the column of
//! the matrix origin and `y` its row. `y` may be negative while the piece is
//! still inside the spawn buffer above the visible field.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::shape::Matrix;
use crate::types::{Millis, PlayerId, Rgb, ShapeKind, TeamId, PLAYER_COLORS, TOP_MARGIN_ROWS};

/// All players of a session, keyed by slot id
pub type PlayerMap = BTreeMap<PlayerId, Player>;

/// Horizontal hold/repeat timers for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoldState {
    /// When the current press started (None = released)
    pub held_since: Option<Millis>,
    /// When the last step fired
    pub last_step: Millis,
}

impl HoldState {
    pub fn release(&mut self) {
        *self = HoldState::default();
    }
}

/// Placement a bot is steering toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotPlan {
    pub matrix: Matrix,
    pub x: i32,
    /// Resting row of the hard drop
    pub y: i32,
    pub score: f64,
    /// Predicted danger of the board after this placement
    pub danger_after: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub is_bot: bool,
    pub team: TeamId,
    pub board_index: usize,
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
    pub alive: bool,
    /// Next-piece preview
    pub next_kind: ShapeKind,
    pub last_drop_at: Millis,
    pub last_rotate_at: Option<Millis>,
    pub left: HoldState,
    pub right: HoldState,
    /// Lock-delay clock: None while falling, grounding time while solid-grounded
    pub locked_since: Option<Millis>,
    pub bot_plan: Option<BotPlan>,
    pub bot_last_plan_at: Option<Millis>,
}

impl Player {
    /// Create a player whose first piece is `next_kind` (promoted on the first spawn)
    pub fn new(
        id: PlayerId,
        is_bot: bool,
        team: TeamId,
        board_index: usize,
        next_kind: ShapeKind,
        started_at: Millis,
    ) -> Self {
        Self {
            id,
            is_bot,
            team,
            board_index,
            kind: next_kind,
            matrix: Matrix::of(next_kind),
            color: PLAYER_COLORS[id % PLAYER_COLORS.len()],
            x: 0,
            y: -TOP_MARGIN_ROWS,
            alive: true,
            next_kind,
            last_drop_at: started_at,
            last_rotate_at: None,
            left: HoldState::default(),
            right: HoldState::default(),
            locked_since: None,
            bot_plan: None,
            bot_last_plan_at: None,
        }
    }

    /// Absolute cells of the current piece
    pub fn cells(&self) -> ArrayVec<(i32, i32), 16> {
        active_cells(&self.matrix, self.x, self.y)
    }

    /// Preview matrix of the next piece
    pub fn next_matrix(&self) -> Matrix {
        Matrix::of(self.next_kind)
    }
}

/// Absolute cells of `matrix` anchored at `(x, y)`
pub fn active_cells(matrix: &Matrix, x: i32, y: i32) -> ArrayVec<(i32, i32), 16> {
    matrix
        .cells()
        .into_iter()
        .map(|(dx, dy)| (x + dx, y + dy))
        .collect()
}
