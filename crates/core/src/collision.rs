//! Collision module - boundary, terrain and live-piece overlap
//!
//! A candidate placement collides when any filled cell:
//! - is left of column 0 or right of the last column,
//! - is at or below the floor,
//! - overlaps a locked cell (rows >= 0 only; the spawn buffer has no terrain),
//! - overlaps the current piece of another *alive* player on the same board
//!   (rows >= 0 only, so stacked spawns inside the buffer never collide).

use crate::board::Board;
use crate::player::{active_cells, PlayerMap};
use crate::shape::Matrix;
use crate::types::{BlockReason, PlayerId};

/// Does `matrix` at `(x, y)` hit walls, floor or locked cells
pub fn hits_terrain(board: &Board, matrix: &Matrix, x: i32, y: i32) -> bool {
    let grid = board.grid();
    active_cells(matrix, x, y).iter().any(|&(cx, cy)| {
        cx < 0
            || cx >= grid.cols() as i32
            || cy >= grid.rows() as i32
            || (cy >= 0 && grid.is_occupied(cx, cy))
    })
}

/// Does `matrix` at `(x, y)` overlap another live player's piece on this board
pub fn hits_live_piece(
    board: &Board,
    players: &PlayerMap,
    player_id: PlayerId,
    matrix: &Matrix,
    x: i32,
    y: i32,
) -> bool {
    let cells = active_cells(matrix, x, y);
    board
        .player_ids()
        .iter()
        .filter(|&&id| id != player_id)
        .filter_map(|id| players.get(id))
        .filter(|other| other.alive)
        .any(|other| {
            let other_cells = other.cells();
            cells
                .iter()
                .filter(|&&(_, cy)| cy >= 0)
                .any(|c| other_cells.contains(c))
        })
}

/// Full collision test for a candidate placement of `player_id`'s piece
pub fn collides(
    board: &Board,
    players: &PlayerMap,
    player_id: PlayerId,
    matrix: &Matrix,
    x: i32,
    y: i32,
) -> bool {
    hits_terrain(board, matrix, x, y) || hits_live_piece(board, players, player_id, matrix, x, y)
}

/// Classify what (if anything) stops the player's piece from moving down one row
///
/// Terrain wins over a live neighbor: a piece resting on the floor next to a
/// falling piece is `Solid`.
pub fn down_block_reason(board: &Board, players: &PlayerMap, player_id: PlayerId) -> BlockReason {
    let Some(player) = players.get(&player_id) else {
        return BlockReason::None;
    };

    if hits_terrain(board, &player.matrix, player.x, player.y + 1) {
        BlockReason::Solid
    } else if hits_live_piece(
        board,
        players,
        player_id,
        &player.matrix,
        player.x,
        player.y + 1,
    ) {
        BlockReason::Active
    } else {
        BlockReason::None
    }
}
