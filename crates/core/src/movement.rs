//! Movement module - translation and kicked rotation of a player's piece
//!
//! Both operations are all-or-nothing: a rejected move or rotation leaves the
//! player untouched and returns `false`.

use crate::board::Board;
use crate::collision::collides;
use crate::player::PlayerMap;
use crate::shape::Matrix;
use crate::types::PlayerId;

/// Horizontal kick offsets tried in order, first at the current row and then
/// (floor kick) one row higher
pub const KICK_OFFSETS: [i32; 5] = [0, 1, -1, 2, -2];

/// Move the piece by `(dx, dy)` if the destination is free
pub fn try_move(board: &Board, players: &mut PlayerMap, player_id: PlayerId, dx: i32, dy: i32) -> bool {
    let Some(player) = players.get(&player_id) else {
        return false;
    };
    let (nx, ny) = (player.x + dx, player.y + dy);
    let matrix = player.matrix;

    if collides(board, players, player_id, &matrix, nx, ny) {
        return false;
    }

    if let Some(player) = players.get_mut(&player_id) {
        player.x = nx;
        player.y = ny;
    }
    true
}

/// Find where the clockwise rotation of the piece fits
///
/// Tries every offset of [`KICK_OFFSETS`] at the current row, then the same
/// sequence exactly one row higher. Returns the rotated matrix and its anchor.
pub fn find_rotation(board: &Board, players: &PlayerMap, player_id: PlayerId) -> Option<(Matrix, i32, i32)> {
    let player = players.get(&player_id)?;
    let rotated = player.matrix.rotate_cw();

    for dy in [0, -1] {
        for kick in KICK_OFFSETS {
            let (nx, ny) = (player.x + kick, player.y + dy);
            if !collides(board, players, player_id, &rotated, nx, ny) {
                return Some((rotated, nx, ny));
            }
        }
    }

    None
}

/// Rotate the piece 90° clockwise with wall and floor kicks
pub fn try_rotate(board: &Board, players: &mut PlayerMap, player_id: PlayerId) -> bool {
    let Some((matrix, x, y)) = find_rotation(board, players, player_id) else {
        return false;
    };

    match players.get_mut(&player_id) {
        Some(player) => {
            player.matrix = matrix;
            player.x = x;
            player.y = y;
            true
        }
        None => false,
    }
}
