//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the data model and the geometric rules every board shares.
//! It has **no dependencies** on rendering, devices, or wall-clock time:
//!
//! - **Deterministic**: every random draw goes through a seeded [`SimpleRng`]
//! - **Total**: illegal moves and blocked rotations are ordinary `false` results
//! - **Multi-entity**: collision is checked against locked terrain *and* the
//!   falling pieces of every other live player on the same board
//!
//! # Module Structure
//!
//! - [`shape`]: immutable piece matrices, rotation, rotation-state enumeration
//! - [`grid`]: fixed-size cell grid with row clearing and bottom insertion
//! - [`board`]: a grid plus per-board bookkeeping (occupants, pending garbage, bot intents)
//! - [`player`]: per-player piece state and timers
//! - [`collision`]: overlap tests and down-block classification
//! - [`movement`]: translation and kicked rotation
//! - [`rng`]: seedable LCG
//! - [`scoring`]: line clear score and attack tables
//!
//! # Example
//!
//! ```
//! use coop_tetris_core::{Board, Matrix, PlayerMap, collision::collides};
//! use coop_tetris_types::ShapeKind;
//!
//! let board = Board::new(0, "Shared Board", 0, 10, 20, vec![]);
//! let players = PlayerMap::new();
//! let i = Matrix::of(ShapeKind::I);
//!
//! assert!(!collides(&board, &players, 0, &i, 0, 19));
//! assert!(collides(&board, &players, 0, &i, 7, 19)); // past the right wall
//! assert!(collides(&board, &players, 0, &i, 0, 20)); // past the floor
//! ```

pub mod board;
pub mod collision;
pub mod grid;
pub mod movement;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use coop_tetris_types as types;

pub use board::{Board, BotIntent};
pub use collision::{collides, down_block_reason};
pub use grid::Grid;
pub use movement::{try_move, try_rotate, KICK_OFFSETS};
pub use player::{active_cells, BotPlan, HoldState, Player, PlayerMap};
pub use rng::SimpleRng;
pub use scoring::{attack_rows, line_clear_score};
pub use shape::Matrix;
