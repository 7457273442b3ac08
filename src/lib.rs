//! Co-op Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names so applications can write
//! `coop_tetris::engine::Session` or `coop_tetris::core::Matrix`, and hosts the
//! headless runner used by the `coop-tetris` binary.

pub mod cli;

pub use coop_tetris_bot as bot;
pub use coop_tetris_core as core;
pub use coop_tetris_engine as engine;
pub use coop_tetris_types as types;
