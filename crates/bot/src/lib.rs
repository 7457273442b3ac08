//! Bot planner module - heuristic placement search for AI-controlled players
//!
//! Bots do not press buttons directly. Every tick the engine asks
//! [`bot_input`] for a [`PlayerInput`](coop_tetris_types::PlayerInput), which
//! steers the current piece toward a cached [`BotPlan`](coop_tetris_core::BotPlan).
//! The plan is recomputed when it is missing, older than
//! `BOT_PLAN_INTERVAL_MS`, or on a small random roll each tick.
//!
//! # Planning
//!
//! 1. [`metrics`]: column heights, holes, bumpiness and near-full rows of the board
//! 2. [`strategy`]: danger estimate, builder/cleaner role, teammate intent
//! 3. [`planner`]: every distinct rotation × every column is hard-dropped onto a
//!    scratch grid, scored, and one of the top four is drawn with decaying weights
//! 4. [`controller`]: the plan is turned back into left/right/rotate/down booleans
//!
//! Bots sharing a board coordinate through the board's intent map: each chosen
//! plan publishes its target column, and teammates avoid landing within two
//! columns of it.

pub mod controller;
pub mod metrics;
pub mod planner;
pub mod strategy;

pub use coop_tetris_core as core;
pub use coop_tetris_types as types;

pub use controller::{bot_input, translate_plan};
pub use metrics::{analyze, estimate_danger, GridMetrics};
pub use planner::{evaluate_landing, make_plan, pick_candidate};
pub use strategy::{build_strategy, role_for_player, Strategy};
