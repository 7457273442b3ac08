//! Engine module - the per-tick session orchestrator
//!
//! A [`Session`] is a pure function of (previous state, timestamp, per-player
//! input) to (next state, emitted events). It never reads a clock or an input
//! device: callers pass `now` and an [`InputSnapshot`] to [`Session::tick`],
//! typically from a [`Clock`].
//!
//! # Module Structure
//!
//! - [`config`]: `SessionConfig` (serde, camelCase) and `ConfigError`
//! - [`session`]: construction, tick loop, terminal detection, accessors
//! - `controls`: hold/repeat, rotate debounce, drop cadence
//! - `gravity`: gravity step and the lock-delay clock
//! - `lock`: locking, line clear, score and versus attack
//! - `garbage`: queued attack rows rising from the bottom
//! - [`spawn`]: lane-centered respawn
//! - [`summary`] / [`snapshot`]: end-of-match summary, HUD view, previews
//! - [`events`], [`input`], [`clock`]: event queue, input snapshot, time sources
//!
//! # Example
//!
//! ```
//! use coop_tetris_engine::{Clock, FixedStepClock, InputSnapshot, Session, SessionConfig};
//!
//! let config = SessionConfig::coop(vec![0, 1]).with_bots(&[0, 1]);
//! let mut clock = FixedStepClock::new(0, 16);
//! let mut session = Session::new(&config, 42, clock.now_ms()).unwrap();
//!
//! for _ in 0..200 {
//!     session.tick(clock.now_ms(), &InputSnapshot::idle());
//! }
//! assert_eq!(session.boards()[0].cols(), 14);
//! let _events = session.drain_events();
//! assert!(session.drain_events().is_empty());
//! ```

pub mod clock;
pub mod config;
mod controls;
pub mod events;
mod garbage;
mod gravity;
pub mod input;
mod lock;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod summary;

pub use coop_tetris_bot as bot;
pub use coop_tetris_core as core;
pub use coop_tetris_types as types;

pub use clock::{Clock, FixedStepClock, MonotonicClock};
pub use config::{ConfigError, SessionConfig, SlotConfig};
pub use events::EventQueue;
pub use input::InputSnapshot;
pub use session::{Session, Status};
pub use snapshot::{BoardSnapshot, PiecePreview, SessionSnapshot};
pub use spawn::spawn_x;
pub use summary::Summary;
