//! Shared types module - plain data structures and constants
//!
//! Everything here is pure data: the simulation crates, the bot planner and any
//! external renderer or input layer agree on these shapes.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 visible rows (indexed 0-19, top to bottom)
//! - **Columns**: `BASE_COLS` for one player plus `COLS_PER_EXTRA_PLAYER` per extra occupant
//! - **Spawn buffer**: pieces spawn `TOP_MARGIN_ROWS` above the visible field (negative rows)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 650 | Gravity at the `normal` speed preset |
//! | `SOFT_DROP_INTERVAL_MS` | 45 | Gravity while `down` is held |
//! | `MOVE_FIRST_DELAY_MS` | 160 | Hold time before horizontal auto-repeat |
//! | `MOVE_REPEAT_MS` | 115 | Interval between auto-repeat steps |
//! | `ROTATE_DEBOUNCE_MS` | 140 | Minimum spacing of rotations |
//! | `LOCK_DELAY_MS` | 420 | Time a solid-grounded piece waits before locking |
//! | `BOT_PLAN_INTERVAL_MS` | 220 | Maximum age of a cached bot plan |
//! | `BOT_INTENT_TTL_MS` | 1800 | Validity window of a bot's published target column |
//!
//! # Examples
//!
//! ```
//! use coop_tetris_types::{board_width_for_players, Mode, SpeedKey, ShapeKind};
//!
//! assert_eq!(Mode::from_str("versus"), Some(Mode::Versus));
//! assert_eq!(SpeedKey::parse_or_default("warp"), SpeedKey::Normal);
//! assert_eq!(SpeedKey::Fast.fall_interval_ms(), 430);
//! assert_eq!(board_width_for_players(3), 18);
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! ```

use serde::{Deserialize, Serialize};

/// Visible rows on every board
pub const ROWS: usize = 20;

/// Board width for a single occupant
pub const BASE_COLS: usize = 10;

/// Extra columns per additional occupant of a shared board
pub const COLS_PER_EXTRA_PLAYER: usize = 4;

/// Player slots (and keyboard maps) supported by a session
pub const MAX_PLAYERS: usize = 4;

/// Rows above the visible field used as the spawn buffer
pub const TOP_MARGIN_ROWS: i32 = 2;

/// Gravity interval at the `normal` speed preset
pub const FALL_INTERVAL_MS: u64 = 650;

/// Gravity interval while soft dropping
pub const SOFT_DROP_INTERVAL_MS: u64 = 45;

/// Horizontal hold time before auto-repeat starts
pub const MOVE_FIRST_DELAY_MS: u64 = 160;

/// Horizontal auto-repeat interval
pub const MOVE_REPEAT_MS: u64 = 115;

/// Minimum spacing between two honored rotate requests
pub const ROTATE_DEBOUNCE_MS: u64 = 140;

/// Grace period of a solid-grounded piece before it locks
pub const LOCK_DELAY_MS: u64 = 420;

/// Maximum age of a cached bot plan
pub const BOT_PLAN_INTERVAL_MS: u64 = 220;

/// Per-tick probability that a bot re-plans regardless of plan age
pub const BOT_REEVALUATE_CHANCE: f64 = 0.14;

/// How long a bot's published target column stays visible to teammates
pub const BOT_INTENT_TTL_MS: u64 = 1800;

/// Maximum rows a piece is pushed up (past the spawn buffer) when garbage rises under it
pub const GARBAGE_NUDGE_LIMIT_ROWS: i32 = 10;

/// Line clear scoring table, indexed by rows cleared in one lock
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Per-row score for clears larger than the table
pub const OVERSIZED_CLEAR_SCORE_PER_ROW: u32 = 250;

/// Board width for `player_count` occupants of one board
pub fn board_width_for_players(player_count: usize) -> usize {
    BASE_COLS + player_count.saturating_sub(1) * COLS_PER_EXTRA_PLAYER
}

/// Timestamp in milliseconds, supplied by the caller on every tick
pub type Millis = u64;

/// Player slot index (0..MAX_PLAYERS)
pub type PlayerId = usize;

/// Team index (0 or 1; co-op uses team 0 for everyone)
pub type TeamId = usize;

/// An sRGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Display colors of player slots 0..3
pub const PLAYER_COLORS: [Rgb; MAX_PLAYERS] = [
    Rgb(0xff, 0x6b, 0x6b),
    Rgb(0xff, 0xd1, 0x66),
    Rgb(0x2d, 0xd4, 0xbf),
    Rgb(0x5f, 0xa8, 0xff),
];

/// Neutral color of attack rows
pub const GARBAGE_COLOR: Rgb = Rgb(0x6e, 0x7b, 0x8a);

/// The seven canonical piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in draw-table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse from a one-letter name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Who placed a locked block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Owner {
    Player(PlayerId),
    /// Attack rows, not owned by any player
    Garbage,
}

/// A locked block on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub color: Rgb,
    pub owner: Owner,
}

impl Block {
    pub fn garbage() -> Self {
        Self {
            color: GARBAGE_COLOR,
            owner: Owner::Garbage,
        }
    }
}

/// A grid cell: `None` is empty
pub type Cell = Option<Block>;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every player shares one board
    Coop,
    /// Two teams of two, each on its own board, attacking via line clears
    Versus,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "coop" | "co-op" => Some(Mode::Coop),
            "versus" | "2v2" => Some(Mode::Versus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Coop => "coop",
            Mode::Versus => "versus",
        }
    }

    /// Short label shown in the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Coop => "Co-op",
            Mode::Versus => "2v2",
        }
    }
}

/// Gravity speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedKey {
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
    Insane,
    Absurd,
}

impl SpeedKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedKey::Slow),
            "normal" => Some(SpeedKey::Normal),
            "fast" => Some(SpeedKey::Fast),
            "very_fast" => Some(SpeedKey::VeryFast),
            "insane" => Some(SpeedKey::Insane),
            "absurd" => Some(SpeedKey::Absurd),
            _ => None,
        }
    }

    /// Parse, falling back to [`SpeedKey::Normal`] for unknown keys
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedKey::Slow => "slow",
            SpeedKey::Normal => "normal",
            SpeedKey::Fast => "fast",
            SpeedKey::VeryFast => "very_fast",
            SpeedKey::Insane => "insane",
            SpeedKey::Absurd => "absurd",
        }
    }

    /// Milliseconds per gravity row
    pub fn fall_interval_ms(&self) -> Millis {
        match self {
            SpeedKey::Slow => 900,
            SpeedKey::Normal => FALL_INTERVAL_MS,
            SpeedKey::Fast => 430,
            SpeedKey::VeryFast => 280,
            SpeedKey::Insane => 170,
            SpeedKey::Absurd => 95,
        }
    }
}

/// Per-player intent for one tick
///
/// Human input layers and the bot planner both produce exactly this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
}

impl PlayerInput {
    pub const IDLE: PlayerInput = PlayerInput {
        left: false,
        right: false,
        down: false,
        rotate: false,
    };
}

/// Why a piece cannot descend one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    /// The row below is free
    None,
    /// Blocked only by another player's falling piece (transient)
    Active,
    /// Blocked by locked cells or the floor (starts lock delay)
    Solid,
}

/// Heuristic profile of a bot sharing a board with other bots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Only bot on its board
    Balanced,
    /// Stacks for multi-line clears
    Builder,
    /// Clears opportunistically
    Cleaner,
}

/// Output-only notification for renderers and effects
///
/// Drained in bulk by the caller; the engine never reads these back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum VisualEvent {
    LineClear {
        board_index: usize,
        rows: Vec<usize>,
        power: u32,
        at: Millis,
    },
    GarbageQueued {
        board_index: usize,
        rows: u32,
        at: Millis,
    },
    GarbageRise {
        board_index: usize,
        rows: u32,
        at: Millis,
    },
}

impl VisualEvent {
    pub fn at(&self) -> Millis {
        match self {
            VisualEvent::LineClear { at, .. }
            | VisualEvent::GarbageQueued { at, .. }
            | VisualEvent::GarbageRise { at, .. } => *at,
        }
    }
}
