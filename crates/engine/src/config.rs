//! Session configuration
//!
//! The JSON shape matches what a menu layer hands over when a match starts:
//!
//! ```json
//! {
//!   "mode": "coop",
//!   "speedKey": "fast",
//!   "activeIds": [0, 2],
//!   "slotConfig": [{ "isBot": false }, { "isBot": true }, { "isBot": true }, { "isBot": true }]
//! }
//! ```
//!
//! Every field has a default. `activeIds` is only read in co-op; versus always
//! seats all four slots.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Mode, PlayerId, SpeedKey, MAX_PLAYERS};

/// Per-slot settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotConfig {
    pub is_bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub mode: Mode,
    /// Speed preset name; unknown names fall back to `normal`
    pub speed_key: String,
    /// Seated players in co-op, in lane order
    pub active_ids: Vec<PlayerId>,
    pub slot_config: [SlotConfig; MAX_PLAYERS],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Coop,
            speed_key: SpeedKey::Normal.as_str().to_string(),
            active_ids: vec![0],
            slot_config: [SlotConfig::default(); MAX_PLAYERS],
        }
    }
}

impl SessionConfig {
    /// Co-op config with the given seats
    pub fn coop(active_ids: Vec<PlayerId>) -> Self {
        Self {
            mode: Mode::Coop,
            active_ids,
            ..Self::default()
        }
    }

    /// Versus config with all four seats
    pub fn versus() -> Self {
        Self {
            mode: Mode::Versus,
            active_ids: (0..MAX_PLAYERS).collect(),
            ..Self::default()
        }
    }

    /// Mark `ids` as bot-controlled
    pub fn with_bots(mut self, ids: &[PlayerId]) -> Self {
        for &id in ids {
            if let Some(slot) = self.slot_config.get_mut(id) {
                slot.is_bot = true;
            }
        }
        self
    }

    /// Resolved speed preset
    pub fn speed(&self) -> SpeedKey {
        SpeedKey::parse_or_default(&self.speed_key)
    }

    pub fn is_bot(&self, id: PlayerId) -> bool {
        self.slot_config.get(id).is_some_and(|slot| slot.is_bot)
    }

    /// Players seated for this mode, in board then lane order
    pub fn seated_ids(&self) -> Vec<PlayerId> {
        match self.mode {
            Mode::Coop => self.active_ids.clone(),
            Mode::Versus => (0..MAX_PLAYERS).collect(),
        }
    }

    /// Check the co-op seat list
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == Mode::Versus {
            return Ok(());
        }
        if self.active_ids.is_empty() {
            return Err(ConfigError::NoActivePlayers);
        }
        if self.active_ids.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.active_ids.len(),
                max: MAX_PLAYERS,
            });
        }
        for (i, &id) in self.active_ids.iter().enumerate() {
            if id >= MAX_PLAYERS {
                return Err(ConfigError::PlayerOutOfRange(id));
            }
            if self.active_ids[..i].contains(&id) {
                return Err(ConfigError::DuplicatePlayer(id));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("co-op needs at least one active player")]
    NoActivePlayers,
    #[error("at most {max} players can be seated, got {got}")]
    TooManyPlayers { got: usize, max: usize },
    #[error("player {0} is seated more than once")]
    DuplicatePlayer(PlayerId),
    #[error("player id {0} is outside slots 0..{max}", max = MAX_PLAYERS)]
    PlayerOutOfRange(PlayerId),
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::NoActivePlayers => "no_active_players",
            ConfigError::TooManyPlayers { .. } => "too_many_players",
            ConfigError::DuplicatePlayer(_) | ConfigError::PlayerOutOfRange(_) => "invalid_player",
        }
    }
}
