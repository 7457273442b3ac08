//! Per-tick input for every player slot.

use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, PlayerInput, MAX_PLAYERS};

/// Resolved human input for one tick, indexed by player id
///
/// Bot-controlled slots ignore their entry; the planner supplies their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    slots: [PlayerInput; MAX_PLAYERS],
}

impl InputSnapshot {
    /// Nobody is pressing anything
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: PlayerId, input: PlayerInput) {
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = input;
        }
    }

    pub fn with(mut self, id: PlayerId, input: PlayerInput) -> Self {
        self.set(id, input);
        self
    }

    /// Input for `id`; unknown ids read as idle
    pub fn get(&self, id: PlayerId) -> PlayerInput {
        self.slots.get(id).copied().unwrap_or(PlayerInput::IDLE)
    }
}
