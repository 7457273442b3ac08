//! Board module - one play field and the bookkeeping that belongs to it
//!
//! A board owns its [`Grid`], the ordered list of occupant player ids (their
//! order is also their spawn lane order), the pending attack counter, the
//! one-way death flag and the short-lived bot intents used for bot-to-bot
//! coordination. Players themselves live in the session's [`crate::PlayerMap`].

use std::collections::BTreeMap;

use crate::grid::Grid;
use crate::types::{Millis, PlayerId, TeamId};

/// Target column most recently chosen by a bot on this board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotIntent {
    pub x: i32,
    pub at: Millis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    index: usize,
    label: String,
    team: TeamId,
    grid: Grid,
    player_ids: Vec<PlayerId>,
    dead: bool,
    pending_garbage: u32,
    bot_intents: BTreeMap<PlayerId, BotIntent>,
}

impl Board {
    /// Create an empty board
    pub fn new(
        index: usize,
        label: impl Into<String>,
        team: TeamId,
        cols: usize,
        rows: usize,
        player_ids: Vec<PlayerId>,
    ) -> Self {
        Self {
            index,
            label: label.into(),
            team,
            grid: Grid::new(cols, rows),
            player_ids,
            dead: false,
            pending_garbage: 0,
            bot_intents: BTreeMap::new(),
        }
    }

    /// Position of this board in the session
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for the lock and garbage steps (and scripted scenarios)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Occupants in lane order
    pub fn player_ids(&self) -> &[PlayerId] {
        &self.player_ids
    }

    /// Lane index of a player among the occupants
    pub fn lane_of(&self, player_id: PlayerId) -> Option<usize> {
        self.player_ids.iter().position(|&id| id == player_id)
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Set the death flag (never cleared)
    pub fn mark_dead(&mut self) {
        self.dead = true;
    }

    pub fn pending_garbage(&self) -> u32 {
        self.pending_garbage
    }

    /// Add queued attack rows
    pub fn queue_garbage(&mut self, rows: u32) {
        self.pending_garbage = self.pending_garbage.saturating_add(rows);
    }

    /// Take all queued attack rows, leaving the counter at zero
    pub fn take_pending_garbage(&mut self) -> u32 {
        std::mem::take(&mut self.pending_garbage)
    }

    pub fn bot_intent(&self, player_id: PlayerId) -> Option<BotIntent> {
        self.bot_intents.get(&player_id).copied()
    }

    pub fn set_bot_intent(&mut self, player_id: PlayerId, intent: BotIntent) {
        self.bot_intents.insert(player_id, intent);
    }

    pub fn clear_bot_intent(&mut self, player_id: PlayerId) {
        self.bot_intents.remove(&player_id);
    }

    /// Drop intents older than `ttl`
    pub fn expire_bot_intents(&mut self, now: Millis, ttl: Millis) {
        self.bot_intents
            .retain(|_, intent| now.saturating_sub(intent.at) <= ttl);
    }

    /// Target column of the first other occupant (lane order) with a live intent
    pub fn teammate_intent_x(&self, player_id: PlayerId) -> Option<i32> {
        self.player_ids
            .iter()
            .filter(|&&id| id != player_id)
            .find_map(|id| self.bot_intents.get(id).map(|intent| intent.x))
    }
}
