//! Session module - match construction, the per-tick loop and match end
//!
//! A [`Session`] owns every board, every player, the shared RNG and the
//! visual event queue. The tick walks boards in order and the players of each
//! board in lane order; a lock resolves completely (clear, attack, respawn,
//! garbage) before the next player moves, so later players in the same tick
//! see its effects.
//!
//! The per-player steps live in sibling modules as further `impl Session`
//! blocks: `controls`, `gravity`, `lock`, `garbage` and [`crate::spawn`].

use log::{debug, info};

use crate::config::{ConfigError, SessionConfig};
use crate::core::{collides, Board, Player, PlayerMap, SimpleRng};
use crate::events::EventQueue;
use crate::input::InputSnapshot;
use crate::types::{
    board_width_for_players, Millis, Mode, PlayerId, SpeedKey, TeamId, VisualEvent, ROWS,
};

/// Seats per versus board
const VERSUS_TEAM_SIZE: usize = 2;

/// Match status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "Running",
            Status::GameOver => "Game Over",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) config: SessionConfig,
    pub(crate) mode: Mode,
    pub(crate) speed: SpeedKey,
    pub(crate) fall_interval: Millis,
    pub(crate) boards: Vec<Board>,
    pub(crate) players: PlayerMap,
    pub(crate) score: u32,
    pub(crate) lines: u32,
    pub(crate) team_lines: [u32; 2],
    pub(crate) running: bool,
    pub(crate) status: Status,
    pub(crate) winner: Option<TeamId>,
    pub(crate) started_at: Millis,
    pub(crate) last_tick_at: Millis,
    pub(crate) ended_at: Option<Millis>,
    pub(crate) events: EventQueue,
    pub(crate) rng: SimpleRng,
}

impl Session {
    /// Build boards and players for `config.mode` and spawn every first piece
    pub fn new(config: &SessionConfig, seed: u32, started_at: Millis) -> Result<Self, ConfigError> {
        config.validate()?;

        let mode = config.mode;
        let speed = config.speed();
        let mut rng = SimpleRng::new(seed);

        let boards = match mode {
            Mode::Coop => {
                let ids = config.active_ids.clone();
                let cols = board_width_for_players(ids.len());
                vec![Board::new(0, "Shared Board", 0, cols, ROWS, ids)]
            }
            Mode::Versus => {
                let cols = board_width_for_players(VERSUS_TEAM_SIZE);
                vec![
                    Board::new(0, "Team 1", 0, cols, ROWS, vec![0, 1]),
                    Board::new(1, "Team 2", 1, cols, ROWS, vec![2, 3]),
                ]
            }
        };

        let mut players = PlayerMap::new();
        for board in &boards {
            for &id in board.player_ids() {
                let player = Player::new(
                    id,
                    config.is_bot(id),
                    board.team(),
                    board.index(),
                    rng.next_shape(),
                    started_at,
                );
                players.insert(id, player);
            }
        }

        let mut session = Self {
            config: config.clone(),
            mode,
            speed,
            fall_interval: speed.fall_interval_ms(),
            boards,
            players,
            score: 0,
            lines: 0,
            team_lines: [0; 2],
            running: true,
            status: Status::Running,
            winner: None,
            started_at,
            last_tick_at: started_at,
            ended_at: None,
            events: EventQueue::new(),
            rng,
        };

        for board_index in 0..session.boards.len() {
            for lane in 0..session.boards[board_index].player_ids().len() {
                let id = session.boards[board_index].player_ids()[lane];
                session.respawn(board_index, id);
            }
        }

        info!(
            "{} match started: {} players, speed {}, seed {}",
            mode.label(),
            session.players.len(),
            speed.as_str(),
            seed
        );
        Ok(session)
    }

    /// Advance the match to `now`
    ///
    /// Does nothing once the match has ended.
    pub fn tick(&mut self, now: Millis, input: &InputSnapshot) {
        if !self.running {
            return;
        }
        self.last_tick_at = now;

        for board_index in 0..self.boards.len() {
            if self.boards[board_index].is_dead() {
                continue;
            }
            for lane in 0..self.boards[board_index].player_ids().len() {
                let id = self.boards[board_index].player_ids()[lane];
                self.update_player(board_index, id, now, input.get(id));
            }
        }

        self.update_match_state(now);
    }

    fn update_match_state(&mut self, now: Millis) {
        let dead: Vec<bool> = self.boards.iter().map(Board::is_dead).collect();
        let ended = match self.mode {
            Mode::Coop => dead.first().copied().unwrap_or(false),
            Mode::Versus => dead.iter().any(|&d| d),
        };
        if !ended {
            return;
        }

        if self.mode == Mode::Versus {
            self.winner = match (dead[0], dead.get(1).copied().unwrap_or(false)) {
                (true, false) => Some(1),
                (false, true) => Some(0),
                _ => None,
            };
        }
        self.running = false;
        self.status = Status::GameOver;
        self.ended_at = Some(now);

        info!(
            "{} match over after {}ms: score {}, lines {}, winner {:?}",
            self.mode.label(),
            now.saturating_sub(self.started_at),
            self.score,
            self.lines,
            self.winner
        );
    }

    /// Mark a board dead for good and retire its players
    pub(crate) fn kill_board(&mut self, board_index: usize) {
        let Some(board) = self.boards.get_mut(board_index) else {
            return;
        };
        if board.is_dead() {
            return;
        }
        board.mark_dead();
        for id in board.player_ids() {
            if let Some(player) = self.players.get_mut(id) {
                player.alive = false;
            }
        }
        self.status = Status::GameOver;
        debug!("board {} ({}) topped out", board_index, board.label());
    }

    /// Does `id`'s current piece collide where it stands
    pub(crate) fn player_collides(&self, board_index: usize, id: PlayerId) -> bool {
        match (self.boards.get(board_index), self.players.get(&id)) {
            (Some(board), Some(p)) => collides(board, &self.players, id, &p.matrix, p.x, p.y),
            _ => false,
        }
    }

    pub(crate) fn push_event(&mut self, event: VisualEvent) {
        self.events.push(event);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn speed(&self) -> SpeedKey {
        self.speed
    }

    /// Gravity interval in milliseconds
    pub fn fall_interval_ms(&self) -> Millis {
        self.fall_interval
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    pub fn board_mut(&mut self, index: usize) -> Option<&mut Board> {
        self.boards.get_mut(index)
    }

    pub fn players(&self) -> &PlayerMap {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Absolute cells of `id`'s falling piece
    pub fn active_cells(&self, id: PlayerId) -> Option<Vec<(i32, i32)>> {
        self.players.get(&id).map(|p| p.cells().to_vec())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Lines cleared per team (co-op counts everything as team 0)
    pub fn team_lines(&self) -> [u32; 2] {
        self.team_lines
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Winning team of a finished versus match; `None` for a draw or co-op
    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Timestamp of the most recent tick while running
    pub fn last_tick_at(&self) -> Millis {
        self.last_tick_at
    }

    pub fn ended_at(&self) -> Option<Millis> {
        self.ended_at
    }

    /// Take every emitted event, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<VisualEvent> {
        self.events.drain()
    }

    /// Board of the team opposing `team`
    pub(crate) fn opposing_board(&self, team: TeamId) -> Option<usize> {
        self.boards.iter().position(|b| b.team() != team)
    }
}
