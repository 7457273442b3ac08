//! Headless match runner: options, logging and the fixed-step match loop.
//!
//! Every option can come from a flag or an environment variable:
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--mode` | `COOP_TETRIS_MODE` | `coop` |
//! | `--players` | `COOP_TETRIS_PLAYERS` | 2 (co-op only) |
//! | `--speed` | `COOP_TETRIS_SPEED` | `normal` |
//! | `--seed` | `COOP_TETRIS_SEED` | 1 |
//! | `--bots` | `COOP_TETRIS_BOTS` | every slot |
//! | `--max-ms` | `COOP_TETRIS_MAX_MS` | 600000 |
//!
//! `--config <path>` reads a JSON `SessionConfig` instead of the mode,
//! players, speed and bots options. Human slots receive no input headless,
//! so their pieces simply fall.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;

use crate::engine::{Clock, FixedStepClock, InputSnapshot, Session, SessionConfig, Summary};
use crate::types::{Millis, Mode, PlayerId, TeamId, VisualEvent, MAX_PLAYERS};

/// Log level variable read by [`init_logging`]
pub const LOG_ENV: &str = "COOP_TETRIS_LOG";

#[derive(Parser, Debug, Clone)]
#[command(name = "coop-tetris", about = "Run a headless co-op or 2v2 match and print the summary as JSON")]
pub struct Opts {
    /// Game mode: coop or versus
    #[arg(long, env = "COOP_TETRIS_MODE", default_value = "coop")]
    pub mode: String,
    /// Seated players in co-op (1-4)
    #[arg(long, env = "COOP_TETRIS_PLAYERS", default_value_t = 2)]
    pub players: usize,
    /// Speed preset (slow, normal, fast, very_fast, insane, absurd)
    #[arg(long, env = "COOP_TETRIS_SPEED", default_value = "normal")]
    pub speed: String,
    /// Seed for pieces, garbage gaps and bot choices
    #[arg(long, env = "COOP_TETRIS_SEED", default_value_t = 1)]
    pub seed: u32,
    /// Comma-separated bot slots; every slot when omitted
    #[arg(long, env = "COOP_TETRIS_BOTS", value_delimiter = ',')]
    pub bots: Option<Vec<PlayerId>>,
    /// Stop after this much simulated time
    #[arg(long, env = "COOP_TETRIS_MAX_MS", default_value_t = 600_000)]
    pub max_ms: Millis,
    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 16)]
    pub step_ms: Millis,
    /// Include the drained visual events in the output
    #[arg(long)]
    pub events: bool,
    /// JSON session config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Opts {
    pub fn session_config(&self) -> Result<SessionConfig> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("invalid config JSON in {}", path.display()));
        }

        let mode = Mode::from_str(&self.mode)
            .ok_or_else(|| anyhow!("unknown mode '{}' (expected coop or versus)", self.mode))?;
        if mode == Mode::Coop && !(1..=MAX_PLAYERS).contains(&self.players) {
            bail!("co-op needs 1 to {} players, got {}", MAX_PLAYERS, self.players);
        }

        let mut config = match mode {
            Mode::Coop => SessionConfig::coop((0..self.players).collect()),
            Mode::Versus => SessionConfig::versus(),
        };
        config.speed_key = self.speed.clone();
        let bots = self
            .bots
            .clone()
            .unwrap_or_else(|| (0..MAX_PLAYERS).collect());
        Ok(config.with_bots(&bots))
    }
}

/// Result of one headless match
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub mode: String,
    pub seed: u32,
    pub finished: bool,
    pub ticks: u64,
    pub winner: Option<TeamId>,
    pub score: u32,
    pub lines: u32,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<VisualEvent>>,
}

/// Play a match on a fixed-step clock until it ends or `max_ms` elapses
pub fn run_headless(
    config: &SessionConfig,
    seed: u32,
    step_ms: Millis,
    max_ms: Millis,
    keep_events: bool,
) -> Result<MatchReport> {
    if step_ms == 0 {
        bail!("step must be at least 1ms");
    }
    let mut clock = FixedStepClock::new(0, step_ms);
    let started_at = clock.now_ms();
    let mut session = Session::new(config, seed, started_at).context("invalid session config")?;

    let input = InputSnapshot::idle();
    let mut events = Vec::new();
    let mut ticks = 0u64;
    while session.is_running() && clock.peek() - started_at <= max_ms {
        session.tick(clock.now_ms(), &input);
        ticks += 1;
        let drained = session.drain_events();
        if keep_events {
            events.extend(drained);
        }
    }

    Ok(MatchReport {
        mode: session.mode().as_str().to_string(),
        seed,
        finished: !session.is_running(),
        ticks,
        winner: session.winner(),
        score: session.score(),
        lines: session.lines(),
        summary: session.summary(),
        events: keep_events.then_some(events),
    })
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a `COOP_TETRIS_LOG` value; anything unrecognized means `warn`
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => Level::Warn.to_level_filter(),
    }
}

/// Install the stderr logger at the level from [`LOG_ENV`]
///
/// Calling it twice keeps the first logger.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str]) -> Opts {
        let mut argv = vec!["coop-tetris"];
        argv.extend_from_slice(args);
        Opts::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_coop_options() {
        let config = opts(&["--mode", "coop", "--players", "3", "--bots", "1,2", "--speed", "fast"])
            .session_config()
            .unwrap();
        assert_eq!(config.mode, Mode::Coop);
        assert_eq!(config.active_ids, vec![0, 1, 2]);
        assert!(!config.is_bot(0));
        assert!(config.is_bot(1) && config.is_bot(2));
        assert_eq!(config.speed_key, "fast");
    }

    #[test]
    fn test_versus_defaults_to_all_bots() {
        let config = opts(&["--mode", "2v2"]).session_config().unwrap();
        assert_eq!(config.mode, Mode::Versus);
        assert!((0..MAX_PLAYERS).all(|id| config.is_bot(id)));
    }

    #[test]
    fn test_rejects_bad_options() {
        assert!(opts(&["--mode", "solo"]).session_config().is_err());
        assert!(opts(&["--players", "0"]).session_config().is_err());
        assert!(opts(&["--players", "5"]).session_config().is_err());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_headless_match_is_reproducible() {
        let config = SessionConfig::versus().with_bots(&[0, 1, 2, 3]);
        let a = run_headless(&config, 9, 16, 20_000, true).unwrap();
        let b = run_headless(&config, 9, 16, 20_000, true).unwrap();
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.events, b.events);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_headless_stops_at_time_limit() {
        let config = SessionConfig::coop(vec![0]);
        let report = run_headless(&config, 1, 100, 1_000, false).unwrap();
        assert!(!report.finished);
        assert_eq!(report.ticks, 10);
        assert!(report.events.is_none());
    }
}
