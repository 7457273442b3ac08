//! Headless match runner (default binary).
//!
//! Plays one match on a simulated clock and prints the report as JSON.
//! Set `COOP_TETRIS_LOG=debug` to follow board deaths and garbage on stderr.

use anyhow::Result;
use clap::Parser;

use coop_tetris::cli::{init_logging, run_headless, Opts};

fn main() -> Result<()> {
    init_logging();
    let opts = Opts::parse();
    let config = opts.session_config()?;

    let report = run_headless(&config, opts.seed, opts.step_ms, opts.max_ms, opts.events)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
