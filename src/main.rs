//! Headless clear-cell runner (default binary).
//!
//! Replays a command script against a seeded game and streams one JSON report
//! per command on stdout. Diagnostics go to stderr; set `RUST_LOG=debug` to see
//! collapse and gravity steps.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};

use clear_cell::core::ClearCellGame;
use clear_cell::{parse_args, Session, SessionConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, SessionConfig::from_env())?;

    let game = ClearCellGame::seeded(config.rows, config.cols, config.seed)?;
    let mut session = Session::new(game);

    let stdout = io::stdout();
    let summary = match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock())?
        }
        None => session.run(io::stdin().lock(), stdout.lock())?,
    };

    log::info!("final score {}", summary.score);
    Ok(())
}
