//! Session configuration.
//!
//! Values come from the environment first and command-line flags second, so a
//! flag always wins over `CLEAR_CELL_*` variables.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
    /// Script file; `None` reads commands from stdin
    pub script: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: DEFAULT_SEED,
            script: None,
        }
    }
}

impl SessionConfig {
    /// Read `CLEAR_CELL_ROWS`, `CLEAR_CELL_COLS`, `CLEAR_CELL_SEED` and
    /// `CLEAR_CELL_SCRIPT`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let rows = env::var("CLEAR_CELL_ROWS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.rows);

        let cols = env::var("CLEAR_CELL_COLS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.cols);

        let seed = env::var("CLEAR_CELL_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let script = env::var("CLEAR_CELL_SCRIPT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            rows,
            cols,
            seed,
            script,
        }
    }
}

/// Apply command-line flags on top of `base`
///
/// Accepts `--rows N`, `--cols N`, `--seed N` and `--script PATH`.
pub fn parse_args(args: &[String], base: SessionConfig) -> Result<SessionConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--rows" | "--cols" | "--seed" | "--script" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--rows" => config.rows = parse_dimension(flag, v)?,
                    "--cols" => config.cols = parse_dimension(flag, v)?,
                    "--seed" => {
                        config.seed = v
                            .parse::<u32>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?
                    }
                    _ => config.script = Some(PathBuf::from(v)),
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn parse_dimension(flag: &str, v: &str) -> Result<usize> {
    let n = v
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
    if n == 0 {
        return Err(anyhow!("{} must be at least 1", flag));
    }
    Ok(n)
}
