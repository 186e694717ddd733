//! Line-oriented command scripts.
//!
//! A script drives any [`GameModel`] headlessly, one command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! fill green
//! fill-row 31 empty
//! set 4 7 blue
//! click 10 15
//! step 3
//! show
//! ```
//!
//! Each command produces a [`StepReport`] written as one JSON object per line.
//! Rule errors (a click outside the board) are recorded in the report and the
//! script continues; malformed lines abort the run.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde::Serialize;

use crate::core::{GameError, GameModel, GameSnapshot};
use crate::types::{Cell, Color, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click { row: usize, col: usize },
    Step { count: u32 },
    Fill(Cell),
    FillRow { row: usize, cell: Cell },
    Set { row: usize, col: usize, cell: Cell },
    Show,
}

impl Command {
    /// Parse one script line
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["click", row, col] => Command::Click {
                row: parse_index(row)?,
                col: parse_index(col)?,
            },
            ["step"] => Command::Step { count: 1 },
            ["step", count] => Command::Step {
                count: count
                    .parse()
                    .map_err(|_| anyhow!("invalid step count: {}", count))?,
            },
            ["fill", cell] => Command::Fill(parse_cell(cell)?),
            ["fill-row", row, cell] => Command::FillRow {
                row: parse_index(row)?,
                cell: parse_cell(cell)?,
            },
            ["set", row, col, cell] => Command::Set {
                row: parse_index(row)?,
                col: parse_index(col)?,
                cell: parse_cell(cell)?,
            },
            ["show"] => Command::Show,
            _ => return Err(anyhow!("unrecognized command: {}", line)),
        };
        Ok(Some(command))
    }

    /// Apply the command to a model
    pub fn apply<M: GameModel + ?Sized>(&self, model: &mut M) -> Result<(), GameError> {
        match *self {
            Command::Click { row, col } => model.process_cell(row, col),
            Command::Step { count } => {
                for _ in 0..count {
                    if model.is_game_over() {
                        break;
                    }
                    model.next_animation_step();
                }
                Ok(())
            }
            Command::Fill(cell) => {
                model.board_mut().fill(cell);
                Ok(())
            }
            Command::FillRow { row, cell } => model.board_mut().fill_row(row, cell),
            Command::Set { row, col, cell } => model.set_cell(row, col, cell),
            Command::Show => Ok(()),
        }
    }
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| anyhow!("invalid index: {}", s))
}

fn parse_cell(s: &str) -> Result<Cell> {
    if s.eq_ignore_ascii_case("empty") || s == "." {
        return Ok(EMPTY);
    }
    Color::from_str(s)
        .map(Some)
        .ok_or_else(|| anyhow!("unknown color: {}", s))
}

/// Outcome of one script command
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub line: usize,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    pub snapshot: GameSnapshot,
}

/// Totals after a script has run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub commands: usize,
    pub rejected: usize,
    pub score: u32,
    pub game_over: bool,
}

/// A model plus the bookkeeping needed to replay scripts against it
pub struct Session<M> {
    model: M,
}

impl<M: GameModel> Session<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Run one command and describe the result
    pub fn execute(&mut self, line: usize, text: &str, command: Command) -> StepReport {
        let error = match command.apply(&mut self.model) {
            Ok(()) => None,
            Err(e) => {
                warn!("line {}: {}", line, e);
                Some(e.to_string())
            }
        };
        let board = match command {
            Command::Show => Some(self.model.board().to_string()),
            _ => None,
        };
        StepReport {
            line,
            command: text.trim().to_string(),
            error,
            board,
            snapshot: GameSnapshot::capture(&self.model),
        }
    }

    /// Replay a whole script, writing one JSON report per command to `out`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        info!(
            "session start: {}x{} board",
            self.model.rows(),
            self.model.cols()
        );

        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let text = line.with_context(|| format!("reading script line {}", line_no))?;
            let Some(command) =
                Command::parse(&text).with_context(|| format!("script line {}", line_no))?
            else {
                continue;
            };

            let report = self.execute(line_no, &text, command);
            summary.commands += 1;
            if report.error.is_some() {
                summary.rejected += 1;
            }
            serde_json::to_writer(&mut out, &report)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        summary.score = self.model.score();
        summary.game_over = self.model.is_game_over();
        info!(
            "session end: {} commands, {} rejected, score {}, game over: {}",
            summary.commands, summary.rejected, summary.score, summary.game_over
        );
        Ok(summary)
    }
}
