//! Clear-cell (workspace facade crate).
//!
//! Re-exports the rule engine under `clear_cell::{core,types}` and adds the
//! pieces the headless runner needs: session configuration and the command
//! script replayer.

pub mod config;
pub mod script;

pub use clear_cell_core as core;
pub use clear_cell_types as types;

pub use config::{parse_args, SessionConfig};
pub use script::{Command, RunSummary, Session, StepReport};
