//! Command implementations for wings.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod render;

use crate::cli::Command;
use wings::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Check(args) => check::cmd_check(args),
    }
}
