//! Implementation of the `wings check` command.

use crate::cli::CheckArgs;
use wings::Result;

/// Execute the `wings check` command.
///
/// Scans and parses the template; prints `ok` when every section is
/// balanced, otherwise returns the structural error.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let nodes = wings::check(&args.template)?;
    tracing::debug!(nodes, "template is well formed");
    println!("ok");
    Ok(())
}
