//! CLI argument parsing for wings.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wings: render string templates with sections, links and brace escaping.
///
/// Templates are always passed as literal arguments. Context and link data
/// are JSON objects.
#[derive(Parser, Debug)]
#[command(name = "wings")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log render details to stderr (overridden by WINGS_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for wings.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a template and print the result.
    Render(RenderArgs),

    /// Parse a template and report structural errors without rendering.
    Check(CheckArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template text to render.
    pub template: String,

    /// Context as an inline JSON object.
    #[arg(short, long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Path to a JSON file holding the context object.
    #[arg(long)]
    pub context_file: Option<PathBuf>,

    /// Link table as an inline JSON object of template strings.
    #[arg(short, long)]
    pub links: Option<String>,

    /// Path to a YAML render config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render missing links as empty strings instead of failing.
    #[arg(long)]
    pub lenient_links: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Template text to check.
    pub template: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
