//! Implementation of the `wings render` command.
//!
//! Builds the context, link table and config from the arguments, renders
//! the template, and prints the result to stdout without a trailing newline.

use crate::cli::RenderArgs;
use std::io::Write;
use std::path::Path;
use wings::{Config, Context, Links, MissingLinkPolicy, Result, WingsError};

/// Execute the `wings render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let output = render_args(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| WingsError::UserError(format!("failed to write output: {}", e)))
}

/// Render according to the arguments and return the output.
fn render_args(args: &RenderArgs) -> Result<String> {
    let context = match (&args.context, &args.context_file) {
        (Some(json), _) => parse_context(json)?,
        (None, Some(path)) => load_context(path)?,
        (None, None) => Context::new(),
    };

    let links = match &args.links {
        Some(json) => parse_links(json)?,
        None => Links::new(),
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.lenient_links {
        config.missing_links = MissingLinkPolicy::Empty;
    }

    Ok(wings::render_with(&args.template, &context, &links, &config)?)
}

/// Parse an inline JSON context. The document must be an object.
pub fn parse_context(json: &str) -> Result<Context> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| WingsError::UserError(format!("failed to parse context JSON: {}", e)))?;

    match value {
        serde_json::Value::Object(map) => Ok(Context::from(map)),
        other => Err(WingsError::UserError(format!(
            "context must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Load a JSON context from a file.
pub fn load_context(path: &Path) -> Result<Context> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WingsError::UserError(format!(
            "failed to read context file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_context(&content)
}

/// Parse an inline JSON link table.
pub fn parse_links(json: &str) -> Result<Links> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| WingsError::UserError(format!("failed to parse links JSON: {}", e)))?;

    Links::from_json(value).map_err(|bad| match bad {
        Some(name) => WingsError::UserError(format!(
            "link '{}' must be a template string",
            name
        )),
        None => WingsError::UserError("links must be a JSON object".to_string()),
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
