//! Template engine: scanning, parsing and rendering.
//!
//! Every render call scans and parses its template text from scratch and
//! then walks the resulting tree once against the given context.
//!
//! # Syntax
//!
//! - `{name}` - Value of `name`, with `<` and `>` escaped
//! - `{&name}` - Value of `name`, unescaped
//! - `{a.b.c}` - Dotted path into nested objects
//! - `{}` - The current array item
//! - `{:name}...{/name}` - Section, rendered when `name` is truthy
//! - `{!name}...{/name}` - Inverse section, rendered when `name` is untruthy
//! - `{@name}` - Link, rendered from the link table against the current context
//! - `{# ... #}` - Comment
//! - `{{` and `}}` - Literal `{` and `}`
//!
//! Values substituted by tags are inserted as text and never interpreted as
//! template syntax.

mod error;
mod evaluator;
mod node;
mod parser;
mod scanner;


pub use error::TemplateError;
pub use evaluator::{Renderer, Scope, escape_html_into};
pub use node::{Node, Section, Template, node_count};
pub use parser::parse;
pub use scanner::{Token, scan};

use crate::config::Config;
use crate::links::Links;
use crate::value::Context;
use tracing::debug;

/// Render a template against a context, with no links and default options.
///
/// # Examples
///
/// ```
/// use wings::{Context, render};
///
/// let ctx = Context::new().with("name", "Alice");
/// let result = render("Hello {name}, use {{name}} for tags.", &ctx).unwrap();
/// assert_eq!(result, "Hello Alice, use {name} for tags.");
/// ```
pub fn render(template: &str, context: &Context) -> Result<String, TemplateError> {
    render_with(template, context, &Links::default(), &Config::default())
}

/// Render a template against a context and a link table, with default options.
pub fn render_with_links(
    template: &str,
    context: &Context,
    links: &Links,
) -> Result<String, TemplateError> {
    render_with(template, context, links, &Config::default())
}

/// Render a template with explicit options.
pub fn render_with(
    template: &str,
    context: &Context,
    links: &Links,
    config: &Config,
) -> Result<String, TemplateError> {
    let tokens = scan(template);
    let nodes = parse(template, &tokens)?;
    debug!(
        template_len = template.len(),
        tokens = tokens.len(),
        nodes = node_count(&nodes),
        "rendering template"
    );

    Renderer::new(links, config).render(&nodes, Scope::new(context))
}

/// Scan and parse a template without rendering it.
///
/// Returns the number of nodes in the parsed tree.
pub fn check(template: &str) -> Result<usize, TemplateError> {
    let tokens = scan(template);
    let nodes = parse(template, &tokens)?;
    Ok(node_count(&nodes))
}
