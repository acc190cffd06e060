//! Tree-walking evaluator that renders parsed nodes against a context.

use super::error::TemplateError;
use super::node::{Node, Section};
use super::parser::parse;
use super::scanner::scan;
use crate::config::{Config, MissingLinkPolicy};
use crate::links::Links;
use crate::value::{Context, Value};
use tracing::trace;

/// The data visible to a node while it is rendered.
///
/// `context` answers named paths. `item` is the value the innermost section
/// iterated or descended into and answers the empty path `{}`; at the top
/// level there is no item.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'v> {
    pub context: &'v Context,
    pub item: Option<&'v Value>,
}

impl<'v> Scope<'v> {
    pub fn new(context: &'v Context) -> Self {
        Scope {
            context,
            item: None,
        }
    }

    /// Resolve a tag or section path. The empty path is the current item.
    pub fn resolve(&self, path: &str) -> Option<&'v Value> {
        if path.is_empty() {
            self.item
        } else {
            self.context.resolve(path)
        }
    }

    fn enter(&self, item: &'v Value) -> Self {
        Scope {
            context: item.as_object().unwrap_or(self.context),
            item: Some(item),
        }
    }
}

/// Renders node trees for one top-level render call.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    links: &'r Links,
    config: &'r Config,
    /// Number of links being expanded around the current node.
    depth: u32,
}

impl<'r> Renderer<'r> {
    pub fn new(links: &'r Links, config: &'r Config) -> Self {
        Renderer {
            links,
            config,
            depth: 0,
        }
    }

    pub fn render(&self, nodes: &[Node<'_>], scope: Scope<'_>) -> Result<String, TemplateError> {
        let mut out = String::new();
        self.render_into(nodes, scope, &mut out)?;
        Ok(out)
    }

    fn render_into(
        &self,
        nodes: &[Node<'_>],
        scope: Scope<'_>,
        out: &mut String,
    ) -> Result<(), TemplateError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Comment => {}
                Node::Tag { path, escape } => render_tag(path, *escape, scope, out),
                Node::Link(name) => self.render_link(name, scope, out)?,
                Node::Section(section) => self.render_section(section, scope, out)?,
            }
        }
        Ok(())
    }

    fn render_link(&self, name: &str, scope: Scope<'_>, out: &mut String) -> Result<(), TemplateError> {
        let Some(link) = self.links.get(name) else {
            return match self.config.missing_links {
                MissingLinkPolicy::Error => Err(TemplateError::MissingLink {
                    name: name.to_string(),
                }),
                MissingLinkPolicy::Empty => {
                    trace!(link = name, "missing link rendered empty");
                    Ok(())
                }
            };
        };

        if self.depth >= self.config.max_link_depth {
            return Err(TemplateError::LinkDepthExceeded {
                name: name.to_string(),
                limit: self.config.max_link_depth,
            });
        }

        let source = link.source();
        let tokens = scan(&source);
        let nodes = parse(&source, &tokens)?;
        trace!(link = name, depth = self.depth, "expanding link");

        let nested = Renderer {
            depth: self.depth + 1,
            ..*self
        };
        nested.render_into(&nodes, scope, out)
    }

    fn render_section(
        &self,
        section: &Section<'_>,
        scope: Scope<'_>,
        out: &mut String,
    ) -> Result<(), TemplateError> {
        let value = scope.resolve(section.path);
        let truthy = value.is_some_and(Value::is_truthy);
        trace!(section = section.path, inverse = section.inverse, truthy, "section");

        if section.inverse {
            if !truthy {
                self.render_into(&section.body, scope, out)?;
            }
            return Ok(());
        }

        let Some(value) = value.filter(|_| truthy) else {
            return Ok(());
        };

        match value {
            Value::Function(f) => {
                out.push_str(&f.call_with_body(section.raw_body).to_string());
            }
            Value::Array(items) => {
                for item in items {
                    self.render_into(&section.body, scope.enter(item), out)?;
                }
            }
            Value::Object(_) => self.render_into(&section.body, scope.enter(value), out)?,
            _ => self.render_into(&section.body, scope, out)?,
        }
        Ok(())
    }
}

fn render_tag(path: &str, escape: bool, scope: Scope<'_>, out: &mut String) {
    let text = match scope.resolve(path) {
        Some(Value::Function(f)) => f.call().to_string(),
        Some(value) => value.to_string(),
        None => return,
    };

    if escape {
        escape_html_into(&text, out);
    } else {
        out.push_str(&text);
    }
}

/// Replace `<` with `&lt` and `>` with `&gt`. No other character is
/// touched and no trailing semicolon is written.
pub fn escape_html_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt"),
            '>' => out.push_str("&gt"),
            _ => out.push(c),
        }
    }
}
