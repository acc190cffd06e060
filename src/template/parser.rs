//! Structural parser that groups scanner tokens into a node tree.
//!
//! Marker prefixes:
//!
//! - `#...#` - Comment
//! - `:name` / `!name` - Open a regular / inverse section
//! - `/name` - Close the innermost section, which must carry the same name
//! - `&name` - Unescaped tag
//! - `@name` - Link
//! - anything else - Escaped tag (the whole content is the path)
//!
//! Names are trimmed of surrounding whitespace and compared case-sensitively.

use super::error::TemplateError;
use super::node::{Node, Section, Template};
use super::scanner::Token;

/// An open section waiting for its close tag.
struct Frame<'a> {
    name: &'a str,
    inverse: bool,
    /// Position of the opening marker.
    position: usize,
    /// Byte offset where the body's source text starts.
    body_start: usize,
    body: Vec<Node<'a>>,
}

/// Build a template tree from the tokens of `source`.
///
/// `tokens` must come from scanning `source`; token positions are used to
/// slice each section's raw body out of it.
pub fn parse<'a>(source: &'a str, tokens: &[Token<'a>]) -> Result<Template<'a>, TemplateError> {
    let mut root: Vec<Node<'a>> = Vec::new();
    let mut stack: Vec<Frame<'a>> = Vec::new();

    for token in tokens {
        let (content, position) = match *token {
            Token::Literal { text, .. } => {
                current_body(&mut root, &mut stack).push(Node::Text(text));
                continue;
            }
            Token::Marker { content, position } => (content, position),
        };

        if is_comment(content) {
            current_body(&mut root, &mut stack).push(Node::Comment);
            continue;
        }

        let (sigil, rest) = split_sigil(content);
        let name = rest.trim();
        match sigil {
            Some(':') | Some('!') => stack.push(Frame {
                name,
                inverse: sigil == Some('!'),
                position,
                body_start: position + content.len() + 2,
                body: Vec::new(),
            }),
            Some('/') => {
                let frame = stack.pop().ok_or_else(|| TemplateError::UnexpectedClose {
                    name: name.to_string(),
                    position,
                })?;
                if frame.name != name {
                    return Err(TemplateError::MismatchedClose {
                        expected: frame.name.to_string(),
                        found: name.to_string(),
                        position,
                    });
                }
                let section = Section {
                    path: frame.name,
                    inverse: frame.inverse,
                    body: trim_body(frame.body),
                    raw_body: &source[frame.body_start..position],
                };
                current_body(&mut root, &mut stack).push(Node::Section(section));
            }
            Some('&') => current_body(&mut root, &mut stack).push(Node::Tag {
                path: name,
                escape: false,
            }),
            Some('@') => current_body(&mut root, &mut stack).push(Node::Link(name)),
            _ => current_body(&mut root, &mut stack).push(Node::Tag {
                path: content.trim(),
                escape: true,
            }),
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(TemplateError::UnclosedSection {
            name: frame.name.to_string(),
            position: frame.position,
        });
    }

    Ok(root)
}

fn current_body<'s, 'a>(
    root: &'s mut Vec<Node<'a>>,
    stack: &'s mut [Frame<'a>],
) -> &'s mut Vec<Node<'a>> {
    match stack.last_mut() {
        Some(frame) => &mut frame.body,
        None => root,
    }
}

fn is_comment(content: &str) -> bool {
    content.starts_with('#') && content.ends_with('#')
}

fn split_sigil(content: &str) -> (Option<char>, &str) {
    match content.chars().next() {
        Some(c @ (':' | '!' | '/' | '&' | '@')) => (Some(c), &content[1..]),
        _ => (None, content),
    }
}

/// Drop whitespace hugging the inside of the section tags.
fn trim_body<'a>(mut body: Vec<Node<'a>>) -> Vec<Node<'a>> {
    if let Some(Node::Text(text)) = body.first_mut() {
        let original: &'a str = *text;
        *text = original.trim_start();
        if text.is_empty() {
            body.remove(0);
        }
    }
    if let Some(Node::Text(text)) = body.last_mut() {
        let original: &'a str = *text;
        *text = original.trim_end();
        if text.is_empty() {
            body.pop();
        }
    }
    body
}
