//! Scanner that splits template text into literal runs and tag markers.
//!
//! # Syntax
//!
//! - `{{` - Literal `{`
//! - `}}` - Literal `}`
//! - `{...}` - A marker; its content is everything up to the next `}`
//!
//! Doubled braces win over marker recognition at every position, evaluated
//! greedily left to right. Anything else passes through as literal text,
//! including a lone `}` and a `{` that is never closed.

/// A single token produced by [`scan`].
///
/// Both variants borrow from the scanned text. `position` is the byte offset
/// of the token's first source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal output text. Escaped braces become one-character literals.
    Literal { text: &'a str, position: usize },
    /// The content between a `{` and its closing `}`.
    Marker { content: &'a str, position: usize },
}

/// Scan a template into tokens in source order.
pub fn scan(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let rest = &text[i..];

        if rest.starts_with("{{") {
            tokens.push(Token::Literal {
                text: &text[i..i + 1],
                position: i,
            });
            i += 2;
            continue;
        }

        if rest.starts_with("}}") {
            tokens.push(Token::Literal {
                text: &text[i..i + 1],
                position: i,
            });
            i += 2;
            continue;
        }

        if bytes[i] == b'{' {
            if let Some(len) = rest[1..].find('}') {
                tokens.push(Token::Marker {
                    content: &rest[1..1 + len],
                    position: i,
                });
                i += len + 2;
                continue;
            }
            // Never closed: the remainder is plain text.
            tokens.push(Token::Literal {
                text: rest,
                position: i,
            });
            break;
        }

        // A lone `}` starts the run; the run then stops at the next brace.
        let skip = usize::from(bytes[i] == b'}');
        let len = rest[skip..]
            .find(['{', '}'])
            .map_or(rest.len(), |n| n + skip);
        tokens.push(Token::Literal {
            text: &rest[..len],
            position: i,
        });
        i += len;
    }

    tokens
}
