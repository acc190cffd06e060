//! Error type for template parsing and rendering failures.

use thiserror::Error;

/// Errors raised while parsing or rendering a template.
///
/// Positions are byte offsets into the template text that was being parsed.
/// For templates reached through a link, the offset is relative to the
/// link's template, not the outer one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A section was opened but the template ended before its close tag.
    #[error("unclosed section '{name}' opened at position {position}")]
    UnclosedSection {
        /// The name of the section.
        name: String,
        /// Position of the opening tag.
        position: usize,
    },

    /// A close tag named a different section than the innermost open one.
    #[error("mismatched close tag '{{/{found}}}' at position {position}: expected '{{/{expected}}}'")]
    MismatchedClose {
        /// The name of the innermost open section.
        expected: String,
        /// The name found in the close tag.
        found: String,
        /// Position of the close tag.
        position: usize,
    },

    /// A close tag appeared while no section was open.
    #[error("close tag '{{/{name}}}' at position {position} has no open section")]
    UnexpectedClose {
        /// The name found in the close tag.
        name: String,
        /// Position of the close tag.
        position: usize,
    },

    /// A `{@name}` tag referenced a link missing from the link table.
    #[error("undefined link '{name}'")]
    MissingLink {
        /// The name of the missing link.
        name: String,
    },

    /// Links kept expanding into further links past the configured limit.
    #[error("link '{name}' exceeds the maximum link depth of {limit}")]
    LinkDepthExceeded {
        /// The link being expanded when the limit was hit.
        name: String,
        /// The configured limit.
        limit: u32,
    },
}

impl TemplateError {
    /// Returns true for errors caused by unbalanced section tags.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TemplateError::UnclosedSection { .. }
                | TemplateError::MismatchedClose { .. }
                | TemplateError::UnexpectedClose { .. }
        )
    }
}
