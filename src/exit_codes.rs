//! Exit code constants for the wings CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable config or context)
//! - 2: Template failure (unbalanced section tags)
//! - 3: Link failure (missing link, link recursion too deep)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or malformed context data.
pub const USER_ERROR: i32 = 1;

/// Template failure: a section is unclosed, mismatched, or closed without being opened.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Link failure: a link is missing from the table or links nest too deeply.
pub const LINK_FAILURE: i32 = 3;
