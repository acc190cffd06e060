//! Wings: a small string template renderer.
//!
//! A template is rendered against a [`Context`] of values and an optional
//! table of [`Links`]. Tags substitute values, sections gate or repeat
//! their body, links splice in other templates, and doubled braces produce
//! literal braces.
//!
//! ```
//! use wings::{Context, render};
//!
//! let ctx = Context::new().with("items", vec!["a", "b"]);
//! assert_eq!(render("{:items}[{}]{/items}", &ctx).unwrap(), "[a][b]");
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod links;
pub mod template;
pub mod value;

pub use config::{Config, MissingLinkPolicy};
pub use error::{Result, WingsError};
pub use links::{Link, Links};
pub use template::{TemplateError, check, render, render_with, render_with_links};
pub use value::{Context, Function, Value};
