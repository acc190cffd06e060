//! Named link table for `{@name}` tags.
//!
//! A link holds template text that is rendered in place of the tag, against
//! whatever context is current where the tag appears.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One entry of a [`Links`] table.
#[derive(Clone)]
pub enum Link {
    /// Template text used as is.
    Template(String),
    /// A closure producing the template text at render time.
    Function(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Link {
    /// The template text this link expands to.
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            Link::Template(text) => Cow::Borrowed(text),
            Link::Function(f) => Cow::Owned(f()),
        }
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::Template(text) => f.debug_tuple("Template").field(text).finish(),
            Link::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A table of named links.
#[derive(Debug, Clone, Default)]
pub struct Links {
    entries: BTreeMap<String, Link>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link whose value is template text.
    pub fn with(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.entries
            .insert(name.into(), Link::Template(template.into()));
        self
    }

    /// Add a link whose template text comes from a closure.
    pub fn with_fn<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Link::Function(Arc::new(f)));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, link: Link) -> Option<Link> {
        self.entries.insert(name.into(), link)
    }

    pub fn get(&self, name: &str) -> Option<&Link> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a table from a JSON object whose values are all strings.
    ///
    /// Returns the name of the first offending key when a value is not a
    /// string, or `None` as the key when the document is not an object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, Option<String>> {
        let serde_json::Value::Object(map) = json else {
            return Err(None);
        };

        let mut links = Links::new();
        for (name, value) in map {
            match value {
                serde_json::Value::String(template) => {
                    links.insert(name, Link::Template(template));
                }
                _ => return Err(Some(name)),
            }
        }
        Ok(links)
    }
}
