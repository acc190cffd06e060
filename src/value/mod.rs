//! Data values that templates are rendered against.
//!
//! A [`Value`] is one of a closed set of kinds. Tags and sections dispatch on
//! the kind: scalars are printed, objects become the new context of a
//! section, arrays repeat a section and functions are called.

mod context;
mod convert;
mod function;

#[cfg(test)]
mod tests;

pub use context::Context;
pub use function::Function;

use std::fmt;

/// A value stored in a [`Context`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Context),
    Function(Function),
}

impl Value {
    /// Section gating: `false`, `0`, an empty array, null and missing values
    /// are untruthy; everything else is truthy, including empty objects and
    /// empty strings.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Array(items) => !items.is_empty(),
            Value::String(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    pub fn as_object(&self) -> Option<&Context> {
        match self {
            Value::Object(context) => Some(context),
            _ => None,
        }
    }

    /// Look up one path segment: a key of an object, or an index into an array.
    pub fn get(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(context) => context.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Object(_) | Value::Function(_) => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.is_finite() && *n == n.floor() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}
