use super::Value;
use std::fmt;
use std::sync::Arc;

type Callback = dyn Fn(&str) -> Value + Send + Sync;

/// A callable context value.
///
/// As a tag it is called with no body and its result is printed. As a
/// section it is called with the section's raw body text and its result
/// replaces the whole section.
#[derive(Clone)]
pub struct Function(Arc<Callback>);

impl Function {
    /// Wrap a closure that takes no arguments. Any section body is ignored.
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        Function(Arc::new(move |_: &str| -> Value { f().into() }))
    }

    /// Wrap a closure that receives a section's raw body.
    ///
    /// Used as a tag, the closure receives an empty string.
    pub fn with_body<F, V>(f: F) -> Self
    where
        F: Fn(&str) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        Function(Arc::new(move |body: &str| -> Value { f(body).into() }))
    }

    pub fn call(&self) -> Value {
        (self.0)("")
    }

    pub fn call_with_body(&self, body: &str) -> Value {
        (self.0)(body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

/// Two functions are equal only when they share the same closure.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
