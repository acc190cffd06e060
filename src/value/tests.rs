//! Tests for values, contexts and conversions.

use super::{Context, Function, Value};
use serde_json::json;

#[test]
fn test_truthiness() {
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Number(0.0).is_truthy());
    assert!(!Value::Array(vec![]).is_truthy());
    assert!(!Value::Null.is_truthy());

    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(1.0).is_truthy());
    assert!(Value::Number(-0.5).is_truthy());
    assert!(Value::from(vec![0]).is_truthy());
    assert!(Value::Object(Context::new()).is_truthy());
    assert!(Value::from("").is_truthy());
    assert!(Value::from(Function::new(|| false)).is_truthy());
}

#[test]
fn test_display_numbers() {
    assert_eq!(Value::from(1).to_string(), "1");
    assert_eq!(Value::from(-42).to_string(), "-42");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
}

#[test]
fn test_display_other_kinds() {
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::from(Context::new().with("a", 1)).to_string(), "");
    assert_eq!(Value::from(Function::new(|| "x")).to_string(), "");
}

#[test]
fn test_resolve_dotted_path() {
    let ctx = Context::new().with("a", Context::new().with("b", Context::new().with("c", "deep")));
    assert_eq!(ctx.resolve("a.b.c"), Some(&Value::from("deep")));
    assert!(ctx.resolve("a.x.c").is_none());
    assert!(ctx.resolve("missing").is_none());
}

#[test]
fn test_resolve_through_scalar_is_a_miss() {
    let ctx = Context::new().with("a", "scalar");
    assert!(ctx.resolve("a.b").is_none());
}

#[test]
fn test_resolve_array_index() {
    let ctx = Context::new().with("list", vec!["x", "y"]);
    assert_eq!(ctx.resolve("list.1"), Some(&Value::from("y")));
    assert!(ctx.resolve("list.2").is_none());
    assert!(ctx.resolve("list.first").is_none());
}

#[test]
fn test_function_calls() {
    let plain = Function::new(|| "plain");
    assert_eq!(plain.call(), Value::from("plain"));
    assert_eq!(plain.call_with_body("ignored"), Value::from("plain"));

    let body = Function::with_body(|s: &str| s.len());
    assert_eq!(body.call(), Value::from(0));
    assert_eq!(body.call_with_body("abc"), Value::from(3));
}

#[test]
fn test_function_equality_is_identity() {
    let f = Function::new(|| 1);
    let g = Function::new(|| 1);
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn test_from_json() {
    let value = Value::from(json!({
        "name": "wings",
        "count": 3,
        "flags": [true, false],
        "nested": { "empty": null }
    }));

    let ctx = value.as_object().unwrap();
    assert_eq!(ctx.get("name"), Some(&Value::from("wings")));
    assert_eq!(ctx.get("count"), Some(&Value::Number(3.0)));
    assert_eq!(ctx.get("flags"), Some(&Value::from(vec![true, false])));
    assert_eq!(ctx.resolve("nested.empty"), Some(&Value::Null));
}

#[test]
fn test_context_from_iterator() {
    let ctx: Context = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(ctx.len(), 2);
    let keys: Vec<&str> = ctx.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_option_conversion() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}
