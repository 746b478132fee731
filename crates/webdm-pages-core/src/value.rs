//! The null-coalescing value fallback with its zero exception.
//!
//! The original compiled templates resolved every interpolated value through
//! `v || v === 0 ? v : ''`: falsy values render as nothing, except the
//! number zero, which is meaningful data and must survive. [`resolve`]
//! reproduces that rule over [`serde_json::Value`] as the explicit
//! `is_truthy || is_zero` conditional; a generic falsy check would silently
//! drop zeros.

use std::borrow::Cow;

use serde_json::Value;

/// Resolve a context value to the text a template interpolates.
///
/// Truthy values and the number zero render as themselves; `null`, `false`,
/// and the empty string render as the empty string. The result is not yet
/// escaped; callers pass it through [`crate::escape::html`].
pub fn resolve(value: &Value) -> Cow<'_, str> {
    if is_truthy(value) || is_zero(value) {
        text(value)
    } else {
        Cow::Borrowed("")
    }
}

/// Truthiness of a JSON value: `null` and `false` are falsy, numbers are
/// falsy at zero, strings are falsy when empty, collections are truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The exception to the falsy rule: a numeric zero is present data.
fn is_zero(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.as_f64() == Some(0.0))
}

/// Text form of a value that passed resolution. Strings are borrowed
/// verbatim; numbers and `true` use their JSON formatting.
fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_zero_is_kept() {
        assert_eq!(resolve(&json!(0)), "0");
    }

    #[test]
    fn test_resolve_float_zero_is_kept() {
        assert_eq!(resolve(&json!(0.0)), "0.0");
    }

    #[test]
    fn test_resolve_nonzero_number() {
        assert_eq!(resolve(&json!(42)), "42");
        assert_eq!(resolve(&json!(-1.5)), "-1.5");
    }

    #[test]
    fn test_resolve_null_is_empty() {
        assert_eq!(resolve(&Value::Null), "");
    }

    #[test]
    fn test_resolve_false_is_empty() {
        assert_eq!(resolve(&json!(false)), "");
    }

    #[test]
    fn test_resolve_true_renders() {
        assert_eq!(resolve(&json!(true)), "true");
    }

    #[test]
    fn test_resolve_empty_string_is_empty() {
        assert_eq!(resolve(&json!("")), "");
    }

    #[test]
    fn test_resolve_string_passthrough() {
        assert_eq!(resolve(&json!("a description")), "a description");
    }

    #[test]
    fn test_resolve_borrows_strings() {
        let value = json!("borrowed");
        assert!(matches!(resolve(&value), Cow::Borrowed(_)));
    }
}
