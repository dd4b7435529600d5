//! Value Interpreter
//!
//! Coerces the raw text of an annotation value into a typed `AnnotationValue`.
//! Anything that decodes as a JSON literal takes its decoded form; everything
//! else stays a plain string.

use crate::value::AnnotationValue;

/// Interpret a raw annotation value
///
/// `"42"` becomes a number, `"false"` a bool, `"[1, 2]"` a sequence and
/// `"\"quoted\""` the unquoted string. Text that is not a JSON literal, such
/// as `FooBar`, is returned trimmed but otherwise untouched.
pub fn interpret(raw: &str) -> AnnotationValue {
    let raw = raw.trim();
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(decoded) => decoded.into(),
        Err(_) => AnnotationValue::String(raw.to_string()),
    }
}

/// Interpret an optional raw value; a missing value means the annotation was
/// only present, which reads as `true`
pub fn interpret_or_present(raw: Option<&str>) -> AnnotationValue {
    match raw {
        Some(raw) => interpret(raw),
        None => AnnotationValue::Bool(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_present() {
        assert_eq!(interpret_or_present(None), AnnotationValue::Bool(true));
        assert_eq!(interpret_or_present(Some("7")), AnnotationValue::from(7i64));
    }

    #[test]
    fn test_empty_text_stays_string() {
        assert_eq!(interpret("   "), AnnotationValue::from(""));
    }
}
