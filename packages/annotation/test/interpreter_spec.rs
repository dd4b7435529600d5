//! Value Interpreter Tests

use docblock_annotation::{interpret, AnnotationValue};
use serde_json::json;

#[test]
fn should_decode_numbers() {
    assert_eq!(interpret("42"), AnnotationValue::from(42i64));
    assert_eq!(interpret("4.2"), AnnotationValue::from(4.2));
    assert_eq!(interpret(" -7 "), AnnotationValue::from(-7i64));
}

#[test]
fn should_decode_booleans_and_null() {
    assert_eq!(interpret("true"), AnnotationValue::Bool(true));
    assert_eq!(interpret("false"), AnnotationValue::Bool(false));
    assert_eq!(interpret("null"), AnnotationValue::Null);
}

#[test]
fn should_unquote_json_strings() {
    assert_eq!(interpret(r#""quoted text""#), AnnotationValue::from("quoted text"));
}

#[test]
fn should_decode_arrays_and_objects() {
    assert_eq!(
        interpret("[1, \"two\", false]"),
        AnnotationValue::from(json!([1, "two", false]))
    );
    let object = interpret(r#"{"min": 1, "max": 10}"#);
    assert_eq!(object.get("min"), Some(&AnnotationValue::from(1i64)));
    assert_eq!(object.get("max"), Some(&AnnotationValue::from(10i64)));
}

#[test]
fn should_fall_back_to_the_trimmed_string() {
    assert_eq!(interpret("  FooBar "), AnnotationValue::from("FooBar"));
    assert_eq!(interpret("foo = Test"), AnnotationValue::from("foo = Test"));
    assert_eq!(interpret("[unterminated"), AnnotationValue::from("[unterminated"));
    assert_eq!(interpret("True"), AnnotationValue::from("True"));
}

#[test]
fn should_keep_integers_and_floats_apart() {
    assert_eq!(interpret("42").as_i64(), Some(42));
    assert_eq!(interpret("42.0").as_i64(), None);
    assert_eq!(interpret("42.0").as_f64(), Some(42.0));
}

#[test]
fn should_expose_the_decoded_variant() {
    assert!(interpret("null").is_null());
    assert!(!interpret("0").is_null());
    assert_eq!(interpret("false").as_bool(), Some(false));
    assert_eq!(interpret("FooBar").as_str(), Some("FooBar"));
    assert_eq!(interpret("1").as_str(), None);
    assert_eq!(
        interpret("[1, 2]").as_sequence(),
        Some(&vec![AnnotationValue::from(1i64), AnnotationValue::from(2i64)])
    );
    assert_eq!(interpret("{}").as_sequence(), None);
}
