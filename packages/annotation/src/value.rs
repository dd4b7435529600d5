//! Annotation Values
//!
//! The tagged union every extracted annotation payload is expressed in, plus
//! typed conversion out of it for field writers.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;

use crate::error::{AnnotationError, Result};

/// Ordered name -> value map used for property lists
pub type AnnotationMap = IndexMap<String, AnnotationValue>;

/// Value of an annotation or of one of its properties
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<AnnotationValue>),
    Map(AnnotationMap),
}

impl AnnotationValue {
    /// Human readable name of the variant, used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            AnnotationValue::Null => "null",
            AnnotationValue::Bool(_) => "bool",
            AnnotationValue::Number(_) => "number",
            AnnotationValue::String(_) => "string",
            AnnotationValue::Sequence(_) => "sequence",
            AnnotationValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnnotationValue::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, AnnotationValue::Map(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, AnnotationValue::Sequence(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnnotationValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnnotationValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<AnnotationValue>> {
        match self {
            AnnotationValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&AnnotationMap> {
        match self {
            AnnotationValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a property of a map value
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        match self {
            AnnotationValue::Map(map) => map.get(key),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for AnnotationValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AnnotationValue::Null,
            serde_json::Value::Bool(b) => AnnotationValue::Bool(b),
            serde_json::Value::Number(n) => AnnotationValue::Number(n),
            serde_json::Value::String(s) => AnnotationValue::String(s),
            serde_json::Value::Array(items) => {
                AnnotationValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(object) => AnnotationValue::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<AnnotationValue> for serde_json::Value {
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Null => serde_json::Value::Null,
            AnnotationValue::Bool(b) => serde_json::Value::Bool(b),
            AnnotationValue::Number(n) => serde_json::Value::Number(n),
            AnnotationValue::String(s) => serde_json::Value::String(s),
            AnnotationValue::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            AnnotationValue::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for AnnotationValue {
    fn from(b: bool) -> Self {
        AnnotationValue::Bool(b)
    }
}

impl From<i64> for AnnotationValue {
    fn from(n: i64) -> Self {
        AnnotationValue::Number(n.into())
    }
}

impl From<f64> for AnnotationValue {
    /// Non-finite floats have no JSON number form and become `Null`
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(AnnotationValue::Number)
            .unwrap_or(AnnotationValue::Null)
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::String(s.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::String(s)
    }
}

impl<T: Into<AnnotationValue>> From<Vec<T>> for AnnotationValue {
    fn from(items: Vec<T>) -> Self {
        AnnotationValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Conversion from an annotation value into a concrete field type
pub trait FromAnnotationValue: Sized {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self>;
}

impl FromAnnotationValue for AnnotationValue {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        Ok(value)
    }
}

impl FromAnnotationValue for bool {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::Bool(b) => Ok(b),
            other => Err(AnnotationError::mismatch("bool", other.type_name())),
        }
    }
}

impl FromAnnotationValue for String {
    /// Any scalar is accepted and rendered; containers are rejected
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::String(s) => Ok(s),
            AnnotationValue::Number(n) => Ok(n.to_string()),
            AnnotationValue::Bool(b) => Ok(b.to_string()),
            other => Err(AnnotationError::mismatch("string", other.type_name())),
        }
    }
}

macro_rules! impl_from_annotation_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromAnnotationValue for $ty {
                fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
                    let number = match value {
                        AnnotationValue::Number(n) => n,
                        other => {
                            return Err(AnnotationError::mismatch("integer", other.type_name()))
                        }
                    };
                    let wide = if let Some(i) = number.as_i64() {
                        i128::from(i)
                    } else if let Some(u) = number.as_u64() {
                        i128::from(u)
                    } else {
                        return Err(AnnotationError::mismatch("integer", "float"));
                    };
                    <$ty>::try_from(wide).map_err(|_| AnnotationError::OutOfRange {
                        value: number.to_string(),
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

impl_from_annotation_int!(i64, i32, u64, u32, usize);

impl FromAnnotationValue for f64 {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::Number(n) => n
                .as_f64()
                .ok_or_else(|| AnnotationError::mismatch("float", "number")),
            other => Err(AnnotationError::mismatch("float", other.type_name())),
        }
    }
}

impl FromAnnotationValue for f32 {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        f64::from_annotation_value(value).map(|f| f as f32)
    }
}

impl<T: FromAnnotationValue> FromAnnotationValue for Option<T> {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::Null => Ok(None),
            other => T::from_annotation_value(other).map(Some),
        }
    }
}

impl<T: FromAnnotationValue> FromAnnotationValue for Vec<T> {
    /// A lone scalar becomes a one-element vector
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::Sequence(items) => items
                .into_iter()
                .map(T::from_annotation_value)
                .collect(),
            AnnotationValue::Map(_) => Err(AnnotationError::mismatch("sequence", "map")),
            scalar => T::from_annotation_value(scalar).map(|item| vec![item]),
        }
    }
}

impl<T: FromAnnotationValue> FromAnnotationValue for IndexMap<String, T> {
    fn from_annotation_value(value: AnnotationValue) -> Result<Self> {
        match value {
            AnnotationValue::Map(map) => map
                .into_iter()
                .map(|(key, value)| T::from_annotation_value(value).map(|v| (key, v)))
                .collect(),
            other => Err(AnnotationError::mismatch("map", other.type_name())),
        }
    }
}
