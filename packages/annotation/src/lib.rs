#![deny(clippy::all)]

//! Docblock Annotations
//!
//! Extracts `@name value` and `@name(prop = value)` annotations from comment
//! text and injects them into the fields of destination objects.

// Core modules
pub mod case;
pub mod config;
mod error;
pub mod extractor;
pub mod injector;
pub mod interpreter;
pub mod introspect;
pub mod store;
pub mod value;

// Re-exports
pub use case::CaseConvention;
pub use config::InjectorConfig;
pub use error::{AnnotationError, Result as AnnotationResult};
pub use extractor::{extract, AnnotationEntry, AnnotationPayload, Extractor};
pub use injector::{Annotation, Injector};
pub use interpreter::interpret;
pub use introspect::{FieldDescriptor, FieldWriter, Introspect};
pub use store::AnnotationStore;
pub use value::{AnnotationMap, AnnotationValue, FromAnnotationValue};
