//! Field Injector
//!
//! Maps the payload stored for an annotation onto the fields of a destination
//! object.
//!
//! Resolution:
//! - a map payload is matched field by field, first by exact name and then by
//!   each configured case convention of the field name
//! - any other payload goes straight into the only field of a single-field
//!   destination
//! - otherwise a sequence is treated as `{values: payload}` and a scalar as
//!   `{value: payload}`, using the configured value field names; those fields
//!   also pick up the `value`/`values` slots of mixed occurrences
//!
//! Fields without a matching key, rejected by `accept_value`, or whose type
//! cannot hold the value keep whatever they held before.

use log::{debug, trace, warn};

use crate::case::candidates;
use crate::config::InjectorConfig;
use crate::introspect::{FieldDescriptor, Introspect};
use crate::store::{AnnotationStore, MULTIPLE_VALUES_KEY, SINGLE_VALUE_KEY};
use crate::value::{AnnotationMap, AnnotationValue};

/// An object populated from one named annotation
pub trait Annotation {
    /// Name of the annotation this object is filled from
    fn name(&self) -> &str;

    /// Gate for every single field assignment
    fn accept_value(&self, _field: &str, _value: &AnnotationValue) -> bool {
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct Injector {
    config: InjectorConfig,
}

impl Injector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InjectorConfig) -> Self {
        Injector { config }
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Write the payload stored under `destination.name()` into `destination`
    ///
    /// Returns `None`, leaving the destination untouched, when the store has
    /// no such annotation.
    pub fn inject<'d, D>(
        &self,
        store: &AnnotationStore,
        destination: &'d mut D,
    ) -> Option<&'d mut D>
    where
        D: Annotation + Introspect,
    {
        let Some(payload) = store.get(destination.name()) else {
            trace!("no annotation @{} to inject", destination.name());
            return None;
        };
        let payload = payload.clone();
        let fields = destination.fields();

        match payload {
            AnnotationValue::Map(map) => self.assign_fields(destination, &fields, &map),
            value if fields.len() == 1 => self.assign(destination, &fields[0], value),
            items @ AnnotationValue::Sequence(_) => {
                let map = wrap(&self.config.multiple_values_field, items);
                self.assign_fields(destination, &fields, &map)
            }
            value => {
                let map = wrap(&self.config.single_value_field, value);
                self.assign_fields(destination, &fields, &map)
            }
        }

        Some(destination)
    }

    fn assign_fields<D>(
        &self,
        destination: &mut D,
        fields: &[FieldDescriptor<D>],
        map: &AnnotationMap,
    ) where
        D: Annotation,
    {
        for field in fields {
            match self.resolve_field(field.name(), map) {
                Some(value) => self.assign(destination, field, value.clone()),
                None => trace!("no key matches field {}", field.name()),
            }
        }
    }

    /// Like `resolve`, with the configured value fields also reading the
    /// `value`/`values` slots a store fills for mixed occurrences
    fn resolve_field<'m>(
        &self,
        field: &str,
        map: &'m AnnotationMap,
    ) -> Option<&'m AnnotationValue> {
        self.resolve(field, map).or_else(|| {
            if field == self.config.single_value_field {
                map.get(SINGLE_VALUE_KEY)
            } else if field == self.config.multiple_values_field {
                map.get(MULTIPLE_VALUES_KEY)
            } else {
                None
            }
        })
    }

    /// Find the value for `field`: exact name first, then each convention
    pub fn resolve<'m>(
        &self,
        field: &str,
        map: &'m AnnotationMap,
    ) -> Option<&'m AnnotationValue> {
        candidates(field, &self.config.conventions)
            .iter()
            .find_map(|name| map.get(name.as_str()))
    }

    fn assign<D>(&self, destination: &mut D, field: &FieldDescriptor<D>, value: AnnotationValue)
    where
        D: Annotation,
    {
        if !destination.accept_value(field.name(), &value) {
            debug!("@{} rejected {:?} for {}", destination.name(), value, field.name());
            return;
        }
        if let Err(err) = field.write(destination, value) {
            warn!("@{}: cannot write {}: {}", destination.name(), field.name(), err);
        }
    }
}

fn wrap(key: &str, value: AnnotationValue) -> AnnotationMap {
    let mut map = AnnotationMap::new();
    map.insert(key.to_string(), value);
    map
}
