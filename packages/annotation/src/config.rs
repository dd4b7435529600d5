//! Injector Configuration

use serde::Deserialize;

use crate::case::CaseConvention;
use crate::error::Result;
use crate::store::{MULTIPLE_VALUES_KEY, SINGLE_VALUE_KEY};

/// Injector configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectorConfig {
    /// Field a lone scalar is routed to when the destination has several fields
    pub single_value_field: String,
    /// Field a sequence is routed to when the destination has several fields
    pub multiple_values_field: String,
    /// Case conventions tried, in order, after the exact field name
    pub conventions: Vec<CaseConvention>,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        InjectorConfig {
            single_value_field: SINGLE_VALUE_KEY.to_string(),
            multiple_values_field: MULTIPLE_VALUES_KEY.to_string(),
            conventions: CaseConvention::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl InjectorConfig {
    /// Load a configuration from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = InjectorConfig::from_json(r#"{"conventions": ["snake", "upper_snake"]}"#)
            .unwrap();
        assert_eq!(config.single_value_field, "value");
        assert_eq!(config.multiple_values_field, "values");
        assert_eq!(
            config.conventions,
            vec![CaseConvention::Snake, CaseConvention::UpperSnake]
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(InjectorConfig::from_json(r#"{"casing": []}"#).is_err());
    }
}
