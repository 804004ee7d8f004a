//! Serializable calculator configuration.

use crate::builder::error::BuildError;
use crate::enforcement::{InvalidNumberStrategy, NumberPolicy};
use serde::{Deserialize, Serialize};

/// Settings a shell can keep alongside its own preferences.
///
/// Every field is optional in serialized form; missing fields take the
/// defaults, which reproduce a plain permissive keypad.
///
/// ```rust
/// use reckon::builder::CalculatorConfig;
/// use reckon::enforcement::NumberPolicy;
///
/// let config = CalculatorConfig::from_json(r#"{ "number_policy": "strict" }"#).unwrap();
/// assert_eq!(config.number_policy, NumberPolicy::Strict);
/// assert_eq!(config.max_entry_len, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub number_policy: NumberPolicy,
    pub on_invalid_number: InvalidNumberStrategy,
    pub max_entry_len: Option<usize>,
}

impl CalculatorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_entry_len == Some(0) {
            return Err(BuildError::ZeroEntryLimit);
        }
        Ok(())
    }
}
