//! Builder for constructing calculator sessions.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::enforcement::{InvalidNumberStrategy, NumberPolicy};
use crate::machine::Calculator;

/// Builder for configuring a calculator with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the permissive defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Choose how typed operands are checked.
    pub fn number_policy(mut self, policy: NumberPolicy) -> Self {
        self.config.number_policy = policy;
        self
    }

    /// Choose what happens after an operand is refused.
    pub fn on_invalid_number(mut self, strategy: InvalidNumberStrategy) -> Self {
        self.config.on_invalid_number = strategy;
        self
    }

    /// Ignore digit and decimal presses once the display holds `len` characters.
    pub fn max_entry_len(mut self, len: usize) -> Self {
        self.config.max_entry_len = Some(len);
        self
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator.
    /// Returns an error if the configuration is inconsistent.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        Ok(Calculator::with_config(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_matches_new() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.rules(), Calculator::new().rules());
    }

    #[test]
    fn builder_rejects_zero_entry_limit() {
        let result = CalculatorBuilder::new().max_entry_len(0).build();
        assert!(matches!(result, Err(BuildError::ZeroEntryLimit)));
    }

    #[test]
    fn fluent_api_sets_rules() {
        let calc = CalculatorBuilder::new()
            .number_policy(NumberPolicy::Strict)
            .on_invalid_number(InvalidNumberStrategy::ClearAndNotify)
            .build()
            .unwrap();

        assert_eq!(calc.rules().policy(), NumberPolicy::Strict);
        assert_eq!(
            calc.rules().violation_strategy(),
            InvalidNumberStrategy::ClearAndNotify
        );
    }

    #[test]
    fn from_config_carries_settings() {
        let config = CalculatorConfig {
            max_entry_len: Some(15),
            ..CalculatorConfig::default()
        };
        let builder = CalculatorBuilder::from_config(config);
        assert_eq!(builder.config().max_entry_len, Some(15));
        assert!(builder.build().is_ok());
    }
}
