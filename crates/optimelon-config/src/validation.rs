// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as weight bounds, known intent names, and non-empty priority lists.

use std::collections::HashSet;
use std::str::FromStr;

use optimelon_core::Intent;

use crate::diagnostic::ConfigError;
use crate::model::OptimelonConfig;

/// Accepted values for `agent.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &OptimelonConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` must be one of: {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let routing = &config.routing;

    for (key, value) in [
        ("phrase_weight", routing.phrase_weight),
        ("token_weight", routing.token_weight),
        ("confidence_step", routing.confidence_step),
    ] {
        if value < 1 {
            errors.push(ConfigError::Validation {
                message: format!("routing.{key} must be at least 1"),
            });
        }
    }

    if routing.confidence_cap > 100 {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.confidence_cap must be at most 100, got {}",
                routing.confidence_cap
            ),
        });
    }

    if routing.confidence_base >= routing.confidence_cap {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.confidence_base ({}) must be below routing.confidence_cap ({})",
                routing.confidence_base, routing.confidence_cap
            ),
        });
    }

    for (name, models) in &routing.priorities {
        match Intent::from_str(name) {
            Ok(Intent::General) => errors.push(ConfigError::Validation {
                message: "routing.priorities.general cannot be overridden; \
                          set catalog.default_model instead"
                    .to_string(),
            }),
            Ok(_) => {}
            Err(_) => errors.push(ConfigError::Validation {
                message: format!(
                    "routing.priorities.{name} is not a known intent (expected one of: {})",
                    Intent::ALL
                        .iter()
                        .filter(|i| **i != Intent::General)
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }),
        }

        if models.is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("routing.priorities.{name} must list at least one model"),
            });
        }

        let mut seen = HashSet::new();
        for model in models {
            if model.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("routing.priorities.{name} contains an empty model id"),
                });
            } else if !seen.insert(model.as_str()) {
                errors.push(ConfigError::Validation {
                    message: format!("duplicate model `{model}` in routing.priorities.{name}"),
                });
            }
        }
    }

    let catalog = &config.catalog;

    if catalog.default_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "catalog.default_model must not be empty".to_string(),
        });
    }

    if catalog.disabled_models.contains(&catalog.default_model) {
        errors.push(ConfigError::Validation {
            message: format!(
                "catalog.default_model `{}` cannot also appear in catalog.disabled_models",
                catalog.default_model
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = OptimelonConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "agent.log_level"));
    }

    #[test]
    fn confidence_cap_above_100_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.confidence_cap = 120;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "confidence_cap must be at most 100"));
    }

    #[test]
    fn base_above_cap_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.confidence_base = 96;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "confidence_base"));
    }

    #[test]
    fn zero_phrase_weight_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.phrase_weight = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "phrase_weight"));
    }

    #[test]
    fn zero_token_weight_and_step_fail_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.token_weight = 0;
        config.routing.confidence_step = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "routing.token_weight must be at least 1"));
        assert!(has_error(&errors, "routing.confidence_step must be at least 1"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn base_equal_to_cap_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.confidence_base = 95;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "must be below routing.confidence_cap"));
    }

    #[test]
    fn unknown_intent_priority_fails_validation() {
        let mut config = OptimelonConfig::default();
        config
            .routing
            .priorities
            .insert("poetry".to_string(), vec!["a/b".to_string()]);
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "routing.priorities.poetry is not a known intent"));
    }

    #[test]
    fn general_priority_override_fails_validation() {
        let mut config = OptimelonConfig::default();
        config
            .routing
            .priorities
            .insert("general".to_string(), vec!["a/b".to_string()]);
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "general cannot be overridden"));
    }

    #[test]
    fn empty_and_duplicate_priorities_fail_validation() {
        let mut config = OptimelonConfig::default();
        config.routing.priorities.insert("coding".to_string(), vec![]);
        config.routing.priorities.insert(
            "image".to_string(),
            vec!["x/y".to_string(), "x/y".to_string()],
        );
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "routing.priorities.coding must list"));
        assert!(has_error(&errors, "duplicate model `x/y`"));
    }

    #[test]
    fn disabled_default_model_fails_validation() {
        let mut config = OptimelonConfig::default();
        config.catalog.disabled_models = vec![config.catalog.default_model.clone()];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "cannot also appear"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = OptimelonConfig::default();
        config.agent.log_level = "loud".to_string();
        config.catalog.default_model = " ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = OptimelonConfig::default();
        config.agent.log_level = "debug".to_string();
        config.routing.confidence_cap = 100;
        config.routing.priorities.insert(
            "coding".to_string(),
            vec!["Qwen/Qwen2.5-Coder-7B-Instruct".to_string()],
        );
        config.catalog.disabled_models = vec!["zai-org/GLM-4.5-Air".to_string()];
        assert!(validate_config(&config).is_ok());
    }
}
