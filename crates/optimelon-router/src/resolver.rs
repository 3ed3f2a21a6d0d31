// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent to model id resolution against a live catalog.

use std::str::FromStr;

use optimelon_config::model::RoutingConfig;
use optimelon_core::{Intent, ModelCatalog, OptimelonError};
use tracing::warn;

use crate::rules::default_priority;

/// Ordered model preferences per intent.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    /// One entry per intent, in `Intent::ALL` order.
    priorities: Vec<(Intent, Vec<String>)>,
}

impl ModelResolver {
    /// Built-in priorities; `General` resolves to `default_model_id`.
    pub fn new(default_model_id: &str) -> Self {
        let priorities = Intent::ALL
            .iter()
            .map(|&intent| (intent, Self::base_priority(intent, default_model_id)))
            .collect();
        Self { priorities }
    }

    /// Built-in priorities with per-intent overrides.
    ///
    /// `General` cannot be overridden and every list must be non-empty.
    pub fn with_overrides(
        default_model_id: &str,
        overrides: impl IntoIterator<Item = (Intent, Vec<String>)>,
    ) -> Result<Self, OptimelonError> {
        let mut resolver = Self::new(default_model_id);
        for (intent, models) in overrides {
            if intent == Intent::General {
                return Err(OptimelonError::Config(
                    "the general priority list is always the default model".to_string(),
                ));
            }
            if models.is_empty() {
                return Err(OptimelonError::Config(format!(
                    "priority list for `{intent}` is empty"
                )));
            }
            if let Some(entry) = resolver.priorities.iter_mut().find(|(i, _)| *i == intent) {
                entry.1 = models;
            }
        }
        resolver.validate(default_model_id)?;
        Ok(resolver)
    }

    /// Priorities from the `[routing.priorities]` table.
    pub fn from_config(
        config: &RoutingConfig,
        default_model_id: &str,
    ) -> Result<Self, OptimelonError> {
        let overrides = config
            .priorities
            .iter()
            .map(|(name, models)| {
                Intent::from_str(name)
                    .map(|intent| (intent, models.clone()))
                    .map_err(|_| OptimelonError::UnknownIntent {
                        value: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_overrides(default_model_id, overrides)
    }

    /// Ordered candidates for `intent`.
    pub fn priority(&self, intent: Intent) -> &[String] {
        self.priorities
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, models)| models.as_slice())
            .unwrap_or(&[])
    }

    /// First candidate for `intent` present in `catalog`, else the catalog default.
    ///
    /// `General` always resolves to the catalog default, so a router built for
    /// one default follows whichever catalog it is handed. Exact id equality
    /// only. Never mutates the catalog.
    pub fn resolve(&self, intent: Intent, catalog: &dyn ModelCatalog) -> String {
        if intent == Intent::General {
            return catalog.default_model_id().to_string();
        }
        if let Some(id) = self.priority(intent).iter().find(|id| catalog.contains(id)) {
            return id.clone();
        }

        let fallback = catalog.default_model_id();
        warn!(
            intent = %intent,
            fallback,
            "no prioritized model available, using catalog default"
        );
        fallback.to_string()
    }

    fn base_priority(intent: Intent, default_model_id: &str) -> Vec<String> {
        match intent {
            Intent::General => vec![default_model_id.to_string()],
            other => default_priority(other),
        }
    }

    fn validate(&self, default_model_id: &str) -> Result<(), OptimelonError> {
        for &intent in &Intent::ALL {
            if self.priority(intent).is_empty() {
                return Err(OptimelonError::Config(format!(
                    "intent `{intent}` has no model priority entries"
                )));
            }
        }
        if self.priority(Intent::General) != [default_model_id.to_string()] {
            return Err(OptimelonError::Config(
                "general priority list must be exactly the default model".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tracing_test::traced_test;

    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::registry::DEFAULT_MODEL_ID;

    const CODER_480B: &str = "Qwen/Qwen3-Coder-480B-A35B-Instruct";
    const CODER_7B: &str = "Qwen/Qwen2.5-Coder-7B-Instruct";

    #[test]
    fn every_intent_has_priorities() {
        let resolver = ModelResolver::new(DEFAULT_MODEL_ID);
        for intent in Intent::ALL {
            assert!(!resolver.priority(intent).is_empty(), "{intent}");
        }
        assert_eq!(resolver.priority(Intent::General), [DEFAULT_MODEL_ID]);
    }

    #[test]
    fn resolves_first_available() {
        let resolver = ModelResolver::new(DEFAULT_MODEL_ID);
        let catalog = CatalogSnapshot::builtin().unwrap();
        assert_eq!(resolver.resolve(Intent::Coding, &catalog), CODER_480B);
        assert_eq!(
            resolver.resolve(Intent::Image, &catalog),
            "stabilityai/stable-diffusion-xl-base-1.0"
        );
        assert_eq!(resolver.resolve(Intent::General, &catalog), DEFAULT_MODEL_ID);
    }

    #[test]
    fn general_follows_catalog_default() {
        let resolver = ModelResolver::new(DEFAULT_MODEL_ID);
        let catalog =
            CatalogSnapshot::new(crate::registry::builtin_models(), "zai-org/GLM-4.5-Air").unwrap();
        assert_eq!(resolver.resolve(Intent::General, &catalog), "zai-org/GLM-4.5-Air");
    }

    #[test]
    fn skips_unavailable_models() {
        let resolver = ModelResolver::new(DEFAULT_MODEL_ID);
        let catalog = CatalogSnapshot::builtin().unwrap().without(&[CODER_480B]).unwrap();
        assert_eq!(resolver.resolve(Intent::Coding, &catalog), CODER_7B);
    }

    #[test]
    #[traced_test]
    fn falls_back_to_catalog_default() {
        let resolver = ModelResolver::new(DEFAULT_MODEL_ID);
        let catalog = CatalogSnapshot::builtin()
            .unwrap()
            .without(&["stabilityai/stable-diffusion-xl-base-1.0"])
            .unwrap();
        assert_eq!(resolver.resolve(Intent::Image, &catalog), DEFAULT_MODEL_ID);
        assert!(logs_contain("no prioritized model available"));
    }

    #[test]
    fn overrides_replace_builtin_lists() {
        let overrides = [(Intent::Coding, vec![CODER_7B.to_string()])];
        let resolver = ModelResolver::with_overrides(DEFAULT_MODEL_ID, overrides).unwrap();
        assert_eq!(resolver.priority(Intent::Coding), [CODER_7B]);
        // Untouched intents keep their built-in lists.
        assert_eq!(resolver.priority(Intent::Image).len(), 1);
    }

    #[test]
    fn general_override_is_rejected() {
        let result = ModelResolver::with_overrides(
            DEFAULT_MODEL_ID,
            [(Intent::General, vec!["zai-org/GLM-4.5-Air".to_string()])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_override_is_rejected() {
        let result = ModelResolver::with_overrides(DEFAULT_MODEL_ID, [(Intent::Research, vec![])]);
        assert!(result.is_err());
    }

    #[test]
    fn from_config_parses_intent_names() {
        let mut priorities = BTreeMap::new();
        priorities.insert("analysis".to_string(), vec!["google/gemini-2.5-pro".to_string()]);
        let config = RoutingConfig {
            priorities,
            ..RoutingConfig::default()
        };
        let resolver = ModelResolver::from_config(&config, DEFAULT_MODEL_ID).unwrap();
        assert_eq!(resolver.priority(Intent::Analysis), ["google/gemini-2.5-pro"]);
    }

    #[test]
    fn from_config_rejects_unknown_intent() {
        let mut priorities = BTreeMap::new();
        priorities.insert("poetry".to_string(), vec!["a/b".to_string()]);
        let config = RoutingConfig {
            priorities,
            ..RoutingConfig::default()
        };
        let err = ModelResolver::from_config(&config, DEFAULT_MODEL_ID).unwrap_err();
        assert!(matches!(err, OptimelonError::UnknownIntent { value } if value == "poetry"));
    }

    #[test]
    fn general_follows_configured_default() {
        let resolver = ModelResolver::new("zai-org/GLM-4.5-Air");
        assert_eq!(resolver.priority(Intent::General), ["zai-org/GLM-4.5-Air"]);
    }
}
