// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing facade: classify, resolve, and shape the result.
//!
//! Resolution order: intent priority list > catalog default. `General` always
//! resolves to the default of the catalog passed in.

use optimelon_config::OptimelonConfig;
use optimelon_core::{Intent, ModelCatalog, OptimelonError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::LiveCatalog;
use crate::classifier::{IntentClassifier, RoutingWeights};
use crate::registry::DEFAULT_MODEL_ID;
use crate::resolver::ModelResolver;
use crate::rules::DEFAULT_RULES;

/// Recommendation produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingResult {
    pub intent: Intent,
    pub intent_label: String,
    /// Heuristic presentation value in `[0, 100]`, not a probability.
    pub confidence: u8,
    /// Always a member of the catalog the prompt was routed against.
    pub model_id: String,
}

impl RoutingResult {
    /// One-line description for display, e.g. `Routed for Coding (confidence 77%)`.
    pub fn summary(&self) -> String {
        format!(
            "Routed for {} (confidence {}%)",
            self.intent_label, self.confidence
        )
    }
}

/// Stateless prompt router. Safe to share across threads; holds no per-call state.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    classifier: IntentClassifier,
    resolver: ModelResolver,
}

impl IntentRouter {
    /// Built-in rules, weights, and priorities.
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
            resolver: ModelResolver::new(DEFAULT_MODEL_ID),
        }
    }

    pub fn with_parts(classifier: IntentClassifier, resolver: ModelResolver) -> Self {
        Self {
            classifier,
            resolver,
        }
    }

    /// Built-in rules with weights and priorities taken from configuration.
    ///
    /// Fails if the configured tables break a routing invariant.
    pub fn from_config(config: &OptimelonConfig) -> Result<Self, OptimelonError> {
        let weights = RoutingWeights::from(&config.routing);
        let classifier = IntentClassifier::with_rules(DEFAULT_RULES.to_vec(), weights)?;
        let resolver = ModelResolver::from_config(&config.routing, &config.catalog.default_model)?;
        Ok(Self::with_parts(classifier, resolver))
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &ModelResolver {
        &self.resolver
    }

    /// Route a prompt against `catalog`. Never fails.
    pub fn route(&self, prompt: &str, catalog: &dyn ModelCatalog) -> RoutingResult {
        let classification = self.classifier.classify(prompt);
        let confidence = self.classifier.weights().confidence(classification.score);
        let model_id = self.resolver.resolve(classification.intent, catalog);

        debug!(
            intent = %classification.intent,
            score = classification.score,
            confidence,
            model_id = model_id.as_str(),
            "routed prompt"
        );

        RoutingResult {
            intent: classification.intent,
            intent_label: classification.intent.label().to_string(),
            confidence,
            model_id,
        }
    }

    /// Route against the snapshot current at call time.
    pub fn route_live(&self, prompt: &str, catalog: &LiveCatalog) -> RoutingResult {
        let snapshot = catalog.snapshot();
        self.route(prompt, snapshot.as_ref())
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}
