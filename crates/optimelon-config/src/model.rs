// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for OptiMelon.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level OptiMelon configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OptimelonConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Intent routing weights and priority overrides.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Model catalog availability.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in logs.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "optimelon".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Intent routing configuration.
///
/// The weights are tuning constants with no derivation behind them; they are
/// exposed here so deployments can recalibrate without a rebuild.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Score contributed by each matched multi-word phrase.
    #[serde(default = "default_phrase_weight")]
    pub phrase_weight: u32,

    /// Score contributed by each matched single-word token.
    #[serde(default = "default_token_weight")]
    pub token_weight: u32,

    /// Confidence reported for a zero score.
    #[serde(default = "default_confidence_base")]
    pub confidence_base: u32,

    /// Confidence added per score point.
    #[serde(default = "default_confidence_step")]
    pub confidence_step: u32,

    /// Upper bound on reported confidence.
    #[serde(default = "default_confidence_cap")]
    pub confidence_cap: u32,

    /// Per-intent model priority overrides, keyed by intent name.
    /// Example: `coding = ["Qwen/Qwen2.5-Coder-7B-Instruct"]`
    #[serde(default)]
    pub priorities: BTreeMap<String, Vec<String>>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            phrase_weight: default_phrase_weight(),
            token_weight: default_token_weight(),
            confidence_base: default_confidence_base(),
            confidence_step: default_confidence_step(),
            confidence_cap: default_confidence_cap(),
            priorities: BTreeMap::new(),
        }
    }
}

fn default_phrase_weight() -> u32 {
    3
}

fn default_token_weight() -> u32 {
    1
}

fn default_confidence_base() -> u32 {
    45
}

fn default_confidence_step() -> u32 {
    8
}

fn default_confidence_cap() -> u32 {
    95
}

/// Model catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Global fallback model. Must be a registered, enabled model.
    #[serde(default = "default_catalog_model")]
    pub default_model: String,

    /// Registered models to withhold from selection.
    #[serde(default)]
    pub disabled_models: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_model: default_catalog_model(),
            disabled_models: Vec::new(),
        }
    }
}

fn default_catalog_model() -> String {
    "Qwen/Qwen2.5-7B-Instruct".to_string()
}
