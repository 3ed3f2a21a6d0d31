// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt intent routing for OptiMelon.
//!
//! This crate provides:
//! - [`IntentClassifier`]: keyword/phrase intent scoring over a static rule table
//! - [`ModelResolver`]: intent to first-available model id, per priority list
//! - [`IntentRouter`]: the facade combining both into a [`RoutingResult`]
//! - [`CatalogSnapshot`] / [`LiveCatalog`]: the built-in model registry and
//!   hot-swappable availability
//!
//! Routing is pure and synchronous. The only shared state is the read-only
//! catalog, which is loaded fresh on every call.

pub mod catalog;
pub mod classifier;
pub mod registry;
pub mod resolver;
pub mod router;
pub mod rules;

pub use catalog::{CatalogSnapshot, LiveCatalog};
pub use classifier::{Classification, IntentClassifier, IntentScore, RoutingWeights};
pub use registry::{builtin_models, ModelInfo, DEFAULT_MODEL_ID};
pub use resolver::ModelResolver;
pub use router::{IntentRouter, RoutingResult};
pub use rules::{IntentRule, DEFAULT_RULES};

use optimelon_config::OptimelonConfig;
use optimelon_core::OptimelonError;

/// Build a router and live catalog from validated configuration.
///
/// Any routing invariant violation (default model not registered, empty
/// priority list, inconsistent weights) is returned here, at startup.
pub fn build(config: &OptimelonConfig) -> Result<(IntentRouter, LiveCatalog), OptimelonError> {
    let snapshot = CatalogSnapshot::from_config(&config.catalog)?;
    let router = IntentRouter::from_config(config)?;
    Ok((router, LiveCatalog::new(snapshot)))
}
