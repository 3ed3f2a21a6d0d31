// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model availability: immutable catalog snapshots and a hot-swappable holder.
//!
//! A [`CatalogSnapshot`] is validated once at construction so that the default
//! model is always a member. [`LiveCatalog`] swaps whole snapshots atomically;
//! readers resolve against whichever snapshot was current when they loaded it.

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use optimelon_config::model::CatalogConfig;
use optimelon_core::{ModelCatalog, ModelCategory, OptimelonError};
use tracing::info;

use crate::registry::{self, ModelInfo};

/// An immutable set of available models plus the global default.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    models: Vec<ModelInfo>,
    ids: HashSet<String>,
    default_model_id: String,
}

impl CatalogSnapshot {
    /// Build a snapshot, rejecting duplicate ids and a missing default.
    pub fn new(
        models: Vec<ModelInfo>,
        default_model_id: impl Into<String>,
    ) -> Result<Self, OptimelonError> {
        let default_model_id = default_model_id.into();
        let mut ids = HashSet::with_capacity(models.len());
        for model in &models {
            if !ids.insert(model.id.clone()) {
                return Err(OptimelonError::Catalog {
                    message: format!("duplicate model id `{}`", model.id),
                });
            }
        }
        if !ids.contains(&default_model_id) {
            return Err(OptimelonError::Catalog {
                message: format!("default model `{default_model_id}` is not in the catalog"),
            });
        }
        Ok(Self {
            models,
            ids,
            default_model_id,
        })
    }

    /// The full built-in registry with the built-in default.
    pub fn builtin() -> Result<Self, OptimelonError> {
        Self::new(registry::builtin_models(), registry::DEFAULT_MODEL_ID)
    }

    /// The built-in registry narrowed and re-defaulted by configuration.
    ///
    /// Disabling an unregistered model is reported as `UnknownModel` so typos
    /// in `disabled_models` surface at startup.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, OptimelonError> {
        let registered = Self::new(registry::builtin_models(), config.default_model.clone())?;
        registered.without(config.disabled_models.as_slice())
    }

    /// A copy of this snapshot with `ids` removed.
    ///
    /// Removing the default model is a configuration error.
    pub fn without<S: AsRef<str>>(&self, ids: &[S]) -> Result<Self, OptimelonError> {
        let mut removed = HashSet::new();
        for id in ids {
            let id = id.as_ref();
            if id == self.default_model_id {
                return Err(OptimelonError::Catalog {
                    message: format!("cannot remove default model `{id}`"),
                });
            }
            if !self.ids.contains(id) {
                return Err(OptimelonError::UnknownModel { id: id.to_string() });
            }
            removed.insert(id);
        }
        let models = self
            .models
            .iter()
            .filter(|m| !removed.contains(m.id.as_str()))
            .cloned()
            .collect();
        Self::new(models, self.default_model_id.clone())
    }

    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ModelInfo> {
        registry::model_by_id(&self.models, id)
    }

    pub fn by_category(&self, category: ModelCategory) -> Vec<&ModelInfo> {
        registry::models_by_category(&self.models, category)
    }

    pub fn display_name(&self, id: &str) -> String {
        registry::display_name(&self.models, id)
    }

    pub fn search(&self, query: &str) -> Vec<&ModelInfo> {
        registry::search(&self.models, query)
    }
}

impl ModelCatalog for CatalogSnapshot {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn default_model_id(&self) -> &str {
        &self.default_model_id
    }
}

/// Hot-swappable catalog. Cheap to read from many threads at once.
#[derive(Debug)]
pub struct LiveCatalog {
    current: ArcSwap<CatalogSnapshot>,
}

impl LiveCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
        }
    }

    /// The snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current.load_full()
    }

    /// Atomically install `snapshot`, returning the one it replaced.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let models = snapshot.len();
        let default_model = snapshot.default_model_id.clone();
        let previous = self.current.swap(Arc::new(snapshot));
        info!(
            models,
            default_model = default_model.as_str(),
            previous_models = previous.len(),
            "model catalog replaced"
        );
        previous
    }

    /// Remove `ids` from the current snapshot.
    pub fn disable<S: AsRef<str>>(&self, ids: &[S]) -> Result<(), OptimelonError> {
        let next = self.snapshot().without(ids)?;
        self.replace(next);
        Ok(())
    }
}
