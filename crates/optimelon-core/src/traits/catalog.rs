// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model catalog trait: the set of currently selectable model ids.

/// The live set of model identifiers a router may select from.
///
/// Implementors must guarantee that [`default_model_id`](Self::default_model_id)
/// is always a member of the catalog. A catalog that breaks this is a
/// configuration bug and should be rejected at construction time.
pub trait ModelCatalog: Send + Sync {
    /// Returns true if `id` is currently available. Exact match only.
    fn contains(&self, id: &str) -> bool;

    /// The global fallback model id.
    fn default_model_id(&self) -> &str;
}

impl<T: ModelCatalog + ?Sized> ModelCatalog for &T {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn default_model_id(&self) -> &str {
        (**self).default_model_id()
    }
}

impl<T: ModelCatalog + ?Sized> ModelCatalog for std::sync::Arc<T> {
    fn contains(&self, id: &str) -> bool {
        (**self).contains(id)
    }

    fn default_model_id(&self) -> &str {
        (**self).default_model_id()
    }
}
