// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for OptiMelon.

use thiserror::Error;

/// The primary error type used across OptiMelon startup and construction paths.
///
/// Routing itself never fails; these errors surface while building routers,
/// catalogs, and configuration.
#[derive(Debug, Error)]
pub enum OptimelonError {
    /// Static configuration violates an invariant (empty priority list, bad weights).
    #[error("configuration error: {0}")]
    Config(String),

    /// Model catalog is inconsistent (default model missing, duplicate ids).
    #[error("catalog error: {message}")]
    Catalog { message: String },

    /// A model id was not found in the registry.
    #[error("unknown model: {id}")]
    UnknownModel { id: String },

    /// A string did not name a known intent.
    #[error("unknown intent: {value}")]
    UnknownIntent { value: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
