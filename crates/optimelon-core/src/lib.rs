// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for OptiMelon.
//!
//! This crate provides the domain types, the model catalog trait, and the
//! error type used throughout the OptiMelon workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::OptimelonError;
pub use traits::ModelCatalog;
pub use types::{GenerationPathway, Intent, ModelCategory};
