// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the collaborators the router depends on.

pub mod catalog;

pub use catalog::ModelCatalog;
