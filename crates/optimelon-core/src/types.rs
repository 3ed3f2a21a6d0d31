// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the router, configuration, and CLI.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The inferred purpose of a user prompt.
///
/// Variant order is significant: it is the declaration order used to break
/// scoring ties, first-declared wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Coding,
    Creative,
    Analysis,
    Image,
    Research,
    /// Fallback when nothing scores. Carries no keywords.
    General,
}

impl Intent {
    /// All intents in declaration order.
    pub const ALL: [Intent; 6] = [
        Intent::Coding,
        Intent::Creative,
        Intent::Analysis,
        Intent::Image,
        Intent::Research,
        Intent::General,
    ];

    /// Human-readable label for presentation.
    pub fn label(self) -> &'static str {
        match self {
            Intent::Coding => "Coding",
            Intent::Creative => "Creative",
            Intent::Analysis => "Analysis",
            Intent::Image => "Image",
            Intent::Research => "Research",
            Intent::General => "General",
        }
    }
}

/// Category a model is listed under in the registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    General,
    Image,
    Coders,
    Creators,
    Reasoning,
    Enterprise,
}

impl ModelCategory {
    /// All categories in display order.
    pub const ALL: [ModelCategory; 6] = [
        ModelCategory::General,
        ModelCategory::Image,
        ModelCategory::Coders,
        ModelCategory::Creators,
        ModelCategory::Reasoning,
        ModelCategory::Enterprise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelCategory::General => "General",
            ModelCategory::Image => "Image",
            ModelCategory::Coders => "Coders",
            ModelCategory::Creators => "Creators",
            ModelCategory::Reasoning => "Reasoning",
            ModelCategory::Enterprise => "Enterprise",
        }
    }

    /// Which generation pathway a model in this category is dispatched to.
    pub fn pathway(self) -> GenerationPathway {
        match self {
            ModelCategory::Image => GenerationPathway::Image,
            _ => GenerationPathway::Text,
        }
    }
}

/// Downstream generation pathway for a model: chat completion or image generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GenerationPathway {
    Text,
    Image,
}
