// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in model registry.
//!
//! Returns hardcoded `ModelInfo` entries for every model the chat client can
//! dispatch to. No network calls are made.

use optimelon_core::{GenerationPathway, ModelCategory};
use serde::{Deserialize, Serialize};

/// Global fallback model id.
pub const DEFAULT_MODEL_ID: &str = "Qwen/Qwen2.5-7B-Instruct";

/// Descriptive metadata for one selectable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Provider-qualified id, e.g. `Qwen/Qwen2.5-7B-Instruct`.
    pub id: String,
    /// Short display name.
    pub name: String,
    /// Inference provider the id is served by.
    pub provider: String,
    /// Free-form context window description ("128K", "Image generation").
    pub context_length: String,
    pub description: String,
    pub best_for: Vec<String>,
    pub tags: Vec<String>,
    pub category: ModelCategory,
}

impl ModelInfo {
    /// Which generation pathway requests for this model are dispatched to.
    pub fn pathway(&self) -> GenerationPathway {
        self.category.pathway()
    }

    /// Case-insensitive match on id, name, description, or any tag.
    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.id.to_lowercase().contains(query_lower)
            || self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(query_lower))
    }
}

fn model(
    id: &str,
    name: &str,
    context_length: &str,
    category: ModelCategory,
    description: &str,
    best_for: &[&str],
    tags: &[&str],
) -> ModelInfo {
    ModelInfo {
        id: id.to_string(),
        name: name.to_string(),
        provider: "bytez".to_string(),
        context_length: context_length.to_string(),
        description: description.to_string(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        category,
    }
}

/// Returns every built-in model, grouped by category in display order.
pub fn builtin_models() -> Vec<ModelInfo> {
    vec![
        model(
            DEFAULT_MODEL_ID,
            "Qwen 2.5 7B",
            "128K",
            ModelCategory::General,
            "Strong in instruction following, structured data understanding, code and math \
             reasoning, and long-text generation.",
            &[
                "Instruction following",
                "Structured data understanding",
                "Code reasoning",
                "Math reasoning",
                "Long-text generation",
            ],
            &["Instruction Following", "Math", "Structured Data", "Fast"],
        ),
        model(
            "stabilityai/stable-diffusion-xl-base-1.0",
            "Stable Diffusion XL",
            "Image generation",
            ModelCategory::Image,
            "Text-to-image model for high-quality visuals and artistic renders.",
            &[
                "Image generation",
                "Creative concepts",
                "Visual exploration",
                "Marketing mockups",
            ],
            &["Image", "Creative", "Text-to-Image"],
        ),
        model(
            "Qwen/Qwen3-Coder-480B-A35B-Instruct",
            "Qwen3-Coder-480B",
            "256K",
            ModelCategory::Coders,
            "Ideal for advanced coding tasks, repository-scale refactoring, autonomous software \
             engineering, and enterprise integration. Handles complex debugging and code completion.",
            &[
                "Advanced coding tasks",
                "Repository-scale refactoring",
                "Autonomous software engineering",
                "Enterprise integration",
                "Complex debugging",
                "Code completion",
            ],
            &["Coding", "Enterprise", "Debugging", "Refactoring"],
        ),
        model(
            "Qwen/Qwen2.5-Coder-7B-Instruct",
            "Qwen 2.5 Coder 7B",
            "128K",
            ModelCategory::Coders,
            "Ideal for code generation, reasoning, and fixing, with long-context support. \
             Efficient for complex coding tasks with smaller footprint.",
            &[
                "Code generation",
                "Code reasoning",
                "Bug fixing",
                "Long-context coding",
                "Efficient inference",
            ],
            &["Coding", "Efficient", "Bug Fixing", "Fast"],
        ),
        model(
            "zai-org/GLM-4-32B-0414",
            "GLM-4 32B",
            "128K",
            ModelCategory::Coders,
            "Excellent for complex business tasks, tool use, online search, code-related \
             intelligent tasks, and financial data analysis.",
            &[
                "Complex business tasks",
                "Tool use",
                "Online search",
                "Code-related intelligent tasks",
                "Financial data analysis",
            ],
            &["Business", "Financial", "Tools", "Search"],
        ),
        model(
            "Qwen/Qwen3-Next-80B-A3B-Instruct",
            "Qwen3-Next-80B",
            "262K (up to 1M with YaRN)",
            ModelCategory::Creators,
            "Best for ultra-long context tasks, complex reasoning, code generation, and \
             multilingual use cases. Excels at agentic workflows, tool calling, and extended \
             conversations.",
            &[
                "Ultra-long context tasks",
                "Complex reasoning",
                "Code generation",
                "Multilingual use cases",
                "Agentic workflows",
                "Tool calling",
                "Extended conversations",
            ],
            &["Long Context", "Reasoning", "Code", "Multilingual"],
        ),
        model(
            "moonshotai/Kimi-K2-Instruct",
            "Kimi K2",
            "256K",
            ModelCategory::Creators,
            "Designed for autonomous problem-solving, coding, debugging, and research. Excels in \
             agentic workflows and tool integration.",
            &[
                "Autonomous problem-solving",
                "Coding",
                "Debugging",
                "Research",
                "Agentic workflows",
                "Tool integration",
            ],
            &["Autonomous", "Debugging", "Research", "Agentic"],
        ),
        model(
            "deepseek-ai/DeepSeek-V3.2-Exp",
            "DeepSeek-V3.2-Exp",
            "128K",
            ModelCategory::Reasoning,
            "Excels at long-context processing, document analysis, code generation, and advanced \
             reasoning. Strong in legal, research, and multi-step logical tasks.",
            &[
                "Long-context processing",
                "Document analysis",
                "Code generation",
                "Advanced reasoning",
                "Legal tasks",
                "Research applications",
                "Multi-step logical tasks",
            ],
            &["Document Analysis", "Legal", "Research", "Reasoning"],
        ),
        model(
            "google/gemini-2.5-pro",
            "Gemini 2.5 Pro",
            "1M",
            ModelCategory::Reasoning,
            "Best for enhanced reasoning, data analysis, strategic planning, and creative \
             visualizations. Suitable for complex logic and strategic decision-making.",
            &[
                "Enhanced reasoning",
                "Data analysis",
                "Strategic planning",
                "Creative visualizations",
                "Complex logic",
                "Strategic decision-making",
            ],
            &["Reasoning", "Data Analysis", "Strategic", "Creative"],
        ),
        model(
            "meta-llama/Llama-3.3-70B-Instruct",
            "Llama 3.3 70B",
            "128K",
            ModelCategory::Enterprise,
            "Superior for coding, general knowledge, tool use, and multilingual support. Offers \
             improved code feedback and error handling.",
            &[
                "Coding assistance",
                "General knowledge",
                "Tool use",
                "Multilingual support",
                "Code feedback",
                "Error handling",
            ],
            &["Coding", "General Purpose", "Multilingual", "Tools"],
        ),
        model(
            "zai-org/GLM-4.5-Air",
            "GLM-4.5-Air",
            "128K",
            ModelCategory::Enterprise,
            "Cost-effective, high-volume conversational AI, lightweight coding, and efficient \
             agentic workflows. Suited for scalable deployments.",
            &[
                "Cost-effective deployments",
                "High-volume conversational AI",
                "Lightweight coding",
                "Efficient agentic workflows",
                "Scalable deployments",
                "Resource-conscious environments",
            ],
            &["Cost-Effective", "Scalable", "Conversational", "Efficient"],
        ),
    ]
}

/// Models in `category`, preserving registry order.
pub fn models_by_category(models: &[ModelInfo], category: ModelCategory) -> Vec<&ModelInfo> {
    models.iter().filter(|m| m.category == category).collect()
}

/// Look up a model by exact id.
pub fn model_by_id<'a>(models: &'a [ModelInfo], id: &str) -> Option<&'a ModelInfo> {
    models.iter().find(|m| m.id == id)
}

/// Display name for `id`: the registry name, else the last `/` segment, else `id`.
pub fn display_name(models: &[ModelInfo], id: &str) -> String {
    if let Some(model) = model_by_id(models, id) {
        return model.name.clone();
    }
    match id.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => id.to_string(),
    }
}

/// Search models by query string.
///
/// Filters entries whose id, name, description, or tags contain the query
/// (case-insensitive). If query is empty, returns all entries.
pub fn search<'a>(models: &'a [ModelInfo], query: &str) -> Vec<&'a ModelInfo> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return models.iter().collect();
    }
    models.iter().filter(|m| m.matches(&query_lower)).collect()
}
