// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optimelon models` command implementation.

use std::io::IsTerminal;

use optimelon_config::OptimelonConfig;
use optimelon_core::{ModelCatalog, ModelCategory, OptimelonError};
use optimelon_router::{CatalogSnapshot, ModelInfo};

/// Run the `optimelon models` command.
///
/// Lists the models left after `[catalog].disabled_models` is applied,
/// grouped by category. `--json` prints a flat array.
pub fn run_models(
    config: &OptimelonConfig,
    category: Option<ModelCategory>,
    search: Option<&str>,
    json: bool,
    plain: bool,
) -> Result<(), OptimelonError> {
    let snapshot = CatalogSnapshot::from_config(&config.catalog)?;
    let models = select_models(&snapshot, category, search);

    if json {
        let rendered = serde_json::to_string_pretty(&models)
            .map_err(|e| OptimelonError::Internal(format!("failed to serialize models: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    print!(
        "{}",
        render_models(&models, snapshot.default_model_id(), use_color)
    );
    Ok(())
}

fn select_models<'a>(
    snapshot: &'a CatalogSnapshot,
    category: Option<ModelCategory>,
    search: Option<&str>,
) -> Vec<&'a ModelInfo> {
    match (search, category) {
        (Some(query), Some(category)) => {
            let mut hits = snapshot.search(query);
            hits.retain(|m| m.category == category);
            hits
        }
        (Some(query), None) => snapshot.search(query),
        (None, Some(category)) => snapshot.by_category(category),
        (None, None) => snapshot.models().iter().collect(),
    }
}

fn render_models(models: &[&ModelInfo], default_id: &str, use_color: bool) -> String {
    if models.is_empty() {
        return "\n  No models match.\n\n".to_string();
    }

    let mut out = String::new();
    for category in ModelCategory::ALL {
        let group: Vec<&&ModelInfo> = models.iter().filter(|m| m.category == category).collect();
        if group.is_empty() {
            continue;
        }

        out.push('\n');
        if use_color {
            use colored::Colorize;
            out.push_str(&format!("  {}\n", category.label().bold()));
        } else {
            out.push_str(&format!("  {}\n", category.label()));
        }
        out.push_str(&format!("  {}\n", "-".repeat(35)));

        for model in group {
            let marker = if model.id == default_id {
                if use_color {
                    use colored::Colorize;
                    " (default)".green().to_string()
                } else {
                    " (default)".to_string()
                }
            } else {
                String::new()
            };
            out.push_str(&format!(
                "    {:<22} {} [{}]{marker}\n",
                model.name, model.id, model.context_length
            ));
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimelon_router::DEFAULT_MODEL_ID;

    #[test]
    fn no_filters_lists_everything() {
        let snapshot = CatalogSnapshot::builtin().unwrap();
        assert_eq!(select_models(&snapshot, None, None).len(), snapshot.len());
    }

    #[test]
    fn category_filter() {
        let snapshot = CatalogSnapshot::builtin().unwrap();
        let coders = select_models(&snapshot, Some(ModelCategory::Coders), None);
        assert!(!coders.is_empty());
        assert!(coders.iter().all(|m| m.category == ModelCategory::Coders));
    }

    #[test]
    fn search_and_category_combine() {
        let snapshot = CatalogSnapshot::builtin().unwrap();
        let hits = select_models(&snapshot, Some(ModelCategory::Image), Some("qwen"));
        assert!(hits.is_empty());
    }

    #[test]
    fn disabled_models_are_not_listed() {
        let mut config = OptimelonConfig::default();
        config.catalog.disabled_models = vec!["moonshotai/Kimi-K2-Instruct".to_string()];
        let snapshot = CatalogSnapshot::from_config(&config.catalog).unwrap();
        let all = select_models(&snapshot, None, None);
        assert!(all.iter().all(|m| m.id != "moonshotai/Kimi-K2-Instruct"));
    }

    #[test]
    fn plain_render_groups_and_marks_default() {
        let snapshot = CatalogSnapshot::builtin().unwrap();
        let models = select_models(&snapshot, None, None);
        let out = render_models(&models, DEFAULT_MODEL_ID, false);
        assert!(out.contains("  General\n"));
        assert!(out.contains("  Coders\n"));
        assert!(out.contains(&format!("{DEFAULT_MODEL_ID} [")));
        assert_eq!(out.matches("(default)").count(), 1);
    }

    #[test]
    fn plain_render_empty() {
        assert!(render_models(&[], DEFAULT_MODEL_ID, false).contains("No models match."));
    }
}
