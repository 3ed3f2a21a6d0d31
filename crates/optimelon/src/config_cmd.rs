// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optimelon config` command implementation.

use optimelon_config::OptimelonConfig;
use optimelon_core::OptimelonError;

/// Print the effective configuration after every layer has been merged.
pub fn run_config(config: &OptimelonConfig, json: bool) -> Result<(), OptimelonError> {
    print!("{}", render_config(config, json)?);
    Ok(())
}

fn render_config(config: &OptimelonConfig, json: bool) -> Result<String, OptimelonError> {
    if json {
        serde_json::to_string_pretty(config)
            .map(|s| s + "\n")
            .map_err(|e| OptimelonError::Internal(format!("failed to serialize config: {e}")))
    } else {
        toml::to_string_pretty(config)
            .map_err(|e| OptimelonError::Internal(format!("failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_output_reloads_to_same_config() {
        let mut config = OptimelonConfig::default();
        config.routing.confidence_step = 10;
        config
            .routing
            .priorities
            .insert("coding".to_string(), vec!["zai-org/GLM-4.5-Air".to_string()]);

        let rendered = render_config(&config, false).unwrap();
        let reloaded = optimelon_config::load_and_validate_str(&rendered).unwrap();
        assert_eq!(reloaded.routing.confidence_step, 10);
        assert_eq!(
            reloaded.routing.priorities["coding"],
            vec!["zai-org/GLM-4.5-Air".to_string()]
        );
    }

    #[test]
    fn json_output_has_all_sections() {
        let rendered = render_config(&OptimelonConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["agent"]["name"], "optimelon");
        assert_eq!(value["routing"]["phrase_weight"], 3);
        assert_eq!(value["catalog"]["default_model"], "Qwen/Qwen2.5-7B-Instruct");
    }
}
