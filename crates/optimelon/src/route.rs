// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `optimelon route` command implementation.
//!
//! Classifies a prompt, resolves a model against the configured catalog,
//! and prints the recommendation.

use std::io::{IsTerminal, Read};

use serde::Serialize;

use optimelon_config::OptimelonConfig;
use optimelon_core::{GenerationPathway, OptimelonError};
use optimelon_router::{IntentScore, RoutingResult};

/// JSON shape of `optimelon route --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteOutput<'a> {
    #[serde(flatten)]
    result: &'a RoutingResult,
    model_name: String,
    pathway: Option<GenerationPathway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<IntentScore>>,
}

/// Run the `optimelon route` command.
pub fn run_route(
    config: &OptimelonConfig,
    words: &[String],
    json: bool,
    explain: bool,
    plain: bool,
) -> Result<(), OptimelonError> {
    let prompt = read_prompt(words)?;
    let (router, catalog) = optimelon_router::build(config)?;

    let result = router.route_live(&prompt, &catalog);
    let snapshot = catalog.snapshot();
    let model_name = snapshot.display_name(&result.model_id);
    let pathway = snapshot.get(&result.model_id).map(|m| m.pathway());
    let scores = explain.then(|| router.classifier().explain(&prompt));

    if json {
        let output = RouteOutput {
            result: &result,
            model_name,
            pathway,
            scores,
        };
        println!("{}", render_json(&output)?);
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    print!("{}", render_result(&result, &model_name, pathway, use_color));
    if let Some(scores) = scores {
        let priority = router.resolver().priority(result.intent);
        print!("{}", render_scores(&scores, priority));
    }
    Ok(())
}

fn render_json(output: &RouteOutput<'_>) -> Result<String, OptimelonError> {
    serde_json::to_string_pretty(output)
        .map_err(|e| OptimelonError::Internal(format!("failed to serialize routing result: {e}")))
}

/// Join positional words, or fall back to piped stdin.
fn read_prompt(words: &[String]) -> Result<String, OptimelonError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut prompt = String::new();
    stdin
        .lock()
        .read_to_string(&mut prompt)
        .map_err(|e| OptimelonError::Internal(format!("failed to read prompt from stdin: {e}")))?;
    Ok(prompt.trim_end().to_string())
}

fn render_result(
    result: &RoutingResult,
    model_name: &str,
    pathway: Option<GenerationPathway>,
    use_color: bool,
) -> String {
    let summary = if use_color {
        use colored::Colorize;
        result.summary().bold().green().to_string()
    } else {
        result.summary()
    };
    let pathway = pathway.map_or_else(|| "unknown".to_string(), |p| p.to_string());

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("  {summary}\n"));
    out.push_str(&format!("  {}\n", "-".repeat(35)));
    out.push_str(&format!("    Model:    {model_name}\n"));
    out.push_str(&format!("    Id:       {}\n", result.model_id));
    out.push_str(&format!("    Pathway:  {pathway}\n"));
    out.push('\n');
    out
}

fn render_scores(scores: &[IntentScore], priority: &[String]) -> String {
    let mut out = String::from("  Scores:\n");
    for s in scores {
        let matched: Vec<&str> = s.phrases.iter().chain(s.tokens.iter()).copied().collect();
        let matched = if matched.is_empty() {
            "-".to_string()
        } else {
            matched.join(", ")
        };
        out.push_str(&format!("    {:<10} {:>3}  {matched}\n", s.intent.label(), s.score));
    }
    out.push_str(&format!("  Priority: {}\n", priority.join(" > ")));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimelon_core::Intent;
    use optimelon_router::IntentRouter;

    fn coding_result() -> RoutingResult {
        RoutingResult {
            intent: Intent::Coding,
            intent_label: "Coding".to_string(),
            confidence: 77,
            model_id: "Qwen/Qwen3-Coder-480B-A35B-Instruct".to_string(),
        }
    }

    #[test]
    fn read_prompt_joins_words() {
        let words = vec!["fix".to_string(), "the".to_string(), "bug".to_string()];
        assert_eq!(read_prompt(&words).unwrap(), "fix the bug");
    }

    #[test]
    fn plain_render_has_summary_and_model() {
        let out = render_result(
            &coding_result(),
            "Qwen3-Coder-480B",
            Some(GenerationPathway::Text),
            false,
        );
        assert!(out.contains("Routed for Coding (confidence 77%)"));
        assert!(out.contains("Model:    Qwen3-Coder-480B"));
        assert!(out.contains("Id:       Qwen/Qwen3-Coder-480B-A35B-Instruct"));
        assert!(out.contains("Pathway:  text"));
    }

    #[test]
    fn plain_render_without_pathway() {
        let out = render_result(&coding_result(), "x", None, false);
        assert!(out.contains("Pathway:  unknown"));
    }

    #[test]
    fn scores_list_matched_keywords() {
        let router = IntentRouter::new();
        let scores = router.classifier().explain("Review this stack trace and fix the bug");
        let out = render_scores(&scores, router.resolver().priority(Intent::Coding));
        assert!(out.contains("stack trace, bug"));
        assert!(out.contains("Creative"));
        assert!(out.contains(
            "Priority: Qwen/Qwen3-Coder-480B-A35B-Instruct > Qwen/Qwen2.5-Coder-7B-Instruct"
        ));
    }

    #[test]
    fn json_output_flattens_result() {
        let result = coding_result();
        let output = RouteOutput {
            result: &result,
            model_name: "Qwen3-Coder-480B".to_string(),
            pathway: Some(GenerationPathway::Text),
            scores: None,
        };
        let json: serde_json::Value = serde_json::from_str(&render_json(&output).unwrap()).unwrap();
        assert_eq!(json["intent"], "coding");
        assert_eq!(json["intentLabel"], "Coding");
        assert_eq!(json["confidence"], 77);
        assert_eq!(json["modelName"], "Qwen3-Coder-480B");
        assert_eq!(json["pathway"], "text");
        assert!(json.get("scores").is_none());
    }
}
