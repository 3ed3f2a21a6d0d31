// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static intent rule and model priority tables.
//!
//! Adding an intent is a data change here, not a control-flow change in the
//! classifier. Table order is the classifier's tie-break order.

use optimelon_core::Intent;

use crate::registry::DEFAULT_MODEL_ID;

/// Phrase and token sets for one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    /// Multi-word substrings matched against the lowercased prompt.
    pub phrases: &'static [&'static str],
    /// Single words matched against the normalized token set.
    pub tokens: &'static [&'static str],
}

impl IntentRule {
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.tokens.is_empty()
    }
}

/// Built-in rules in tie-break order.
pub const DEFAULT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Coding,
        phrases: &["stack trace"],
        tokens: &[
            "code",
            "debug",
            "bug",
            "typescript",
            "javascript",
            "python",
            "refactor",
            "compile",
            "error",
            "api",
            "function",
        ],
    },
    IntentRule {
        intent: Intent::Creative,
        phrases: &[],
        tokens: &[
            "write",
            "story",
            "poem",
            "creative",
            "lyrics",
            "novel",
            "script",
            "content",
            "brand",
            "marketing",
        ],
    },
    IntentRule {
        intent: Intent::Analysis,
        phrases: &[],
        tokens: &[
            "analyze",
            "analysis",
            "insight",
            "compare",
            "calculate",
            "data",
            "statistics",
            "chart",
            "forecast",
            "summary",
        ],
    },
    IntentRule {
        intent: Intent::Image,
        phrases: &["generate image"],
        tokens: &[
            "image",
            "illustration",
            "photo",
            "art",
            "render",
            "design",
            "poster",
            "logo",
        ],
    },
    IntentRule {
        intent: Intent::Research,
        phrases: &[],
        tokens: &[
            "research",
            "paper",
            "citations",
            "academic",
            "study",
            "literature",
            "survey",
        ],
    },
    IntentRule {
        intent: Intent::General,
        phrases: &[],
        tokens: &[],
    },
];

/// Built-in model preference per intent, most preferred first.
///
/// `General` is not listed: its list is always the catalog default.
pub const DEFAULT_PRIORITIES: &[(Intent, &[&str])] = &[
    (
        Intent::Coding,
        &[
            "Qwen/Qwen3-Coder-480B-A35B-Instruct",
            "Qwen/Qwen2.5-Coder-7B-Instruct",
        ],
    ),
    (
        Intent::Creative,
        &["Qwen/Qwen3-Next-80B-A3B-Instruct", "moonshotai/Kimi-K2-Instruct"],
    ),
    (
        Intent::Analysis,
        &["deepseek-ai/DeepSeek-V3.2-Exp", "google/gemini-2.5-pro"],
    ),
    (Intent::Image, &["stabilityai/stable-diffusion-xl-base-1.0"]),
    (
        Intent::Research,
        &["google/gemini-2.5-pro", "deepseek-ai/DeepSeek-V3.2-Exp"],
    ),
];

/// Returns the built-in priority list for `intent`.
pub fn default_priority(intent: Intent) -> Vec<String> {
    if intent == Intent::General {
        return vec![DEFAULT_MODEL_ID.to_string()];
    }
    DEFAULT_PRIORITIES
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, ids)| ids.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_follow_intent_declaration_order() {
        let order: Vec<Intent> = DEFAULT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ALL.to_vec());
    }

    #[test]
    fn only_general_has_empty_rules() {
        for rule in DEFAULT_RULES {
            assert_eq!(rule.is_empty(), rule.intent == Intent::General, "{:?}", rule.intent);
        }
    }

    #[test]
    fn phrases_are_multi_word_and_tokens_single_word() {
        for rule in DEFAULT_RULES {
            for phrase in rule.phrases {
                assert!(phrase.contains(' '), "phrase `{phrase}` should be multi-word");
                assert_eq!(*phrase, phrase.to_lowercase());
            }
            for token in rule.tokens {
                assert!(
                    token
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "token `{token}` must survive normalization"
                );
            }
        }
    }

    #[test]
    fn every_non_general_intent_has_priorities() {
        for intent in Intent::ALL {
            assert!(!default_priority(intent).is_empty(), "{intent}");
        }
    }

    #[test]
    fn general_priority_is_default_model() {
        assert_eq!(default_priority(Intent::General), vec![DEFAULT_MODEL_ID]);
    }
}
