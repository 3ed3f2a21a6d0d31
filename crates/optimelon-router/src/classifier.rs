// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword and phrase intent classification.
//!
//! Scores a free-text prompt against each intent's rule with fixed integer
//! weights. No learning, no state, no network: the result depends only on the
//! prompt and the rule table.

use std::collections::HashSet;

use serde::Serialize;

use optimelon_config::model::RoutingConfig;
use optimelon_core::{Intent, OptimelonError};

use crate::rules::{IntentRule, DEFAULT_RULES};

/// Scoring and confidence constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingWeights {
    pub phrase_weight: u32,
    pub token_weight: u32,
    pub confidence_base: u32,
    pub confidence_step: u32,
    pub confidence_cap: u32,
}

impl Default for RoutingWeights {
    fn default() -> Self {
        Self {
            phrase_weight: 3,
            token_weight: 1,
            confidence_base: 45,
            confidence_step: 8,
            confidence_cap: 95,
        }
    }
}

impl RoutingWeights {
    /// Checks that confidence stays within `[base, cap] ⊆ [0, 100]` and that
    /// any match lifts confidence above `base`.
    pub fn validate(&self) -> Result<(), OptimelonError> {
        if self.phrase_weight == 0 || self.token_weight == 0 {
            return Err(OptimelonError::Config(
                "phrase and token weights must be at least 1".to_string(),
            ));
        }
        if self.confidence_step == 0 {
            return Err(OptimelonError::Config(
                "confidence step must be at least 1".to_string(),
            ));
        }
        if self.confidence_cap > 100 {
            return Err(OptimelonError::Config(format!(
                "confidence cap {} exceeds 100",
                self.confidence_cap
            )));
        }
        if self.confidence_base >= self.confidence_cap {
            return Err(OptimelonError::Config(format!(
                "confidence base {} must be below cap {}",
                self.confidence_base, self.confidence_cap
            )));
        }
        Ok(())
    }

    /// `min(cap, base + score * step)`, saturating.
    pub fn confidence(&self, score: u32) -> u8 {
        let raw = self
            .confidence_base
            .saturating_add(score.saturating_mul(self.confidence_step));
        raw.min(self.confidence_cap).min(100) as u8
    }

    fn score(&self, phrase_hits: usize, token_hits: usize) -> u32 {
        let phrases = u32::try_from(phrase_hits).unwrap_or(u32::MAX);
        let tokens = u32::try_from(token_hits).unwrap_or(u32::MAX);
        phrases
            .saturating_mul(self.phrase_weight)
            .saturating_add(tokens.saturating_mul(self.token_weight))
    }
}

impl From<&RoutingConfig> for RoutingWeights {
    fn from(config: &RoutingConfig) -> Self {
        Self {
            phrase_weight: config.phrase_weight,
            token_weight: config.token_weight,
            confidence_base: config.confidence_base,
            confidence_step: config.confidence_step,
            confidence_cap: config.confidence_cap,
        }
    }
}

/// Winning intent and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Zero iff `intent` is [`Intent::General`].
    pub score: u32,
}

/// Per-intent breakdown, used for `--explain` style output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub phrases: Vec<&'static str>,
    pub tokens: Vec<&'static str>,
    pub score: u32,
}

/// Bag-of-words intent classifier over an ordered rule table.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    weights: RoutingWeights,
}

impl IntentClassifier {
    /// Create a classifier over the built-in rules with default weights.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
            weights: RoutingWeights::default(),
        }
    }

    /// Create a classifier over a custom rule table.
    ///
    /// Rejects tables where a non-general intent has no phrases or tokens,
    /// where `General` has any, or where an intent appears twice.
    pub fn with_rules(
        rules: Vec<IntentRule>,
        weights: RoutingWeights,
    ) -> Result<Self, OptimelonError> {
        weights.validate()?;

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.intent) {
                return Err(OptimelonError::Config(format!(
                    "intent `{}` appears more than once in the rule table",
                    rule.intent
                )));
            }
            match (rule.intent, rule.is_empty()) {
                (Intent::General, false) => {
                    return Err(OptimelonError::Config(
                        "the general intent must not carry phrases or tokens".to_string(),
                    ));
                }
                (intent, true) if intent != Intent::General => {
                    return Err(OptimelonError::Config(format!(
                        "intent `{intent}` has no phrases or tokens"
                    )));
                }
                _ => {}
            }
        }

        Ok(Self { rules, weights })
    }

    pub fn weights(&self) -> &RoutingWeights {
        &self.weights
    }

    /// Classify a prompt. Never fails; empty input yields `General` with score 0.
    pub fn classify(&self, prompt: &str) -> Classification {
        let lowered = prompt.to_lowercase();
        let tokens = tokenize(&lowered);

        let mut best = Classification {
            intent: Intent::General,
            score: 0,
        };
        for rule in self.scorable_rules() {
            let score = self.score_rule(rule, &lowered, &tokens).score;
            // Strict comparison keeps the first-declared intent on ties.
            if score > best.score {
                best = Classification {
                    intent: rule.intent,
                    score,
                };
            }
        }

        best
    }

    /// Score every non-general intent, in table order.
    pub fn explain(&self, prompt: &str) -> Vec<IntentScore> {
        let lowered = prompt.to_lowercase();
        let tokens = tokenize(&lowered);
        self.scorable_rules()
            .map(|rule| self.score_rule(rule, &lowered, &tokens))
            .collect()
    }

    fn scorable_rules(&self) -> impl Iterator<Item = &IntentRule> {
        self.rules.iter().filter(|r| r.intent != Intent::General)
    }

    fn score_rule(&self, rule: &IntentRule, lowered: &str, tokens: &HashSet<&str>) -> IntentScore {
        let phrases: Vec<&'static str> = rule
            .phrases
            .iter()
            .copied()
            .filter(|p| lowered.contains(p))
            .collect();
        let matched_tokens: Vec<&'static str> = rule
            .tokens
            .iter()
            .copied()
            .filter(|t| tokens.contains(t))
            .collect();
        let score = self.weights.score(phrases.len(), matched_tokens.len());
        IntentScore {
            intent: rule.intent,
            phrases,
            tokens: matched_tokens,
            score,
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased prompt to its set of unique `[a-z0-9]+` words.
///
/// Equivalent to replacing every other non-whitespace character with a space
/// and splitting on whitespace.
fn tokenize(lowered: &str) -> HashSet<&str> {
    lowered
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|w| !w.is_empty())
        .collect()
}
