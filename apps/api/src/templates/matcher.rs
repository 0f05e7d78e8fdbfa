#![allow(dead_code)]

//! Keyword matcher: scores a template's trigger keywords against a survey description.
//!
//! Heuristic, not edit distance:
//! - verbatim substring → 1.0
//! - registered typo variant present → 0.9
//! - first 4 characters of the keyword present → 0.8
//! - otherwise → 0.0
//!
//! A keyword qualifies only when its score is strictly above `MATCH_THRESHOLD`.

use serde::{Deserialize, Serialize};

pub const EXACT_SCORE: f32 = 1.0;
pub const TYPO_SCORE: f32 = 0.9;
pub const PREFIX_SCORE: f32 = 0.8;
pub const MATCH_THRESHOLD: f32 = 0.7;

/// Number of leading characters compared by the prefix rule.
const PREFIX_LEN: usize = 4;

/// Known misspellings, keyed by the keyword they stand in for.
const TYPO_VARIANTS: &[(&str, &[&str])] = &[
    ("employee", &["employe", "empolyee", "employ", "emploee"]),
    ("student", &["stdent", "studnt", "studen"]),
    ("customer", &["costomer", "custmer", "customr"]),
    ("satisfaction", &["satisfacion", "satisfacshun", "satisfac"]),
    ("feedback", &["feedbak", "fedbak", "feedbac"]),
    ("research", &["reserch", "reaserch", "resarch"]),
    ("usability", &["usablity", "useability", "usabilty"]),
    ("onboarding", &["onbording", "onbord"]),
    ("demographic", &["demografic", "demographc", "demograph"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Which rule produced a keyword's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Typo,
    Prefix,
}

impl MatchKind {
    pub fn score(self) -> f32 {
        match self {
            MatchKind::Exact => EXACT_SCORE,
            MatchKind::Typo => TYPO_SCORE,
            MatchKind::Prefix => PREFIX_SCORE,
        }
    }
}

/// The winning keyword for one template, with the rule that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub kind: MatchKind,
    pub score: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Returns the registered typo variants for a keyword, if any.
pub fn typo_variants(keyword: &str) -> Option<&'static [&'static str]> {
    TYPO_VARIANTS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, variants)| *variants)
}

/// Classifies a single keyword against an already lower-cased description.
///
/// Empty keywords never match: an empty needle is contained in every string.
pub fn classify_keyword(desc_lower: &str, keyword: &str) -> Option<MatchKind> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || desc_lower.is_empty() {
        return None;
    }

    if desc_lower.contains(&keyword) {
        return Some(MatchKind::Exact);
    }

    if let Some(variants) = typo_variants(&keyword) {
        if variants.iter().any(|typo| desc_lower.contains(typo)) {
            return Some(MatchKind::Typo);
        }
    }

    if keyword.chars().count() >= PREFIX_LEN {
        let prefix: String = keyword.chars().take(PREFIX_LEN).collect();
        if desc_lower.contains(&prefix) {
            return Some(MatchKind::Prefix);
        }
    }

    None
}

/// Scores one keyword against a description. Case-insensitive on the description.
pub fn score_keyword(description: &str, keyword: &str) -> f32 {
    classify_keyword(&description.to_lowercase(), keyword)
        .map(MatchKind::score)
        .unwrap_or(0.0)
}

/// Finds the best qualifying keyword, keeping the first one seen on ties.
pub fn find_best_keyword<S: AsRef<str>>(description: &str, keywords: &[S]) -> Option<KeywordMatch> {
    let desc_lower = description.to_lowercase();

    let mut best: Option<KeywordMatch> = None;
    let mut highest = 0.0_f32;

    for keyword in keywords {
        let keyword = keyword.as_ref();
        let Some(kind) = classify_keyword(&desc_lower, keyword) else {
            continue;
        };
        let score = kind.score();
        if score > highest {
            highest = score;
            best = Some(KeywordMatch {
                keyword: keyword.to_string(),
                kind,
                score,
            });
        }
    }

    best.filter(|m| m.score > MATCH_THRESHOLD)
}

/// Returns the best-matching keyword, or `None` when nothing clears the threshold.
pub fn best_match<S: AsRef<str>>(description: &str, keywords: &[S]) -> Option<String> {
    find_best_keyword(description, keywords).map(|m| m.keyword)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
