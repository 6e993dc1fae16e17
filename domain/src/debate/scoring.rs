//! Heuristic scoring of specialist outputs.
//!
//! Each heuristic tests one keyword cluster and yields [`PRESENT`] or
//! [`ABSENT`]. Scores are derived from the three heuristics only; there
//! are no external calls.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Heuristic value when a keyword cluster is present
pub const PRESENT: f64 = 0.9;
/// Heuristic value when a keyword cluster is absent
pub const ABSENT: f64 = 0.6;

const RATIONALE: &str = "Señales: API+GTM+experimentos presentes";

static TECHNICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)GET|POST|endpoint|schema|arquitectura|OpenAPI")
        .expect("technical pattern is valid")
});

static BUSINESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)canal|pricing|ICP|propuesta|embudo|ventas").expect("business pattern is valid")
});

static EXPERIMENTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)experimento|hipótesis|métrica|dashboard|instrumentación")
        .expect("experimentation pattern is valid")
});

/// Quality and risk scores for a debate turn, all in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(rename = "viabilidad")]
    pub viability: f64,
    pub roi: f64,
    #[serde(rename = "ttv")]
    pub time_to_value: f64,
    #[serde(rename = "riesgo")]
    pub risk: f64,
    pub total: f64,
    pub rationale: String,
}

fn presence(pattern: &Regex, text: &str) -> f64 {
    if pattern.is_match(text) { PRESENT } else { ABSENT }
}

/// Interface/schema vocabulary in the technical output
pub fn technical_presence(text: &str) -> f64 {
    presence(&TECHNICAL, text)
}

/// Channel/pricing/funnel vocabulary in the business output
pub fn business_presence(text: &str) -> f64 {
    presence(&BUSINESS, text)
}

/// Experiment/metric/dashboard vocabulary in the data output
pub fn experimentation_presence(text: &str) -> f64 {
    presence(&EXPERIMENTATION, text)
}

/// Score the latest technical, business and data outputs.
///
/// Outputs of specialists that did not run are passed as empty strings.
pub fn score_from_agents(technical: &str, business: &str, data: &str) -> Scores {
    let tech = technical_presence(technical);
    let biz = business_presence(business);
    let exp = experimentation_presence(data);

    let viability = tech;
    let roi = biz;
    let time_to_value = (tech + biz) / 2.0;
    let risk = 1.0 - tech.min(biz).min(exp);
    let total = (viability + roi + time_to_value + (1.0 - risk)) / 4.0;

    Scores {
        viability,
        roi,
        time_to_value,
        risk,
        total,
        rationale: RATIONALE.to_string(),
    }
}
