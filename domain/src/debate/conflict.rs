//! Conflict detection between specialist outputs.
//!
//! A rebuttal round only runs when the technical and business outputs
//! pull in clearly different directions.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Kind of disagreement found between technical and business outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Heavyweight architecture vs fast launch
    ArchitectureVsSpeed,
    /// Pricing/growth metrics vs cost, latency or SLA concerns
    GrowthVsCost,
}

static HEAVY_ARCHITECTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)CQRS|Event\s*Sourcing|DDD").expect("architecture pattern is valid")
});

static FAST_LAUNCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)lanzar rápido|sin DDD|go-to-market").expect("launch pattern is valid")
});

static GROWTH_METRICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)pricing|freemium|CAC|ROI").expect("growth pattern is valid")
});

static COST_CONCERNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)coste|latencia|SLA").expect("cost pattern is valid"));

/// Decide whether the technical and business outputs conflict.
pub fn detect_conflict(technical: &str, business: &str) -> Option<ConflictKind> {
    if HEAVY_ARCHITECTURE.is_match(technical) && FAST_LAUNCH.is_match(business) {
        Some(ConflictKind::ArchitectureVsSpeed)
    } else if GROWTH_METRICS.is_match(business) && COST_CONCERNS.is_match(technical) {
        Some(ConflictKind::GrowthVsCost)
    } else {
        None
    }
}
