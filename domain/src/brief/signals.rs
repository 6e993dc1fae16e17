//! Signal extraction from free-text user messages.
//!
//! Pure, deterministic classification: the same text always yields the
//! same [`Signals`]. Matching is case-insensitive.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Flags derived from a single user message
///
/// Ephemeral: recomputed on every intake turn and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// The user asked for "no profit" (contradictory business goal)
    pub wants_no_profit: bool,
    /// First amount found in the message
    pub budget: Option<u64>,
    /// Display name of a recognized product keyword
    pub product: Option<String>,
    /// Selling / sales intent
    pub wants_sales: bool,
    /// Peer-to-peer money transfer intent
    pub peer_to_peer: bool,
    /// Free or lite plan hint
    pub plan_lite: bool,
}

/// Product keywords recognized in messages, with their display name
const PRODUCT_KEYWORDS: &[(&str, &str)] = &[("gps", "GPS")];

static NO_PROFIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(no\s+(tener|obtener)\s+ganancias?|cero\s+ganancias?|sin\s+ganancias?)\b")
        .expect("no-profit pattern is valid")
});

static BUDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$?\s*(\d+)\s*(usd|dólares|dolares)?\b").expect("budget pattern is valid")
});

static PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = PRODUCT_KEYWORDS
        .iter()
        .map(|(keyword, _)| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternatives})\b")).expect("product pattern is valid")
});

static SALES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(ventas?|vender)\b").expect("sales pattern is valid"));

static PEER_TO_PEER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bp2p\b|transfer(encia|ir)|enviar dinero|wallet|billetera")
        .expect("p2p pattern is valid")
});

static PLAN_LITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(free|gratis|lite)\b").expect("lite pattern is valid"));

/// Classify a raw user message into [`Signals`].
pub fn extract_signals(text: &str) -> Signals {
    Signals {
        wants_no_profit: NO_PROFIT.is_match(text),
        budget: detect_budget(text),
        product: detect_product(text),
        wants_sales: SALES.is_match(text),
        peer_to_peer: PEER_TO_PEER.is_match(text),
        plan_lite: PLAN_LITE.is_match(text),
    }
}

/// Whether the text uses selling language (`vender`, `venta`, `ventas`)
pub fn mentions_sales(text: &str) -> bool {
    SALES.is_match(text)
}

fn detect_budget(text: &str) -> Option<u64> {
    BUDGET
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn detect_product(text: &str) -> Option<String> {
    let found = PRODUCT.captures(text)?.get(1)?.as_str().to_lowercase();
    PRODUCT_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == found)
        .map(|(_, display)| display.to_string())
}
