//! Brief normalization: the single writer of brief defaults.

use super::entities::{Brief, Mode, has_text};
use super::signals::{Signals, mentions_sales};
use crate::intake::IntakeContext;

/// Constraint added when the user asks for "no profit"
pub const LOW_RISK_CONSTRAINT: &str = "bajo riesgo";
/// Objective used when a "no profit" request left the goal empty
pub const PRESERVE_CAPITAL_OBJECTIVE: &str = "Conservar capital mientras se valida el negocio";
pub const DEFAULT_PRIORITY: &str = "alta";
pub const DEFAULT_DEADLINE: &str = "4 semanas";

const SALES_CRITERION: &str = "≥ 50 pedidos con ROI positivo en 4 semanas";
const P2P_CRITERION: &str = "≥ 95% transferencias exitosas y ≥ 1k usuarios activos";
const GENERIC_CRITERION: &str = "Objetivo validado con métricas clave alcanzadas";

/// Clarification offered instead of accepting a "no profit" goal verbatim
pub const NO_PROFIT_CLARIFICATION: &str = "Detecté que mencionaste \"no tener ganancias\". \
¿Prefieres **conservar capital** (ROI≈0) o **maximizar ventas** con tu presupuesto? \
Elige una opción para ajustar el Resumen.";

/// Result of [`normalize_brief`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub brief: Brief,
    pub needs_clarification: bool,
    /// Message to show the user when `needs_clarification` is set
    pub clarification: Option<String>,
}

/// Fill a partial brief with inferred values and defaults.
///
/// Fields already present are never overwritten, except that the
/// contradiction rule may add the low-risk constraint. Running the
/// normalizer on its own output is a no-op for the brief.
pub fn normalize_brief(
    partial: Option<Brief>,
    signals: &Signals,
    context: &IntakeContext,
) -> Normalized {
    let mut brief = partial.unwrap_or_default();

    if !has_text(&brief.objective) {
        brief.objective = infer_objective(signals);
    }

    if let Some(budget) = signals.budget.filter(|b| *b > 0)
        && !brief.has_constraint_mentioning("presupuesto")
    {
        brief.constraints.push(format!("presupuesto ${budget}"));
    }

    if brief.mode.is_none() {
        brief.mode = Some(if context.prefers_lite() || signals.plan_lite {
            Mode::Lite
        } else {
            Mode::Full
        });
    }

    if !has_text(&brief.priority) {
        brief.priority = Some(DEFAULT_PRIORITY.to_string());
    }

    if !has_text(&brief.deadline) {
        brief.deadline = Some(DEFAULT_DEADLINE.to_string());
    }

    if !has_text(&brief.success_criterion) {
        brief.success_criterion = Some(derive_success_criterion(&brief, signals).to_string());
    }

    if !signals.wants_no_profit {
        return Normalized {
            brief,
            needs_clarification: false,
            clarification: None,
        };
    }

    if !brief.has_constraint_mentioning(LOW_RISK_CONSTRAINT) {
        brief.constraints.push(LOW_RISK_CONSTRAINT.to_string());
    }
    if !has_text(&brief.objective) {
        brief.objective = Some(PRESERVE_CAPITAL_OBJECTIVE.to_string());
    }

    Normalized {
        brief,
        needs_clarification: true,
        clarification: Some(NO_PROFIT_CLARIFICATION.to_string()),
    }
}

fn infer_objective(signals: &Signals) -> Option<String> {
    if let Some(product) = &signals.product {
        Some(format!("Vender {product} online"))
    } else if signals.wants_sales {
        Some("Incrementar ventas online".to_string())
    } else if signals.peer_to_peer {
        Some("Lanzar P2P para enviar dinero entre personas".to_string())
    } else {
        None
    }
}

fn derive_success_criterion(brief: &Brief, signals: &Signals) -> &'static str {
    if signals.wants_sales || mentions_sales(brief.objective_text()) {
        SALES_CRITERION
    } else if signals.peer_to_peer {
        P2P_CRITERION
    } else {
        GENERIC_CRITERION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::signals::extract_signals;
    use serde_json::json;

    fn low_risk_count(brief: &Brief) -> usize {
        brief
            .constraints
            .iter()
            .filter(|c| c.to_lowercase().contains(LOW_RISK_CONSTRAINT))
            .count()
    }

    #[test]
    fn test_gps_no_profit_scenario() {
        let signals = extract_signals("quiero vender GPS, presupuesto 500, sin ganancias");
        let out = normalize_brief(None, &signals, &IntakeContext::new());

        assert!(out.needs_clarification);
        assert_eq!(out.clarification.as_deref(), Some(NO_PROFIT_CLARIFICATION));
        assert_eq!(out.brief.objective.as_deref(), Some("Vender GPS online"));
        assert!(out.brief.constraints.iter().any(|c| c.contains("500")));
        assert_eq!(low_risk_count(&out.brief), 1);
        assert_eq!(out.brief.mode, Some(Mode::Full));
    }

    #[test]
    fn test_no_profit_low_risk_added_exactly_once() {
        let signals = Signals {
            wants_no_profit: true,
            ..Default::default()
        };
        let already = Brief {
            constraints: vec!["Bajo riesgo".to_string()],
            ..Default::default()
        };
        for partial in [None, Some(Brief::default()), Some(already)] {
            let out = normalize_brief(partial, &signals, &IntakeContext::new());
            assert!(out.needs_clarification);
            assert_eq!(low_risk_count(&out.brief), 1);
        }
    }

    #[test]
    fn test_no_profit_without_other_signals_preserves_capital() {
        let signals = extract_signals("no quiero obtener ganancias... cero ganancia");
        let out = normalize_brief(None, &signals, &IntakeContext::new());
        assert_eq!(
            out.brief.objective.as_deref(),
            Some(PRESERVE_CAPITAL_OBJECTIVE)
        );
        assert!(out.brief.is_complete());
    }

    #[test]
    fn test_mode_is_total() {
        let ctx = IntakeContext::new();
        let lite_signals = Signals {
            plan_lite: true,
            ..Default::default()
        };
        assert_eq!(
            normalize_brief(None, &lite_signals, &ctx).brief.mode,
            Some(Mode::Lite)
        );
        assert_eq!(
            normalize_brief(None, &Signals::default(), &ctx).brief.mode,
            Some(Mode::Full)
        );

        let lite_ctx = IntakeContext::new().with("plan", json!("free"));
        assert_eq!(
            normalize_brief(None, &Signals::default(), &lite_ctx).brief.mode,
            Some(Mode::Lite)
        );
    }

    #[test]
    fn test_explicit_mode_is_kept() {
        let partial = Brief {
            mode: Some(Mode::Full),
            ..Default::default()
        };
        let signals = Signals {
            plan_lite: true,
            ..Default::default()
        };
        let out = normalize_brief(Some(partial), &signals, &IntakeContext::new());
        assert_eq!(out.brief.mode, Some(Mode::Full));
    }

    #[test]
    fn test_budget_constraint_not_duplicated() {
        let partial = Brief {
            constraints: vec!["Presupuesto limitado".to_string()],
            ..Default::default()
        };
        let signals = Signals {
            budget: Some(800),
            ..Default::default()
        };
        let out = normalize_brief(Some(partial), &signals, &IntakeContext::new());
        assert_eq!(out.brief.constraints, vec!["Presupuesto limitado".to_string()]);
    }

    #[test]
    fn test_success_criterion_variants() {
        let ctx = IntakeContext::new();

        let sales = normalize_brief(Some(Brief::with_objective("Vender ropa")), &Signals::default(), &ctx);
        assert_eq!(sales.brief.success_criterion.as_deref(), Some(SALES_CRITERION));

        let p2p = normalize_brief(None, &extract_signals("una billetera p2p"), &ctx);
        assert_eq!(
            p2p.brief.objective.as_deref(),
            Some("Lanzar P2P para enviar dinero entre personas")
        );
        assert_eq!(p2p.brief.success_criterion.as_deref(), Some(P2P_CRITERION));

        let generic = normalize_brief(Some(Brief::with_objective("Reducir churn")), &Signals::default(), &ctx);
        assert_eq!(generic.brief.success_criterion.as_deref(), Some(GENERIC_CRITERION));
    }

    #[test]
    fn test_defaults_filled() {
        let out = normalize_brief(
            Some(Brief::with_objective("Reducir churn")),
            &Signals::default(),
            &IntakeContext::new(),
        );
        assert_eq!(out.brief.priority.as_deref(), Some(DEFAULT_PRIORITY));
        assert_eq!(out.brief.deadline.as_deref(), Some(DEFAULT_DEADLINE));
        assert!(!out.needs_clarification);
    }

    #[test]
    fn test_without_signals_objective_stays_empty() {
        let out = normalize_brief(None, &extract_signals("hola"), &IntakeContext::new());
        assert!(!out.brief.is_complete());
        assert!(!out.needs_clarification);
    }

    #[test]
    fn test_idempotent_after_resolution() {
        let ctx = IntakeContext::new();
        let first = normalize_brief(
            None,
            &extract_signals("quiero vender GPS, presupuesto 500, sin ganancias"),
            &ctx,
        );

        // The user picks "maximizar ventas" on the next turn
        let follow_up = extract_signals("maximizar ventas con mi presupuesto");
        let second = normalize_brief(Some(first.brief.clone()), &follow_up, &ctx);
        assert!(!second.needs_clarification);
        assert_eq!(second.brief, first.brief);

        let third = normalize_brief(Some(second.brief.clone()), &follow_up, &ctx);
        assert_eq!(third, second);
    }
}
