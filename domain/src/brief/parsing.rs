//! Extraction of the facilitator's structured brief block.
//!
//! The facilitator persona is asked to wrap its JSON summary between
//! [`BRIEF_START`] and [`BRIEF_END`]. Everything outside the markers is
//! conversational text shown to the user.

use super::entities::{Brief, Mode};
use super::normalize::{DEFAULT_DEADLINE, DEFAULT_PRIORITY, LOW_RISK_CONSTRAINT};
use crate::intake::IntakeContext;

pub const BRIEF_START: &str = "<<<BRIEF>>>";
pub const BRIEF_END: &str = "<<<END>>>";

/// Facilitator output split into its structured and conversational parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilitatorReply {
    /// Parsed brief from the first delimited block, if it was valid JSON
    pub brief: Option<Brief>,
    /// Reply text with every delimited block removed, trimmed
    pub text: String,
}

/// Split a facilitator response into brief block and reply text.
///
/// A block whose JSON does not parse is treated as absent; the reply
/// text is stripped of it either way. An unterminated start marker is
/// left in the text as-is.
pub fn extract_brief_block(response: &str) -> FacilitatorReply {
    let mut brief = None;
    let mut text = String::with_capacity(response.len());
    let mut rest = response;

    while let Some(start) = rest.find(BRIEF_START) {
        let after_start = &rest[start + BRIEF_START.len()..];
        let Some(end) = after_start.find(BRIEF_END) else {
            break;
        };
        text.push_str(&rest[..start]);
        if brief.is_none() {
            brief = serde_json::from_str::<Brief>(after_start[..end].trim()).ok();
        }
        rest = &after_start[end + BRIEF_END.len()..];
    }
    text.push_str(rest);

    FacilitatorReply {
        brief,
        text: text.trim().to_string(),
    }
}

/// Best-effort brief used once the question budget is exhausted
pub fn default_brief(context: &IntakeContext) -> Brief {
    Brief {
        objective: Some("Validar ventas online con presupuesto acotado".to_string()),
        constraints: vec![
            "plan free".to_string(),
            LOW_RISK_CONSTRAINT.to_string(),
            "bajas comisiones".to_string(),
        ],
        success_criterion: Some("primeras 20 ventas con ROI ≥ 0".to_string()),
        priority: Some(DEFAULT_PRIORITY.to_string()),
        deadline: Some(DEFAULT_DEADLINE.to_string()),
        mode: Some(if context.prefers_lite() {
            Mode::Lite
        } else {
            Mode::Full
        }),
        assumptions: vec![
            "KYC básico si aplica".to_string(),
            "cumplimiento mínimo requerido".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_valid_block() {
        let response = r#"Listo, armé el resumen.
<<<BRIEF>>>
{"objetivo": "Vender GPS online", "restricciones": ["presupuesto $500"], "modo": "lite"}
<<<END>>>
¿Confirmas para iniciar debate o editar algo?"#;

        let reply = extract_brief_block(response);
        let brief = reply.brief.unwrap();
        assert_eq!(brief.objective.as_deref(), Some("Vender GPS online"));
        assert_eq!(brief.mode, Some(Mode::Lite));
        assert!(!reply.text.contains(BRIEF_START));
        assert!(!reply.text.contains("objetivo"));
        assert!(reply.text.starts_with("Listo"));
        assert!(reply.text.ends_with("editar algo?"));
    }

    #[test]
    fn test_invalid_json_is_absent_but_stripped() {
        let reply = extract_brief_block("Hola <<<BRIEF>>>{not json<<<END>>> ¿seguimos?");
        assert!(reply.brief.is_none());
        assert_eq!(reply.text, "Hola  ¿seguimos?");
    }

    #[test]
    fn test_no_block() {
        let reply = extract_brief_block("  ¿Cuál es tu presupuesto?  ");
        assert!(reply.brief.is_none());
        assert_eq!(reply.text, "¿Cuál es tu presupuesto?");
    }

    #[test]
    fn test_every_block_is_removed_first_wins() {
        let response = "a<<<BRIEF>>>{\"objetivo\":\"uno\"}<<<END>>>b<<<BRIEF>>>{\"objetivo\":\"dos\"}<<<END>>>c";
        let reply = extract_brief_block(response);
        assert_eq!(reply.brief.unwrap().objective.as_deref(), Some("uno"));
        assert_eq!(reply.text, "abc");
    }

    #[test]
    fn test_unterminated_block_is_kept() {
        let reply = extract_brief_block("texto <<<BRIEF>>> {\"objetivo\":\"x\"}");
        assert!(reply.brief.is_none());
        assert!(reply.text.contains(BRIEF_START));
    }

    #[test]
    fn test_default_brief_mode_follows_context() {
        assert_eq!(default_brief(&IntakeContext::new()).mode, Some(Mode::Full));
        let lite = IntakeContext::new().with("lite", json!(true));
        let brief = default_brief(&lite);
        assert_eq!(brief.mode, Some(Mode::Lite));
        assert!(brief.has_constraint_mentioning(LOW_RISK_CONSTRAINT));
        assert_eq!(brief.assumptions.len(), 2);
    }
}
