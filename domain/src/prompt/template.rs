//! Prompt templates for each step of a council turn

use crate::brief::entities::Brief;
use crate::core::string::cap;
use crate::debate::roles::AgentRole;
use crate::debate::scoring::Scores;
use crate::intake::context::IntakeContext;

/// Per-output cap inside the rebuttal digest
pub const REBUTTAL_DIGEST_CAP: usize = 500;
/// Per-output cap inside the fusion prompt
pub const FUSION_INPUT_CAP: usize = 1100;

/// Appended to the facilitator reply when a default brief is proposed
pub const DEFAULT_BRIEF_CONFIRMATION: &str =
    "Propongo este Resumen inicial. ¿Confirmas para iniciar debate o editamos algo?";

const DELIVERABLE_FORMAT: &str = "- Decisión (1–2 frases)
- Plan 7 días (tabla)
- Riesgos + mitigación (tabla)
- Métricas/targets (5)
- Supuestos (≤5)
- Próximas decisiones (≤5)";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Facilitator prompt: the echoed context (counter already advanced)
    /// followed by the user's message.
    pub fn facilitator(context: &IntakeContext, message: &str) -> String {
        format!(
            "Contexto: {}\nUsuario: {}\nSi es posible, devuelve el JSON entre <<<BRIEF>>> y <<<END>>>.\n\
             Recuerda: máximo 2 preguntas; si faltan datos, completa con supuestos.",
            context.as_value(),
            message
        )
    }

    /// Coach framing prompt rendered from a normalized brief
    pub fn coach_brief(brief: &Brief) -> String {
        let constraints = if brief.constraints.is_empty() {
            "ninguna".to_string()
        } else {
            brief.constraints.join("; ")
        };

        format!(
            "RESUMEN\nOBJETIVO: {}\nRESTRICCIONES: {}\nCRITERIO_EXITO: {}\nPRIORIDAD: {}  PLAZO: {}\nMODO: {}\n\
             Criterios: viabilidad, ROI, TTV, riesgo (bajo).\n\nFormato EXACTO (sin saludos):\n{}\n",
            brief.objective_text(),
            constraints,
            brief.success_criterion.as_deref().unwrap_or_default(),
            brief.priority.as_deref().unwrap_or_default(),
            brief.deadline.as_deref().unwrap_or_default(),
            brief.mode_or_full(),
            DELIVERABLE_FORMAT
        )
    }

    /// Round-two digest of every first-round output
    pub fn rebuttal_digest(outputs: &[(AgentRole, String)]) -> String {
        let mut prompt = String::from("RESUMEN R1 (máx 100 palabras por agente)\n");
        for (role, content) in outputs {
            prompt.push_str(&format!(
                "- {}:\n{}\n",
                role.label(),
                cap(content, REBUTTAL_DIGEST_CAP)
            ));
        }
        prompt.push_str("Indica SOLO ajustes críticos y trade-offs en 4 bullets.");
        prompt
    }

    /// Coach fusion prompt: scores plus each specialist's latest position
    pub fn fusion(scores: &Scores, outputs: &[(AgentRole, String)]) -> String {
        let scores_json = serde_json::to_string(scores).unwrap_or_default();
        let mut prompt = format!(
            "FUSIÓN\nPuntajes: {}\nDevuelve EXACTAMENTE:\n{}\n",
            scores_json, DELIVERABLE_FORMAT
        );
        for (role, content) in outputs {
            prompt.push_str(&format!(
                "\n{}-DEF:\n{}\n",
                role.label(),
                cap(content, FUSION_INPUT_CAP)
            ));
        }
        prompt
    }

    /// Patch request sent to the coach after the guard asks for corrections
    pub fn patch(corrections: &str, text: &str) -> String {
        format!(
            "Aplica estas correcciones sin cambiar el contenido esencial:\n{}\n\nTexto:\n{}",
            corrections, text
        )
    }
}
