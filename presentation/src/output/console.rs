//! Console output formatter for chat turns

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::{Brief, ChatResponse, DebateResponse, IntakeHint, IntakeResponse};

/// Formats turn results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format either kind of turn
    pub fn format(response: &ChatResponse) -> String {
        match response {
            ChatResponse::Intake(r) => Self::format_intake(r),
            ChatResponse::Debate(r) => Self::format_debate(r),
        }
    }

    pub fn format_intake(response: &IntakeResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Intake"));
        output.push('\n');

        output.push_str(&format!("\n{}\n", response.reply));

        if let Some(brief) = &response.brief {
            output.push_str(&Self::section_header("Brief"));
            output.push_str(&Self::format_brief(brief));
        }

        let hint = match response.next_phase_hint {
            IntakeHint::Ready => response.next_phase_hint.as_str().green().bold(),
            IntakeHint::NeedsFix => response.next_phase_hint.as_str().yellow().bold(),
            IntakeHint::Intake => response.next_phase_hint.as_str().normal(),
        };
        output.push_str(&format!("\n{} {}\n", "Next:".cyan().bold(), hint));

        // The context must be passed back on the next turn
        output.push_str(&format!(
            "{} {}\n",
            "Context:".cyan().bold(),
            response.context_echo.as_value()
        ));

        output.push_str(&Self::footer());
        output
    }

    pub fn format_debate(response: &DebateResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Debate"));
        output.push('\n');

        let agents: Vec<&str> = response.agents_called.iter().map(|a| a.as_str()).collect();
        output.push_str(&format!(
            "{} {}\n",
            "Agents:".cyan().bold(),
            agents.join(", ")
        ));

        output.push_str(&Self::section_header("Transcript"));
        for entry in response.transcript.entries() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} (round {}) ──", entry.agent.label(), entry.round)
                    .yellow()
                    .bold(),
                entry.content
            ));
        }

        let scores = &response.scores;
        output.push_str(&Self::section_header("Scores"));
        output.push_str(&format!(
            "  viabilidad {:.2}  roi {:.2}  ttv {:.2}  riesgo {:.2}  {} {:.2}\n",
            scores.viability,
            scores.roi,
            scores.time_to_value,
            scores.risk,
            "total".bold(),
            scores.total
        ));
        output.push_str(&format!("  {}\n", scores.rationale.dimmed()));

        output.push_str(&Self::section_header("Plan"));
        output.push_str(&format!("\n{}\n", response.reply));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON, exactly as the HTTP binding would return it
    pub fn format_json(response: &ChatResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reply text only
    pub fn format_reply_only(response: &ChatResponse) -> String {
        format!("{}\n", response.reply())
    }

    fn format_brief(brief: &Brief) -> String {
        let mut output = String::new();
        let field = |label: &str, value: Option<&str>| {
            format!("  {:<16} {}\n", label.bold(), value.unwrap_or("-"))
        };

        output.push_str(&field("objetivo", brief.objective.as_deref()));
        output.push_str(&field(
            "criterio_exito",
            brief.success_criterion.as_deref(),
        ));
        output.push_str(&field("prioridad", brief.priority.as_deref()));
        output.push_str(&field("plazo", brief.deadline.as_deref()));
        output.push_str(&field("modo", brief.mode.as_ref().map(|m| m.as_str())));

        if !brief.constraints.is_empty() {
            output.push_str(&format!("  {}\n", "restricciones".bold()));
            for constraint in &brief.constraints {
                output.push_str(&format!("    * {}\n", constraint));
            }
        }
        if !brief.assumptions.is_empty() {
            output.push_str(&format!("  {}\n", "supuestos".bold()));
            for assumption in &brief.assumptions {
                output.push_str(&format!("    * {}\n", assumption));
            }
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, response: &ChatResponse) -> String {
        Self::format(response)
    }

    fn format_json(&self, response: &ChatResponse) -> String {
        Self::format_json(response)
    }

    fn format_reply_only(&self, response: &ChatResponse) -> String {
        Self::format_reply_only(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{AgentRole, IntakeContext, Mode, Transcript, score_from_agents};
    use serde_json::{Value, json};

    fn intake_response() -> IntakeResponse {
        IntakeResponse {
            reply: "¿Confirmas?".to_string(),
            brief: Some(Brief {
                objective: Some("Vender GPS online".to_string()),
                constraints: vec!["presupuesto $500".to_string()],
                mode: Some(Mode::Lite),
                ..Default::default()
            }),
            next_phase_hint: IntakeHint::Ready,
            context_echo: IntakeContext::new().with("__intake_turns", json!(1)),
        }
    }

    fn debate_response() -> DebateResponse {
        let mut transcript = Transcript::new();
        transcript.record(AgentRole::Coach, 0, "marco del problema");
        transcript.record(AgentRole::Tech, 1, "API y esquema");
        DebateResponse {
            reply: "plan final".to_string(),
            transcript,
            scores: score_from_agents("API", "", ""),
            agents_called: vec![AgentRole::Coach, AgentRole::Tech, AgentRole::Guard],
        }
    }

    #[test]
    fn test_format_intake() {
        let out = ConsoleFormatter::format(&ChatResponse::Intake(intake_response()));
        assert!(out.contains("¿Confirmas?"));
        assert!(out.contains("Vender GPS online"));
        assert!(out.contains("presupuesto $500"));
        assert!(out.contains("ready"));
        assert!(out.contains("__intake_turns"));
    }

    #[test]
    fn test_format_intake_without_brief() {
        let mut response = intake_response();
        response.brief = None;
        let out = ConsoleFormatter::format_intake(&response);
        assert!(!out.contains("objetivo"));
    }

    #[test]
    fn test_format_debate() {
        let out = ConsoleFormatter::format(&ChatResponse::Debate(debate_response()));
        assert!(out.contains("coach, tech, guard"));
        assert!(out.contains("ARQ (round 1)"));
        assert!(out.contains("API y esquema"));
        assert!(out.contains("plan final"));
    }

    #[test]
    fn test_format_json_matches_wire_shape() {
        let out = ConsoleFormatter::format_json(&ChatResponse::Debate(debate_response()));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["reply"], "plan final");
        assert_eq!(value["agents_called"], json!(["coach", "tech", "guard"]));
        assert!(value["scores"]["viabilidad"].is_number());
    }

    #[test]
    fn test_format_reply_only() {
        let out = ConsoleFormatter::format_reply_only(&ChatResponse::Intake(intake_response()));
        assert_eq!(out, "¿Confirmas?\n");
    }
}
