//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use council_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for turn results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Text,
    /// Raw response body as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

impl From<DomainOutputFormat> for OutputFormat {
    fn from(format: DomainOutputFormat) -> Self {
        match format {
            DomainOutputFormat::Text => OutputFormat::Text,
            DomainOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for decision-council
#[derive(Parser, Debug)]
#[command(name = "decision-council")]
#[command(author, version, about = "Facilitated multi-agent decision briefs")]
#[command(long_about = r#"
Decision Council turns a free-text business intent into a structured brief,
then runs a short debate between specialist personas to produce a plan.

A conversation has two phases:
1. Intake: a facilitator asks questions until the brief is complete
2. Debate: a coach frames the brief, specialists answer (and rebut on
   conflict), the coach fuses a plan and a guard reviews it

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config (or ./.council.toml)
3. ~/.config/decision-council/config.toml   Global config

Environment variables prefixed with COUNCIL_ override files
(e.g. COUNCIL_SERVER__BIND=0.0.0.0:8787).

Example:
  decision-council serve
  decision-council intake "quiero vender GPS, presupuesto 500"
  decision-council debate "Vender GPS online" --brief brief.json -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format in config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the chat endpoint over HTTP
    Serve {
        /// Address to bind (overrides [server] bind in config)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Run one intake turn
    Intake {
        /// What the user said
        message: String,

        /// Conversation context as a JSON object (echoed back by the previous turn)
        #[arg(long, value_name = "JSON")]
        context: Option<String>,
    },

    /// Run one debate turn
    Debate {
        /// What the user said
        message: String,

        /// JSON file holding the brief produced by intake
        #[arg(long, value_name = "FILE")]
        brief: Option<PathBuf>,

        /// Conversation context as a JSON object
        #[arg(long, value_name = "JSON")]
        context: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_intake() {
        let cli = Cli::parse_from([
            "decision-council",
            "intake",
            "vender GPS",
            "--context",
            r#"{"lite":true}"#,
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Intake {
                message: "vender GPS".to_string(),
                context: Some(r#"{"lite":true}"#.to_string()),
            })
        );
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_parse_debate_with_global_flags() {
        let cli = Cli::parse_from([
            "decision-council",
            "debate",
            "plan",
            "--brief",
            "brief.json",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Debate { brief, .. }) => {
                assert_eq!(brief, Some(PathBuf::from("brief.json")))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_bind() {
        let cli = Cli::parse_from(["decision-council", "serve", "--bind", "0.0.0.0:9000"]);
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                bind: Some("0.0.0.0:9000".to_string())
            })
        );
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Json),
            DomainOutputFormat::Json
        );
        assert_eq!(OutputFormat::from(DomainOutputFormat::Text), OutputFormat::Text);
    }
}
