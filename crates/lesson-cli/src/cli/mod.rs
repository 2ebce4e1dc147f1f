use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, LocaleArg, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lsn` binary.
#[derive(Debug, Parser)]
#[command(name = "lsn", version, about = "Lesson - validated AI lesson content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language for error messages (overrides general.locale)
    #[arg(long, global = true, value_enum)]
    pub locale: Option<LocaleArg>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            locale: self.locale.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lesson_core::enums::Locale;

    use super::subcommands::{PlanCommands, SchemaCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["lsn", "--format", "raw", "--limit", "5", "schema", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(5));
        assert!(matches!(
            cli.command,
            Commands::Schema {
                action: SchemaCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lsn", "plan", "list", "--quiet", "--locale", "zh-tw"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.global_flags().locale, Some(Locale::ZhTw));
        assert!(matches!(
            cli.command,
            Commands::Plan {
                action: PlanCommands::List
            }
        ));
    }

    #[test]
    fn validate_reads_kind_and_optional_input() {
        let cli = Cli::try_parse_from([
            "lsn",
            "validate",
            "dialogue",
            "out.txt",
            "--provider",
            "gemini",
            "--extraction",
            "balanced",
        ])
        .expect("cli should parse");

        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.kind, "dialogue");
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("out.txt")));
        assert_eq!(args.provider.as_deref(), Some("gemini"));
        assert!(args.extraction.is_some());
    }

    #[test]
    fn generate_requires_topic() {
        assert!(Cli::try_parse_from(["lsn", "generate", "dialogue"]).is_err());
        assert!(
            Cli::try_parse_from(["lsn", "generate", "quiz-difficulty", "--topic", "Rain", "--difficulty", "hard"])
                .is_ok()
        );
    }

    #[test]
    fn plan_generate_skip_flags() {
        let cli = Cli::try_parse_from(["lsn", "plan", "generate", "Weather", "--skip-quiz"])
            .expect("cli should parse");
        let Commands::Plan {
            action:
                PlanCommands::Generate {
                    topic,
                    skip_quiz,
                    skip_dialogue,
                    ..
                },
        } = cli.command
        else {
            panic!("expected plan generate");
        };
        assert_eq!(topic, "Weather");
        assert!(skip_quiz);
        assert!(!skip_dialogue);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["lsn", "--format", "xml", "schema", "list"]).is_err());
    }
}
