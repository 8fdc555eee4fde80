use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `eightd` binary.
#[derive(Debug, Parser)]
#[command(
    name = "eightd",
    version,
    about = "Open an 8D problem-solving epic with linked D0-D8 user stories in Taiga"
)]
pub struct Cli {
    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Extra TOML config file (layered above .eightd/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (suppress progress lines)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_runs() {
        let cli = Cli::try_parse_from(["eightd"]).expect("cli should parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.command.unwrap_or_default(), Commands::Run);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["eightd", "plan", "--format", "json", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.command, Some(Commands::Plan));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["eightd", "--format", "table"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["eightd", "--config", "ci.toml", "-v", "run"])
            .expect("cli should parse");
        assert!(cli.verbose);
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(std::path::Path::new("ci.toml")));
        assert_eq!(flags.format, OutputFormat::Text);
    }
}
