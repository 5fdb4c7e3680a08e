use crate::core::export::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "media-registry")]
#[command(about = "In-memory registry of print media and radio station agencies")]
pub struct CliConfig {
    /// TOML seed file with the agencies to load at startup
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for listings: text, json or csv
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive command shell (default)
    Shell,
    /// Register two sample agencies, update them and print the table before and after
    Demo,
    /// Print the seeded registry and exit
    List,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }

    /// Format from the command line, if one was given.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format.as_deref().map(str::parse).transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(format) = &self.format {
            validate_one_of("format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_shell() {
        let config = CliConfig::parse_from(["media-registry"]);
        assert!(matches!(config.command(), Command::Shell));
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_list_with_format() {
        let config = CliConfig::parse_from([
            "media-registry",
            "--format",
            "json",
            "-c",
            "seed.toml",
            "list",
        ]);
        assert!(matches!(config.command(), Command::List));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
        assert_eq!(config.config.as_deref(), Some("seed.toml"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let config = CliConfig::parse_from(["media-registry", "--format", "xml"]);
        assert!(config.validate().is_err());
    }
}
