//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table with list-level checks
    Table,
    /// JSON output
    Json,
}

/// CLI arguments for mul-roster
#[derive(Parser, Debug)]
#[command(name = "mul-roster")]
#[command(author, version, about = "Validate Alpha Strike rosters against the Master Unit List")]
#[command(long_about = r#"
mul-roster checks a roster of units against the Master Unit List for a given
era and faction, and keeps a working roster you can save, share and export.

A roster is written as `skill:name` entries separated by `;`, for example
"4:Atlas AS7-D;3:Locust LCT-1V".

Configuration files are loaded from (in priority order):
1. MUL_ROSTER_* environment variables
2. --config <path>     Explicit config file
3. ./roster.toml       Project-level config
4. ~/.config/mul-roster/config.toml   Global config

Example:
  mul-roster validate --era 3025 --specific 14 --list "4:Atlas AS7-D;3:Locust LCT-1V"
  mul-roster validate --url "https://example.test/validate/result?list=...&era=3025&specific=14"
  mul-roster roster add "Atlas AS7-D" --era 3025 --specific 14
  mul-roster roster share --era 3025 --specific 14
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (defaults to the configured format, then table)
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
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a roster against the catalog
    Validate(ValidateArgs),

    /// Edit, store, share and export the working roster
    Roster {
        #[command(subcommand)]
        action: RosterCommand,
    },

    /// Show configuration sources and the merged configuration
    Config {
        /// Only list the configuration file locations
        #[arg(long)]
        sources: bool,
    },
}

/// Era and faction scope of a catalog search
#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Era code
    #[arg(long)]
    pub era: Option<String>,

    /// Specific faction code
    #[arg(long)]
    pub specific: Option<String>,

    /// General faction code
    #[arg(long)]
    pub general: Option<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Share link (or bare query string) carrying list, era and factions
    #[arg(long, conflicts_with = "list")]
    pub url: Option<String>,

    /// Encoded roster (`skill:name;skill:name`); defaults to the working roster
    #[arg(long)]
    pub list: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Subcommand, Debug)]
pub enum RosterCommand {
    /// List saved rosters
    List,

    /// Show the working roster with point values
    Show,

    /// Find a unit in the catalog and add it to the working roster
    Add {
        /// Exact unit name
        name: String,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    /// Remove a unit by position
    Remove { ordinal: usize },

    /// Set a unit's skill rating (0-7)
    Skill { ordinal: usize, skill: u8 },

    /// Remove every unit from the working roster
    Clear,

    /// Save the working roster under a name
    Save { name: String },

    /// Replace the working roster with a saved one
    Load { name: String },

    /// Delete a saved roster
    Delete { name: String },

    /// Write the working roster as a third-party list file
    Export {
        /// Destination file (defaults to the configured export file)
        path: Option<PathBuf>,
    },

    /// Print a share link for the working roster
    Share {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::parse_from([
            "mul-roster",
            "validate",
            "--era",
            "3025",
            "--specific",
            "14",
            "--list",
            "4:Atlas AS7-D",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.scope.era.as_deref(), Some("3025"));
                assert_eq!(args.list.as_deref(), Some("4:Atlas AS7-D"));
                assert!(args.url.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_url_conflicts_with_list() {
        let result = Cli::try_parse_from([
            "mul-roster",
            "validate",
            "--url",
            "list=4:Atlas",
            "--list",
            "4:Atlas",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_roster_skill() {
        let cli = Cli::parse_from(["mul-roster", "roster", "skill", "2", "3", "-o", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Command::Roster {
                action: RosterCommand::Skill { ordinal: 2, skill: 3 }
            }
        ));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
