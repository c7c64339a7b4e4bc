//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Run ticket numbers through the ticket form's validation chain.
#[derive(Debug, Parser)]
#[command(name = "grok", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with form settings (`min_chars`, `required_fields`).
    #[arg(long, global = true, value_name = "PATH", env = "GROK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum ticket-number length, overriding file and environment.
    #[arg(long, global = true, value_name = "N")]
    pub min_chars: Option<usize>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise the log level (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Feed each value to the ticket-number field as a separate change.
    ///
    /// Values starting with `-` go after `--`, e.g. `grok check -- -1`.
    Check {
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },
    /// Enter a single value, then submit the form.
    Submit { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["grok", "check", "12", "123", "--min-chars", "2", "-vv"])
            .unwrap();
        assert_eq!(cli.min_chars, Some(2));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Check { ref values } if values.len() == 2));
    }

    #[test]
    fn test_hyphen_values_after_separator() {
        let cli = Cli::try_parse_from(["grok", "check", "--json", "--", "-1", "--min-chars"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.min_chars, None);
        assert!(
            matches!(cli.command, Command::Check { ref values } if values == &["-1", "--min-chars"])
        );
    }

    #[test]
    fn test_check_needs_a_value() {
        assert!(Cli::try_parse_from(["grok", "check"]).is_err());
    }
}
