//! Command-line interface

pub mod check;
pub mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const INVALID_CONFIG: i32 = 2;
    pub const NOT_READY: i32 = 3;
}

/// Draws the Promptree toolbar icons and checks an unpacked extension
#[derive(Debug, Parser)]
#[command(name = "promptree-icons", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Settings file (TOML)
    #[arg(short, long, global = true, env = "PROMPTREE_ICONS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render icon{S}.png for every configured size (default)
    Generate(generate::GenerateArgs),
    /// Check that an extension directory is ready to load
    Check(check::CheckArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["promptree-icons"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "promptree-icons",
            "generate",
            "-o",
            "images",
            "-s",
            "16",
            "--size",
            "32",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("images")));
                assert_eq!(args.sizes, vec![16, 32]);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["promptree-icons", "check"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => {
                assert_eq!(args.root, PathBuf::from("."));
                assert_eq!(args.icons_dir, PathBuf::from("images"));
                assert!(args.sizes.is_empty());
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_size() {
        assert!(Cli::try_parse_from(["promptree-icons", "generate", "-s", "big"]).is_err());
    }
}
