use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lspatch-manager")]
#[command(about = "LSPatch manager home screen", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every home card
    Home {
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the privileged helper status card
    Status {
        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },
    /// Request the privileged permission and wait for the answer
    Request {
        /// Give up waiting after this many milliseconds
        #[arg(long, default_value_t = 3000)]
        wait_ms: u64,
        /// Answer held requests (manual broker policy): grant or deny
        #[arg(long, value_parser = parse_resolution)]
        resolve: Option<bool>,
    },
    /// Show version and device facts
    Info,
    /// Copy version and device facts to the clipboard
    CopyInfo,
    /// Show the support card
    About,
}

fn parse_resolution(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "grant" => Ok(true),
        "deny" => Ok(false),
        other => Err(format!("expected grant or deny, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_wait() {
        let cli = Cli::parse_from(["lspatch-manager", "request"]);
        match cli.command {
            Commands::Request { wait_ms, resolve } => {
                assert_eq!(wait_ms, 3000);
                assert_eq!(resolve, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["lspatch-manager", "home", "--json", "-c", "/tmp/lp.toml", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/lp.toml")));
        assert!(matches!(cli.command, Commands::Home { json: true }));
    }

    #[test]
    fn resolve_accepts_grant_and_deny_only() {
        let cli = Cli::parse_from(["lspatch-manager", "request", "--resolve", "deny"]);
        assert!(matches!(
            cli.command,
            Commands::Request {
                resolve: Some(false),
                ..
            }
        ));

        assert!(Cli::try_parse_from(["lspatch-manager", "request", "--resolve", "maybe"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["lspatch-manager"]).is_err());
    }
}
