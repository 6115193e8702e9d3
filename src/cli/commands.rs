//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: print the collection
//! - add: create a tool record
//! - update: patch a tool record
//! - login/logout: manage the local session
//!
//! With no subcommand, the TUI launches.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trove - a terminal client for a hosted collection of tool bookmarks
#[derive(Parser, Debug)]
#[command(name = "trove")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every tool in the collection
    List,

    /// Add a new tool
    Add {
        /// Tool title
        #[arg(short, long)]
        title: Option<String>,

        /// What the tool does
        #[arg(short, long)]
        description: Option<String>,

        /// Where to find it
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Update fields of an existing tool
    Update {
        /// Document id to patch
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New URL
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Store a session token issued by the auth provider
    Login {
        /// Account name
        account: String,

        /// Bearer token
        token: String,
    },

    /// Remove the local session
    Logout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["trove"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["trove", "list"]);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_parse_add_with_fields() {
        let cli = Cli::parse_from([
            "trove",
            "add",
            "--title",
            "ripgrep",
            "--url",
            "https://example.com/rg",
        ]);
        match cli.command {
            Some(Commands::Add {
                title,
                description,
                url,
            }) => {
                assert_eq!(title.as_deref(), Some("ripgrep"));
                assert!(description.is_none());
                assert_eq!(url.as_deref(), Some("https://example.com/rg"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::parse_from(["trove", "update", "abc123", "--description", "new"]);
        match cli.command {
            Some(Commands::Update {
                id, description, ..
            }) => {
                assert_eq!(id, "abc123");
                assert_eq!(description.as_deref(), Some("new"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_login() {
        let cli = Cli::parse_from(["trove", "login", "dev@example.com", "tok-123"]);
        match cli.command {
            Some(Commands::Login { account, token }) => {
                assert_eq!(account, "dev@example.com");
                assert_eq!(token, "tok-123");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["trove", "--verbose", "--config", "/tmp/t.yml", "list"]);
        assert!(cli.is_verbose());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.yml")));
    }
}
