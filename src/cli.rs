// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things). Flags marked with
// `env = "..."` fall back to an environment variable when not given.
// =============================================================================

use clap::{Args, Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-spotlight",
    version,
    about = "Look up a GitHub user and show their five most-starred repositories",
    long_about = "repo-spotlight fetches a GitHub user's profile and repository list, \
                  ranks the repositories by stars and prints the top five."
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print debug logs to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// Settings for reaching the GitHub API, shared by every subcommand
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the GitHub REST API
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        global = true
    )]
    pub api_url: String,

    /// Access token sent as `Authorization: token <TOKEN>`
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Fail instead of sending unauthenticated requests when no token is set
    #[arg(long, global = true)]
    pub require_token: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a single user
    ///
    /// Example: repo-spotlight user torvalds
    User {
        /// GitHub username (whitespace is ignored)
        username: String,

        /// Output each state as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read usernames from stdin, one per line, and look each one up
    ///
    /// Example: printf 'torvalds\noctocat\n' | repo-spotlight interactive
    Interactive {
        /// Output each state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_command() {
        let cli = Cli::try_parse_from(["repo-spotlight", "user", "torvalds", "--json"]).unwrap();
        match cli.command {
            Commands::User { username, json } => {
                assert_eq!(username, "torvalds");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "repo-spotlight",
            "interactive",
            "--api-url",
            "http://localhost:8080",
            "--require-token",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.connection.api_url, "http://localhost:8080");
        assert!(cli.connection.require_token);
        assert!(cli.verbose);
    }

    #[test]
    fn test_user_requires_username() {
        assert!(Cli::try_parse_from(["repo-spotlight", "user"]).is_err());
    }
}
