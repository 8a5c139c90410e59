// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and build the GitHub client from the config
// 3. Run one lookup (or one per stdin line) and print every state change
// 4. Exit with proper code (0 = success, 1 = lookup failed, 2 = error)
//
// The runtime is single-threaded: a lookup and the code printing its
// progress are two futures taking turns on the same thread.
// =============================================================================

mod cli;
mod config;
mod github;
mod lookup;
mod render;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use github::{GitHubApi, GitHubClient};
use lookup::{LookupCoordinator, LookupState};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = lookup succeeded (or interactive mode reached end of input)
//   Ok(1) = lookup ended in a Failure state
//   Err   = configuration or I/O problem
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli.connection)?;
    let client = GitHubClient::new(&config)?;
    let coordinator = LookupCoordinator::new(client);

    match cli.command {
        Commands::User { username, json } => handle_user(&coordinator, &username, json).await,
        Commands::Interactive { json } => handle_interactive(&coordinator, json).await,
    }
}

// Logs go to stderr so they never mix with --json output on stdout.
// RUST_LOG picks the filter (default "warn"); --verbose forces debug logs.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("repo_spotlight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Handles the 'user' subcommand
async fn handle_user<A: GitHubApi>(
    coordinator: &LookupCoordinator<A>,
    username: &str,
    json: bool,
) -> Result<i32> {
    match search_and_render(coordinator, username, json).await? {
        LookupState::Success { .. } => Ok(0),
        _ => Ok(1),
    }
}

// Handles the 'interactive' subcommand: every line read is a new search
async fn handle_interactive<A: GitHubApi>(
    coordinator: &LookupCoordinator<A>,
    json: bool,
) -> Result<i32> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        search_and_render(coordinator, &line, json).await?;
    }

    Ok(0)
}

// Runs one search while printing each state it moves through.
//
// The watch channel only keeps the latest value, so if the search settles
// before we get to print, the final state is printed after it completes.
async fn search_and_render<A: GitHubApi>(
    coordinator: &LookupCoordinator<A>,
    raw_username: &str,
    json: bool,
) -> Result<LookupState> {
    let mut updates = coordinator.subscribe();
    let search = coordinator.search(raw_username);
    tokio::pin!(search);

    loop {
        tokio::select! {
            biased;

            changed = updates.changed() => {
                if changed.is_err() {
                    (&mut search).await;
                    break;
                }
                let state = updates.borrow_and_update().clone();
                render::print_state(&state, json)?;
            }
            _ = &mut search => break,
        }
    }

    let state = coordinator.state();
    if updates.has_changed().unwrap_or(false) {
        render::print_state(&state, json)?;
    }
    Ok(state)
}
