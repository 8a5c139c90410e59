// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching a user's profile (GET /users/{username})
// - Fetching the first page of a user's repositories
//   (GET /users/{username}/repos?per_page=100)
// - Mapping HTTP statuses and bad payloads to typed errors
//
// Everything above this module only sees the `GitHubApi` trait, so the
// lookup logic can be tested without a network.
//
// Rust concepts:
// - Traits: A shared interface the real client and test fakes both implement
// - async-trait: Lets trait methods be async
// =============================================================================

mod client;
mod error;
mod models;

use async_trait::async_trait;

pub use client::GitHubClient;
pub use error::FetchError;
pub use models::{AccountProfile, RepositorySummary};

// The two calls the lookup pipeline needs from GitHub.
//
// Send + Sync so a coordinator holding one can be shared between
// concurrently running lookups.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetches the public profile for `username`.
    async fn fetch_profile(&self, username: &str) -> Result<AccountProfile, FetchError>;

    /// Fetches up to one page (100 entries) of repositories owned by `username`.
    async fn fetch_repositories(&self, username: &str)
        -> Result<Vec<RepositorySummary>, FetchError>;
}
