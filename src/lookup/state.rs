// src/lookup/state.rs
// =============================================================================
// The state the lookup coordinator exposes to whatever displays it.
//
// Exactly one variant is active at a time. A profile and its ranked
// repositories only exist together inside `Success`, and an error message
// only exists inside `Failure`, so a renderer can never show half a result.
// =============================================================================

use serde::Serialize;

use crate::github::{AccountProfile, RepositorySummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupState {
    /// No search has been made yet
    Idle,
    /// A search is in flight; anything shown before has been cleared
    Loading,
    /// Profile plus up to five repositories, most-starred first
    Success {
        profile: AccountProfile,
        repos: Vec<RepositorySummary>,
    },
    /// The newest search failed; `message` is ready to show to the user
    Failure { message: String },
}

/// One user-initiated search, tagged with the coordinator's sequence id.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub sequence: u64,
    pub raw_username: String,
}
