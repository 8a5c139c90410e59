// src/lookup/coordinator.rs
// =============================================================================
// Runs one lookup at a time through the pipeline and owns the LookupState.
//
// How a search goes:
// 1. Normalize the username; if it's empty, go straight to Failure
// 2. Publish Loading (this clears any previous result or error)
// 3. Fetch the profile; on error, publish Failure and stop
// 4. Fetch the repositories; on error, publish Failure (the profile is dropped)
// 5. Rank the repositories and publish Success
//
// Every search gets a sequence id from a counter. A search may only publish
// while its id is still the newest, so when an older, slower search finally
// finishes, its result is thrown away instead of overwriting the newer one.
// The older request isn't cancelled; we just ignore what it brings back.
//
// The current state lives in a `tokio::sync::watch` channel: the coordinator
// holds the sender, and the presentation layer can read a snapshot or
// subscribe to see every transition.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::input::normalize;
use super::rank::rank;
use super::state::{LookupRequest, LookupState};
use crate::github::{AccountProfile, FetchError, GitHubApi, RepositorySummary};

/// What happened to a search's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The search's result is now the current state
    Applied,
    /// A newer search started first, so this result was discarded
    Superseded,
}

pub struct LookupCoordinator<A> {
    api: A,
    latest: AtomicU64,
    state: watch::Sender<LookupState>,
}

impl<A: GitHubApi> LookupCoordinator<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(LookupState::Idle);
        Self {
            api,
            latest: AtomicU64::new(0),
            state,
        }
    }

    /// A copy of the current state.
    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Runs a full lookup for what the user typed.
    ///
    /// Starting a search supersedes any search still in flight, including
    /// when the new input turns out to be invalid.
    pub async fn search(&self, raw_username: &str) -> LookupOutcome {
        let request = LookupRequest {
            sequence: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
            raw_username: raw_username.to_string(),
        };

        let username = match normalize(&request.raw_username) {
            Ok(username) => username,
            Err(err) => {
                debug!(sequence = request.sequence, raw = %request.raw_username, "rejected username");
                return self.publish(
                    request.sequence,
                    LookupState::Failure {
                        message: err.to_string(),
                    },
                );
            }
        };

        info!(sequence = request.sequence, %username, "starting lookup");
        if self.publish(request.sequence, LookupState::Loading) == LookupOutcome::Superseded {
            return LookupOutcome::Superseded;
        }

        let fetched = self.fetch_all(request.sequence, &username).await;

        let next = match fetched {
            Ok(Some((profile, repos))) => {
                info!(sequence = request.sequence, %username, repos = repos.len(), "lookup succeeded");
                LookupState::Success { profile, repos }
            }
            Ok(None) => {
                info!(sequence = request.sequence, %username, "superseded before fetching repositories");
                return LookupOutcome::Superseded;
            }
            Err(err) => {
                if err.is_upstream() {
                    warn!(sequence = request.sequence, %username, error = %err, "lookup failed");
                } else {
                    info!(sequence = request.sequence, %username, error = %err, "lookup failed");
                }
                LookupState::Failure {
                    message: err.to_string(),
                }
            }
        };

        let outcome = self.publish(request.sequence, next);
        if outcome == LookupOutcome::Superseded {
            info!(sequence = request.sequence, %username, "discarded result of superseded lookup");
        }
        outcome
    }

    // Profile first, then repositories. Returns Ok(None) if a newer search
    // started while the profile was loading, in which case the repository
    // request is never sent.
    async fn fetch_all(
        &self,
        sequence: u64,
        username: &str,
    ) -> Result<Option<(AccountProfile, Vec<RepositorySummary>)>, FetchError> {
        let profile = self.api.fetch_profile(username).await?;

        if self.is_superseded(sequence) {
            return Ok(None);
        }

        let repos = self.api.fetch_repositories(username).await?;
        Ok(Some((profile, rank(repos))))
    }

    fn is_superseded(&self, sequence: u64) -> bool {
        self.latest.load(Ordering::SeqCst) != sequence
    }

    // Replaces the state only if `sequence` is still the newest search. The
    // check runs under the channel's lock so it can't interleave with another
    // search's publish.
    fn publish(&self, sequence: u64, next: LookupState) -> LookupOutcome {
        let applied = self.state.send_if_modified(|current| {
            if self.is_superseded(sequence) {
                return false;
            }
            *current = next;
            true
        });

        if applied {
            LookupOutcome::Applied
        } else {
            LookupOutcome::Superseded
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a watch channel?
//    - A channel that holds exactly one value: the latest one
//    - Receivers are told when it changes and can read it any time
//    - If it changes twice before a receiver looks, the receiver only sees
//      the second value
//
// 2. Why AtomicU64 instead of a plain u64?
//    - `search` takes `&self`, so two searches can run at once
//    - An atomic counter can be bumped through a shared reference
//    - fetch_add returns the old value, so `+ 1` is this search's id
//
// 3. What does generic `A: GitHubApi` buy us?
//    - main passes the real GitHubClient
//    - the tests below pass a fake that counts calls and sleeps on demand
// -----------------------------------------------------------------------------
