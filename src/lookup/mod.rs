// src/lookup/mod.rs
// =============================================================================
// The lookup pipeline: clean up the username, fetch the profile, fetch the
// repositories, rank them, and publish the result as a LookupState.
//
// Submodules:
// - input: Username normalization and validation
// - rank: Top-five-by-stars selection
// - state: The LookupState shown to the user
// - coordinator: Runs the pipeline and owns the current state
// =============================================================================

mod coordinator;
mod input;
mod rank;
mod state;

pub use coordinator::LookupCoordinator;
pub use rank::TOP_REPOSITORIES;
pub use state::LookupState;
