// src/render.rs
// =============================================================================
// Turns a LookupState into terminal output.
//
// This is the only part of the program that decides how things look. It
// never changes the state, it only prints it, either as a human-readable
// block or as a JSON document (--json).
// =============================================================================

use anyhow::Result;
use std::io::Write;

use crate::github::{AccountProfile, RepositorySummary};
use crate::lookup::{LookupState, TOP_REPOSITORIES};

// Prints a state to stdout
pub fn print_state(state: &LookupState, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_state(&mut out, state, json)?;
    out.flush()?;
    Ok(())
}

pub fn write_state(out: &mut impl Write, state: &LookupState, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(state)?)?;
        return Ok(());
    }

    match state {
        LookupState::Idle => {}
        LookupState::Loading => writeln!(out, "⏳ Loading...")?,
        LookupState::Success { profile, repos } => {
            write_profile(out, profile)?;
            writeln!(out)?;
            write_repositories(out, repos)?;
        }
        LookupState::Failure { message } => writeln!(out, "❌ Error: {}", message)?,
    }
    Ok(())
}

fn write_profile(out: &mut impl Write, profile: &AccountProfile) -> Result<()> {
    // Users without a display name are shown by their login
    let name = profile.display_name.as_deref().unwrap_or(&profile.login);

    writeln!(out, "👤 {} (@{})", name, profile.login)?;
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        writeln!(out, "   {}", bio.trim())?;
    }
    writeln!(out, "   Followers: {}", profile.follower_count)?;
    writeln!(out, "   Avatar: {}", profile.avatar_url)?;
    if let Some(url) = &profile.html_url {
        writeln!(out, "   Profile: {}", url)?;
    }
    Ok(())
}

fn write_repositories(out: &mut impl Write, repos: &[RepositorySummary]) -> Result<()> {
    writeln!(out, "⭐ Top {} Repositories", TOP_REPOSITORIES)?;

    if repos.is_empty() {
        writeln!(out, "   (no public repositories)")?;
        return Ok(());
    }

    for (position, repo) in repos.iter().enumerate() {
        writeln!(out, "   {}. {}", position + 1, repo.name)?;
        writeln!(out, "      {}", repo.url)?;
        writeln!(out, "      Stars: {}", repo.star_count)?;
        if let Some(description) = &repo.description {
            writeln!(out, "      {}", description)?;
        }
    }
    Ok(())
}
