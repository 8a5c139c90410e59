// src/github/models.rs
// =============================================================================
// Data types decoded from GitHub API responses.
//
// Only the fields we actually show are declared. serde ignores every other
// field in the payload, so new fields GitHub adds later don't break decoding.
//
// Field names follow our own vocabulary (display_name, star_count, ...).
// The `rename(deserialize = ...)` attributes map them from GitHub's names
// while keeping our names when we serialize for --json output.
// =============================================================================

use serde::{Deserialize, Serialize};

/// A GitHub user profile from the `/users/{username}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: u64,
    pub login: String,
    /// The user's chosen name. GitHub sends `null` when it isn't set.
    #[serde(rename(deserialize = "name"), default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(rename(deserialize = "followers"))]
    pub follower_count: u64,
}

/// One entry from the `/users/{username}/repos` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(rename(deserialize = "html_url"))]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename(deserialize = "stargazers_count"))]
    pub star_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_with_null_name_and_bio() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "name": null,
            "followers": 17512,
            "public_repos": 8
        }"#;

        let profile: AccountProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.display_name, None);
        assert_eq!(profile.bio, None);
        assert_eq!(profile.follower_count, 17512);
    }

    #[test]
    fn test_repository_ignores_unknown_fields() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "My first repo",
            "stargazers_count": 80,
            "language": "C",
            "owner": { "login": "octocat" }
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.url, "https://github.com/octocat/Hello-World");
        assert_eq!(repo.star_count, 80);
    }

    #[test]
    fn test_serialized_profile_uses_our_field_names() {
        let profile = AccountProfile {
            id: 1,
            login: "torvalds".to_string(),
            display_name: Some("Linus Torvalds".to_string()),
            bio: None,
            avatar_url: "https://example.com/a.png".to_string(),
            html_url: None,
            follower_count: 3,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["display_name"], "Linus Torvalds");
        assert_eq!(value["follower_count"], 3);
    }
}
