// src/config.rs
// =============================================================================
// Runtime configuration: where the API lives and which token to send.
//
// The config is built once in main and handed to the GitHub client's
// constructor. Nothing reads the token from the environment after that,
// so tests can build a client with whatever fake token they like.
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use std::fmt;
use tracing::warn;
use url::Url;

use crate::cli::ConnectionArgs;

// Sent on every request; GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("repo-spotlight/", env!("CARGO_PKG_VERSION"));

/// An opaque access token. Its value never shows up in Debug output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, treating an empty or blank value as "no token".
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub credential: Option<Credential>,
    pub user_agent: String,
}

impl Config {
    pub fn new(api_base_url: &str, credential: Option<Credential>) -> Result<Self> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            credential,
            user_agent: USER_AGENT.to_string(),
        })
    }

    pub fn from_cli(args: &ConnectionArgs) -> Result<Self> {
        let credential = args.token.as_deref().and_then(Credential::new);

        match (&credential, args.require_token) {
            (None, true) => bail!("No GitHub token configured: pass --token or set GITHUB_TOKEN"),
            (None, false) => warn!("No GitHub token configured, sending unauthenticated requests"),
            _ => {}
        }

        Self::new(&args.api_url, credential)
    }
}

// The base URL must be http(s) and able to take extra path segments,
// because endpoints are built by appending "users/{username}/..." to it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API URL '{}'", raw))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("API URL must use http or https: {}", raw));
    }
    if url.cannot_be_a_base() {
        return Err(anyhow!("API URL cannot have paths appended: {}", raw));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(token: Option<&str>, require_token: bool) -> ConnectionArgs {
        ConnectionArgs {
            api_url: "https://api.github.com".to_string(),
            token: token.map(str::to_string),
            require_token,
        }
    }

    #[test]
    fn test_blank_token_is_absent() {
        assert_eq!(Credential::new(""), None);
        assert_eq!(Credential::new("   "), None);
        assert_eq!(Credential::new(" abc ").unwrap().expose(), "abc");
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("ghp_secret").unwrap();
        assert!(!format!("{:?}", credential).contains("ghp_secret"));
    }

    #[test]
    fn test_missing_token_allowed_by_default() {
        let config = Config::from_cli(&args(None, false)).unwrap();
        assert!(config.credential.is_none());
        assert!(config.user_agent.starts_with("repo-spotlight/"));
    }

    #[test]
    fn test_missing_token_rejected_when_required() {
        assert!(Config::from_cli(&args(Some(""), true)).is_err());
        assert!(Config::from_cli(&args(Some("abc"), true)).is_ok());
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(Config::new("not a url", None).is_err());
        assert!(Config::new("ftp://example.com", None).is_err());
        assert!(Config::new("http://localhost:8080/api/v3", None).is_ok());
    }
}
