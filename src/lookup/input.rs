// src/lookup/input.rs
// =============================================================================
// Cleans up what the user typed before we use it as a username.
//
// GitHub usernames never contain whitespace, so every whitespace character
// is dropped (not just the leading/trailing ones). If nothing is left, the
// input is rejected before any request goes out.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid username")]
    EmptyUsername,
}

// Normalizes a raw username
//
// Example:
//   "  tor valds\n" -> Ok("torvalds")
//   "   "           -> Err(EmptyUsername)
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let username: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_username_unchanged() {
        assert_eq!(normalize("torvalds"), Ok("torvalds".to_string()));
    }

    #[test]
    fn test_strips_internal_and_surrounding_whitespace() {
        assert_eq!(normalize("  tor valds\t\n"), Ok("torvalds".to_string()));
        assert_eq!(normalize("a\u{00A0}b"), Ok("ab".to_string()));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        for raw in ["", " ", "   ", "\t\n", " \r\n \u{2003} "] {
            assert_eq!(normalize(raw), Err(ValidationError::EmptyUsername), "input {:?}", raw);
        }
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::EmptyUsername.to_string(),
            "Please enter a valid username"
        );
    }
}
