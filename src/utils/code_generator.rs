//! Short code generation and alias validation.
//!
//! Generated codes are drawn from the URL-safe base64 alphabet
//! (`A-Z a-z 0-9 - _`). Every character encodes six fresh random bits, so
//! each of the 64 symbols is equally likely. Uniqueness is not guaranteed
//! here; the registry retries on collision.

use std::sync::LazyLock;

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use serde_json::json;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Upper bound for both aliases and generated codes.
pub const MAX_CODE_LENGTH: usize = 20;

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias pattern is valid"));

/// Generates a random short code of `length` characters.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if `length` is outside `1..=20` or the OS
/// random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8)?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length: usize) -> Result<String, AppError> {
    if length == 0 || length > MAX_CODE_LENGTH {
        return Err(AppError::internal(
            "Invalid code length",
            json!({ "length": length, "max": MAX_CODE_LENGTH }),
        ));
    }

    let mut buffer = vec![0u8; (length * 6).div_ceil(8)];
    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buffer);
    code.truncate(length);

    Ok(code)
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-20 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::Validation`] if either rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_alias("my_link-2024").is_ok());
/// assert!(validate_alias("bad@alias").is_err());
/// ```
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::invalid_alias(alias, "Alias must not be empty"));
    }

    let length = alias.chars().count();
    if length > MAX_CODE_LENGTH {
        return Err(AppError::invalid_alias(
            alias,
            format!("Alias must be at most {MAX_CODE_LENGTH} characters, got {length}"),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::invalid_alias(
            alias,
            "Alias may only contain letters, digits, hyphens and underscores",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(code: &str) -> bool {
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_generate_code_default_length() {
        let code = generate_code(DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), 8);
        assert!(is_url_safe(&code));
    }

    #[test]
    fn test_generate_code_every_length() {
        for length in 1..=MAX_CODE_LENGTH {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
            assert!(is_url_safe(&code));
        }
    }

    #[test]
    fn test_generate_code_rejects_bad_length() {
        assert!(matches!(generate_code(0), Err(AppError::Internal { .. })));
        assert!(matches!(generate_code(21), Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_generate_code_no_padding() {
        for _ in 0..100 {
            assert!(!generate_code(DEFAULT_CODE_LENGTH).unwrap().contains('='));
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH).unwrap())
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code(MAX_CODE_LENGTH).unwrap().into_bytes())
            .map(char::from)
            .collect();

        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn test_validate_alias_accepts_full_charset() {
        assert!(validate_alias("Ab9_-").is_ok());
        assert!(validate_alias("ex1").is_ok());
        assert!(validate_alias("a").is_ok());
    }

    #[test]
    fn test_validate_alias_max_length() {
        assert!(validate_alias(&"a".repeat(20)).is_ok());

        let err = validate_alias(&"a".repeat(21)).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("at most 20"));
    }

    #[test]
    fn test_validate_alias_rejects_at_sign() {
        let err = validate_alias("my@alias").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("letters, digits"));
    }

    #[test]
    fn test_validate_alias_rejects_spaces_and_slashes() {
        assert!(validate_alias("my alias").is_err());
        assert!(validate_alias("a/b").is_err());
        assert!(validate_alias("ümlaut").is_err());
    }

    #[test]
    fn test_validate_alias_rejects_empty() {
        assert!(validate_alias("").is_err());
    }
}
