//! Validation and canonicalization of user-submitted addresses.
//!
//! The canonical form is the whole address lowercased and trimmed. It is the
//! uniqueness key of a tracked URL, so the same [`normalize_url`] must be used
//! everywhere an address is stored or looked up.

use url::Url;

use crate::{MAX_URL_LENGTH, ValidationError};

const ACCEPTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Checks that `raw` is a non-empty absolute `http(s)` URL of acceptable length.
///
/// Returns the input unchanged on success; normalization is a separate step.
///
/// # Errors
/// - [`ValidationError::EmptyInput`] if `raw` is empty or only whitespace.
/// - [`ValidationError::TooLong`] if `raw` is longer than [`MAX_URL_LENGTH`] characters.
/// - [`ValidationError::MalformedUrl`] if it is not an absolute URL with a scheme and host.
pub fn validate_url(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        tracing::warn!("empty URL submitted");
        return Err(ValidationError::EmptyInput);
    }

    let length = raw.chars().count();
    if length > MAX_URL_LENGTH {
        tracing::warn!(length, "submitted URL is too long");
        return Err(ValidationError::TooLong);
    }

    if !is_absolute_http_url(trimmed) {
        tracing::warn!(url = %trimmed, "invalid URL submitted");
        return Err(ValidationError::MalformedUrl);
    }

    Ok(raw)
}

fn is_absolute_http_url(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    // `Url::parse` accepts `http:example.com`; require the authority marker explicitly.
    let Some((scheme, rest)) = candidate.split_once("://") else {
        return false;
    };
    // The WHATWG parser skips extra slashes, so `https:///example.com` would parse.
    if rest.is_empty() || rest.starts_with(['/', '\\']) {
        return false;
    }
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    ACCEPTED_SCHEMES.contains(&parsed.scheme())
        && parsed.scheme().eq_ignore_ascii_case(scheme)
        && parsed.host_str().is_some_and(|host| !host.is_empty())
}

/// Canonical form of an address: lowercased, surrounding whitespace removed.
pub fn normalize_url(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates `raw` and returns its canonical form, ready to be stored.
///
/// # Errors
/// Any [`ValidationError`] from [`validate_url`]. Also [`ValidationError::TooLong`]
/// when lowercasing grows the address past [`MAX_URL_LENGTH`].
pub fn prepare_url(raw: &str) -> Result<String, ValidationError> {
    let accepted = validate_url(raw)?;
    let normalized = normalize_url(accepted);
    if normalized.chars().count() > MAX_URL_LENGTH {
        tracing::warn!("normalized URL is too long");
        return Err(ValidationError::TooLong);
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_inputs() {
        for input in ["", " ", "\t\n", "     "] {
            assert_eq!(validate_url(input), Err(ValidationError::EmptyInput), "{input:?}");
        }
    }

    #[test]
    fn test_too_long_is_checked_on_raw_input() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(validate_url(&long), Err(ValidationError::TooLong));

        // Padding counts: the raw string is measured as received.
        let padded = format!("{}{}", " ".repeat(250), "https://example.com");
        assert_eq!(validate_url(&padded), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let prefix = "https://example.com/";
        let url = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(url.chars().count(), MAX_URL_LENGTH);
        assert!(validate_url(&url).is_ok());
    }

    #[test]
    fn test_too_long_wins_over_malformed() {
        let long = "x".repeat(MAX_URL_LENGTH + 1);
        assert_eq!(validate_url(&long), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_malformed_inputs() {
        for input in [
            "example.com",
            "not a url",
            "http://",
            "http:example.com",
            "ftp://example.com",
            "mailto:user@example.com",
            "https://exa mple.com",
            "//example.com/path",
            "https:///example.com",
            "http:////example.com/a",
            "https://\\example.com",
        ] {
            assert_eq!(validate_url(input), Err(ValidationError::MalformedUrl), "{input:?}");
        }
    }

    #[test]
    fn test_extra_slashes_do_not_create_a_second_key() {
        assert_eq!(prepare_url("https:///example.com"), Err(ValidationError::MalformedUrl));
        assert_eq!(prepare_url("https://example.com"), Ok("https://example.com".to_owned()));
    }

    #[test]
    fn test_valid_input_is_returned_unchanged() {
        let raw = "  HTTPS://Example.com/Path?q=1  ";
        assert_eq!(validate_url(raw), Ok(raw));
        assert_eq!(validate_url("http://127.0.0.1:8080/"), Ok("http://127.0.0.1:8080/"));
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_url("  HTTP://Example.com/Path  "), "http://example.com/path");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_prepare_collapses_case_variants() {
        let first = prepare_url("HTTP://Example.com/Path").unwrap();
        let second = prepare_url("http://example.com/path").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_prepare_propagates_validation_errors() {
        assert_eq!(prepare_url("   "), Err(ValidationError::EmptyInput));
        assert_eq!(prepare_url("nope"), Err(ValidationError::MalformedUrl));
    }
}
