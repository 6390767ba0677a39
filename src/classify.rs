//! Accept/reject decision for a candidate URL.

use serde_json::Value;

use crate::error::Rejection;
use crate::parsed_uri::ParsedUri;
use crate::predicates::{check_authority, check_domain, check_path, check_scheme};

/// Whether `input` is a publicly-reachable http(s) URL.
///
/// The input must parse as a URI, have a hostname or dotted-quad IPv4 host
/// that is neither loopback nor in a private range, carry well-formed
/// userinfo if any, have no whitespace in its path, and use the `http` or
/// `https` scheme in any letter case.
///
/// Never panics and never errors: every failure is a `false`. No network
/// lookups are performed.
///
/// # Example
///
/// ```rust
/// use public_url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/api"));
/// assert!(!is_valid_url("http://192.168.1.1/"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    classify(input).is_ok()
}

/// Like [`is_valid_url`], for dynamically typed values. Anything but a JSON
/// string is invalid.
pub fn is_valid_url_value(value: &Value) -> bool {
    classify_value(value).is_ok()
}

pub(crate) fn classify_value(value: &Value) -> Result<(), Rejection> {
    match value {
        Value::String(s) => classify(s),
        _ => {
            tracing::debug!(kind = "parse", %value, "rejected URL: {}", Rejection::NotAString);
            Err(Rejection::NotAString)
        }
    }
}

/// Run every check in order, stopping at the first failure.
pub(crate) fn classify(input: &str) -> Result<(), Rejection> {
    let result = run_checks(input);
    match &result {
        Ok(()) => tracing::trace!(url = input, "accepted URL"),
        Err(rejection) => {
            tracing::debug!(kind = rejection.kind(), url = input, "rejected URL: {}", rejection)
        }
    }
    result
}

fn run_checks(input: &str) -> Result<(), Rejection> {
    let uri = ParsedUri::parse(input)?;
    check_domain(&uri)?;
    check_authority(&uri)?;
    check_path(&uri)?;
    check_scheme(&uri)
}
