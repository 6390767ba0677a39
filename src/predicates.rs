//! Structural checks run against a [`ParsedUri`].
//!
//! Each check returns `Ok(())` or the [`Rejection`] describing why it failed.
//! They are evaluated in order by [`classify`](crate::classify) and stop at
//! the first failure.

use crate::error::Rejection;
use crate::grammar::{
    is_domain_name, is_ipv4_address, is_loopback, is_private_range, is_valid_password,
    is_valid_user,
};
use crate::parsed_uri::ParsedUri;

/// Host must be a hostname or dotted quad, and neither loopback nor private.
///
/// The exclusions are checked against the host as written and against the
/// parser's canonical host, so `0177.0.0.01` is treated as `127.0.0.1`.
pub(crate) fn check_domain(uri: &ParsedUri) -> Result<(), Rejection> {
    let host = uri.host().ok_or(Rejection::Host {
        reason: "URL must have a host",
    })?;

    if !(is_domain_name(host) || is_ipv4_address(host)) {
        return Err(Rejection::Host {
            reason: "not a hostname or IPv4 address",
        });
    }

    for candidate in std::iter::once(host).chain(uri.canonical_host()) {
        if is_loopback(candidate) {
            return Err(Rejection::Host {
                reason: "loopback host",
            });
        }
        if is_private_range(candidate) {
            return Err(Rejection::Host {
                reason: "private address range",
            });
        }
    }

    Ok(())
}

/// Userinfo, when present, must be `user[:password]` with no whitespace, `:`
/// or `@` in either part.
pub(crate) fn check_authority(uri: &ParsedUri) -> Result<(), Rejection> {
    let blank = |s: Option<&str>| s.map_or(true, |s| s.trim().is_empty());
    if blank(uri.user()) && blank(uri.password()) {
        return Ok(());
    }

    if !uri.user().is_some_and(is_valid_user) {
        return Err(Rejection::Userinfo {
            reason: "malformed username",
        });
    }

    // An absent password (no `:`) does not match the password grammar.
    if !uri.password().is_some_and(is_valid_password) {
        return Err(Rejection::Userinfo {
            reason: "malformed password",
        });
    }

    Ok(())
}

/// Path must not contain whitespace. Percent-encoding is not checked.
pub(crate) fn check_path(uri: &ParsedUri) -> Result<(), Rejection> {
    if uri.path().chars().any(char::is_whitespace) {
        return Err(Rejection::Path {
            path: uri.path().to_string(),
        });
    }
    Ok(())
}

/// Scheme must be `http` or `https`, ignoring case.
pub(crate) fn check_scheme(uri: &ParsedUri) -> Result<(), Rejection> {
    match uri.scheme() {
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => Ok(()),
        scheme => Err(Rejection::Scheme {
            scheme: scheme.map(str::to_string),
        }),
    }
}
