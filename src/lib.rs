//! # public-url
//!
//! Validation rule that accepts only publicly-reachable http(s) URLs.
//!
//! A URL is accepted when it parses, uses `http` or `https`, has a hostname or
//! dotted-quad IPv4 host that is neither loopback nor in a private range, and
//! carries well-formed userinfo and a whitespace-free path. The checks are
//! purely textual: no DNS lookups are made, so this is not an SSRF filter.
//!
//! ## Quick Start
//!
//! ```rust
//! use public_url::{is_valid_url, UrlRule};
//!
//! assert!(is_valid_url("https://example.com/api"));
//! assert!(!is_valid_url("http://localhost:8080/"));
//!
//! let rule = UrlRule::builder().message("must be a public URL").build();
//! let err = rule.validate(Some("http://10.0.0.1/")).unwrap_err();
//! assert_eq!(err.to_string(), "must be a public URL");
//! ```

mod classify;
mod config;
mod error;
pub mod grammar;
#[cfg(feature = "cli")]
pub mod logging;
mod parsed_uri;
mod predicates;
mod rule;

pub use classify::{is_valid_url, is_valid_url_value};
pub use config::RuleConfig;
pub use error::{ConfigError, ParseError, ValidationError, DEFAULT_MESSAGE};
pub use parsed_uri::ParsedUri;
pub use rule::{UrlRule, UrlRuleBuilder};
