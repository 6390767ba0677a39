//! Error types for public-url.

use std::path::PathBuf;

use thiserror::Error;

/// Message attached to a rejected field when no other message is configured.
pub const DEFAULT_MESSAGE: &str = "is an invalid URL";

/// A rejected value, carrying the configured message.
///
/// Deliberately opaque: callers learn that the value was rejected and with
/// which message, never which check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to attach to the field.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The input could not be parsed as a URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid URI {input:?}: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading rule configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for a rule config.
    #[error("invalid rule config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a candidate was rejected. Only ever logged.
#[derive(Debug, Error)]
pub(crate) enum Rejection {
    /// The input is not a string at all.
    #[error("value is not a string")]
    NotAString,

    /// The URI parser refused the input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Host is missing, malformed, loopback or private.
    #[error("host rejected: {reason}")]
    Host { reason: &'static str },

    /// Userinfo present but malformed.
    #[error("userinfo rejected: {reason}")]
    Userinfo { reason: &'static str },

    /// Path contains whitespace.
    #[error("path {path:?} contains whitespace")]
    Path { path: String },

    /// Scheme is not http or https.
    #[error("scheme {scheme:?} not allowed, only http/https")]
    Scheme { scheme: Option<String> },
}

impl Rejection {
    /// Short name of the failure kind, used as a log field.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::NotAString | Self::Parse(_) => "parse",
            Self::Host { .. } | Self::Userinfo { .. } | Self::Path { .. } | Self::Scheme { .. } => {
                "predicate"
            }
        }
    }
}
