//! A URL validation rule with a configurable rejection message.
//!
//! A rule is a plain value: build it once, then call it for each field value.
//! It holds no state besides its message, so one rule can be shared across
//! threads and applied to any number of fields.

use serde_json::Value;

use crate::classify::{classify, classify_value};
use crate::config::RuleConfig;
use crate::error::{ValidationError, DEFAULT_MESSAGE};

/// Rule that accepts only publicly-reachable http(s) URLs.
///
/// # Example
///
/// ```rust
/// use public_url::UrlRule;
///
/// let rule = UrlRule::builder().message("INVALID").build();
///
/// assert!(rule.validate(Some("http://google.com")).is_ok());
///
/// let err = rule.validate(Some("fluff hamster")).unwrap_err();
/// assert_eq!(err.message(), "INVALID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRule {
    message: String,
}

impl Default for UrlRule {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}

impl UrlRule {
    /// Rule with the default message `"is an invalid URL"`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> UrlRuleBuilder {
        UrlRuleBuilder::default()
    }

    pub fn from_config(cfg: &RuleConfig) -> Self {
        Self {
            message: cfg.message().to_string(),
        }
    }

    /// Message attached to rejected values.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validate one value. An absent value is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying this rule's message if the value
    /// is absent or not a publicly-reachable http(s) URL.
    pub fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        match value {
            Some(s) => classify(s).map_err(|_| self.error()),
            None => Err(self.error()),
        }
    }

    /// Validate a dynamically typed value. Non-strings are rejected.
    pub fn validate_value(&self, value: &Value) -> Result<(), ValidationError> {
        classify_value(value).map_err(|_| self.error())
    }

    /// Validate several named fields and return `(field, message)` for each
    /// rejected one, in input order.
    ///
    /// ```rust
    /// use public_url::UrlRule;
    /// use serde_json::json;
    ///
    /// let rule = UrlRule::new();
    /// let record = json!({ "url": "http://google.com", "homepage": 1 });
    /// let fields = ["url", "homepage"].map(|f| (f, &record[f]));
    ///
    /// let errors = rule.validate_fields(fields);
    /// assert_eq!(errors, vec![("homepage", "is an invalid URL".to_string())]);
    /// ```
    pub fn validate_fields<'a, K>(
        &self,
        fields: impl IntoIterator<Item = (K, &'a Value)>,
    ) -> Vec<(K, String)> {
        fields
            .into_iter()
            .filter_map(|(field, value)| {
                self.validate_value(value)
                    .err()
                    .map(|err| (field, err.message().to_string()))
            })
            .collect()
    }

    fn error(&self) -> ValidationError {
        ValidationError::new(self.message.clone())
    }
}

/// Builder for [`UrlRule`].
#[derive(Debug, Clone, Default)]
pub struct UrlRuleBuilder {
    message: Option<String>,
}

impl UrlRuleBuilder {
    /// Override the rejection message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> UrlRule {
        UrlRule {
            message: self.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        }
    }
}
