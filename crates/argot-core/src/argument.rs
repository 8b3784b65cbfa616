//! Result model shared by all parser steps.

use std::fmt;

use serde::Serialize;

use crate::error::ParseError;
use crate::token::Token;

/// A typed argument value: a number or a piece of text.
///
/// Serializes untagged, so a JSON consumer sees a plain number or string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Number(f64),
    Text(String),
}

impl ArgValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single parsed and typed argument.
///
/// The invariant is enforced by construction: `value` is present if and only
/// if `error` is absent. A default applied on missing input counts as a
/// success with no `raw` text, since nothing was actually consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedArgument {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<ArgValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ParseError>,
}

impl ParsedArgument {
    /// A successful parse: the typed value plus the exact text it consumed.
    pub fn parsed(value: impl Into<ArgValue>, raw: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            raw: Some(raw.into()),
            error: None,
        }
    }

    /// A success produced by a configured default; no input was consumed.
    pub fn defaulted(value: impl Into<ArgValue>) -> Self {
        Self {
            value: Some(value.into()),
            raw: None,
            error: None,
        }
    }

    /// A failed parse. `raw` is the text that was examined, when any token
    /// was available to examine.
    pub fn failed(error: ParseError, raw: Option<String>) -> Self {
        Self {
            value: None,
            raw,
            error: Some(error),
        }
    }

    /// The typed value, absent when parsing failed.
    pub fn value(&self) -> Option<&ArgValue> {
        self.value.as_ref()
    }

    /// The raw text this argument consumed. Absent for defaults and for
    /// failures that had no token to examine.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The diagnostic, when parsing failed.
    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    /// Whether this argument parsed successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Views the argument as a `Result` for `?`-style consumption.
    pub fn as_result(&self) -> Result<&ArgValue, ParseError> {
        match (&self.value, self.error) {
            (Some(value), None) => Ok(value),
            (_, Some(error)) => Err(error),
            // Unreachable by construction; treat a malformed state as missing.
            (None, None) => Err(ParseError::Missing),
        }
    }
}

/// The outcome of one parser step: a parsed argument plus the suffix of the
/// input tokens the step did not consume.
#[derive(Debug)]
pub struct ParserResult<'a> {
    /// The parsed (or failed) argument.
    pub result: ParsedArgument,
    /// The tokens left for the next step. Always a suffix of the step's
    /// input slice, never a copy.
    pub unconsumed: &'a [Token<'a>],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_error_are_exclusive() {
        let ok = ParsedArgument::parsed(42.0, "42");
        assert!(ok.is_ok());
        assert_eq!(ok.value().and_then(ArgValue::as_number), Some(42.0));
        assert_eq!(ok.raw(), Some("42"));
        assert_eq!(ok.error(), None);

        let failed = ParsedArgument::failed(ParseError::SyntaxError, Some("foo".into()));
        assert!(!failed.is_ok());
        assert!(failed.value().is_none());
        assert_eq!(failed.error(), Some(ParseError::SyntaxError));
    }

    #[test]
    fn test_defaulted_has_no_raw() {
        let arg = ParsedArgument::defaulted("fallback");
        assert!(arg.is_ok());
        assert_eq!(arg.raw(), None);
        assert_eq!(arg.value().and_then(|v| v.as_text().map(String::from)), Some("fallback".into()));
    }

    #[test]
    fn test_as_result() {
        let ok = ParsedArgument::parsed(1.0, "1");
        assert_eq!(ok.as_result().unwrap().as_number(), Some(1.0));

        let failed = ParsedArgument::failed(ParseError::Missing, None);
        assert_eq!(failed.as_result().unwrap_err(), ParseError::Missing);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let arg = ParsedArgument::parsed("hi", "hi");
        assert_eq!(
            serde_json::to_string(&arg).unwrap(),
            r#"{"value":"hi","raw":"hi"}"#
        );

        let failed = ParsedArgument::failed(ParseError::Missing, None);
        assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"error":"MISSING"}"#);
    }

    #[test]
    fn test_arg_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ArgValue::Number(5.0)).unwrap(), "5.0");
        assert_eq!(serde_json::to_string(&ArgValue::Text("x".into())).unwrap(), "\"x\"");
    }
}
