//! Per-step parser configurations.
//!
//! Configs are plain values assembled with consuming fluent setters and
//! handed to the pipeline builder. They are validated once, when the
//! pipeline is built, never on the parse path.

use std::fmt;
use std::sync::Arc;

use crate::convert::NumberConverter;
use crate::error::{ConfigError, ConfigResult};

/// Configuration for the number parser.
///
/// ```
/// use argot_core::NumberConfig;
///
/// let cfg = NumberConfig::new().min(1.0).max(6.0).round(true);
/// ```
#[derive(Clone, Default)]
pub struct NumberConfig {
    pub(crate) default_value: Option<f64>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) round: bool,
    pub(crate) reject_floats: bool,
    pub(crate) strict: bool,
    pub(crate) converter: Option<Arc<dyn NumberConverter>>,
}

impl NumberConfig {
    /// Creates a configuration with no constraints: non-strict, no bounds,
    /// no default, full-token float conversion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned as a success when there is nothing to parse.
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Inclusive lower bound; values below it yield `OUT_OF_RANGE`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound; values above it yield `OUT_OF_RANGE`.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Round the parsed value to the nearest integer. Use this to recover
    /// automatically from float input when an integer is wanted; prefer
    /// [`reject_floats`](Self::reject_floats) if an error is wanted instead.
    pub fn round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Report `FLOAT_REJECTED` for non-integral values. Takes precedence
    /// over [`round`](Self::round) when both are set.
    pub fn reject_floats(mut self, reject: bool) -> Self {
        self.reject_floats = reject;
        self
    }

    /// In strict mode exactly one token is consumed and converted. The
    /// default, non-strict mode also accepts numbers split across tokens by
    /// stray whitespace, commonly inserted by phone keyboards (a space
    /// between sign and digits, digit-group spacing like `1 000 000`), at
    /// the cost of re-converting a growing window of tokens.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Replaces the default full-token float conversion, e.g. with a
    /// converter bound to a specific locale.
    pub fn converter(mut self, converter: impl NumberConverter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }
        if let Some(default) = self.default_value {
            if let Some(min) = self.min {
                if default < min {
                    return Err(ConfigError::DefaultBelowMin { default, min });
                }
            }
            if let Some(max) = self.max {
                if default > max {
                    return Err(ConfigError::DefaultAboveMax { default, max });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for NumberConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberConfig")
            .field("default_value", &self.default_value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("round", &self.round)
            .field("reject_floats", &self.reject_floats)
            .field("strict", &self.strict)
            .field("converter", &self.converter.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Configuration for the string parser.
#[derive(Debug, Clone, Default)]
pub struct StringConfig {
    pub(crate) default_value: Option<String>,
}

impl StringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned as a success when there is nothing to parse.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Configuration for the one-of parser.
#[derive(Debug, Clone)]
pub struct OneOfConfig {
    pub(crate) default_value: Option<String>,
    pub(crate) accepted: Vec<String>,
    pub(crate) case_sensitive: bool,
}

impl OneOfConfig {
    /// Creates a configuration accepting exactly the given values.
    /// Matching is case-sensitive unless disabled via
    /// [`case_sensitive`](Self::case_sensitive).
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_value: None,
            accepted: accepted.into_iter().map(Into::into).collect(),
            case_sensitive: true,
        }
    }

    /// Value returned as a success when there is nothing to parse. Must be
    /// one of the accepted values, verbatim.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// When disabled, matching ignores case and the parsed value is the
    /// canonical accepted form, not the user's original casing.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if let Some(default) = &self.default_value {
            if !self.accepted.iter().any(|a| a == default) {
                return Err(ConfigError::DefaultNotAccepted {
                    default: default.clone(),
                });
            }
        }
        Ok(())
    }
}
