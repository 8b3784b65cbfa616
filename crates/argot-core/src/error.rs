//! Error types for parsing and pipeline assembly.
//!
//! Two distinct surfaces live here:
//!
//! - [`ParseError`]: per-argument diagnostics produced while parsing user
//!   input. These are data values embedded in a
//!   [`ParsedArgument`](crate::ParsedArgument), never returned as `Err`
//!   across the pipeline boundary.
//! - [`ConfigError`]: pipeline-assembly mistakes (inverted bounds, defaults
//!   outside the allowed set). These indicate a programming error and are
//!   returned fatally from
//!   [`CommandParserBuilder::build`](crate::CommandParserBuilder::build),
//!   never deferred to parse time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic attached to a single argument when parsing it failed.
///
/// Serializes to stable SCREAMING_SNAKE_CASE wire codes (`MISSING`,
/// `SYNTAX_ERROR`, ...).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseError {
    /// An expected argument is missing and no default was configured.
    #[error("expected argument is missing")]
    Missing,

    /// The consumed text could not be converted to the target type.
    #[error("the text could not be converted to the expected type")]
    SyntaxError,

    /// The converted number violates a configured `min`/`max` bound.
    #[error("the value is outside the configured bounds")]
    OutOfRange,

    /// A non-integral number was parsed where an integer was required.
    #[error("a float was parsed where an integer was required")]
    FloatRejected,

    /// The token does not match any of the accepted values.
    #[error("the value is not among the accepted ones")]
    ValueNotListed,
}

/// Errors detected while assembling a command parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min` is greater than `max`.
    #[error("min ({min}) can not be greater than max ({max})")]
    InvertedBounds { min: f64, max: f64 },

    /// The configured default is below `min`.
    #[error("default value {default} is below the configured min {min}")]
    DefaultBelowMin { default: f64, min: f64 },

    /// The configured default is above `max`.
    #[error("default value {default} is above the configured max {max}")]
    DefaultAboveMax { default: f64, max: f64 },

    /// The configured default is not part of the accepted set.
    #[error("default value {default:?} is not included in the accepted values")]
    DefaultNotAccepted { default: String },
}

/// Result type for pipeline-assembly operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
