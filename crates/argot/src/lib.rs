//! # Argot
//!
//! Typed, validated argument parsing for chat command lines.
//!
//! Argot turns one line of free-form text (`/roll 2 d6 with advantage`) into
//! a structured record of typed arguments plus per-argument diagnostics,
//! tracking exactly which part of the original text each argument consumed.
//! It knows nothing about transports, handlers, or any bot framework's
//! object model: feed it a string, get back a
//! [`ParsedCommand`](argot_core::ParsedCommand), and decide yourself what
//! to do with it.
//!
//! ## Quick Start
//!
//! ```
//! use argot::prelude::*;
//!
//! let parser = CommandParser::builder()
//!     .number(NumberConfig::new().min(1.0).max(20.0).default_value(1.0))
//!     .one_of(OneOfConfig::new(["d4", "d6", "d20"]).case_sensitive(false))
//!     .rest()
//!     .build()?;
//!
//! let cmd = parser.parse("/roll 2 D6 for initiative");
//! if cmd.has_errors() {
//!     // Refuse the command, show usage, ...
//! } else {
//!     let count = cmd.arg(0).unwrap().value().unwrap().as_number();
//!     assert_eq!(count, Some(2.0));
//! }
//! # Ok::<(), ConfigError>(())
//! ```

pub use argot_core as core;

pub use argot_core::{
    ArgValue, CommandParser, CommandParserBuilder, ConfigError, ConfigResult, CustomStep,
    FloatConverter, NumberConfig, NumberConverter, OneOfConfig, ParseError, ParsedArgument,
    ParsedCommand, ParserResult, PrefixFloatConverter, StringConfig, Token, split_line,
    split_line_with,
};

/// Prelude module for convenient imports.
///
/// ```
/// use argot::prelude::*;
/// ```
pub mod prelude {
    pub use argot_core::{
        ArgValue, CommandParser, CommandParserBuilder, ConfigError, ConfigResult, NumberConfig,
        NumberConverter, OneOfConfig, ParseError, ParsedArgument, ParsedCommand, StringConfig,
    };
}
