//! # Argot Core
//!
//! The typed argument parsing engine for chat command lines.
//!
//! A command line like `/roll 2 d6 with advantage` is split into offset-aware
//! tokens and folded through a pipeline of typed parser steps. Each step
//! consumes a prefix of the remaining tokens and hands the suffix to the next
//! one; the outcome is a [`ParsedCommand`] holding one [`ParsedArgument`] per
//! step, successful or not.
//!
//! ```text
//! "/roll 2 d6 …" ──▶ tokenizer ──▶ ┌─────────────────────────────┐
//!                                  │ step 0: number  (takes "2") │
//!                                  │ step 1: one_of  (takes "d6")│──▶ ParsedCommand
//!                                  │ step 2: rest    (takes "…") │
//!                                  └─────────────────────────────┘
//! ```
//!
//! ## Design
//!
//! - **Diagnostics are data.** A step that cannot parse its tokens records a
//!   [`ParseError`] in its argument and the pipeline keeps going; `parse`
//!   itself never fails. Configuration mistakes are different: they surface
//!   as [`ConfigError`] when the pipeline is built, before any user input
//!   exists.
//! - **Exact consumption tracking.** Tokens carry their byte offsets, so the
//!   `raw` text a step reports is the substring the user actually typed,
//!   original whitespace included.
//! - **Freeze then share.** A built [`CommandParser`] is immutable, cheap to
//!   clone, and safe to use from many threads at once.
//!
//! ## Example
//!
//! ```
//! use argot_core::{CommandParser, NumberConfig, OneOfConfig};
//!
//! let parser = CommandParser::builder()
//!     .number(NumberConfig::new().min(1.0).max(20.0).reject_floats(true))
//!     .one_of(OneOfConfig::new(["d4", "d6", "d20"]).case_sensitive(false))
//!     .rest()
//!     .build()?;
//!
//! let cmd = parser.parse("/roll 2 D6 with advantage");
//! assert!(!cmd.has_errors());
//! assert_eq!(cmd.arg(0).unwrap().value().unwrap().as_number(), Some(2.0));
//! assert_eq!(cmd.arg(1).unwrap().value().unwrap().as_text(), Some("d6"));
//! # Ok::<(), argot_core::ConfigError>(())
//! ```

pub mod argument;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod token;

pub use argument::{ArgValue, ParsedArgument, ParserResult};
pub use command::ParsedCommand;
pub use config::{NumberConfig, OneOfConfig, StringConfig};
pub use convert::{FloatConverter, NumberConverter, PrefixFloatConverter};
pub use error::{ConfigError, ConfigResult, ParseError};
pub use pipeline::{CommandParser, CommandParserBuilder, CustomStep};
pub use token::{Token, split_line, split_line_with};
