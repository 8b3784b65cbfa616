//! Pipeline builder and the compiled command parser.
//!
//! [`CommandParserBuilder`] collects parser steps through consuming fluent
//! calls; [`CommandParserBuilder::build`] validates every configuration and
//! freezes the steps into a [`CommandParser`]. The compiled parser is a
//! wholly independent value: the builder can be mutated or dropped afterward
//! without affecting it, and it can be cloned cheaply and invoked from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use argot_core::{CommandParser, NumberConfig, OneOfConfig};
//!
//! let parser = CommandParser::builder()
//!     .number(NumberConfig::new().min(1.0).default_value(1.0))
//!     .one_of(OneOfConfig::new(["asc", "desc"]).default_value("asc"))
//!     .rest()
//!     .build()
//!     .unwrap();
//!
//! let cmd = parser.parse("/list 10 desc open bugs");
//! assert_eq!(cmd.command(), "/list");
//! assert!(!cmd.has_errors());
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::argument::ParserResult;
use crate::command::ParsedCommand;
use crate::config::{NumberConfig, OneOfConfig, StringConfig};
use crate::error::ConfigResult;
use crate::parsers;
use crate::token::{Token, split_line};

/// A type-erased custom parser step.
pub type CustomStep = Arc<dyn for<'a> Fn(&'a [Token<'a>]) -> ParserResult<'a> + Send + Sync>;

#[derive(Clone)]
enum Step {
    Number(NumberConfig),
    String(StringConfig),
    OneOf(OneOfConfig),
    Rest,
    Custom(CustomStep),
}

impl Step {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Self::Number(cfg) => cfg.validate(),
            Self::OneOf(cfg) => cfg.validate(),
            Self::String(_) | Self::Rest | Self::Custom(_) => Ok(()),
        }
    }

    fn run<'a>(&self, tokens: &'a [Token<'a>]) -> ParserResult<'a> {
        match self {
            Self::Number(cfg) => parsers::number(tokens, cfg),
            Self::String(cfg) => parsers::string(tokens, cfg),
            Self::OneOf(cfg) => parsers::one_of(tokens, cfg),
            Self::Rest => parsers::rest(tokens),
            Self::Custom(step) => step(tokens),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::OneOf(_) => "one_of",
            Self::Rest => "rest",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Fluent builder for a [`CommandParser`].
///
/// Steps run in the order they are declared, each consuming a prefix of the
/// tokens left over by the previous one.
#[derive(Clone, Default)]
pub struct CommandParserBuilder {
    steps: Vec<Step>,
}

impl CommandParserBuilder {
    /// Creates an empty builder. Equivalent to
    /// [`CommandParser::builder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a step extracting a number.
    pub fn number(mut self, cfg: NumberConfig) -> Self {
        self.steps.push(Step::Number(cfg));
        self
    }

    /// Adds a step extracting a single-token string.
    pub fn string(mut self, cfg: StringConfig) -> Self {
        self.steps.push(Step::String(cfg));
        self
    }

    /// Adds a step extracting a string from a set of accepted values.
    pub fn one_of(mut self, cfg: OneOfConfig) -> Self {
        self.steps.push(Step::OneOf(cfg));
        self
    }

    /// Adds a step consuming all remaining text.
    pub fn rest(mut self) -> Self {
        self.steps.push(Step::Rest);
        self
    }

    /// Adds an arbitrary step. The closure receives the remaining tokens and
    /// must return a [`ParserResult`] whose `unconsumed` is a suffix of its
    /// input.
    pub fn custom<F>(mut self, step: F) -> Self
    where
        F: for<'a> Fn(&'a [Token<'a>]) -> ParserResult<'a> + Send + Sync + 'static,
    {
        self.steps.push(Step::Custom(Arc::new(step)));
        self
    }

    /// Number of steps declared so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were declared yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validates every step configuration and compiles the pipeline.
    ///
    /// Validation failures are programming mistakes and surface here, at
    /// assembly time, never during parsing. The returned parser holds its
    /// own copy of the steps: mutating or rebuilding this builder afterwards
    /// has no effect on it.
    pub fn build(&self) -> ConfigResult<CommandParser> {
        for step in &self.steps {
            step.validate()?;
        }
        Ok(CommandParser {
            steps: self.steps.clone().into(),
        })
    }
}

impl fmt::Debug for CommandParserBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParserBuilder")
            .field("steps", &self.steps)
            .finish()
    }
}

/// A compiled, reusable command-line parser.
///
/// Internally an `Arc` over a frozen step list, so cloning is cheap and a
/// single parser can be shared across threads; every [`parse`](Self::parse)
/// call allocates its own tokens and results and mutates nothing.
#[derive(Clone)]
pub struct CommandParser {
    steps: Arc<[Step]>,
}

impl CommandParser {
    /// Starts building a parser.
    pub fn builder() -> CommandParserBuilder {
        CommandParserBuilder::new()
    }

    /// Number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Parses one command line.
    ///
    /// The first token becomes the command (empty when the line has no
    /// tokens); the remaining tokens are folded through the steps in
    /// declaration order. Steps that run after the tokens are exhausted see
    /// an empty slice and apply their own empty-input policy. This never
    /// fails: per-argument diagnostics live inside the returned record.
    pub fn parse(&self, line: &str) -> ParsedCommand {
        let tokens = split_line(line);
        let (command, mut remaining) = match tokens.split_first() {
            Some((first, rest)) => (first.text().to_string(), rest),
            None => (String::new(), &tokens[..]),
        };

        let mut args = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let available = remaining.len();
            let ParserResult { result, unconsumed } = step.run(remaining);
            trace!(
                step = index,
                kind = step.kind(),
                consumed = available - unconsumed.len(),
                error = ?result.error(),
                "parser step finished"
            );
            args.push(result);
            remaining = unconsumed;
        }

        let errors = args.iter().filter(|arg| !arg.is_ok()).count();
        debug!(command = %command, steps = self.steps.len(), errors, "command line parsed");

        ParsedCommand::new(command, line, args)
    }
}

impl fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParser")
            .field("steps", &self.steps)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{ArgValue, ParsedArgument};
    use crate::error::{ConfigError, ParseError};

    fn number_of(cmd: &ParsedCommand, index: usize) -> Option<f64> {
        cmd.arg(index)?.value()?.as_number()
    }

    fn text_of(cmd: &ParsedCommand, index: usize) -> Option<&str> {
        cmd.arg(index)?.value()?.as_text()
    }

    #[test]
    fn test_full_pipeline() {
        let parser = CommandParser::builder()
            .number(NumberConfig::new().min(1.0).max(100.0))
            .one_of(OneOfConfig::new(["asc", "desc"]).case_sensitive(false))
            .rest()
            .build()
            .unwrap();

        let cmd = parser.parse("/list 10 DESC open bugs only");
        assert_eq!(cmd.command(), "/list");
        assert_eq!(cmd.raw(), "/list 10 DESC open bugs only");
        assert!(!cmd.has_errors());
        assert_eq!(number_of(&cmd, 0), Some(10.0));
        assert_eq!(text_of(&cmd, 1), Some("desc"));
        assert_eq!(text_of(&cmd, 2), Some("open bugs only"));
    }

    #[test]
    fn test_steps_never_see_consumed_tokens() {
        let parser = CommandParser::builder()
            .number(NumberConfig::new())
            .string(StringConfig::new())
            .rest()
            .build()
            .unwrap();

        // The number step consumes "1 000"; the string step must start at
        // "foo", not somewhere inside the number.
        let cmd = parser.parse("/cmd 1 000 foo bar baz");
        assert_eq!(number_of(&cmd, 0), Some(1000.0));
        assert_eq!(text_of(&cmd, 1), Some("foo"));
        assert_eq!(text_of(&cmd, 2), Some("bar baz"));
    }

    #[test]
    fn test_steps_after_exhaustion_apply_their_own_policy() {
        let parser = CommandParser::builder()
            .string(StringConfig::new())
            .number(NumberConfig::new().default_value(7.0))
            .string(StringConfig::new())
            .rest()
            .build()
            .unwrap();

        let cmd = parser.parse("/cmd only");
        assert_eq!(text_of(&cmd, 0), Some("only"));
        assert_eq!(number_of(&cmd, 1), Some(7.0));
        assert_eq!(cmd.arg(2).unwrap().error(), Some(ParseError::Missing));
        assert_eq!(text_of(&cmd, 3), Some(""));
    }

    #[test]
    fn test_failed_step_still_advances_the_pipeline() {
        let parser = CommandParser::builder()
            .one_of(OneOfConfig::new(["on", "off"]))
            .string(StringConfig::new())
            .build()
            .unwrap();

        let cmd = parser.parse("/toggle maybe lights");
        assert!(cmd.has_errors());
        assert_eq!(cmd.arg(0).unwrap().error(), Some(ParseError::ValueNotListed));
        assert_eq!(text_of(&cmd, 1), Some("lights"));
    }

    #[test]
    fn test_empty_line() {
        let parser = CommandParser::builder()
            .number(NumberConfig::new())
            .rest()
            .build()
            .unwrap();

        let cmd = parser.parse("");
        assert_eq!(cmd.command(), "");
        assert_eq!(cmd.raw(), "");
        assert_eq!(cmd.arg(0).unwrap().error(), Some(ParseError::Missing));
        assert_eq!(text_of(&cmd, 1), Some(""));
    }

    #[test]
    fn test_custom_step() {
        fn pair<'a>(tokens: &'a [Token<'a>]) -> ParserResult<'a> {
            let taken = tokens.len().min(2);
            let value = tokens[..taken]
                .iter()
                .map(|t| t.text())
                .collect::<Vec<_>>()
                .join("-");
            ParserResult {
                result: ParsedArgument::parsed(value.clone(), value),
                unconsumed: &tokens[taken..],
            }
        }

        let parser = CommandParser::builder()
            .custom(pair)
            .rest()
            .build()
            .unwrap();

        let cmd = parser.parse("/cmd a b c d");
        assert_eq!(text_of(&cmd, 0), Some("a-b"));
        assert_eq!(text_of(&cmd, 1), Some("c d"));
    }

    #[test]
    fn test_invalid_config_fails_at_build_time() {
        let err = CommandParser::builder()
            .number(NumberConfig::new().min(10.0).max(5.0))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvertedBounds { min: 10.0, max: 5.0 });

        let err = CommandParser::builder()
            .one_of(OneOfConfig::new(["a"]).default_value("z"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DefaultNotAccepted { default: "z".into() });
    }

    #[test]
    fn test_building_twice_is_idempotent() {
        let builder = CommandParser::builder()
            .number(NumberConfig::new().round(true))
            .one_of(OneOfConfig::new(["ONE", "TWO"]).case_sensitive(false))
            .rest();

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        let line = "/cmd 2.4 one tail text";
        assert_eq!(first.parse(line), second.parse(line));
    }

    #[test]
    fn test_built_parser_is_independent_of_the_builder() {
        let builder = CommandParser::builder().number(NumberConfig::new());
        let parser = builder.build().unwrap();

        // Growing the builder afterwards must not change the built parser.
        let _bigger = builder.rest();
        let cmd = parser.parse("/cmd 5 tail");
        assert_eq!(cmd.args().len(), 1);
        assert_eq!(number_of(&cmd, 0), Some(5.0));
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = CommandParser::builder()
            .number(NumberConfig::new())
            .rest()
            .build()
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let parser = parser.clone();
                std::thread::spawn(move || parser.parse(&format!("/cmd {i} tail")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let cmd = handle.join().unwrap();
            assert_eq!(number_of(&cmd, 0), Some(i as f64));
        }
    }

    #[test]
    fn test_value_accessors() {
        let parser = CommandParser::builder()
            .number(NumberConfig::new())
            .build()
            .unwrap();

        let cmd = parser.parse("/cmd 42");
        let value = cmd.arg(0).unwrap().as_result().unwrap();
        assert_eq!(value, &ArgValue::Number(42.0));
    }
}
