//! The parsed-command record returned by a compiled pipeline.

use serde::Serialize;

use crate::argument::ParsedArgument;
use crate::error::ParseError;

/// One fully parsed command line.
///
/// `command` is the first token of the line, leading marker (`/`, `!`, ...)
/// included; `raw` is the entire original line, unmodified; `args` holds one
/// [`ParsedArgument`] per pipeline step, in declaration order.
///
/// The record never hides failures: a step that could not parse its tokens
/// contributes an argument with its error set. Whether that refuses the
/// command or falls back to a default flow is the caller's policy, typically
/// gated on [`has_errors`](Self::has_errors).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCommand {
    command: String,
    raw: String,
    args: Vec<ParsedArgument>,
}

impl ParsedCommand {
    pub(crate) fn new(command: String, raw: impl Into<String>, args: Vec<ParsedArgument>) -> Self {
        Self {
            command,
            raw: raw.into(),
            args,
        }
    }

    /// The command token, including any leading marker character.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The original command line, byte-identical to what was parsed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All parsed arguments, in pipeline-step order.
    pub fn args(&self) -> &[ParsedArgument] {
        &self.args
    }

    /// The argument produced by step `index`, if the pipeline has that many
    /// steps.
    pub fn arg(&self, index: usize) -> Option<&ParsedArgument> {
        self.args.get(index)
    }

    /// Whether any argument failed to parse.
    pub fn has_errors(&self) -> bool {
        self.args.iter().any(|arg| arg.error().is_some())
    }

    /// Iterates over the failed arguments as `(step index, diagnostic)`.
    pub fn errors(&self) -> impl Iterator<Item = (usize, ParseError)> + '_ {
        self.args
            .iter()
            .enumerate()
            .filter_map(|(idx, arg)| arg.error().map(|err| (idx, err)))
    }
}
