//! The four type parsers.
//!
//! Each parser is a free function taking the remaining tokens and a
//! configuration, consuming a prefix of the slice and returning a
//! [`ParserResult`]. Parsers never fail outright: diagnostics are data
//! values inside the returned argument, and the unconsumed suffix is always
//! well-formed so the pipeline can keep advancing.

use crate::argument::{ArgValue, ParsedArgument, ParserResult};
use crate::config::{NumberConfig, OneOfConfig, StringConfig};
use crate::convert::{FloatConverter, NumberConverter};
use crate::error::ParseError;
use crate::token::Token;

fn ok<'a>(
    value: impl Into<ArgValue>,
    raw: impl Into<String>,
    unconsumed: &'a [Token<'a>],
) -> ParserResult<'a> {
    ParserResult {
        result: ParsedArgument::parsed(value, raw),
        unconsumed,
    }
}

fn defaulted<'a>(value: impl Into<ArgValue>) -> ParserResult<'a> {
    ParserResult {
        result: ParsedArgument::defaulted(value),
        unconsumed: &[],
    }
}

fn fail<'a>(
    error: ParseError,
    raw: Option<String>,
    unconsumed: &'a [Token<'a>],
) -> ParserResult<'a> {
    ParserResult {
        result: ParsedArgument::failed(error, raw),
        unconsumed,
    }
}

/// Runs a converter, treating a NaN outcome as a failed conversion.
fn convert(converter: &dyn NumberConverter, input: &str) -> Option<f64> {
    converter.convert(input).filter(|v| !v.is_nan())
}

/// Parses a number, consuming one or more leading tokens.
///
/// In strict mode exactly one token is converted. In the default non-strict
/// mode the parser grows a window of leading tokens, concatenating their
/// text and re-running the converter, so numbers split by stray whitespace
/// (`+ 1 000`) still parse. The window stops growing once a longer prefix
/// no longer converts, or no longer changes the converted value (plateau
/// detection, needed for prefix-stopping converters like
/// [`PrefixFloatConverter`](crate::convert::PrefixFloatConverter)).
///
/// The reported `raw` text is the exact original substring spanning the
/// consumed tokens, whitespace included, not a re-join of token text.
pub fn number<'a>(tokens: &'a [Token<'a>], cfg: &NumberConfig) -> ParserResult<'a> {
    if tokens.is_empty() {
        return match cfg.default_value {
            Some(value) => defaulted(value),
            None => fail(ParseError::Missing, None, tokens),
        };
    }

    let fallback = FloatConverter;
    let converter: &dyn NumberConverter = match &cfg.converter {
        Some(custom) => custom.as_ref(),
        None => &fallback,
    };

    let (converted, last_consumed, unconsumed) = if cfg.strict {
        (convert(converter, tokens[0].text()), 0, &tokens[1..])
    } else {
        // Grow a window of leading tokens, tracking the last prefix that
        // converted. Presence is explicit: a valid number at index 0 is a
        // found boundary like any other.
        let mut last_valid: Option<(usize, f64)> = None;
        let mut window = String::new();

        for (idx, token) in tokens.iter().enumerate() {
            window.push_str(token.text());
            match convert(converter, &window) {
                // Advance the boundary only when the value changed, so a
                // prefix-stopping converter does not drag in tokens that
                // contribute no new digits.
                Some(value) if last_valid.is_none_or(|(_, prev)| prev != value) => {
                    last_valid = Some((idx, value));
                }
                Some(_) => {}
                None => {
                    // A failed growth after any valid prefix means the
                    // number is complete.
                    if last_valid.is_some() {
                        break;
                    }
                }
            }
        }

        match last_valid {
            Some((idx, value)) => (Some(value), idx, &tokens[idx + 1..]),
            // Nothing ever converted: report the first token alone.
            None => (None, 0, &tokens[1..]),
        }
    };

    let raw = tokens[0].span_to(&tokens[last_consumed]);

    let Some(mut value) = converted else {
        return fail(ParseError::SyntaxError, Some(raw.to_string()), unconsumed);
    };

    if cfg.min.is_some_and(|min| value < min) || cfg.max.is_some_and(|max| value > max) {
        return fail(ParseError::OutOfRange, Some(raw.to_string()), unconsumed);
    }

    if cfg.reject_floats && value.fract() != 0.0 {
        return fail(ParseError::FloatRejected, Some(raw.to_string()), unconsumed);
    }

    if cfg.round {
        value = value.round();
    }

    ok(value, raw, unconsumed)
}

/// Consumes exactly one token verbatim as both value and raw text.
pub fn string<'a>(tokens: &'a [Token<'a>], cfg: &StringConfig) -> ParserResult<'a> {
    let Some(first) = tokens.first() else {
        return match &cfg.default_value {
            Some(value) => defaulted(value.clone()),
            None => fail(ParseError::Missing, None, tokens),
        };
    };

    ok(first.text(), first.text(), &tokens[1..])
}

/// Consumes one token only if it matches one of the accepted values.
///
/// With case-insensitive matching the parsed value is the canonical
/// accepted form; the raw text stays whatever the user typed. A
/// non-matching token is still consumed, so the pipeline advances past it.
pub fn one_of<'a>(tokens: &'a [Token<'a>], cfg: &OneOfConfig) -> ParserResult<'a> {
    let Some(first) = tokens.first() else {
        return match &cfg.default_value {
            Some(value) => defaulted(value.clone()),
            None => fail(ParseError::Missing, None, tokens),
        };
    };

    let candidate = first.text();
    let matched = if cfg.case_sensitive {
        cfg.accepted.iter().find(|a| a.as_str() == candidate)
    } else {
        cfg.accepted
            .iter()
            .find(|a| a.to_lowercase() == candidate.to_lowercase())
    };

    match matched {
        Some(canonical) => ok(canonical.clone(), candidate, &tokens[1..]),
        None => fail(
            ParseError::ValueNotListed,
            Some(candidate.to_string()),
            &tokens[1..],
        ),
    }
}

/// Consumes all remaining tokens into a space-normalized string.
///
/// Never fails: empty input yields an empty-string success, not `MISSING`.
/// Both value and raw are the normalized join, not the original spacing;
/// rest aggregates free text rather than pinpointing an exact span.
pub fn rest<'a>(tokens: &'a [Token<'a>]) -> ParserResult<'a> {
    let normalized = tokens
        .iter()
        .map(|t| t.text())
        .collect::<Vec<_>>()
        .join(" ");
    ok(normalized.clone(), normalized, &[])
}
