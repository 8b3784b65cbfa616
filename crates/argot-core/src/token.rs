//! Token model and line tokenizer.
//!
//! A [`Token`] is a maximal non-delimiter run of the command line, carrying
//! the byte offsets of that run in the original text. Keeping the offsets
//! (instead of copying the token text) lets a parser report the exact
//! substring it consumed, original inter-token whitespace included, via
//! [`Token::span_to`].

/// A whitespace-delimited slice of a command line.
///
/// Tokens are produced once by [`split_line`] and never mutated. They borrow
/// the source line, so they are cheap to copy and to slice into suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Token<'a> {
    /// The token text, without surrounding delimiters.
    pub fn text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Byte offset of the first character in the source line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character in the source line.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Reconstructs the exact original substring from the start of `self` to
    /// the end of `last` (inclusive), preserving whatever whitespace
    /// separated the tokens in between.
    ///
    /// Both tokens must come from the same call to [`split_line`], with
    /// `last` not preceding `self`.
    pub fn span_to(&self, last: &Token<'a>) -> &'a str {
        &self.source[self.start..last.end]
    }
}

/// Splits a command line into tokens on Unicode whitespace.
///
/// An empty (or all-whitespace) line yields an empty vector.
pub fn split_line(line: &str) -> Vec<Token<'_>> {
    split_line_with(line, char::is_whitespace)
}

/// Splits a command line into tokens using a custom delimiter predicate.
///
/// Every maximal run of non-delimiter characters becomes one token carrying
/// its byte-offset range in `line`.
pub fn split_line_with<F>(line: &str, is_delimiter: F) -> Vec<Token<'_>>
where
    F: Fn(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        if is_delimiter(ch) {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    source: line,
                    start: s,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(s) = start {
        tokens.push(Token {
            source: line,
            start: s,
            end: line.len(),
        });
    }

    tokens
}
