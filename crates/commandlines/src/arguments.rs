use std::fmt;

use crate::error::{Error, Result};
use crate::needles::Needles;

/// The token that ends option parsing.
pub const DOUBLE_DASH: &str = "--";

/// Tokens before the first `--`. Only these are classified as options.
pub(crate) fn option_region(tokens: &[String]) -> &[String] {
    match tokens.iter().position(|t| t == DOUBLE_DASH) {
        Some(idx) => &tokens[..idx],
        None => tokens,
    }
}

/// Strip every leading `-` from an option token.
pub(crate) fn strip_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// The ordered argument vector, program name excluded.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Arguments {
    argv: Vec<String>,
}

impl Arguments {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Token at a zero-based position.
    pub fn argument_at(&self, position: usize) -> Result<&str> {
        self.argv
            .get(position)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                position,
                len: self.argv.len(),
            })
    }

    /// Token at `position`, or `""` when out of range.
    ///
    /// Only used to fill the convenience fields of `Command` so that
    /// construction cannot fail on short argument lists.
    pub(crate) fn argument_or_empty(&self, position: usize) -> String {
        self.argv.get(position).cloned().unwrap_or_default()
    }

    /// Position of the first token that matches `token` exactly.
    pub fn position_of(&self, token: &str) -> Result<usize> {
        self.argv
            .iter()
            .position(|t| t == token)
            .ok_or_else(|| Error::ArgumentNotFound(token.to_string()))
    }

    /// Token that follows `position`.
    pub fn next_after(&self, position: usize) -> Result<&str> {
        let next = position.checked_add(1).ok_or(Error::IndexOutOfRange {
            position,
            len: self.argv.len(),
        })?;
        self.argument_at(next)
    }

    /// Whether every needle matches some token exactly (case-sensitive).
    pub fn contains_all<'n, N: Needles<'n>>(&self, tokens: N) -> bool {
        tokens
            .needles()
            .all(|needle| self.argv.iter().any(|t| t == needle))
    }

    /// Position of the first `--` token, if any.
    pub fn double_dash_position(&self) -> Option<usize> {
        self.argv.iter().position(|t| t == DOUBLE_DASH)
    }

    pub fn last(&self) -> Option<&str> {
        self.argv.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.argv.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        self.argv.as_slice()
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.argv.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for Arguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
