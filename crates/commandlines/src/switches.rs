use std::fmt;

use indexmap::IndexSet;

use crate::arguments::{option_region, strip_dashes};
use crate::needles::Needles;

/// Boolean options: every `-s` / `--long` token without an `=`.
///
/// Leading dashes are stripped, so `-long` and `--long` both record `long`.
/// Tokens after `--` are never switches.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Switches {
    names: IndexSet<String>,
}

impl Switches {
    pub fn new(tokens: &[String]) -> Self {
        let names = option_region(tokens)
            .iter()
            .filter(|t| t.starts_with('-') && !t.contains('='))
            .map(|t| strip_dashes(t))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn contains_all<'n, N: Needles<'n>>(&self, names: N) -> bool {
        names.needles().all(|name| self.names.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Switch names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Debug for Switches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names.iter()).finish()
    }
}
