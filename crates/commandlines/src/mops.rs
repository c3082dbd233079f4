use std::fmt;

use indexmap::IndexSet;

use crate::arguments::option_region;

/// Single-character flags bundled in short-option syntax (`-rnj`).
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mops {
    flags: IndexSet<char>,
}

/// `-` followed by two or more characters, no `=`, not `--long`.
fn is_bundle(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-')
        && !token.contains('=')
        && matches!(chars.next(), Some(c) if c != '-')
        && chars.next().is_some()
}

impl Mops {
    pub fn new(tokens: &[String]) -> Self {
        let flags = option_region(tokens)
            .iter()
            .filter(|t| is_bundle(t))
            .flat_map(|t| t.chars().filter(|c| *c != '-'))
            .collect();
        Self { flags }
    }

    pub fn contains(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    pub fn contains_all<I: IntoIterator<Item = char>>(&self, flags: I) -> bool {
        flags.into_iter().all(|c| self.flags.contains(&c))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.flags.iter().copied()
    }
}

impl fmt::Debug for Mops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.flags.iter()).finish()
    }
}
