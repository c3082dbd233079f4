use std::fmt;

use indexmap::IndexMap;

use crate::arguments::{option_region, strip_dashes};
use crate::error::{Error, Result};
use crate::needles::Needles;

/// Scan the option region for `(key, value)` pairs in command-line order.
///
/// Two forms are recognized:
/// - `-opt=value` / `--opt=value`, split on the first `=`
/// - `-opt value` / `--opt value`, when the next token does not start with `-`
fn definition_pairs(tokens: &[String]) -> Vec<(&str, &str)> {
    let region = option_region(tokens);
    let mut pairs = Vec::new();

    for (idx, token) in region.iter().enumerate() {
        if !token.starts_with('-') {
            continue;
        }

        if let Some((flag, value)) = token.split_once('=') {
            let key = strip_dashes(flag);
            if !key.is_empty() {
                pairs.push((key, value));
            }
            continue;
        }

        let Some(next) = region.get(idx + 1) else {
            continue;
        };
        if next.starts_with('-') {
            continue;
        }
        let key = strip_dashes(token);
        if !key.is_empty() {
            pairs.push((key, next.as_str()));
        }
    }

    pairs
}

/// Single-valued options. A repeated key keeps its last value.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Definitions {
    values: IndexMap<String, String>,
}

impl Definitions {
    pub fn new(tokens: &[String]) -> Self {
        let mut values = IndexMap::new();
        for (key, value) in definition_pairs(tokens) {
            values.insert(key.to_string(), value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn contains_all<'n, N: Needles<'n>>(&self, keys: N) -> bool {
        keys.needles().all(|key| self.values.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(key, value)` pairs in the order keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for Definitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

/// Options collected with every value they were given, in order.
///
/// `-o a -o b` yields `o => [a, b]`. A key seen once still maps to a
/// one-element list; [`MultiDefinitions::repeated`] narrows to keys that
/// actually occurred more than once.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiDefinitions {
    values: IndexMap<String, Vec<String>>,
}

impl MultiDefinitions {
    pub fn new(tokens: &[String]) -> Self {
        let mut values: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, value) in definition_pairs(tokens) {
            values
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Result<&[String]> {
        self.values
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn contains_all<'n, N: Needles<'n>>(&self, keys: N) -> bool {
        keys.needles().all(|key| self.values.contains_key(key))
    }

    /// Whether `key` was given two or more values.
    pub fn is_repeated(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| v.len() > 1)
    }

    /// Keys given two or more values.
    pub fn repeated(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| v.len() > 1)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Debug for MultiDefinitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn defs(raw: &[&str]) -> Definitions {
        Definitions::new(&tokens(raw))
    }

    fn mdefs(raw: &[&str]) -> MultiDefinitions {
        MultiDefinitions::new(&tokens(raw))
    }

    #[test]
    fn adjacent_and_equals_forms_are_recognized() {
        let d = defs(&[
            "subcmd",
            "-s",
            "--long",
            "-n",
            "shortdef",
            "--name",
            "longdef",
            "--nameeq=longdefeq",
            "lastpos",
        ]);
        assert_eq!(
            d.iter().collect::<Vec<_>>(),
            vec![("n", "shortdef"), ("name", "longdef"), ("nameeq", "longdefeq")]
        );
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let d = defs(&["--filter=a=b", "-e="]);
        assert_eq!(d.get("filter").unwrap(), "a=b");
        assert_eq!(d.get("e").unwrap(), "");
    }

    #[test]
    fn value_may_contain_spaces() {
        let d = defs(&["commit", "-m", "initial commit"]);
        assert_eq!(d.get("m").unwrap(), "initial commit");
    }

    #[test]
    fn option_followed_by_option_is_not_a_definition() {
        let d = defs(&["-t", "--flag"]);
        assert!(d.is_empty());
    }

    #[test]
    fn trailing_option_is_not_a_definition() {
        assert!(defs(&["lastpos", "-t"]).is_empty());
    }

    #[test]
    fn last_value_wins() {
        let d = defs(&["-o", "path1", "-o", "path2"]);
        assert_eq!(d.get("o").unwrap(), "path2");
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn get_missing_key_fails() {
        assert_eq!(
            defs(&[]).get("bogus"),
            Err(Error::MissingKey("bogus".to_string()))
        );
    }

    #[test]
    fn double_dash_ends_definitions() {
        let d = defs(&["--file", "path", "--", "lastpos", "--test", "path2"]);
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![("file", "path")]);
        assert!(defs(&["--file", "--", "path"]).is_empty());
    }

    #[test]
    fn empty_keys_are_ignored() {
        assert!(defs(&["-", "value", "--=x"]).is_empty());
    }

    #[test]
    fn multi_definitions_collect_values_in_order() {
        let m = mdefs(&["-o", "path1", "-o", "path2", "-t", "--flag"]);
        assert_eq!(m.get("o").unwrap(), ["path1", "path2"]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn multi_definitions_mix_both_forms() {
        let m = mdefs(&["--file", "path1", "--file=path2", "--", "--fail", "bigtime"]);
        assert_eq!(m.get("file").unwrap(), ["path1", "path2"]);
        assert!(!m.contains("fail"));
    }

    #[test]
    fn multi_definitions_keep_single_values_as_lists() {
        let m = mdefs(&["-o", "path1", "-o", "path2", "--file", "only"]);
        assert_eq!(m.get("file").unwrap(), ["only"]);
        assert!(m.is_repeated("o"));
        assert!(!m.is_repeated("file"));
        assert_eq!(m.repeated().collect::<Vec<_>>(), vec!["o"]);
    }

    #[test]
    fn multi_definitions_contains_all() {
        let m = mdefs(&[
            "-o",
            "path1",
            "-o",
            "path2",
            "--file",
            "tests/path1",
            "--file",
            "tests/path2",
        ]);
        assert!(m.contains_all(["o", "file"]));
        assert!(!m.contains_all(["o", "bogus"]));
        assert!(matches!(m.get("bogus"), Err(Error::MissingKey(_))));
    }
}
