use std::fmt;

use indexmap::IndexMap;

use crate::arguments::Arguments;
use crate::definitions::{Definitions, MultiDefinitions};
use crate::error::{Error, Result};
use crate::mops::Mops;
use crate::needles::Needles;
use crate::switches::Switches;

/// A parsed command line.
///
/// Built once from the argument vector (program name excluded). Every
/// collection is derived eagerly at construction and never recomputed.
/// Construction cannot fail; queries that assert something untrue about the
/// command line return an [`Error`].
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Command {
    arguments: Arguments,
    switches: Switches,
    mops: Mops,
    definitions: Definitions,
    multi_definitions: MultiDefinitions,
    defaults: IndexMap<String, String>,
    argc: usize,
    arg0: String,
    arg1: String,
    arg2: String,
    arg3: String,
    arg4: String,
    arglp: String,
    has_args: bool,
}

impl Command {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let arguments: Arguments = argv.into_iter().collect();
        let tokens = arguments.as_slice();

        let switches = Switches::new(tokens);
        let mops = Mops::new(tokens);
        let definitions = Definitions::new(tokens);
        let multi_definitions = MultiDefinitions::new(tokens);

        let argc = arguments.len();
        let arglp = match argc {
            0 => String::new(),
            n => arguments.argument_or_empty(n - 1),
        };

        tracing::debug!(
            argc,
            switches = switches.len(),
            mops = mops.len(),
            definitions = definitions.len(),
            multi_definitions = multi_definitions.len(),
            double_dash = ?arguments.double_dash_position(),
            "parsed command line"
        );

        Self {
            arg0: arguments.argument_or_empty(0),
            arg1: arguments.argument_or_empty(1),
            arg2: arguments.argument_or_empty(2),
            arg3: arguments.argument_or_empty(3),
            arg4: arguments.argument_or_empty(4),
            arglp,
            argc,
            has_args: argc > 0,
            arguments,
            switches,
            mops,
            definitions,
            multi_definitions,
            defaults: IndexMap::new(),
        }
    }

    /// Parse the current process arguments, dropping the program name.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned()),
        )
    }

    // Derived fields.

    pub fn argc(&self) -> usize {
        self.argc
    }

    pub fn arg0(&self) -> &str {
        &self.arg0
    }

    pub fn arg1(&self) -> &str {
        &self.arg1
    }

    pub fn arg2(&self) -> &str {
        &self.arg2
    }

    pub fn arg3(&self) -> &str {
        &self.arg3
    }

    pub fn arg4(&self) -> &str {
        &self.arg4
    }

    /// Last token, or `""` for an empty command line.
    pub fn arglp(&self) -> &str {
        &self.arglp
    }

    /// Alias of [`Command::arg0`].
    pub fn subcmd(&self) -> &str {
        &self.arg0
    }

    /// Alias of [`Command::arg1`].
    pub fn subsubcmd(&self) -> &str {
        &self.arg1
    }

    pub fn has_args(&self) -> bool {
        self.has_args
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn switches(&self) -> &Switches {
        &self.switches
    }

    pub fn mops(&self) -> &Mops {
        &self.mops
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn multi_definitions(&self) -> &MultiDefinitions {
        &self.multi_definitions
    }

    // Validation.

    pub fn has_no_args(&self) -> bool {
        self.argc == 0
    }

    pub fn has_exact_arg_count(&self, count: usize) -> bool {
        self.argc == count
    }

    pub fn has_at_least_one_arg(&self) -> bool {
        self.argc > 0
    }

    pub fn has_switches(&self) -> bool {
        !self.switches.is_empty()
    }

    pub fn has_mops(&self) -> bool {
        !self.mops.is_empty()
    }

    pub fn has_definitions(&self) -> bool {
        !self.definitions.is_empty()
    }

    pub fn has_multi_definitions(&self) -> bool {
        !self.multi_definitions.is_empty()
    }

    // Containment.

    pub fn has_all_switches<'n, N: Needles<'n>>(&self, names: N) -> bool {
        self.switches.contains_all(names)
    }

    pub fn has_all_mops<I: IntoIterator<Item = char>>(&self, flags: I) -> bool {
        self.mops.contains_all(flags)
    }

    pub fn has_all_definitions<'n, N: Needles<'n>>(&self, keys: N) -> bool {
        self.definitions.contains_all(keys)
    }

    pub fn has_all_multi_definitions<'n, N: Needles<'n>>(&self, keys: N) -> bool {
        self.multi_definitions.contains_all(keys)
    }

    // Getters.

    pub fn argument_at(&self, position: usize) -> Result<&str> {
        self.arguments.argument_at(position)
    }

    pub fn get_definition(&self, key: &str) -> Result<&str> {
        self.definitions.get(key)
    }

    pub fn get_multi_definition(&self, key: &str) -> Result<&[String]> {
        self.multi_definitions.get(key)
    }

    // Positional logic.

    /// Whether the command line starts with `tokens`, in order.
    ///
    /// The match begins at the first argument and is case-sensitive.
    pub fn has_command_sequence<'n, N: Needles<'n>>(&self, tokens: N) -> bool {
        let argv = self.arguments.as_slice();
        let mut index = 0usize;
        for token in tokens.needles() {
            match argv.get(index) {
                Some(arg) if arg == token => index += 1,
                _ => return false,
            }
        }
        true
    }

    /// The token that follows the first occurrence of `target`.
    pub fn get_arg_after(&self, target: &str) -> Result<&str> {
        let position = self.arguments.position_of(target)?;
        self.arguments.next_after(position)
    }

    /// Whether at least `count` tokens follow the first occurrence of `target`.
    pub fn has_args_after(&self, target: &str, count: usize) -> Result<bool> {
        let position = self.arguments.position_of(target)?;
        Ok(self.argc - position - 1 >= count)
    }

    /// Whether the token after `target` is one of `candidates`.
    ///
    /// A `target` with nothing after it is not an error, just `false`.
    pub fn next_arg_is_in<'n, N: Needles<'n>>(
        &self,
        target: &str,
        candidates: N,
    ) -> Result<bool> {
        let position = self.arguments.position_of(target)?;
        let next = match self.arguments.next_after(position) {
            Ok(next) => next,
            Err(_) => return Ok(false),
        };
        Ok(candidates.needles().any(|c| c == next))
    }

    // Default help, usage, and version requests.

    pub fn is_help_request(&self) -> bool {
        self.switches.contains("help") || self.switches.contains("h")
    }

    pub fn is_usage_request(&self) -> bool {
        self.switches.contains("usage")
    }

    pub fn is_version_request(&self) -> bool {
        self.switches.contains("version") || self.switches.contains("v")
    }

    // Option defaults.

    /// Merge fallback values into the default store.
    ///
    /// Defaults never alter the parsed definitions.
    pub fn set_defaults<I, K, V>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in defaults {
            self.set_default(key, value);
        }
    }

    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        tracing::trace!(key = %key, "setting option default");
        self.defaults.insert(key, value.into());
    }

    pub fn get_default(&self, key: &str) -> Result<&str> {
        self.defaults
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    pub fn has_defaults<'n, N: Needles<'n>>(&self, keys: N) -> bool {
        keys.needles().all(|key| self.defaults.contains_key(key))
    }

    pub fn defaults(&self) -> &IndexMap<String, String> {
        &self.defaults
    }

    // Double-dash idiom.

    pub fn has_double_dash(&self) -> bool {
        self.arguments.double_dash_position().is_some()
    }

    /// Tokens strictly after the first `--`, passed through unparsed.
    pub fn get_args_after_double_dash(&self) -> Result<&[String]> {
        let position = self
            .arguments
            .double_dash_position()
            .ok_or_else(|| Error::ArgumentNotFound(crate::DOUBLE_DASH.to_string()))?;
        Ok(&self.arguments.as_slice()[position + 1..])
    }

    /// Multi-line dump of every parsed field, for debugging.
    ///
    /// One `name = value` line per field. Collections render in first-seen
    /// order, so identical input always renders identically.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("argc = {}\n", self.argc));
        out.push_str(&format!("arguments = {:?}\n", self.arguments));
        out.push_str(&format!("defaults = {:?}\n", self.defaults));
        out.push_str(&format!("switches = {:?}\n", self.switches));
        out.push_str(&format!("defs = {:?}\n", self.definitions));
        out.push_str(&format!("mdefs = {:?}\n", self.multi_definitions));
        out.push_str(&format!("mops = {:?}\n", self.mops));
        out.push_str(&format!("arg0 = {:?}\n", self.arg0));
        out.push_str(&format!("arg1 = {:?}\n", self.arg1));
        out.push_str(&format!("arg2 = {:?}\n", self.arg2));
        out.push_str(&format!("arg3 = {:?}\n", self.arg3));
        out.push_str(&format!("arg4 = {:?}\n", self.arg4));
        out.push_str(&format!("arglp = {:?}\n", self.arglp));
        out.push_str(&format!("subcmd = {:?}\n", self.subcmd()));
        out.push_str(&format!("subsubcmd = {:?}\n", self.subsubcmd()));
        out.push_str(&format!("has_args = {}\n", self.has_args));
        out
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command {:?}", self.arguments)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("arguments", &self.arguments)
            .field("switches", &self.switches)
            .field("mops", &self.mops)
            .field("definitions", &self.definitions)
            .field("multi_definitions", &self.multi_definitions)
            .field("defaults", &self.defaults)
            .finish()
    }
}
