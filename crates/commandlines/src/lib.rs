//! Command line classification and queries.
//!
//! A [`Command`] is parsed once from an argument vector (program name
//! excluded) and sorts every token into:
//! - [`Arguments`]: the raw tokens, in order
//! - [`Switches`]: `-s` / `--long` options without a value
//! - [`Mops`]: single-character flags bundled as `-rnj`
//! - [`Definitions`]: `-o value`, `--opt value`, `--opt=value` (last value wins)
//! - [`MultiDefinitions`]: the same grammar, keeping every value in order
//!
//! Tokens after a literal `--` are passed through untouched and only show up
//! in [`Arguments`] and [`Command::get_args_after_double_dash`].
//!
//! ```
//! use commandlines::Command;
//!
//! let c = Command::new(["build", "-v", "--out", "dist", "--", "-x"]);
//! assert!(c.has_command_sequence("build"));
//! assert!(c.is_version_request());
//! assert_eq!(c.get_definition("out").unwrap(), "dist");
//! assert_eq!(c.get_args_after_double_dash().unwrap(), ["-x"]);
//! ```

mod arguments;
mod command;
mod definitions;
mod error;
mod mops;
mod needles;
mod switches;

pub use arguments::{Arguments, DOUBLE_DASH};
pub use command::Command;
pub use definitions::{Definitions, MultiDefinitions};
pub use error::{Error, Result};
pub use mops::Mops;
pub use needles::Needles;
pub use switches::Switches;
