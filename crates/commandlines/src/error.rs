use thiserror::Error;

/// Errors raised by explicit queries against a parsed command line.
///
/// Construction of a [`Command`](crate::Command) never fails; these only
/// surface when a caller asks for something the command line does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("position {position} is out of range for {len} argument(s)")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("argument not found: {0}")]
    ArgumentNotFound(String),

    #[error("missing key: {0}")]
    MissingKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
