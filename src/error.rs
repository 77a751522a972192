//! Error types for radial-timer.
//!
//! Every failure the screen can run into comes from user input, so the set is
//! small. Both variants are presented to the user as a modal notice and leave
//! the screen state untouched.

use thiserror::Error;

/// Errors produced while interpreting user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The duration field was blank.
    #[error("no duration was entered")]
    EmptyInput,

    /// The duration field did not hold two unsigned integers separated by `:`.
    #[error("invalid duration {0:?}, expected MM:SS")]
    InvalidDurationFormat(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
