//! Simulator-wide error type.
//!
//! Sub-crates define their own error enums and convert `SvError` into them
//! via `From` impls where a core operation can fail inside their own calls.

use thiserror::Error;

/// The top-level error type for `sv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SvError {
    /// A configuration value is missing, malformed, or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sample was requested that is larger than the population it is drawn
    /// from (e.g. more students than arrival slots).
    #[error("sampling error: {0}")]
    Sampling(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sv-*` crates.
pub type SvResult<T> = Result<T, SvError>;
