//! Error types for the layout engine.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the layout engine. All variants indicate a contract
/// violation in the caller's use of the tree; a failed cycle is not retried
/// internally, so the caller must fix the tree and issue a new cycle.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A measured size was read outside a valid measure cycle.
    #[error("measure: {0}")]
    Measure(String),

    /// A layout pass was driven with invalid inputs.
    #[error("layout: {0}")]
    Layout(String),

    /// A structural tree mutation violated an invariant.
    #[error("tree: {0}")]
    Tree(String),
}
