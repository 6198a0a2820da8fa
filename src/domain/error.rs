//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree-building contract.
/// Building and traversal are total over non-empty input, so this stays small.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("no characters to build a tree from")]
    NoData,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
