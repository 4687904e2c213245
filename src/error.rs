//! Errors for structurally malformed input.
//!
//! "No answer" outcomes (unreachable nodes, missing targets, infeasible
//! amounts) are ordinary return values, usually `None`. This type is reserved
//! for input the routines cannot even index safely.

/// Errors returned when building graphs or grids from raw input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node {node} is outside the graph (node count {node_count})")]
    InvalidNode { node: usize, node_count: usize },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid cell ({row}, {col}) holds {value:?}, expected land or water")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
