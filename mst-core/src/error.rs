//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The recoverable failures of graph construction and MST computation
//--------------------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Negative edge weight detected: {weight:.2} (from {v} to {w})")]
    NegativeWeight { v: usize, w: usize, weight: f64 },
    #[error("Graph is not connected, no MST possible ({tree_edges} tree edges found for {vertices} vertices)")]
    Disconnected { tree_edges: usize, vertices: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
