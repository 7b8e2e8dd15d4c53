//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// Errors raised while ingesting or exporting graphs
//--------------------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] mst_core::Error),
    #[error("Graph {graph}: edge refers to unknown vertex {label:?}")]
    UnknownVertex { graph: u64, label: String },
    #[error("Graph {graph}: vertex {label:?} is listed more than once")]
    DuplicateVertex { graph: u64, label: String },
    #[error("Graph {graph}: self-loop detected: {label} -> {label}")]
    SelfLoop { graph: u64, label: String },
    #[error("Error (de)serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error writing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
