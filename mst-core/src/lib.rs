//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate derive_more;
extern crate ordered_float;
extern crate thiserror;
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate approx;

mod error;
mod edge;
mod graph;
mod union_find;
mod index_min_pq;
mod metrics;
mod kruskal;
mod prim;
mod algorithm;


pub use error::{Error, Result};
pub use edge::Edge;
pub use graph::Graph;
pub use union_find::UnionFind;
pub use index_min_pq::IndexMinPq;
pub use metrics::{Metrics, MetricsSnapshot};
pub use kruskal::KruskalMst;
pub use prim::PrimMst;
pub use algorithm::{Algorithm, MstRun};
