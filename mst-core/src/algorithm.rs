//--------------------------------------------------------------------
// algorithm.rs
//--------------------------------------------------------------------
// Provides the selector between both MST algorithms and the common
// summary of a finished run
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::edge::Edge;
use crate::error::*;
use crate::graph::Graph;
use crate::kruskal::KruskalMst;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::prim::PrimMst;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Algorithm { Prim, Kruskal }

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    pub fn run(self, graph: &Graph, metrics: Metrics) -> Result<MstRun> {
        Ok(match self {
            Algorithm::Prim => {
                let mst = PrimMst::new(graph, metrics)?;
                MstRun {
                    algorithm: self,
                    edges: mst.edges().copied().collect(),
                    total_weight: mst.weight(),
                    vertices: mst.vertex_count(),
                    edge_count: mst.edge_count(),
                    metrics: mst.metrics().snapshot()
                }
            }
            Algorithm::Kruskal => {
                let mst = KruskalMst::new(graph, metrics)?;
                MstRun {
                    algorithm: self,
                    edges: mst.edges().to_vec(),
                    total_weight: mst.weight(),
                    vertices: mst.vertex_count(),
                    edge_count: mst.edge_count(),
                    metrics: mst.metrics().snapshot()
                }
            }
        })
    }
}

/// Everything an exporter needs from one run
#[derive(Clone, Debug, PartialEq)]
pub struct MstRun {
    pub algorithm: Algorithm,
    pub edges: Vec<Edge>,
    pub total_weight: f64,
    pub vertices: usize,
    pub edge_count: usize,
    pub metrics: MetricsSnapshot
}

impl MstRun {
    /// Whether two runs did exactly the same work with the same outcome
    pub fn same_outcome(&self, other: &MstRun) -> bool {
        let (a, b) = (&self.metrics, &other.metrics);
        self.algorithm == other.algorithm && self.edges == other.edges
            && self.total_weight.to_bits() == other.total_weight.to_bits()
            && a.comparisons == b.comparisons && a.unions == b.unions
            && a.priority_queue_operations == b.priority_queue_operations
            && a.find_operations == b.find_operations
    }
}
