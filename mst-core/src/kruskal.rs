//--------------------------------------------------------------------
// kruskal.rs
//--------------------------------------------------------------------
// Kruskal's minimum spanning tree: scan the edges by ascending
// weight, keeping those that join two different components
//--------------------------------------------------------------------

use crate::edge::Edge;
use crate::error::*;
use crate::graph::Graph;
use crate::metrics::Metrics;
use crate::union_find::UnionFind;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct KruskalMst {
    mst: Vec<Edge>,
    total_weight: f64,
    vertices: usize,
    edge_count: usize,
    metrics: Metrics
}

impl KruskalMst {
    /// Computes the MST of `graph`, recording the work done into `metrics`
    /// (which is reset first). Fails with `Disconnected` if the graph
    /// cannot be spanned; no partial tree is returned in that case.
    pub fn new(graph: &Graph, mut metrics: Metrics) -> Result<KruskalMst> {
        let vertices = graph.v();
        metrics.reset();
        metrics.start_timer();

        // The sort is stable, so equal weights keep their input order
        let mut edges = graph.edges().to_vec();
        edges.sort_by_key(Edge::weight_key);

        let mut union_find = UnionFind::new(vertices);
        let mut mst = Vec::with_capacity(vertices - 1);
        let mut total_weight = 0.0;

        for edge in edges {
            if union_find.count() == 1 { break; }
            if edge.is_self_loop() { continue; }

            let (v, w) = edge.endpoints();
            let root_v = union_find.find(v);
            metrics.increment_find();
            let root_w = union_find.find(w);
            metrics.increment_find();

            metrics.increment_comparison();
            if root_v != root_w {
                union_find.union(root_v, root_w);
                metrics.increment_union();
                trace!(%edge, "kruskal accepted edge");
                total_weight += edge.weight();
                mst.push(edge);
            }
        }

        metrics.stop_timer();

        if mst.len() != vertices - 1 {
            return Err(Error::Disconnected { tree_edges: mst.len(), vertices });
        }

        debug!(vertices, edges = graph.e(), total_weight, operations = metrics.total_operations(), "kruskal finished");
        Ok(KruskalMst { mst, total_weight, vertices, edge_count: graph.e(), metrics })
    }

    pub fn edges(&self) -> &[Edge] { &self.mst }
    pub fn weight(&self) -> f64 { self.total_weight }
    pub fn vertex_count(&self) -> usize { self.vertices }
    pub fn edge_count(&self) -> usize { self.edge_count }
    pub fn metrics(&self) -> &Metrics { &self.metrics }
}
