//--------------------------------------------------------------------
// prim.rs
//--------------------------------------------------------------------
// Prim's minimum spanning tree (eager version): grow a single tree
// from a start vertex, keeping for each frontier vertex its
// cheapest connecting edge in an indexed priority queue
//--------------------------------------------------------------------

use crate::edge::Edge;
use crate::error::*;
use crate::graph::Graph;
use crate::index_min_pq::IndexMinPq;
use crate::metrics::Metrics;
use crate::ordered_float::OrderedFloat;
use tracing::{debug, trace};

// Per-run working arrays, indexed by vertex id
struct Frontier {
    edge_to: Box<[Option<Edge>]>,
    dist_to: Box<[f64]>,
    marked: Box<[bool]>,
    pq: IndexMinPq<OrderedFloat<f64>>
}

impl Frontier {
    fn new(vertices: usize) -> Frontier {
        Frontier {
            edge_to: vec![None; vertices].into_boxed_slice(),
            dist_to: vec![std::f64::INFINITY; vertices].into_boxed_slice(),
            marked: vec![false; vertices].into_boxed_slice(),
            pq: IndexMinPq::new(vertices)
        }
    }

    // Scans the edges of the freshly marked vertex v
    fn visit(&mut self, graph: &Graph, v: usize, metrics: &mut Metrics) {
        self.marked[v] = true;
        for edge in graph.adj(v) {
            let w = edge.other(v);
            if self.marked[w] { continue; }

            metrics.increment_comparison();
            if edge.weight() < self.dist_to[w] {
                self.dist_to[w] = edge.weight();
                self.edge_to[w] = Some(*edge);

                let key = OrderedFloat(edge.weight());
                if self.pq.contains(w) { self.pq.decrease_key(w, key); }
                else { self.pq.insert(w, key); }
                metrics.increment_pq_operation();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrimMst {
    edge_to: Box<[Option<Edge>]>,
    vertices: usize,
    edge_count: usize,
    metrics: Metrics
}

impl PrimMst {
    /// Computes the MST of `graph`, recording the work done into `metrics`
    /// (which is reset first). Fails with `Disconnected` if some vertex is
    /// unreachable from the start vertex.
    pub fn new(graph: &Graph, mut metrics: Metrics) -> Result<PrimMst> {
        let vertices = graph.v();
        metrics.reset();
        metrics.start_timer();

        let mut frontier = Frontier::new(vertices);
        let start = (0..vertices).find(|&v| graph.degree(v) > 0).unwrap_or(0);

        frontier.dist_to[start] = 0.0;
        frontier.pq.insert(start, OrderedFloat(0.0));
        metrics.increment_pq_operation();

        while !frontier.pq.is_empty() {
            let (v, _) = frontier.pq.del_min();
            metrics.increment_pq_operation();
            if let Some(edge) = frontier.edge_to[v] { trace!(%edge, "prim accepted edge"); }
            frontier.visit(graph, v, &mut metrics);
        }

        metrics.stop_timer();

        if frontier.marked.iter().any(|&m| !m) {
            let tree_edges = frontier.edge_to.iter().filter(|e| e.is_some()).count();
            return Err(Error::Disconnected { tree_edges, vertices });
        }

        debug!(vertices, edges = graph.e(), start, operations = metrics.total_operations(), "prim finished");
        Ok(PrimMst { edge_to: frontier.edge_to, vertices, edge_count: graph.e(), metrics })
    }

    /// The tree edges, ordered by the vertex they connect to the tree.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_to.iter().filter_map(|e| e.as_ref())
    }

    /// Sum of the tree edge weights, recomputed on each call.
    pub fn weight(&self) -> f64 {
        self.edges().map(Edge::weight).sum()
    }

    pub fn vertex_count(&self) -> usize { self.vertices }
    pub fn edge_count(&self) -> usize { self.edge_count }
    pub fn metrics(&self) -> &Metrics { &self.metrics }
}
