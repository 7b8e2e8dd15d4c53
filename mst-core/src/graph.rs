//--------------------------------------------------------------------
// graph.rs
//--------------------------------------------------------------------
// Provides the edge-weighted undirected graph, stored as adjacency
// lists of indices into a single edge array
//--------------------------------------------------------------------

use crate::edge::Edge;
use crate::error::*;

#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Box<[Vec<usize>]>,
    edges: Vec<Edge>
}

impl Graph {
    pub fn new(vertex_count: usize) -> Result<Graph> {
        if vertex_count == 0 {
            return Err(Error::InvalidInput("Graph has no vertices".to_string()));
        }

        let adjacency = vec![Vec::new(); vertex_count].into_boxed_slice();
        Ok(Graph { adjacency, edges: Vec::new() })
    }

    /// Builds a graph from `(v, w, weight)` records, in order.
    pub fn from_records(vertex_count: usize, records: impl IntoIterator<Item = (usize, usize, f64)>) -> Result<Graph> {
        let mut graph = Graph::new(vertex_count)?;
        for (v, w, weight) in records {
            graph.add_edge(Edge::new(v, w, weight))?;
        }
        Ok(graph)
    }

    /// Adds `edge` to the graph. This is the single place where edges are
    /// validated: endpoints must be in range and the weight finite and
    /// non-negative. Self-loops are accepted and kept in one list only.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (v, w) = edge.endpoints();
        for &x in &[v, w] {
            if x >= self.v() {
                return Err(Error::InvalidInput(format!(
                    "Vertex {} is out of range for a graph with {} vertices", x, self.v())));
            }
        }

        let weight = edge.weight();
        if !weight.is_finite() {
            return Err(Error::InvalidInput(format!("Edge {}-{} has non-finite weight {}", v, w, weight)));
        }
        if weight < 0.0 {
            return Err(Error::NegativeWeight { v, w, weight });
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.adjacency[v].push(id);
        if v != w { self.adjacency[w].push(id); }
        Ok(())
    }

    pub fn v(&self) -> usize { self.adjacency.len() }
    pub fn e(&self) -> usize { self.edges.len() }

    pub fn degree(&self, v: usize) -> usize { self.adjacency[v].len() }

    /// The edges incident to `v`, in insertion order.
    pub fn adj(&self, v: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency[v].iter().map(move |&id| &self.edges[id])
    }

    /// Every edge exactly once, in insertion order.
    pub fn edges(&self) -> &[Edge] { &self.edges }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_vertices() {
        assert!(matches!(Graph::new(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_counts_and_incidence() {
        let graph = Graph::from_records(4, vec![(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (2, 3, 3.0)]).unwrap();
        assert_eq!(graph.v(), 4);
        assert_eq!(graph.e(), 4);
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.degree(3), 1);

        let others: Vec<_> = graph.adj(2).map(|e| e.other(2)).collect();
        assert_eq!(others, vec![0, 1, 3]);

        // Re-iterable
        assert_eq!(graph.adj(2).count(), graph.adj(2).count());
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let graph = Graph::from_records(2, vec![(0, 0, 1.0), (0, 1, 2.0)]).unwrap();
        assert_eq!(graph.e(), 2);
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.edges().iter().filter(|e| e.is_self_loop()).count(), 1);
    }

    #[test]
    fn test_out_of_range_endpoint() {
        let mut graph = Graph::new(2).unwrap();
        assert!(matches!(graph.add_edge(Edge::new(0, 2, 1.0)), Err(Error::InvalidInput(_))));
        assert_eq!(graph.e(), 0);
    }

    #[test]
    fn test_negative_weight() {
        let mut graph = Graph::new(2).unwrap();
        assert_eq!(graph.add_edge(Edge::new(0, 1, -1.0)), Err(Error::NegativeWeight { v: 0, w: 1, weight: -1.0 }));
        assert_eq!(graph.e(), 0);
    }

    #[test]
    fn test_nan_weight() {
        let mut graph = Graph::new(2).unwrap();
        assert!(matches!(graph.add_edge(Edge::new(0, 1, std::f64::NAN)), Err(Error::InvalidInput(_))));
    }
}
