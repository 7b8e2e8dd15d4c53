//--------------------------------------------------------------------
// edge.rs
//--------------------------------------------------------------------
// Provides the immutable weighted undirected edge
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::ordered_float::OrderedFloat;

// Edge
#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "{}-{} {:.5}", v, w, weight)]
pub struct Edge { v: usize, w: usize, weight: f64 }

impl Edge {
    pub fn weight(&self) -> f64 { self.weight }

    /// Either endpoint of the edge. Always the one given first on construction.
    pub fn either(&self) -> usize { self.v }

    /// The endpoint opposite to `vertex`. Panics if `vertex` is not an endpoint.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v { self.w }
        else if vertex == self.w { self.v }
        else { panic!("Vertex {} is not an endpoint of edge {}", vertex, self) }
    }

    pub fn endpoints(&self) -> (usize, usize) { (self.v, self.w) }
    pub fn is_self_loop(&self) -> bool { self.v == self.w }

    // Total order on weights, used as the sort key
    pub fn weight_key(&self) -> OrderedFloat<f64> { self.weight.into() }
}
