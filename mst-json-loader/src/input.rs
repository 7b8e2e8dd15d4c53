//--------------------------------------------------------------------
// input.rs
//--------------------------------------------------------------------
// The input document and its conversion to dense-id graphs
//--------------------------------------------------------------------

use crate::error::*;
use mst_core::{Edge, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputFile {
    pub graphs: Vec<GraphRecord>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub id: u64,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64
}

#[derive(Clone, Copy, Debug)]
pub struct IngestOptions {
    pub reject_self_loops: bool
}

impl Default for IngestOptions {
    fn default() -> IngestOptions { IngestOptions { reject_self_loops: true } }
}

pub fn input_from_str(data: &str) -> Result<InputFile> {
    Ok(serde_json::from_str(data)?)
}

pub fn input_to_string(input: &InputFile) -> Result<String> {
    crate::output::to_pretty_json(input)
}

/// A graph together with the labels of its vertices, in id order
#[derive(Clone, Debug)]
pub struct LabeledGraph {
    pub id: u64,
    labels: Vec<String>,
    graph: Graph
}

impl LabeledGraph {
    pub fn from_record(record: &GraphRecord, options: IngestOptions) -> Result<LabeledGraph> {
        let mut ids = HashMap::with_capacity(record.nodes.len());
        for (i, label) in record.nodes.iter().enumerate() {
            if ids.insert(label.as_str(), i).is_some() {
                return Err(Error::DuplicateVertex { graph: record.id, label: label.clone() });
            }
        }

        let lookup = |label: &String| ids.get(label.as_str()).copied()
            .ok_or_else(|| Error::UnknownVertex { graph: record.id, label: label.clone() });

        let mut graph = Graph::new(record.nodes.len())?;
        for edge in &record.edges {
            let v = lookup(&edge.from)?;
            let w = lookup(&edge.to)?;
            if v == w && options.reject_self_loops {
                return Err(Error::SelfLoop { graph: record.id, label: edge.from.clone() });
            }
            graph.add_edge(Edge::new(v, w, edge.weight))?;
        }

        debug!(id = record.id, vertices = graph.v(), edges = graph.e(), "graph loaded");
        Ok(LabeledGraph { id: record.id, labels: record.nodes.clone(), graph })
    }

    pub fn graph(&self) -> &Graph { &self.graph }
    pub fn label(&self, v: usize) -> &str { &self.labels[v] }

    pub fn edge_record(&self, edge: &Edge) -> EdgeRecord {
        let v = edge.either();
        let w = edge.other(v);
        EdgeRecord { from: self.label(v).to_string(), to: self.label(w).to_string(), weight: edge.weight() }
    }
}
