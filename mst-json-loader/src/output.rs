//--------------------------------------------------------------------
// output.rs
//--------------------------------------------------------------------
// The JSON result document
//--------------------------------------------------------------------

use crate::error::*;
use crate::input::{EdgeRecord, LabeledGraph};
use mst_core::{MetricsSnapshot, MstRun};
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputFile {
    pub results: Vec<GraphResult>
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphResult {
    pub graph_id: u64,
    pub input_stats: InputStats,
    pub prim: AlgorithmResult,
    pub kruskal: AlgorithmResult
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub mst_edges: Vec<EdgeRecord>,
    pub total_cost: f64,
    pub operations_count: u64,
    pub execution_time_ms: f64,
    pub metrics: MetricsRecord
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub comparisons: u64,
    pub unions: u64,
    pub priority_queue_operations: u64,
    pub find_operations: u64,
    pub total_operations: u64,
    pub execution_time_ms: f64
}

impl From<MetricsSnapshot> for MetricsRecord {
    fn from(m: MetricsSnapshot) -> MetricsRecord {
        MetricsRecord {
            comparisons: m.comparisons,
            unions: m.unions,
            priority_queue_operations: m.priority_queue_operations,
            find_operations: m.find_operations,
            total_operations: m.total_operations,
            execution_time_ms: m.execution_time_ms
        }
    }
}

impl AlgorithmResult {
    pub fn new(graph: &LabeledGraph, run: &MstRun) -> AlgorithmResult {
        AlgorithmResult {
            mst_edges: run.edges.iter().map(|e| graph.edge_record(e)).collect(),
            total_cost: run.total_weight,
            operations_count: run.metrics.total_operations,
            execution_time_ms: run.metrics.execution_time_ms,
            metrics: run.metrics.into()
        }
    }
}

impl GraphResult {
    pub fn new(graph: &LabeledGraph, prim: &MstRun, kruskal: &MstRun) -> GraphResult {
        GraphResult {
            graph_id: graph.id,
            input_stats: InputStats { vertices: graph.graph().v(), edges: graph.graph().e() },
            prim: AlgorithmResult::new(graph, prim),
            kruskal: AlgorithmResult::new(graph, kruskal)
        }
    }
}

pub fn output_to_string(output: &OutputFile) -> Result<String> {
    to_pretty_json(output)
}

// Pretty printing with a four-space indent
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::*;
    use mst_core::{Algorithm, Metrics};

    fn labeled() -> LabeledGraph {
        let record = GraphRecord {
            id: 5,
            nodes: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            edges: vec![
                EdgeRecord { from: "A".to_string(), to: "B".to_string(), weight: 1.0 },
                EdgeRecord { from: "B".to_string(), to: "C".to_string(), weight: 2.0 },
                EdgeRecord { from: "A".to_string(), to: "C".to_string(), weight: 3.0 },
            ]
        };
        LabeledGraph::from_record(&record, IngestOptions::default()).unwrap()
    }

    #[test]
    fn test_graph_result() {
        let graph = labeled();
        let prim = Algorithm::Prim.run(graph.graph(), Metrics::new()).unwrap();
        let kruskal = Algorithm::Kruskal.run(graph.graph(), Metrics::new()).unwrap();
        let result = GraphResult::new(&graph, &prim, &kruskal);

        assert_eq!(result.graph_id, 5);
        assert_eq!(result.input_stats, InputStats { vertices: 3, edges: 3 });
        assert_relative_eq!(result.prim.total_cost, 3.0);
        assert_relative_eq!(result.kruskal.total_cost, 3.0);
        assert_eq!(result.kruskal.mst_edges[1], EdgeRecord { from: "B".to_string(), to: "C".to_string(), weight: 2.0 });
        assert_eq!(result.kruskal.operations_count, result.kruskal.metrics.total_operations);
    }

    #[test]
    fn test_pretty_json_keeps_text() {
        let record = EdgeRecord { from: "Zürich".to_string(), to: "東京".to_string(), weight: 0.5 };
        let text = to_pretty_json(&record).unwrap();
        assert_eq!(text, "{\n    \"from\": \"Zürich\",\n    \"to\": \"東京\",\n    \"weight\": 0.5\n}");
    }

    #[test]
    fn test_json_layout() {
        let graph = labeled();
        let prim = Algorithm::Prim.run(graph.graph(), Metrics::new()).unwrap();
        let kruskal = Algorithm::Kruskal.run(graph.graph(), Metrics::new()).unwrap();
        let output = OutputFile { results: vec![GraphResult::new(&graph, &prim, &kruskal)] };

        let text = output_to_string(&output).unwrap();
        assert!(text.contains("\n    \"results\": ["));
        assert!(text.contains("\"priority_queue_operations\""));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"][0]["input_stats"]["edges"], 3);
        assert_eq!(value["results"][0]["kruskal"]["mst_edges"][0]["from"], "A");
    }
}
