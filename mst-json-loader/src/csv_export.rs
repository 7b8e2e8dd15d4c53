//--------------------------------------------------------------------
// csv_export.rs
//--------------------------------------------------------------------
// One semicolon-separated line per (graph, algorithm) run
//--------------------------------------------------------------------

use crate::error::*;
use mst_core::MstRun;
use serde::Serialize;
use std::io::Write;

pub const CSV_HEADER: [&str; 7] =
    ["graph_id", "vertices", "edges", "algorithm", "total_cost", "operations_count", "execution_time_ms"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CsvRow {
    pub graph_id: u64,
    pub vertices: usize,
    pub edges: usize,
    pub algorithm: String,
    pub total_cost: String,
    pub operations_count: u64,
    pub execution_time_ms: String
}

impl CsvRow {
    pub fn new(graph_id: u64, run: &MstRun) -> CsvRow {
        CsvRow {
            graph_id,
            vertices: run.vertices,
            edges: run.edge_count,
            algorithm: run.algorithm.to_string(),
            total_cost: format!("{:.2}", run.total_weight),
            operations_count: run.metrics.total_operations,
            execution_time_ms: format!("{:.2}", run.metrics.execution_time_ms)
        }
    }
}

pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>
}

impl<W: Write> CsvExporter<W> {
    /// Wraps `inner` and writes the header line right away
    pub fn new(inner: W) -> Result<CsvExporter<W>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(&CSV_HEADER)?;
        Ok(CsvExporter { writer })
    }

    pub fn write_run(&mut self, graph_id: u64, run: &MstRun) -> Result<()> {
        self.writer.serialize(CsvRow::new(graph_id, run))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mst_core::{Algorithm, Graph, Metrics};

    #[test]
    fn test_rows() {
        let graph = Graph::from_records(3, vec![(0, 1, 1.25), (1, 2, 2.5)]).unwrap();
        let mut buf = Vec::new();
        let mut exporter = CsvExporter::new(&mut buf).unwrap();
        for algorithm in Algorithm::ALL.iter() {
            exporter.write_run(12, &algorithm.run(&graph, Metrics::new()).unwrap()).unwrap();
        }
        exporter.flush().unwrap();
        drop(exporter);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "graph_id;vertices;edges;algorithm;total_cost;operations_count;execution_time_ms");
        assert!(lines[1].starts_with("12;3;2;Prim;3.75;"));
        assert!(lines[2].starts_with("12;3;2;Kruskal;3.75;"));
    }

    #[test]
    fn test_header_only() {
        let mut buf = Vec::new();
        let mut exporter = CsvExporter::new(&mut buf).unwrap();
        exporter.flush().unwrap();
        drop(exporter);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, CSV_HEADER.join(";") + "\n");
    }
}
