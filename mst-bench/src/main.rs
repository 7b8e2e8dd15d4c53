//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function: generates input graphs, or runs both
// MST algorithms over them and exports the results
//--------------------------------------------------------------------

mod generate;
mod runner;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mst_core::Algorithm;
use mst_json_loader::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prim vs. Kruskal minimum spanning tree benchmark")]
struct Args {
    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run both algorithms on every graph of the input file
    Run {
        #[arg(long, default_value = "data/input.json")]
        input: PathBuf,
        #[arg(long, default_value = "data/output.json")]
        json: PathBuf,
        #[arg(long, default_value = "data/output.csv")]
        csv: PathBuf,
        /// Timed runs per algorithm and graph; the first is a warm-up when more than one
        #[arg(long, default_value_t = 3)]
        repetitions: usize,
        /// Accept self-loops in the input instead of rejecting the graph
        #[arg(long)]
        allow_self_loops: bool
    },
    /// Write a file of random connected graphs
    Generate {
        #[arg(long, default_value = "data/input.json")]
        output: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Args::parse().command {
        Command::Run { input, json, csv, repetitions, allow_self_loops } => {
            let options = IngestOptions { reject_self_loops: !allow_self_loops };
            run(&input, &json, &csv, repetitions, options)
        }
        Command::Generate { output, seed } => {
            let input = generate::generate_input(&mut Pcg32::seed_from_u64(seed));
            write_file(&output, &input_to_string(&input)?)?;
            info!(graphs = input.graphs.len(), path = %output.display(), "saved generated graphs");
            Ok(())
        }
    }
}

fn run(input: &Path, json: &Path, csv: &Path, repetitions: usize, options: IngestOptions) -> Result<()> {
    let data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let input_file = input_from_str(&data)?;

    create_parent(csv)?;
    let csv_file = File::create(csv).with_context(|| format!("creating {}", csv.display()))?;
    let mut exporter = CsvExporter::new(BufWriter::new(csv_file))?;

    let mut results = Vec::with_capacity(input_file.graphs.len());
    for record in &input_file.graphs {
        let graph = LabeledGraph::from_record(record, options)?;
        let prim = runner::timed_run(graph.graph(), Algorithm::Prim, repetitions)?;
        let kruskal = runner::timed_run(graph.graph(), Algorithm::Kruskal, repetitions)?;

        if (prim.total_weight - kruskal.total_weight).abs() > 1e-9 * prim.total_weight.abs().max(1.0) {
            warn!(id = graph.id, prim = prim.total_weight, kruskal = kruskal.total_weight, "MST weights disagree");
        }

        exporter.write_run(graph.id, &prim)?;
        exporter.write_run(graph.id, &kruskal)?;
        info!(id = graph.id, vertices = prim.vertices, edges = prim.edge_count,
            cost = prim.total_weight, prim_ms = prim.metrics.execution_time_ms,
            kruskal_ms = kruskal.metrics.execution_time_ms, "graph processed");

        results.push(GraphResult::new(&graph, &prim, &kruskal));
    }
    exporter.flush()?;

    write_file(json, &output_to_string(&OutputFile { results })?)?;
    info!(json = %json.display(), csv = %csv.display(), "processing completed");
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    create_parent(path)?;
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}
