//--------------------------------------------------------------------
// generate.rs
//--------------------------------------------------------------------
// Seeded generation of random connected input graphs
//--------------------------------------------------------------------

use mst_json_loader::{EdgeRecord, GraphRecord, InputFile};
use rand::Rng;
use rand_pcg::Pcg32;

// (vertex counts, extra edges per vertex) for each size tier
const TIERS: [(&[usize], usize); 4] = [
    (&[5, 10, 15, 20, 25], 3),
    (&[30, 60, 90, 120, 150, 180, 210, 240, 270, 300], 3),
    (&[350, 400, 500, 600, 700, 800, 850, 900, 950, 1000], 4),
    (&[1300, 1600, 2000], 4),
];

pub fn generate_input(rng: &mut Pcg32) -> InputFile {
    let mut graphs = Vec::new();
    for &(sizes, per_vertex) in TIERS.iter() {
        for &vertices in sizes {
            let id = graphs.len() as u64 + 1;
            graphs.push(random_connected_graph(rng, id, vertices, per_vertex));
        }
    }
    InputFile { graphs }
}

/// A random spanning tree over `V1..Vn` topped up with distinct extra
/// edges until `min(n * per_vertex, n(n-1)/2)` edges exist.
pub fn random_connected_graph(rng: &mut Pcg32, id: u64, vertices: usize, per_vertex: usize) -> GraphRecord {
    let nodes: Vec<String> = (1..=vertices).map(|i| format!("V{}", i)).collect();
    let mut present = vec![false; vertices * vertices];
    let mut edges = Vec::new();

    let push = |edges: &mut Vec<EdgeRecord>, present: &mut [bool], u: usize, v: usize, weight: f64| {
        present[u * vertices + v] = true;
        present[v * vertices + u] = true;
        edges.push(EdgeRecord { from: nodes[u].clone(), to: nodes[v].clone(), weight });
    };

    for v in 1..vertices {
        let u = rng.gen_range(0..v);
        push(&mut edges, &mut present[..], u, v, rng.gen_range(0.0..10.0));
    }

    let max_edges = vertices * vertices.saturating_sub(1) / 2;
    let total = (vertices * per_vertex).min(max_edges);
    while edges.len() < total {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v && !present[u * vertices + v] {
            push(&mut edges, &mut present[..], u, v, rng.gen_range(1.0..10.0));
        }
    }

    GraphRecord { id, nodes, edges }
}

#[cfg(test)]
mod test {
    use super::*;
    use mst_core::{Algorithm, Metrics};
    use mst_json_loader::{IngestOptions, LabeledGraph};
    use rand::SeedableRng;

    #[test]
    fn test_generated_graphs_are_connected() {
        let mut rng = Pcg32::seed_from_u64(7);
        for &(vertices, per_vertex) in &[(1, 3), (2, 3), (5, 3), (40, 4)] {
            let record = random_connected_graph(&mut rng, 1, vertices, per_vertex);
            assert_eq!(record.nodes.len(), vertices);
            assert_eq!(record.edges.len(), (vertices * per_vertex).min(vertices * (vertices - 1) / 2));

            let graph = LabeledGraph::from_record(&record, IngestOptions::default()).unwrap();
            let run = Algorithm::Kruskal.run(graph.graph(), Metrics::new()).unwrap();
            assert_eq!(run.edges.len(), vertices - 1);
        }
    }

    #[test]
    fn test_no_parallel_edges_or_loops() {
        let mut rng = Pcg32::seed_from_u64(3);
        let record = random_connected_graph(&mut rng, 1, 12, 4);
        let mut seen = std::collections::HashSet::new();
        for edge in &record.edges {
            assert_ne!(edge.from, edge.to);
            let key = if edge.from < edge.to { (&edge.from, &edge.to) } else { (&edge.to, &edge.from) };
            assert!(seen.insert(key), "edge {}-{} generated twice", edge.from, edge.to);
        }
        assert_eq!(seen.len(), 48);
    }

    #[test]
    fn test_seed_reproduces_input() {
        let a = generate_input(&mut Pcg32::seed_from_u64(42));
        let b = generate_input(&mut Pcg32::seed_from_u64(42));
        assert_eq!(a.graphs.len(), 28);
        assert_eq!(a, b);
    }
}
