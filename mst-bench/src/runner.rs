//--------------------------------------------------------------------
// runner.rs
//--------------------------------------------------------------------
// Repeated timed runs of one algorithm over one graph
//--------------------------------------------------------------------

use mst_core::{Algorithm, Graph, Metrics, MstRun, Result};
use tracing::warn;

/// Runs `algorithm` `repetitions` times with a fresh `Metrics` each time.
/// When there is more than one run the first is a warm-up and is dropped;
/// the returned run carries the mean execution time of the others.
pub fn timed_run(graph: &Graph, algorithm: Algorithm, repetitions: usize) -> Result<MstRun> {
    let repetitions = repetitions.max(1);
    let warmup = if repetitions > 1 { 1 } else { 0 };

    let mut kept: Option<MstRun> = None;
    let mut total_ms = 0.0;
    for i in 0..repetitions {
        let run = algorithm.run(graph, Metrics::new())?;
        if i < warmup { continue; }

        total_ms += run.metrics.execution_time_ms;
        let differs = kept.as_ref().map_or(false, |first| !first.same_outcome(&run));
        if differs { warn!(%algorithm, repetition = i, "run differs from the first measured run"); }
        if kept.is_none() { kept = Some(run); }
    }

    let mut run = kept.expect("at least one measured run");
    run.metrics.execution_time_ms = total_ms / (repetitions - warmup) as f64;
    Ok(run)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_repeated_runs_match_single() {
        let graph = Graph::from_records(4, vec![(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (2, 3, 3.0)]).unwrap();
        for algorithm in Algorithm::ALL.iter() {
            let single = timed_run(&graph, *algorithm, 1).unwrap();
            let repeated = timed_run(&graph, *algorithm, 5).unwrap();
            assert!(single.same_outcome(&repeated));
        }
    }

    #[test]
    fn test_zero_repetitions_runs_once() {
        let graph = Graph::from_records(2, vec![(0, 1, 2.0)]).unwrap();
        assert_eq!(timed_run(&graph, Algorithm::Prim, 0).unwrap().edges.len(), 1);
    }

    #[test]
    fn test_failure_propagates() {
        let graph = Graph::new(2).unwrap();
        assert!(timed_run(&graph, Algorithm::Kruskal, 3).is_err());
    }
}
