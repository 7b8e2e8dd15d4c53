//--------------------------------------------------------------------
// metrics.rs
//--------------------------------------------------------------------
// Operation counters and a wall-clock timer, owned by a single
// algorithm run
//--------------------------------------------------------------------

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Metrics {
    comparisons: u64,
    unions: u64,
    pq_operations: u64,
    find_operations: u64,
    started: Option<Instant>,
    elapsed: Duration
}

/// A copy of the counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSnapshot {
    pub comparisons: u64,
    pub unions: u64,
    pub priority_queue_operations: u64,
    pub find_operations: u64,
    pub total_operations: u64,
    pub execution_time_ms: f64
}

impl Metrics {
    pub fn new() -> Metrics { Metrics::default() }

    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    pub fn increment_comparison(&mut self) { self.comparisons += 1; }
    pub fn increment_union(&mut self) { self.unions += 1; }
    pub fn increment_pq_operation(&mut self) { self.pq_operations += 1; }
    pub fn increment_find(&mut self) { self.find_operations += 1; }

    pub fn comparisons(&self) -> u64 { self.comparisons }
    pub fn unions(&self) -> u64 { self.unions }
    pub fn pq_operations(&self) -> u64 { self.pq_operations }
    pub fn find_operations(&self) -> u64 { self.find_operations }

    pub fn total_operations(&self) -> u64 {
        self.comparisons + self.unions + self.pq_operations + self.find_operations
    }

    pub fn elapsed(&self) -> Duration { self.elapsed }
    pub fn execution_time_ms(&self) -> f64 { self.elapsed.as_secs_f64() * 1000.0 }

    pub fn reset(&mut self) { *self = Metrics::default(); }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.comparisons,
            unions: self.unions,
            priority_queue_operations: self.pq_operations,
            find_operations: self.find_operations,
            total_operations: self.total_operations(),
            execution_time_ms: self.execution_time_ms()
        }
    }
}
