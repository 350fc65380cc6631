//! Parallel evaluation of many dependency snapshots.
//!
//! Each worker owns its evaluation's entire node tree and reads only the
//! shared immutable snapshot and configuration, so no locking is needed.
//! Results carry their dependency; callers must key on that identity, not
//! on ordering.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::Config;
use crate::engine::{evaluate, Evaluation};
use crate::facts::DependencySnapshot;

/// Evaluate every snapshot, fanning out across the rayon pool.
pub fn evaluate_all(
    snapshots: &[DependencySnapshot],
    config: &Config,
    now: DateTime<Utc>,
) -> Vec<Evaluation> {
    snapshots
        .par_iter()
        .map(|snapshot| evaluate(&snapshot.dependency, &snapshot.facts, config, now))
        .collect()
}

/// Bound the global rayon pool. A no-op if a pool was already built.
pub fn configure_jobs(jobs: usize) {
    if jobs == 0 {
        return;
    }

    if let Err(error) = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
    {
        log::debug!("rayon pool already initialized: {error}");
    }
}
