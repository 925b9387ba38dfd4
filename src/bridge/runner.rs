//! Concurrent workload runner: fan-out, busy work, fan-in.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rayon::prelude::*;

use crate::bridge::worker::busy_work;
use crate::config::RunnerConfig;
use crate::error::RunnerError;

/// A validated request: `count` workers, each running a loop of `workload`
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadRequest {
    pub count: u32,
    pub workload: u64,
}

impl WorkloadRequest {
    /// Validate raw (possibly negative) values as they arrive from the
    /// C boundary.
    pub fn from_raw(count: i64, workload: i64) -> Result<Self, RunnerError> {
        if count < 0 {
            return Err(RunnerError::InvalidArgument(format!(
                "count must be non-negative, got {count}"
            )));
        }
        if workload < 0 {
            return Err(RunnerError::InvalidArgument(format!(
                "workload must be non-negative, got {workload}"
            )));
        }
        if count > u32::MAX as i64 {
            return Err(RunnerError::InvalidArgument(format!(
                "count {count} does not fit in 32 bits"
            )));
        }
        Ok(WorkloadRequest {
            count: count as u32,
            workload: workload as u64,
        })
    }
}

/// Outcome of a timed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub aggregate: u64,
    pub elapsed: Duration,
}

/// Runs batches of independent CPU-bound workers on a dedicated thread pool
/// and aggregates their results.
///
/// Each runner owns its pool; there is no process-global state, so several
/// runners can coexist and a runner can be dropped without affecting others.
/// Workers are logical: `count` tasks are multiplexed onto the pool's
/// threads, so worker count is bounded by `max_workers` rather than by what
/// the OS will tolerate.
pub struct WorkloadRunner {
    pool: rayon::ThreadPool,
    num_threads: usize,
    max_workers: u32,
}

impl WorkloadRunner {
    /// Create a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        let num_threads = config.effective_threads();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .unwrap_or_else(|_| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(1)
                    .build()
                    .unwrap()
            });

        WorkloadRunner {
            pool,
            num_threads,
            max_workers: config.effective_max_workers(),
        }
    }

    /// Number of pool threads workers are multiplexed onto.
    pub fn thread_count(&self) -> usize {
        self.num_threads
    }

    /// Maximum number of logical workers accepted per run.
    pub fn max_workers(&self) -> u32 {
        self.max_workers
    }

    /// Run `request.count` workers of `request.workload` iterations each and
    /// return the aggregate.
    ///
    /// The aggregate is the sum of each worker's completed iteration count,
    /// i.e. `count * workload`. Summation is order-independent, so the value
    /// is deterministic regardless of scheduling. Blocks until every worker
    /// has finished; no partial aggregate is ever returned.
    pub fn run(&self, request: WorkloadRequest) -> Result<u64, RunnerError> {
        if request.count > self.max_workers {
            warn!(
                "rejecting run: {} workers requested, limit is {}",
                request.count, self.max_workers
            );
            return Err(RunnerError::ResourceExhausted {
                requested: request.count,
                limit: self.max_workers,
            });
        }

        if request.count == 0 {
            return Ok(0);
        }

        debug!(
            "fanning out {} workers x {} iterations on {} threads",
            request.count, request.workload, self.num_threads
        );

        // Fan-out/fan-in: each worker owns its local result until the sum
        // merges them at the join point.
        let workload = request.workload;
        let aggregate: u64 = self.pool.install(|| {
            (1..=request.count)
                .into_par_iter()
                .map(|id| busy_work(id, workload))
                .sum()
        });

        Ok(aggregate)
    }

    /// Like [`run`](Self::run), additionally reporting wall-clock time spent.
    pub fn run_timed(&self, request: WorkloadRequest) -> Result<RunReport, RunnerError> {
        let start = Instant::now();
        let aggregate = self.run(request)?;
        let elapsed = start.elapsed();
        debug!(
            "run of {} workers completed in {:?}, aggregate {}",
            request.count, elapsed, aggregate
        );
        Ok(RunReport { aggregate, elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> WorkloadRunner {
        let _ = env_logger::builder().is_test(true).try_init();
        WorkloadRunner::new(RunnerConfig::default())
    }

    #[test]
    fn test_request_validation() {
        assert_eq!(
            WorkloadRequest::from_raw(4, 100),
            Ok(WorkloadRequest {
                count: 4,
                workload: 100
            })
        );

        assert!(matches!(
            WorkloadRequest::from_raw(-1, 100),
            Err(RunnerError::InvalidArgument(_))
        ));
        assert!(matches!(
            WorkloadRequest::from_raw(4, -1),
            Err(RunnerError::InvalidArgument(_))
        ));
        assert!(matches!(
            WorkloadRequest::from_raw(i64::MAX, 0),
            Err(RunnerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_count_is_zero_work() {
        let runner = runner();
        assert_eq!(
            runner.run(WorkloadRequest {
                count: 0,
                workload: 1_000_000
            }),
            Ok(0)
        );
    }

    #[test]
    fn test_zero_workload_is_zero_aggregate() {
        let runner = runner();
        assert_eq!(
            runner.run(WorkloadRequest {
                count: 50,
                workload: 0
            }),
            Ok(0)
        );
    }

    #[test]
    fn test_aggregate_is_count_times_workload() {
        let runner = runner();
        assert_eq!(
            runner.run(WorkloadRequest {
                count: 10,
                workload: 1000
            }),
            Ok(10_000)
        );
    }

    #[test]
    fn test_aggregate_is_deterministic_across_runs() {
        let runner = runner();
        let request = WorkloadRequest {
            count: 32,
            workload: 777,
        };

        let first = runner.run(request).unwrap();
        for _ in 0..10 {
            assert_eq!(runner.run(request).unwrap(), first);
        }
    }

    #[test]
    fn test_worker_cap_rejected_before_work_starts() {
        let runner = WorkloadRunner::new(RunnerConfig {
            num_threads: 2,
            max_workers: 8,
        });

        let err = runner
            .run(WorkloadRequest {
                count: 9,
                workload: 1,
            })
            .unwrap_err();
        assert_eq!(
            err,
            RunnerError::ResourceExhausted {
                requested: 9,
                limit: 8
            }
        );

        // At the cap is still accepted.
        assert_eq!(
            runner.run(WorkloadRequest {
                count: 8,
                workload: 10
            }),
            Ok(80)
        );
    }

    #[test]
    fn test_many_workers_on_small_pool() {
        // 200 logical workers on a 2-thread pool: the cap bounds workers,
        // the pool bounds threads.
        let runner = WorkloadRunner::new(RunnerConfig {
            num_threads: 2,
            max_workers: 1024,
        });
        assert_eq!(
            runner.run(WorkloadRequest {
                count: 200,
                workload: 500
            }),
            Ok(100_000)
        );
    }

    #[test]
    fn test_run_timed_reports_aggregate() {
        let runner = runner();
        let report = runner
            .run_timed(WorkloadRequest {
                count: 4,
                workload: 2500,
            })
            .unwrap();
        assert_eq!(report.aggregate, 10_000);
    }

    #[test]
    fn test_runners_are_independent() {
        let a = WorkloadRunner::new(RunnerConfig {
            num_threads: 1,
            max_workers: 4,
        });
        let b = WorkloadRunner::new(RunnerConfig {
            num_threads: 2,
            max_workers: 100,
        });

        assert!(a
            .run(WorkloadRequest {
                count: 50,
                workload: 1
            })
            .is_err());
        assert_eq!(
            b.run(WorkloadRequest {
                count: 50,
                workload: 1
            }),
            Ok(50)
        );
    }
}
