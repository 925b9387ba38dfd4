//! Runner configuration.

/// Default cap on the number of logical workers per run.
pub const DEFAULT_MAX_WORKERS: u32 = 4096;

/// Configuration for a [`WorkloadRunner`](crate::bridge::WorkloadRunner).
///
/// A value of 0 for either field selects the default: all available cores
/// for `num_threads`, [`DEFAULT_MAX_WORKERS`] for `max_workers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Size of the thread pool workers are multiplexed onto.
    pub num_threads: u32,
    /// Maximum number of logical workers accepted per run.
    pub max_workers: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            num_threads: 0,
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl RunnerConfig {
    /// Resolve the configured thread count, falling back to the number of
    /// available cores (or 1 if that cannot be determined).
    pub fn effective_threads(&self) -> usize {
        if self.num_threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.num_threads as usize
        }
    }

    /// Resolve the configured worker cap.
    pub fn effective_max_workers(&self) -> u32 {
        if self.max_workers == 0 {
            DEFAULT_MAX_WORKERS
        } else {
            self.max_workers
        }
    }
}
