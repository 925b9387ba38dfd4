//! Runner creation, destruction, and configuration queries.

use crate::bridge::WorkloadRunner;
use crate::config::RunnerConfig;

/// Creates a new workload runner and returns an opaque pointer.
///
/// `num_threads` is the thread-pool size (0 = all available cores);
/// `max_workers` is the per-run worker cap (0 = library default).
///
/// # Safety
/// The returned pointer must eventually be freed with `wb_runner_destroy()`.
#[no_mangle]
pub extern "C" fn wb_runner_create(num_threads: u32, max_workers: u32) -> *mut WorkloadRunner {
    let runner = Box::new(WorkloadRunner::new(RunnerConfig {
        num_threads,
        max_workers,
    }));
    Box::into_raw(runner)
}

/// Destroys a workload runner and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `wb_runner_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn wb_runner_destroy(ptr: *mut WorkloadRunner) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the thread-pool size of a runner.
///
/// # Safety
/// - `ptr` must be a valid pointer to a WorkloadRunner, or null
///
/// # Returns
/// The thread count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn wb_runner_thread_count(ptr: *const WorkloadRunner) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).thread_count() as u32
}

/// Gets the per-run worker cap of a runner.
///
/// # Safety
/// - `ptr` must be a valid pointer to a WorkloadRunner, or null
///
/// # Returns
/// The worker cap, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn wb_runner_max_workers(ptr: *const WorkloadRunner) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).max_workers()
}
