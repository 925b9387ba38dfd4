//! Workload run FFI functions.

use crate::bridge::{WorkloadRequest, WorkloadRunner};
use crate::ffi::{error_code, WB_ERR_NULL_RUNNER};

/// Runs `count` concurrent workers of `workload` iterations each and returns
/// the aggregate (sum of per-worker iteration counts, i.e.
/// `count * workload`). Blocks until all workers have completed.
///
/// # Safety
/// - `ptr` must be a valid pointer to a WorkloadRunner, or null
///
/// # Returns
/// The non-negative aggregate on success, or a negative error code:
/// `WB_ERR_NULL_RUNNER`, `WB_ERR_INVALID_ARGUMENT` (count or workload is
/// negative), or `WB_ERR_RESOURCE_EXHAUSTED` (count exceeds the runner's
/// worker cap).
#[no_mangle]
pub unsafe extern "C" fn wb_run(ptr: *const WorkloadRunner, count: i32, workload: i32) -> i64 {
    if ptr.is_null() {
        return WB_ERR_NULL_RUNNER;
    }

    let runner = &*ptr;
    let request = match WorkloadRequest::from_raw(count as i64, workload as i64) {
        Ok(request) => request,
        Err(err) => return error_code(&err),
    };

    match runner.run(request) {
        Ok(aggregate) => aggregate as i64,
        Err(err) => error_code(&err),
    }
}

/// Like `wb_run`, additionally writing the wall-clock duration of the run in
/// milliseconds through `elapsed_ms_out` (left untouched on error; may be
/// null if the caller does not want the measurement).
///
/// # Safety
/// - `ptr` must be a valid pointer to a WorkloadRunner, or null
/// - `elapsed_ms_out` must be a valid pointer to a u64, or null
///
/// # Returns
/// The non-negative aggregate on success, or a negative error code (see
/// `wb_run`).
#[no_mangle]
pub unsafe extern "C" fn wb_run_timed(
    ptr: *const WorkloadRunner,
    count: i32,
    workload: i32,
    elapsed_ms_out: *mut u64,
) -> i64 {
    if ptr.is_null() {
        return WB_ERR_NULL_RUNNER;
    }

    let runner = &*ptr;
    let request = match WorkloadRequest::from_raw(count as i64, workload as i64) {
        Ok(request) => request,
        Err(err) => return error_code(&err),
    };

    match runner.run_timed(request) {
        Ok(report) => {
            if !elapsed_ms_out.is_null() {
                *elapsed_ms_out = report.elapsed.as_millis() as u64;
            }
            report.aggregate as i64
        }
        Err(err) => error_code(&err),
    }
}
