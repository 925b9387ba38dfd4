//! C FFI layer for host-application integration.
//!
//! This module exports C ABI functions for use from a host runtime's FFI.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `bridge` module. These functions are thin
//! wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions. Fallible run entry points return non-negative aggregates on
//! success and one of the negative error codes below on failure.

pub mod compute;
pub mod lifecycle;
pub mod simple;
pub mod workload;

/// The runner pointer was null.
pub const WB_ERR_NULL_RUNNER: i64 = -1;
/// A count or workload argument was out of range.
pub const WB_ERR_INVALID_ARGUMENT: i64 = -2;
/// The requested worker count exceeds the runner's configured limit.
pub const WB_ERR_RESOURCE_EXHAUSTED: i64 = -3;

pub use compute::{wb_factorial, wb_greet, wb_string_free};
pub use lifecycle::{
    wb_runner_create, wb_runner_destroy, wb_runner_max_workers, wb_runner_thread_count,
};
pub use simple::wb_add;
pub use workload::{wb_run, wb_run_timed};

use crate::error::RunnerError;

/// Map a runner error onto its C error code.
pub(crate) fn error_code(err: &RunnerError) -> i64 {
    match err {
        RunnerError::InvalidArgument(_) => WB_ERR_INVALID_ARGUMENT,
        RunnerError::ResourceExhausted { .. } => WB_ERR_RESOURCE_EXHAUSTED,
    }
}
