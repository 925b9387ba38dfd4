//! Core workload logic and compute operations.
//!
//! This module contains the actual logic: the concurrent workload runner and
//! the stateless compute helpers. The FFI layer in `ffi/` calls these
//! functions.

pub mod ops;
pub mod runner;
pub mod worker;

pub use ops::{add, factorial, greet};
pub use runner::{RunReport, WorkloadRequest, WorkloadRunner};
pub use worker::busy_work;
