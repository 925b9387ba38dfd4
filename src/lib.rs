//! Workload Bridge - Native Compute Library
//!
//! This library provides a C ABI for embedding in a host application via FFI.
//! The host creates a `WorkloadRunner` handle, drives concurrent workload
//! runs through it, and calls a few stateless compute helpers (add, greet,
//! factorial). All logic lives in the `bridge` module; the `ffi` module is a
//! thin C-ABI wrapper layer.

pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;


pub use bridge::{WorkloadRequest, WorkloadRunner};
pub use config::RunnerConfig;
pub use error::RunnerError;
