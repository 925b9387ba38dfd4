//! Simple addition function for FFI proof of concept.

use crate::bridge;

/// Simple addition function to verify FFI communication works.
#[no_mangle]
pub extern "C" fn wb_add(a: i32, b: i32) -> i32 {
    bridge::add(a, b)
}
