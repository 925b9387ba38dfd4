//! Stateless compute FFI functions and string hand-over.

use std::ffi::{c_char, CStr, CString};

use crate::bridge;

/// Calculates the factorial of `n` (`n <= 0` returns 1; wraps on overflow).
#[no_mangle]
pub extern "C" fn wb_factorial(n: i64) -> i64 {
    bridge::factorial(n)
}

/// Formats a greeting for `name` and returns it as a newly allocated
/// C string. Ownership of the string transfers to the caller.
///
/// # Safety
/// - `name` must be a valid NUL-terminated C string, or null
/// - the returned pointer must be released with `wb_string_free()`
///
/// # Returns
/// The greeting, or null if `name` is null, not valid UTF-8, or contains an
/// interior NUL.
#[no_mangle]
pub unsafe extern "C" fn wb_greet(name: *const c_char) -> *mut c_char {
    if name.is_null() {
        return std::ptr::null_mut();
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(name) => name,
        Err(_) => return std::ptr::null_mut(),
    };

    match CString::new(bridge::greet(name)) {
        Ok(greeting) => greeting.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a string previously returned by `wb_greet()`.
///
/// # Safety
/// - `s` must be a pointer returned by `wb_greet()`, or null
/// - `s` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn wb_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
