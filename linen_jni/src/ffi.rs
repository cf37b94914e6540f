//! Plain C ABI versions of the bridge, for hosts that are not a JVM.
//! There is no calling-object handle here; both functions take nothing.

use crate::greeting::say_hello;
use std::ffi::{c_char, CStr};

/// NUL-terminated copy of [`crate::MESSAGE`].
const MESSAGE_C: &CStr = c"This is a test";

/// Prints the greeting line to standard output.
#[no_mangle]
pub extern "C" fn linen_say_hello() {
    say_hello();
}

/// Returns the fixed message as a NUL-terminated UTF-8 string.
///
/// The pointer refers to static data: it stays valid for the life of the
/// process and must not be freed by the caller.
#[no_mangle]
pub extern "C" fn linen_get_string_msg() -> *const c_char {
    MESSAGE_C.as_ptr()
}
