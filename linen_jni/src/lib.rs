#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! JNI bindings for Linen. This crate builds a native library that the
//! JVM loads with `System.loadLibrary("linen_jni")`, exposing the native
//! methods of the `LinenJNI` Java class.
//!
//! The same operations are also exported with a plain C ABI (see [`ffi`])
//! for hosts that are not a JVM, and as ordinary Rust functions for code
//! that links the `rlib` directly.

/// The line written to standard output by `sayHello`.
pub const GREETING: &str = "hello worldz!!!";

/// The string handed back to the caller by `getStringMsg`.
pub const MESSAGE: &str = "This is a test";

/// The Java class the native methods are bound to. It lives in the
/// default package, so there is no package prefix in the symbol names.
pub const JAVA_CLASS: &str = "LinenJNI";

mod errors;
mod greeting;
pub mod binding;
pub mod connector;
pub mod exports;
pub mod ffi;

pub use errors::{BridgeError, Result};
pub use greeting::{say_hello, string_msg, write_greeting};
pub use binding::{mangle_jni_name, NativeMethod};
pub use connector::{NodeConfig, NodeConnection, NodeConnector, NodeManager};
pub use ffi::{linen_get_string_msg, linen_say_hello};
