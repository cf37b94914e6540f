//! Error type shared by the bridge. The exported entry points never hand
//! these to the host; they are logged there and the host sees whatever
//! its own runtime raised.

use thiserror::Error;

/// Everything that can go wrong inside the bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A JNI call failed, e.g. the JVM could not allocate a string or
    /// an exception was already pending.
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// Writing to the output stream failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// No connection is registered under the requested node name.
    #[error("Node connection not found: {name}")]
    NodeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A connector failed to create a connection.
    #[error("Connector failed: {0}")]
    Connector(#[source] anyhow::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BridgeError>;
