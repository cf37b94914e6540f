//! Drives the bridge from Rust, without a JVM, to make sure the library
//! itself is behaving before it is loaded anywhere else.

mod logger;

use anyhow::{ensure, Result};
use clap::Parser;
use linen_jni::{
    linen_get_string_msg, linen_say_hello, say_hello, string_msg, NativeMethod, NodeConfig,
    NodeConnection, NodeConnector, NodeManager, MESSAGE,
};
use std::ffi::CStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::info;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "linen_harness", about = "Exercise the Linen native bridge")]
struct Args {
    /// How many greetings to print.
    #[arg(long, default_value_t = 1)]
    greetings: usize,

    /// How many times to fetch the message.
    #[arg(long, default_value_t = 1)]
    messages: usize,

    /// Print the JNI binding table and exit.
    #[arg(long)]
    list_bindings: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Connects to nothing; stands in for a real node connector.
struct LoopbackConnector;

struct LoopbackConnection(String);

impl NodeConnection for LoopbackConnection {
    fn name(&self) -> &str {
        &self.0
    }
}

impl NodeConnector for LoopbackConnector {
    fn create_connection(
        &self,
        name: &str,
        _config: &NodeConfig,
        _run_id: Uuid,
    ) -> Result<Arc<dyn NodeConnection>> {
        Ok(Arc::new(LoopbackConnection(name.to_string())))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    if args.list_bindings {
        for method in NativeMethod::iter() {
            println!("{:<14} {:<22} {}", method, method.signature(), method.symbol());
        }
        return Ok(());
    }

    // Alternate the Rust and C entry points; both write the same line.
    for i in 0..args.greetings {
        if i % 2 == 0 {
            say_hello();
        } else {
            linen_say_hello();
        }
    }

    for _ in 0..args.messages {
        let from_rust = string_msg();
        // The pointer refers to a static NUL-terminated string.
        let from_c = unsafe { CStr::from_ptr(linen_get_string_msg()) }.to_str()?;
        ensure!(from_rust == MESSAGE, "Rust message mismatch: {from_rust:?}");
        ensure!(from_c == MESSAGE, "C message mismatch: {from_c:?}");
        println!("{from_rust}");
    }

    let run_id = Uuid::new_v4();
    let mut nodes = NodeManager::new(LoopbackConnector);
    nodes.connect("loopback", &NodeConfig::new(), run_id)?;
    let connection = nodes.get_connection("loopback")?;
    info!("Node registry check passed for {} (run {run_id})", connection.name());
    nodes.disconnect("loopback")?;

    Ok(())
}
