//! The two operations behind the bridge, free of any host runtime.

use crate::errors::Result;
use crate::{GREETING, MESSAGE};
use std::io::Write;
use tracing::{debug, warn};

/// Writes the greeting line, followed by a newline, to `out`.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    Ok(())
}

/// Prints the greeting to standard output. Failures of the stream are
/// logged and otherwise ignored; there is nobody to report them to.
pub fn say_hello() {
    debug!("sayHello called");
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write_greeting(&mut lock) {
        warn!("Could not write greeting: {e}");
    }
}

/// Returns the fixed message.
pub fn string_msg() -> &'static str {
    MESSAGE
}
