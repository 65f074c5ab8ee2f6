//! # CLI Layer
//!
//! This is **one possible UI client** for carlot, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Active Dealer
//!
//! Commands act on the dealer of the active session (`carlot login <name>`).
//! The dealer id is read from the session at dispatch time and passed down
//! explicitly; nothing is kept in process-wide state.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber for `--verbose` / `RUST_LOG`

mod commands;
mod logging;
mod print;
pub mod setup;

use carlot::error::{CarlotError, ErrorKind};

pub use commands::run;

pub fn exit_code(error: &CarlotError) -> i32 {
    match error.kind() {
        ErrorKind::Usage | ErrorKind::InvalidFormat => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Conflict => 4,
        ErrorKind::Storage => 5,
    }
}
