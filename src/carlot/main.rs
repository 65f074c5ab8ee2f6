//! # Carlot CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns errors into exit codes.
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns
//! argument parsing, context initialization (data directory, active
//! dealer), dispatch, error reporting and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(cli::exit_code(&e));
    }
}
