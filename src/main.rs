//! assertify CLI entry point
//!
//! Parses nothing and opens nothing itself: everything is delegated to
//! `cli::run`. Errors go to stderr and the process exits non-zero.

use assertify::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
