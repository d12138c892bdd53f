//! Command handlers for the `ripc` CLI.
//!
//! Shared input handling lives here in the module root.

mod dump;

use std::io::{self, Read};

pub use dump::{dump_labels, dump_tokens};
pub use test::run_tests;

/// Read the file at `path`, or stdin when no path is given.
///
/// Exits with status 1 when the input cannot be read.
pub fn read_input(path: Option<&str>) -> String {
    let read = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    match read {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", path.unwrap_or("<stdin>"));
            std::process::exit(1);
        }
    }
}
