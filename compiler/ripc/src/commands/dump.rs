//! The `tokenize` and `parse` commands: print the reference output.

use crate::{canonical_tokens, label_stream};

use super::read_input;

/// Print the reference canonical tokens of a file (or stdin), one per line.
pub fn dump_tokens(path: Option<&str>) {
    let source = read_input(path);
    match canonical_tokens(&source) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Print the reference labels of a file (or stdin), one per line.
pub fn dump_labels(path: Option<&str>) {
    let source = read_input(path);
    match label_stream(&source) {
        Ok(labels) => {
            for label in labels {
                println!("{label}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
