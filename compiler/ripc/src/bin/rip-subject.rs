//! The subject binary checked by `ripc test`.
//!
//! `rip-subject tokenize|parse [FILE]` reads FILE (or stdin) and prints
//! one canonical token or one label per line.
//!
//! Exit status: 0 on success, 1 when the input is rejected, 2 on misuse.

use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    ripc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, file) = match args.as_slice() {
        [mode] => (mode.as_str(), None),
        [mode, file] => (mode.as_str(), Some(file.as_str())),
        _ => return usage(),
    };
    let run: fn(&str) -> Result<Vec<String>, rip_subject::SubjectError> = match mode {
        "tokenize" => rip_subject::tokenize,
        "parse" => rip_subject::parse,
        _ => return usage(),
    };

    let source = match read_source(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("rip-subject: cannot read {}: {e}", file.unwrap_or("<stdin>"));
            return ExitCode::from(2);
        }
    };

    match run(&source) {
        Ok(lines) => match print_lines(&lines) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("rip-subject: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("rip-subject: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: Option<&str>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn usage() -> ExitCode {
    eprintln!("Usage: rip-subject tokenize|parse [FILE]");
    ExitCode::from(2)
}
