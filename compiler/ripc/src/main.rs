//! ripc: differential conformance oracle CLI.

use std::path::PathBuf;
use std::time::Duration;

use ripc::commands::{dump_labels, dump_tokens, run_tests};
use ripc::OracleConfig;

fn main() {
    ripc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "test" => {
            // Path is optional, flags can come before or after
            let mut path: Option<String> = None;
            let mut config = OracleConfig::default();

            for arg in args.iter().skip(2) {
                if let Some(filter) = arg.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else if let Some(subject) = arg.strip_prefix("--subject=") {
                    config.subject = Some(PathBuf::from(subject));
                } else if let Some(secs) = arg.strip_prefix("--timeout=") {
                    let Ok(secs) = secs.parse::<f64>() else {
                        eprintln!("error: invalid timeout '{secs}'");
                        std::process::exit(2);
                    };
                    let Ok(timeout) = Duration::try_from_secs_f64(secs) else {
                        eprintln!("error: invalid timeout '{secs}'");
                        std::process::exit(2);
                    };
                    config.timeout = timeout;
                } else if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else if arg == "--no-parallel" {
                    config.parallel = false;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.clone());
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(2);
                }
            }

            let path = path.unwrap_or_else(|| ".".to_string());
            run_tests(&path, &config);
        }
        "tokenize" => dump_tokens(args.get(2).map(String::as_str)),
        "parse" => dump_labels(args.get(2).map(String::as_str)),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("ripc: differential conformance oracle for the Ruby subset");
    println!();
    println!("Usage: ripc <command> [options]");
    println!();
    println!("Commands:");
    println!("  test [path]        Run fixture files (default: current directory)");
    println!("  tokenize [file]    Print reference canonical tokens (stdin if no file)");
    println!("  parse [file]       Print reference production labels (stdin if no file)");
    println!("  help               Show this message");
    println!();
    println!("Test options:");
    println!("  --subject=<path>   Subject binary (default: $RIPC_SUBJECT, then rip-subject)");
    println!("  --timeout=<secs>   Per-fixture subject timeout (default: 10)");
    println!("  --filter=<text>    Only run fixtures whose source contains <text>");
    println!("  --no-parallel      Evaluate fixtures one at a time");
    println!("  -v, --verbose      Also report passing fixtures");
    println!();
    println!("Fixture files are *.rb files named tokenize*.rb or parse*.rb, one");
    println!("`<source> # <expected>` per line.");
    println!();
    println!("Set RUST_LOG=ripc=debug for tracing output, RIPC_LOG_TREE=1 for a tree.");
}
