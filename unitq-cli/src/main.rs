//! unitq command line - convert a free-text query and print the result
//!
//! Usage: unitq [--json] <query...>
//!
//! The query is everything after the flags joined with spaces, so
//! quoting is optional: `unitq 5 ft 7 in to cm`. With no arguments a
//! single query line is read from stdin. `--json` emits the structured
//! result or error report instead of plain text.

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use unitq::{answer, ErrorReport};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };

    let query = if args.is_empty() {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(_) if !line.trim().is_empty() => line.trim().to_string(),
            _ => {
                eprintln!("usage: unitq [--json] <query>    e.g. unitq 5 ft 7 in to cm");
                return ExitCode::from(2);
            }
        }
    } else {
        args.join(" ")
    };

    debug!(%query, "converting");

    match answer(&query) {
        Ok(conversion) => {
            if json {
                match serde_json::to_string(&conversion) {
                    Ok(payload) => println!("{payload}"),
                    Err(err) => {
                        eprintln!("error: failed to encode result: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{conversion}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(kind = err.kind(), "conversion failed");
            let report = ErrorReport::from(&err);
            if json {
                match serde_json::to_string(&report) {
                    Ok(payload) => println!("{payload}"),
                    Err(err) => eprintln!("error: failed to encode report: {err}"),
                }
            } else {
                eprintln!("error: {}", report.message);
                if let Some(hint) = report.hint {
                    eprintln!("  {hint}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
