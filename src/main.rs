//! tlogcheck CLI binary entry point.
//! Parses arguments, runs the check, and prints diagnostics.

use clap::Parser;
use std::path::Path;
use tlogcheck::cli::Cli;
use tlogcheck::{lint, output, utils};

fn main() {
    let cli = Cli::parse();
    let Some(file) = cli.file else {
        // Mirrors the historical tool: usage on stdout, exit 1
        println!("Usage: tlogcheck <configure file>");
        std::process::exit(1);
    };
    let mode = cli.output.as_deref().unwrap_or("human");
    match lint::check_file(Path::new(&file)) {
        Ok(result) => {
            // Diagnostics are informational; the run itself succeeded
            output::print_check(&result, mode);
        }
        Err(err) => {
            eprintln!("{} {}: {}", utils::error_prefix(), file, err);
            std::process::exit(1);
        }
    }
}
