//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tlogcheck",
    version,
    about = "Static checker for tlog configuration files",
    long_about = "tlogcheck — validate a tlog logging configuration without loading it.\n\nChecks section headers, key=value structure, format-string directives,\nrule levels, format references, and output targets. The file is never\nmodified; problems are reported as error/warning diagnostics.",
    after_help = "Examples:\n  tlogcheck tlog.conf\n  tlogcheck tlog.conf --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to the configure file")]
    pub file: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
