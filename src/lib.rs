//! tlogcheck core library.
//!
//! Static validation for tlog's INI-style logging configuration. The
//! configuration names output formats under `[format]` (a printf-like
//! directive grammar) and binds logger/level keys to `format;output`
//! specifications under `[rules]`; this crate checks both mini-languages
//! plus the structural rules tying them together, without ever loading
//! or executing the configuration.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `lint`: The check runner: sections, key/value routing, rules.
//! - `format`: Format-string directive grammar.
//! - `target`: Output-target grammar (streams, pipes, path templates).
//! - `models`: Diagnostic, summary, and result structs.
//! - `output`: Human/JSON printers for check results.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod format;
pub mod lint;
pub mod models;
pub mod output;
pub mod target;
pub mod utils;
