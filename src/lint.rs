//! Check runner for tlog configuration files.
//!
//! Drives one validation pass over a configuration: splits the input into
//! trimmed, numbered lines, tracks the active `[section]`, routes
//! `key = value` lines to the grammar validators, and collects diagnostics
//! in scan order.
//!
//! All mutable state for a run lives in one `ParseState`; validating many
//! files concurrently just means one state per file.

use crate::format::check_format_value;
use crate::models::{CheckResult, Diagnostic, Severity, Summary};
use crate::target::check_output_value;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Severity level names accepted in rule keys, lowest first.
const LEVEL_NAMES: &[&str] = &["debug", "info", "notice", "warn", "error", "fatal"];

/// The section a configuration line belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    General,
    Format,
    Rules,
    Unknown(String),
}

impl Section {
    fn from_name(name: &str) -> Self {
        match name {
            "general" => Section::General,
            "format" => Section::Format,
            "rules" => Section::Rules,
            other => Section::Unknown(other.to_string()),
        }
    }
}

/// Mutable state threaded through one validation run.
pub struct ParseState {
    in_group: bool,
    current_group: Section,
    known_formats: HashSet<String>,
}

impl ParseState {
    /// Fresh state with the implicit `default` format pre-registered.
    pub fn new() -> Self {
        let mut known_formats = HashSet::new();
        known_formats.insert("default".to_string());
        ParseState {
            in_group: false,
            current_group: Section::General,
            known_formats,
        }
    }
}

impl Default for ParseState {
    fn default() -> Self {
        ParseState::new()
    }
}

/// Check the configuration file at `path`.
///
/// Read failures propagate to the caller; grammar and reference problems
/// become diagnostics in the returned result.
pub fn check_file(path: &Path) -> io::Result<CheckResult> {
    let content = fs::read_to_string(path)?;
    Ok(check_str(&content))
}

/// Check configuration text, producing diagnostics in scan order.
///
/// Blank lines and lines whose first non-space character is `#` are
/// skipped silently. Every other line is either a `[section]` header or a
/// `key = value` pair attributed to the most recently opened section;
/// before the first header, every line is parsed as a header.
pub fn check_str(content: &str) -> CheckResult {
    let mut state = ParseState::new();
    let mut diags: Vec<Diagnostic> = Vec::new();
    let mut lines = 0usize;
    for (idx, raw) in content.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        lines += 1;
        check_line(idx + 1, text, &mut state, &mut diags);
    }
    let errors = diags
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diags.len() - errors;
    CheckResult {
        diagnostics: diags,
        summary: Summary {
            errors,
            warnings,
            lines,
        },
    }
}

/// Route one significant line by the active section.
fn check_line(line: usize, text: &str, state: &mut ParseState, diags: &mut Vec<Diagnostic>) {
    if !state.in_group || (text.starts_with('[') && text.ends_with(']')) {
        parse_group_header(line, text, state, diags);
        return;
    }
    let Some((key, value)) = text.split_once('=') else {
        diags.push(Diagnostic::error(line, text, "missing '='"));
        return;
    };
    let key = key.trim();
    let value = value.trim();
    match &state.current_group {
        Section::General => {}
        Section::Format => {
            check_format_value(line, text, value, diags);
            state.known_formats.insert(key.to_string());
        }
        Section::Rules | Section::Unknown(_) => check_rule(line, text, key, value, state, diags),
    }
}

/// Parse a `[section]` header, updating the active section on success.
///
/// The section name is taken from between the first `[` and the first `]`
/// once the line is known to start with `[` and end with `]`. Unknown
/// names are accepted with a warning.
fn parse_group_header(line: usize, text: &str, state: &mut ParseState, diags: &mut Vec<Diagnostic>) {
    let Some(start) = text.find('[') else {
        diags.push(Diagnostic::error(line, text, "invalid group, missing '['"));
        return;
    };
    let Some(end) = text.find(']') else {
        diags.push(Diagnostic::error(line, text, "invalid group, missing ']'"));
        return;
    };
    if !text.starts_with('[') {
        diags.push(Diagnostic::error(line, text, "useless string before '['"));
        return;
    }
    if !text.ends_with(']') {
        diags.push(Diagnostic::error(line, text, "useless string after ']'"));
        return;
    }
    let name = &text[start + 1..end];
    state.in_group = true;
    state.current_group = Section::from_name(name);
    if let Section::Unknown(unknown) = &state.current_group {
        diags.push(Diagnostic::warning(
            line,
            text,
            format!("unknown group '{}'", unknown),
        ));
    }
}

/// Validate a `[rules]` entry: severity level in the key, then the
/// `format;output` split in the value.
fn check_rule(
    line: usize,
    text: &str,
    key: &str,
    value: &str,
    state: &ParseState,
    diags: &mut Vec<Diagnostic>,
) {
    let level = match key.split_once('.') {
        Some((_, rest)) => rest.trim().to_lowercase(),
        None => "*".to_string(),
    };
    if !level_is_known(&level) {
        diags.push(Diagnostic::error(
            line,
            text,
            format!("unknown level '{}'", level),
        ));
    }
    let (format, output) = match value.split_once(';') {
        Some((format, output)) => (format.trim(), output.trim()),
        None => ("default", value),
    };
    if !state.known_formats.contains(format) {
        diags.push(Diagnostic::error(
            line,
            text,
            format!("unknown format '{}'", format),
        ));
    }
    check_output_value(line, text, output, diags);
}

/// A level is the wildcard `*` or a named level with an optional range
/// prefix (`=` exact, `>` above, `>=` at or above). The wildcard takes no
/// prefix.
fn level_is_known(level: &str) -> bool {
    if level == "*" {
        return true;
    }
    let name = level
        .strip_prefix(">=")
        .or_else(|| level.strip_prefix('>'))
        .or_else(|| level.strip_prefix('='))
        .unwrap_or(level);
    LEVEL_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn messages(content: &str) -> Vec<String> {
        check_str(content)
            .diagnostics
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_well_formed_config_is_clean() {
        let res = check_str(
            "[general]\n[format]\ndefault = %S %d(msg)\n[rules]\n*.info = default;>stdout\n",
        );
        assert!(res.diagnostics.is_empty());
        assert_eq!(res.summary.errors, 0);
        assert_eq!(res.summary.lines, 5);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let res = check_str("# tlog config\n\n   \n[general]\n  # indented comment\n");
        assert!(res.diagnostics.is_empty());
        assert_eq!(res.summary.lines, 1);
    }

    #[test]
    fn test_bad_format_directive_reported() {
        let msgs = messages("[format]\nbad = %q\n");
        assert_eq!(msgs, vec!["unknown command '%q'".to_string()]);
    }

    #[test]
    fn test_missing_equals() {
        let msgs = messages("[general]\nno separator here\n");
        assert_eq!(msgs, vec!["missing '='".to_string()]);
    }

    #[test]
    fn test_lines_before_first_group_are_header_errors() {
        let msgs = messages("key = value\n[general]\n");
        assert_eq!(msgs, vec!["invalid group, missing '['".to_string()]);
    }

    #[test]
    fn test_group_header_errors() {
        let msgs = messages("[rules\n");
        assert_eq!(msgs, vec!["invalid group, missing ']'".to_string()]);
        // routed through the header parser while no group is open
        let msgs = messages("x[rules]\n");
        assert_eq!(msgs, vec!["useless string before '['".to_string()]);
        let msgs = messages("[rules] trailing\n");
        assert_eq!(msgs, vec!["useless string after ']'".to_string()]);
    }

    #[test]
    fn test_header_name_stops_at_first_bracket() {
        // "[rules][junk]" starts with '[' and ends with ']'; the name is
        // taken up to the first ']'
        let res = check_str("[rules][junk]\napp.info = default;>stdout\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_group_warns_but_accepts() {
        let res = check_str("[outputs]\napp = default;>stdout\n");
        assert_eq!(res.diagnostics.len(), 1);
        assert_eq!(res.diagnostics[0].severity, Severity::Warning);
        assert_eq!(res.diagnostics[0].message, "unknown group 'outputs'");
        assert_eq!(res.summary.warnings, 1);
        assert_eq!(res.summary.errors, 0);
    }

    #[test]
    fn test_general_entries_unvalidated() {
        let res = check_str("[general]\nanything = %q %z ; no checks\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_level() {
        let msgs = messages("[rules]\napp.trace = default;>stdout\n");
        assert_eq!(msgs, vec!["unknown level 'trace'".to_string()]);
    }

    #[test]
    fn test_level_case_folded_and_trimmed() {
        let res = check_str("[rules]\napp. INFO = default;>stdout\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_level_after_dot() {
        let msgs = messages("[rules]\napp. = default;>stdout\n");
        assert_eq!(msgs, vec!["unknown level ''".to_string()]);
    }

    #[test]
    fn test_level_range_prefixes() {
        let res = check_str(
            "[rules]\na.=warn = default;>stdout\nb.>warn = default;>stdout\nc.>=warn = default;>stdout\n",
        );
        assert!(res.diagnostics.is_empty());
        let msgs = messages("[rules]\na.>=bogus = default;>stdout\n");
        assert_eq!(msgs, vec!["unknown level '>=bogus'".to_string()]);
        let msgs = messages("[rules]\na.>* = default;>stdout\n");
        assert_eq!(msgs, vec!["unknown level '>*'".to_string()]);
    }

    #[test]
    fn test_unknown_format_reference() {
        let msgs = messages("[rules]\n*.info = fancy;>stdout\n");
        assert_eq!(msgs, vec!["unknown format 'fancy'".to_string()]);
    }

    #[test]
    fn test_declared_format_resolves() {
        let res = check_str("[format]\nfancy = %S\n[rules]\n*.info = fancy;>stdout\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_value_without_semicolon_is_output_only() {
        // the whole value is the output target; format falls back to default
        let res = check_str("[rules]\n*.info = /var/log/%d(name).log\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_rule_output_errors_reported() {
        let msgs = messages("[rules]\n*.info = default;>syslog\n");
        assert_eq!(msgs, vec!["unknown output '>syslog'".to_string()]);
        let msgs = messages("[rules]\n*.info = default;|\n");
        assert_eq!(msgs, vec!["need pipeline output path after '|'".to_string()]);
    }

    #[test]
    fn test_rule_value_with_extra_equals_kept_in_value() {
        // only the first '=' splits key from value
        let res = check_str("[rules]\n*.info = default;|logger --tag=app\n");
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_independent_rule_lines_each_reported() {
        let msgs = messages("[rules]\na.trace = default;>stdout\nb.info = missing;>stdout\n");
        assert_eq!(
            msgs,
            vec![
                "unknown level 'trace'".to_string(),
                "unknown format 'missing'".to_string(),
            ]
        );
    }

    #[test]
    fn test_diagnostics_keep_scan_order() {
        let res = check_str("[bogus]\nx = nope;>stdout\n[format]\nbad = %q\n");
        let lines: Vec<usize> = res.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
        assert_eq!(res.diagnostics[0].message, "unknown group 'bogus'");
        // unknown groups validate entries as rules
        assert_eq!(res.diagnostics[1].message, "unknown format 'nope'");
        assert_eq!(res.diagnostics[2].message, "unknown command '%q'");
    }

    #[test]
    fn test_context_is_trimmed_line() {
        let res = check_str("[general]\n   broken line   \n");
        assert_eq!(res.diagnostics[0].context, "broken line");
        assert_eq!(res.diagnostics[0].line, 2);
    }

    #[test]
    fn test_check_file_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tlog.conf");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "[format]").unwrap();
        writeln!(f, "default = %d(msg) %S").unwrap();
        writeln!(f, "[rules]").unwrap();
        writeln!(f, "*.error = default;>stderr").unwrap();
        let res = check_file(&path).unwrap();
        assert!(res.diagnostics.is_empty());
        assert_eq!(res.summary.lines, 4);

        assert!(check_file(&dir.path().join("missing.conf")).is_err());
    }
}
