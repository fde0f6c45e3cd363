//! Output-target validation for the `output` half of a rule value.
//!
//! The first character classifies the target:
//! - `>` — a standard stream; only `>stdout` and `>stderr` exist.
//! - `|` — a pipeline; the command text is accepted uninspected, it only
//!   has to be non-empty.
//! - anything else — a file-path template, which may embed `%d(name)`
//!   directives (and `%%` literals) but none of the other conversions.

use crate::format::scan_reference;
use crate::models::Diagnostic;

/// Validate one output target, appending diagnostics for `line`.
pub fn check_output_value(line: usize, context: &str, value: &str, diags: &mut Vec<Diagnostic>) {
    if let Some(rest) = value.strip_prefix('>') {
        if rest != "stdout" && rest != "stderr" {
            diags.push(Diagnostic::error(
                line,
                context,
                format!("unknown output '{}'", value),
            ));
        }
    } else if let Some(rest) = value.strip_prefix('|') {
        if rest.trim_start().is_empty() {
            diags.push(Diagnostic::error(
                line,
                context,
                "need pipeline output path after '|'",
            ));
        }
    } else {
        check_file_template(line, context, value, diags);
    }
}

/// Scan a file-path template with the restricted directive grammar:
/// only `%%` and `%d(...)` are legal after a `%`.
fn check_file_template(line: usize, context: &str, value: &str, diags: &mut Vec<Diagnostic>) {
    let chars: Vec<char> = value.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '%' {
            i += 1;
            continue;
        }
        i += 1;
        if i >= chars.len() {
            diags.push(Diagnostic::error(
                line,
                context,
                "missing conversion character after '%'",
            ));
            return;
        }
        match chars[i] {
            '%' => {
                i += 1;
            }
            'd' => {
                i += 1;
                if let Err(message) = scan_reference(&chars, &mut i) {
                    diags.push(Diagnostic::error(line, context, message));
                    return;
                }
            }
            other => {
                diags.push(Diagnostic::error(
                    line,
                    context,
                    format!("unknown command '%{}'", other),
                ));
                return;
            }
        }
    }
}
