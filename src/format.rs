//! Format-string validation for `[format]` values.
//!
//! A format value is scanned left to right for `%` directives:
//! - `%%` is a literal percent and always accepted.
//! - Simple conversions take an optional `-` flag, optional width digits,
//!   and an optional `.`-prefixed precision, e.g. `%-10.2f`.
//! - `%d(name)` substitutes a named contextual field and requires the
//!   parenthesized argument.
//!
//! Scanning aborts on the first grammar error in a value; later lines are
//! unaffected. A directive cut off by the end of the value is reported as
//! an explicit error rather than scanned past.

use crate::models::Diagnostic;

/// Conversion characters accepted without an argument.
const SIMPLE_CONVERSIONS: &[char] = &['f', 'F', 'L', 'U', 'm', 'n', 'V', 'v', 'S', 'M'];

/// Validate one format value, appending diagnostics for `line`.
///
/// `context` is the trimmed configuration line the value came from and is
/// echoed in every diagnostic.
pub fn check_format_value(line: usize, context: &str, value: &str, diags: &mut Vec<Diagnostic>) {
    let chars: Vec<char> = value.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '%' {
            i += 1;
            continue;
        }
        i += 1;
        if let Err(message) = scan_directive(&chars, &mut i) {
            diags.push(Diagnostic::error(line, context, message));
            return;
        }
    }
}

/// Scan a single directive starting just past its `%`, advancing `i`
/// beyond it. Returns the error message on the first grammar violation.
fn scan_directive(chars: &[char], i: &mut usize) -> Result<(), String> {
    if *i >= chars.len() {
        return Err("missing conversion character after '%'".to_string());
    }
    // escaped literal percent
    if chars[*i] == '%' {
        *i += 1;
        return Ok(());
    }
    // left-justify flag
    if chars[*i] == '-' {
        *i += 1;
    }
    // a '.' here means the width was skipped
    if *i < chars.len() && chars[*i] == '.' {
        return Err("need number after '-'".to_string());
    }
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i < chars.len() && chars[*i] == '.' {
        *i += 1;
        if *i >= chars.len() || !chars[*i].is_ascii_digit() {
            return Err("need number after '.'".to_string());
        }
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
    }
    if *i >= chars.len() {
        return Err("missing conversion character after '%'".to_string());
    }
    let conv = chars[*i];
    if conv == 'd' {
        *i += 1;
        return scan_reference(chars, i);
    }
    if SIMPLE_CONVERSIONS.contains(&conv) {
        *i += 1;
        return Ok(());
    }
    Err(format!("unknown command '%{}'", conv))
}

/// Scan the `(name)` argument of a `%d` directive, `i` pointing just past
/// the `d`. Shared with the file-path template scanner.
pub(crate) fn scan_reference(chars: &[char], i: &mut usize) -> Result<(), String> {
    if *i >= chars.len() || chars[*i] != '(' {
        return Err("missing '(' after '%d'".to_string());
    }
    *i += 1;
    while *i < chars.len() {
        if chars[*i] == ')' {
            *i += 1;
            return Ok(());
        }
        *i += 1;
    }
    Err("missing ')' after '%d'".to_string())
}
