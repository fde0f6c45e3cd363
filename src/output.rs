//! Output rendering for check results.
//!
//! Supports `human` (default) and `json` outputs. Human diagnostics use
//! the fixed line format `[<level> : <line>] <text>: <message>` on stdout
//! and are never colorized — downstream tooling matches on it verbatim.
//! The summary goes to stderr so stdout stays machine-consumable.

use crate::models::{CheckResult, Diagnostic};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Render one diagnostic in the fixed single-line format.
pub fn render_diagnostic(d: &Diagnostic) -> String {
    format!(
        "[{} : {}] {}: {}",
        d.severity.as_str(),
        d.line,
        d.context,
        d.message
    )
}

/// Print check results in the requested format.
pub fn print_check(res: &CheckResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res)).unwrap()
        ),
        _ => {
            for d in &res.diagnostics {
                println!("{}", render_diagnostic(d));
            }
            let summary = format!(
                "— Summary — errors={} warnings={} lines={}",
                res.summary.errors, res.summary.warnings, res.summary.lines
            );
            if use_colors(output) {
                eprintln!("{}", summary.bold());
            } else {
                eprintln!("{}", summary);
            }
        }
    }
}

/// Compose the check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult) -> JsonVal {
    // Directly serialize CheckResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, Summary};

    #[test]
    fn test_render_diagnostic_fixed_format() {
        let d = Diagnostic {
            severity: Severity::Error,
            line: 4,
            context: "bad = %q".into(),
            message: "unknown command '%q'".into(),
        };
        assert_eq!(
            render_diagnostic(&d),
            "[error : 4] bad = %q: unknown command '%q'"
        );
        let w = Diagnostic::warning(1, "[misc]", "unknown group 'misc'");
        assert_eq!(
            render_diagnostic(&w),
            "[warning : 1] [misc]: unknown group 'misc'"
        );
    }

    #[test]
    fn test_compose_check_json_shape() {
        let res = CheckResult {
            diagnostics: vec![Diagnostic::error(2, "x", "missing '='")],
            summary: Summary {
                errors: 1,
                warnings: 0,
                lines: 2,
            },
        };
        let out = compose_check_json(&res);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["summary"]["lines"], 2);
        assert_eq!(out["diagnostics"][0]["severity"], "error");
        assert_eq!(out["diagnostics"][0]["line"], 2);
        assert_eq!(out["diagnostics"][0]["message"], "missing '='");
    }
}
