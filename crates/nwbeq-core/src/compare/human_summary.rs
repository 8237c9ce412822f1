//! Markdown rendering of comparison reports.

use crate::compare::report::ComparisonReport;

/// Render a Markdown summary of a [`ComparisonReport`]
///
/// Informational only; harness failure messages embed it verbatim.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Equivalence Check: {}\n\n", report.root_type()));
    out.push_str(&format!(
        "**Check**: `{}`  \n**Fields checked**: {}  \n**Failures**: {}\n\n",
        report.check_id(),
        report.fields_checked(),
        report.failures().len()
    ));

    if report.is_equivalent() {
        out.push_str("_Containers are equivalent._\n");
        return out;
    }

    out.push_str("| Code | Path | Container | Detail |\n|---|---|---|---|\n");
    for failure in report.failures() {
        out.push_str(&format!(
            "| `{}` | `{}` | {} | {} |\n",
            failure.code(),
            failure.path(),
            failure.container_type().unwrap_or("-"),
            escape_cell(&failure.message()),
        ));
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
