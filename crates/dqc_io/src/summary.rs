//! Plain-text summary of a validation result.

use dqc_core::ValidationResult;

const RULE: &str = "----------------------------------------";

/// Per-column counts followed by the three grand totals, one line each.
pub fn summary_lines(result: &ValidationResult) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "Error Summary by Column:".to_string(),
        RULE.to_string(),
    ];

    for (column, kinds) in result.column_counts() {
        for (kind, count) in kinds {
            lines.push(format!(
                "Column: {column}, Error Type: {kind}, Count: {count}"
            ));
        }
    }

    let totals = result.totals();
    lines.extend([
        RULE.to_string(),
        "Error Summary:".to_string(),
        RULE.to_string(),
        format!("Total datatype_errors: {}", totals.datatype_errors),
        format!("Total duplicate_key_errors: {}", totals.duplicate_key_errors),
        format!("Total special_char_errors: {}", totals.special_char_errors),
    ]);

    lines
}

/// The summary as one newline-terminated string.
pub fn format_summary(result: &ValidationResult) -> String {
    let mut out = summary_lines(result).join("\n");
    out.push('\n');
    out
}
