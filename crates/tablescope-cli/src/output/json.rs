//! JSON output formatting.

use crate::commands::Report;

/// Format a report as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(report: &Report, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(report).expect("serialization cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_pretty() {
        let report = Report::Schemas(vec!["default".to_string(), "archive".to_string()]);
        let json = format_json(&report, false);
        assert!(json.contains('\n'));
        assert!(json.contains("\"archive\""));
    }

    #[test]
    fn test_json_compact() {
        let report = Report::Schemas(vec!["default".to_string()]);
        assert_eq!(format_json(&report, true), r#"["default"]"#);
    }
}
