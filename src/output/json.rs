use super::{DesignReport, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &DesignReport) -> String {
        // DesignReport holds only strings, numbers and vectors
        serde_json::to_string_pretty(report).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
