use super::{DesignReport, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &DesignReport) -> String {
        let mut out = String::from("k,coefficient\n");
        for (k, c) in report.coefficients.iter().enumerate() {
            out.push_str(&format!("{},{:.12e}\n", k, c));
        }
        out
    }
}
