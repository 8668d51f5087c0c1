use super::{DesignReport, Formatter};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &DesignReport) -> String {
        let mut out = format!(
            "{} {} taps @ {:.1} Hz / {:.1} Hz, window {}\n",
            report.kind, report.length, report.transition_hz, report.sample_rate_hz, report.window
        );
        if let Some(kaiser) = &report.kaiser {
            out.push_str(&format!(
                "Kaiser estimate: A={:.2} dB, order={}, beta={:.4}\n",
                kaiser.attenuation_db, kaiser.order, kaiser.beta
            ));
        }
        out.push_str(&format!(
            "Group delay: {} samples, DC gain: {:.6}, gain at cutoff: {:.2} dB\n",
            report.group_delay_samples, report.dc_gain, report.cutoff_gain_db
        ));

        if self.verbose {
            for (k, c) in report.coefficients.iter().enumerate() {
                out.push_str(&format!("  c[{:>3}] = {:>+.10}\n", k, c));
            }
        }
        out
    }
}
