mod csv;
mod json;
mod text;

use serde::Serialize;

use crate::design::FirDesign;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Kaiser estimator results included in a report
#[derive(Debug, Clone, Serialize)]
pub struct KaiserReport {
    pub attenuation_db: f64,
    pub order: usize,
    pub beta: f64,
}

/// Printable summary of a finished design
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport {
    pub kind: String,
    pub length: usize,
    pub transition_hz: f64,
    pub sample_rate_hz: f64,
    pub window: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kaiser: Option<KaiserReport>,
    pub group_delay_samples: usize,
    pub dc_gain: f64,
    pub cutoff_gain_db: f64,
    /// One-sided taps, center first
    pub coefficients: Vec<f64>,
}

impl DesignReport {
    pub fn new(design: &FirDesign) -> Self {
        let spec = &design.spec;
        let coefficients = &design.coefficients;
        Self {
            kind: spec.kind().to_string(),
            length: design.filter_length(),
            transition_hz: spec.transition_hz(),
            sample_rate_hz: spec.sample_rate_hz(),
            window: design.window.to_string(),
            kaiser: design.kaiser.map(|params| KaiserReport {
                attenuation_db: params.attenuation_db,
                order: params.order,
                beta: params.beta,
            }),
            group_delay_samples: design.group_delay_samples(),
            dc_gain: coefficients.dc_gain(),
            cutoff_gain_db: coefficients
                .magnitude_db_at(spec.transition_hz(), spec.sample_rate_hz()),
            coefficients: coefficients.as_slice().to_vec(),
        }
    }
}

pub trait Formatter {
    fn format(&self, report: &DesignReport) -> String;
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
