use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sincfir::config::{DesignConfig, Frequency};
use sincfir::output::{DesignReport, OutputFormat, create_formatter};
use sincfir::{FilterKind, StreamingFir};

#[derive(Parser, Debug)]
#[command(name = "sincfir")]
#[command(about = "Design windowed-sinc FIR filters and run them over a sample stream", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter kind: lowpass, highpass
    #[arg(short, long)]
    kind: Option<FilterKind>,

    /// Number of taps (odd)
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Cutoff frequency (e.g. "100", "1.5khz")
    #[arg(long)]
    cutoff: Option<Frequency>,

    /// Sample rate (e.g. "8000", "48k")
    #[arg(short = 'r', long)]
    sample_rate: Option<Frequency>,

    /// Window: rectangular, bartlett, hanning, hamming, blackman, kaiser
    #[arg(short, long)]
    window: Option<String>,

    /// Kaiser beta (fixed-length Kaiser design)
    #[arg(long)]
    beta: Option<f64>,

    /// Linear ripple; with --window kaiser selects the adaptive design
    #[arg(long)]
    ripple: Option<f64>,

    /// Transition band width for the adaptive Kaiser design
    #[arg(long)]
    transition_width: Option<Frequency>,

    /// Circular buffer capacity for streaming (power of two)
    #[arg(long)]
    buffer_capacity: Option<usize>,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Filter newline/whitespace separated samples from stdin instead of
    /// printing the design
    #[arg(long)]
    stream: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = build_config(&args)?;

    if args.stream {
        let filter = config
            .streaming_filter()
            .context("Failed to build streaming filter")?;
        return run_stream(filter);
    }

    let design = config.design().context("Filter design failed")?;
    let formatter = create_formatter(args.format, args.verbose > 0);
    print!("{}", formatter.format(&DesignReport::new(&design)));

    Ok(())
}

fn build_config(args: &Args) -> Result<DesignConfig> {
    let mut config = match &args.config {
        Some(path) => DesignConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DesignConfig::default(),
    };

    if let Some(kind) = args.kind {
        config.filter.kind = kind;
    }
    if let Some(length) = args.length {
        config.filter.length = length;
    }
    if let Some(cutoff) = args.cutoff {
        config.filter.transition_hz = cutoff.as_hz();
    }
    if let Some(rate) = args.sample_rate {
        config.filter.sample_rate_hz = rate.as_hz();
    }
    if let Some(window) = &args.window {
        config.window.shape = window.clone();
    }
    if args.beta.is_some() {
        config.window.beta = args.beta;
    }
    if args.ripple.is_some() {
        config.window.ripple = args.ripple;
    }
    if let Some(width) = args.transition_width {
        config.window.transition_width_hz = Some(width.as_hz());
    }
    if let Some(capacity) = args.buffer_capacity {
        config.stream.buffer_capacity = capacity;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn run_stream(mut filter: StreamingFir) -> Result<()> {
    log::info!(
        "Streaming {} taps, output delayed by {} samples",
        filter.num_taps(),
        filter.group_delay_samples()
    );

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        for token in line.split_whitespace() {
            let sample: f64 = token
                .parse()
                .with_context(|| format!("Invalid sample '{}'", token))?;
            writeln!(out, "{}", filter.process(sample))?;
        }
    }

    out.flush()?;
    Ok(())
}
