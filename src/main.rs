use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stock_trend::{chart, load_csv, parse_window, OscillatorSeries, Result};

#[derive(Parser)]
#[command(name = "stock_trend", about = "Analysis of a company's closing stock price", version)]
struct Cli {
    /// Path to the input CSV file (header row; date in column 0, closing
    /// price in column 4)
    #[arg(short = 'i', long = "input_file")]
    input_file: PathBuf,

    /// Path to write the chart to; if absent, the chart opens in the
    /// platform image viewer
    #[arg(short = 'o', long = "output_file")]
    output_file: Option<PathBuf>,

    /// Long-term smoothing window, e.g. "4w" or "28d"
    #[arg(short = 'l', long, default_value = "4w")]
    long: String,

    /// Short-term smoothing window, e.g. "2w" or "14d"
    #[arg(short = 's', long, default_value = "2w")]
    short: String,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let long_win = parse_window(&cli.long)?;
    let short_win = parse_window(&cli.short)?;
    debug!(long_win, short_win, "smoothing windows in days");

    let data = load_csv(&cli.input_file)?;
    let dates: Vec<_> = data.iter().map(|p| p.date).collect();
    let prices: Vec<f64> = data.iter().map(|p| p.close).collect();

    let series = OscillatorSeries::compute(&prices, long_win, short_win)?;

    match &cli.output_file {
        Some(path) => chart::render_to_file(path, &dates, &prices, &series),
        None => chart::show(&dates, &prices, &series),
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}
