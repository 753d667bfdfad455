//! Command Line Interface for the trade shortfall report.
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use shortfall_data::json::write_json;
use shortfall_data::{CsvOptions, CsvSink, CsvSource, RowSink, RowSource};
use shortfall_engine::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod table;

#[derive(Parser)]
#[command(name = "shortfall")]
#[command(about = "Realized versus best-possible gain per account and instrument", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the shortfall report from trade and candle files
    Report {
        /// Trade executions file
        #[arg(long, env = "SHORTFALL_TRADES", default_value = "user_trades.csv")]
        trades: PathBuf,

        /// Candle observations file
        #[arg(long, env = "SHORTFALL_CANDLES", default_value = "candles_5m.csv")]
        candles: PathBuf,

        /// Report destination
        #[arg(short, long, env = "SHORTFALL_OUTPUT", default_value = "output.csv")]
        output: PathBuf,

        /// Report file format
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Report every malformed row instead of stopping at the first one
        #[arg(long)]
        collect_errors: bool,

        /// Fail when a traded instrument has no candle data
        #[arg(long)]
        require_candles: bool,

        /// Also print the report as a table
        #[arg(long)]
        print: bool,

        #[command(flatten)]
        csv: CsvArgs,
    },
    /// Show the per-instrument price range reduced from a candle file
    Candles {
        /// Candle observations file
        #[arg(long, env = "SHORTFALL_CANDLES", default_value = "candles_5m.csv")]
        candles: PathBuf,

        #[command(flatten)]
        csv: CsvArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Args)]
struct CsvArgs {
    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Input files start with a header row
    #[arg(long)]
    has_headers: bool,
}

impl CsvArgs {
    fn options(&self) -> Result<CsvOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        Ok(CsvOptions::default()
            .with_delimiter(self.delimiter as u8)
            .with_headers(self.has_headers))
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Report {
            trades,
            candles,
            output,
            format,
            collect_errors,
            require_candles,
            print,
            csv,
        } => {
            let policy = if *collect_errors {
                ErrorPolicy::Collect
            } else {
                ErrorPolicy::FailFast
            };
            let config = EngineConfig::default()
                .with_error_policy(policy)
                .with_required_candles(*require_candles);

            let options = csv.options()?;
            let report = generate_report(trades, candles, output, *format, &config, options)?;

            if *print {
                table::report_table(&report.rows).printstd();
            }
            info!(
                rows = report.len(),
                output = %output.display(),
                "Report complete"
            );
        }
        Commands::Candles { candles, csv } => {
            let rows = read_input(candles, csv.options()?)?;
            let reducer = CandleReducer::from_rows(&rows, ErrorPolicy::FailFast)
                .inspect_err(log_record_errors)
                .context("reducing candles")?;
            table::candle_table(&reducer.sorted()).printstd();
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path, options: CsvOptions) -> Result<Vec<Vec<String>>> {
    CsvSource::new(path, options)
        .read_rows()
        .with_context(|| format!("reading {}", path.display()))
}

fn run_report(
    trades: &Path,
    candles: &Path,
    config: &EngineConfig,
    options: CsvOptions,
) -> Result<ShortfallReport> {
    let trade_rows = read_input(trades, options)?;
    let candle_rows = read_input(candles, options)?;

    ShortfallReport::build(&trade_rows, &candle_rows, config)
        .inspect_err(log_record_errors)
        .context("building report")
}

/// Builds the report and writes it. Nothing is written unless the build
/// succeeds.
fn generate_report(
    trades: &Path,
    candles: &Path,
    output: &Path,
    format: OutputFormat,
    config: &EngineConfig,
    options: CsvOptions,
) -> Result<ShortfallReport> {
    let report = run_report(trades, candles, config, options)?;
    write_report(&report, output, format, options)?;
    Ok(report)
}

fn write_report(
    report: &ShortfallReport,
    output: &Path,
    format: OutputFormat,
    options: CsvOptions,
) -> Result<()> {
    let written = match format {
        OutputFormat::Csv => CsvSink::new(output, options).write_rows(&report.records()),
        OutputFormat::Json => write_json(output, &report.rows),
    };
    written.with_context(|| format!("writing {}", output.display()))
}

fn log_record_errors(err: &EngineError) {
    for record_error in err.record_errors() {
        error!(row = record_error.row(), "{record_error}");
    }
}
