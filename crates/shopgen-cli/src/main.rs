mod config;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use config::{ConfigError, ShopgenConfig, load_config};
use logging::{LoggingError, init_logging};
use shopgen_eval::{EvalError, SummaryMetrics, collect_summary, render_summary, write_summary_json};
use shopgen_generate::output::csv::write_dataset_csv;
use shopgen_generate::output::report::write_generation_report;
use shopgen_generate::{GenerationEngine, GenerationError};
use shopgen_load::{LoadError, Warehouse};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("summary error: {0}")]
    Eval(#[from] EvalError),
}

/// Build the analytics demo database. With no flags this reproduces the
/// default seed-42 dataset at `data/analytics_demo.duckdb`.
#[derive(Parser, Debug)]
#[command(name = "shopgen", version, about = "Generate and load the analytics demo database")]
struct Cli {
    /// DuckDB file to (re)create.
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
    /// Seed for every random stream.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with row counts, date range and output paths.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Also export each table as CSV, plus the generation report, into this directory.
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,
    /// Write the summary metrics as JSON.
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
    /// Append JSON log lines to this file.
    #[arg(long, value_name = "PATH")]
    log_json: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json.as_deref())?;

    let config = resolve_config(cli)?;
    let metrics = run(&config)?;
    println!(
        "{}",
        render_summary(&metrics, &config.db_path.display().to_string())
    );
    Ok(())
}

/// Flags win over the config file, which wins over built-in defaults.
fn resolve_config(cli: Cli) -> Result<ShopgenConfig, CliError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ShopgenConfig::default(),
    };
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(seed) = cli.seed {
        config.generate.seed = seed;
    }
    if cli.csv_dir.is_some() {
        config.csv_dir = cli.csv_dir;
    }
    if cli.summary_json.is_some() {
        config.summary_json = cli.summary_json;
    }
    Ok(config)
}

fn run(config: &ShopgenConfig) -> Result<SummaryMetrics, CliError> {
    let timer = Instant::now();
    tracing::info!(
        event = "run_started",
        seed = config.generate.seed,
        db = %config.db_path.display()
    );

    let engine = GenerationEngine::new(config.generate.clone());
    tracing::info!(
        event = "generation_started",
        customers = engine.options().customers,
        products = engine.options().products,
        orders = engine.options().orders,
        events = engine.options().events
    );
    let result = engine.run()?;
    tracing::info!(
        event = "generation_finished",
        run_id = %result.report.run_id,
        sessions = result.report.sessions,
        duration_ms = result.report.duration_ms
    );

    if let Some(dir) = &config.csv_dir {
        let bytes = write_dataset_csv(dir, &result.dataset)?;
        let report_path = write_generation_report(dir, &result.report)?;
        tracing::info!(
            event = "csv_written",
            dir = %dir.display(),
            bytes = bytes,
            report = %report_path.display()
        );
    }

    let mut warehouse = Warehouse::open(&config.db_path)?;
    tracing::info!(event = "load_started", db = %warehouse.path().display());
    let load = warehouse.load_dataset(&result.dataset)?;
    for table in &load.tables {
        tracing::info!(
            event = "table_loaded",
            table = table.table,
            rows = table.rows,
            duration_ms = table.duration_ms
        );
    }

    let metrics = collect_summary(warehouse.connection())?;
    warehouse.close()?;

    if let Some(path) = &config.summary_json {
        write_summary_json(path, &metrics)?;
        tracing::info!(event = "summary_written", path = %path.display());
    }

    let duration_ms = timer.elapsed().as_millis() as u64;
    tracing::info!(event = "run_finished", status = "success", duration_ms = duration_ms);
    Ok(metrics)
}
