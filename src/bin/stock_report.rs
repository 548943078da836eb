//! `stock-report` — fetch a ticker's daily prices, convert them into target
//! currencies, store the facts in the warehouse, and write a CSV report.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stock_warehouse::models::StockDailyPrice;
use stock_warehouse::{config, report, FrankfurterClient, PolygonClient, Warehouse};

#[derive(Parser)]
#[command(name = "stock-report")]
#[command(author, version, about = "Fetch stock data and currency exchange rates")]
struct Cli {
    /// Stock ticker symbol (e.g., AAPL)
    #[arg(short, long)]
    ticker: String,

    /// Date for fetching stock data (format: YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Comma-separated target currencies (e.g., EUR,GBP); all available if omitted
    #[arg(short, long)]
    symbols: Option<String>,

    /// Directory for the CSV report (defaults to the system temp directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Warehouse database file (in-memory if omitted)
    #[arg(long)]
    db: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

fn main() -> Result<()> {
    // Load .env before reading the API key; a missing file is fine
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_warehouse=info,stock_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let date = NaiveDate::parse_from_str(&cli.date, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", cli.date))?
        .format("%Y-%m-%d")
        .to_string();

    let symbols: Vec<String> = cli
        .symbols
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();

    let timeout = Duration::from_secs(cli.timeout);
    let polygon = PolygonClient::from_env(timeout)?;
    let frankfurter = FrankfurterClient::new(timeout)?;

    let mut builder = Warehouse::builder();
    builder = match cli.db {
        Some(path) => builder.db_path(path),
        None => builder.in_memory(),
    };
    let warehouse = builder.build()?;
    tracing::info!("opened {}", warehouse);

    // Step 1: daily bar
    let bar = polygon.daily_open_close(&cli.ticker, &date, true)?;

    // Step 2: currency the ticker trades in
    let ticker_currency = polygon.ticker_currency(&cli.ticker)?;
    tracing::info!("stock is traded in {}", ticker_currency);

    // Step 3: currency dimension
    match frankfurter.currencies() {
        Ok(currencies) => {
            warehouse.currencies().insert_all(&currencies)?;
        }
        Err(e) => tracing::warn!("could not retrieve available currencies: {}", e),
    }

    // Step 4: exchange rates for the requested targets
    let rates = frankfurter.rates(&ticker_currency, &date, &symbols)?;

    // Step 5: build, persist, and export the report
    let rows = report::build_report(&bar, &ticker_currency, &rates);
    warehouse
        .stocks()
        .insert_daily_price(&StockDailyPrice::from(&bar))?;
    warehouse.stocks().persist_report(&rows)?;

    let out_dir = cli.output_dir.unwrap_or_else(std::env::temp_dir);
    let out_path = out_dir.join(config::REPORT_FILE);
    report::write_csv(&rows, &out_path)?;

    println!("Stock currency report saved to {}", out_path.display());
    Ok(())
}
