use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use portfolio_analytics::{
    analytics::{calculate_earnings, calculate_statistics},
    models::HoldingClass,
    report::{display, earnings_rows, export, statistics_report},
    sources::{holdings, prices, quotes},
};

#[derive(Parser)]
#[command(
    name = "portfolio-analytics",
    about = "Earnings and time-series analytics for mixed stock/bond portfolios"
)]
struct Cli {
    /// CSV file of holdings
    #[arg(long)]
    holdings: PathBuf,

    /// Directory of per-symbol price history CSV files
    #[arg(long)]
    prices: PathBuf,

    /// Symbols to analyze (defaults to every CSV file in the prices directory)
    #[arg(long, value_delimiter = ',')]
    symbols: Option<Vec<String>>,

    /// Benchmark symbol for correlation coefficients
    #[arg(long, default_value = "SPY")]
    benchmark: String,

    /// JSON file of latest quotes (ticker -> price or message)
    #[arg(long)]
    quotes: Option<PathBuf>,

    /// Evaluation date for annualized rates (defaults to today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Directory to write Stocks_Data.csv and Bonds_Data.csv into
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let evaluation_date = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let mut all_holdings = holdings::load_holdings(&cli.holdings)?;
    for (id, err) in calculate_earnings(&mut all_holdings, evaluation_date) {
        warn!(holding = %id, "earnings not computed: {err}");
    }

    let stock_rows = earnings_rows(
        all_holdings
            .iter()
            .filter(|h| h.class() == HoldingClass::Stock),
    );
    let bond_rows = earnings_rows(
        all_holdings
            .iter()
            .filter(|h| h.class() == HoldingClass::Bond),
    );

    println!("{}", display::format_earnings_table(HoldingClass::Stock, &stock_rows));
    println!("{}", display::format_earnings_table(HoldingClass::Bond, &bond_rows));

    let symbols = match cli.symbols {
        Some(symbols) => symbols,
        None => prices::discover_symbols(&cli.prices)?,
    };
    let store = prices::load_price_store(&cli.prices, &symbols)?;

    let outcome = calculate_statistics(&store, &cli.benchmark);
    for (symbol, err) in outcome.failures() {
        warn!(symbol = %symbol, "statistics not computed: {err}");
    }
    let report = statistics_report(outcome.results());
    println!("{}", display::format_statistics(&report, &cli.benchmark));

    if let Some(path) = cli.quotes {
        let quote_list = quotes::load_quotes(&path)?;
        println!("{}", display::format_quotes(&quote_list));
    }

    if let Some(dir) = cli.export {
        export::write_earnings_csv(&dir.join("Stocks_Data.csv"), &stock_rows)?;
        export::write_earnings_csv(&dir.join("Bonds_Data.csv"), &bond_rows)?;
        println!("Earnings tables written to {}", dir.display());
    }

    Ok(())
}
