use colored::Colorize;
use rust_decimal::Decimal;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Style, object::Columns},
};

use super::assembler::{EarningsRow, StatisticsReport};
use crate::models::{HoldingClass, Quote};

#[derive(Tabled)]
struct EarningsDisplayRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Earnings/Loss")]
    earnings_or_loss: String,
    #[tabled(rename = "Yearly Earnings Rate")]
    yearly_earnings_rate: String,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Latest Price")]
    latest: String,
}

pub fn format_earnings_table(class: HoldingClass, rows: &[EarningsRow]) -> String {
    let mut output = format!("{}\n\n", format!("{} Holdings", class).bold());

    if rows.is_empty() {
        output.push_str("No holdings to display.\n");
        return output;
    }

    let display_rows: Vec<EarningsDisplayRow> = rows
        .iter()
        .map(|row| EarningsDisplayRow {
            symbol: row.symbol().clone(),
            shares: format!("{:.2}", row.shares()),
            earnings_or_loss: gain_loss(row.earnings_or_loss()),
            yearly_earnings_rate: gain_loss(row.yearly_earnings_rate()),
        })
        .collect();

    output.push_str(&render(&display_rows));
    output.push('\n');
    output
}

pub fn format_statistics(report: &StatisticsReport, benchmark: &str) -> String {
    let mut output = metric_section("Average Closing Prices", report.averages(), 2);
    output.push('\n');
    output.push_str(&metric_section(
        "Standard Deviations of Closing Prices",
        report.std_devs(),
        2,
    ));
    output.push('\n');
    output.push_str(&metric_section(
        &format!("Correlation Coefficients with {}", benchmark),
        report.correlations(),
        4,
    ));
    output
}

pub fn format_quotes(quotes: &[(String, Quote)]) -> String {
    let mut output = format!("{}\n\n", "Most Recent Price Quotes".bold());

    if quotes.is_empty() {
        output.push_str("No quotes to display.\n");
        return output;
    }

    let rows: Vec<QuoteRow> = quotes
        .iter()
        .map(|(ticker, quote)| QuoteRow {
            ticker: ticker.clone(),
            latest: quote.to_string(),
        })
        .collect();

    output.push_str(&render(&rows));
    output.push('\n');
    output
}

fn metric_section(title: &str, entries: &[(String, f64)], precision: usize) -> String {
    let mut output = format!("{}\n\n", title.bold());

    if entries.is_empty() {
        output.push_str("No values to display.\n");
        return output;
    }

    let rows: Vec<MetricRow> = entries
        .iter()
        .map(|(symbol, value)| MetricRow {
            symbol: symbol.clone(),
            value: format!("{:.*}", precision, value),
        })
        .collect();

    output.push_str(&render(&rows));
    output.push('\n');
    output
}

fn render<R: Tabled>(rows: &[R]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

fn gain_loss(value: &Decimal) -> String {
    let text = format!("{:.2}", value);
    if *value >= Decimal::ZERO {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
