#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::{
        analytics::{SeriesStatistics, calculate_earnings},
        models::{Holding, HoldingClass, Quote},
        report::{display, earnings_rows, export, statistics_report},
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holding(purchase_id: i64, symbol: &str, purchase_price: rust_decimal::Decimal) -> Holding {
        Holding::new(
            1,
            purchase_id,
            symbol.to_string(),
            dec!(10),
            purchase_price,
            dec!(150),
            date(2020, 8, 28),
            None,
        )
    }

    #[test]
    fn rows_preserve_input_order_not_alphabetical() {
        let mut holdings = vec![
            holding(1, "ZM", dec!(100)),
            holding(2, "AIG", dec!(100)),
            holding(3, "MSFT", dec!(100)),
        ];
        calculate_earnings(&mut holdings, date(2024, 8, 28));

        let rows = earnings_rows(&holdings);
        let symbols: Vec<&str> = rows.iter().map(|row| row.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["ZM", "AIG", "MSFT"]);
    }

    #[test]
    fn failed_holdings_are_skipped_without_reordering() {
        let mut holdings = vec![
            holding(1, "ZM", dec!(100)),
            holding(2, "AIG", dec!(0)),
            holding(3, "MSFT", dec!(100)),
        ];
        calculate_earnings(&mut holdings, date(2024, 8, 28));

        let rows = earnings_rows(&holdings);
        let symbols: Vec<&str> = rows.iter().map(|row| row.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["ZM", "MSFT"]);
    }

    #[test]
    fn statistics_report_builds_parallel_ordered_mappings() {
        let results = vec![
            (
                String::from("AIG"),
                SeriesStatistics::new(61.5, 4.2, Some(0.8311)),
            ),
            (String::from("SPY"), SeriesStatistics::new(210.0, 12.5, None)),
            (
                String::from("GOOG"),
                SeriesStatistics::new(540.25, 30.1, Some(0.9005)),
            ),
        ];

        let report = statistics_report(&results);

        let avg_symbols: Vec<&str> = report.averages().iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(avg_symbols, vec!["AIG", "SPY", "GOOG"]);
        assert_eq!(report.std_devs().len(), 3);

        let corr_symbols: Vec<&str> = report
            .correlations()
            .iter()
            .map(|(s, _)| s.as_str())
            .collect();
        assert_eq!(corr_symbols, vec!["AIG", "GOOG"]);
    }

    #[test]
    fn quote_messages_pass_through_display_unchanged() {
        colored::control::set_override(false);
        let quotes = vec![
            (String::from("AIG"), Quote::Price(dec!(77.5))),
            (
                String::from("RDS-A"),
                Quote::Unavailable(String::from(
                    "No data found for RDS-A; symbol may be delisted or changed",
                )),
            ),
        ];

        let output = display::format_quotes(&quotes);
        assert!(output.contains("77.50"));
        assert!(output.contains("No data found for RDS-A; symbol may be delisted or changed"));
    }

    #[test]
    fn earnings_table_shows_symbols_and_metrics() {
        colored::control::set_override(false);
        let mut holdings = vec![holding(1, "AIG", dec!(100))];
        calculate_earnings(&mut holdings, date(2024, 8, 28));
        let rows = earnings_rows(&holdings);

        let output = display::format_earnings_table(HoldingClass::Stock, &rows);
        assert!(output.contains("Stock Holdings"));
        assert!(output.contains("AIG"));
        assert!(output.contains("500.00"));
        assert!(output.contains("12.50"));
    }

    #[test]
    fn statistics_sections_use_the_benchmark_name() {
        colored::control::set_override(false);
        let results = vec![(
            String::from("AIG"),
            SeriesStatistics::new(61.5, 4.2, Some(0.8311)),
        )];
        let report = statistics_report(&results);

        let output = display::format_statistics(&report, "SPY");
        assert!(output.contains("Average Closing Prices"));
        assert!(output.contains("Standard Deviations of Closing Prices"));
        assert!(output.contains("Correlation Coefficients with SPY"));
        assert!(output.contains("61.50"));
        assert!(output.contains("0.8311"));
    }

    #[test]
    fn earnings_csv_round_trips_through_a_file() {
        let mut holdings = vec![holding(1, "AIG", dec!(100)), holding(2, "GOOG", dec!(100))];
        calculate_earnings(&mut holdings, date(2024, 8, 28));
        let rows = earnings_rows(&holdings);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Stocks_Data.csv");
        export::write_earnings_csv(&path, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Symbol,Shares,Earnings/Loss,Yearly Earnings/Loss"
        );
        assert_eq!(lines.next().unwrap(), "AIG,10,500.00,12.50");
        assert_eq!(lines.next().unwrap(), "GOOG,10,500.00,12.50");
    }
}
