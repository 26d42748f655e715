//! Presenter: row layout and the sheet overwrite
//!
//! `build_rows` is the deterministic half of the contract and the part
//! under test; `render` adds the timestamp and performs the destructive
//! overwrite (one clear, then one append per row, in order).

use chrono::{DateTime, Local};
use serde_json::json;

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::RenderError;
use crate::sheet::SheetWriter;
use crate::types::{MarketEntry, Row, Summary};

/// Column headers for the listing block
const HEADERS: [&str; 6] = [
    "Cryptocurrency Name",
    "Symbol",
    "Current Price (USD)",
    "Market Capitalization",
    "24h Trading Volume",
    "Price Change (24h)",
];

/// Builds the full set of rows for one tick.
///
/// Layout, in order: the timestamp row, a spacer, the header row, one
/// row per listing entry in listing order, a spacer, and the four
/// analysis rows. Always `7 + listing.len()` rows. Monetary cells are
/// formatted strings; percent-change cells stay raw numbers so the sheet
/// keeps them sortable.
pub fn build_rows(listing: &[MarketEntry], summary: &Summary, timestamp: DateTime<Local>) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::with_capacity(listing.len() + 7);

    rows.push(vec![
        json!("Last Updated"),
        json!(timestamp.format(TIMESTAMP_FORMAT).to_string()),
    ]);
    rows.push(Vec::new());
    rows.push(HEADERS.iter().map(|h| json!(h)).collect());

    for entry in listing {
        rows.push(vec![
            json!(entry.name),
            json!(entry.symbol),
            json!(format_usd(entry.price)),
            json!(format_usd(entry.market_cap)),
            json!(format_usd(entry.volume_24h)),
            json!(entry.percent_change_24h),
        ]);
    }

    rows.push(Vec::new());
    rows.push(vec![json!("Data Analysis")]);

    // Names in descending-market-cap order, as ranked by the analyzer.
    let top_names = summary
        .top_by_market_cap
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    rows.push(vec![
        json!("Top 5 Cryptocurrencies by Market Cap"),
        json!(top_names),
    ]);

    rows.push(vec![
        json!("Average Price of Top 50 Cryptocurrencies (USD)"),
        json!(format_usd(summary.average_price)),
    ]);

    rows.push(vec![
        json!("Highest 24h Price Change"),
        json!(summary.highest_change.name),
        json!(summary.highest_change.percent_change_24h),
    ]);

    rows.push(vec![
        json!("Lowest 24h Price Change"),
        json!(summary.lowest_change.name),
        json!(summary.lowest_change.percent_change_24h),
    ]);

    rows
}

/// Replaces the whole tab with this tick's rows.
///
/// Destructive: any prior content is gone after the `clear`. A failure
/// partway through leaves a partial tab until the next successful tick
/// overwrites it.
pub async fn render(
    sheet: &dyn SheetWriter,
    listing: &[MarketEntry],
    summary: &Summary,
) -> Result<(), RenderError> {
    let rows = build_rows(listing, summary, Local::now());

    sheet.clear().await?;
    for row in &rows {
        sheet.append_row(row).await?;
    }

    tracing::info!(rows = rows.len(), "Sheet updated");
    Ok(())
}

/// Formats a USD amount with thousands separators and two decimals,
/// e.g. `1234567.891` → `"1,234,567.89"`.
pub fn format_usd(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().rev().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, int_grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::analyzer::analyze;

    fn sample_listing() -> Vec<MarketEntry> {
        vec![
            MarketEntry {
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                price: 62000.5,
                market_cap: 1_220_000_000_000.0,
                volume_24h: 35_000_000_000.0,
                percent_change_24h: -1.25,
            },
            MarketEntry {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                price: 3000.75,
                market_cap: 360_000_000_000.0,
                volume_24h: 15_000_000_000.0,
                percent_change_24h: 2.4,
            },
            MarketEntry {
                name: "Solana".to_string(),
                symbol: "SOL".to_string(),
                price: 150.0,
                market_cap: 70_000_000_000.0,
                volume_24h: 3_000_000_000.0,
                percent_change_24h: 5.1,
            },
        ]
    }

    fn fixed_timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn row_count_is_seven_plus_listing_length() {
        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let rows = build_rows(&listing, &summary, fixed_timestamp());
        assert_eq!(rows.len(), 7 + listing.len());
    }

    #[test]
    fn header_row_sits_at_fixed_index() {
        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let rows = build_rows(&listing, &summary, fixed_timestamp());

        assert_eq!(rows[0][0], json!("Last Updated"));
        assert_eq!(rows[0][1], json!("2024-05-01 12:30:45"));
        assert!(rows[1].is_empty());
        let header: Vec<_> = HEADERS.iter().map(|h| json!(h)).collect();
        assert_eq!(rows[2], header);
    }

    #[test]
    fn listing_rows_keep_listing_order_and_raw_percent() {
        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let rows = build_rows(&listing, &summary, fixed_timestamp());

        assert_eq!(rows[3][0], json!("Bitcoin"));
        assert_eq!(rows[3][2], json!("62,000.50"));
        assert_eq!(rows[3][3], json!("1,220,000,000,000.00"));
        // Raw number, not a formatted string
        assert_eq!(rows[3][5], json!(-1.25));
        assert_eq!(rows[4][0], json!("Ethereum"));
        assert_eq!(rows[5][0], json!("Solana"));
    }

    #[test]
    fn analysis_block_follows_the_listing() {
        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let rows = build_rows(&listing, &summary, fixed_timestamp());
        let base = 3 + listing.len();

        assert!(rows[base].is_empty());
        assert_eq!(rows[base + 1], vec![json!("Data Analysis")]);
        assert_eq!(rows[base + 2][0], json!("Top 5 Cryptocurrencies by Market Cap"));
        assert_eq!(rows[base + 2][1], json!("Bitcoin, Ethereum, Solana"));
        assert_eq!(
            rows[base + 3][0],
            json!("Average Price of Top 50 Cryptocurrencies (USD)")
        );
        assert_eq!(rows[base + 4][0], json!("Highest 24h Price Change"));
        assert_eq!(rows[base + 4][1], json!("Solana"));
        assert_eq!(rows[base + 4][2], json!(5.1));
        assert_eq!(rows[base + 5][0], json!("Lowest 24h Price Change"));
        assert_eq!(rows[base + 5][1], json!("Bitcoin"));
        assert_eq!(rows[base + 5][2], json!(-1.25));
    }

    #[test]
    fn rebuilding_differs_only_in_the_timestamp_cell() {
        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let first = build_rows(&listing, &summary, fixed_timestamp());
        let second = build_rows(
            &listing,
            &summary,
            Local.with_ymd_and_hms(2024, 5, 1, 12, 35, 45).unwrap(),
        );

        assert_ne!(first[0][1], second[0][1]);
        assert_eq!(first[0][0], second[0][0]);
        assert_eq!(first[1..], second[1..]);
    }

    #[test]
    fn formats_usd_with_groups_and_two_decimals() {
        assert_eq!(format_usd(0.0), "0.00");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(1234.5), "1,234.50");
        assert_eq!(format_usd(1_234_567.891), "1,234,567.89");
        assert_eq!(format_usd(0.005), "0.01");
        assert_eq!(format_usd(-42_000.129), "-42,000.13");
    }

    #[tokio::test]
    async fn render_clears_then_appends_every_row() {
        use crate::sheet::mock::{MockSheet, SheetCall};

        let listing = sample_listing();
        let summary = analyze(&listing).unwrap();
        let sheet = MockSheet::new();

        render(&sheet, &listing, &summary).await.unwrap();

        let calls = sheet.calls();
        assert_eq!(calls.len(), 1 + 7 + listing.len());
        assert_eq!(calls[0], SheetCall::Clear);
        assert!(calls[1..]
            .iter()
            .all(|c| matches!(c, SheetCall::AppendRow(_))));
        assert_eq!(sheet.rows().len(), 7 + listing.len());
    }
}
