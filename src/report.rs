//! The stock currency report: wide-to-long price transform, cross join with
//! exchange rates, and CSV export.

use std::path::Path;

use crate::error::Result;
use crate::models::{CurrencyConversion, DailyOpenClose, ExchangeRate, PricePoint};

/// CSV column order, matching the report's downstream consumers.
const CSV_HEADER: [&str; 8] = [
    "date",
    "ticker",
    "price_type",
    "ticker_currency",
    "price",
    "currency",
    "exchange_rate",
    "currency_price",
];

/// Explode a daily bar into long-format `(price_type, price)` points.
///
/// Always yields `open`, `high`, `low`, `close`; `after_hours` and
/// `pre_market` only when the bar carries them.
pub fn price_points(bar: &DailyOpenClose) -> Vec<PricePoint> {
    let mut points = vec![
        point("open", bar.open),
        point("high", bar.high),
        point("low", bar.low),
        point("close", bar.close),
    ];
    if let Some(price) = bar.after_hours {
        points.push(point("after_hours", price));
    }
    if let Some(price) = bar.pre_market {
        points.push(point("pre_market", price));
    }
    points
}

fn point(price_type: &str, price: f64) -> PricePoint {
    PricePoint {
        price_type: price_type.to_string(),
        price,
    }
}

/// Cross-join a bar's price points with exchange rates.
///
/// Every price point is priced in every target currency, with
/// `currency_price = price * exchange_rate`. `ticker_currency` is
/// upper-cased (Polygon reports it lowercase).
pub fn build_report(
    bar: &DailyOpenClose,
    ticker_currency: &str,
    rates: &[ExchangeRate],
) -> Vec<CurrencyConversion> {
    let ticker_currency = ticker_currency.to_uppercase();
    let points = price_points(bar);

    let mut rows = Vec::with_capacity(points.len() * rates.len());
    for p in &points {
        for rate in rates {
            rows.push(CurrencyConversion {
                date: bar.from.clone(),
                ticker_symbol: bar.symbol.clone(),
                price_type: p.price_type.clone(),
                ticker_currency: ticker_currency.clone(),
                price: p.price,
                target_currency: rate.currency.clone(),
                exchange_rate: rate.exchange_rate,
                currency_price: p.price * rate.exchange_rate,
            });
        }
    }

    tracing::info!(
        "built report for {} on {}: {} rows ({} price types x {} currencies)",
        bar.symbol,
        bar.from,
        rows.len(),
        points.len(),
        rates.len()
    );
    rows
}

/// Write conversion rows to a CSV file at `path`.
pub fn write_csv<P: AsRef<Path>>(rows: &[CurrencyConversion], path: P) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record(CSV_HEADER)?;

    for row in rows {
        let price = row.price.to_string();
        let exchange_rate = row.exchange_rate.to_string();
        let currency_price = row.currency_price.to_string();
        wtr.write_record([
            row.date.as_str(),
            row.ticker_symbol.as_str(),
            row.price_type.as_str(),
            row.ticker_currency.as_str(),
            price.as_str(),
            row.target_currency.as_str(),
            exchange_rate.as_str(),
            currency_price.as_str(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!("report saved to {}", path.as_ref().display());
    Ok(())
}
