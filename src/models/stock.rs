use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyOpenClose — Polygon /v1/open-close response
// ---------------------------------------------------------------------------

/// A daily OHLCV bar as returned by Polygon's open-close endpoint.
///
/// `after_hours` and `pre_market` are absent for some tickers and dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOpenClose {
    pub status: String,
    /// Trading date (`YYYY-MM-DD`); the wire field is named `from`.
    pub from: String,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub after_hours: Option<f64>,
    pub pre_market: Option<f64>,
}

// ---------------------------------------------------------------------------
// StockDailyPrice — row of the stock_daily_price fact table
// ---------------------------------------------------------------------------

/// One (date, symbol) row of `stock_daily_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockDailyPrice {
    pub date: String,
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub after_hours: Option<f64>,
    pub pre_market: Option<f64>,
    pub status: String,
}

impl From<&DailyOpenClose> for StockDailyPrice {
    fn from(bar: &DailyOpenClose) -> Self {
        Self {
            date: bar.from.clone(),
            symbol: bar.symbol.clone(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            after_hours: bar.after_hours,
            pre_market: bar.pre_market,
            status: bar.status.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// PricePoint — long-format (price_type, price) pair
// ---------------------------------------------------------------------------

/// A single price of a bar in long format, e.g. `("open", 150.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price_type: String,
    pub price: f64,
}
