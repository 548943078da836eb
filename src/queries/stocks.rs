//! Inserts and lookups for the stock fact tables.

use duckdb::params;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{CurrencyConversion, StockDailyPrice};

// ---------------------------------------------------------------------------
// StockQuery
// ---------------------------------------------------------------------------

/// Query interface for `stock_daily_price` and `stock_daily_currency`.
pub struct StockQuery<'a> {
    conn: &'a Connection,
}

impl<'a> StockQuery<'a> {
    /// Create a new `StockQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one daily OHLCV bar.
    ///
    /// Fails with a uniqueness violation if a row for the same
    /// `(date, symbol)` already exists.
    pub fn insert_daily_price(&self, row: &StockDailyPrice) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO stock_daily_price \
             (date, symbol, open, high, low, close, volume, after_hours, pre_market, status) \
             VALUES (CAST(? AS DATE), ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                row.date,
                row.symbol,
                row.open,
                row.high,
                row.low,
                row.close,
                row.volume,
                row.after_hours,
                row.pre_market,
                row.status,
            ],
        )?;
        Ok(())
    }

    /// Fetch the bar for a `(symbol, date)` pair, if stored.
    pub fn daily_price(&self, symbol: &str, date: &str) -> Result<Option<StockDailyPrice>> {
        let rows: Vec<StockDailyPrice> = self.conn.execute_into(
            "SELECT * FROM stock_daily_price WHERE symbol = ? AND date = CAST(? AS DATE)",
            &[symbol.to_string(), date.to_string()],
        )?;
        Ok(rows.into_iter().next())
    }

    /// Insert one price-conversion fact.
    ///
    /// The row's foreign keys (`date`, `ticker_symbol`, `ticker_currency`,
    /// `target_currency`) must already resolve to dimension rows; use
    /// [`persist_report`](Self::persist_report) to seed them first.
    pub fn insert_conversion(&self, row: &CurrencyConversion) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO stock_daily_currency \
             (date, ticker_symbol, price_type, ticker_currency, price, \
              target_currency, exchange_rate, currency_price) \
             VALUES (CAST(? AS DATE), ?, ?, ?, ?, ?, ?, ?)",
            params![
                row.date,
                row.ticker_symbol,
                row.price_type,
                row.ticker_currency,
                row.price,
                row.target_currency,
                row.exchange_rate,
                row.currency_price,
            ],
        )?;
        Ok(())
    }

    /// Persist a full report: seed the referenced dimension rows, then insert
    /// every conversion fact. Returns the number of facts inserted.
    ///
    /// Dimension seeding is idempotent (`ON CONFLICT DO NOTHING`), so a
    /// currency already registered with a proper display name keeps it.
    pub fn persist_report(&self, rows: &[CurrencyConversion]) -> Result<usize> {
        for row in rows {
            self.ensure_date(&row.date)?;
            self.ensure_ticker(&row.ticker_symbol, &row.ticker_currency)?;
            self.ensure_currency_code(&row.ticker_currency)?;
            self.ensure_currency_code(&row.target_currency)?;
        }
        for row in rows {
            self.insert_conversion(row)?;
        }
        tracing::info!("persisted {} conversion rows", rows.len());
        Ok(rows.len())
    }

    /// Fetch all conversion facts for a `(ticker, date)` pair, ordered by
    /// target currency then price type.
    pub fn conversions(&self, ticker: &str, date: &str) -> Result<Vec<CurrencyConversion>> {
        self.conn.execute_into(
            "SELECT * FROM stock_daily_currency \
             WHERE ticker_symbol = ? AND date = CAST(? AS DATE) \
             ORDER BY target_currency, price_type",
            &[ticker.to_string(), date.to_string()],
        )
    }

    /// Register a date in the `dates` dimension (no-op if present).
    pub fn ensure_date(&self, date: &str) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO dates (date) VALUES (CAST(? AS DATE)) ON CONFLICT DO NOTHING",
            params![date],
        )?;
        Ok(())
    }

    /// Register a ticker in the `tickers` dimension (no-op if present).
    pub fn ensure_ticker(&self, symbol: &str, currency: &str) -> Result<()> {
        self.ensure_currency_code(currency)?;
        self.conn.raw().execute(
            "INSERT INTO tickers (ticker_symbol, ticker_currency) VALUES (?, ?) \
             ON CONFLICT DO NOTHING",
            params![symbol, currency],
        )?;
        Ok(())
    }

    // Currency codes can show up in facts before the Frankfurter currency
    // list is loaded; fall back to the code as its own display name.
    fn ensure_currency_code(&self, code: &str) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO currencies (currency_code, currency_name) VALUES (?, ?) \
             ON CONFLICT DO NOTHING",
            params![code, code],
        )?;
        Ok(())
    }
}
