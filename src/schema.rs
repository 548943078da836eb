//! Warehouse table definitions and the migrations runner.
//!
//! Two independent data models share one database:
//! - the stock/currency warehouse (daily OHLCV bars, currency-converted
//!   price facts, and the dimensions they reference), and
//! - the marketing hierarchy (accounts down to ads, where only `ads`
//!   carries measures).
//!
//! Constraint enforcement is left entirely to DuckDB: NOT NULL, primary key
//! uniqueness, and foreign keys surface as insert failures. No cascade is
//! declared anywhere, so deleting a still-referenced parent row fails.

use crate::error::Result;
use duckdb::Connection;

/// Apply all pending migrations to the given connection.
///
/// Applied migration names are tracked in a `migrations` table so re-opening
/// an on-disk warehouse is idempotent.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS migrations (
            name VARCHAR PRIMARY KEY,
            applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    )?;

    run_migration(conn, "001_stock_dimensions", CREATE_STOCK_DIMENSIONS)?;
    run_migration(conn, "002_stock_facts", CREATE_STOCK_FACTS)?;
    run_migration(conn, "003_marketing_hierarchy", CREATE_MARKETING_HIERARCHY)?;

    tracing::debug!("warehouse migrations completed");
    Ok(())
}

fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM migrations WHERE name = ?",
        [name],
        |row| row.get(0),
    )?;

    if !exists {
        tracing::debug!("running migration: {}", name);
        conn.execute_batch(sql)?;
        conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    }

    Ok(())
}

/// Dimensions referenced by the conversion fact table. `dates` and `tickers`
/// are deliberately minimal; `currencies` maps ISO codes to display names.
const CREATE_STOCK_DIMENSIONS: &str = r#"
CREATE TABLE IF NOT EXISTS currencies (
    currency_code VARCHAR PRIMARY KEY,
    currency_name VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS dates (
    date DATE PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS tickers (
    ticker_symbol VARCHAR PRIMARY KEY,
    ticker_name VARCHAR,
    ticker_currency VARCHAR REFERENCES currencies(currency_code)
);
"#;

/// Fact tables of the stock/currency warehouse.
///
/// `stock_daily_currency` holds one row per (date, ticker, price_type,
/// target_currency) conversion. `currency_price` is expected to equal
/// `price * exchange_rate`; that relationship is maintained by the report
/// pipeline, not by a CHECK constraint.
const CREATE_STOCK_FACTS: &str = r#"
CREATE TABLE IF NOT EXISTS stock_daily_price (
    date DATE NOT NULL,
    symbol VARCHAR NOT NULL,
    open DOUBLE NOT NULL,
    high DOUBLE NOT NULL,
    low DOUBLE NOT NULL,
    close DOUBLE NOT NULL,
    volume DOUBLE NOT NULL,
    after_hours DOUBLE,
    pre_market DOUBLE,
    status VARCHAR NOT NULL,
    PRIMARY KEY (date, symbol)
);

CREATE TABLE IF NOT EXISTS stock_daily_currency (
    date DATE NOT NULL REFERENCES dates(date),
    ticker_symbol VARCHAR NOT NULL REFERENCES tickers(ticker_symbol),
    price_type VARCHAR NOT NULL,
    ticker_currency VARCHAR NOT NULL REFERENCES currencies(currency_code),
    price DOUBLE NOT NULL,
    target_currency VARCHAR NOT NULL REFERENCES currencies(currency_code),
    exchange_rate DOUBLE NOT NULL,
    currency_price DOUBLE NOT NULL
);
"#;

/// The marketing rollup tree. Every descendant stores foreign keys to all of
/// its ancestors, not just its immediate parent, so ad metrics aggregate to
/// any level with a single join. Only `ads` carries measures.
const CREATE_MARKETING_HIERARCHY: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    account_id BIGINT PRIMARY KEY,
    account_name VARCHAR NOT NULL
);

CREATE TABLE IF NOT EXISTS sub_accounts (
    sub_account_id BIGINT PRIMARY KEY,
    sub_account_name VARCHAR NOT NULL,
    account_id BIGINT NOT NULL REFERENCES accounts(account_id)
);

CREATE TABLE IF NOT EXISTS portfolios (
    portfolio_id BIGINT PRIMARY KEY,
    portfolio_name VARCHAR NOT NULL,
    sub_account_id BIGINT NOT NULL REFERENCES sub_accounts(sub_account_id),
    account_id BIGINT NOT NULL REFERENCES accounts(account_id)
);

CREATE TABLE IF NOT EXISTS campaigns (
    campaign_id BIGINT PRIMARY KEY,
    campaign_name VARCHAR NOT NULL,
    portfolio_id BIGINT NOT NULL REFERENCES portfolios(portfolio_id),
    sub_account_id BIGINT NOT NULL REFERENCES sub_accounts(sub_account_id),
    account_id BIGINT NOT NULL REFERENCES accounts(account_id)
);

CREATE TABLE IF NOT EXISTS ad_groups (
    ad_group_id BIGINT PRIMARY KEY,
    ad_group_name VARCHAR NOT NULL,
    campaign_id BIGINT NOT NULL REFERENCES campaigns(campaign_id),
    portfolio_id BIGINT NOT NULL REFERENCES portfolios(portfolio_id),
    sub_account_id BIGINT NOT NULL REFERENCES sub_accounts(sub_account_id),
    account_id BIGINT NOT NULL REFERENCES accounts(account_id)
);

CREATE TABLE IF NOT EXISTS ads (
    ad_id BIGINT PRIMARY KEY,
    ad_name VARCHAR NOT NULL,
    ad_group_id BIGINT NOT NULL REFERENCES ad_groups(ad_group_id),
    campaign_id BIGINT NOT NULL REFERENCES campaigns(campaign_id),
    portfolio_id BIGINT NOT NULL REFERENCES portfolios(portfolio_id),
    sub_account_id BIGINT NOT NULL REFERENCES sub_accounts(sub_account_id),
    account_id BIGINT NOT NULL REFERENCES accounts(account_id),
    bid DOUBLE NOT NULL,
    impressions BIGINT NOT NULL,
    clicks BIGINT NOT NULL,
    cost DOUBLE NOT NULL
);
"#;
