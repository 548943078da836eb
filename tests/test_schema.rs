//! Schema-level constraint tests: NOT NULL, primary key uniqueness, foreign
//! keys, and the restrictive delete default.

mod common;

use stock_warehouse::models::{Account, Portfolio, StockDailyPrice, SubAccount};
use stock_warehouse::Warehouse;

fn sample_price() -> StockDailyPrice {
    StockDailyPrice::from(&common::sample_bar())
}

// ---------------------------------------------------------------------------
// stock_daily_price
// ---------------------------------------------------------------------------

#[test]
fn duplicate_date_symbol_fails() {
    let wh = common::setup_warehouse();

    wh.stocks().insert_daily_price(&sample_price()).unwrap();
    let err = wh.stocks().insert_daily_price(&sample_price());
    assert!(err.is_err(), "duplicate (date, symbol) insert must fail");
}

#[test]
fn same_symbol_different_date_succeeds() {
    let wh = common::setup_warehouse();

    wh.stocks().insert_daily_price(&sample_price()).unwrap();
    let mut next_day = sample_price();
    next_day.date = "2024-10-04".to_string();
    wh.stocks().insert_daily_price(&next_day).unwrap();
}

#[test]
fn after_hours_and_pre_market_are_optional() {
    let wh = common::setup_warehouse();

    let mut row = sample_price();
    row.after_hours = None;
    row.pre_market = None;
    wh.stocks().insert_daily_price(&row).unwrap();

    let stored = wh
        .stocks()
        .daily_price("AAPL", "2024-10-03")
        .unwrap()
        .unwrap();
    assert!(stored.after_hours.is_none());
    assert!(stored.pre_market.is_none());
}

// ---------------------------------------------------------------------------
// stock_daily_currency
// ---------------------------------------------------------------------------

#[test]
fn conversion_with_unresolved_dimensions_fails() {
    let wh = common::setup_warehouse();

    // No dates / tickers / currencies rows exist yet
    let result = wh.connection().raw().execute(
        "INSERT INTO stock_daily_currency \
         (date, ticker_symbol, price_type, ticker_currency, price, \
          target_currency, exchange_rate, currency_price) \
         VALUES (CAST('2024-10-03' AS DATE), 'AAPL', 'open', 'USD', 225.14, 'EUR', 0.9, 202.63)",
        [],
    );
    assert!(result.is_err(), "insert must fail on unresolved foreign keys");
}

#[test]
fn conversion_with_null_ticker_symbol_fails() {
    let wh = common::setup_warehouse();

    wh.stocks().ensure_date("2024-10-03").unwrap();
    wh.stocks().ensure_ticker("AAPL", "USD").unwrap();

    let result = wh.connection().raw().execute(
        "INSERT INTO stock_daily_currency \
         (date, ticker_symbol, price_type, ticker_currency, price, \
          target_currency, exchange_rate, currency_price) \
         VALUES (CAST('2024-10-03' AS DATE), NULL, 'open', 'USD', 225.14, 'USD', 1.0, 225.14)",
        [],
    );
    assert!(result.is_err(), "NULL ticker_symbol must be rejected");
}

#[test]
fn conversion_succeeds_once_dimensions_resolve() {
    let wh = common::setup_warehouse();

    wh.stocks().ensure_date("2024-10-03").unwrap();
    wh.stocks().ensure_ticker("AAPL", "USD").unwrap();

    wh.connection()
        .raw()
        .execute(
            "INSERT INTO stock_daily_currency \
             (date, ticker_symbol, price_type, ticker_currency, price, \
              target_currency, exchange_rate, currency_price) \
             VALUES (CAST('2024-10-03' AS DATE), 'AAPL', 'open', 'USD', 225.14, 'USD', 1.0, 225.14)",
            [],
        )
        .unwrap();

    let rows = wh.stocks().conversions("AAPL", "2024-10-03").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "2024-10-03");
}

// ---------------------------------------------------------------------------
// Marketing hierarchy referential order
// ---------------------------------------------------------------------------

#[test]
fn hierarchy_insert_in_referential_order_succeeds() {
    let wh = common::setup_warehouse();
    let q = wh.campaigns();

    q.insert_account(&Account {
        account_id: 1,
        account_name: "Acme".to_string(),
    })
    .unwrap();
    q.insert_sub_account(&SubAccount {
        sub_account_id: 10,
        sub_account_name: "Acme-US".to_string(),
        account_id: 1,
    })
    .unwrap();
    q.insert_portfolio(&Portfolio {
        portfolio_id: 100,
        portfolio_name: "Search".to_string(),
        sub_account_id: 10,
        account_id: 1,
    })
    .unwrap();
}

#[test]
fn orphan_portfolio_fails() {
    let wh = common::setup_warehouse();
    let q = wh.campaigns();

    q.insert_account(&Account {
        account_id: 1,
        account_name: "Acme".to_string(),
    })
    .unwrap();
    q.insert_sub_account(&SubAccount {
        sub_account_id: 10,
        sub_account_name: "Acme-US".to_string(),
        account_id: 1,
    })
    .unwrap();

    // sub_account_id 99 does not exist
    let result = q.insert_portfolio(&Portfolio {
        portfolio_id: 101,
        portfolio_name: "Orphan".to_string(),
        sub_account_id: 99,
        account_id: 1,
    });
    assert!(result.is_err(), "portfolio with missing sub-account must fail");
}

#[test]
fn ad_with_missing_ad_group_fails() {
    let wh = common::setup_warehouse();
    common::seed_hierarchy(&wh);

    let mut ad = wh.campaigns().ads_in_group(10000).unwrap()[0].clone();
    ad.ad_id = 999999;
    ad.ad_group_id = 55555;
    let result = wh.campaigns().insert_ad(&ad);
    assert!(result.is_err(), "ad with unresolved ad_group_id must fail");
}

#[test]
fn deleting_referenced_account_fails() {
    let wh = common::setup_warehouse();
    common::seed_hierarchy(&wh);

    // No cascade is declared, so the restrictive default applies
    let result = wh
        .connection()
        .raw()
        .execute("DELETE FROM accounts WHERE account_id = 1", []);
    assert!(result.is_err(), "delete of a referenced account must fail");
    assert!(wh.campaigns().account(1).unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Migrations
// ---------------------------------------------------------------------------

#[test]
fn migrations_are_idempotent_across_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let db = tmp.path().join("wh.duckdb");

    {
        let wh = Warehouse::builder().db_path(&db).build().unwrap();
        common::seed_hierarchy(&wh);
    }

    // Reopening re-runs the migration pass over an already-installed schema
    let wh = Warehouse::builder().db_path(&db).build().unwrap();
    assert!(wh.campaigns().account(1).unwrap().is_some());

    let applied = wh
        .connection()
        .execute_scalar("SELECT COUNT(*) FROM migrations", &[])
        .unwrap()
        .unwrap();
    assert_eq!(applied.as_i64().unwrap(), 3);
}
