use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Currency — row of the currencies dimension
// ---------------------------------------------------------------------------

/// ISO currency code plus human-readable name, e.g. `("EUR", "Euro")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub currency_code: String,
    pub currency_name: String,
}

// ---------------------------------------------------------------------------
// ExchangeRate — one base -> target rate for a date
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency: String,
    pub exchange_rate: f64,
}

// ---------------------------------------------------------------------------
// RatesResponse — Frankfurter /v1/{date} response
// ---------------------------------------------------------------------------

/// Dated exchange rates for a base currency. `rates` excludes the base
/// itself. A `BTreeMap` keeps rate iteration order deterministic.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesResponse {
    pub base: String,
    pub date: String,
    pub rates: BTreeMap<String, f64>,
}

impl RatesResponse {
    pub fn into_rates(self) -> Vec<ExchangeRate> {
        self.rates
            .into_iter()
            .map(|(currency, exchange_rate)| ExchangeRate {
                currency,
                exchange_rate,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// CurrencyConversion — row of the stock_daily_currency fact table
// ---------------------------------------------------------------------------

/// One converted price: a (date, ticker, price_type) point priced in a
/// target currency. `currency_price` is `price * exchange_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    pub date: String,
    pub ticker_symbol: String,
    pub price_type: String,
    pub ticker_currency: String,
    pub price: f64,
    pub target_currency: String,
    pub exchange_rate: f64,
    pub currency_price: f64,
}
