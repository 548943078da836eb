//! Polygon REST client: daily open-close bars and ticker reference data.

use crate::config;
use crate::error::{Result, WarehouseError};
use crate::models::DailyOpenClose;
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for the two Polygon endpoints the warehouse ingests from.
///
/// Requires an API key; use [`PolygonClient::from_env`] to read it from the
/// `API_KEY` environment variable.
pub struct PolygonClient {
    client: Client,
    base: String,
    api_key: String,
}

impl PolygonClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base: config::POLYGON_BASE.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a client with the API key from the environment.
    pub fn from_env(timeout: Duration) -> Result<Self> {
        let key = std::env::var(config::API_KEY_VAR)
            .map_err(|_| WarehouseError::MissingApiKey(config::API_KEY_VAR))?;
        Self::new(key, timeout)
    }

    /// Override the base URL (used by tests to point at a local server).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Fetch the daily OHLCV bar for a ticker on a date (`YYYY-MM-DD`).
    ///
    /// Returns `NotFound` when the response carries no `open`/`close`, which
    /// is how Polygon reports a non-trading date.
    pub fn daily_open_close(
        &self,
        ticker: &str,
        date: &str,
        adjusted: bool,
    ) -> Result<DailyOpenClose> {
        let url = format!(
            "{}/v1/open-close/{}/{}?adjusted={}&apiKey={}",
            self.base, ticker, date, adjusted, self.api_key
        );
        tracing::info!("fetching stock data for {} on {}", ticker, date);

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(api_error(resp));
        }

        let data: serde_json::Value = resp.json()?;
        if data.get("open").is_none() || data.get("close").is_none() {
            tracing::warn!("no trading data for {} on {}: {}", ticker, date, data);
            return Err(WarehouseError::NotFound(format!(
                "no trading data available for {} on {}",
                ticker, date
            )));
        }

        Ok(serde_json::from_value(data)?)
    }

    /// Fetch the currency a ticker trades in (e.g. `"USD"`), upper-cased.
    pub fn ticker_currency(&self, ticker: &str) -> Result<String> {
        let url = format!(
            "{}/v3/reference/tickers/{}?apiKey={}",
            self.base, ticker, self.api_key
        );

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(api_error(resp));
        }

        let data: serde_json::Value = resp.json()?;
        let currency = data
            .get("results")
            .and_then(|r| r.get("currency_name"))
            .and_then(|c| c.as_str())
            .map(|c| c.to_uppercase());

        match currency {
            Some(c) => {
                tracing::info!("currency for ticker {}: {}", ticker, c);
                Ok(c)
            }
            None => Err(WarehouseError::NotFound(format!(
                "currency information for {} not found",
                ticker
            ))),
        }
    }
}

pub(crate) fn api_error(resp: reqwest::blocking::Response) -> WarehouseError {
    let status = resp.status().as_u16();
    let message = resp.text().unwrap_or_default();
    tracing::error!("API request failed ({}): {}", status, message);
    WarehouseError::Api { status, message }
}
