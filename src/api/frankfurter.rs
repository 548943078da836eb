//! Frankfurter REST client: dated exchange rates and the currency list.

use crate::api::polygon::api_error;
use crate::config;
use crate::error::Result;
use crate::models::{Currency, ExchangeRate, RatesResponse};
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// Blocking client for the Frankfurter exchange-rate API. No key required.
pub struct FrankfurterClient {
    client: Client,
    base: String,
}

impl FrankfurterClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base: config::FRANKFURTER_BASE.to_string(),
        })
    }

    /// Override the base URL (used by tests to point at a local server).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Fetch exchange rates from `base_currency` on a date (`YYYY-MM-DD`).
    ///
    /// An empty `symbols` slice fetches all available target currencies.
    pub fn rates(
        &self,
        base_currency: &str,
        date: &str,
        symbols: &[String],
    ) -> Result<Vec<ExchangeRate>> {
        let url = if symbols.is_empty() {
            format!("{}/{}?base={}", self.base, date, base_currency)
        } else {
            format!(
                "{}/{}?base={}&symbols={}",
                self.base,
                date,
                base_currency,
                symbols.join(",")
            )
        };
        tracing::info!("fetching exchange rates for {} on {}", base_currency, date);

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(api_error(resp));
        }

        let data: RatesResponse = resp.json()?;
        Ok(data.into_rates())
    }

    /// Fetch the code -> name map of all available currencies.
    pub fn currencies(&self) -> Result<Vec<Currency>> {
        let url = format!("{}/currencies", self.base);

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(api_error(resp));
        }

        let data: BTreeMap<String, String> = resp.json()?;
        Ok(data
            .into_iter()
            .map(|(currency_code, currency_name)| Currency {
                currency_code,
                currency_name,
            })
            .collect())
    }
}
