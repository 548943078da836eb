//! Inserts and lookups for the `currencies` dimension.

use duckdb::params;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::Currency;

/// Query interface for the `currencies` dimension table.
pub struct CurrencyQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CurrencyQuery<'a> {
    /// Create a new `CurrencyQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one currency. Fails if the code already exists.
    pub fn insert(&self, currency: &Currency) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO currencies (currency_code, currency_name) VALUES (?, ?)",
            params![currency.currency_code, currency.currency_name],
        )?;
        Ok(())
    }

    /// Upsert a batch of currencies, e.g. the full Frankfurter list.
    ///
    /// Existing codes get their display name refreshed, so a code seeded as
    /// its own name by the report pipeline is upgraded once the real list
    /// arrives.
    pub fn insert_all(&self, currencies: &[Currency]) -> Result<usize> {
        let mut stmt = self.conn.raw().prepare(
            "INSERT INTO currencies (currency_code, currency_name) VALUES (?, ?) \
             ON CONFLICT (currency_code) DO UPDATE SET currency_name = excluded.currency_name",
        )?;
        for currency in currencies {
            stmt.execute(params![currency.currency_code, currency.currency_name])?;
        }
        Ok(currencies.len())
    }

    /// Look up a currency by code.
    pub fn get(&self, code: &str) -> Result<Option<Currency>> {
        let rows: Vec<Currency> = self.conn.execute_into(
            "SELECT currency_code, currency_name FROM currencies WHERE currency_code = ?",
            &[code.to_string()],
        )?;
        Ok(rows.into_iter().next())
    }

    /// List all currencies, ordered by code.
    pub fn all(&self) -> Result<Vec<Currency>> {
        self.conn.execute_into(
            "SELECT currency_code, currency_name FROM currencies ORDER BY currency_code",
            &[],
        )
    }
}
