//! Stock/currency warehouse SDK.
//!
//! Two independent data models live in one embedded DuckDB database: a
//! stock/currency warehouse (daily OHLCV bars plus currency-converted price
//! facts and their dimensions) and a marketing campaign hierarchy (accounts
//! down to ads). Ingestion clients pull daily bars from Polygon and exchange
//! rates from Frankfurter; the report module turns one bar into a
//! per-currency price report and exports it as CSV.
//!
//! # Quick start
//!
//! ```no_run
//! use stock_warehouse::Warehouse;
//! use stock_warehouse::models::Currency;
//!
//! let wh = Warehouse::builder().in_memory().build().unwrap();
//!
//! wh.currencies()
//!     .insert(&Currency {
//!         currency_code: "EUR".into(),
//!         currency_name: "Euro".into(),
//!     })
//!     .unwrap();
//!
//! let all = wh.currencies().all().unwrap();
//! assert_eq!(all.len(), 1);
//! ```

pub mod api;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod report;
pub mod schema;

pub use api::{FrankfurterClient, PolygonClient};
pub use connection::Connection;
pub use error::{Result, WarehouseError};

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// WarehouseBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Warehouse`] instance.
///
/// Use [`Warehouse::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](WarehouseBuilder::build) to open the
/// database and install the schema.
#[derive(Default)]
pub struct WarehouseBuilder {
    db_path: Option<PathBuf>,
    in_memory: bool,
}

impl WarehouseBuilder {
    /// Set a custom database file path.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/stock-warehouse/warehouse.duckdb` on Linux).
    pub fn db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory database instead of an on-disk file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Open the database, run migrations, and return the warehouse.
    pub fn build(self) -> Result<Warehouse> {
        if self.in_memory {
            let conn = Connection::open_in_memory()?;
            return Ok(Warehouse { conn, db_path: None });
        }

        let path = match self.db_path {
            Some(p) => p,
            None => config::default_data_dir().join(config::DB_FILE),
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        Ok(Warehouse {
            conn,
            db_path: Some(path),
        })
    }
}

// ---------------------------------------------------------------------------
// Warehouse
// ---------------------------------------------------------------------------

/// The main entry point for the warehouse SDK.
///
/// Wraps a [`Connection`] (an embedded DuckDB database with the schema
/// installed) and exposes domain-specific query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`Warehouse::builder()`].
pub struct Warehouse {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl Warehouse {
    /// Create a new builder for configuring the warehouse.
    pub fn builder() -> WarehouseBuilder {
        WarehouseBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the stock fact-table query interface.
    pub fn stocks(&self) -> queries::StockQuery<'_> {
        queries::StockQuery::new(&self.conn)
    }

    /// Access the currency dimension query interface.
    pub fn currencies(&self) -> queries::CurrencyQuery<'_> {
        queries::CurrencyQuery::new(&self.conn)
    }

    /// Access the marketing hierarchy query interface.
    pub fn campaigns(&self) -> queries::CampaignQuery<'_> {
        queries::CampaignQuery::new(&self.conn)
    }

    // -- Utility methods ---------------------------------------------------

    /// Execute a raw SQL query against the database.
    ///
    /// Provides escape-hatch access for queries not covered by the
    /// domain-specific interfaces.
    ///
    /// # Arguments
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    ///
    /// # Returns
    ///
    /// A vector of rows, each represented as a `HashMap<String, serde_json::Value>`.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.db_path {
            Some(path) => write!(f, "Warehouse(db={})", path.display()),
            None => write!(f, "Warehouse(db=:memory:)"),
        }
    }
}
