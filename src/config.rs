use std::path::PathBuf;

pub const POLYGON_BASE: &str = "https://api.polygon.io";
pub const FRANKFURTER_BASE: &str = "https://api.frankfurter.dev/v1";

/// Environment variable holding the Polygon API key (loaded from `.env` by
/// the CLI before anything else).
pub const API_KEY_VAR: &str = "API_KEY";

/// File name of the on-disk warehouse database.
pub const DB_FILE: &str = "warehouse.duckdb";

/// File name of the CSV report written by the CLI.
pub const REPORT_FILE: &str = "stock_currency_report.csv";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("stock-warehouse")
    } else {
        PathBuf::from(".stock-warehouse")
    }
}
