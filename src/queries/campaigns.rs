//! Inserts and rollups for the marketing hierarchy.
//!
//! Inserts must follow referential order (account before sub-account, and so
//! on down to ads); DuckDB rejects a row whose ancestor ids do not resolve.
//! The rollup queries lean on the denormalized ancestor keys stored on `ads`:
//! aggregating to any level is a single join, never a walk up the tree.

use duckdb::params;

use crate::connection::Connection;
use crate::error::Result;
use crate::models::{Account, Ad, AdGroup, Campaign, MetricsRollup, Portfolio, SubAccount};

// ---------------------------------------------------------------------------
// CampaignQuery
// ---------------------------------------------------------------------------

/// Query interface for the marketing hierarchy tables.
pub struct CampaignQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CampaignQuery<'a> {
    /// Create a new `CampaignQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // -- Inserts, one per hierarchy level ----------------------------------

    pub fn insert_account(&self, row: &Account) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO accounts (account_id, account_name) VALUES (?, ?)",
            params![row.account_id, row.account_name],
        )?;
        Ok(())
    }

    pub fn insert_sub_account(&self, row: &SubAccount) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO sub_accounts (sub_account_id, sub_account_name, account_id) \
             VALUES (?, ?, ?)",
            params![row.sub_account_id, row.sub_account_name, row.account_id],
        )?;
        Ok(())
    }

    pub fn insert_portfolio(&self, row: &Portfolio) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO portfolios (portfolio_id, portfolio_name, sub_account_id, account_id) \
             VALUES (?, ?, ?, ?)",
            params![
                row.portfolio_id,
                row.portfolio_name,
                row.sub_account_id,
                row.account_id
            ],
        )?;
        Ok(())
    }

    pub fn insert_campaign(&self, row: &Campaign) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO campaigns \
             (campaign_id, campaign_name, portfolio_id, sub_account_id, account_id) \
             VALUES (?, ?, ?, ?, ?)",
            params![
                row.campaign_id,
                row.campaign_name,
                row.portfolio_id,
                row.sub_account_id,
                row.account_id
            ],
        )?;
        Ok(())
    }

    pub fn insert_ad_group(&self, row: &AdGroup) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO ad_groups \
             (ad_group_id, ad_group_name, campaign_id, portfolio_id, sub_account_id, account_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                row.ad_group_id,
                row.ad_group_name,
                row.campaign_id,
                row.portfolio_id,
                row.sub_account_id,
                row.account_id
            ],
        )?;
        Ok(())
    }

    pub fn insert_ad(&self, row: &Ad) -> Result<()> {
        self.conn.raw().execute(
            "INSERT INTO ads \
             (ad_id, ad_name, ad_group_id, campaign_id, portfolio_id, sub_account_id, \
              account_id, bid, impressions, clicks, cost) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                row.ad_id,
                row.ad_name,
                row.ad_group_id,
                row.campaign_id,
                row.portfolio_id,
                row.sub_account_id,
                row.account_id,
                row.bid,
                row.impressions,
                row.clicks,
                row.cost,
            ],
        )?;
        Ok(())
    }

    // -- Lookups -----------------------------------------------------------

    pub fn account(&self, id: i64) -> Result<Option<Account>> {
        let rows: Vec<Account> = self.conn.execute_into(
            "SELECT account_id, account_name FROM accounts WHERE account_id = CAST(? AS BIGINT)",
            &[id.to_string()],
        )?;
        Ok(rows.into_iter().next())
    }

    /// All ads in an ad group, ordered by id.
    pub fn ads_in_group(&self, ad_group_id: i64) -> Result<Vec<Ad>> {
        self.conn.execute_into(
            "SELECT * FROM ads WHERE ad_group_id = CAST(? AS BIGINT) ORDER BY ad_id",
            &[ad_group_id.to_string()],
        )
    }

    // -- Rollups -----------------------------------------------------------

    /// Ad metrics summed per account.
    pub fn metrics_by_account(&self) -> Result<Vec<MetricsRollup>> {
        self.rollup("accounts", "account_id", "account_name")
    }

    /// Ad metrics summed per sub-account.
    pub fn metrics_by_sub_account(&self) -> Result<Vec<MetricsRollup>> {
        self.rollup("sub_accounts", "sub_account_id", "sub_account_name")
    }

    /// Ad metrics summed per campaign.
    pub fn metrics_by_campaign(&self) -> Result<Vec<MetricsRollup>> {
        self.rollup("campaigns", "campaign_id", "campaign_name")
    }

    fn rollup(&self, dim_table: &str, id_col: &str, name_col: &str) -> Result<Vec<MetricsRollup>> {
        // SUM over BIGINT widens to HUGEINT in DuckDB; cast back down.
        let sql = format!(
            "SELECT d.{id} AS group_id, \
                    d.{name} AS group_name, \
                    CAST(COUNT(a.ad_id) AS BIGINT) AS ads, \
                    CAST(COALESCE(SUM(a.impressions), 0) AS BIGINT) AS impressions, \
                    CAST(COALESCE(SUM(a.clicks), 0) AS BIGINT) AS clicks, \
                    COALESCE(SUM(a.cost), 0.0) AS cost \
             FROM {dim} d \
             LEFT JOIN ads a ON a.{id} = d.{id} \
             GROUP BY d.{id}, d.{name} \
             ORDER BY d.{id}",
            id = id_col,
            name = name_col,
            dim = dim_table,
        );
        self.conn.execute_into(&sql, &[])
    }
}
