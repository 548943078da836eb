//! Rows of the marketing hierarchy tables.
//!
//! Every level below `Account` carries the ids of all its ancestors, matching
//! the denormalized table layout. `Ad` is the only type with measures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: i64,
    pub account_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAccount {
    pub sub_account_id: i64,
    pub sub_account_name: String,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub portfolio_id: i64,
    pub portfolio_name: String,
    pub sub_account_id: i64,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: i64,
    pub campaign_name: String,
    pub portfolio_id: i64,
    pub sub_account_id: i64,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdGroup {
    pub ad_group_id: i64,
    pub ad_group_name: String,
    pub campaign_id: i64,
    pub portfolio_id: i64,
    pub sub_account_id: i64,
    pub account_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub ad_id: i64,
    pub ad_name: String,
    pub ad_group_id: i64,
    pub campaign_id: i64,
    pub portfolio_id: i64,
    pub sub_account_id: i64,
    pub account_id: i64,
    pub bid: f64,
    pub impressions: i64,
    pub clicks: i64,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// MetricsRollup — ad measures aggregated to an ancestor level
// ---------------------------------------------------------------------------

/// Summed ad metrics for one account, sub-account, or campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRollup {
    pub group_id: i64,
    pub group_name: String,
    pub ads: i64,
    pub impressions: i64,
    pub clicks: i64,
    pub cost: f64,
}
