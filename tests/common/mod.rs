//! Shared test fixtures for the warehouse integration tests.
//!
//! Provides `setup_warehouse()` (an in-memory warehouse with the schema
//! installed), a sample Polygon bar, sample exchange rates, and a seeded
//! marketing hierarchy.

#![allow(dead_code)]

use stock_warehouse::models::{
    Account, Ad, AdGroup, Campaign, DailyOpenClose, ExchangeRate, Portfolio, SubAccount,
};
use stock_warehouse::Warehouse;

/// Create an in-memory warehouse with all migrations applied.
pub fn setup_warehouse() -> Warehouse {
    Warehouse::builder().in_memory().build().unwrap()
}

/// A full AAPL bar for 2024-10-03, including after-hours and pre-market.
pub fn sample_bar() -> DailyOpenClose {
    DailyOpenClose {
        status: "OK".to_string(),
        from: "2024-10-03".to_string(),
        symbol: "AAPL".to_string(),
        open: 225.14,
        high: 226.81,
        low: 223.32,
        close: 225.67,
        volume: 34044158.0,
        after_hours: Some(225.95),
        pre_market: Some(225.0),
    }
}

pub fn sample_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate {
            currency: "EUR".to_string(),
            exchange_rate: 0.9,
        },
        ExchangeRate {
            currency: "GBP".to_string(),
            exchange_rate: 0.75,
        },
    ]
}

/// Insert a small two-account hierarchy down to ads.
///
/// Account 1 (Acme) has one sub-account, portfolio, campaign, and ad group
/// with two ads; account 2 (Globex) has a full chain with a single ad.
pub fn seed_hierarchy(wh: &Warehouse) {
    let q = wh.campaigns();

    q.insert_account(&Account {
        account_id: 1,
        account_name: "Acme".to_string(),
    })
    .unwrap();
    q.insert_account(&Account {
        account_id: 2,
        account_name: "Globex".to_string(),
    })
    .unwrap();

    q.insert_sub_account(&SubAccount {
        sub_account_id: 10,
        sub_account_name: "Acme-US".to_string(),
        account_id: 1,
    })
    .unwrap();
    q.insert_sub_account(&SubAccount {
        sub_account_id: 20,
        sub_account_name: "Globex-EU".to_string(),
        account_id: 2,
    })
    .unwrap();

    q.insert_portfolio(&Portfolio {
        portfolio_id: 100,
        portfolio_name: "Search".to_string(),
        sub_account_id: 10,
        account_id: 1,
    })
    .unwrap();
    q.insert_portfolio(&Portfolio {
        portfolio_id: 200,
        portfolio_name: "Display".to_string(),
        sub_account_id: 20,
        account_id: 2,
    })
    .unwrap();

    q.insert_campaign(&Campaign {
        campaign_id: 1000,
        campaign_name: "Spring Sale".to_string(),
        portfolio_id: 100,
        sub_account_id: 10,
        account_id: 1,
    })
    .unwrap();
    q.insert_campaign(&Campaign {
        campaign_id: 2000,
        campaign_name: "Brand Awareness".to_string(),
        portfolio_id: 200,
        sub_account_id: 20,
        account_id: 2,
    })
    .unwrap();

    q.insert_ad_group(&AdGroup {
        ad_group_id: 10000,
        ad_group_name: "Shoes".to_string(),
        campaign_id: 1000,
        portfolio_id: 100,
        sub_account_id: 10,
        account_id: 1,
    })
    .unwrap();
    q.insert_ad_group(&AdGroup {
        ad_group_id: 20000,
        ad_group_name: "Banners".to_string(),
        campaign_id: 2000,
        portfolio_id: 200,
        sub_account_id: 20,
        account_id: 2,
    })
    .unwrap();

    q.insert_ad(&Ad {
        ad_id: 100000,
        ad_name: "Red Shoes".to_string(),
        ad_group_id: 10000,
        campaign_id: 1000,
        portfolio_id: 100,
        sub_account_id: 10,
        account_id: 1,
        bid: 1.5,
        impressions: 1000,
        clicks: 50,
        cost: 42.5,
    })
    .unwrap();
    q.insert_ad(&Ad {
        ad_id: 100001,
        ad_name: "Blue Shoes".to_string(),
        ad_group_id: 10000,
        campaign_id: 1000,
        portfolio_id: 100,
        sub_account_id: 10,
        account_id: 1,
        bid: 2.0,
        impressions: 500,
        clicks: 25,
        cost: 30.0,
    })
    .unwrap();
    q.insert_ad(&Ad {
        ad_id: 200000,
        ad_name: "Globex Banner".to_string(),
        ad_group_id: 20000,
        campaign_id: 2000,
        portfolio_id: 200,
        sub_account_id: 20,
        account_id: 2,
        bid: 0.8,
        impressions: 2000,
        clicks: 10,
        cost: 16.0,
    })
    .unwrap();
}
