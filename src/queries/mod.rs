pub mod campaigns;
pub mod currencies;
pub mod stocks;

pub use campaigns::CampaignQuery;
pub use currencies::CurrencyQuery;
pub use stocks::StockQuery;
