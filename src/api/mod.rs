pub mod frankfurter;
pub mod polygon;

pub use frankfurter::FrankfurterClient;
pub use polygon::PolygonClient;
