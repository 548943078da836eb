pub mod campaign;
pub mod currency;
pub mod stock;

pub use campaign::*;
pub use currency::*;
pub use stock::*;
