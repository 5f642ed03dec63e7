pub mod ist;

pub use ist::MarketClock;
