pub mod lookup;
pub mod price;
pub mod recommendation;
pub mod stock;

pub use lookup::Lookup;
pub use price::{PredictionPoint, PricePoint};
pub use recommendation::{Rating, Recommendation, RecommendationOverride, Trend};
pub use stock::{SectorClass, StockRef};
