//! Market-wide aggregates: indices, sectors, breadth, movers and sentiment.
//!
//! Each generator is independent; the overview simply runs all of them off the
//! same rng.

pub mod breadth;
pub mod indices;
pub mod movers;
pub mod overview;
pub mod sectors;
pub mod sentiment;

pub use breadth::{generate_breadth, MarketBreadth};
pub use indices::{generate_indices, IndexQuote};
pub use movers::{generate_movers, MarketMovers, Mover};
pub use overview::{generate_overview, MarketOverview};
pub use sectors::{generate_sector_performance, SectorPerformance};
pub use sentiment::{generate_sentiment, MarketSentiment};

use rand::Rng;

/// Inclusive integer draw between two fractions of `base`, truncating like an
/// integer cast.
pub(crate) fn share_of<R: Rng + ?Sized>(rng: &mut R, base: u32, lo: f64, hi: f64) -> u32 {
    let lo = (base as f64 * lo) as u32;
    let hi = (base as f64 * hi) as u32;
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}
