use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::domain::PricePoint;
use crate::num::round2;
use crate::seed::SymbolSeed;

use super::uniform;

const CYCLE_LEN: usize = 30;
const CYCLE_UP_DAYS: usize = 15;
const CYCLE_BUMP: f64 = 1.002;

/// Daily OHLCV bars ending on `as_of`, oldest first.
///
/// Starts from the symbol's base price and walks with its volatility; the
/// first half of every 30-day cycle gets a small upward bump.
pub fn generate_history<R: Rng + ?Sized>(
    rng: &mut R,
    symbol: &str,
    days: usize,
    as_of: NaiveDate,
) -> Vec<PricePoint> {
    let seed = SymbolSeed::of(symbol);
    let volatility = seed.volatility();
    let volume_base = 100_000.0 + seed.modulo(1_000_000) as f64;

    let mut price = seed.base_price();
    let mut out = Vec::with_capacity(days);

    for i in 0..days {
        let date = as_of - Duration::days((days - i - 1) as i64);

        let change = uniform(rng, -volatility, volatility);
        price *= 1.0 + change;
        if i % CYCLE_LEN < CYCLE_UP_DAYS {
            price *= CYCLE_BUMP;
        }

        let open = price * (1.0 - uniform(rng, 0.0, 0.01));
        let high = price * (1.0 + uniform(rng, 0.0, 0.02));
        let low = (price * (1.0 - uniform(rng, 0.0, 0.02))).min(open);
        let volume = (volume_base * (1.0 + change.abs() * 10.0)).round() as u64;

        out.push(PricePoint {
            date,
            open: round2(open),
            high: round2(high),
            low: round2(low),
            close: round2(price),
            volume,
        });
    }

    out
}
