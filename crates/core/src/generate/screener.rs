use serde::Serialize;

use crate::domain::StockRef;
use crate::num::round2;
use crate::seed::SymbolSeed;

/// Bounds applied by the fundamental screener. All bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenerFilter {
    pub min_pe: f64,
    pub max_pe: f64,
    pub min_market_cap: f64,
    pub sector: Option<String>,
}

impl Default for ScreenerFilter {
    fn default() -> Self {
        Self {
            min_pe: 0.0,
            max_pe: 100.0,
            min_market_cap: 0.0,
            sector: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerRow {
    #[serde(flatten)]
    pub stock: StockRef,
    pub price: u64,
    pub market_cap: u64,
    pub pe: u64,
    pub dividend_yield: f64,
}

/// Seed-derived screening metrics for one stock. No randomness involved.
pub fn screen_metrics(stock: &StockRef) -> ScreenerRow {
    let seed = SymbolSeed::of(stock.symbol);
    let price = 500 + seed.modulo(3000);
    ScreenerRow {
        stock: *stock,
        price,
        market_cap: price * (10_000_000 + seed.modulo(100_000_000)),
        pe: 15 + seed.modulo(25),
        dividend_yield: round2(1.0 + seed.modulo(400) as f64 / 100.0),
    }
}

pub fn fundamental_screener(universe: &[StockRef], filter: &ScreenerFilter) -> Vec<ScreenerRow> {
    universe
        .iter()
        .filter(|s| filter.sector.as_deref().map_or(true, |sector| s.sector == sector))
        .map(screen_metrics)
        .filter(|row| {
            let pe = row.pe as f64;
            pe >= filter.min_pe && pe <= filter.max_pe && row.market_cap as f64 >= filter.min_market_cap
        })
        .collect()
}
