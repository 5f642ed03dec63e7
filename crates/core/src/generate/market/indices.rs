use rand::Rng;
use serde::Serialize;

use crate::generate::uniform;
use crate::num::round2;
use crate::time::MarketClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexKind {
    #[serde(rename = "Broad Market")]
    BroadMarket,
    Sectoral,
    Volatility,
}

/// How a sectoral index tracks the market.
#[derive(Debug, Clone, Copy)]
struct Sensitivity {
    beta: f64,
    idiosyncratic: f64,
    base_value: f64,
}

#[derive(Debug, Clone, Copy)]
enum Driver {
    Nifty,
    Sensex,
    Vix,
    Sector(Sensitivity),
}

struct IndexDef {
    symbol: &'static str,
    name: &'static str,
    description: &'static str,
    kind: IndexKind,
    driver: Driver,
}

const fn sector(beta: f64, idiosyncratic: f64, base_value: f64) -> Driver {
    Driver::Sector(Sensitivity {
        beta,
        idiosyncratic,
        base_value,
    })
}

const INDICES: &[IndexDef] = &[
    IndexDef {
        symbol: "NIFTY 50",
        name: "NIFTY 50",
        description: "Benchmark index of the top 50 companies listed on NSE by market capitalization",
        kind: IndexKind::BroadMarket,
        driver: Driver::Nifty,
    },
    IndexDef {
        symbol: "SENSEX",
        name: "S&P BSE SENSEX",
        description: "Benchmark index of the top 30 companies listed on BSE by market capitalization",
        kind: IndexKind::BroadMarket,
        driver: Driver::Sensex,
    },
    IndexDef {
        symbol: "NIFTY BANK",
        name: "NIFTY Bank",
        description: "The most liquid and large capitalized stocks from the banking sector",
        kind: IndexKind::Sectoral,
        driver: sector(1.2, 0.8, 46_000.0),
    },
    IndexDef {
        symbol: "NIFTY IT",
        name: "NIFTY IT",
        description: "The top companies from the IT sector",
        kind: IndexKind::Sectoral,
        driver: sector(0.9, 1.0, 32_000.0),
    },
    IndexDef {
        symbol: "NIFTY AUTO",
        name: "NIFTY Auto",
        description: "Automobile and auto ancillary companies",
        kind: IndexKind::Sectoral,
        driver: sector(1.0, 0.9, 18_500.0),
    },
    IndexDef {
        symbol: "NIFTY FMCG",
        name: "NIFTY FMCG",
        description: "Fast Moving Consumer Goods companies",
        kind: IndexKind::Sectoral,
        driver: sector(0.7, 0.6, 52_000.0),
    },
    IndexDef {
        symbol: "NIFTY PHARMA",
        name: "NIFTY Pharma",
        description: "Pharmaceutical sector companies",
        kind: IndexKind::Sectoral,
        driver: sector(0.8, 0.7, 17_000.0),
    },
    IndexDef {
        symbol: "NIFTY METAL",
        name: "NIFTY Metal",
        description: "Companies from the metal sector",
        kind: IndexKind::Sectoral,
        driver: sector(1.4, 1.2, 8_000.0),
    },
    IndexDef {
        symbol: "NIFTY REALTY",
        name: "NIFTY Realty",
        description: "Real estate sector companies",
        kind: IndexKind::Sectoral,
        driver: sector(1.5, 1.1, 900.0),
    },
    IndexDef {
        symbol: "INDIA VIX",
        name: "India VIX",
        description: "Volatility index based on NIFTY 50 option prices",
        kind: IndexKind::Volatility,
        driver: Driver::Vix,
    },
];

/// One index level. `price` mirrors `value` for front ends that read either.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: IndexKind,
    pub value: f64,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    pub volume: u64,
    pub last_updated: String,
}

/// Index quotes driven by one shared sentiment scalar.
///
/// Sectoral indices follow the market scaled by their beta plus their own
/// noise. The volatility index moves against the NIFTY on moves larger than
/// 1 %. `change_percent` is recomputed from the rounded change and value so
/// it always equals `round2(change / value * 100)`.
pub fn generate_indices<R: Rng + ?Sized>(rng: &mut R, clock: &MarketClock) -> Vec<IndexQuote> {
    let nifty_value = round2(uniform(rng, 19_500.0, 20_500.0));
    let sentiment = uniform(rng, -1.5, 1.5);
    let nifty_move = sentiment + uniform(rng, -0.5, 0.5);
    let sensex_move = nifty_move * uniform(rng, 0.95, 1.05);
    let vix_value = 15.0 + sentiment.abs() * 3.0;
    let vix_move = if nifty_move.abs() > 1.0 {
        -nifty_move * uniform(rng, 1.5, 2.5)
    } else {
        uniform(rng, -3.0, 3.0)
    };
    let last_updated = clock.timestamp();

    INDICES
        .iter()
        .map(|def| {
            let (raw_value, raw_move, volume) = match def.driver {
                Driver::Nifty => (nifty_value, nifty_move, rng.gen_range(150_000..=250_000)),
                Driver::Sensex => (nifty_value * 3.3, sensex_move, rng.gen_range(120_000..=220_000)),
                Driver::Vix => (vix_value, vix_move, rng.gen_range(50_000..=100_000)),
                Driver::Sector(s) => {
                    let own = uniform(rng, -s.idiosyncratic, s.idiosyncratic);
                    let value = s.base_value * (1.0 + uniform(rng, -0.05, 0.05));
                    (value, sentiment * s.beta + own, rng.gen_range(40_000..=150_000))
                }
            };

            let value = round2(raw_value);
            let change = round2(value * raw_move / 100.0);
            let change_percent = round2(change / value * 100.0);
            let previous_close = value - change;

            let high = if change > 0.0 {
                value * (1.0 + uniform(rng, 0.0, 0.005))
            } else {
                previous_close * (1.0 + uniform(rng, 0.0, 0.003))
            };
            let low = if change < 0.0 {
                previous_close * (1.0 - uniform(rng, 0.0, 0.005))
            } else {
                value * (1.0 - uniform(rng, 0.0, 0.003))
            };
            let open = previous_close * (1.0 + uniform(rng, -0.003, 0.003));

            IndexQuote {
                symbol: def.symbol,
                name: def.name,
                description: def.description,
                kind: def.kind,
                value,
                price: value,
                change,
                change_percent,
                open: round2(open),
                high: round2(high.max(value).max(open)),
                low: round2(low.min(value).min(open)),
                previous_close: round2(previous_close),
                volume,
                last_updated: last_updated.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use chrono::NaiveTime;

    fn clock() -> MarketClock {
        MarketClock {
            as_of: day(),
            now: day().and_time(NaiveTime::from_hms_opt(9, 15, 0).unwrap()),
        }
    }

    #[test]
    fn change_percent_matches_change_over_value() {
        for seed in 0..200 {
            let quotes = generate_indices(&mut rng(seed), &clock());
            assert_eq!(quotes.len(), 10);
            for q in &quotes {
                assert_eq!(q.change_percent, round2(q.change / q.value * 100.0), "{q:?}");
                assert_eq!(q.price, q.value);
                assert!(q.low <= q.value && q.value <= q.high, "{q:?}");
                assert!(q.low <= q.open && q.open <= q.high, "{q:?}");
            }
        }
    }

    #[test]
    fn broad_indices_move_together() {
        for seed in 0..50 {
            let quotes = generate_indices(&mut rng(seed), &clock());
            let nifty = &quotes[0];
            let sensex = &quotes[1];
            assert_eq!(nifty.symbol, "NIFTY 50");
            assert!((sensex.value / nifty.value - 3.3).abs() < 1e-3);
            if nifty.change_percent.abs() > 0.05 {
                assert_eq!(
                    nifty.change_percent.signum(),
                    sensex.change_percent.signum(),
                    "seed {seed}"
                );
            }
        }
    }

    #[test]
    fn vix_moves_against_large_nifty_moves() {
        let mut checked = 0;
        for seed in 0..400 {
            let quotes = generate_indices(&mut rng(seed), &clock());
            let nifty = &quotes[0];
            let vix = quotes.iter().find(|q| q.symbol == "INDIA VIX").unwrap();
            // raw move > 1 % survives rounding with margin
            if nifty.change_percent.abs() > 1.05 {
                assert!(vix.change_percent * nifty.change_percent <= 0.0, "seed {seed}");
                checked += 1;
            }
        }
        assert!(checked > 0);
    }
}
