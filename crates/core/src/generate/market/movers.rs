use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::StockRef;
use crate::generate::uniform;
use crate::num::round2;
use crate::seed::SymbolSeed;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mover {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMovers {
    pub gainers: Vec<Mover>,
    pub losers: Vec<Mover>,
    pub most_active: Vec<Mover>,
}

fn mover<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    pct: (f64, f64),
    volume: (u64, u64),
) -> Mover {
    let base = SymbolSeed::of(stock.symbol).base_price();
    let change_percent = round2(uniform(rng, pct.0, pct.1));
    let change = round2(base * change_percent / 100.0);
    Mover {
        symbol: stock.symbol,
        name: stock.name,
        sector: stock.sector,
        price: round2(base + change),
        change,
        change_percent,
        volume: rng.gen_range(volume.0..=volume.1),
    }
}

/// Top gainers, losers and most active stocks drawn from disjoint slices of
/// a shuffled universe.
///
/// Each list holds `count` entries when the universe has at least
/// `3 * count` stocks; later lists shrink first otherwise.
pub fn generate_movers<R: Rng + ?Sized>(
    rng: &mut R,
    universe: &[StockRef],
    count: usize,
) -> MarketMovers {
    let mut pool: Vec<&StockRef> = universe.iter().collect();
    pool.shuffle(rng);
    let mut slices = pool.chunks(count.max(1));

    let mut take = |rng: &mut R, pct, volume| -> Vec<Mover> {
        slices
            .next()
            .unwrap_or_default()
            .iter()
            .take(count)
            .map(|s| mover(rng, s, pct, volume))
            .collect()
    };

    let mut gainers = take(rng, (3.5, 15.0), (500_000, 5_000_000));
    let mut losers = take(rng, (-15.0, -3.5), (500_000, 5_000_000));
    let mut most_active = take(rng, (-5.0, 5.0), (5_000_000, 20_000_000));

    gainers.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
    losers.sort_by(|a, b| a.change_percent.total_cmp(&b.change_percent));
    most_active.sort_by(|a, b| b.volume.cmp(&a.volume));

    MarketMovers {
        gainers,
        losers,
        most_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::rng;
    use crate::reference::ReferenceTable;
    use std::collections::HashSet;

    #[test]
    fn lists_are_disjoint_and_ordered() {
        let table = ReferenceTable::builtin();
        for seed in 0..30 {
            let m = generate_movers(&mut rng(seed), table.all(), 10);
            assert_eq!(m.gainers.len(), 10);
            assert_eq!(m.losers.len(), 10);
            assert_eq!(m.most_active.len(), 10);

            let symbols: HashSet<_> = m
                .gainers
                .iter()
                .chain(&m.losers)
                .chain(&m.most_active)
                .map(|x| x.symbol)
                .collect();
            assert_eq!(symbols.len(), 30);

            assert!(m.gainers.iter().all(|g| g.change_percent >= 3.5));
            assert!(m.losers.iter().all(|l| l.change_percent <= -3.5));
            assert!(m
                .gainers
                .windows(2)
                .all(|w| w[0].change_percent >= w[1].change_percent));
            assert!(m.most_active.windows(2).all(|w| w[0].volume >= w[1].volume));
        }
    }

    #[test]
    fn small_universe_shrinks_later_lists() {
        let table = ReferenceTable::builtin();
        let m = generate_movers(&mut rng(1), &table.all()[..12], 5);
        assert_eq!(m.gainers.len(), 5);
        assert_eq!(m.losers.len(), 5);
        assert_eq!(m.most_active.len(), 2);
    }
}
