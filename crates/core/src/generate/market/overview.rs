use rand::Rng;
use serde::Serialize;

use crate::domain::StockRef;
use crate::time::MarketClock;

use super::{
    generate_breadth, generate_indices, generate_movers, generate_sector_performance,
    generate_sentiment, IndexQuote, MarketBreadth, MarketMovers, MarketSentiment,
    SectorPerformance,
};

const OVERVIEW_MOVERS: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub summary: String,
    pub last_updated: String,
    pub indices: Vec<IndexQuote>,
    pub sectors: Vec<SectorPerformance>,
    pub breadth: MarketBreadth,
    pub movers: MarketMovers,
    pub sentiment: MarketSentiment,
}

fn verb(change: f64) -> &'static str {
    if change > 0.0 {
        "gained"
    } else {
        "lost"
    }
}

fn summarize(
    indices: &[IndexQuote],
    breadth: &MarketBreadth,
    sentiment: &MarketSentiment,
) -> String {
    let nifty = indices.iter().find(|i| i.symbol == "NIFTY 50");
    let sensex = indices.iter().find(|i| i.symbol == "SENSEX");
    let (Some(nifty), Some(sensex)) = (nifty, sensex) else {
        return "Market data currently unavailable.".to_string();
    };
    let o = &breadth.overall;
    format!(
        "Nifty 50 {} {} points ({}%) to close at {}, while Sensex {} {} points ({}%) to end at {}. \
         {} Market breadth was {} with {} advances against {} declines.",
        verb(nifty.change),
        nifty.change.abs(),
        nifty.change_percent.abs(),
        nifty.value,
        verb(sensex.change),
        sensex.change.abs(),
        sensex.change_percent.abs(),
        sensex.value,
        sentiment.market_commentary,
        o.advance_decline_ratio,
        o.advances,
        o.declines,
    )
}

/// Every market aggregate plus a one-paragraph close summary.
pub fn generate_overview<R: Rng + ?Sized>(
    rng: &mut R,
    universe: &[StockRef],
    clock: &MarketClock,
) -> MarketOverview {
    let indices = generate_indices(rng, clock);
    let sectors = generate_sector_performance(rng);
    let breadth = generate_breadth(rng, clock);
    let movers = generate_movers(rng, universe, OVERVIEW_MOVERS);
    let sentiment = generate_sentiment(rng);

    MarketOverview {
        summary: summarize(&indices, &breadth, &sentiment),
        last_updated: clock.timestamp(),
        indices,
        sectors,
        breadth,
        movers,
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use crate::reference::ReferenceTable;

    #[test]
    fn summary_quotes_nifty_and_breadth() {
        let clock = MarketClock {
            as_of: day(),
            now: day().and_hms_opt(15, 30, 0).unwrap(),
        };
        let table = ReferenceTable::builtin();
        let o = generate_overview(&mut rng(11), table.all(), &clock);

        let nifty = &o.indices[0];
        assert!(o.summary.starts_with("Nifty 50 "));
        assert!(o.summary.contains(&format!("to close at {}", nifty.value)));
        assert!(o
            .summary
            .contains(&format!("{} advances", o.breadth.overall.advances)));
        assert!(o.summary.contains(o.sentiment.market_commentary));
        assert_eq!(o.movers.gainers.len(), OVERVIEW_MOVERS);
        assert_eq!(o.last_updated, "2026-01-05T15:30:00.000000");
    }
}
