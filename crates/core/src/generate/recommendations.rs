//! Recommendation lists: a random daily sample and the curated "recommended"
//! shortlist with per-symbol analysis.

use rand::Rng;
use serde::Serialize;

use crate::domain::{Rating, StockRef, Trend};
use crate::num::{round1, round2};
use crate::reference::ReferenceTable;
use crate::seed::SymbolSeed;

use super::{pick, sample, uniform};

pub const RECOMMENDED_SYMBOLS: [&str; 10] = [
    "RELIANCE",
    "HDFCBANK",
    "INFY",
    "TCS",
    "TATAMOTORS",
    "ICICIBANK",
    "BHARTIARTL",
    "MARUTI",
    "WIPRO",
    "ADANIPORTS",
];

const ALL_RATINGS: &[Rating] = &[
    Rating::StrongBuy,
    Rating::Buy,
    Rating::Hold,
    Rating::Sell,
    Rating::StrongSell,
];

const SAMPLE_REASONS: &[&str] = &[
    "Strong fundamentals and growth potential",
    "Undervalued compared to peers",
    "Positive earnings forecast",
    "Technical indicators suggest uptrend",
    "Sector outlook favorable",
    "Concerns about profitability",
    "Overvalued at current price",
    "Competitive pressures mounting",
];

const BULLISH_REASONS: &[&str] = &[
    "Undervalued based on current financial metrics",
    "Positive technical indicators and momentum",
    "Strategic initiatives expected to boost performance",
    "Market leader with competitive advantages",
    "Innovative product pipeline and research efforts",
];

const BEARISH_REASONS: &[&str] = &[
    "Potential headwinds in the upcoming quarter",
    "Valuation appears stretched at current levels",
    "Technical indicators suggest caution",
    "Increasing competitive pressures in the sector",
    "Regulatory concerns may impact growth",
];

const RISKS: &[&str] = &[
    "Market volatility exposure",
    "Sector headwinds",
    "Competitive pressures",
    "Regulatory challenges",
];

const STRENGTHS: &[&str] = &[
    "Strong balance sheet",
    "Industry leadership",
    "Innovation potential",
    "Expansion opportunities",
];

const SUPPORTS: &[&str] = &[
    "Consistent dividend history",
    "Solid cash flow generation",
    "Diversified revenue streams",
    "Strategic initiatives underway",
];

const RISK_LEVELS: &[&str] = &["Low", "Moderate", "High"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledRecommendation {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub prediction_change: f64,
    pub prediction_trend: Trend,
    pub recommendation_rating: Rating,
    pub recommendation_reason: &'static str,
}

/// `count` distinct stocks with an unopinionated rating each.
pub fn generate_recommendations<R: Rng + ?Sized>(
    rng: &mut R,
    universe: &[StockRef],
    count: usize,
) -> Vec<SampledRecommendation> {
    sample(rng, universe, count)
        .into_iter()
        .map(|stock| {
            let current_price = round2(uniform(rng, 500.0, 5_000.0));
            let change = round2(uniform(rng, -5.0, 5.0));
            let prediction_change = round2(uniform(rng, -10.0, 15.0));
            SampledRecommendation {
                symbol: stock.symbol,
                name: stock.name,
                sector: stock.sector,
                current_price,
                change,
                change_percent: round2(change / current_price * 100.0),
                prediction_change,
                prediction_trend: if prediction_change > 0.0 {
                    Trend::Up
                } else {
                    Trend::Down
                },
                recommendation_rating: *pick(rng, ALL_RATINGS),
                recommendation_reason: *pick(rng, SAMPLE_REASONS),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlookView {
    pub trend: Outlook,
    pub prediction: String,
    pub timeframe: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub level: &'static str,
    pub factors: [&'static str; 2],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub short_term: OutlookView,
    pub long_term: OutlookView,
    pub risk_assessment: RiskAssessment,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedStock {
    pub symbol: &'static str,
    pub name: &'static str,
    pub exchange: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub sector: &'static str,
    pub prediction_accuracy: u64,
    pub recommendation_rating: Rating,
    pub recommendation_reason: String,
    pub ai_analysis: AiAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedList {
    pub recommendations: Vec<RecommendedStock>,
}

/// One curated entry. Bullishness and model confidence come from the symbol
/// seed; the rest is drawn from `rng`.
pub fn recommend_stock<R: Rng + ?Sized>(rng: &mut R, stock: &StockRef) -> RecommendedStock {
    let seed = SymbolSeed::of(stock.symbol);
    let price = seed.base_price();
    let change_percent = round2(uniform(rng, -2.5, 5.0));
    let change = round2(price * change_percent / 100.0);

    let seed_val = seed.modulo(100);
    let bullish = seed_val > 40;
    let confidence = (70 + seed_val % 20).min(95);

    let short_move = round1(uniform(rng, 1.0, if bullish { 5.0 } else { 3.0 }));
    let short_term = OutlookView {
        trend: if bullish { Outlook::Up } else { Outlook::Down },
        prediction: format!(
            "{} of {short_move}% expected",
            if bullish { "Increase" } else { "Decrease" }
        ),
        timeframe: format!("{} weeks", rng.gen_range(1..=4)),
        confidence: (confidence - rng.gen_range(0..=10)) as f64,
    };
    let long_up = bullish || rng.gen::<f64>() > 0.3;
    let long_term = OutlookView {
        trend: if long_up { Outlook::Up } else { Outlook::Flat },
        prediction: format!(
            "{} expected",
            if bullish { "Strong growth" } else { "Stable performance" }
        ),
        timeframe: format!("{} months", rng.gen_range(6..=18)),
        confidence: (confidence - rng.gen_range(10..=15)) as f64,
    };
    let risk_assessment = RiskAssessment {
        level: *pick(rng, RISK_LEVELS),
        factors: [
            *pick(rng, if bullish { STRENGTHS } else { RISKS }),
            *pick(rng, SUPPORTS),
        ],
    };

    let rating = if bullish {
        *pick(rng, &[Rating::StrongBuy, Rating::Buy, Rating::Hold])
    } else {
        *pick(rng, &[Rating::Hold, Rating::Sell])
    };
    // one bullish reason is sector-specific
    let reason = if bullish {
        match rng.gen_range(0..=BULLISH_REASONS.len()) {
            0 => format!("Strong growth potential in the {} sector", stock.sector),
            i => BULLISH_REASONS[i - 1].to_string(),
        }
    } else {
        pick(rng, BEARISH_REASONS).to_string()
    };

    RecommendedStock {
        symbol: stock.symbol,
        name: stock.name,
        exchange: stock.exchange,
        price,
        change,
        change_percent,
        sector: stock.sector,
        prediction_accuracy: confidence,
        recommendation_rating: rating,
        recommendation_reason: reason,
        ai_analysis: AiAnalysis {
            short_term,
            long_term,
            risk_assessment,
        },
    }
}

/// The curated shortlist, Strong Buy first. `rng_for` supplies the rng for
/// each symbol so entries stay stable regardless of list order.
pub fn generate_recommended<R, F>(table: &ReferenceTable, mut rng_for: F) -> RecommendedList
where
    R: Rng,
    F: FnMut(&str) -> R,
{
    let mut recommendations: Vec<RecommendedStock> = RECOMMENDED_SYMBOLS
        .iter()
        .filter_map(|symbol| table.lookup(symbol).found())
        .map(|stock| recommend_stock(&mut rng_for(stock.symbol), stock))
        .collect();
    recommendations.sort_by_key(|r| r.recommendation_rating);
    RecommendedList { recommendations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::rng;
    use std::collections::HashSet;

    #[test]
    fn sample_is_distinct_and_sized() {
        let table = ReferenceTable::builtin();
        let recs = generate_recommendations(&mut rng(2), table.all(), 7);
        assert_eq!(recs.len(), 7);
        let symbols: HashSet<_> = recs.iter().map(|r| r.symbol).collect();
        assert_eq!(symbols.len(), 7);
        for r in &recs {
            assert_eq!(r.prediction_trend == Trend::Up, r.prediction_change > 0.0);
        }
    }

    #[test]
    fn recommended_list_is_sorted_and_complete() {
        let table = ReferenceTable::builtin();
        let list = generate_recommended(&table, |s| rng(SymbolSeed::of(s).value()));
        assert_eq!(list.recommendations.len(), 10);
        assert!(list
            .recommendations
            .windows(2)
            .all(|w| w[0].recommendation_rating <= w[1].recommendation_rating));
    }

    #[test]
    fn bullishness_follows_the_seed() {
        let table = ReferenceTable::builtin();
        for symbol in RECOMMENDED_SYMBOLS {
            let stock = table.lookup(symbol).found().unwrap();
            let rec = recommend_stock(&mut rng(5), stock);
            let bullish = SymbolSeed::of(symbol).modulo(100) > 40;
            if bullish {
                assert_ne!(rec.recommendation_rating, Rating::Sell);
                assert_eq!(rec.ai_analysis.short_term.trend, Outlook::Up);
            } else {
                assert!(matches!(rec.recommendation_rating, Rating::Hold | Rating::Sell));
                assert_eq!(rec.ai_analysis.long_term.prediction, "Stable performance expected");
            }
            assert!(rec.prediction_accuracy <= 95);
            assert!(rec.ai_analysis.short_term.confidence <= rec.prediction_accuracy as f64);
        }
    }
}
