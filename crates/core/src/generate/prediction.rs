//! Forward price paths.
//!
//! [`generate_prediction`] is the short-form forecast anchored on a fresh
//! 30-day history; [`generate_projection`] is the detailed projection from the
//! symbol's base price with confidence-derived bands.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::domain::{PredictionPoint, Rating, RecommendationOverride, StockRef, Trend};
use crate::num::{round1, round2};
use crate::seed::SymbolSeed;
use crate::time::MarketClock;

use super::history::generate_history;
use super::{sample, uniform};

const ANCHOR_DAYS: usize = 30;

const UP_DRIVERS: &[&str] = &[
    "Strong quarterly results expected",
    "Positive sector outlook",
    "Increased institutional buying",
    "Favorable regulatory changes",
    "New product launches",
    "International expansion",
    "Cost-cutting measures",
    "Strategic acquisitions",
];

const DOWN_DRIVERS: &[&str] = &[
    "Competitive pressures increasing",
    "Margin compression expected",
    "Regulatory headwinds",
    "Sector rotation out of industry",
    "Valuation concerns",
    "Supply chain constraints",
    "Rising input costs",
    "Management uncertainty",
];

const UP_SIGNALS: &[&str] = &[
    "Bullish MACD crossover",
    "RSI showing upward momentum",
    "Golden cross on 50/200 day MA",
    "Cup and handle pattern forming",
    "Increased trading volume on up days",
];

const DOWN_SIGNALS: &[&str] = &[
    "Bearish MACD divergence",
    "RSI indicating overbought conditions",
    "Death cross on 50/200 day MA",
    "Head and shoulders pattern forming",
    "Decreased trading volume on up days",
];

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub symbol: String,
    pub current_price: f64,
    pub last_prediction_price: f64,
    pub prediction_days: usize,
    pub daily_predictions: Vec<PredictionPoint>,
    pub trend: Trend,
    pub percent_change: f64,
    pub confidence: f64,
    pub analysis: ForecastAnalysis,
    pub recommendation: ForecastRecommendation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastAnalysis {
    pub drivers: Vec<String>,
    pub technical_signals: Vec<String>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    pub rsi: f64,
    pub macd: f64,
    pub moving_averages: MovingAverages,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MovingAverages {
    pub ma50: f64,
    pub ma200: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastRecommendation {
    pub rating: Rating,
    pub reasons: Vec<String>,
    pub strength: u32,
    pub technical_score: u32,
    pub fundamental_score: u32,
    pub updated: String,
}

/// Short-form forecast of `days` daily points starting today.
pub fn generate_prediction<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    curated: Option<&RecommendationOverride>,
    days: usize,
    clock: &MarketClock,
) -> Forecast {
    let history = generate_history(rng, stock.symbol, ANCHOR_DAYS, clock.as_of);
    let seed = SymbolSeed::of(stock.symbol);
    let base_price = history
        .last()
        .map_or_else(|| seed.base_price(), |bar| bar.close);

    let bias = seed.trend_bias();
    let trend = if bias > 0.0 { Trend::Up } else { Trend::Down };
    let direction = match trend {
        Trend::Up => 1.0,
        Trend::Down => -1.0,
    };
    let trend_factor = (0.002 + bias.abs() * 0.004) * direction;
    let confidence = (65 + seed.modulo(30)) as f64;
    let rsi = 50.0 + bias * 40.0;
    let macd = bias * 2.0;

    let mut price = base_price;
    let mut points = Vec::with_capacity(days);
    for i in 0..days {
        let step_vol = (0.01 - i as f64 * 0.0001).max(0.0);
        price *= 1.0 + uniform(rng, -step_vol, step_vol) + trend_factor;
        let interval = 0.01 + i as f64 * 0.001;
        points.push(PredictionPoint {
            date: clock.as_of + Duration::days(i as i64),
            price: round2(price),
            lower_bound: round2(price * (1.0 - interval)),
            upper_bound: round2(price * (1.0 + interval)),
            confidence: round1(confidence * (1.0 - interval)),
        });
    }

    let last_price = points.last().map_or(base_price, |p| p.price);
    let percent_change = round2((last_price - base_price) / base_price * 100.0);

    let (drivers, signals, rating) = match trend {
        Trend::Up => (
            sample(rng, UP_DRIVERS, 3),
            sample(rng, UP_SIGNALS, 2),
            if percent_change > 5.0 { Rating::Buy } else { Rating::Hold },
        ),
        Trend::Down => (
            sample(rng, DOWN_DRIVERS, 3),
            sample(rng, DOWN_SIGNALS, 2),
            if percent_change < -5.0 { Rating::Sell } else { Rating::Hold },
        ),
    };
    let drivers: Vec<String> = drivers.into_iter().map(String::from).collect();

    let (rating, reasons, strength) = match curated {
        Some(o) => (
            o.rating,
            o.reasons.iter().map(|r| r.to_string()).collect(),
            o.strength,
        ),
        None => (rating, drivers.clone(), confidence.clamp(60.0, 95.0) as u32),
    };

    Forecast {
        symbol: stock.symbol.to_string(),
        current_price: base_price,
        last_prediction_price: last_price,
        prediction_days: days,
        daily_predictions: points,
        trend,
        percent_change,
        confidence,
        analysis: ForecastAnalysis {
            drivers,
            technical_signals: signals.into_iter().map(String::from).collect(),
            indicators: Indicators {
                rsi: round2(rsi),
                macd: round2(macd),
                moving_averages: MovingAverages {
                    ma50: round2(base_price * (1.0 - bias * 0.05)),
                    ma200: round2(base_price * (1.0 - bias * 0.1)),
                },
            },
        },
        recommendation: ForecastRecommendation {
            rating,
            reasons,
            strength,
            technical_score: 50 + (rsi * 0.5) as u32,
            fundamental_score: 50 + seed.modulo(50) as u32,
            updated: clock.timestamp(),
        },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub predictions: Vec<ProjectionPoint>,
    pub analysis: ProjectionAnalysis,
    pub model_accuracy: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub confidence: f64,
    pub upper_bound: f64,
    pub lower_bound: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionAnalysis {
    pub summary: String,
    pub technical_factors: TechnicalFactors,
    pub fundamental_factors: FundamentalFactors,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalFactors {
    pub moving_averages: &'static str,
    pub rsi: i64,
    pub macd: &'static str,
    pub bollinger_bands: Bollinger,
    pub support_levels: [f64; 3],
    pub resistance_levels: [f64; 3],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bollinger {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    pub signal: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalFactors {
    pub earnings_impact: &'static str,
    pub valuation_metric: &'static str,
    pub sector_outlook: &'static str,
}

/// Detailed projection: drifts one way for a third of symbols and the other
/// way for the rest, with noise widening over the horizon.
pub fn generate_projection<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    days: usize,
    as_of: NaiveDate,
) -> Projection {
    let seed = SymbolSeed::of(stock.symbol);
    let base_price = round2(seed.base_price());
    let bullish = seed.modulo(3) != 0;
    let direction = if bullish { 1.0 } else { -1.0 };

    let mut current = base_price;
    let mut predictions = Vec::with_capacity(days);
    for i in 0..days {
        let progress = i as f64 / days as f64;
        let volatility = 0.01 + progress * 0.03;
        let change = current * (direction * 0.002 + uniform(rng, -volatility, volatility));
        let next = (current + change).max(current * 0.5);
        let confidence = round1((95.0 - progress * 30.0 + uniform(rng, -5.0, 5.0)).max(60.0));
        let band = 0.01 * (100.0 - confidence) / 10.0;
        predictions.push(ProjectionPoint {
            date: as_of + Duration::days(i as i64),
            price: round2(next),
            confidence,
            upper_bound: round2(next * (1.0 + band)),
            lower_bound: round2(next * (1.0 - band)),
        });
        current = next;
    }

    let rsi = (50.0 + direction * uniform(rng, 5.0, 20.0)).clamp(20.0, 80.0);
    let band_width = uniform(rng, 0.02, 0.1);
    let last_price = predictions.last().map_or(base_price, |p| p.price);
    let upper = round2(base_price * (1.0 + band_width * 2.0));
    let lower = round2(base_price * (1.0 - band_width * 2.0));
    let signal = if last_price < lower {
        "Buy"
    } else if last_price > upper {
        "Sell"
    } else {
        "Neutral"
    };

    let summary = format!(
        "Our AI models predict a {} trend for {} with potential {} at key levels.",
        if bullish { "bullish" } else { "bearish" },
        stock.name,
        if bullish { "resistance" } else { "support" },
    );

    let model_accuracy = (80 + seed.modulo(10) as u32 + rng.gen_range(0..=5)).min(95);

    Projection {
        symbol: stock.symbol.to_string(),
        name: stock.name.to_string(),
        current_price: base_price,
        predictions,
        analysis: ProjectionAnalysis {
            summary,
            technical_factors: TechnicalFactors {
                moving_averages: if bullish { "Bullish" } else { "Bearish" },
                rsi: rsi.round() as i64,
                macd: if bullish { "Bullish Crossover" } else { "Bearish Crossover" },
                bollinger_bands: Bollinger {
                    upper,
                    middle: base_price,
                    lower,
                    width: round2(band_width * 4.0 * 100.0),
                    signal,
                },
                support_levels: [0.95, 0.9, 0.85].map(|m| round2(base_price * m)),
                resistance_levels: [1.05, 1.1, 1.15].map(|m| round2(base_price * m)),
            },
            fundamental_factors: FundamentalFactors {
                earnings_impact: if bullish { "Positive" } else { "Negative" },
                valuation_metric: if bullish { "Undervalued" } else { "Overvalued" },
                sector_outlook: if bullish { "Positive" } else { "Negative" },
            },
        },
        model_accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use crate::reference::ReferenceTable;
    use chrono::{NaiveDateTime, NaiveTime};

    fn clock() -> MarketClock {
        MarketClock {
            as_of: day(),
            now: NaiveDateTime::new(day(), NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn forecast_points_start_today_and_respect_bounds() {
        let table = ReferenceTable::builtin();
        let stock = table.lookup("WIPRO").found().unwrap();
        let f = generate_prediction(&mut rng(5), stock, None, 90, &clock());

        assert_eq!(f.daily_predictions.len(), 90);
        assert_eq!(f.prediction_days, 90);
        assert_eq!(f.daily_predictions[0].date, day());
        for p in &f.daily_predictions {
            assert!(p.lower_bound <= p.price && p.price <= p.upper_bound, "{p:?}");
        }
        assert_eq!(f.last_prediction_price, f.daily_predictions[89].price);
        assert_eq!(f.analysis.drivers.len(), 3);
        assert_eq!(f.analysis.technical_signals.len(), 2);
        assert!((60..=95).contains(&f.recommendation.strength));
    }

    #[test]
    fn forecast_trend_follows_symbol_bias() {
        let table = ReferenceTable::builtin();
        // TCS bias is -0.16
        let tcs = table.lookup("TCS").found().unwrap();
        let f = generate_prediction(&mut rng(1), tcs, None, 10, &clock());
        assert_eq!(f.trend, Trend::Down);
        assert_eq!(f.analysis.indicators.rsi, 43.6);
        assert_eq!(f.analysis.indicators.macd, -0.32);
        assert!(matches!(f.recommendation.rating, Rating::Hold | Rating::Sell));
    }

    #[test]
    fn curated_view_wins() {
        let table = ReferenceTable::builtin();
        let stock = table.lookup("RELIANCE").found().unwrap();
        let f = generate_prediction(
            &mut rng(2),
            stock,
            table.override_for("RELIANCE"),
            30,
            &clock(),
        );
        assert_eq!(f.recommendation.rating, Rating::StrongBuy);
        assert_eq!(f.recommendation.strength, 85);
        assert_eq!(f.recommendation.reasons.len(), 4);
    }

    #[test]
    fn projection_bands_and_accuracy() {
        let table = ReferenceTable::builtin();
        let stock = table.lookup("SUNPHARMA").found().unwrap();
        let p = generate_projection(&mut rng(9), stock, 365, day());

        assert_eq!(p.predictions.len(), 365);
        assert!(p.model_accuracy <= 95);
        let mut prev = p.current_price;
        for pt in &p.predictions {
            assert!(pt.lower_bound <= pt.price && pt.price <= pt.upper_bound);
            assert!(pt.confidence >= 60.0);
            assert!(pt.price >= round2(prev * 0.5) - 0.01);
            prev = pt.price;
        }
        let tf = &p.analysis.technical_factors;
        assert!((20..=80).contains(&tf.rsi));
        assert!(tf.support_levels[0] < p.current_price && p.current_price < tf.resistance_levels[0]);
    }
}
