use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::domain::StockRef;
use crate::num::{round1, round2};
use crate::seed::SymbolSeed;
use crate::time::MarketClock;

use super::{pick, uniform};

const MA_INTERVALS: [u32; 6] = [5, 10, 20, 50, 100, 200];

const PATTERNS: &[&str] = &[
    "Double Top",
    "Double Bottom",
    "Head and Shoulders",
    "Inverse Head and Shoulders",
    "Cup and Handle",
    "Rising Wedge",
    "Falling Wedge",
    "Triangle",
    "Flag",
    "Pennant",
    "Channel",
    "Gap",
];

const TIMEFRAMES: &[&str] = &["Daily", "Weekly", "Monthly"];

const STRENGTH_WORDS: &[&str] = &["weak", "moderate", "strong", "very strong", "extremely strong"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalReport {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub indicators: TechnicalIndicators,
    pub summary: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    pub macd: Macd,
    pub rsi: Rsi,
    pub moving_averages: MovingAverageSet,
    pub bollinger_bands: BollingerBands,
    pub volume: VolumeStats,
    pub support_resistance: SupportResistance,
    pub patterns: Vec<ChartPattern>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Macd {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rsi {
    pub value: i64,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovingAverageSet {
    pub values: BTreeMap<u32, f64>,
    pub status: BTreeMap<String, &'static str>,
    pub overall: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    pub percent_b: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VolumeStats {
    pub current: u64,
    pub average: u64,
    pub change: f64,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub support: [f64; 3],
    pub resistance: [f64; 3],
    pub nearest_support: f64,
    pub nearest_resistance: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPattern {
    pub name: &'static str,
    pub signal: &'static str,
    pub strength: u8,
    pub timeframe: &'static str,
}

fn macd_trend(value: f64, histogram: f64) -> &'static str {
    if histogram > 0.0 && value > 0.0 {
        "Bullish Crossover"
    } else if histogram < 0.0 && value < 0.0 {
        "Bearish Crossover"
    } else if histogram > 0.0 && value < 0.0 {
        "Bullish Divergence"
    } else {
        "Bearish Divergence"
    }
}

fn rsi_interpretation(rsi: f64) -> &'static str {
    if rsi < 30.0 {
        "Oversold"
    } else if rsi > 70.0 {
        "Overbought"
    } else {
        "Neutral"
    }
}

pub fn generate_technical<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    clock: &MarketClock,
) -> TechnicalReport {
    let seed = SymbolSeed::of(stock.symbol);
    let base_price = round2(seed.base_price());
    let bullish = seed.modulo(3) != 0;
    let direction = if bullish { 1.0 } else { -1.0 };

    let rsi = (50.0 + direction * uniform(rng, 5.0, 20.0)).clamp(20.0, 80.0);
    let volume_change = uniform(rng, -15.0, 30.0);

    let mut values = BTreeMap::new();
    let mut status = BTreeMap::new();
    for interval in MA_INTERVALS {
        let span = interval as f64;
        let variance = 0.005 * (span / 10.0) * uniform(rng, -1.0, 1.0);
        let side = if interval > 50 { 1.0 } else { -1.0 };
        let bias_effect = direction * 0.0005 * span;
        let ma = base_price * (1.0 + variance + bias_effect * side);
        values.insert(interval, round2(ma));
        status.insert(
            format!("MA{interval}"),
            if base_price > ma { "Bullish" } else { "Bearish" },
        );
    }
    let bullish_count = status.values().filter(|s| **s == "Bullish").count();
    let overall = if bullish_count * 2 > status.len() {
        "Bullish"
    } else {
        "Bearish"
    };

    let macd_value = direction * uniform(rng, 0.5, 2.0);
    let macd_signal = macd_value - direction * uniform(rng, 0.2, 0.8);
    let histogram = macd_value - macd_signal;
    let macd = Macd {
        value: round2(macd_value),
        signal: round2(macd_signal),
        histogram: round2(histogram),
        trend: macd_trend(macd_value, histogram),
    };

    let band = uniform(rng, 0.02, 0.1);
    let bollinger = BollingerBands {
        upper: round2(base_price * (1.0 + band * 2.0)),
        middle: base_price,
        lower: round2(base_price * (1.0 - band * 2.0)),
        width: round2(band * 4.0 * 100.0),
        percent_b: round1(uniform(rng, 0.0, 100.0)),
    };

    let support = [0.05, 0.1, 0.15].map(|d| round2(base_price * (1.0 - d * uniform(rng, 0.8, 1.2))));
    let resistance =
        [0.05, 0.1, 0.15].map(|d| round2(base_price * (1.0 + d * uniform(rng, 0.8, 1.2))));

    let pattern_count = rng.gen_range(1..=3);
    let patterns = (0..pattern_count)
        .map(|_| {
            let name = *pick(rng, PATTERNS);
            let roll: f64 = rng.gen();
            let signal = if (bullish && roll > 0.2) || (!bullish && roll < 0.2) {
                "Bullish"
            } else {
                "Bearish"
            };
            ChartPattern {
                name,
                signal,
                strength: rng.gen_range(1..=5),
                timeframe: *pick(rng, TIMEFRAMES),
            }
        })
        .collect();

    let volume = VolumeStats {
        current: (base_price * uniform(rng, 100_000.0, 5_000_000.0)).round() as u64,
        average: (base_price * uniform(rng, 100_000.0, 5_000_000.0)).round() as u64,
        change: round2(volume_change),
        trend: if volume_change > 5.0 {
            "Increasing"
        } else if volume_change < -5.0 {
            "Decreasing"
        } else {
            "Stable"
        },
    };

    let rsi_rounded = rsi.round() as i64;
    let mut summary = format!(
        "{} is showing {} {} momentum on the technical indicators. ",
        stock.name,
        pick(rng, STRENGTH_WORDS),
        if bullish { "bullish" } else { "bearish" },
    );
    summary.push_str(&match rsi_interpretation(rsi) {
        "Oversold" => format!(
            "RSI at {rsi_rounded} indicates oversold conditions that may lead to a potential reversal. "
        ),
        "Overbought" => format!(
            "RSI at {rsi_rounded} shows overbought conditions that might signal caution. "
        ),
        _ => format!("RSI at {rsi_rounded} is in a neutral zone. "),
    });
    summary.push_str(&format!(
        "MACD is showing a {}, and moving averages are overall {}. ",
        macd.trend.to_lowercase(),
        overall.to_lowercase()
    ));
    summary.push_str(if bollinger.percent_b < 20.0 {
        "Price is near the lower Bollinger Band, suggesting potential oversold conditions."
    } else if bollinger.percent_b > 80.0 {
        "Price is near the upper Bollinger Band, indicating potential overbought territory."
    } else {
        "Price is within the Bollinger Bands, showing moderate volatility."
    });

    TechnicalReport {
        symbol: stock.symbol.to_string(),
        name: stock.name.to_string(),
        current_price: base_price,
        indicators: TechnicalIndicators {
            macd,
            rsi: Rsi {
                value: rsi_rounded,
                interpretation: rsi_interpretation(rsi),
            },
            moving_averages: MovingAverageSet {
                values,
                status,
                overall,
            },
            bollinger_bands: bollinger,
            volume,
            support_resistance: SupportResistance {
                support,
                resistance,
                nearest_support: support[0],
                nearest_resistance: resistance[0],
            },
            patterns,
        },
        summary,
        last_updated: clock.display_time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use crate::reference::ReferenceTable;
    use chrono::NaiveTime;

    #[test]
    fn macd_trend_classification() {
        assert_eq!(macd_trend(1.0, 0.5), "Bullish Crossover");
        assert_eq!(macd_trend(-1.0, -0.5), "Bearish Crossover");
        assert_eq!(macd_trend(-1.0, 0.5), "Bullish Divergence");
        assert_eq!(macd_trend(1.0, -0.5), "Bearish Divergence");
        assert_eq!(rsi_interpretation(25.0), "Oversold");
        assert_eq!(rsi_interpretation(75.0), "Overbought");
    }

    #[test]
    fn report_shape() {
        let table = ReferenceTable::builtin();
        let stock = table.lookup("AXISBANK").found().unwrap();
        let clock = MarketClock {
            as_of: day(),
            now: day().and_time(NaiveTime::from_hms_opt(15, 30, 0).unwrap()),
        };
        let r = generate_technical(&mut rng(4), stock, &clock);

        let ind = &r.indicators;
        assert_eq!(ind.moving_averages.values.len(), 6);
        assert_eq!(ind.moving_averages.status.len(), 6);
        assert!((1..=3).contains(&ind.patterns.len()));
        assert!((20..=80).contains(&ind.rsi.value));
        assert!(ind.bollinger_bands.lower < ind.bollinger_bands.upper);
        assert!(ind.support_resistance.nearest_support < r.current_price);
        assert!(ind.support_resistance.nearest_resistance > r.current_price);
        assert!(r.summary.starts_with("Axis Bank Ltd. is showing"));
        assert_eq!(r.last_updated, "2026-01-05 15:30:00");

        let json = serde_json::to_value(&r).unwrap();
        assert!(json["indicators"]["movingAverages"]["values"]["200"].is_number());
        assert!(json["indicators"]["bollingerBands"]["percentB"].is_number());
    }
}
