use rand::Rng;
use serde::Serialize;

use crate::generate::{pick, uniform};
use crate::num::round2;

const GLOBAL_CUES: &[&str] = &[
    "Positive global cues supporting market sentiment",
    "Weak global markets weighing on domestic sentiment",
    "Mixed global cues keeping markets range-bound",
    "US markets providing strong directional cues",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Bullish,
    #[serde(rename = "Moderately Bullish")]
    ModeratelyBullish,
    Neutral,
    #[serde(rename = "Moderately Bearish")]
    ModeratelyBearish,
    Bearish,
}

impl Direction {
    fn is_bullish(self) -> bool {
        matches!(self, Self::Bullish | Self::ModeratelyBullish)
    }

    fn is_bearish(self) -> bool {
        matches!(self, Self::Bearish | Self::ModeratelyBearish)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTechnicals {
    pub rsi: u32,
    pub macd: f64,
    pub adx: u32,
    pub trend_strength: &'static str,
    pub trend_direction: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    /// Net crores.
    pub net_value: f64,
    pub action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstitutionalActivity {
    pub fii: Flow,
    pub dii: Flow,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSentiment {
    pub overall: Direction,
    pub strength: u32,
    pub technical_indicators: MarketTechnicals,
    pub institutional_activity: InstitutionalActivity,
    pub market_commentary: &'static str,
    pub global_cues: &'static str,
}

fn flow(net: f64) -> Flow {
    Flow {
        net_value: net,
        action: if net > 0.0 { "Buying" } else { "Selling" },
    }
}

fn commentary(direction: Direction, fii: f64, dii: f64) -> &'static str {
    if direction.is_bullish() {
        if fii > 0.0 && dii > 0.0 {
            "Strong market momentum with both FII and DII buying interest."
        } else if fii > 0.0 {
            "Markets advancing with strong FII inflows despite DII selling."
        } else {
            "Markets supported by domestic institutional buying despite FII outflows."
        }
    } else if direction.is_bearish() {
        if fii < 0.0 && dii < 0.0 {
            "Markets under pressure with continued selling from both FII and DII."
        } else if fii < 0.0 {
            "FII selling putting pressure on markets despite domestic support."
        } else {
            "Domestic institutional selling weighing on market sentiment."
        }
    } else {
        "Markets consolidating with mixed institutional flows in a range-bound session."
    }
}

pub fn generate_sentiment<R: Rng + ?Sized>(rng: &mut R) -> MarketSentiment {
    let rsi: u32 = rng.gen_range(30..=70);
    let macd = uniform(rng, -5.0, 5.0);
    let adx: u32 = rng.gen_range(15..=40);

    let (overall, strength) = if rsi > 60 {
        let d = if macd > 0.0 {
            Direction::Bullish
        } else {
            Direction::ModeratelyBullish
        };
        (d, rng.gen_range(60..=90))
    } else if rsi < 40 {
        let d = if macd < 0.0 {
            Direction::Bearish
        } else {
            Direction::ModeratelyBearish
        };
        (d, rng.gen_range(60..=90))
    } else {
        (Direction::Neutral, rng.gen_range(40..=60))
    };

    let fii = round2(uniform(rng, -2_000.0, 2_000.0));
    let dii = round2(uniform(rng, -2_000.0, 2_000.0));

    let trend_direction = if macd > 0.0 {
        "Uptrend"
    } else if macd < 0.0 {
        "Downtrend"
    } else {
        "No Clear Trend"
    };

    MarketSentiment {
        overall,
        strength,
        technical_indicators: MarketTechnicals {
            rsi,
            macd: round2(macd),
            adx,
            trend_strength: if adx > 25 { "Strong" } else { "Weak" },
            trend_direction,
        },
        institutional_activity: InstitutionalActivity {
            fii: flow(fii),
            dii: flow(dii),
        },
        market_commentary: commentary(overall, fii, dii),
        global_cues: *pick(rng, GLOBAL_CUES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::rng;

    #[test]
    fn direction_follows_rsi_band() {
        for seed in 0..200 {
            let s = generate_sentiment(&mut rng(seed));
            let rsi = s.technical_indicators.rsi;
            match s.overall {
                Direction::Neutral => {
                    assert!((40..=60).contains(&rsi));
                    assert!((40..=60).contains(&s.strength));
                }
                Direction::Bullish | Direction::ModeratelyBullish => assert!(rsi > 60),
                Direction::Bearish | Direction::ModeratelyBearish => assert!(rsi < 40),
            }
        }
    }

    #[test]
    fn commentary_reflects_flows() {
        assert_eq!(
            commentary(Direction::Bearish, -10.0, -5.0),
            "Markets under pressure with continued selling from both FII and DII."
        );
        assert_eq!(
            commentary(Direction::ModeratelyBullish, -1.0, 3.0),
            "Markets supported by domestic institutional buying despite FII outflows."
        );
    }
}
