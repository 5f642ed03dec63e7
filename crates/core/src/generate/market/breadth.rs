use rand::Rng;
use serde::Serialize;

use crate::generate::uniform;
use crate::num::round2;
use crate::time::MarketClock;

use super::share_of;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallBreadth {
    pub advances: u32,
    pub declines: u32,
    pub unchanged: u32,
    pub advance_decline_ratio: f64,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExchangeBreadth {
    pub advances: u32,
    pub declines: u32,
    pub unchanged: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Exchanges {
    pub nse: ExchangeBreadth,
    pub bse: ExchangeBreadth,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentBreadth {
    pub advances: u32,
    pub declines: u32,
    pub unchanged: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapSegments {
    pub large_cap: SegmentBreadth,
    pub mid_cap: SegmentBreadth,
    pub small_cap: SegmentBreadth,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekStats {
    #[serde(rename = "52WeekHigh")]
    pub highs: u32,
    #[serde(rename = "52WeekLow")]
    pub lows: u32,
}

/// Volumes in millions of shares, turnover in crores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeTurnover {
    pub total_volume: u32,
    pub equity_volume: u32,
    pub derivative_volume: u32,
    pub total_turnover: u32,
    pub equity_turnover: u32,
    pub derivative_turnover: u32,
    pub volume_growth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketBreadth {
    pub overall: OverallBreadth,
    pub exchanges: Exchanges,
    pub market_cap: CapSegments,
    pub week_stats: WeekStats,
    pub volume: VolumeTurnover,
    pub timestamp: String,
}

pub fn generate_breadth<R: Rng + ?Sized>(rng: &mut R, clock: &MarketClock) -> MarketBreadth {
    let total: u32 = rng.gen_range(3_800..=4_200);
    let advances = share_of(rng, total, 0.3, 0.7);
    // advances tops out at 70 % of total, so this never underflows
    let declines = total - advances - rng.gen_range(50..=150);
    let unchanged = total - advances - declines;

    let nse_advances = share_of(rng, advances, 0.4, 0.6);
    let nse_declines = share_of(rng, declines, 0.4, 0.6);
    let nse_unchanged = share_of(rng, unchanged, 0.4, 0.6);
    let nse = ExchangeBreadth {
        advances: nse_advances,
        declines: nse_declines,
        unchanged: nse_unchanged,
        total: nse_advances + nse_declines + nse_unchanged,
    };
    let bse = ExchangeBreadth {
        advances: advances - nse_advances,
        declines: declines - nse_declines,
        unchanged: unchanged - nse_unchanged,
        total: (advances - nse_advances) + (declines - nse_declines) + (unchanged - nse_unchanged),
    };

    let large_adv = share_of(rng, nse_advances, 0.3, 0.4);
    let mid_adv = share_of(rng, nse_advances, 0.3, 0.4);
    let large_dec = share_of(rng, nse_declines, 0.2, 0.3);
    let mid_dec = share_of(rng, nse_declines, 0.3, 0.4);
    let market_cap = CapSegments {
        large_cap: SegmentBreadth {
            advances: large_adv,
            declines: large_dec,
            unchanged: rng.gen_range(10..=30),
        },
        mid_cap: SegmentBreadth {
            advances: mid_adv,
            declines: mid_dec,
            unchanged: rng.gen_range(15..=40),
        },
        small_cap: SegmentBreadth {
            advances: nse_advances - large_adv - mid_adv,
            declines: nse_declines - large_dec - mid_dec,
            unchanged: rng.gen_range(20..=50),
        },
    };

    let week_stats = WeekStats {
        highs: rng.gen_range(50..=150),
        lows: rng.gen_range(30..=120),
    };

    let total_volume = rng.gen_range(15_000..=25_000);
    let equity_volume = share_of(rng, total_volume, 0.7, 0.9);
    let total_turnover = rng.gen_range(80_000..=150_000);
    let equity_turnover = share_of(rng, total_turnover, 0.6, 0.8);
    let volume = VolumeTurnover {
        total_volume,
        equity_volume,
        derivative_volume: total_volume - equity_volume,
        total_turnover,
        equity_turnover,
        derivative_turnover: total_turnover - equity_turnover,
        volume_growth: round2(uniform(rng, -10.0, 15.0)),
    };

    MarketBreadth {
        overall: OverallBreadth {
            advances,
            declines,
            unchanged,
            advance_decline_ratio: round2(f64::from(advances) / f64::from(declines)),
            total,
        },
        exchanges: Exchanges { nse, bse },
        market_cap,
        week_stats,
        volume,
        timestamp: clock.timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};

    #[test]
    fn counts_add_up() {
        let clock = MarketClock {
            as_of: day(),
            now: day().and_hms_opt(15, 30, 0).unwrap(),
        };
        for seed in 0..200 {
            let b = generate_breadth(&mut rng(seed), &clock);
            let o = &b.overall;
            assert_eq!(o.advances + o.declines + o.unchanged, o.total);
            assert!((50..=150).contains(&o.unchanged));
            assert_eq!(b.exchanges.nse.total + b.exchanges.bse.total, o.total);
            assert_eq!(
                b.volume.equity_volume + b.volume.derivative_volume,
                b.volume.total_volume
            );
            let caps = &b.market_cap;
            assert_eq!(
                caps.large_cap.advances + caps.mid_cap.advances + caps.small_cap.advances,
                b.exchanges.nse.advances
            );
        }
    }
}
