//! Sector-aware fundamental metrics and a 0..=100 score.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::domain::{SectorClass, StockRef};
use crate::num::round2;
use crate::seed::SymbolSeed;

use super::{between, uniform};

type Range = (f64, f64);

/// Sampling ranges for one sector class.
#[derive(Debug, Clone, Copy)]
struct SectorRanges {
    pe: Range,
    pb: Range,
    ps: Range,
    ev_ebitda: Range,
    peg: Range,
    debt_to_equity: Range,
    current_ratio: Range,
    quick_ratio: Range,
    interest_coverage: Range,
    gross_margin: Range,
    operating_margin: Range,
    net_margin: Range,
    ebitda_margin: Range,
    dividend_yield: Range,
    dividend_payout: Range,
    revenue_growth: Range,
}

const DEFAULT_RANGES: SectorRanges = SectorRanges {
    pe: (15.0, 25.0),
    pb: (2.0, 4.0),
    ps: (1.0, 3.0),
    ev_ebitda: (8.0, 16.0),
    peg: (0.8, 1.5),
    debt_to_equity: (0.3, 1.5),
    current_ratio: (1.3, 2.5),
    quick_ratio: (1.0, 2.0),
    interest_coverage: (6.0, 15.0),
    gross_margin: (30.0, 60.0),
    operating_margin: (10.0, 25.0),
    net_margin: (8.0, 18.0),
    ebitda_margin: (15.0, 30.0),
    dividend_yield: (1.0, 3.5),
    dividend_payout: (20.0, 50.0),
    revenue_growth: (-5.0, 30.0),
};

fn ranges(class: SectorClass) -> SectorRanges {
    match class {
        SectorClass::InformationTechnology => SectorRanges {
            pe: (20.0, 35.0),
            pb: (4.0, 8.0),
            ps: (3.0, 7.0),
            ev_ebitda: (15.0, 25.0),
            peg: (1.2, 2.0),
            debt_to_equity: (0.1, 0.8),
            current_ratio: (1.8, 3.5),
            quick_ratio: (1.5, 3.0),
            interest_coverage: (10.0, 30.0),
            gross_margin: (50.0, 80.0),
            operating_margin: (20.0, 35.0),
            net_margin: (15.0, 30.0),
            ebitda_margin: (25.0, 40.0),
            dividend_yield: (0.5, 2.0),
            dividend_payout: (10.0, 30.0),
            revenue_growth: (5.0, 40.0),
        },
        SectorClass::FinancialServices => SectorRanges {
            pe: (10.0, 18.0),
            pb: (1.0, 3.0),
            ps: (2.0, 4.0),
            ev_ebitda: (8.0, 15.0),
            peg: (0.8, 1.5),
            debt_to_equity: (1.5, 4.0),
            current_ratio: (1.0, 1.5),
            quick_ratio: (0.8, 1.3),
            interest_coverage: (3.0, 10.0),
            gross_margin: (60.0, 85.0),
            operating_margin: (25.0, 40.0),
            net_margin: (15.0, 25.0),
            ebitda_margin: (30.0, 45.0),
            dividend_yield: (2.0, 5.0),
            dividend_payout: (30.0, 60.0),
            ..DEFAULT_RANGES
        },
        SectorClass::Healthcare => SectorRanges {
            pe: (18.0, 30.0),
            pb: (3.0, 6.0),
            ps: (2.0, 6.0),
            ev_ebitda: (12.0, 20.0),
            peg: (1.0, 1.8),
            debt_to_equity: (0.3, 1.2),
            current_ratio: (1.5, 3.0),
            quick_ratio: (1.2, 2.5),
            interest_coverage: (8.0, 20.0),
            gross_margin: (45.0, 75.0),
            operating_margin: (15.0, 30.0),
            net_margin: (10.0, 25.0),
            ebitda_margin: (20.0, 35.0),
            dividend_yield: (1.0, 3.0),
            dividend_payout: (20.0, 40.0),
            ..DEFAULT_RANGES
        },
        SectorClass::ConsumerGoods => SectorRanges {
            pe: (15.0, 25.0),
            pb: (2.0, 5.0),
            ps: (1.0, 3.0),
            ev_ebitda: (10.0, 18.0),
            peg: (0.9, 1.6),
            gross_margin: (30.0, 50.0),
            operating_margin: (8.0, 20.0),
            net_margin: (5.0, 15.0),
            ebitda_margin: (12.0, 25.0),
            dividend_yield: (1.5, 4.0),
            dividend_payout: (30.0, 50.0),
            ..DEFAULT_RANGES
        },
        SectorClass::Energy => SectorRanges {
            pe: (8.0, 15.0),
            pb: (1.0, 2.5),
            ps: (0.5, 2.0),
            ev_ebitda: (5.0, 12.0),
            peg: (0.6, 1.3),
            debt_to_equity: (0.5, 2.0),
            current_ratio: (1.2, 2.0),
            quick_ratio: (0.9, 1.5),
            interest_coverage: (4.0, 12.0),
            gross_margin: (20.0, 40.0),
            operating_margin: (8.0, 18.0),
            net_margin: (5.0, 12.0),
            ebitda_margin: (15.0, 25.0),
            dividend_yield: (3.0, 7.0),
            dividend_payout: (40.0, 70.0),
            ..DEFAULT_RANGES
        },
        SectorClass::BasicMaterials => SectorRanges {
            pe: (12.0, 20.0),
            pb: (1.5, 3.0),
            ps: (1.0, 2.5),
            ev_ebitda: (7.0, 14.0),
            peg: (0.7, 1.4),
            ..DEFAULT_RANGES
        },
        SectorClass::Other => DEFAULT_RANGES,
    }
}

/// Sector averages the score compares against: (P/E, P/B, net margin %).
pub fn sector_averages(class: SectorClass) -> (f64, f64, f64) {
    match class {
        SectorClass::InformationTechnology => (25.0, 5.0, 20.0),
        SectorClass::FinancialServices => (15.0, 1.5, 22.0),
        SectorClass::Healthcare => (22.0, 4.0, 18.0),
        SectorClass::ConsumerGoods => (20.0, 3.0, 10.0),
        SectorClass::Energy => (12.0, 1.5, 8.0),
        SectorClass::BasicMaterials => (16.0, 2.0, 12.0),
        SectorClass::Other => (18.0, 2.5, 15.0),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub valuation: Valuation,
    pub financial_health: FinancialHealth,
    pub profitability: Profitability,
    pub growth: Growth,
    pub dividend: Dividend,
    pub risks: Risks,
    pub quarterly_results: Vec<QuarterResult>,
    pub historical_data: Vec<YearResult>,
    pub analyst_ratings: AnalystRatings,
    #[serde(rename = "fundamental_score")]
    pub fundamental_score: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub pe: f64,
    pub pb: f64,
    pub ps: f64,
    pub peg: f64,
    pub ev_to_ebitda: f64,
    pub market_cap: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialHealth {
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub interest_coverage: f64,
    pub total_debt: f64,
    pub total_cash: f64,
    pub operating_cash_flow: f64,
    pub free_cash_flow: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profitability {
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub ebitda_margin: f64,
    pub return_on_equity: f64,
    pub return_on_assets: f64,
    pub return_on_invested_capital: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
    pub revenue_growth: f64,
    pub earnings_growth: f64,
    pub dividend_growth: f64,
    #[serde(rename = "5YrRevenueCAGR")]
    pub revenue_cagr_5y: f64,
    #[serde(rename = "5YrEPSCAGR")]
    pub eps_cagr_5y: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dividend {
    #[serde(rename = "yield")]
    pub yield_pct: f64,
    pub payout: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Risks {
    pub beta: f64,
    pub volatility: f64,
    pub rsquared: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuarterResult {
    pub quarter: String,
    pub revenue: f64,
    pub profit: f64,
    pub eps: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearResult {
    pub year: String,
    pub revenue: f64,
    pub profit: f64,
    pub eps: f64,
    pub dividend: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Consensus {
    Buy,
    Hold,
    Sell,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystRatings {
    pub consensus: Consensus,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub target_price: f64,
}

/// The handful of metrics the score looks at.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub pe: f64,
    pub pb: f64,
    pub peg: f64,
    pub debt_to_equity: f64,
    pub current_ratio: f64,
    pub free_cash_flow: f64,
    pub return_on_equity: f64,
    pub net_margin: f64,
    pub revenue_growth: f64,
    pub earnings_growth: f64,
    pub dividend_yield: f64,
    pub dividend_years: u32,
    pub consensus: Consensus,
    pub beta: f64,
}

impl Fundamentals {
    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs {
            pe: self.valuation.pe,
            pb: self.valuation.pb,
            peg: self.valuation.peg,
            debt_to_equity: self.financial_health.debt_to_equity,
            current_ratio: self.financial_health.current_ratio,
            free_cash_flow: self.financial_health.free_cash_flow,
            return_on_equity: self.profitability.return_on_equity,
            net_margin: self.profitability.net_margin,
            revenue_growth: self.growth.revenue_growth,
            earnings_growth: self.growth.earnings_growth,
            dividend_yield: self.dividend.yield_pct,
            dividend_years: self.dividend.years,
            consensus: self.analyst_ratings.consensus,
            beta: self.risks.beta,
        }
    }
}

/// Starts at 50, adds or subtracts fixed amounts per metric, clamps to 0..=100.
pub fn fundamental_score(m: &ScoreInputs, class: SectorClass) -> u32 {
    let (avg_pe, avg_pb, avg_margin) = sector_averages(class);
    let mut score: i32 = 50;

    score += tiered(m.pe < avg_pe, m.pe > avg_pe * 1.5, 5, 5);
    score += tiered(m.pb < avg_pb, m.pb > avg_pb * 1.5, 3, 3);
    score += tiered(m.peg < 1.0, m.peg > 2.0, 5, 5);

    score += tiered(m.debt_to_equity < 0.5, m.debt_to_equity > 2.0, 4, 4);
    score += tiered(m.current_ratio > 2.0, m.current_ratio < 1.0, 3, 5);
    score += if m.free_cash_flow > 0.0 { 5 } else { -5 };

    score += tiered(m.return_on_equity > 15.0, m.return_on_equity < 5.0, 5, 3);
    score += tiered(m.net_margin > avg_margin, m.net_margin < avg_margin * 0.5, 4, 4);

    score += tiered(m.revenue_growth > 15.0, m.revenue_growth < 0.0, 5, 5);
    score += tiered(m.earnings_growth > 20.0, m.earnings_growth < 0.0, 6, 6);

    if m.dividend_yield > 3.0 {
        score += 3;
    }
    if m.dividend_years > 10 {
        score += 3;
    }

    score += match m.consensus {
        Consensus::Buy => 4,
        Consensus::Sell => -4,
        Consensus::Hold => 0,
    };

    score += tiered(m.beta < 0.8, m.beta > 1.5, 2, 3);

    score.clamp(0, 100) as u32
}

fn tiered(good: bool, bad: bool, bonus: i32, penalty: i32) -> i32 {
    if good {
        bonus
    } else if bad {
        -penalty
    } else {
        0
    }
}

pub fn generate_fundamentals<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    as_of: NaiveDate,
) -> Fundamentals {
    let class = stock.sector_class();
    let r = ranges(class);
    let price = round2(SymbolSeed::of(stock.symbol).base_price() + uniform(rng, -50.0, 50.0));

    let (pe_base, pb_base, ps_base, ev_base, peg_base) = (
        between(rng, r.pe),
        between(rng, r.pb),
        between(rng, r.ps),
        between(rng, r.ev_ebitda),
        between(rng, r.peg),
    );
    let price_trend = uniform(rng, -0.2, 0.3);
    let valuation_shares = rng.gen_range(100u32..=5000) as f64 * 1_000_000.0;
    let market_cap = price * valuation_shares;
    let valuation = Valuation {
        pe: (pe_base * (1.0 + price_trend)).max(5.0),
        pb: (pb_base * (1.0 + price_trend)).max(0.5),
        ps: (ps_base * (1.0 + price_trend)).max(0.3),
        peg: (peg_base * (1.0 + 0.5 * price_trend)).max(0.5),
        ev_to_ebitda: (ev_base * (1.0 + price_trend)).max(3.0),
        market_cap,
    };

    let debt_to_equity = between(rng, r.debt_to_equity);
    let current_ratio = between(rng, r.current_ratio);
    let quick_ratio = between(rng, r.quick_ratio);
    let interest_coverage = between(rng, r.interest_coverage);
    let equity = market_cap / (1.0 + debt_to_equity);
    let total_cash = market_cap * uniform(rng, 0.05, 0.2);
    let operating_cash_flow = market_cap * uniform(rng, 0.05, 0.15);
    let capex = operating_cash_flow * uniform(rng, 0.2, 0.5);
    let financial_health = FinancialHealth {
        debt_to_equity,
        current_ratio,
        quick_ratio,
        interest_coverage,
        total_debt: equity * debt_to_equity,
        total_cash,
        operating_cash_flow,
        free_cash_flow: operating_cash_flow - capex,
    };

    let net_margin = between(rng, r.net_margin);
    let operating_margin = between(rng, r.operating_margin);
    let roa = net_margin * uniform(rng, 0.5, 0.8);
    let profitability = Profitability {
        gross_margin: between(rng, r.gross_margin),
        operating_margin,
        net_margin,
        ebitda_margin: between(rng, r.ebitda_margin),
        return_on_equity: roa * (1.0 + debt_to_equity),
        return_on_assets: roa,
        return_on_invested_capital: operating_margin * uniform(rng, 0.6, 0.9),
    };

    let revenue_growth = between(rng, r.revenue_growth);
    let earnings_growth = revenue_growth * uniform(rng, 0.8, 1.5);
    let dividend_growth = if earnings_growth > 0.0 {
        earnings_growth * uniform(rng, 0.3, 0.8)
    } else {
        0.0
    };
    let growth = Growth {
        revenue_growth,
        earnings_growth,
        dividend_growth,
        revenue_cagr_5y: revenue_growth * uniform(rng, 0.6, 1.2),
        eps_cagr_5y: earnings_growth * uniform(rng, 0.7, 1.3),
    };

    let dividend = Dividend {
        yield_pct: between(rng, r.dividend_yield),
        payout: between(rng, r.dividend_payout),
        years: rng.gen_range(0..=20),
    };

    let risks = Risks {
        beta: uniform(rng, 0.6, 1.5),
        volatility: uniform(rng, 15.0, 45.0),
        rsquared: uniform(rng, 0.3, 0.8),
    };

    let base_quarter_revenue = market_cap * uniform(rng, 0.02, 0.1);
    let quarterly_results: Vec<QuarterResult> = recent_quarters(as_of)
        .into_iter()
        .enumerate()
        .map(|(i, quarter)| {
            let revenue = base_quarter_revenue * (1.0 + uniform(rng, -0.05, 0.15) * i as f64);
            let profit = revenue * net_margin / 100.0;
            QuarterResult {
                quarter,
                revenue,
                profit,
                eps: profit / valuation_shares * 10_000_000.0,
            }
        })
        .collect();

    let base_annual_revenue = quarterly_results
        .last()
        .map_or(base_quarter_revenue, |q| q.revenue)
        * 4.0
        * 0.85;
    let first_year = as_of.year() - 5;
    // Grown forward from the oldest year, listed newest first.
    let mut historical_data: Vec<YearResult> = (0..5)
        .map(|i| {
            let year_growth = growth.revenue_cagr_5y / 100.0 * (1.0 + uniform(rng, -0.3, 0.3));
            let revenue = base_annual_revenue * (1.0 + year_growth).powi(i);
            let profit = revenue * (net_margin - uniform(rng, -5.0, 5.0)) / 100.0;
            let eps = profit / (valuation_shares * (1.0 - 0.02 * i as f64));
            YearResult {
                year: (first_year + i).to_string(),
                revenue,
                profit,
                eps,
                dividend: eps * dividend.payout / 100.0,
            }
        })
        .collect();
    historical_data.reverse();

    let analyst_ratings = analyst_ratings(rng, price);

    let mut out = Fundamentals {
        symbol: stock.symbol.to_string(),
        name: stock.name.to_string(),
        sector: stock.sector.to_string(),
        price,
        valuation,
        financial_health,
        profitability,
        growth,
        dividend,
        risks,
        quarterly_results,
        historical_data,
        analyst_ratings,
        fundamental_score: 0,
    };
    out.fundamental_score = fundamental_score(&out.score_inputs(), class);
    out
}

fn analyst_ratings<R: Rng + ?Sized>(rng: &mut R, price: f64) -> AnalystRatings {
    let buy: u32 = rng.gen_range(0..=15);
    let hold: u32 = rng.gen_range(0..=10);
    let sell: u32 = rng.gen_range(0..=5);
    let total = (buy + hold + sell) as f64;

    let consensus = if total == 0.0 {
        Consensus::Hold
    } else if buy as f64 / total > 0.6 {
        Consensus::Buy
    } else if sell as f64 / total > 0.4 {
        Consensus::Sell
    } else {
        Consensus::Hold
    };

    let multiplier = match consensus {
        Consensus::Buy => uniform(rng, 1.05, 1.25),
        Consensus::Sell => uniform(rng, 0.75, 0.95),
        Consensus::Hold => uniform(rng, 0.9, 1.1),
    };

    AnalystRatings {
        consensus,
        buy,
        hold,
        sell,
        target_price: price * multiplier,
    }
}

/// Labels of the four completed Indian fiscal quarters before `as_of`,
/// oldest first. The fiscal year starts in April and is named after the
/// calendar year it ends in.
pub fn recent_quarters(as_of: NaiveDate) -> Vec<String> {
    // (fiscal year, quarter 1..=4) of the quarter containing as_of
    let (mut fy, mut q) = match as_of.month() {
        4..=6 => (as_of.year() + 1, 1),
        7..=9 => (as_of.year() + 1, 2),
        10..=12 => (as_of.year() + 1, 3),
        _ => (as_of.year(), 4),
    };

    let mut out = Vec::with_capacity(4);
    for _ in 0..4 {
        if q == 1 {
            q = 4;
            fy -= 1;
        } else {
            q -= 1;
        }
        out.push(format!("Q{q} FY{:02}", fy.rem_euclid(100)));
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use crate::reference::ReferenceTable;
    use proptest::prelude::*;

    #[test]
    fn quarter_labels_follow_indian_fiscal_year() {
        // Jan 2026 is Q4 FY26, so the last completed quarter is Q3 FY26.
        assert_eq!(
            recent_quarters(day()),
            vec!["Q4 FY25", "Q1 FY26", "Q2 FY26", "Q3 FY26"]
        );
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            recent_quarters(may),
            vec!["Q1 FY24", "Q2 FY24", "Q3 FY24", "Q4 FY24"]
        );
    }

    #[test]
    fn derived_quantities_are_consistent() {
        let table = ReferenceTable::builtin();
        for symbol in ["TCS", "HDFCBANK", "CIPLA", "DABUR", "NTPC", "TATASTEEL", "LT"] {
            let stock = table.lookup(symbol).found().unwrap();
            let f = generate_fundamentals(&mut rng(42), stock, day());

            let v = &f.valuation;
            assert!(v.pe >= 5.0 && v.pb >= 0.5 && v.ps >= 0.3 && v.ev_to_ebitda >= 3.0);
            assert!(v.peg >= 0.5);

            let h = &f.financial_health;
            let equity = v.market_cap / (1.0 + h.debt_to_equity);
            assert!((h.total_debt - equity * h.debt_to_equity).abs() < 1e-3 * v.market_cap);
            assert!(h.free_cash_flow > 0.0 && h.free_cash_flow < h.operating_cash_flow);

            assert!(f.fundamental_score <= 100);
            assert_eq!(f.quarterly_results.len(), 4);
            assert_eq!(f.historical_data.len(), 5);
            let years: Vec<&str> = f.historical_data.iter().map(|y| y.year.as_str()).collect();
            assert_eq!(years, ["2025", "2024", "2023", "2022", "2021"]);
        }
    }

    #[test]
    fn it_sector_uses_it_ranges() {
        let table = ReferenceTable::builtin();
        let infy = table.lookup("INFY").found().unwrap();
        for seed in 0..20 {
            let f = generate_fundamentals(&mut rng(seed), infy, day());
            assert!(f.growth.revenue_growth >= 5.0);
            assert!(f.financial_health.debt_to_equity <= 0.8);
            assert!((0.5..=2.0).contains(&f.dividend.yield_pct));
        }
    }

    #[test]
    fn score_follows_adjustments() {
        let strong = ScoreInputs {
            pe: 10.0,
            pb: 1.0,
            peg: 0.7,
            debt_to_equity: 0.2,
            current_ratio: 2.5,
            free_cash_flow: 1.0,
            return_on_equity: 20.0,
            net_margin: 30.0,
            revenue_growth: 20.0,
            earnings_growth: 25.0,
            dividend_yield: 4.0,
            dividend_years: 15,
            consensus: Consensus::Buy,
            beta: 0.7,
        };
        assert_eq!(fundamental_score(&strong, SectorClass::Other), 100);

        let weak = ScoreInputs {
            pe: 60.0,
            pb: 9.0,
            peg: 3.0,
            debt_to_equity: 3.0,
            current_ratio: 0.5,
            free_cash_flow: -1.0,
            return_on_equity: 1.0,
            net_margin: 1.0,
            revenue_growth: -3.0,
            earnings_growth: -3.0,
            dividend_yield: 0.0,
            dividend_years: 0,
            consensus: Consensus::Sell,
            beta: 1.8,
        };
        assert_eq!(fundamental_score(&weak, SectorClass::Other), 0);

        let neutral = ScoreInputs {
            pe: 20.0,
            pb: 3.0,
            peg: 1.5,
            debt_to_equity: 1.0,
            current_ratio: 1.5,
            free_cash_flow: 1.0,
            return_on_equity: 10.0,
            net_margin: 10.0,
            revenue_growth: 5.0,
            earnings_growth: 5.0,
            dividend_yield: 2.0,
            dividend_years: 5,
            consensus: Consensus::Hold,
            beta: 1.0,
        };
        // only the free-cash-flow bonus applies
        assert_eq!(fundamental_score(&neutral, SectorClass::Other), 55);
    }

    fn consensus() -> impl Strategy<Value = Consensus> {
        prop_oneof![Just(Consensus::Buy), Just(Consensus::Hold), Just(Consensus::Sell)]
    }

    proptest! {
        #[test]
        fn score_is_clamped(
            pe in -100.0f64..500.0,
            pb in -10.0f64..50.0,
            peg in -5.0f64..10.0,
            de in 0.0f64..10.0,
            cr in 0.0f64..10.0,
            fcf in -1e12f64..1e12,
            roe in -50.0f64..100.0,
            nm in -50.0f64..100.0,
            rg in -50.0f64..100.0,
            eg in -50.0f64..100.0,
            dy in 0.0f64..15.0,
            years in 0u32..40,
            consensus in consensus(),
            beta in 0.0f64..3.0,
        ) {
            let inputs = ScoreInputs {
                pe, pb, peg,
                debt_to_equity: de,
                current_ratio: cr,
                free_cash_flow: fcf,
                return_on_equity: roe,
                net_margin: nm,
                revenue_growth: rg,
                earnings_growth: eg,
                dividend_yield: dy,
                dividend_years: years,
                consensus,
                beta,
            };
            for class in [SectorClass::InformationTechnology, SectorClass::Energy, SectorClass::Other] {
                prop_assert!(fundamental_score(&inputs, class) <= 100);
            }
        }
    }
}
