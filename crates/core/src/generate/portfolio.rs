use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::num::round2;

use super::uniform;

struct Position {
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    quantity: u32,
    avg_cost: f64,
}

const POSITIONS: &[Position] = &[
    Position {
        symbol: "RELIANCE",
        name: "Reliance Industries Ltd.",
        sector: "Energy",
        quantity: 10,
        avg_cost: 2500.50,
    },
    Position {
        symbol: "TCS",
        name: "Tata Consultancy Services Ltd.",
        sector: "IT",
        quantity: 5,
        avg_cost: 3400.75,
    },
    Position {
        symbol: "HDFCBANK",
        name: "HDFC Bank Ltd.",
        sector: "Banking",
        quantity: 15,
        avg_cost: 1600.25,
    },
    Position {
        symbol: "INFY",
        name: "Infosys Ltd.",
        sector: "IT",
        quantity: 20,
        avg_cost: 1450.00,
    },
];

const PERFORMANCE_DAYS: i64 = 180;
const STARTING_VALUE: f64 = 100_000.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub quantity: u32,
    pub avg_cost: f64,
    pub current_price: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub invested_amount: f64,
    pub current_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_investment: f64,
    pub total_value: f64,
    pub day_change: f64,
    pub day_change_percent: f64,
    pub overall_gain: f64,
    pub overall_gain_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
    pub summary: PortfolioSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuePoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    pub historical_value: Vec<ValuePoint>,
}

/// The demo portfolio: four fixed positions revalued around their cost basis.
pub fn generate_portfolio<R: Rng + ?Sized>(rng: &mut R) -> Portfolio {
    let holdings: Vec<Holding> = POSITIONS
        .iter()
        .zip(1..)
        .map(|(p, id)| {
            let current_price = round2(p.avg_cost * (1.0 + uniform(rng, -0.2, 0.3)));
            let day_change_percent = round2(uniform(rng, -2.0, 2.0));
            let qty = f64::from(p.quantity);
            Holding {
                id,
                symbol: p.symbol,
                name: p.name,
                sector: p.sector,
                quantity: p.quantity,
                avg_cost: p.avg_cost,
                current_price,
                day_change: round2(current_price * day_change_percent / 100.0),
                day_change_percent,
                invested_amount: round2(qty * p.avg_cost),
                current_value: round2(qty * current_price),
            }
        })
        .collect();

    let total_investment = round2(holdings.iter().map(|h| h.invested_amount).sum());
    let total_value = round2(holdings.iter().map(|h| h.current_value).sum());
    let day_change = round2(uniform(rng, -5_000.0, 5_000.0));
    let overall_gain = round2(total_value - total_investment);

    Portfolio {
        summary: PortfolioSummary {
            total_investment,
            total_value,
            day_change,
            day_change_percent: round2(day_change / total_value * 100.0),
            overall_gain,
            overall_gain_percent: round2(overall_gain / total_investment * 100.0),
        },
        holdings,
    }
}

/// 180 daily portfolio values ending on `as_of`, compounding from 100 000.
pub fn generate_performance<R: Rng + ?Sized>(rng: &mut R, as_of: NaiveDate) -> PortfolioPerformance {
    let mut value = STARTING_VALUE;
    let historical_value = (0..PERFORMANCE_DAYS)
        .map(|i| {
            let date = as_of - Duration::days(PERFORMANCE_DAYS - 1 - i);
            value *= 1.0 + uniform(rng, -0.015, 0.018);
            ValuePoint {
                date: date.format("%Y-%m-%d").to_string(),
                value: round2(value),
            }
        })
        .collect();
    PortfolioPerformance { historical_value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};

    #[test]
    fn summary_totals_match_holdings() {
        let p = generate_portfolio(&mut rng(3));
        assert_eq!(p.holdings.len(), 4);
        assert_eq!(p.holdings[0].id, 1);
        assert_eq!(p.summary.total_investment, 95_012.5);
        let value: f64 = p.holdings.iter().map(|h| h.current_value).sum();
        assert!((p.summary.total_value - value).abs() < 0.01);
        for h in &p.holdings {
            assert!(h.current_price >= h.avg_cost * 0.8 - 0.01);
            assert!(h.current_price <= h.avg_cost * 1.3 + 0.01);
        }
    }

    #[test]
    fn performance_covers_half_a_year_ending_today() {
        let perf = generate_performance(&mut rng(9), day());
        let points = &perf.historical_value;
        assert_eq!(points.len(), 180);
        assert_eq!(points.last().unwrap().date, "2026-01-05");
        assert_eq!(points[0].date, "2025-07-10");
        let first = points[0].value;
        assert!((98_500.0..=101_800.0).contains(&first));
    }
}
