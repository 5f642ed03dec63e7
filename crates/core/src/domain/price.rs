use chrono::NaiveDate;
use serde::Serialize;

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// One forecast day. `lower_bound <= price <= upper_bound` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence: f64,
}
