//! Query-string validation. Every rejection is a 400 with a message naming
//! the parameter.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use stocksim_core::generate::screener::ScreenerFilter;

use crate::error::ApiError;

pub type Params = HashMap<String, String>;

pub const HISTORY_DAYS: RangeInclusive<usize> = 1..=3650;
pub const FORECAST_DAYS: RangeInclusive<usize> = 1..=365;
pub const MOVER_LIMIT: RangeInclusive<usize> = 1..=15;
pub const RECOMMENDATION_COUNT: RangeInclusive<usize> = 1..=20;

fn reject(message: String) -> ApiError {
    tracing::debug!(%message, "rejected query parameter");
    ApiError::BadRequest(message)
}

pub fn bounded(
    params: &Params,
    name: &str,
    default: usize,
    range: RangeInclusive<usize>,
) -> Result<usize, ApiError> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| reject(format!("'{name}' must be a positive integer (got '{raw}')")))?;
    if !range.contains(&value) {
        return Err(reject(format!(
            "'{name}' must be between {} and {} (got {value})",
            range.start(),
            range.end()
        )));
    }
    Ok(value)
}

pub fn finite(params: &Params, name: &str, default: f64) -> Result<f64, ApiError> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(reject(format!("'{name}' must be a finite number (got '{raw}')"))),
    }
}

pub fn screener_filter(params: &Params) -> Result<ScreenerFilter, ApiError> {
    let defaults = ScreenerFilter::default();
    let filter = ScreenerFilter {
        min_pe: finite(params, "min_pe", defaults.min_pe)?,
        max_pe: finite(params, "max_pe", defaults.max_pe)?,
        min_market_cap: finite(params, "min_market_cap", defaults.min_market_cap)?,
        sector: params
            .get("sector")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };
    if filter.min_pe > filter.max_pe {
        return Err(reject(format!(
            "'min_pe' ({}) must not exceed 'max_pe' ({})",
            filter.min_pe, filter.max_pe
        )));
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn bounded_defaults_and_limits() {
        assert_eq!(bounded(&params(&[]), "days", 365, HISTORY_DAYS).unwrap(), 365);
        assert_eq!(bounded(&params(&[("days", "5")]), "days", 365, HISTORY_DAYS).unwrap(), 5);
        assert!(bounded(&params(&[("days", "0")]), "days", 365, HISTORY_DAYS).is_err());
        assert!(bounded(&params(&[("days", "3651")]), "days", 365, HISTORY_DAYS).is_err());
        assert!(bounded(&params(&[("days", "-3")]), "days", 365, HISTORY_DAYS).is_err());
        assert!(bounded(&params(&[("limit", "ten")]), "limit", 5, MOVER_LIMIT).is_err());
    }

    #[test]
    fn screener_rejects_non_finite_and_inverted_bounds() {
        assert!(screener_filter(&params(&[("min_pe", "NaN")])).is_err());
        assert!(screener_filter(&params(&[("max_pe", "inf")])).is_err());
        assert!(screener_filter(&params(&[("min_pe", "30"), ("max_pe", "20")])).is_err());

        let f = screener_filter(&params(&[("min_pe", "18"), ("sector", " IT ")])).unwrap();
        assert_eq!(f.min_pe, 18.0);
        assert_eq!(f.max_pe, 100.0);
        assert_eq!(f.sector.as_deref(), Some("IT"));
    }
}
