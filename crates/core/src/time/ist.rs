use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const IST_OFFSET_SECS: i32 = (5 * 60 + 30) * 60;

const IST: FixedOffset = match FixedOffset::east_opt(IST_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("invalid IST offset"),
};

/// Time of day stamped on every payload when the trading day is pinned.
const PINNED_TIME: NaiveTime = match NaiveTime::from_hms_opt(15, 30, 0) {
    Some(t) => t,
    None => panic!("invalid market close time"),
};

/// "Now" as seen by the simulated exchange: Indian Standard Time, naive.
///
/// `as_of` is the calendar day every generator treats as "today". It rolls
/// over at IST midnight unless pinned. A pinned clock reads the market close
/// of that day, so its timestamps are as stable as the rest of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketClock {
    pub as_of: NaiveDate,
    pub now: NaiveDateTime,
}

impl MarketClock {
    pub fn at(now_utc: DateTime<Utc>, pinned: Option<NaiveDate>) -> Self {
        let now = now_utc.with_timezone(&IST).naive_local();
        match pinned {
            Some(as_of) => Self {
                as_of,
                now: as_of.and_time(PINNED_TIME),
            },
            None => Self {
                as_of: now.date(),
                now,
            },
        }
    }

    pub fn current(pinned: Option<NaiveDate>) -> Self {
        Self::at(Utc::now(), pinned)
    }

    /// ISO-8601 local timestamp with microseconds, no offset.
    pub fn timestamp(&self) -> String {
        self.now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// `YYYY-MM-DD HH:MM:SS`, the format used for `lastUpdated` fields.
    pub fn display_time(&self) -> String {
        self.now.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn date_string(&self) -> String {
        self.as_of.format("%Y-%m-%d").to_string()
    }
}

pub fn resolve_as_of_date(
    as_of_date_arg: Option<&str>,
    now_utc: DateTime<Utc>,
) -> anyhow::Result<NaiveDate> {
    let pinned = match as_of_date_arg {
        Some(s) => Some(
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("as-of date must be YYYY-MM-DD (got '{s}')"))?,
        ),
        None => None,
    };
    Ok(MarketClock::at(now_utc, pinned).as_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rolls_over_at_ist_midnight() {
        // 2026-01-04 18:29 UTC = 23:59 IST
        let before = Utc.with_ymd_and_hms(2026, 1, 4, 18, 29, 0).unwrap();
        assert_eq!(
            MarketClock::at(before, None).as_of,
            NaiveDate::from_ymd_opt(2026, 1, 4).unwrap()
        );

        // 2026-01-04 18:30 UTC = 00:00 IST next day
        let after = Utc.with_ymd_and_hms(2026, 1, 4, 18, 30, 0).unwrap();
        assert_eq!(
            MarketClock::at(after, None).as_of,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
        );
    }

    #[test]
    fn pinned_date_reads_market_close() {
        let pinned = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let morning = Utc.with_ymd_and_hms(2026, 3, 10, 4, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2026, 3, 10, 14, 59, 59).unwrap();
        let clock = MarketClock::at(morning, Some(pinned));
        assert_eq!(clock.as_of, pinned);
        assert_eq!(clock.timestamp(), "2025-12-31T15:30:00.000000");
        assert_eq!(clock, MarketClock::at(evening, Some(pinned)));
    }

    #[test]
    fn unpinned_clock_uses_ist_wall_time() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 4, 0, 0).unwrap();
        assert_eq!(
            MarketClock::at(now, None).display_time(),
            "2026-01-05 09:30:00"
        );
    }

    #[test]
    fn resolves_explicit_argument() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        let d = resolve_as_of_date(Some("2024-02-29"), now).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(resolve_as_of_date(Some("29-02-2024"), now).is_err());
    }
}
