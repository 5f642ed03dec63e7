pub mod domain;
pub mod generate;
pub mod num;
pub mod reference;
pub mod seed;
pub mod time;

pub mod config {
    use anyhow::Context;
    use chrono::NaiveDate;
    use std::str::FromStr;

    /// What the HTTP layer does when a symbol is not in the reference table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum MissPolicy {
        /// Answer 404 with `{"error": "Stock not found"}`.
        #[default]
        NotFound,
        /// Serve the NIFTY index record through the regular generators.
        IndexFallback,
    }

    impl MissPolicy {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::NotFound => "not_found",
                Self::IndexFallback => "index_fallback",
            }
        }
    }

    #[derive(Debug, thiserror::Error, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("unknown symbol policy '{0}', expected not_found or index_fallback")]
        InvalidMissPolicy(String),
        #[error("'{0}' is not a boolean (expected true/false/1/0)")]
        InvalidBool(String),
    }

    impl FromStr for MissPolicy {
        type Err = ConfigError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "not_found" | "404" => Ok(Self::NotFound),
                "index_fallback" | "fallback" => Ok(Self::IndexFallback),
                other => Err(ConfigError::InvalidMissPolicy(other.to_string())),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub as_of_date: Option<NaiveDate>,
        pub miss_policy: MissPolicy,
        pub cors_permissive: bool,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                port: 5000,
                as_of_date: None,
                miss_policy: MissPolicy::NotFound,
                cors_permissive: true,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let mut out = Self::default();

            if let Some(s) = get("PORT") {
                out.port = s
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a port number (got '{s}')"))?;
            }

            if let Some(s) = get("STOCKSIM_AS_OF_DATE").filter(|s| !s.trim().is_empty()) {
                let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .with_context(|| format!("STOCKSIM_AS_OF_DATE must be YYYY-MM-DD (got '{s}')"))?;
                out.as_of_date = Some(date);
            }

            if let Some(s) = get("STOCKSIM_UNKNOWN_SYMBOL") {
                out.miss_policy = s.parse().context("invalid STOCKSIM_UNKNOWN_SYMBOL")?;
            }

            if let Some(s) = get("STOCKSIM_CORS_PERMISSIVE") {
                out.cors_permissive = parse_bool(&s).context("invalid STOCKSIM_CORS_PERMISSIVE")?;
            }

            out.sentry_dsn = get("SENTRY_DSN").filter(|s| !s.trim().is_empty());

            Ok(out)
        }
    }

    fn parse_bool(s: &str) -> Result<bool, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ConfigError::InvalidBool(other.to_string())),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn settings(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
            let env: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Settings::from_lookup(|k| env.get(k).cloned())
        }

        #[test]
        fn defaults_when_env_is_empty() {
            let s = settings(&[]).unwrap();
            assert_eq!(s.port, 5000);
            assert_eq!(s.miss_policy, MissPolicy::NotFound);
            assert!(s.as_of_date.is_none());
            assert!(s.cors_permissive);
        }

        #[test]
        fn parses_all_variables() {
            let s = settings(&[
                ("PORT", "8080"),
                ("STOCKSIM_AS_OF_DATE", "2026-01-05"),
                ("STOCKSIM_UNKNOWN_SYMBOL", "index_fallback"),
                ("STOCKSIM_CORS_PERMISSIVE", "false"),
            ])
            .unwrap();
            assert_eq!(s.port, 8080);
            assert_eq!(s.as_of_date, NaiveDate::from_ymd_opt(2026, 1, 5));
            assert_eq!(s.miss_policy, MissPolicy::IndexFallback);
            assert!(!s.cors_permissive);
        }

        #[test]
        fn rejects_bad_values() {
            assert!(settings(&[("PORT", "eighty")]).is_err());
            assert!(settings(&[("STOCKSIM_AS_OF_DATE", "05/01/2026")]).is_err());
            assert!(settings(&[("STOCKSIM_UNKNOWN_SYMBOL", "guess")]).is_err());
        }
    }
}
