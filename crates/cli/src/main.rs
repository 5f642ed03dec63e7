use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use stocksim_core::config::Settings;
use stocksim_core::domain::{Lookup, StockRef};
use stocksim_core::generate::{fundamentals, history, market, news, prediction, technical};
use stocksim_core::reference::ReferenceTable;
use stocksim_core::seed::{SeedScope, Stream};
use stocksim_core::time::ist::resolve_as_of_date;
use stocksim_core::time::MarketClock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "stocksim_cli", about = "Export generator payloads as JSON fixtures")]
struct Args {
    /// Trading day treated as "today" (YYYY-MM-DD). Defaults to the current IST date.
    #[arg(long, global = true)]
    as_of_date: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Daily OHLCV series ending on the as-of date.
    History {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 365, value_parser = clap::value_parser!(u16).range(1..=3650))]
        days: u16,
    },
    /// Forward price forecast with recommendation.
    Predict {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..=365))]
        days: u16,
    },
    Fundamentals {
        #[arg(long)]
        symbol: String,
    },
    News {
        #[arg(long)]
        symbol: String,
    },
    Technical {
        #[arg(long)]
        symbol: String,
    },
    /// Market overview with indices, sectors, breadth, movers and sentiment.
    Overview,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let pinned = match args.as_of_date.as_deref() {
        Some(s) => Some(resolve_as_of_date(Some(s), chrono::Utc::now()).context("--as-of-date")?),
        None => settings.as_of_date,
    };
    let clock = MarketClock::current(pinned);
    let table = ReferenceTable::builtin();

    let result = export(&args.command, &table, &clock, args.pretty);
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
    }
    let json = result?;
    println!("{json}");
    Ok(())
}

fn export(
    command: &Command,
    table: &ReferenceTable,
    clock: &MarketClock,
    pretty: bool,
) -> anyhow::Result<String> {
    let scope = SeedScope::new(clock.as_of);
    tracing::info!(as_of_date = %clock.as_of, ?command, "exporting fixture");

    match command {
        Command::History { symbol, days } => {
            let stock = resolve(table, symbol)?;
            let mut rng = scope.rng(Stream::History, stock.symbol);
            let days = usize::from(*days);
            let points = history::generate_history(&mut rng, stock.symbol, days, clock.as_of);
            to_json(&points, pretty)
        }
        Command::Predict { symbol, days } => {
            let stock = resolve(table, symbol)?;
            let mut rng = scope.rng(Stream::Forecast, stock.symbol);
            let curated = table.override_for(stock.symbol);
            let forecast =
                prediction::generate_prediction(&mut rng, stock, curated, usize::from(*days), clock);
            to_json(&forecast, pretty)
        }
        Command::Fundamentals { symbol } => {
            let stock = resolve(table, symbol)?;
            let mut rng = scope.rng(Stream::Fundamentals, stock.symbol);
            to_json(&fundamentals::generate_fundamentals(&mut rng, stock, clock.as_of), pretty)
        }
        Command::News { symbol } => {
            let stock = resolve(table, symbol)?;
            let mut rng = scope.rng(Stream::News, stock.symbol);
            let feed = news::generate_news(&mut rng, stock, clock)
                .with_context(|| format!("news generation failed for {}", stock.symbol))?;
            to_json(&feed, pretty)
        }
        Command::Technical { symbol } => {
            let stock = resolve(table, symbol)?;
            let mut rng = scope.rng(Stream::Technical, stock.symbol);
            to_json(&technical::generate_technical(&mut rng, stock, clock), pretty)
        }
        Command::Overview => {
            let mut rng = scope.rng(Stream::Market, "overview");
            to_json(&market::generate_overview(&mut rng, table.all(), clock), pretty)
        }
    }
}

fn resolve<'a>(table: &'a ReferenceTable, symbol: &str) -> anyhow::Result<&'a StockRef> {
    match table.lookup(symbol) {
        Lookup::Found(stock) => Ok(stock),
        Lookup::NotFound => anyhow::bail!("unknown symbol '{symbol}'"),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("serialize payload")
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock() -> MarketClock {
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        MarketClock {
            as_of: day,
            now: day.and_hms_opt(9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn unknown_symbol_fails() {
        let table = ReferenceTable::builtin();
        let cmd = Command::Fundamentals {
            symbol: "UNKNOWN123".to_string(),
        };
        let err = export(&cmd, &table, &clock(), false).unwrap_err();
        assert!(err.to_string().contains("UNKNOWN123"));
    }

    #[test]
    fn history_export_is_a_json_array() {
        let table = ReferenceTable::builtin();
        let cmd = Command::History {
            symbol: "infy".to_string(),
            days: 3,
        };
        let json = export(&cmd, &table, &clock(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn args_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "stocksim_cli",
            "predict",
            "--symbol",
            "TCS",
            "--days",
            "10",
            "--pretty",
            "--as-of-date",
            "2026-01-05",
        ])
        .unwrap();
        assert!(args.pretty);
        assert_eq!(args.as_of_date.as_deref(), Some("2026-01-05"));
        assert!(matches!(args.command, Command::Predict { days: 10, .. }));
        let zero_days = ["stocksim_cli", "history", "--symbol", "TCS", "--days", "0"];
        assert!(Args::try_parse_from(zero_days).is_err());
    }
}
