//! Templated company news.

pub mod catalog;
pub mod template;

use std::collections::VecDeque;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use serde::Serialize;

use crate::domain::{SectorClass, StockRef};
use crate::generate::{pick, sample, uniform};
use crate::seed::SymbolSeed;
use crate::time::MarketClock;

use template::{Bindings, FillContext, Template, TemplateError};

const DATE_POOL: usize = 20;
const MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// First list with a substring hit wins; positive is checked first.
    pub fn infer(text: &str, positive: &[&str], negative: &[&str]) -> Self {
        let text = text.to_lowercase();
        if positive.iter().any(|w| text.contains(w)) {
            Self::Positive
        } else if negative.iter().any(|w| text.contains(w)) {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Earnings,
    Analyst,
    Company,
    Sector,
    Market,
    General,
}

impl Category {
    fn slug(self) -> &'static str {
        match self {
            Self::Earnings => "earnings",
            Self::Analyst => "analyst",
            Self::Company => "company",
            Self::Sector => "sector",
            Self::Market => "market",
            Self::General => "general",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub source: &'static str,
    pub date: String,
    pub url: String,
    pub sentiment: Sentiment,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockNews {
    pub symbol: String,
    pub name: String,
    pub news: Vec<NewsItem>,
}

struct Feed {
    symbol_lower: String,
    ctx: FillContext,
    base: Bindings,
    dates: VecDeque<NaiveDateTime>,
    items: Vec<(NaiveDateTime, NewsItem)>,
}

impl Feed {
    fn has_room(&self) -> bool {
        !self.dates.is_empty()
    }

    fn emit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        template: &Template,
        extra: &[(&'static str, String)],
        category: Category,
        sentiment: impl FnOnce(&str) -> Sentiment,
    ) -> Result<(), TemplateError> {
        let Some(date) = self.dates.pop_front() else {
            return Ok(());
        };

        let mut preset = self.base.clone();
        for (name, value) in extra {
            preset.set(*name, value.clone());
        }
        let bindings = template.bind(rng, &self.ctx, preset);
        let (title, description) = template.render(&bindings)?;
        let sentiment = sentiment(&format!("{title} {description}"));

        self.items.push((
            date,
            NewsItem {
                title,
                description,
                source: *pick(rng, catalog::SOURCES),
                date: date.format("%Y-%m-%dT%H:%M:%S").to_string(),
                url: format!(
                    "https://example.com/news/{}/{}",
                    self.symbol_lower,
                    category.slug()
                ),
                sentiment,
                category,
            },
        ));
        Ok(())
    }
}

/// Between 8 and 15 items, newest first, all dated within the last 30 days.
pub fn generate_news<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    clock: &MarketClock,
) -> Result<StockNews, TemplateError> {
    let price = SymbolSeed::of(stock.symbol).base_price();

    let mut dates: Vec<NaiveDateTime> = (0..DATE_POOL)
        .map(|_| clock.now - Duration::days(rng.gen_range(0..=MAX_AGE_DAYS)))
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    let target = rng.gen_range(8..=15usize);

    let mut feed = Feed {
        symbol_lower: stock.symbol.to_lowercase(),
        ctx: FillContext {
            price,
            today: clock.as_of,
        },
        base: Bindings::new()
            .with("company", stock.name)
            .with("sector", stock.sector),
        dates: dates.into(),
        items: Vec::with_capacity(DATE_POOL),
    };

    if rng.gen_bool(0.7) {
        let (sentiment, template) = *pick(rng, catalog::EARNINGS);
        feed.emit(rng, &template, &[], Category::Earnings, |_| sentiment)?;
    }

    for _ in 0..rng.gen_range(1..=3) {
        let analyst = pick(rng, catalog::ANALYSTS).to_string();
        if rng.gen_bool(0.6) {
            let (from, to, sentiment) = *pick(rng, catalog::RATING_CHANGES);
            let headline = if rng.gen_bool(0.5) {
                to
            } else if sentiment == Sentiment::Positive {
                "Upgrades"
            } else {
                "Downgrades"
            };
            let extra = [
                ("analyst", analyst),
                ("headline", headline.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ];
            feed.emit(rng, &catalog::RATING_CHANGE, &extra, Category::Analyst, |_| sentiment)?;
        } else {
            let change = uniform(rng, -20.0, 30.0);
            let raised = change > 0.0;
            let extra = [
                ("analyst", analyst),
                ("verb", if raised { "raises" } else { "cuts" }.to_string()),
                ("verb_past", if raised { "raised" } else { "lowered" }.to_string()),
                ("direction", if raised { "increase" } else { "decrease" }.to_string()),
                ("target", format!("{:.2}", price * (1.0 + change / 100.0))),
                ("price", format!("{price:.2}")),
                ("move", format!("{:.1}", change.abs())),
            ];
            let sentiment = if raised {
                Sentiment::Positive
            } else {
                Sentiment::Negative
            };
            feed.emit(rng, &catalog::PRICE_TARGET, &extra, Category::Analyst, |_| sentiment)?;
        }
    }

    let event_count = rng.gen_range(2..=4);
    for (sentiment, template) in sample(rng, catalog::COMPANY_EVENTS, event_count) {
        feed.emit(rng, &template, &[], Category::Company, |_| sentiment)?;
    }

    let sector_templates = match stock.sector_class() {
        SectorClass::InformationTechnology => catalog::IT_SECTOR,
        SectorClass::FinancialServices => catalog::FINANCIAL_SECTOR,
        _ => catalog::DEFAULT_SECTOR,
    };
    for _ in 0..rng.gen_range(2..=3) {
        let template = *pick(rng, sector_templates);
        feed.emit(rng, &template, &[], Category::Sector, |text| {
            Sentiment::infer(text, catalog::SECTOR_POSITIVE, catalog::SECTOR_NEGATIVE)
        })?;
    }

    for _ in 0..rng.gen_range(1..=3) {
        let template = *pick(rng, catalog::MARKET);
        let direction = *pick(rng, catalog::MARKET_DIRECTIONS);
        let changing = match direction {
            "higher" => "rising by",
            "lower" => "falling by",
            _ => "moving",
        };
        let extra = [
            ("direction", direction.to_string()),
            ("changing", changing.to_string()),
        ];
        feed.emit(rng, &template, &extra, Category::Market, |text| {
            Sentiment::infer(text, catalog::MARKET_POSITIVE, catalog::MARKET_NEGATIVE)
        })?;
    }

    while feed.items.len() < target && feed.has_room() {
        let sentiment = *pick(
            rng,
            &[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral],
        );
        feed.emit(rng, &catalog::GENERAL, &[], Category::General, |_| sentiment)?;
    }

    let mut items = feed.items;
    items.sort_by(|a, b| b.0.cmp(&a.0));
    items.truncate(target);
    tracing::debug!(symbol = stock.symbol, items = items.len(), "news feed generated");

    Ok(StockNews {
        symbol: stock.symbol.to_string(),
        name: stock.name.to_string(),
        news: items.into_iter().map(|(_, item)| item).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};
    use crate::reference::ReferenceTable;
    use chrono::NaiveTime;

    fn clock() -> MarketClock {
        MarketClock {
            as_of: day(),
            now: day().and_time(NaiveTime::from_hms_opt(11, 15, 0).unwrap()),
        }
    }

    #[test]
    fn between_eight_and_fifteen_items_newest_first() {
        let table = ReferenceTable::builtin();
        for symbol in ["RELIANCE", "TCS", "HDFCBANK", "DABUR", "ZEEL"] {
            let stock = table.lookup(symbol).found().unwrap();
            for seed in 0..25 {
                let out = generate_news(&mut rng(seed), stock, &clock()).unwrap();
                assert!((8..=15).contains(&out.news.len()), "{symbol} {}", out.news.len());
                for pair in out.news.windows(2) {
                    assert!(pair[0].date >= pair[1].date);
                }
                for item in &out.news {
                    assert!(!item.title.contains('{') && !item.description.contains('{'));
                    assert!(item.url.starts_with(&format!(
                        "https://example.com/news/{}/",
                        symbol.to_lowercase()
                    )));
                    assert!(item.date.as_str() <= "2026-01-05T11:15:00");
                    assert!(item.date.as_str() >= "2025-12-06T11:15:00");
                }
            }
        }
    }

    #[test]
    fn sector_news_uses_sector_templates() {
        let table = ReferenceTable::builtin();
        let infy = table.lookup("INFY").found().unwrap();
        let out = generate_news(&mut rng(12), infy, &clock()).unwrap();
        let sector: Vec<_> = out
            .news
            .iter()
            .filter(|n| n.category == Category::Sector)
            .collect();
        for item in sector {
            assert!(item.title.contains("IT") || item.title.contains("Tech"), "{}", item.title);
        }
    }

    #[test]
    fn keyword_inference() {
        let pos = catalog::SECTOR_POSITIVE;
        let neg = catalog::SECTOR_NEGATIVE;
        assert_eq!(Sentiment::infer("Strong GROWTH ahead", pos, neg), Sentiment::Positive);
        assert_eq!(Sentiment::infer("margin pressure", pos, neg), Sentiment::Negative);
        assert_eq!(Sentiment::infer("consolidation", pos, neg), Sentiment::Neutral);
    }

    #[test]
    fn every_catalog_template_renders() {
        let ctx = FillContext {
            price: 1234.5,
            today: day(),
        };
        let base = Bindings::new()
            .with("company", "Test Co")
            .with("sector", "Metal")
            .with("analyst", "CLSA")
            .with("headline", "Upgrades")
            .with("from", "Hold")
            .with("to", "Buy")
            .with("verb", "raises")
            .with("verb_past", "raised")
            .with("direction", "higher")
            .with("changing", "rising by")
            .with("target", "1300.00")
            .with("price", "1234.50")
            .with("move", "5.3");

        let mut all: Vec<Template> = Vec::new();
        all.extend(catalog::EARNINGS.iter().map(|(_, t)| *t));
        all.extend(catalog::COMPANY_EVENTS.iter().map(|(_, t)| *t));
        all.extend_from_slice(catalog::IT_SECTOR);
        all.extend_from_slice(catalog::FINANCIAL_SECTOR);
        all.extend_from_slice(catalog::DEFAULT_SECTOR);
        all.extend_from_slice(catalog::MARKET);
        all.extend([catalog::RATING_CHANGE, catalog::PRICE_TARGET, catalog::GENERAL]);

        for t in all {
            let b = t.bind(&mut rng(1), &ctx, base.clone());
            let rendered = t.render(&b);
            assert!(rendered.is_ok(), "{}: {:?}", t.title, rendered);
        }
    }
}
