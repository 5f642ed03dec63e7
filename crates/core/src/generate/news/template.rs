//! `{slot}` text templates.
//!
//! Binding draws one value per slot from the rng; rendering is a pure
//! substitution. `{name}` renders the bound value as-is and `{Name}` renders
//! it with every word capitalised.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::generate::{pick, uniform};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template slot '{0}' has no bound value")]
    UnboundSlot(String),
    #[error("unterminated slot in template text: {0:?}")]
    Unterminated(String),
}

/// How a slot gets its value.
#[derive(Debug, Clone, Copy)]
pub enum Fill {
    Words(&'static [&'static str]),
    /// Inclusive integer range.
    Int(i64, i64),
    /// Uniform decimal, rendered with one fractional digit.
    Decimal1(f64, f64),
    /// Multiple of the context price, rendered with two fractional digits.
    PriceMultiple(f64, f64),
    /// A calendar date this many days after the context date.
    DaysAhead(i64, i64),
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub name: &'static str,
    pub fill: Fill,
}

pub const fn words(name: &'static str, choices: &'static [&'static str]) -> Slot {
    Slot {
        name,
        fill: Fill::Words(choices),
    }
}

pub const fn slot(name: &'static str, fill: Fill) -> Slot {
    Slot { name, fill }
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub title: &'static str,
    pub body: &'static str,
    pub slots: &'static [Slot],
}

/// Values that numeric fills are relative to.
#[derive(Debug, Clone, Copy)]
pub struct FillContext {
    pub price: f64,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<&'static str, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn resolve(&self, placeholder: &str) -> Result<String, TemplateError> {
        if let Some(v) = self.get(placeholder) {
            return Ok(v.to_string());
        }
        let mut chars = placeholder.chars();
        if let Some(first) = chars.next().filter(|c| c.is_uppercase()) {
            let lowered: String = first.to_lowercase().chain(chars).collect();
            if let Some(v) = self.get(&lowered) {
                return Ok(title_case(v));
            }
        }
        Err(TemplateError::UnboundSlot(placeholder.to_string()))
    }
}

impl Template {
    /// Draws a value for every slot not already present in `bindings`.
    pub fn bind<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ctx: &FillContext,
        mut bindings: Bindings,
    ) -> Bindings {
        for slot in self.slots {
            if bindings.get(slot.name).is_none() {
                bindings.set(slot.name, draw(rng, ctx, slot.fill));
            }
        }
        bindings
    }

    /// `(title, body)` with every placeholder substituted.
    pub fn render(&self, bindings: &Bindings) -> Result<(String, String), TemplateError> {
        Ok((render(self.title, bindings)?, render(self.body, bindings)?))
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, ctx: &FillContext, fill: Fill) -> String {
    match fill {
        Fill::Words(choices) => pick(rng, choices).to_string(),
        Fill::Int(lo, hi) => rng.gen_range(lo..=hi).to_string(),
        Fill::Decimal1(lo, hi) => format!("{:.1}", uniform(rng, lo, hi)),
        Fill::PriceMultiple(lo, hi) => format!("{:.2}", ctx.price * uniform(rng, lo, hi)),
        Fill::DaysAhead(lo, hi) => (ctx.today + Duration::days(rng.gen_range(lo..=hi)))
            .format("%B %d, %Y")
            .to_string(),
    }
}

pub fn render(text: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(text.len() + 32);
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| TemplateError::Unterminated(text.to_string()))?;
        out.push_str(&bindings.resolve(&after[..close])?);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Upper-cases the first letter of each space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::{day, rng};

    const SAMPLE: Template = Template {
        title: "Tech Talent {Trend} Impacts Margins for {company}",
        body: "The {trend} in hiring hits {company}; dividend of ₹{amount} payable {payable}.",
        slots: &[
            words("trend", &["talent competition", "attrition"]),
            slot("amount", Fill::Int(2, 20)),
            slot("payable", Fill::DaysAhead(10, 30)),
        ],
    };

    #[test]
    fn capitalised_placeholder_title_cases_the_value() {
        let b = Bindings::new()
            .with("company", "Infosys Ltd.")
            .with("trend", "talent competition");
        assert_eq!(
            render("Tech Talent {Trend} at {company}", &b).unwrap(),
            "Tech Talent Talent Competition at Infosys Ltd."
        );
        assert_eq!(render("{trend}", &b).unwrap(), "talent competition");
        assert_eq!(title_case("IT sector"), "IT Sector");
    }

    #[test]
    fn missing_or_broken_slots_are_errors() {
        let b = Bindings::new().with("company", "TCS");
        assert_eq!(
            render("{company} {trend}", &b),
            Err(TemplateError::UnboundSlot("trend".into()))
        );
        assert!(matches!(
            render("{company", &b),
            Err(TemplateError::Unterminated(_))
        ));
    }

    #[test]
    fn bind_fills_every_slot_and_keeps_preset_values() {
        let ctx = FillContext {
            price: 1000.0,
            today: day(),
        };
        let preset = Bindings::new()
            .with("company", "Wipro Ltd.")
            .with("trend", "attrition");
        let b = SAMPLE.bind(&mut rng(3), &ctx, preset);
        assert_eq!(b.get("trend"), Some("attrition"));

        let amount: i64 = b.get("amount").unwrap().parse().unwrap();
        assert!((2..=20).contains(&amount));
        assert!(b.get("payable").unwrap().ends_with(", 2026"));

        let (title, body) = SAMPLE.render(&b).unwrap();
        assert_eq!(title, "Tech Talent Attrition Impacts Margins for Wipro Ltd.");
        assert!(body.starts_with("The attrition in hiring hits Wipro Ltd.;"));
        assert!(!body.contains('{'));
    }

    #[test]
    fn rendering_is_pure() {
        let ctx = FillContext {
            price: 10.0,
            today: day(),
        };
        let b = SAMPLE.bind(&mut rng(8), &ctx, Bindings::new().with("company", "X"));
        assert_eq!(SAMPLE.render(&b).unwrap(), SAMPLE.render(&b).unwrap());
    }
}
