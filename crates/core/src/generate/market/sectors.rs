use rand::Rng;
use serde::Serialize;

use crate::generate::{pick, sample, uniform};
use crate::num::round2;

struct SectorDef {
    name: &'static str,
    subsectors: &'static [&'static str],
    key_metrics: &'static [&'static str],
    trends: &'static [&'static str],
}

const SECTORS: &[SectorDef] = &[
    SectorDef {
        name: "Information Technology",
        subsectors: &["IT Services", "Software Development", "IT Consulting", "Technology Hardware"],
        key_metrics: &["Digital Revenue Growth", "Client Concentration", "Employee Attrition", "Operating Margin"],
        trends: &["Cloud Adoption", "AI Integration", "Digital Transformation", "Cybersecurity Spending"],
    },
    SectorDef {
        name: "Banking & Financial Services",
        subsectors: &["Private Banks", "Public Banks", "NBFCs", "Insurance", "Asset Management"],
        key_metrics: &["Net Interest Margin", "CASA Ratio", "Gross NPA", "Credit Growth"],
        trends: &["Digital Banking", "UPI Transactions", "Retail Credit Growth", "Asset Quality"],
    },
    SectorDef {
        name: "Pharmaceuticals",
        subsectors: &["Generics", "API Manufacturing", "R&D", "Contract Research", "Hospitals"],
        key_metrics: &["R&D Spending", "USFDA Approvals", "Domestic Market Share", "API Dependency"],
        trends: &["API Self-Reliance", "Specialty Pharma", "Healthcare Accessibility", "Biosimilars"],
    },
    SectorDef {
        name: "Automotive",
        subsectors: &["Passenger Vehicles", "Commercial Vehicles", "Two-Wheelers", "Auto Ancillaries"],
        key_metrics: &["Volume Growth", "Average Selling Price", "EBITDA Margin", "Inventory Levels"],
        trends: &["Electric Vehicles", "SUV Preference", "Emission Norms", "PLI Scheme Impact"],
    },
    SectorDef {
        name: "Consumer Goods",
        subsectors: &["FMCG", "Consumer Durables", "Apparel", "Food & Beverages"],
        key_metrics: &["Rural Growth", "Urban Growth", "Input Cost Inflation", "Distribution Reach"],
        trends: &["Premiumization", "Direct-to-Consumer", "Health & Wellness", "Rural Penetration"],
    },
    SectorDef {
        name: "Energy & Power",
        subsectors: &["Oil & Gas", "Power Generation", "Power Distribution", "Renewable Energy"],
        key_metrics: &["Crude Prices", "Plant Load Factor", "Transmission Loss", "Renewable Capacity"],
        trends: &["Green Energy Transition", "Natural Gas Usage", "EV Infrastructure", "Hydrogen Economy"],
    },
    SectorDef {
        name: "Metal & Mining",
        subsectors: &["Steel", "Aluminum", "Copper", "Mining"],
        key_metrics: &["Commodity Prices", "Capacity Utilization", "Export Volume", "Import Dependency"],
        trends: &["Infrastructure Push", "China Demand", "Global Supply Chain", "Green Steel"],
    },
    SectorDef {
        name: "Real Estate & Construction",
        subsectors: &["Residential", "Commercial", "Infrastructure", "Cement"],
        key_metrics: &["New Launches", "Unsold Inventory", "Cement Demand", "Urban Housing Demand"],
        trends: &["Affordable Housing", "Office Space Demand", "REIT Growth", "Smart Cities"],
    },
    SectorDef {
        name: "Telecommunications",
        subsectors: &["Wireless Services", "Fixed Line", "Tower Companies", "Broadband"],
        key_metrics: &["ARPU", "Data Usage", "Subscriber Growth", "Infrastructure Investment"],
        trends: &["5G Rollout", "Tariff Stability", "Enterprise Solutions", "Digital Infrastructure"],
    },
    SectorDef {
        name: "Retail",
        subsectors: &["E-commerce", "Organized Retail", "Grocery", "Fashion"],
        key_metrics: &["Same-Store Growth", "Online Penetration", "Customer Acquisition Cost", "Inventory Turnover"],
        trends: &["Omnichannel Presence", "Quick Commerce", "Private Labels", "Rural Retail"],
    },
];

const METRIC_DIRECTIONS: &[&str] = &["improving", "stable", "declining"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsectorMove {
    pub name: &'static str,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
    pub name: &'static str,
    pub change_percent: f64,
    pub subsectors: Vec<SubsectorMove>,
    pub trends: Vec<&'static str>,
    pub insights: Vec<String>,
    pub volume: u64,
    /// In crores.
    pub market_cap: f64,
}

/// Ten sectors sharing one market trend, best performer first.
pub fn generate_sector_performance<R: Rng + ?Sized>(rng: &mut R) -> Vec<SectorPerformance> {
    let market_trend = uniform(rng, -2.0, 3.0);

    let mut sectors: Vec<SectorPerformance> = SECTORS
        .iter()
        .map(|def| {
            let change = market_trend + uniform(rng, -2.5, 2.5);
            let trends = sample(rng, def.trends, 2);
            let insights = sample(rng, def.key_metrics, 2)
                .into_iter()
                .map(|metric| format!("{metric}: {}", pick(rng, METRIC_DIRECTIONS)))
                .collect();
            let subsectors = def
                .subsectors
                .iter()
                .map(|&name| SubsectorMove {
                    name,
                    change_percent: round2(change + uniform(rng, -1.5, 1.5)),
                })
                .collect();

            SectorPerformance {
                name: def.name,
                change_percent: round2(change),
                subsectors,
                trends,
                insights,
                volume: rng.gen_range(5_000_000..=50_000_000),
                market_cap: round2(uniform(rng, 100_000.0, 5_000_000.0)),
            }
        })
        .collect();

    sectors.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::testing::rng;

    #[test]
    fn sorted_best_first_with_subsectors_near_parent() {
        for seed in 0..50 {
            let sectors = generate_sector_performance(&mut rng(seed));
            assert_eq!(sectors.len(), 10);
            assert!(sectors
                .windows(2)
                .all(|w| w[0].change_percent >= w[1].change_percent));
            for s in &sectors {
                assert_eq!(s.trends.len(), 2);
                assert_eq!(s.insights.len(), 2);
                for sub in &s.subsectors {
                    assert!((sub.change_percent - s.change_percent).abs() <= 1.52, "{s:?}");
                }
            }
        }
    }
}
