//! Stock detail page: live-looking quote, company profile and a headline
//! recommendation.

use chrono::Datelike;
use rand::Rng;
use serde::Serialize;

use crate::domain::{Rating, Recommendation, RecommendationOverride, StockRef};
use crate::num::round2;
use crate::seed::SymbolSeed;
use crate::time::MarketClock;

use super::news::template::{self, Bindings, TemplateError};
use super::{pick, sample, uniform};

/// Sector-specific copy for the profile. Keyed by the reference sector name.
struct SectorStory {
    summary: [&'static str; 3],
    history: Option<&'static str>,
    events: &'static [&'static str],
    products: Option<&'static [&'static str]>,
    advantages: Option<&'static [&'static str]>,
}

const IT_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a leading provider of IT services, consulting, and business solutions with a global client base spanning multiple industries.",
        "The company specializes in digital transformation, cloud services, AI, and enterprise solutions that help businesses navigate technology challenges.",
        "With development centers across India and internationally, {company} employs thousands of technology professionals delivering innovative solutions to clients worldwide.",
    ],
    history: Some("The company has been at the forefront of India's IT revolution, contributing significantly to establishing the country as a global technology services hub."),
    events: &[
        "Reached $100 million in annual revenue",
        "Expanded operations to North America and Europe",
        "Listed on stock exchange",
        "Acquired key technology company",
        "Launched innovative AI-based solution",
        "Crossed 10,000 employees globally",
        "Established global innovation center",
    ],
    products: Some(&[
        "Digital Transformation Solutions",
        "Cloud Services",
        "AI and Machine Learning Platforms",
        "Enterprise Software Solutions",
        "Cybersecurity Services",
        "Data Analytics Solutions",
    ]),
    advantages: Some(&[
        "Strong Digital Capabilities",
        "Global Delivery Model",
        "Industry-Specific Expertise",
        "Innovation Culture",
        "Strategic Partnerships",
        "Talent Development",
    ]),
};

const BANKING_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is one of India's premier banking institutions offering a comprehensive range of banking services to retail and corporate customers.",
        "The bank has a strong nationwide presence with branches and ATMs across urban and rural India, complemented by robust digital banking platforms.",
        "With a focus on financial inclusion and technological innovation, {company} continues to expand its customer base while maintaining strong asset quality.",
    ],
    history: Some("The bank has played a significant role in the development of India's financial sector, introducing innovative products and services that have transformed banking in the country."),
    events: &[
        "Opened 100th branch",
        "Launched online banking platform",
        "Introduced mobile banking app",
        "Reached 1 million customers",
        "Expanded to rural markets with specialized products",
        "Implemented core banking solution",
        "Merged with another financial institution",
    ],
    products: Some(&[
        "Retail Banking Services",
        "Corporate Banking Solutions",
        "Digital Banking Platform",
        "Wealth Management Services",
        "Loan Products",
        "Credit Card Services",
    ]),
    advantages: Some(&[
        "Extensive Branch Network",
        "Strong Digital Banking Platform",
        "Robust Risk Management",
        "Customer-Centric Approach",
        "Diversified Revenue Streams",
        "Strong Capital Position",
    ]),
};

const FINANCE_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a leading non-banking financial company providing various financial services including loans, asset financing, and wealth management.",
        "The company has established a strong market presence through its diversified product offerings catering to both individual and corporate clients.",
        "With a focus on technology-enabled financial solutions, {company} has consistently shown strong growth in its loan book and customer base.",
    ],
    history: None,
    events: GENERIC_EVENTS,
    products: None,
    advantages: None,
};

const ENERGY_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a major player in the Indian energy sector with significant operations in oil and gas exploration, production, refining, and distribution.",
        "The company has a strong presence across the energy value chain with investments in both traditional and renewable energy sources.",
        "With a focus on sustainability and future growth, {company} is investing in green energy solutions while maintaining its core fossil fuel business.",
    ],
    history: Some("The company has been instrumental in strengthening India's energy security and has evolved from a traditional oil company to an integrated energy player."),
    events: &[
        "Discovered major oil/gas field",
        "Commissioned new refinery",
        "Expanded retail fuel network to 1,000 outlets",
        "Entered renewable energy sector",
        "Achieved carbon neutrality targets",
        "Commissioned major petrochemical plant",
        "Expanded international operations",
    ],
    products: Some(&[
        "Petroleum Products",
        "Natural Gas",
        "Petrochemicals",
        "Renewable Energy Solutions",
        "Fuel Retail Services",
        "Lubricants",
    ]),
    advantages: Some(&[
        "Integrated Value Chain",
        "Advanced Refining Capabilities",
        "Strong Distribution Network",
        "Technology Leadership",
        "Sustainable Practices",
        "Strategic Reserves",
    ]),
};

const PHARMA_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a major pharmaceutical company engaged in the development, manufacturing, and marketing of generic and specialty medicines.",
        "The company has a strong research and development pipeline with focus on complex generics, biosimilars, and innovative drug delivery systems.",
        "With manufacturing facilities approved by major regulatory authorities worldwide, {company} exports products to over 100 countries while maintaining a strong domestic presence.",
    ],
    history: Some("The company has been a pioneer in making affordable medicines accessible to millions, while also gaining recognition in global pharmaceutical markets for its quality products."),
    events: &[
        "Received first USFDA approval",
        "Launched breakthrough generic drug",
        "Established R&D center",
        "Received GMP certification for manufacturing plant",
        "Entered biosimilars market",
        "Achieved significant regulatory milestone",
        "Expanded to international markets",
    ],
    products: Some(&[
        "Generic Pharmaceuticals",
        "Active Pharmaceutical Ingredients",
        "Specialty Medicines",
        "Over-the-Counter Products",
        "Biosimilars",
        "Contract Manufacturing Services",
    ]),
    advantages: Some(&[
        "Strong R&D Pipeline",
        "Cost-Efficient Manufacturing",
        "Global Regulatory Expertise",
        "Diverse Product Portfolio",
        "Strategic Partnerships",
        "Quality Control Excellence",
    ]),
};

const CONSUMER_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a leading consumer goods company with a diverse portfolio of products in personal care, home care, and food categories.",
        "The company has built strong brands that are household names across India, with distribution networks reaching both urban centers and rural areas.",
        "With a focus on innovation and consumer insights, {company} continues to launch new products tailored to evolving consumer preferences.",
    ],
    history: None,
    events: &[
        "Launched flagship brand",
        "Achieved national distribution",
        "Expanded product portfolio",
        "Reached 1 million customers",
        "Implemented automated manufacturing",
        "Introduced eco-friendly packaging",
        "Expanded to international markets",
    ],
    products: Some(&[
        "Personal Care Products",
        "Home Care Solutions",
        "Food and Beverages",
        "Health and Wellness Products",
        "Beauty Products",
        "Household Essentials",
    ]),
    advantages: Some(&[
        "Strong Brand Recognition",
        "Extensive Distribution Network",
        "Product Innovation",
        "Consumer Insights",
        "Manufacturing Excellence",
        "Supply Chain Efficiency",
    ]),
};

const AUTO_STORY: SectorStory = SectorStory {
    summary: [
        "{company} is a prominent player in the Indian automobile sector manufacturing passenger vehicles, commercial vehicles, and two-wheelers.",
        "The company has state-of-the-art manufacturing facilities with capabilities for design, development, and production of vehicles meeting global quality standards.",
        "With increasing focus on electric mobility, {company} is investing in new technologies to address the changing automotive landscape.",
    ],
    history: Some("The company has contributed significantly to India's automotive industry growth, evolving from modest beginnings to a manufacturer of world-class vehicles."),
    events: &[
        "Launched first vehicle model",
        "Established state-of-the-art manufacturing plant",
        "Achieved production milestone of 1 million vehicles",
        "Expanded to international markets",
        "Introduced electric vehicle lineup",
        "Formed strategic international partnership",
        "Achieved 5-star safety rating for flagship model",
    ],
    products: Some(&[
        "Passenger Vehicles",
        "Commercial Vehicles",
        "Two-Wheelers",
        "Electric Vehicles",
        "Automotive Components",
        "After-Sales Services",
    ]),
    advantages: Some(&[
        "Advanced Engineering Capabilities",
        "Strong Brand Portfolio",
        "Manufacturing Excellence",
        "Extensive Dealer Network",
        "Innovation Leadership",
        "Cost Competitiveness",
    ]),
};

const TELECOM_PRODUCTS: &[&str] = &[
    "Mobile Services",
    "Broadband Internet",
    "Enterprise Connectivity Solutions",
    "Digital Services Platform",
    "IoT Solutions",
    "Cloud Communication Services",
];

const TELECOM_ADVANTAGES: &[&str] = &[
    "Extensive Network Coverage",
    "Spectrum Advantage",
    "Digital Service Ecosystem",
    "Infrastructure Strength",
    "Customer Base",
    "Technology Leadership",
];

const GENERIC_EVENTS: &[&str] = &[
    "Major expansion of operations",
    "Listed on stock exchange",
    "Entered new market segment",
    "Launched flagship product/service",
    "Achieved significant industry recognition",
    "Implemented major technological upgrade",
    "Reached important revenue milestone",
];

const GENERIC_PRODUCTS: &[&str] = &[
    "Core Product Line",
    "Premium Services",
    "Specialized Solutions",
    "Customer-Focused Offerings",
];

const GENERIC_ADVANTAGES: &[&str] = &[
    "Industry Expertise",
    "Operational Excellence",
    "Customer Relationships",
    "Innovation Capability",
];

const RECENT_EVENTS: &[&str] = &[
    "Launched digital transformation initiative",
    "Implemented sustainability framework",
    "Achieved significant ESG milestone",
    "Expanded into new business vertical",
    "Completed major organizational restructuring",
];

const CEOS: &[&str] = &[
    "Rajesh Sharma",
    "Anand Patel",
    "Sunita Kapoor",
    "Vikram Mehta",
    "Deepak Singh",
    "Nirmala Joshi",
    "Sanjay Kumar",
    "Priya Nair",
];
const CFOS: &[&str] = &["Amit Kumar", "Vikram Singh", "Sanjay Mehta", "Priya Sharma"];
const COOS: &[&str] = &["Ravi Tandon", "Neha Patel", "Arun Joshi", "Meera Saxena"];
const CXOS: &[&str] = &["Sandeep Gupta", "Deepak Verma", "Anita Reddy", "Rahul Malhotra"];
const CXO_TITLES: &[&str] = &[
    "Chief Technology Officer",
    "Chief Marketing Officer",
    "Chief Strategy Officer",
];
const FOUNDERS: &[&str] = &["entrepreneurs", "industry veterans", "visionary leaders"];
const CITIES: &[&str] = &["Mumbai", "Bangalore", "Delhi", "Hyderabad", "Chennai", "Pune"];
const BUILDINGS: &[&str] = &["Tower A", "Prestige Plaza", "Corporate House", "Business Park"];
const DISTRICTS: &[&str] = &[
    "Bandra Kurla Complex",
    "Andheri East",
    "Whitefield",
    "Cyber City",
    "Electronics City",
];
const POSITIONS: &[&str] = &[
    "Market Leader",
    "Strong Challenger",
    "Growing Player",
    "Niche Leader",
];

const BUY_REASONS: &[&str] = &[
    "Positive price momentum",
    "Valuation below sector average",
    "Expanding market share",
];
const SELL_REASONS: &[&str] = &[
    "Negative price momentum",
    "Valuation stretched relative to earnings",
    "Weakening technical setup",
];
const HOLD_REASONS: &[&str] = &[
    "Price action within normal range",
    "Valuation broadly in line with peers",
    "Awaiting clearer earnings trend",
];

fn story(sector: &str) -> Option<&'static SectorStory> {
    match sector {
        "IT" => Some(&IT_STORY),
        "Banking" => Some(&BANKING_STORY),
        "Finance" => Some(&FINANCE_STORY),
        "Energy" => Some(&ENERGY_STORY),
        "Pharma" => Some(&PHARMA_STORY),
        "Consumer Goods" | "FMCG" => Some(&CONSUMER_STORY),
        "Automobile" => Some(&AUTO_STORY),
        _ => None,
    }
}

/// `count` consecutive entries starting at `seed mod len`, wrapping.
fn rotate(list: &'static [&'static str], seed: SymbolSeed, count: u64) -> Vec<&'static str> {
    let len = list.len() as u64;
    (0..count)
        .map(|i| list[((seed.value() + i) % len) as usize])
        .collect()
}

pub fn key_products(sector: &str, seed: SymbolSeed) -> Vec<&'static str> {
    let list = match sector {
        "Telecom" => Some(TELECOM_PRODUCTS),
        _ => story(sector).and_then(|s| s.products),
    };
    match list {
        Some(list) => rotate(list, seed, 3 + seed.modulo(3)),
        None => GENERIC_PRODUCTS.to_vec(),
    }
}

pub fn competitive_advantages(sector: &str, seed: SymbolSeed) -> Vec<&'static str> {
    let list = match sector {
        "Telecom" => Some(TELECOM_ADVANTAGES),
        _ => story(sector).and_then(|s| s.advantages),
    };
    match list {
        Some(list) => rotate(list, seed, 3 + seed.modulo(2)),
        None => GENERIC_ADVANTAGES.to_vec(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Executive {
    pub name: &'static str,
    pub position: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Management {
    pub ceo: &'static str,
    pub ceo_since: i32,
    pub board_size: u64,
    pub key_executives: Vec<Executive>,
    pub governance_score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: i32,
    pub event: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub founding_year: i32,
    pub headquarters: &'static str,
    pub employee_count: u64,
    pub ceo: &'static str,
    pub website: String,
    pub registered_office: String,
    pub revenue_growth: String,
    pub market_position: &'static str,
    pub key_products: Vec<&'static str>,
    pub competitive_advantages: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub price: f64,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub previous_close: f64,
    pub volume: u64,
    pub avg_volume: u64,
    pub market_cap: f64,
    pub pe: f64,
    pub eps: f64,
    pub beta: f64,
    pub year_high: f64,
    pub year_low: f64,
    #[serde(rename = "dividend_yield")]
    pub dividend_yield: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetails {
    #[serde(flatten)]
    pub stock: StockRef,
    pub business_summary: String,
    pub history: String,
    pub management: Management,
    pub milestones: Vec<Milestone>,
    pub company_info: CompanyInfo,
    #[serde(flatten)]
    pub quote: Quote,
    pub recommendation: Recommendation,
}

pub fn generate_quote<R: Rng + ?Sized>(rng: &mut R, stock: &StockRef) -> Quote {
    let seed = SymbolSeed::of(stock.symbol);
    let price = round2(seed.base_price() + uniform(rng, -50.0, 50.0));
    let change = round2(uniform(rng, -50.0, 50.0));
    let open = round2(price - uniform(rng, -20.0, 20.0));
    let high = round2((price + uniform(rng, 10.0, 30.0)).max(open));
    let low = round2((price - uniform(rng, 10.0, 30.0)).min(open));
    let pe = round2(uniform(rng, 10.0, 35.0));

    Quote {
        price,
        current_price: price,
        change,
        change_percent: round2(change / price * 100.0),
        open,
        high,
        low,
        day_high: high,
        day_low: low,
        previous_close: round2(price - change),
        volume: rng.gen_range(100_000..=5_000_000),
        avg_volume: rng.gen_range(100_000..=5_000_000),
        market_cap: round2(price * (10_000_000 + seed.modulo(100_000_000)) as f64),
        pe,
        eps: round2(price / pe),
        beta: round2(uniform(rng, 0.5, 1.5)),
        year_high: round2(price * uniform(rng, 1.1, 1.4)),
        year_low: round2(price * uniform(rng, 0.6, 0.9)),
        dividend_yield: round2(uniform(rng, 0.5, 3.5)),
    }
}

/// Momentum and valuation rule used when no curated view exists.
pub fn heuristic_rating(change_percent: f64, pe: f64) -> Rating {
    if change_percent > 2.0 && pe < 25.0 {
        Rating::Buy
    } else if change_percent < -2.0 && pe > 30.0 {
        Rating::Sell
    } else {
        Rating::Hold
    }
}

fn recommend<R: Rng + ?Sized>(
    rng: &mut R,
    quote: &Quote,
    curated: Option<&RecommendationOverride>,
    updated: String,
) -> Recommendation {
    if let Some(o) = curated {
        return Recommendation::from_override(o, updated);
    }
    let rating = heuristic_rating(quote.change_percent, quote.pe);
    let pool = match rating {
        Rating::Buy | Rating::StrongBuy => BUY_REASONS,
        Rating::Sell | Rating::StrongSell => SELL_REASONS,
        Rating::Hold => HOLD_REASONS,
    };
    Recommendation {
        rating,
        reasons: sample(rng, pool, 2).into_iter().map(String::from).collect(),
        strength: rng.gen_range(40..=95),
        updated,
    }
}

const GENERIC_SUMMARY: &str = "{company} is a leading company in its sector with a strong market \
     presence and a legacy of delivering value to its stakeholders. The company continues to focus \
     on growth opportunities while maintaining operational excellence.";

fn business_summary(stock: &StockRef) -> Result<String, TemplateError> {
    let bindings = Bindings::new().with("company", stock.name);
    match story(stock.sector) {
        Some(s) => template::render(&s.summary.join(" "), &bindings),
        None => template::render(GENERIC_SUMMARY, &bindings),
    }
}

fn company_history(stock: &StockRef, founded: i32) -> String {
    let era = if founded < 1990 {
        "The company navigated through India's pre-liberalization economy and later adapted successfully to the open market reforms."
    } else if founded < 2000 {
        "The company was established during India's economic liberalization period and capitalized on the emerging market opportunities."
    } else {
        "As a relatively young company, it has shown remarkable growth in a competitive market environment."
    };
    let mut text = format!(
        "{company} was founded in {founded} and has since grown to become a significant player in the {sector} industry. \
         {era} Over the years, {company} has expanded its operations, diversified its product/service offerings, \
         and built a strong reputation for quality and innovation.",
        company = stock.name,
        sector = stock.sector,
    );
    if let Some(note) = story(stock.sector).and_then(|s| s.history) {
        text.push(' ');
        text.push_str(note);
    }
    text
}

fn milestones<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    seed: SymbolSeed,
    founded: i32,
    year: i32,
) -> Vec<Milestone> {
    let mut out = vec![Milestone {
        year: founded,
        event: format!("Founded by {}", pick(rng, FOUNDERS)),
    }];

    let count = 4 + seed.modulo(4) as i32;
    let span = year - 1 - founded;
    let pool = story(stock.sector).map_or(GENERIC_EVENTS, |s| s.events);
    let events = sample(rng, pool, (count - 1) as usize);
    out.extend(events.into_iter().zip(1..count).map(|(event, i)| Milestone {
        year: founded + span * i / count,
        event: event.to_string(),
    }));

    out.push(Milestone {
        year: year - 3 + seed.modulo(3) as i32,
        event: pick(rng, RECENT_EVENTS).to_string(),
    });
    out.sort_by_key(|m| m.year);
    out
}

/// Detail payload for one stock. `curated` wins over the momentum heuristic.
pub fn generate_stock_details<R: Rng + ?Sized>(
    rng: &mut R,
    stock: &StockRef,
    curated: Option<&RecommendationOverride>,
    clock: &MarketClock,
) -> Result<StockDetails, TemplateError> {
    let seed = SymbolSeed::of(stock.symbol);
    let quote = generate_quote(rng, stock);
    let recommendation = recommend(rng, &quote, curated, clock.timestamp());

    let founded = 1980 + seed.modulo(40) as i32;
    let ceo = *pick(rng, CEOS);
    let management = Management {
        ceo,
        ceo_since: 2016 + seed.modulo(7) as i32,
        board_size: 8 + seed.modulo(7),
        key_executives: vec![
            Executive {
                name: *pick(rng, CFOS),
                position: "Chief Financial Officer",
            },
            Executive {
                name: *pick(rng, COOS),
                position: "Chief Operating Officer",
            },
            Executive {
                name: *pick(rng, CXOS),
                position: *pick(rng, CXO_TITLES),
            },
        ],
        governance_score: 65 + seed.modulo(30),
    };
    let milestones = milestones(rng, stock, seed, founded, clock.as_of.year());

    let company_info = CompanyInfo {
        founding_year: founded,
        headquarters: *pick(rng, CITIES),
        employee_count: 1000 * (1 + seed.modulo(100)),
        ceo,
        website: format!("https://www.{}.in", stock.symbol.to_lowercase()),
        registered_office: format!("{}, {}", pick(rng, BUILDINGS), pick(rng, DISTRICTS)),
        revenue_growth: format!("{}%", 5 + seed.modulo(20)),
        market_position: *pick(rng, POSITIONS),
        key_products: key_products(stock.sector, seed),
        competitive_advantages: competitive_advantages(stock.sector, seed),
    };

    Ok(StockDetails {
        stock: *stock,
        business_summary: business_summary(stock)?,
        history: company_history(stock, founded),
        management,
        milestones,
        company_info,
        quote,
        recommendation,
    })
}
