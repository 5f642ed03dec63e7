use super::template::{slot, words, Fill, Slot, Template};
use super::Sentiment;

pub const SOURCES: &[&str] = &[
    "Economic Times",
    "Business Standard",
    "Mint",
    "CNBC-TV18",
    "Financial Express",
    "Bloomberg Quint",
    "Money Control",
    "LiveMint",
];

pub const ANALYSTS: &[&str] = &[
    "Morgan Stanley",
    "Goldman Sachs",
    "JP Morgan",
    "Nomura",
    "CLSA",
    "UBS",
    "Bank of America",
    "Jefferies",
    "Citi",
    "Credit Suisse",
];

const QUARTER: Slot = slot("quarter", Fill::Int(1, 4));
const SURPRISE: Slot = slot("surprise", Fill::Decimal1(0.0, 20.0));

pub const EARNINGS: &[(Sentiment, Template)] = &[
    (
        Sentiment::Positive,
        Template {
            title: "{company} Q{quarter} Results: Beats Estimates, Profit Up {surprise}%",
            body: "{company} reported quarterly results that exceeded analyst expectations, with earnings per share {surprise}% above consensus estimates. Revenue also came in stronger than anticipated, driven by {driver}",
            slots: &[
                QUARTER,
                SURPRISE,
                words(
                    "driver",
                    &["strong demand", "new product launches", "market expansion", "improved pricing"],
                ),
            ],
        },
    ),
    (
        Sentiment::Negative,
        Template {
            title: "{company} Q{quarter} Results: Misses Estimates, Profit Down {surprise}%",
            body: "{company} reported quarterly results that fell short of analyst expectations, with earnings per share {surprise}% below consensus estimates. The company cited {driver}",
            slots: &[
                QUARTER,
                SURPRISE,
                words(
                    "driver",
                    &[
                        "challenging market conditions",
                        "rising input costs",
                        "supply chain disruptions",
                        "increased competition",
                    ],
                ),
            ],
        },
    ),
    (
        Sentiment::Neutral,
        Template {
            title: "{company} Q{quarter} Results In Line With Estimates",
            body: "{company} reported quarterly results that matched analyst expectations. The company reaffirmed its outlook for the remainder of the fiscal year, citing {driver}",
            slots: &[
                QUARTER,
                words(
                    "driver",
                    &["stable market conditions", "steady demand", "operational efficiency", "strategic initiatives"],
                ),
            ],
        },
    ),
];

/// `(from, to, sentiment)`
pub const RATING_CHANGES: &[(&str, &str, Sentiment)] = &[
    ("Hold", "Buy", Sentiment::Positive),
    ("Sell", "Hold", Sentiment::Positive),
    ("Hold", "Sell", Sentiment::Negative),
    ("Buy", "Hold", Sentiment::Negative),
    ("Neutral", "Overweight", Sentiment::Positive),
    ("Overweight", "Neutral", Sentiment::Negative),
    ("Neutral", "Underweight", Sentiment::Negative),
    ("Underweight", "Neutral", Sentiment::Positive),
];

pub const RATING_CHANGE: Template = Template {
    title: "{analyst} {headline} {company}",
    body: "{analyst} has revised its rating on {company} from {from} to {to}, citing {reason}",
    slots: &[words(
        "reason",
        &[
            "valuation concerns",
            "growth outlook",
            "sector trends",
            "competitive positioning",
            "management execution",
        ],
    )],
};

pub const PRICE_TARGET: Template = Template {
    title: "{analyst} {Verb} {company} Price Target to ₹{target}",
    body: "{analyst} has {verb_past} its price target on {company} to ₹{target} from ₹{price}, representing a {move}% {direction}. The firm cited {reason}",
    slots: &[words(
        "reason",
        &[
            "strong fundamentals",
            "potential headwinds",
            "changing market dynamics",
            "valuation adjustment",
            "growth prospects",
        ],
    )],
};

pub const COMPANY_EVENTS: &[(Sentiment, Template)] = &[
    (
        Sentiment::Positive,
        Template {
            title: "{company} Announces Dividend of ₹{dividend} Per Share",
            body: "{company} has announced a dividend of ₹{dividend} per share, payable to shareholders of record as of {record_date}",
            slots: &[
                slot("dividend", Fill::Int(2, 20)),
                slot("record_date", Fill::DaysAhead(10, 30)),
            ],
        },
    ),
    (
        Sentiment::Positive,
        Template {
            title: "{company} Approves Share Buyback Program Worth ₹{size} Crore",
            body: "The board of {company} has approved a share buyback program worth ₹{size} crore at a price of up to ₹{buyback_price} per share, representing a premium of {premium}% to the current market price",
            slots: &[
                slot("size", Fill::Int(500, 10_000)),
                slot("buyback_price", Fill::PriceMultiple(1.1, 1.4)),
                slot("premium", Fill::Decimal1(10.0, 40.0)),
            ],
        },
    ),
    (
        Sentiment::Positive,
        Template {
            title: "{company} Announces Expansion into {Market}",
            body: "{company} has announced plans to expand its presence in {market}, investing ₹{investment} crore over the next {years} years",
            slots: &[
                words(
                    "market",
                    &["international markets", "new product categories", "digital solutions", "the retail segment"],
                ),
                slot("investment", Fill::Int(100, 5000)),
                slot("years", Fill::Int(3, 5)),
            ],
        },
    ),
    (
        Sentiment::Neutral,
        Template {
            title: "{company} Acquires {Target} for ₹{deal} Crore",
            body: "{company} has announced the acquisition of a {target} for ₹{deal} crore, which is expected to {benefit}",
            slots: &[
                words("target", &["startup", "rival company", "technology firm", "manufacturing unit"]),
                slot("deal", Fill::Int(100, 5000)),
                words(
                    "benefit",
                    &[
                        "enhance product offerings",
                        "expand market reach",
                        "improve operational efficiency",
                        "drive innovation",
                    ],
                ),
            ],
        },
    ),
    (
        Sentiment::Neutral,
        Template {
            title: "{company} Appoints New {role}",
            body: "{company} has announced the appointment of a new {role}, effective from {effective}. The new executive brings experience from {background}",
            slots: &[
                words("role", &["CEO", "CFO", "CTO", "COO"]),
                slot("effective", Fill::DaysAhead(0, 60)),
                words(
                    "background",
                    &[
                        "leading industry firms",
                        "global corporations",
                        "technology companies",
                        "financial institutions",
                    ],
                ),
            ],
        },
    ),
    (
        Sentiment::Positive,
        Template {
            title: "{company} Announces ₹{capex} Crore Capital Expenditure Plan",
            body: "{company} has announced a capital expenditure plan of ₹{capex} crore for the next {years} years, focusing on {focus}",
            slots: &[
                slot("capex", Fill::Int(1000, 10_000)),
                slot("years", Fill::Int(2, 5)),
                words(
                    "focus",
                    &[
                        "capacity expansion",
                        "modernization",
                        "digital transformation",
                        "research and development",
                    ],
                ),
            ],
        },
    ),
    (
        Sentiment::Neutral,
        Template {
            title: "{company} Announces Business Restructuring Plan",
            body: "{company} has announced a comprehensive business restructuring plan aimed at {aim}",
            slots: &[words(
                "aim",
                &[
                    "improving operational efficiency",
                    "focusing on core businesses",
                    "reducing costs",
                    "enhancing shareholder value",
                ],
            )],
        },
    ),
];

pub const IT_SECTOR: &[Template] = &[
    Template {
        title: "Indian IT Sector Faces {Trend} Amid Global Tech {Direction}",
        body: "The Indian IT sector is experiencing {trend} as global technology spending {direction}. Companies like {company} are {adapting} to these changes through {strategy}",
        slots: &[
            words("trend", &["growth", "challenges", "transformation", "talent competition"]),
            words("direction", &["accelerates", "slows down", "shifts focus", "embraces AI"]),
            words(
                "adapting",
                &["quickly adapting", "strategically responding", "carefully navigating", "aggressively expanding"],
            ),
            words(
                "strategy",
                &[
                    "digital transformation initiatives",
                    "cost optimization services",
                    "cloud migration offerings",
                    "AI and automation solutions",
                ],
            ),
        ],
    },
    Template {
        title: "Tech Talent {Trend} Impacts Margins for IT Firms like {company}",
        body: "The {trend} in technology talent acquisition is impacting profit margins for IT service providers. {company} has reported {impact} in its recent financial results, as the company {action}",
        slots: &[
            words("trend", &["shortage", "war", "attrition", "cost inflation"]),
            words(
                "impact",
                &["margin pressure", "increasing costs", "hiring challenges", "productivity concerns"],
            ),
            words(
                "action",
                &[
                    "increases employee compensation",
                    "expands fresher hiring",
                    "implements retention programs",
                    "accelerates automation",
                ],
            ),
        ],
    },
];

pub const FINANCIAL_SECTOR: &[Template] = &[
    Template {
        title: "Banking Sector {Trend} as RBI {Action} Interest Rates",
        body: "India's banking sector is witnessing {trend} after the Reserve Bank of India {action} interest rates by {amount} basis points. Financial institutions like {company} are expected to {impact}",
        slots: &[
            words("trend", &["growth", "pressure", "consolidation", "transformation"]),
            words("action", &["raises", "maintains", "cuts", "signals future changes in"]),
            words("amount", &["25", "50", "75"]),
            words(
                "impact",
                &[
                    "see expanded margins",
                    "face margin pressure",
                    "accelerate retail lending",
                    "focus on asset quality",
                ],
            ),
        ],
    },
    Template {
        title: "Digital Banking {Trend} Reshapes Financial Services Landscape",
        body: "The rapid {trend} of digital banking is transforming India's financial services sector. {company} has {response} with its {initiative} to {goal}",
        slots: &[
            words("trend", &["adoption", "growth", "expansion", "innovation"]),
            words(
                "response",
                &["responded aggressively", "invested significantly", "partnered strategically", "launched initiatives"],
            ),
            words(
                "initiative",
                &[
                    "mobile banking platforms",
                    "UPI payment services",
                    "digital lending solutions",
                    "fintech partnerships",
                ],
            ),
            words(
                "goal",
                &[
                    "enhance customer experience",
                    "expand market reach",
                    "reduce operational costs",
                    "counter competition from new entrants",
                ],
            ),
        ],
    },
];

pub const DEFAULT_SECTOR: &[Template] = &[
    Template {
        title: "Indian {Sector} Sector Sees {Trend} Amid {Factor}",
        body: "The Indian {sector} sector is experiencing {trend} due to {factor}. Companies like {company} are {response} to navigate these market conditions",
        slots: &[
            words("trend", &["growth", "challenges", "consolidation", "innovation"]),
            words(
                "factor",
                &[
                    "changing consumer preferences",
                    "regulatory developments",
                    "global market shifts",
                    "technological advancements",
                ],
            ),
            words(
                "response",
                &[
                    "adapting strategies",
                    "investing in capabilities",
                    "focusing on efficiency",
                    "expanding product offerings",
                ],
            ),
        ],
    },
    Template {
        title: "{Factor} Expected to Drive {Trend} in {Sector} Sector",
        body: "{Factor} is projected to drive {trend} in the {sector} sector over the coming quarters. {company} is positioned to {impact} from this development",
        slots: &[
            words(
                "factor",
                &["government policies", "infrastructure spending", "consumer demand", "export opportunities"],
            ),
            words("trend", &["growth", "consolidation", "margin improvement", "capacity expansion"]),
            words(
                "impact",
                &["benefit", "face headwinds", "see mixed impact", "capitalize on opportunities"],
            ),
        ],
    },
];

pub const SECTOR_POSITIVE: &[&str] = &["growth", "positive", "expansion", "benefit", "opportunit"];
pub const SECTOR_NEGATIVE: &[&str] = &["challenges", "pressure", "headwinds", "slowdown"];

pub const MARKET_DIRECTIONS: &[&str] = &["higher", "lower", "flat"];

pub const MARKET: &[Template] = &[
    Template {
        title: "Sensex, Nifty End {Direction} Amid {Factor}; {company} Among {Performers}",
        body: "Indian equity benchmarks ended {direction} today, with the Sensex {changing} {points} points and Nifty {changing} {nifty_points} points. {company} was among the {performers} stocks, {stock_direction} {percentage} in the session",
        slots: &[
            words("factor", &["global cues", "profit-booking", "buying interest", "sectoral rotation"]),
            words("performers", &["top-performing", "worst-performing", "most active", "volatile"]),
            slot("points", Fill::Int(100, 800)),
            slot("nifty_points", Fill::Int(30, 250)),
            words("stock_direction", &["gaining", "losing", "surging", "declining"]),
            words("percentage", &["1-2%", "2-3%", "3-4%", "0.5-1%"]),
        ],
    },
    Template {
        title: "FII {Action} Continues; {sector} Stocks Like {company} {Impact}",
        body: "Foreign Institutional Investors (FIIs) continued their {action} streak in Indian markets, with net {action} of ₹{amount} crore. {sector} stocks like {company} {impact} as {reason}",
        slots: &[
            words("action", &["buying", "selling"]),
            words("amount", &["1,000-2,000", "2,000-5,000", "5,000-8,000", "8,000-10,000"]),
            words("impact", &["benefited", "saw pressure", "attracted interest", "witnessed volatility"]),
            words(
                "reason",
                &[
                    "sectoral rotation continued",
                    "global funds adjusted portfolios",
                    "risk appetite changed",
                    "liquidity conditions shifted",
                ],
            ),
        ],
    },
    Template {
        title: "Market Volatility {Trend} as {Factor} Concerns {Action}",
        body: "Market volatility has {trend} as concerns over {factor} {action}. Stocks across sectors experienced {impact}, with {company} {stock_impact}",
        slots: &[
            words("trend", &["increased", "eased", "persisted", "returned"]),
            words("factor", &["inflation", "interest rates", "global growth", "geopolitical tensions"]),
            words("action", &["intensified", "eased", "remained elevated", "shifted focus"]),
            words(
                "impact",
                &["mixed movements", "broad-based selling", "selective buying", "heightened trading activity"],
            ),
            words(
                "stock_impact",
                &[
                    "showing resilience",
                    "facing selling pressure",
                    "attracting value buying",
                    "moving in line with sector",
                ],
            ),
        ],
    },
];

pub const MARKET_POSITIVE: &[&str] = &["ended higher", "gaining", "surging", "benefited"];
pub const MARKET_NEGATIVE: &[&str] = &["ended lower", "losing", "declining", "pressure"];

pub const GENERAL: Template = Template {
    title: "{company} {noun}: {angle}",
    body: "A detailed look at {company}'s recent performance and outlook. {take}",
    slots: &[
        words("noun", &["Shares", "Stock", "Shares"]),
        words(
            "angle",
            &["What to Expect", "Analyst Views", "Market Outlook", "Performance Review"],
        ),
        words(
            "take",
            &[
                "Analysts remain divided on its future prospects.",
                "The company continues to focus on its core business segments.",
                "Recent market trends suggest cautious optimism for the stock.",
                "Investors are closely watching developments in the sector.",
            ],
        ),
    ],
};
