//! Built-in reference data: the listed universe, curated recommendation
//! overrides and the index record served when a symbol is unknown.

use std::collections::HashMap;

use crate::domain::{Lookup, Rating, RecommendationOverride, StockRef};

pub const INDEX_SYMBOL: &str = "NIFTY";

const NIFTY: StockRef = StockRef {
    symbol: INDEX_SYMBOL,
    name: "NIFTY 50 Index",
    sector: "Index",
    exchange: "NSE",
    industry: "Market Index",
    description: "Benchmark index of the National Stock Exchange tracking 50 large, liquid Indian companies.",
};

/// Immutable lookup table, built once and shared.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    stocks: &'static [StockRef],
    by_symbol: HashMap<&'static str, usize>,
    overrides: HashMap<&'static str, RecommendationOverride>,
}

impl ReferenceTable {
    pub fn builtin() -> Self {
        let by_symbol = STOCKS
            .iter()
            .enumerate()
            .map(|(i, s)| (s.symbol, i))
            .collect();
        let overrides = OVERRIDES.iter().copied().collect();
        Self {
            stocks: STOCKS,
            by_symbol,
            overrides,
        }
    }

    pub fn all(&self) -> &[StockRef] {
        self.stocks
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Exact match after trimming and upper-casing.
    pub fn lookup(&self, symbol: &str) -> Lookup<&StockRef> {
        let key = symbol.trim().to_ascii_uppercase();
        self.by_symbol
            .get(key.as_str())
            .map(|&i| &self.stocks[i])
            .into()
    }

    /// Case-insensitive substring match on symbol or name. Empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&StockRef> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.stocks
            .iter()
            .filter(|s| s.symbol.to_lowercase().contains(&q) || s.name.to_lowercase().contains(&q))
            .collect()
    }

    pub fn override_for(&self, symbol: &str) -> Option<&RecommendationOverride> {
        self.overrides.get(symbol)
    }

    pub fn index_fallback(&self) -> &StockRef {
        &NIFTY
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

const OVERRIDES: &[(&str, RecommendationOverride)] = &[
    (
        "RELIANCE",
        RecommendationOverride {
            rating: Rating::StrongBuy,
            reasons: &[
                "Strong growth in digital and retail segments",
                "Robust oil-to-chemicals business performance",
                "Continued deleveraging strengthening balance sheet",
                "Expansion in green energy demonstrates forward-thinking",
            ],
            strength: 85,
        },
    ),
    (
        "TCS",
        RecommendationOverride {
            rating: Rating::Buy,
            reasons: &[
                "Steady order book growth",
                "Industry-leading margins maintained",
                "Strong cash generation and shareholder returns",
                "Expanding digital services portfolio",
            ],
            strength: 78,
        },
    ),
    (
        "HDFCBANK",
        RecommendationOverride {
            rating: Rating::Buy,
            reasons: &[
                "Strong deposit franchise",
                "Industry-leading asset quality",
                "Consistent ROA and ROE metrics",
                "Accelerated digital banking adoption",
            ],
            strength: 82,
        },
    ),
    (
        "INFY",
        RecommendationOverride {
            rating: Rating::Buy,
            reasons: &[
                "Robust deal pipeline",
                "Strong digital services growth",
                "Healthy operating margins",
                "Consistent dividend payouts",
            ],
            strength: 75,
        },
    ),
    (
        "SBIN",
        RecommendationOverride {
            rating: Rating::Hold,
            reasons: &[
                "Improving asset quality",
                "Concerns over government influence",
                "Recent rally makes valuation stretched",
                "Sector-wide credit growth challenges",
            ],
            strength: 65,
        },
    ),
    (
        "TATAMOTORS",
        RecommendationOverride {
            rating: Rating::Buy,
            reasons: &[
                "JLR performance improving",
                "Strong EV transition strategy",
                "Domestic commercial vehicle recovery",
                "New model launches driving growth",
            ],
            strength: 78,
        },
    ),
    (
        "MARUTI",
        RecommendationOverride {
            rating: Rating::Hold,
            reasons: &[
                "Market share pressure from competition",
                "Delayed EV strategy implementation",
                "Rising input costs affecting margins",
                "Premium segment underrepresentation",
            ],
            strength: 60,
        },
    ),
    (
        "BHARTIARTL",
        RecommendationOverride {
            rating: Rating::StrongBuy,
            reasons: &[
                "ARPU improvement trajectory",
                "Strong 5G spectrum positioning",
                "Robust subscriber additions",
                "Digital services ecosystem expansion",
            ],
            strength: 88,
        },
    ),
];

const STOCKS: &[StockRef] = &[
    StockRef {
        symbol: "RELIANCE",
        name: "Reliance Industries Ltd.",
        sector: "Energy",
        exchange: "NSE",
        industry: "Oil & Gas",
        description: "India's largest private sector company with businesses in energy, petrochemicals, textiles, retail, and telecommunications.",
    },
    StockRef {
        symbol: "TCS",
        name: "Tata Consultancy Services Ltd.",
        sector: "IT",
        exchange: "NSE",
        industry: "Software",
        description: "India's largest IT services company offering consulting and business solutions globally.",
    },
    StockRef {
        symbol: "HDFCBANK",
        name: "HDFC Bank Ltd.",
        sector: "Banking",
        exchange: "NSE",
        industry: "Private Banking",
        description: "India's largest private sector bank by assets offering a wide range of banking products and financial services.",
    },
    StockRef {
        symbol: "INFY",
        name: "Infosys Ltd.",
        sector: "IT",
        exchange: "NSE",
        industry: "Software",
        description: "A global leader in next-generation digital services and consulting, enabling clients to navigate digital transformation.",
    },
    StockRef {
        symbol: "HINDUNILVR",
        name: "Hindustan Unilever Ltd.",
        sector: "FMCG",
        exchange: "NSE",
        industry: "Consumer Goods",
        description: "India's largest fast-moving consumer goods company with products in home care, beauty & personal care, and foods & refreshment.",
    },
    StockRef {
        symbol: "ICICIBANK",
        name: "ICICI Bank Ltd.",
        sector: "Banking",
        exchange: "NSE",
        industry: "Private Banking",
        description: "Second largest private sector bank in India offering a wide range of banking products and financial services.",
    },
    StockRef {
        symbol: "SBIN",
        name: "State Bank of India",
        sector: "Banking",
        exchange: "NSE",
        industry: "Public Banking",
        description: "India's largest public sector bank offering a wide range of banking products and services.",
    },
    StockRef {
        symbol: "BAJFINANCE",
        name: "Bajaj Finance Ltd.",
        sector: "Finance",
        exchange: "NSE",
        industry: "NBFC",
        description: "One of India's leading non-banking financial companies (NBFC) with diversified lending products.",
    },
    StockRef {
        symbol: "BHARTIARTL",
        name: "Bharti Airtel Ltd.",
        sector: "Telecom",
        exchange: "NSE",
        industry: "Telecommunications",
        description: "One of India's leading telecommunications service providers with operations in 18 countries.",
    },
    StockRef {
        symbol: "ITC",
        name: "ITC Ltd.",
        sector: "FMCG",
        exchange: "NSE",
        industry: "Diversified",
        description: "Multi-business conglomerate with diversified presence in FMCG, hotels, paperboards & packaging, agri business & IT.",
    },
    StockRef {
        symbol: "KOTAKBANK",
        name: "Kotak Mahindra Bank Ltd.",
        sector: "Banking",
        exchange: "NSE",
        industry: "Private Banking",
        description: "One of India's leading private sector banks offering banking and financial services.",
    },
    StockRef {
        symbol: "LT",
        name: "Larsen & Toubro Ltd.",
        sector: "Construction",
        exchange: "NSE",
        industry: "Engineering & Construction",
        description: "India's largest construction company and a leading technology, engineering, construction, manufacturing and financial services conglomerate.",
    },
    StockRef {
        symbol: "ASIANPAINT",
        name: "Asian Paints Ltd.",
        sector: "Consumer Goods",
        exchange: "NSE",
        industry: "Paints",
        description: "India's leading paint company and ranked among the top decorative paints companies in the world.",
    },
    StockRef {
        symbol: "MARUTI",
        name: "Maruti Suzuki India Ltd.",
        sector: "Automobile",
        exchange: "NSE",
        industry: "Passenger Vehicles",
        description: "India's largest passenger car manufacturer with more than 50% market share in the Indian passenger car market.",
    },
    StockRef {
        symbol: "AXISBANK",
        name: "Axis Bank Ltd.",
        sector: "Banking",
        exchange: "NSE",
        industry: "Private Banking",
        description: "Third largest private sector bank in India offering a wide range of banking products and financial services.",
    },
    StockRef {
        symbol: "WIPRO",
        name: "Wipro Ltd.",
        sector: "IT",
        exchange: "NSE",
        industry: "Software",
        description: "Global information technology, consulting and business process services company providing solutions to enable clients do business better.",
    },
    StockRef {
        symbol: "HCLTECH",
        name: "HCL Technologies Ltd.",
        sector: "IT",
        exchange: "NSE",
        industry: "Software",
        description: "Global technology company that helps enterprises reimagine their businesses for the digital age.",
    },
    StockRef {
        symbol: "SUNPHARMA",
        name: "Sun Pharmaceutical Industries Ltd.",
        sector: "Pharma",
        exchange: "NSE",
        industry: "Pharmaceuticals",
        description: "India's largest pharmaceutical company and the fifth largest specialty generic company globally.",
    },
    StockRef {
        symbol: "TATASTEEL",
        name: "Tata Steel Ltd.",
        sector: "Metal",
        exchange: "NSE",
        industry: "Steel",
        description: "Among the top global steel companies with an annual crude steel capacity of 34 million tonnes per annum.",
    },
    StockRef {
        symbol: "ONGC",
        name: "Oil & Natural Gas Corporation Ltd.",
        sector: "Energy",
        exchange: "NSE",
        industry: "Oil & Gas",
        description: "India's largest government-owned oil and gas corporation contributing 70% to India's domestic production.",
    },
    StockRef {
        symbol: "TATAMOTORS",
        name: "Tata Motors Ltd.",
        sector: "Automobile",
        exchange: "NSE",
        industry: "Automotive",
        description: "India's largest automobile company, also owning the Jaguar Land Rover (JLR) brand.",
    },
    StockRef {
        symbol: "NTPC",
        name: "NTPC Ltd.",
        sector: "Power",
        exchange: "NSE",
        industry: "Power Generation",
        description: "India's largest power generation company with a power generating capacity of 65,810 MW.",
    },
    StockRef {
        symbol: "BAJAJFINSV",
        name: "Bajaj Finserv Ltd.",
        sector: "Finance",
        exchange: "NSE",
        industry: "Financial Services",
        description: "Holding company for Bajaj Finance, Bajaj Allianz General Insurance and Bajaj Allianz Life Insurance.",
    },
    StockRef {
        symbol: "BAJAJ-AUTO",
        name: "Bajaj Auto Ltd.",
        sector: "Automobile",
        exchange: "NSE",
        industry: "Two-wheelers",
        description: "World's fourth largest two and three-wheeler manufacturer with presence in over 70 countries.",
    },
    StockRef {
        symbol: "TITAN",
        name: "Titan Company Ltd.",
        sector: "Consumer Goods",
        exchange: "NSE",
        industry: "Watches & Jewelry",
        description: "Leading manufacturer of watches, jewelry, and eyewear in India with brands like Tanishq, Titan, Fastrack, etc.",
    },
    StockRef {
        symbol: "ADANIENT",
        name: "Adani Enterprises Ltd.",
        sector: "Diversified",
        exchange: "NSE",
        industry: "Infrastructure",
        description: "Flagship company of the Adani Group with interests in resources, logistics, energy and agro.",
    },
    StockRef {
        symbol: "ADANIPORTS",
        name: "Adani Ports and Special Economic Zone Ltd.",
        sector: "Infrastructure",
        exchange: "NSE",
        industry: "Ports",
        description: "India's largest private port operator with ports across the eastern and western coasts of India.",
    },
    StockRef {
        symbol: "ADANIPOWER",
        name: "Adani Power Ltd.",
        sector: "Power",
        exchange: "NSE",
        industry: "Power Generation",
        description: "India's largest private thermal power producer with capacity of 12,450 MW.",
    },
    StockRef {
        symbol: "ADANIGREEN",
        name: "Adani Green Energy Ltd.",
        sector: "Energy",
        exchange: "NSE",
        industry: "Renewable Energy",
        description: "One of the largest renewable energy companies in India with a renewable portfolio of 14,795 MW.",
    },
    StockRef {
        symbol: "ULTRACEMCO",
        name: "UltraTech Cement Ltd.",
        sector: "Cement",
        exchange: "NSE",
        industry: "Cement",
        description: "India's largest cement company and the world's third-largest cement company with annual capacity of 116.75 MTPA.",
    },
    StockRef {
        symbol: "JSWSTEEL",
        name: "JSW Steel Ltd.",
        sector: "Metal",
        exchange: "NSE",
        industry: "Steel",
        description: "India's leading integrated steel manufacturer with 18 MTPA capacity.",
    },
    StockRef {
        symbol: "TECHM",
        name: "Tech Mahindra Ltd.",
        sector: "IT",
        exchange: "NSE",
        industry: "Software",
        description: "Fifth largest IT services company in India offering technology services and solutions.",
    },
    StockRef {
        symbol: "NESTLEIND",
        name: "Nestle India Ltd.",
        sector: "FMCG",
        exchange: "NSE",
        industry: "Food Processing",
        description: "Leading food and beverage company in India with popular brands like Maggi, Nescafe, KitKat, etc.",
    },
    StockRef {
        symbol: "DIVISLAB",
        name: "Divi's Laboratories Ltd.",
        sector: "Pharma",
        exchange: "NSE",
        industry: "Pharmaceuticals",
        description: "India's leading pharmaceutical company manufacturing active pharmaceutical ingredients.",
    },
    StockRef {
        symbol: "CIPLA",
        name: "Cipla Ltd.",
        sector: "Pharma",
        exchange: "NSE",
        industry: "Pharmaceuticals",
        description: "Global pharmaceutical company with a portfolio in respiratory, antiretroviral, urology, cardiology, and anti-infective segments.",
    },
    StockRef {
        symbol: "DRREDDY",
        name: "Dr. Reddy's Laboratories Ltd.",
        sector: "Pharma",
        exchange: "NSE",
        industry: "Pharmaceuticals",
        description: "Leading Indian pharmaceutical company with presence in over 20 countries and offering a wide range of medicines.",
    },
    StockRef {
        symbol: "SHREECEM",
        name: "Shree Cement Ltd.",
        sector: "Cement",
        exchange: "NSE",
        industry: "Cement",
        description: "One of India's largest cement manufacturers with an installed capacity of 43.40 MTPA.",
    },
    StockRef {
        symbol: "COALINDIA",
        name: "Coal India Ltd.",
        sector: "Energy",
        exchange: "NSE",
        industry: "Mining & Minerals",
        description: "World's largest coal producer and contributes to around 83% of India's coal production.",
    },
    StockRef {
        symbol: "GRASIM",
        name: "Grasim Industries Ltd.",
        sector: "Diversified",
        exchange: "NSE",
        industry: "Textiles & Chemicals",
        description: "Flagship company of the Aditya Birla Group with businesses in viscose staple fiber, chemicals, and cement.",
    },
    StockRef {
        symbol: "PIDILITIND",
        name: "Pidilite Industries Ltd.",
        sector: "Chemicals",
        exchange: "NSE",
        industry: "Adhesives",
        description: "India's leading manufacturer of adhesives, sealants, and construction chemicals with brands like Fevicol, Dr. Fixit, etc.",
    },
    StockRef {
        symbol: "INDUSINDBK",
        name: "IndusInd Bank Ltd.",
        sector: "Banking",
        exchange: "NSE",
        industry: "Private Banking",
        description: "New-generation Indian bank serving the retail and corporate banking sectors.",
    },
    StockRef {
        symbol: "M&M",
        name: "Mahindra & Mahindra Ltd.",
        sector: "Automobile",
        exchange: "NSE",
        industry: "Automotive",
        description: "Leading manufacturer of utility vehicles, tractors, and information technology services.",
    },
    StockRef {
        symbol: "BRITANNIA",
        name: "Britannia Industries Ltd.",
        sector: "FMCG",
        exchange: "NSE",
        industry: "Food Products",
        description: "India's leading food company with popular biscuit brands and a growing presence in dairy and bakery products.",
    },
    StockRef {
        symbol: "HEROMOTOCO",
        name: "Hero MotoCorp Ltd.",
        sector: "Automobile",
        exchange: "NSE",
        industry: "Two-wheelers",
        description: "World's largest manufacturer of two-wheelers with more than 50% market share in the Indian two-wheeler market.",
    },
    StockRef {
        symbol: "ZEEL",
        name: "Zee Entertainment Enterprises Ltd.",
        sector: "Media",
        exchange: "NSE",
        industry: "Media & Entertainment",
        description: "One of India's largest media and entertainment companies with presence in television, digital content, and live entertainment.",
    },
    StockRef {
        symbol: "BPCL",
        name: "Bharat Petroleum Corporation Ltd.",
        sector: "Energy",
        exchange: "NSE",
        industry: "Oil & Gas",
        description: "Second largest downstream oil company in India and one of the Fortune Global 500 companies.",
    },
    StockRef {
        symbol: "HDFCLIFE",
        name: "HDFC Life Insurance Company Ltd.",
        sector: "Insurance",
        exchange: "NSE",
        industry: "Life Insurance",
        description: "One of India's leading private life insurance companies offering a range of insurance products.",
    },
    StockRef {
        symbol: "SBILIFE",
        name: "SBI Life Insurance Company Ltd.",
        sector: "Insurance",
        exchange: "NSE",
        industry: "Life Insurance",
        description: "Joint venture between State Bank of India and BNP Paribas Cardif offering a range of life insurance products.",
    },
    StockRef {
        symbol: "DABUR",
        name: "Dabur India Ltd.",
        sector: "FMCG",
        exchange: "NSE",
        industry: "Consumer Goods",
        description: "Fourth largest FMCG company in India with a portfolio of over 250 herbal/ayurvedic products.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_unique_symbols() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.len(), 49);
        assert_eq!(table.by_symbol.len(), table.len());
    }

    #[test]
    fn lookup_normalises_case_and_whitespace() {
        let table = ReferenceTable::builtin();
        let found = table.lookup(" reliance ").found().unwrap();
        assert_eq!(found.symbol, "RELIANCE");
        assert_eq!(found.sector, "Energy");
        assert!(table.lookup("M&M").is_found());
        assert_eq!(table.lookup("UNKNOWN123"), Lookup::NotFound);
    }

    #[test]
    fn search_matches_symbol_or_name() {
        let table = ReferenceTable::builtin();
        let hits: Vec<_> = table.search("bank").iter().map(|s| s.symbol).collect();
        assert!(hits.contains(&"HDFCBANK"));
        assert!(hits.contains(&"SBIN")); // "State Bank of India"
        assert!(table.search("   ").is_empty());
    }

    #[test]
    fn overrides_refer_to_listed_symbols() {
        let table = ReferenceTable::builtin();
        for (symbol, _) in OVERRIDES {
            assert!(table.lookup(symbol).is_found(), "{symbol}");
        }
        assert_eq!(table.override_for("BHARTIARTL").unwrap().strength, 88);
        assert!(table.override_for("WIPRO").is_none());
        assert!(table.lookup(INDEX_SYMBOL) == Lookup::NotFound);
        assert_eq!(table.index_fallback().industry, "Market Index");
    }
}
