use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rating {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
            Self::StrongSell => "Strong Sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Hand-curated view for a few well-known symbols. Wins over any heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationOverride {
    pub rating: Rating,
    pub reasons: &'static [&'static str],
    pub strength: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub rating: Rating,
    pub reasons: Vec<String>,
    pub strength: u32,
    pub updated: String,
}

impl Recommendation {
    pub fn from_override(o: &RecommendationOverride, updated: String) -> Self {
        Self {
            rating: o.rating,
            reasons: o.reasons.iter().map(|r| r.to_string()).collect(),
            strength: o.strength,
            updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_serialize_with_spaces_and_sort_bullish_first() {
        assert_eq!(
            serde_json::to_string(&Rating::StrongBuy).unwrap(),
            "\"Strong Buy\""
        );
        assert_eq!(serde_json::to_string(&Trend::Down).unwrap(), "\"down\"");

        let mut v = vec![Rating::Sell, Rating::Hold, Rating::StrongBuy, Rating::Buy];
        v.sort();
        assert_eq!(v, vec![Rating::StrongBuy, Rating::Buy, Rating::Hold, Rating::Sell]);
    }
}
