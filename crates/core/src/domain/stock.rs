use serde::Serialize;

/// Static description of a listed company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockRef {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub exchange: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
}

impl StockRef {
    pub fn sector_class(&self) -> SectorClass {
        SectorClass::from_sector(self.sector)
    }
}

/// Sector grouping used to pick realistic fundamental ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectorClass {
    InformationTechnology,
    FinancialServices,
    Healthcare,
    ConsumerGoods,
    Energy,
    BasicMaterials,
    Other,
}

impl SectorClass {
    pub fn from_sector(sector: &str) -> Self {
        match sector {
            "IT" | "Information Technology" => Self::InformationTechnology,
            "Banking" | "Finance" | "Insurance" | "Financial Services" => Self::FinancialServices,
            "Pharma" | "Healthcare" => Self::Healthcare,
            "FMCG" | "Consumer Goods" => Self::ConsumerGoods,
            "Energy" | "Power" => Self::Energy,
            "Metal" | "Cement" | "Chemicals" | "Basic Materials" => Self::BasicMaterials,
            _ => Self::Other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::InformationTechnology => "Information Technology",
            Self::FinancialServices => "Financial Services",
            Self::Healthcare => "Healthcare",
            Self::ConsumerGoods => "Consumer Goods",
            Self::Energy => "Energy",
            Self::BasicMaterials => "Basic Materials",
            Self::Other => "Diversified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_reference_sectors_onto_classes() {
        assert_eq!(SectorClass::from_sector("IT"), SectorClass::InformationTechnology);
        assert_eq!(SectorClass::from_sector("Insurance"), SectorClass::FinancialServices);
        assert_eq!(SectorClass::from_sector("Power"), SectorClass::Energy);
        assert_eq!(SectorClass::from_sector("Cement"), SectorClass::BasicMaterials);
        assert_eq!(SectorClass::from_sector("Automobile"), SectorClass::Other);
        assert_eq!(SectorClass::from_sector("Index"), SectorClass::Other);
    }
}
