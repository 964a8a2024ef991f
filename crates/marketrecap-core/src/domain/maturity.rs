use std::fmt::{Display, Formatter};

/// Constant-maturity Treasury points understood by the yield providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TreasuryMaturity {
    ThreeMonth,
    TwoYear,
    FiveYear,
    SevenYear,
    TenYear,
    ThirtyYear,
}

impl TreasuryMaturity {
    /// `maturity` query value for the Alpha Vantage `TREASURY_YIELD` function.
    pub const fn alphavantage_param(self) -> &'static str {
        match self {
            Self::ThreeMonth => "3month",
            Self::TwoYear => "2year",
            Self::FiveYear => "5year",
            Self::SevenYear => "7year",
            Self::TenYear => "10year",
            Self::ThirtyYear => "30year",
        }
    }

    /// FRED constant-maturity series id.
    pub const fn fred_series(self) -> &'static str {
        match self {
            Self::ThreeMonth => "DGS3MO",
            Self::TwoYear => "DGS2",
            Self::FiveYear => "DGS5",
            Self::SevenYear => "DGS7",
            Self::TenYear => "DGS10",
            Self::ThirtyYear => "DGS30",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::ThreeMonth => "3M",
            Self::TwoYear => "2Y",
            Self::FiveYear => "5Y",
            Self::SevenYear => "7Y",
            Self::TenYear => "10Y",
            Self::ThirtyYear => "30Y",
        }
    }

    pub const fn months(self) -> u32 {
        match self {
            Self::ThreeMonth => 3,
            Self::TwoYear => 24,
            Self::FiveYear => 60,
            Self::SevenYear => 84,
            Self::TenYear => 120,
            Self::ThirtyYear => 360,
        }
    }

    /// Human label such as `10Y Treasury`.
    pub fn label(self) -> String {
        format!("{} Treasury", self.short_label())
    }
}

impl Display for TreasuryMaturity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alphavantage_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_term_length() {
        assert!(TreasuryMaturity::ThreeMonth < TreasuryMaturity::TwoYear);
        assert!(TreasuryMaturity::TwoYear.months() < TreasuryMaturity::TenYear.months());
    }

    #[test]
    fn benchmark_labels() {
        assert_eq!(TreasuryMaturity::TenYear.label(), "10Y Treasury");
        assert_eq!(TreasuryMaturity::TenYear.fred_series(), "DGS10");
        assert_eq!(TreasuryMaturity::ThreeMonth.alphavantage_param(), "3month");
    }
}
