use std::fmt::{Display, Formatter};

/// Majority-vote direction of the tracked assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Mixed,
}

impl Sentiment {
    /// Count positive against negative percent changes. A strictly larger
    /// side wins; equal counts, including none at all, are `Mixed`.
    pub fn from_percent_changes<I>(changes: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (positive, negative) = changes
            .into_iter()
            .fold((0_usize, 0_usize), |(up, down), change| {
                if change > 0.0 {
                    (up + 1, down)
                } else if change < 0.0 {
                    (up, down + 1)
                } else {
                    (up, down)
                }
            });

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Self::Bullish,
            std::cmp::Ordering::Less => Self::Bearish,
            std::cmp::Ordering::Equal => Self::Mixed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Mixed => "mixed",
        }
    }

    /// Upper-case label used in the summary section and the narrative prompt.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
            Self::Mixed => "MIXED",
        }
    }

    pub const fn risk_appetite(self) -> RiskAppetite {
        match self {
            Self::Bullish => RiskAppetite::High,
            Self::Bearish => RiskAppetite::Low,
            Self::Mixed => RiskAppetite::Mixed,
        }
    }

    pub const fn takeaway(self) -> &'static str {
        match self {
            Self::Bullish => "Risk-on environment favors crypto",
            Self::Bearish => "Risk-off sentiment prevails",
            Self::Mixed => "Mixed signals suggest cautious approach",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskAppetite {
    High,
    Low,
    Mixed,
}

impl RiskAppetite {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
            Self::Mixed => "Mixed",
        }
    }
}
