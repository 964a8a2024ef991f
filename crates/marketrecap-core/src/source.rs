use std::fmt::{Display, Formatter};

/// Upstream services the recap talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Coingecko,
    Alphavantage,
    Fred,
    Anthropic,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coingecko => "coingecko",
            Self::Alphavantage => "alphavantage",
            Self::Fred => "fred",
            Self::Anthropic => "anthropic",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
