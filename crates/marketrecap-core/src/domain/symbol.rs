use std::fmt::{Display, Formatter};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 10;

/// Upper-case crypto ticker as printed in the report, e.g. `BTC` or `1INCH`.
///
/// Tickers are ASCII alphanumerics and need at least one letter, so a bare
/// number never passes as an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let ticker = input.trim().to_ascii_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = ticker.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        if let Some((index, ch)) = ticker
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_alphanumeric())
        {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        if !ticker.bytes().any(|byte| byte.is_ascii_alphabetic()) {
            return Err(ValidationError::SymbolWithoutLetter { value: ticker });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_case_input_is_upper_cased() {
        let parsed = Symbol::parse(" eth ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "ETH");
        assert_eq!(parsed.to_string(), "ETH");
    }

    #[test]
    fn leading_digit_tickers_are_accepted() {
        assert_eq!(Symbol::parse("1inch").expect("valid ticker").as_str(), "1INCH");
        assert_eq!(Symbol::parse("2Z").expect("valid ticker").as_str(), "2Z");
    }

    #[test]
    fn pair_notation_is_rejected() {
        let err = Symbol::parse("BTC-USD").expect_err("must fail");
        assert_eq!(err, ValidationError::SymbolInvalidChar { ch: '-', index: 3 });
    }

    #[test]
    fn all_digit_ticker_is_rejected() {
        let err = Symbol::parse("1000").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolWithoutLetter { .. }));
    }

    #[test]
    fn blank_and_oversized_tickers_are_rejected() {
        assert_eq!(Symbol::parse("   "), Err(ValidationError::EmptySymbol));
        assert_eq!(
            Symbol::parse("ABCDEFGHIJK"),
            Err(ValidationError::SymbolTooLong { len: 11, max: 10 })
        );
    }
}
