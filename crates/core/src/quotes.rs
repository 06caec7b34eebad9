use std::{fmt, str::FromStr};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A snapshot of the three tracked prices.
///
/// `Quotes` is the payload a [`QuoteFeed`](crate::QuoteFeed) pushes to its
/// observers. It is plain data with no identity beyond its field values:
/// copying it hands each observer its own snapshot, so nothing an observer
/// does can reach back into the feed's stored prices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Quotes {
    /// Price for IBM.
    pub ibm: f64,

    /// Price for AAPL.
    pub aapl: f64,

    /// Price for GOOG.
    pub goog: f64,
}

impl Quotes {
    /// Returns the price for a symbol.
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> f64 {
        match symbol {
            Symbol::Ibm => self.ibm,
            Symbol::Aapl => self.aapl,
            Symbol::Goog => self.goog,
        }
    }

    /// Overwrites the price for a symbol.
    pub fn set(&mut self, symbol: Symbol, price: f64) {
        match symbol {
            Symbol::Ibm => self.ibm = price,
            Symbol::Aapl => self.aapl = price,
            Symbol::Goog => self.goog = price,
        }
    }
}

/// One of the three tracked ticker symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// International Business Machines.
    Ibm,

    /// Apple.
    Aapl,

    /// Google.
    Goog,
}

impl Symbol {
    /// All symbols, in snapshot field order.
    pub const ALL: [Self; 3] = [Self::Ibm, Self::Aapl, Self::Goog];

    /// Returns the symbol's ticker string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ibm => "IBM",
            Self::Aapl => "AAPL",
            Self::Goog => "GOOG",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown ticker symbol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown ticker symbol: {0}")]
pub struct ParseSymbolError(String);

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IBM" => Ok(Self::Ibm),
            "AAPL" => Ok(Self::Aapl),
            "GOOG" => Ok(Self::Goog),
            _ => Err(ParseSymbolError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn get_and_set_round_trip_by_symbol() {
        let mut quotes = Quotes::default();

        for (i, symbol) in Symbol::ALL.into_iter().enumerate() {
            quotes.set(symbol, 100.0 + i as f64);
        }

        assert_relative_eq!(quotes.get(Symbol::Ibm), 100.0);
        assert_relative_eq!(quotes.get(Symbol::Aapl), 101.0);
        assert_relative_eq!(quotes.get(Symbol::Goog), 102.0);
    }

    #[test]
    fn set_leaves_other_fields_untouched() {
        let mut quotes = Quotes {
            ibm: 1.0,
            aapl: 2.0,
            goog: 3.0,
        };

        quotes.set(Symbol::Aapl, 20.0);

        assert_relative_eq!(quotes.ibm, 1.0);
        assert_relative_eq!(quotes.aapl, 20.0);
        assert_relative_eq!(quotes.goog, 3.0);
    }

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!("IBM".parse(), Ok(Symbol::Ibm));
        assert_eq!("aapl".parse(), Ok(Symbol::Aapl));
        assert_eq!("Goog".parse(), Ok(Symbol::Goog));
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = "MSFT".parse::<Symbol>().unwrap_err();

        assert_eq!(err.to_string(), "unknown ticker symbol: MSFT");
    }

    #[test]
    fn displays_ticker_strings() {
        let rendered: Vec<String> = Symbol::ALL.iter().map(ToString::to_string).collect();

        assert_eq!(rendered, ["IBM", "AAPL", "GOOG"]);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn serializes_quotes_as_named_fields() {
        let quotes = Quotes {
            ibm: 197.0,
            aapl: 677.6,
            goog: 676.4,
        };

        let json = serde_json::to_string(&quotes).unwrap();
        let back: Quotes = serde_json::from_str(&json).unwrap();

        assert_eq!(json, r#"{"ibm":197.0,"aapl":677.6,"goog":676.4}"#);
        assert_eq!(back, quotes);
    }
}
