//! Daily labor-rate table.
//!
//! Cost of one crew member for one day, keyed by trade name. Trades not in
//! the table fall back to a default rate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rate applied to trades missing from the table (currency/person/day).
pub const DEFAULT_DAILY_RATE: f64 = 700.0;

/// Labor cost model: trade name → daily rate per person.
///
/// # Example
/// ```
/// use takt_plan::models::LaborRates;
///
/// let rates = LaborRates::default().with_rate("Glazing", 900.0);
/// assert_eq!(rates.rate("Electrical"), 850.0);
/// assert_eq!(rates.rate("Glazing"), 900.0);
/// assert_eq!(rates.rate("Unknown"), 700.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRates {
    /// Trade name → rate.
    pub rates: BTreeMap<String, f64>,
    /// Rate for unlisted trades.
    pub default_rate: f64,
}

impl Default for LaborRates {
    fn default() -> Self {
        let rates = [
            ("Electrical", 850.0),
            ("Plaster", 650.0),
            ("Painting", 600.0),
            ("Tiling", 750.0),
            ("Suspended ceiling", 700.0),
            ("Wall plaster", 650.0),
            ("Screed", 600.0),
            ("Concrete formwork", 800.0),
            ("Mechanical", 900.0),
            ("Steel joinery", 950.0),
        ]
        .into_iter()
        .map(|(trade, rate)| (trade.to_string(), rate))
        .collect();

        Self {
            rates,
            default_rate: DEFAULT_DAILY_RATE,
        }
    }
}

impl LaborRates {
    /// Creates an empty table where every trade costs `default_rate`.
    pub fn flat(default_rate: f64) -> Self {
        Self {
            rates: BTreeMap::new(),
            default_rate,
        }
    }

    /// Sets or replaces the rate of a trade.
    pub fn with_rate(mut self, trade: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(trade.into(), rate);
        self
    }

    /// Sets the fallback rate.
    pub fn with_default_rate(mut self, rate: f64) -> Self {
        self.default_rate = rate;
        self
    }

    /// Daily rate per person for a trade.
    #[inline]
    pub fn rate(&self, trade: &str) -> f64 {
        self.rates.get(trade).copied().unwrap_or(self.default_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let rates = LaborRates::default();
        assert_eq!(rates.rates.len(), 10);
        assert_eq!(rates.rate("Electrical"), 850.0);
        assert_eq!(rates.rate("Steel joinery"), 950.0);
        assert_eq!(rates.rate("Painting"), 600.0);
    }

    #[test]
    fn test_unknown_trade_uses_default() {
        let rates = LaborRates::default();
        assert_eq!(rates.rate("A"), DEFAULT_DAILY_RATE);
    }

    #[test]
    fn test_flat_table() {
        let rates = LaborRates::flat(100.0).with_rate("Tiling", 200.0);
        assert_eq!(rates.rate("Tiling"), 200.0);
        assert_eq!(rates.rate("Electrical"), 100.0);
    }
}
