//! # Quote Result
//!
//! The server-computed price for a set of selections.
//!
//! A [`QuoteResult`] carries the authoritative one-time and monthly
//! totals together with an itemized breakdown. The invariant is that
//! each total equals the sum of the corresponding field across the
//! breakdown lines; the evaluator upholds it by construction.

use crate::domain::value_objects::{OptionId, StepId};
use serde::{Deserialize, Serialize};

/// One itemized line of a quote: a matched selection and its prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Step the selection belongs to.
    pub step: StepId,
    /// The selected option.
    pub option: OptionId,
    /// One-time price contributed by this line.
    pub price: u32,
    /// Monthly price contributed by this line.
    pub monthly: u32,
}

/// The authoritative quote for a set of selections.
///
/// Totals are widened to `u64` and accumulated with saturating
/// arithmetic, so a payload repeating the same option arbitrarily often
/// cannot overflow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Sum of one-time prices across the breakdown.
    pub total_price: u64,
    /// Sum of monthly prices across the breakdown.
    pub monthly_price: u64,
    /// Itemized lines in catalog order, then caller order within a step.
    pub breakdown: Vec<BreakdownLine>,
}

impl QuoteResult {
    /// Returns the zero quote with an empty breakdown.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            total_price: 0,
            monthly_price: 0,
            breakdown: Vec::new(),
        }
    }

    /// Returns true if nothing priced matched the selections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}

impl Default for QuoteResult {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_quote_is_empty() {
        let quote = QuoteResult::zero();
        assert!(quote.is_empty());
        assert_eq!(quote.total_price, 0);
        assert_eq!(quote.monthly_price, 0);
    }

    #[test]
    fn serializes_totals_in_camel_case() {
        let quote = QuoteResult {
            total_price: 8000,
            monthly_price: 500,
            breakdown: vec![BreakdownLine {
                step: StepId::new("type"),
                option: OptionId::new("showcase"),
                price: 8000,
                monthly: 0,
            }],
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["totalPrice"], 8000);
        assert_eq!(json["monthlyPrice"], 500);
        assert_eq!(json["breakdown"][0]["step"], "type");
    }
}
