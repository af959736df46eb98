//! # Pricing Service
//!
//! Pure quote evaluation over the rule catalog.
//!
//! [`evaluate`] turns a caller's selections into the authoritative
//! quote. It is deterministic, has no side effects, and is total: it
//! never fails on malformed input. Entries the catalog does not know
//! are skipped rather than rejected, so a client running a newer or
//! older option set than the server still gets a quote for whatever
//! does match. The server recomputes the price on every submission, so
//! a partial breakdown is visible to the operator instead of being
//! silently trusted.
//!
//! # Examples
//!
//! ```
//! use studio_quote::domain::services::pricing;
//! use studio_quote::domain::value_objects::{RuleCatalog, Selections};
//!
//! let catalog = RuleCatalog::standard();
//! let selections = Selections::new()
//!     .with("type", "showcase")
//!     .with_many("services", ["seo", "maintenance"]);
//!
//! let quote = pricing::evaluate(&selections, &catalog);
//! assert_eq!(quote.total_price, 10000);
//! assert_eq!(quote.monthly_price, 500);
//! ```

use crate::domain::value_objects::{BreakdownLine, QuoteResult, RuleCatalog, Selections};

/// Computes the quote for a set of selections against a catalog.
///
/// Steps are visited in catalog order; within a multi-select step the
/// caller's option order is preserved. Selections for steps or options
/// absent from the catalog contribute nothing and produce no breakdown
/// line.
#[must_use]
pub fn evaluate(selections: &Selections, catalog: &RuleCatalog) -> QuoteResult {
    let mut total_price: u64 = 0;
    let mut monthly_price: u64 = 0;
    let mut breakdown = Vec::new();

    for step in catalog.steps() {
        let Some(selected) = selections.get(step.step_id()) else {
            continue;
        };

        for option_id in selected.iter() {
            let Some(rule) = step.option_rule(option_id) else {
                continue;
            };

            total_price = total_price.saturating_add(u64::from(rule.price));
            monthly_price = monthly_price.saturating_add(u64::from(rule.monthly));
            breakdown.push(BreakdownLine {
                step: step.step_id().clone(),
                option: option_id.clone(),
                price: rule.price,
                monthly: rule.monthly,
            });
        }
    }

    QuoteResult {
        total_price,
        monthly_price,
        breakdown,
    }
}
