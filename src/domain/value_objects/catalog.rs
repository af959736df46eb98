//! # Rule Catalog
//!
//! The immutable pricing rule table for the selection wizard.
//!
//! The catalog maps every wizard step to the options selectable within
//! it, and every option to its one-time and recurring price. It is the
//! sole source of truth for pricing: it is built once at process start,
//! injected where needed, and never mutated afterwards. Changing a price
//! means shipping a new build, not calling an endpoint.
//!
//! Step order in the catalog is declaration order; the quote breakdown
//! follows it, so the builder preserves insertion order.
//!
//! # Examples
//!
//! ```
//! use studio_quote::domain::value_objects::{OptionRule, RuleCatalog, StepId, StepRules};
//!
//! let catalog = RuleCatalog::builder()
//!     .step(
//!         StepRules::new("type")
//!             .with_option("simple", OptionRule::one_time(7000))
//!             .with_option("showcase", OptionRule::one_time(8000)),
//!     )
//!     .build();
//!
//! let rule = catalog.option_rule(&StepId::new("type"), &"showcase".into());
//! assert_eq!(rule.map(|r| r.price), Some(8000));
//! ```

use crate::domain::value_objects::{OptionId, StepId};

/// Pricing rule for a single selectable option.
///
/// Prices are non-negative integers in minor-agnostic currency units.
/// Both components default to zero for options that carry no charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionRule {
    /// One-time price charged when the option is selected.
    pub price: u32,
    /// Recurring monthly price.
    pub monthly: u32,
}

impl OptionRule {
    /// Creates a rule with both a one-time and a monthly component.
    #[must_use]
    pub fn new(price: u32, monthly: u32) -> Self {
        Self { price, monthly }
    }

    /// Creates a rule with only a one-time price.
    #[must_use]
    pub fn one_time(price: u32) -> Self {
        Self { price, monthly: 0 }
    }

    /// Creates a rule with only a recurring monthly price.
    #[must_use]
    pub fn recurring(monthly: u32) -> Self {
        Self { price: 0, monthly }
    }

    /// Creates a rule that contributes no charge.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// Returns true if the option contributes no charge at all.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0 && self.monthly == 0
    }
}

/// The selectable options of one wizard step and their prices.
///
/// Option identifiers are unique within a step; adding an option under
/// an existing identifier replaces the previous rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRules {
    step_id: StepId,
    options: Vec<(OptionId, OptionRule)>,
}

impl StepRules {
    /// Creates an empty rule set for the given step.
    #[must_use]
    pub fn new(step_id: impl Into<StepId>) -> Self {
        Self {
            step_id: step_id.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option rule, replacing any existing rule for the same id.
    #[must_use]
    pub fn with_option(mut self, option_id: impl Into<OptionId>, rule: OptionRule) -> Self {
        let option_id = option_id.into();
        if let Some(existing) = self.options.iter_mut().find(|(id, _)| *id == option_id) {
            existing.1 = rule;
        } else {
            self.options.push((option_id, rule));
        }
        self
    }

    /// Returns the step identifier.
    #[must_use]
    pub fn step_id(&self) -> &StepId {
        &self.step_id
    }

    /// Looks up the rule for an option, if the option exists.
    #[must_use]
    pub fn option_rule(&self, option_id: &OptionId) -> Option<&OptionRule> {
        self.options
            .iter()
            .find(|(id, _)| id == option_id)
            .map(|(_, rule)| rule)
    }

    /// Returns the number of options in this step.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if this step has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Immutable catalog of pricing rules for every wizard step.
///
/// Lookup is by step key; iteration follows declaration order. The
/// catalog carries no behavior beyond read-only access.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleCatalog {
    steps: Vec<StepRules>,
}

impl RuleCatalog {
    /// Returns a builder for assembling a catalog.
    #[must_use]
    pub fn builder() -> RuleCatalogBuilder {
        RuleCatalogBuilder::default()
    }

    /// Returns the production pricing table for the project configurator.
    ///
    /// This table must stay synchronized with the frontend's display
    /// copy; keeping the two aligned is an operational concern handled
    /// at deployment time.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .step(
                StepRules::new("goals")
                    .with_option("leads", OptionRule::free())
                    .with_option("brand", OptionRule::free())
                    .with_option("sales", OptionRule::free()),
            )
            .step(
                StepRules::new("type")
                    .with_option("simple", OptionRule::one_time(7000))
                    .with_option("showcase", OptionRule::one_time(8000))
                    .with_option("ecommerce", OptionRule::one_time(10000)),
            )
            .step(
                StepRules::new("services")
                    .with_option("seo", OptionRule::one_time(2000))
                    .with_option("maintenance", OptionRule::recurring(500))
                    .with_option("hosting", OptionRule::free()),
            )
            .build()
    }

    /// Iterates over the steps in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = &StepRules> {
        self.steps.iter()
    }

    /// Looks up the rules for a step, if the step exists.
    #[must_use]
    pub fn rules_for(&self, step_id: &StepId) -> Option<&StepRules> {
        self.steps.iter().find(|s| s.step_id() == step_id)
    }

    /// Looks up the rule for an option within a step.
    #[must_use]
    pub fn option_rule(&self, step_id: &StepId, option_id: &OptionId) -> Option<&OptionRule> {
        self.rules_for(step_id)
            .and_then(|step| step.option_rule(option_id))
    }

    /// Returns the number of steps in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the catalog has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builder for [`RuleCatalog`].
///
/// Step identifiers are globally unique; adding a step under an
/// existing identifier replaces the previous rules.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalogBuilder {
    steps: Vec<StepRules>,
}

impl RuleCatalogBuilder {
    /// Adds a step, replacing any existing step with the same id.
    #[must_use]
    pub fn step(mut self, rules: StepRules) -> Self {
        if let Some(existing) = self
            .steps
            .iter_mut()
            .find(|s| s.step_id() == rules.step_id())
        {
            *existing = rules;
        } else {
            self.steps.push(rules);
        }
        self
    }

    /// Finalizes the catalog.
    #[must_use]
    pub fn build(self) -> RuleCatalog {
        RuleCatalog { steps: self.steps }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog() {
        let catalog = RuleCatalog::builder().build();
        assert!(catalog.is_empty());
        assert!(catalog.rules_for(&StepId::new("type")).is_none());
    }

    #[test]
    fn lookup_by_step_and_option() {
        let catalog = RuleCatalog::builder()
            .step(StepRules::new("type").with_option("simple", OptionRule::one_time(7000)))
            .build();

        let rule = catalog
            .option_rule(&StepId::new("type"), &OptionId::new("simple"))
            .unwrap();
        assert_eq!(rule.price, 7000);
        assert_eq!(rule.monthly, 0);
    }

    #[test]
    fn unknown_option_is_absent() {
        let catalog = RuleCatalog::builder()
            .step(StepRules::new("type").with_option("simple", OptionRule::one_time(7000)))
            .build();

        assert!(
            catalog
                .option_rule(&StepId::new("type"), &OptionId::new("deluxe"))
                .is_none()
        );
    }

    #[test]
    fn steps_iterate_in_declaration_order() {
        let catalog = RuleCatalog::standard();
        let order: Vec<&str> = catalog.steps().map(|s| s.step_id().as_str()).collect();
        assert_eq!(order, vec!["goals", "type", "services"]);
    }

    #[test]
    fn duplicate_step_replaces_previous_rules() {
        let catalog = RuleCatalog::builder()
            .step(StepRules::new("type").with_option("simple", OptionRule::one_time(7000)))
            .step(StepRules::new("type").with_option("simple", OptionRule::one_time(9000)))
            .build();

        assert_eq!(catalog.len(), 1);
        let rule = catalog
            .option_rule(&StepId::new("type"), &OptionId::new("simple"))
            .unwrap();
        assert_eq!(rule.price, 9000);
    }

    #[test]
    fn duplicate_option_replaces_previous_rule() {
        let step = StepRules::new("services")
            .with_option("seo", OptionRule::one_time(2000))
            .with_option("seo", OptionRule::one_time(2500));

        assert_eq!(step.len(), 1);
        assert_eq!(step.option_rule(&OptionId::new("seo")).unwrap().price, 2500);
    }

    #[test]
    fn standard_catalog_matches_production_table() {
        let catalog = RuleCatalog::standard();
        assert_eq!(catalog.len(), 3);

        let showcase = catalog
            .option_rule(&StepId::new("type"), &OptionId::new("showcase"))
            .unwrap();
        assert_eq!(showcase.price, 8000);

        let maintenance = catalog
            .option_rule(&StepId::new("services"), &OptionId::new("maintenance"))
            .unwrap();
        assert_eq!(maintenance.price, 0);
        assert_eq!(maintenance.monthly, 500);

        let leads = catalog
            .option_rule(&StepId::new("goals"), &OptionId::new("leads"))
            .unwrap();
        assert!(leads.is_free());
    }
}
