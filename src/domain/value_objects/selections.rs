//! # Selections
//!
//! The caller's step-by-step choices, as submitted by the frontend.
//!
//! The wire shape is a JSON object keyed by step id, where each value is
//! either a bare option id (single-select steps) or an array of option
//! ids (multi-select steps). Deserialization preserves that shape so a
//! persisted submission can be inspected exactly as it arrived.

use crate::domain::value_objects::{OptionId, StepId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::slice;

/// The value selected for one step: a single option or an ordered list.
///
/// Multi-select order is the caller's order and is preserved through
/// evaluation into the quote breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// A single-select step's choice.
    One(OptionId),
    /// A multi-select step's choices, in caller order.
    Many(Vec<OptionId>),
}

impl SelectionValue {
    /// Iterates over the selected option ids in order.
    ///
    /// A bare value yields exactly one id; a list yields its elements
    /// in the order the caller provided them.
    pub fn iter(&self) -> impl Iterator<Item = &OptionId> {
        match self {
            Self::One(id) => slice::from_ref(id).iter(),
            Self::Many(ids) => ids.iter(),
        }
    }

    /// Returns the number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(ids) => ids.len(),
        }
    }

    /// Returns true if no options are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for SelectionValue {
    fn from(id: &str) -> Self {
        Self::One(OptionId::new(id))
    }
}

/// The full set of selections submitted by a caller, keyed by step id.
///
/// Step ids unknown to the catalog are carried along untouched and
/// simply never matched during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(HashMap<StepId, SelectionValue>);

impl Selections {
    /// Creates an empty selection set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selection for a step, if any.
    #[must_use]
    pub fn get(&self, step_id: &StepId) -> Option<&SelectionValue> {
        self.0.get(step_id)
    }

    /// Returns the number of steps with a selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no steps have a selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records a single-select choice for a step.
    #[must_use]
    pub fn with(mut self, step_id: impl Into<StepId>, option_id: impl Into<OptionId>) -> Self {
        self.0
            .insert(step_id.into(), SelectionValue::One(option_id.into()));
        self
    }

    /// Records a multi-select choice for a step, preserving order.
    #[must_use]
    pub fn with_many<I, O>(mut self, step_id: impl Into<StepId>, option_ids: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OptionId>,
    {
        let ids = option_ids.into_iter().map(Into::into).collect();
        self.0.insert(step_id.into(), SelectionValue::Many(ids));
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bare_string_as_single_select() {
        let selections: Selections = serde_json::from_str(r#"{"type": "showcase"}"#).unwrap();
        let value = selections.get(&StepId::new("type")).unwrap();
        assert_eq!(value, &SelectionValue::One(OptionId::new("showcase")));
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn deserializes_array_as_multi_select_preserving_order() {
        let selections: Selections =
            serde_json::from_str(r#"{"services": ["maintenance", "seo"]}"#).unwrap();
        let ids: Vec<&str> = selections
            .get(&StepId::new("services"))
            .unwrap()
            .iter()
            .map(OptionId::as_str)
            .collect();
        assert_eq!(ids, vec!["maintenance", "seo"]);
    }

    #[test]
    fn serializes_back_to_original_shape() {
        let json = r#"{"services":["seo"]}"#;
        let selections: Selections = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&selections).unwrap(), json);
    }

    #[test]
    fn single_value_iterates_once() {
        let value = SelectionValue::from("seo");
        assert_eq!(value.iter().count(), 1);
        assert!(!value.is_empty());
    }

    #[test]
    fn empty_list_is_empty() {
        let value = SelectionValue::Many(vec![]);
        assert!(value.is_empty());
        assert_eq!(value.iter().count(), 0);
    }

    #[test]
    fn builder_helpers_populate_steps() {
        let selections = Selections::new()
            .with("type", "showcase")
            .with_many("services", ["seo", "maintenance"]);
        assert_eq!(selections.len(), 2);
        assert_eq!(
            selections.get(&StepId::new("services")).unwrap().len(),
            2
        );
    }
}
