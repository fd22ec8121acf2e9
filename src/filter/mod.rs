//! Filter compilation: normalizing user-authored filter trees and merging the
//! basic and advanced sources into the single canonical filter the backend
//! accepts.
//!
//! Normalization and merging operate on raw [`serde_json::Value`] trees so
//! that foreign or malformed nodes pass through silently. The typed
//! [`FilterNode`] union covers programmatic authoring of well-formed trees.

mod comparator;
mod coerce;
mod merge;
mod normalize;

pub use comparator::{backend_comparator, normalize_comparator};
pub use coerce::coerce_value;
pub use merge::merge_filters;
pub use normalize::normalize_filter;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A leaf predicate comparing one field against a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl FilterCondition {
    pub fn new(
        field: impl Into<String>,
        comparator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            field: Some(field.into()),
            comparator: Some(comparator.into()),
            value: value.into(),
        }
    }
}

/// The boolean connective of a conjunction node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// A boolean combination of child filter nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConjunction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    #[serde(default)]
    pub conditions: Vec<FilterNode>,
}

impl FilterConjunction {
    pub fn and(conditions: Vec<FilterNode>) -> Self {
        Self {
            operator: Some(Operator::And),
            conditions,
        }
    }

    pub fn or(conditions: Vec<FilterNode>) -> Self {
        Self {
            operator: Some(Operator::Or),
            conditions,
        }
    }
}

/// One node of a filter tree, discriminated by its `type` tag.
///
/// Conjunctions are the internal nodes, conditions the leaves. A conjunction
/// always carries a `conditions` list (possibly empty); no node carries both
/// `conditions` and a `comparator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterNode {
    Condition(FilterCondition),
    Conjunction(FilterConjunction),
}

impl FilterNode {
    /// Renders the node as the raw JSON tree the normalizer and merger accept.
    pub fn into_value(self) -> Value {
        serde_json::to_value(&self).unwrap_or(Value::Null)
    }
}

impl From<FilterCondition> for FilterNode {
    fn from(condition: FilterCondition) -> Self {
        FilterNode::Condition(condition)
    }
}

impl From<FilterConjunction> for FilterNode {
    fn from(conjunction: FilterConjunction) -> Self {
        FilterNode::Conjunction(conjunction)
    }
}
