//! Filter type definitions
//!
//! Defines the filter conditions, operators, and join semantics used by the
//! resolver and the URL codec. Wire names (serde renames) are part of the
//! persisted URL format and must stay stable across versions.

use serde::{Deserialize, Serialize};

/// One column-scoped filter predicate
///
/// `field` names the column; `filter_id` is the stable per-instance identity
/// assigned by the normalizer. `filter_id` is internal-only and never
/// serialized: the codec strips it on encode and regenerates it on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Column being filtered (not unique within a list)
    #[serde(rename = "id")]
    pub field: String,

    pub operator: FilterOperator,

    #[serde(default, skip_serializing_if = "FilterValue::is_none")]
    pub value: FilterValue,

    /// How this condition combines with the accumulated result of the
    /// conditions before it. Ignored at index 0.
    #[serde(
        rename = "joinOperator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub join_operator: Option<JoinOperator>,

    /// Stable identity, unique within a normalized list
    #[serde(skip_serializing, default)]
    pub filter_id: Option<String>,
}

impl FilterCondition {
    /// True if the condition can be evaluated: operand-free operators always
    /// qualify, the rest need a non-empty value.
    pub fn is_actionable(&self) -> bool {
        if !self.operator.requires_operand() {
            return true;
        }
        !self.value.is_empty()
    }

    /// Effective join operator for resolver scans (missing means AND)
    pub fn effective_join(&self) -> JoinOperator {
        self.join_operator.unwrap_or(JoinOperator::And)
    }
}

/// Comparison operators for filter conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "eq")]
    Eq,
    #[serde(rename = "ne")]
    Ne,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "notContains")]
    NotContains,
    #[serde(rename = "gt")]
    Gt,
    #[serde(rename = "lt")]
    Lt,
    #[serde(rename = "gte")]
    Gte,
    #[serde(rename = "lte")]
    Lte,
    #[serde(rename = "isEmpty")]
    IsEmpty,
    #[serde(rename = "isNotEmpty")]
    IsNotEmpty,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "notIn")]
    NotIn,
}

impl FilterOperator {
    /// Whether the operator needs a comparison operand
    pub fn requires_operand(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }
}

/// Comparison operand for a filter condition
///
/// Untagged union so the JSON shape stays compact: `null`, bool, number,
/// string, or string array depending on the operator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[default]
    None,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FilterValue {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// True when there is nothing to compare against
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) => s.is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }
}

/// AND/OR relation linking a condition to the conditions before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinOperator {
    And,
    Or,
}

/// Effective overall join semantics of a filter list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Every condition AND-joined: independent per-column predicates suffice
    And,
    /// Every joined condition OR-joined
    Or,
    /// Both AND and OR appear: the list must be evaluated as one expression
    Mixed,
}

impl JoinMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Mixed => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_serializes_without_filter_id() {
        let cond = FilterCondition {
            field: "status".to_string(),
            operator: FilterOperator::Eq,
            value: FilterValue::Text("active".to_string()),
            join_operator: None,
            filter_id: Some("status-0".to_string()),
        };
        let json = serde_json::to_string(&cond).unwrap();

        assert_eq!(json, r#"{"id":"status","operator":"eq","value":"active"}"#);
    }

    #[test]
    fn condition_deserializes_without_filter_id() {
        let json = r#"{"id":"age","operator":"gte","value":21,"joinOperator":"or"}"#;
        let cond: FilterCondition = serde_json::from_str(json).unwrap();

        assert_eq!(cond.field, "age");
        assert_eq!(cond.operator, FilterOperator::Gte);
        assert_eq!(cond.value, FilterValue::Number(21.0));
        assert_eq!(cond.join_operator, Some(JoinOperator::Or));
        assert_eq!(cond.filter_id, None);
    }

    #[test]
    fn operator_wire_names_round_trip() {
        let operators = [
            (FilterOperator::Eq, "\"eq\""),
            (FilterOperator::Ne, "\"ne\""),
            (FilterOperator::Contains, "\"contains\""),
            (FilterOperator::NotContains, "\"notContains\""),
            (FilterOperator::Gt, "\"gt\""),
            (FilterOperator::Lt, "\"lt\""),
            (FilterOperator::Gte, "\"gte\""),
            (FilterOperator::Lte, "\"lte\""),
            (FilterOperator::IsEmpty, "\"isEmpty\""),
            (FilterOperator::IsNotEmpty, "\"isNotEmpty\""),
            (FilterOperator::In, "\"in\""),
            (FilterOperator::NotIn, "\"notIn\""),
        ];

        for (op, expected) in operators {
            assert_eq!(serde_json::to_string(&op).unwrap(), expected);
            let parsed: FilterOperator = serde_json::from_str(expected).unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn value_union_deserializes_each_shape() {
        let cases: &[(&str, FilterValue)] = &[
            ("null", FilterValue::None),
            ("true", FilterValue::Bool(true)),
            ("3.5", FilterValue::Number(3.5)),
            ("\"x\"", FilterValue::Text("x".to_string())),
            (
                "[\"a\",\"b\"]",
                FilterValue::List(vec!["a".to_string(), "b".to_string()]),
            ),
        ];

        for (json, expected) in cases {
            let value: FilterValue = serde_json::from_str(json).unwrap();
            assert_eq!(&value, expected);
        }
    }

    #[test]
    fn operand_free_operators_are_actionable_without_value() {
        let cond = FilterCondition {
            field: "notes".to_string(),
            operator: FilterOperator::IsEmpty,
            value: FilterValue::None,
            join_operator: None,
            filter_id: None,
        };
        assert!(cond.is_actionable());
    }

    #[test]
    fn empty_text_value_is_not_actionable() {
        let cond = FilterCondition {
            field: "name".to_string(),
            operator: FilterOperator::Contains,
            value: FilterValue::Text(String::new()),
            join_operator: None,
            filter_id: None,
        };
        assert!(!cond.is_actionable());
    }
}
