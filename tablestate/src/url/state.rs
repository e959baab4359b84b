//! Table URL state model
//!
//! The serializable snapshot of a table's interaction state: pagination,
//! sorting, filters, search, composite global filter, column visibility and
//! pinning. Built from the URL on page load, mutated on every interaction,
//! written back via the codec on every change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::{
    FilterCondition, JoinMode, JoinOperator, normalize_filter_ids, resolve,
};

/// Default items per page
pub const DEFAULT_PER_PAGE: usize = 10;
/// Maximum items per page accepted from a URL
pub const MAX_PER_PAGE: usize = 500;
/// Maximum page index accepted from a URL
pub const MAX_PAGE: usize = 10_000;

/// One entry of the ordered sort list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    #[serde(rename = "id")]
    pub field: String,
    #[serde(rename = "dir")]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Composite filter requiring whole-row evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeFilter {
    pub filters: Vec<FilterCondition>,
    #[serde(rename = "joinOperator")]
    pub join: JoinOperator,
}

/// Column pinning by side
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnPinning {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right: Vec<String>,
}

impl ColumnPinning {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Which filter UI the state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Standard,
    Inline,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inline => "inline",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "inline" => Some(Self::Inline),
            _ => None,
        }
    }
}

/// The value a table's global-filter slot receives
///
/// Explicit tagged union of the two shapes that slot can hold: a free-text
/// search string or a composite filter object.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalFilterValue {
    Search(String),
    Composite(CompositeFilter),
}

/// Serializable snapshot of table interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct TableUrlState {
    /// 0-based page index
    pub page: usize,
    pub per_page: usize,
    pub sort: Vec<SortEntry>,
    /// Per-column filter list (pure AND semantics)
    pub filters: Vec<FilterCondition>,
    /// Free-text search, independent of the composite filter
    pub search: String,
    /// Composite filter (OR/MIXED semantics); mutually exclusive with
    /// `filters`
    pub global: Option<CompositeFilter>,
    pub column_visibility: BTreeMap<String, bool>,
    pub pinning: ColumnPinning,
    pub filter_mode: FilterMode,
}

impl Default for TableUrlState {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            sort: Vec::new(),
            filters: Vec::new(),
            search: String::new(),
            global: None,
            column_visibility: BTreeMap::new(),
            pinning: ColumnPinning::default(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl TableUrlState {
    /// Replace the per-column filter list, clearing any composite filter
    pub fn set_filters(&mut self, filters: Vec<FilterCondition>) {
        self.filters = normalize_filter_ids(filters);
        self.global = None;
    }

    /// Replace the composite filter, clearing the per-column list
    pub fn set_global(&mut self, filters: Vec<FilterCondition>, join: JoinOperator) {
        self.global = Some(CompositeFilter {
            filters: normalize_filter_ids(filters),
            join,
        });
        self.filters.clear();
    }

    /// Derive the value for the table's global-filter slot.
    ///
    /// A composite filter wins over free-text search.
    pub fn global_filter_value(&self) -> Option<GlobalFilterValue> {
        if let Some(g) = &self.global {
            return Some(GlobalFilterValue::Composite(g.clone()));
        }
        if !self.search.is_empty() {
            return Some(GlobalFilterValue::Search(self.search.clone()));
        }
        None
    }

    /// Normalize and re-route the active filter list.
    ///
    /// Runs the normalize/resolve step of the interaction cycle: the active
    /// list (composite if present, per-column otherwise) gets stable ids,
    /// then moves to `global` when it needs whole-row evaluation and back to
    /// `filters` when it reduces to pure AND. Idempotent.
    pub fn reconcile(&mut self) {
        let list = match self.global.take() {
            Some(g) => g.filters,
            None => std::mem::take(&mut self.filters),
        };
        let list = normalize_filter_ids(list);
        let routing = resolve(&list);
        if routing.use_global {
            let join = match routing.join {
                JoinMode::And => JoinOperator::And,
                JoinMode::Or | JoinMode::Mixed => JoinOperator::Or,
            };
            self.global = Some(CompositeFilter {
                filters: list,
                join,
            });
        } else {
            self.filters = list;
        }
    }
}
