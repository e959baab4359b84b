//! Filter join resolution
//!
//! Decides whether an ordered filter list reduces to independent per-column
//! predicates (pure AND) or must be evaluated as one boolean expression
//! against the whole row (OR/MIXED). Join operators describe a condition's
//! relation to the accumulated result of the conditions before it, so the
//! scan runs left to right and never consults the first condition's operator.

use super::types::{FilterCondition, JoinMode, JoinOperator};

/// Routing decision for a filter list
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRouting {
    /// Cleaned condition list (conditions with a missing operand dropped)
    pub filters: Vec<FilterCondition>,
    /// True when the list needs whole-row composite evaluation
    pub use_global: bool,
    /// Effective overall join semantics
    pub join: JoinMode,
}

/// Resolve the routing of an ordered filter list.
///
/// Total over its input: an empty or degenerate list yields the neutral
/// AND routing. Deterministic and side-effect free.
pub fn resolve(filters: &[FilterCondition]) -> FilterRouting {
    let cleaned: Vec<FilterCondition> = filters
        .iter()
        .filter(|c| c.is_actionable())
        .cloned()
        .collect();

    let mut saw_and = false;
    let mut saw_or = false;
    for cond in cleaned.iter().skip(1) {
        match cond.effective_join() {
            JoinOperator::And => saw_and = true,
            JoinOperator::Or => saw_or = true,
        }
    }

    let join = match (saw_and, saw_or) {
        (_, false) => JoinMode::And,
        (false, true) => JoinMode::Or,
        (true, true) => JoinMode::Mixed,
    };

    FilterRouting {
        filters: cleaned,
        use_global: saw_or,
        join,
    }
}
