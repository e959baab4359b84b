//! Filter identity normalization
//!
//! Guarantees that every condition in a list carries a non-empty, unique
//! `filter_id`. The already-normalized case returns the input vector
//! untouched so downstream consumers keyed on condition identity (focused
//! inputs, memoized rows) see no change. Synthesized ids are a pure function
//! of the field name and list position, never of the value, so a value-only
//! edit between two passes yields the same id both times.

use rustc_hash::FxHashSet;

use super::types::FilterCondition;

/// Maximum length of the sanitized field slug inside a synthesized id
const MAX_SLUG_LEN: usize = 32;

/// Fallback slug when a field name sanitizes to nothing
const FALLBACK_SLUG: &str = "filter";

/// Ensure every condition has a unique, non-empty `filter_id`.
///
/// Length and relative order are preserved. Idempotent: a second pass over
/// the output takes the fast path and returns it unchanged.
pub fn normalize_filter_ids(filters: Vec<FilterCondition>) -> Vec<FilterCondition> {
    if has_unique_ids(&filters) {
        return filters;
    }

    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(filters.len());
    for (index, mut cond) in filters.into_iter().enumerate() {
        let id = match cond.filter_id.as_deref() {
            Some(id) if !id.is_empty() && !seen.contains(id) => id.to_string(),
            _ => synthesize_id(&cond.field, index, &seen),
        };
        seen.insert(id.clone());
        cond.filter_id = Some(id);
        out.push(cond);
    }
    out
}

/// Fast-path check: all ids present, non-empty, and pairwise distinct
fn has_unique_ids(filters: &[FilterCondition]) -> bool {
    let mut seen = FxHashSet::default();
    filters.iter().all(|c| match c.filter_id.as_deref() {
        Some(id) if !id.is_empty() => seen.insert(id),
        _ => false,
    })
}

/// Build a deterministic id from the field name and list position.
///
/// Shape is `{slug}-{index}`, with a numeric suffix appended until the id is
/// unique within the list.
fn synthesize_id(field: &str, index: usize, seen: &FxHashSet<String>) -> String {
    let base = format!("{}-{}", slugify(field), index);
    if !seen.contains(&base) {
        return base;
    }
    let mut n = 2usize;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Sanitize a field name to lowercase alphanumerics and single hyphens
fn slugify(field: &str) -> String {
    let mut slug = String::with_capacity(field.len().min(MAX_SLUG_LEN));
    let mut last_hyphen = true; // suppress leading hyphen
    for ch in field.chars() {
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str(FALLBACK_SLUG);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::types::{FilterOperator, FilterValue};

    fn cond(field: &str, filter_id: Option<&str>) -> FilterCondition {
        FilterCondition {
            field: field.to_string(),
            operator: FilterOperator::Eq,
            value: FilterValue::Text("v".to_string()),
            join_operator: None,
            filter_id: filter_id.map(str::to_string),
        }
    }

    fn ids(filters: &[FilterCondition]) -> Vec<&str> {
        filters
            .iter()
            .map(|c| c.filter_id.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn fast_path_returns_input_unchanged() {
        let filters = vec![cond("a", Some("a-0")), cond("b", Some("b-1"))];
        let ptr = filters.as_ptr();
        let out = normalize_filter_ids(filters);

        // the same allocation comes back, not a clone
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(ids(&out), vec!["a-0", "b-1"]);
    }

    #[test]
    fn missing_ids_are_synthesized_from_field_and_index() {
        let filters = vec![cond("title", None), cond("status", None)];
        let out = normalize_filter_ids(filters);

        assert_eq!(ids(&out), vec!["title-0", "status-1"]);
    }

    #[test]
    fn duplicate_ids_keep_first_and_reassign_later() {
        let filters = vec![cond("a", Some("dup")), cond("b", Some("dup"))];
        let out = normalize_filter_ids(filters);

        assert_eq!(ids(&out), vec!["dup", "b-1"]);
    }

    #[test]
    fn output_ids_are_pairwise_unique() {
        let filters = vec![
            cond("x", Some("same")),
            cond("x", Some("same")),
            cond("x", None),
            cond("x", Some("")),
        ];
        let out = normalize_filter_ids(filters);

        assert_eq!(out.len(), 4);
        let mut unique: Vec<&str> = ids(&out);
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn collision_with_existing_id_gets_numeric_suffix() {
        // the synthesized "a-1" is already taken by the first condition
        let filters = vec![cond("x", Some("a-1")), cond("a", None)];
        let out = normalize_filter_ids(filters);

        assert_eq!(ids(&out), vec!["a-1", "a-1-2"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let filters = vec![cond("a", None), cond("a", None), cond("b", Some("b"))];
        let once = normalize_filter_ids(filters);
        let twice = normalize_filter_ids(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn synthesized_id_is_stable_under_value_edit() {
        let mut first = vec![cond("email", None)];
        first[0].value = FilterValue::Text("v1".to_string());
        let mut second = vec![cond("email", None)];
        second[0].value = FilterValue::Text("v2".to_string());

        let a = normalize_filter_ids(first);
        let b = normalize_filter_ids(second);

        assert_eq!(a[0].filter_id, b[0].filter_id);
    }

    #[test]
    fn slug_is_sanitized_and_capped() {
        assert_eq!(slugify("Created At"), "created-at");
        assert_eq!(slugify("user..email"), "user-email");
        assert_eq!(slugify("--weird--"), "weird");
        assert_eq!(slugify("???"), "filter");

        let long = "x".repeat(100);
        assert!(slugify(&long).len() <= MAX_SLUG_LEN);
    }

    #[test]
    fn order_is_preserved() {
        let filters = vec![cond("c", None), cond("a", None), cond("b", None)];
        let out = normalize_filter_ids(filters);

        let fields: Vec<&str> = out.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["c", "a", "b"]);
    }
}
