//! URL query-string codec
//!
//! Two-way mapping between [`TableUrlState`] and a query string. Parameter
//! aliases and JSON shapes are the persisted-state format for bookmarked
//! URLs and must stay stable. Encoding omits fields at their defaults;
//! decoding is best-effort and never fails on a hand-edited URL (the strict
//! [`try_decode`] variant surfaces the first problem instead).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::StateError;
use crate::filters::{MAX_FILTER_COUNT, MAX_FILTER_JSON_LEN, normalize_filter_ids, parse_filter_list};
use crate::url::state::{
    CompositeFilter, DEFAULT_PER_PAGE, FilterMode, MAX_PAGE, MAX_PER_PAGE, SortEntry,
    TableUrlState,
};

/// Query parameter aliases (the persisted format)
pub mod params {
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "perPage";
    pub const SORT: &str = "sort";
    pub const FILTERS: &str = "filters";
    pub const SEARCH: &str = "search";
    pub const GLOBAL: &str = "global";
    pub const COLS: &str = "cols";
    pub const PIN: &str = "pin";
    pub const MODE: &str = "mode";
}

/// Encode table state as a query string (no leading `?`).
///
/// Fields at their default are omitted entirely. Structured fields are
/// JSON-encoded into a single parameter value; `filter_id` never reaches
/// the URL.
pub fn encode(state: &TableUrlState) -> String {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();

    if state.page != 0 {
        pairs.push((params::PAGE, state.page.to_string()));
    }
    if state.per_page != DEFAULT_PER_PAGE {
        pairs.push((params::PER_PAGE, state.per_page.to_string()));
    }
    if !state.sort.is_empty() {
        pairs.push((params::SORT, json_param(&state.sort)));
    }
    if !state.filters.is_empty() {
        pairs.push((params::FILTERS, json_param(&state.filters)));
    }
    if !state.search.is_empty() {
        pairs.push((params::SEARCH, state.search.clone()));
    }
    if let Some(global) = &state.global {
        pairs.push((params::GLOBAL, json_param(global)));
    }
    if !state.column_visibility.is_empty() {
        pairs.push((params::COLS, json_param(&state.column_visibility)));
    }
    if !state.pinning.is_empty() {
        pairs.push((params::PIN, json_param(&state.pinning)));
    }
    if state.filter_mode != FilterMode::Standard {
        pairs.push((params::MODE, state.filter_mode.as_str().to_string()));
    }

    serde_urlencoded::to_string(&pairs).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to encode query string");
        String::new()
    })
}

/// Decode a query string into table state, best-effort.
///
/// Missing parameters resolve to defaults; malformed ones are logged at
/// debug level and resolve to that field's default. Never panics on
/// hand-edited or hostile input.
pub fn decode(query: &str) -> TableUrlState {
    let mut state = TableUrlState::default();
    let pairs = match parse_pairs(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable query string, using defaults");
            return state;
        }
    };

    for (key, value) in &pairs {
        if let Err(e) = apply_param(&mut state, key, value) {
            tracing::debug!(param = %key, error = %e, "ignoring malformed URL parameter");
        }
    }

    finish(&mut state);
    state
}

/// Decode a query string, surfacing the first malformed parameter.
pub fn try_decode(query: &str) -> Result<TableUrlState, StateError> {
    let mut state = TableUrlState::default();
    let pairs = parse_pairs(query)?;
    for (key, value) in &pairs {
        apply_param(&mut state, key, value)?;
    }
    finish(&mut state);
    Ok(state)
}

fn parse_pairs(query: &str) -> Result<Vec<(String, String)>, StateError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    serde_urlencoded::from_str(query).map_err(|e| StateError::malformed("query", e.to_string()))
}

fn apply_param(state: &mut TableUrlState, key: &str, value: &str) -> Result<(), StateError> {
    match key {
        params::PAGE => {
            let page: usize = value
                .parse()
                .map_err(|_| StateError::malformed(params::PAGE, "not a number"))?;
            state.page = page.min(MAX_PAGE);
        }
        params::PER_PAGE => {
            let per_page: usize = value
                .parse()
                .map_err(|_| StateError::malformed(params::PER_PAGE, "not a number"))?;
            state.per_page = per_page.clamp(1, MAX_PER_PAGE);
        }
        params::SORT => {
            state.sort = serde_json::from_str::<Vec<SortEntry>>(value)
                .map_err(|e| StateError::malformed(params::SORT, e.to_string()))?;
        }
        params::FILTERS => {
            state.filters = parse_filter_list(value, params::FILTERS)?;
        }
        params::SEARCH => {
            state.search = value.to_string();
        }
        params::GLOBAL => {
            if value.len() > MAX_FILTER_JSON_LEN {
                return Err(StateError::FilterJsonTooLarge {
                    len: value.len(),
                    max: MAX_FILTER_JSON_LEN,
                });
            }
            let global: CompositeFilter = serde_json::from_str(value)
                .map_err(|e| StateError::malformed(params::GLOBAL, e.to_string()))?;
            if global.filters.len() > MAX_FILTER_COUNT {
                return Err(StateError::TooManyFilters {
                    count: global.filters.len(),
                    max: MAX_FILTER_COUNT,
                });
            }
            state.global = Some(global);
        }
        params::COLS => {
            state.column_visibility = serde_json::from_str::<BTreeMap<String, bool>>(value)
                .map_err(|e| StateError::malformed(params::COLS, e.to_string()))?;
        }
        params::PIN => {
            state.pinning = serde_json::from_str(value)
                .map_err(|e| StateError::malformed(params::PIN, e.to_string()))?;
        }
        params::MODE => {
            state.filter_mode = FilterMode::parse(value)
                .ok_or_else(|| StateError::malformed(params::MODE, "unknown filter mode"))?;
        }
        // unknown parameters belong to the host page, not to us
        _ => {}
    }
    Ok(())
}

/// Post-decode fixups: filter-id invariants and filters/global exclusivity
fn finish(state: &mut TableUrlState) {
    state.filters = normalize_filter_ids(std::mem::take(&mut state.filters));
    if let Some(global) = &mut state.global {
        global.filters = normalize_filter_ids(std::mem::take(&mut global.filters));
        if !state.filters.is_empty() {
            tracing::debug!("both filters and global present in URL, composite wins");
            state.filters.clear();
        }
    }
}

fn json_param<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to serialize state parameter");
        String::new()
    })
}
