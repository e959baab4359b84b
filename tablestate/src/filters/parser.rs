//! Filter list parsing
//!
//! Parses JSON filter lists with guards against oversized or pathological
//! input, since the JSON arrives from hand-editable URLs.

use crate::error::StateError;

use super::types::FilterCondition;

/// Maximum size of filter JSON in bytes (16KB)
pub const MAX_FILTER_JSON_LEN: usize = 16 * 1024;

/// Maximum number of filters allowed in one list
pub const MAX_FILTER_COUNT: usize = 50;

/// Parse a JSON filter list with size and count guards.
///
/// `param` names the query parameter for error context.
pub fn parse_filter_list(
    json: &str,
    param: &'static str,
) -> Result<Vec<FilterCondition>, StateError> {
    if json.len() > MAX_FILTER_JSON_LEN {
        return Err(StateError::FilterJsonTooLarge {
            len: json.len(),
            max: MAX_FILTER_JSON_LEN,
        });
    }

    let filters: Vec<FilterCondition> =
        serde_json::from_str(json).map_err(|e| StateError::malformed(param, e.to_string()))?;

    if filters.len() > MAX_FILTER_COUNT {
        return Err(StateError::TooManyFilters {
            count: filters.len(),
            max: MAX_FILTER_COUNT,
        });
    }

    Ok(filters)
}
