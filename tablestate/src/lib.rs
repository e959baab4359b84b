//! Data-table interaction state reconciliation
//!
//! The logic that sits between a table's interaction state, its composite
//! global-filter representation, and the URL query string that persists
//! both:
//!
//! - [`filters::resolve`] decides whether a filter list reduces to
//!   independent per-column predicates (AND) or needs whole-row composite
//!   evaluation (OR/MIXED).
//! - [`filters::normalize_filter_ids`] assigns stable, unique identities to
//!   filter conditions so value edits are not mistaken for new conditions.
//! - [`url::encode`] / [`url::decode`] map [`url::TableUrlState`] to and
//!   from a query string, with [`url::estimate_length`] classifying the
//!   resulting URL length for the advisory banner.
//!
//! ## Usage
//!
//! ```
//! use tablestate::url::{TableUrlState, decode, encode, estimate_length, UrlLengthConfig};
//!
//! let mut state = decode("page=2&search=alice");
//! assert_eq!(state.page, 2);
//!
//! state.page = 0;
//! let query = encode(&state);
//! assert_eq!(query, "search=alice");
//!
//! let estimate = estimate_length(&query, &UrlLengthConfig::default());
//! assert_eq!(estimate.length, 80 + "?search=alice".len());
//! ```

pub mod error;
pub mod filters;
pub mod url;

pub use error::StateError;
