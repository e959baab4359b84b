//! Filter condition system
//!
//! Typed filter conditions plus the two pieces of logic every consumer
//! needs before applying them: identity normalization (stable, unique
//! `filter_id`s) and join resolution (pure-AND per-column routing vs.
//! whole-row composite evaluation).
//!
//! ## Usage
//!
//! ```
//! use tablestate::filters::{normalize_filter_ids, parse_filter_list, resolve};
//!
//! let json = r#"[
//!     {"id": "status", "operator": "eq", "value": "active"},
//!     {"id": "age", "operator": "gt", "value": 30, "joinOperator": "or"}
//! ]"#;
//! let filters = normalize_filter_ids(parse_filter_list(json, "filters").unwrap());
//! let routing = resolve(&filters);
//! assert!(routing.use_global);
//! ```

mod normalize;
mod parser;
mod resolve;
mod types;

pub use normalize::normalize_filter_ids;
pub use parser::{MAX_FILTER_COUNT, MAX_FILTER_JSON_LEN, parse_filter_list};
pub use resolve::{FilterRouting, resolve};
pub use types::{FilterCondition, FilterOperator, FilterValue, JoinMode, JoinOperator};
