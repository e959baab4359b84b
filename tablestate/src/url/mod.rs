//! URL state persistence
//!
//! Mirrors table interaction state into the page's query string for
//! shareable, bookmarkable views: the state model, the query-string codec,
//! and the URL-length advisory.

mod codec;
mod length;
mod state;

pub use codec::{decode, encode, params, try_decode};
pub use length::{
    AdvisoryBanner, BASE_URL_LEN, BannerState, CRITICAL_THRESHOLD, DEFAULT_HIDE_DELAY,
    UrlLengthConfig, UrlLengthEstimate, UrlLengthStatus, WARNING_THRESHOLD, estimate_length,
};
pub use state::{
    ColumnPinning, CompositeFilter, DEFAULT_PER_PAGE, FilterMode, GlobalFilterValue, MAX_PAGE,
    MAX_PER_PAGE, SortDirection, SortEntry, TableUrlState,
};
