//! URL length advisory
//!
//! Computes the projected URL length for the current query string and
//! classifies it against warning thresholds, so the UI can warn before a
//! shared URL gets truncated by browsers or chat platforms. Advisory only:
//! nothing here rejects or blocks.

use std::time::{Duration, Instant};

// =============================================================================
// Thresholds
// =============================================================================

/// Assumed length of the page URL before the query string
pub const BASE_URL_LEN: usize = 80;

/// Length at which the advisory turns on
pub const WARNING_THRESHOLD: usize = 2000;

/// Length at which sharing is likely to break
pub const CRITICAL_THRESHOLD: usize = 8000;

/// How long the length must stay ok before the banner hides
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_secs(2);

/// Length classification for the current query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlLengthStatus {
    Ok,
    Warning,
    Critical,
}

/// Threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlLengthConfig {
    pub base_len: usize,
    pub warning_at: usize,
    pub critical_at: usize,
}

impl Default for UrlLengthConfig {
    fn default() -> Self {
        Self {
            base_len: BASE_URL_LEN,
            warning_at: WARNING_THRESHOLD,
            critical_at: CRITICAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlLengthEstimate {
    pub length: usize,
    pub status: UrlLengthStatus,
}

/// Estimate the full URL length for a query string and classify it.
///
/// `length` is the configured base URL length plus the query string and its
/// `?` separator when non-empty.
pub fn estimate_length(query: &str, config: &UrlLengthConfig) -> UrlLengthEstimate {
    let length = config.base_len
        + if query.is_empty() {
            0
        } else {
            query.len() + 1
        };

    let status = if length >= config.critical_at {
        tracing::warn!(length, "URL length at critical threshold");
        UrlLengthStatus::Critical
    } else if length >= config.warning_at {
        UrlLengthStatus::Warning
    } else {
        UrlLengthStatus::Ok
    };

    UrlLengthEstimate { length, status }
}

/// Display state of the advisory banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Warning,
    Critical,
}

/// Debounced advisory banner state machine.
///
/// Shows immediately when a threshold is crossed; hides only after the
/// length has been ok continuously for the hide delay, so the banner does
/// not flicker while the user is mid-edit. The clock is passed in by the
/// caller, which keeps transitions testable.
#[derive(Debug)]
pub struct AdvisoryBanner {
    state: BannerState,
    hide_delay: Duration,
    ok_since: Option<Instant>,
}

impl AdvisoryBanner {
    pub fn new() -> Self {
        Self::with_hide_delay(DEFAULT_HIDE_DELAY)
    }

    pub fn with_hide_delay(hide_delay: Duration) -> Self {
        Self {
            state: BannerState::Hidden,
            hide_delay,
            ok_since: None,
        }
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Feed the latest length status; returns the banner state to display.
    pub fn observe(&mut self, status: UrlLengthStatus, now: Instant) -> BannerState {
        match status {
            UrlLengthStatus::Warning => {
                self.ok_since = None;
                self.state = BannerState::Warning;
            }
            UrlLengthStatus::Critical => {
                self.ok_since = None;
                self.state = BannerState::Critical;
            }
            UrlLengthStatus::Ok => {
                if self.state != BannerState::Hidden {
                    let since = *self.ok_since.get_or_insert(now);
                    if now.duration_since(since) >= self.hide_delay {
                        self.state = BannerState::Hidden;
                        self.ok_since = None;
                    }
                }
            }
        }
        self.state
    }
}

impl Default for AdvisoryBanner {
    fn default() -> Self {
        Self::new()
    }
}
