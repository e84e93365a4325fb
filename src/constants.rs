//! Shared constants for the dashboard core.

/// Number of calendar days in the completion-trend window, ending today
/// (inclusive). The productivity score and most-productive-day insight
/// are both derived from this window.
pub const TREND_WINDOW_DAYS: usize = 7;
