//! Run gating
//!
//! Pure decisions over values main has already read from the environment,
//! so the skip logic is testable without touching process state. A skip is
//! a successful outcome, not an error.

use std::fmt;

use chrono::Weekday;

/// Why a run was intentionally skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotPostingDay,
    MissingToken,
    EmptyCache,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotPostingDay => write!(f, "not weekly posting day"),
            SkipReason::MissingToken => write!(f, "MEDIUM_TOKEN not set"),
            SkipReason::EmptyCache => write!(f, "no items loaded"),
        }
    }
}

/// Posts go out on Mondays (UTC) unless the override flag forces a run.
pub fn is_posting_day(weekday: Weekday, force: bool) -> bool {
    force || weekday == Weekday::Mon
}

/// A usable bearer token, trimmed; `None` when unset or blank.
pub fn credential(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}
