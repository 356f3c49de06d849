//! Warranty evaluation: calendar-day distance and tri-state classification.

use chrono::NaiveDate;

use crate::entities::WarrantyState;

/// Items with at least this many inclusive days left are fully covered;
/// anything below (but not yet past the end date) is near expiry.
const NEAR_EXPIRE_THRESHOLD_DAYS: i64 = 30;

/// Whole-day distance from `reference` to `target`, negative when `target`
/// is in the past.
///
/// Calendar dates carry no time-of-day component, so two calls on the same
/// day always agree regardless of wall-clock time; callers starting from an
/// instant must take its calendar date first.
pub fn days_between(reference: NaiveDate, target: NaiveDate) -> i64 {
    (target - reference).num_days()
}

/// Turn a raw day distance into the reported remaining days and state.
///
/// The end date itself counts as one remaining day, so non-negative
/// distances are shifted by one. Expired distances are reported unchanged
/// as negative "days ago".
pub fn classify(raw_days: i64) -> (i64, WarrantyState) {
    let days_left = if raw_days >= 0 { raw_days + 1 } else { raw_days };

    let state = if days_left >= NEAR_EXPIRE_THRESHOLD_DAYS {
        WarrantyState::Warranty
    } else if days_left >= 0 {
        WarrantyState::NearExpire
    } else {
        WarrantyState::Expired
    };

    (days_left, state)
}
