//! Contribution scores derived from accrued activity.
//!
//! Everything here is a pure function of ledger values; nothing reads or
//! writes storage.

use crate::types::{ContributionCurve, MAX_ACTIVITY_MULTIPLIER};

/// Contribution score of a member with `seconds_active` accrued seconds.
///
/// Monotonic non-decreasing in `seconds_active` for every curve.
pub fn contribution_of(seconds_active: u64, curve: ContributionCurve) -> u64 {
    match curve {
        ContributionCurve::Linear => seconds_active,
        ContributionCurve::SquareRoot => integer_sqrt(seconds_active),
    }
}

/// Seconds credited to a member for the interval ending at `cutoff`.
///
/// The interval starts at the later of the member's start date and the
/// previous accrual point; a start date after `cutoff` credits nothing.
pub fn credited_seconds(
    start_date: u64,
    last_activity_update: u64,
    cutoff: u64,
    activity_multiplier: u32,
) -> u64 {
    let from = core::cmp::max(start_date, last_activity_update);
    let elapsed = cutoff.saturating_sub(from) as u128;
    (elapsed * activity_multiplier as u128 / MAX_ACTIVITY_MULTIPLIER as u128) as u64
}

/// floor(sqrt(value))
pub fn integer_sqrt(value: u64) -> u64 {
    if value < 2 {
        return value;
    }
    // Newton iteration from an over-estimate converges downwards.
    let value = value as u128;
    let mut current = value;
    let mut next = (current + value / current) / 2;
    while next < current {
        current = next;
        next = (current + value / current) / 2;
    }
    current as u64
}
