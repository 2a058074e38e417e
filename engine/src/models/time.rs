//! Business-day date arithmetic.
//!
//! The timeline grid only has columns for Monday through Friday; Saturdays
//! and Sundays are never counted and never landed on. All arithmetic uses
//! chrono's calendar math so month and year rollovers need no special
//! handling.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of grid columns per timeline week.
pub const BUSINESS_DAYS_PER_WEEK: i64 = 5;

/// True for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Return the date `n` business days after `date` (before, for negative `n`),
/// skipping weekends entirely.
///
/// `n == 0` returns `date` unchanged for any input. For `n != 0` the result
/// is always a business day, even when `date` itself falls on a weekend.
pub fn add_business_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n == 0 {
        return date;
    }

    let step = n.signum();
    let mut remaining = n.abs();
    let mut current = date;

    // A calendar week always holds exactly five business days, so whole
    // weeks can be jumped in one move when the anchor is a business day.
    if is_business_day(current) {
        let weeks = remaining / BUSINESS_DAYS_PER_WEEK;
        if weeks > 0 {
            current += Duration::days(weeks * 7 * step);
            remaining -= weeks * BUSINESS_DAYS_PER_WEEK;
        }
    }

    while remaining > 0 {
        current += Duration::days(step);
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    current
}

/// Signed count of business days from `origin` to `target`, skipping
/// weekends in the count. Zero when the dates are equal.
///
/// For any business-day-aligned `target`, this is the exact inverse of
/// [`add_business_days`]: `add_business_days(origin, offset) == target`.
pub fn business_day_offset(origin: NaiveDate, target: NaiveDate) -> i64 {
    if origin == target {
        return 0;
    }

    let (start, end, sign) = if target > origin {
        (origin, target, 1)
    } else {
        (target, origin, -1)
    };

    let mut count = 0;
    let mut current = start;
    while current < end {
        current += Duration::days(1);
        if is_business_day(current) {
            count += 1;
        }
    }

    sign * count
}

/// Snap to the Monday at or before `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Friday of the same business week as `date`.
pub fn friday_of(date: NaiveDate) -> NaiveDate {
    monday_of(date) + Duration::days(4)
}
