//! # Rental Pricing
//!
//! Computes what a closed rental costs from the vehicle's hourly price.
//!
//! ## Billing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start 10:00:00 ─────────────── end 11:30:20                            │
//! │                                                                         │
//! │  elapsed   = 90 min 20 s                                               │
//! │  billed    = 91 min          (every started minute counts)             │
//! │  cost      = price_per_hour × 91 / 60, rounded half up to the cent     │
//! │                                                                         │
//! │  $5.00/h × 91/60 = $7.583… → $7.58                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A client may still send an explicit `total_cost`; this module is only
//! used when the cost is missing.

use chrono::NaiveDateTime;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_rental_window;

/// Number of minutes billed for a window: elapsed seconds rounded up.
pub fn billed_minutes(start_time: NaiveDateTime, end_time: NaiveDateTime) -> i64 {
    let seconds = (end_time - start_time).num_seconds().max(0);
    (seconds + 59) / 60
}

/// Cost of renting at `price_per_hour` from `start_time` to `end_time`.
///
/// ## Errors
/// `CoreError::Validation` if `end_time` precedes `start_time`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use ridehub_core::{pricing::rental_cost, Money};
///
/// let day = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// let start = day.and_hms_opt(10, 0, 0).unwrap();
/// let end = day.and_hms_opt(11, 30, 0).unwrap();
///
/// let cost = rental_cost(Money::from_cents(500), start, end).unwrap();
/// assert_eq!(cost.cents(), 750);
/// ```
pub fn rental_cost(
    price_per_hour: Money,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
) -> CoreResult<Money> {
    validate_rental_window(start_time, Some(end_time))?;

    let minutes = billed_minutes(start_time, end_time);
    Ok(price_per_hour.prorate(minutes, 60))
}

// =============================================================================
// Unit Tests
// =============================================================================
