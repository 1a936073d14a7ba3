//! Derivation helpers: calendar date → weekday flag, hour → time band.

use chrono::{Datelike, Weekday};
use tollgate_core::{TimeBand, TollResult};

/// `true` for Monday through Friday, `false` on Saturday and Sunday.
pub fn derive_weekday_flag<D: Datelike>(date: &D) -> bool {
    match date.weekday() {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => true,
        Weekday::Sat | Weekday::Sun => false,
    }
}

/// Time band for an hour of day in `0..24`.
///
/// # Errors
/// `InvalidHour` for `hour >= 24`.
pub fn derive_time_band(hour: u32) -> TollResult<TimeBand> {
    TimeBand::from_hour(hour)
}
