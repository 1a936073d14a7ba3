//! # Tollgate Business
//!
//! Toll decision tables and the calculator built on top of them.
//!
//! - [`resolver`] - flat vehicle rates and the peak-time premium table
//! - [`derive`] - weekday flag and time band from a calendar date/time
//! - [`calculator`] - quotes combining rate and premium

pub mod calculator;
pub mod derive;
pub mod resolver;

pub use calculator::{PremiumEntry, TollCalculator, TollQuote};
pub use derive::{derive_time_band, derive_weekday_flag};
pub use resolver::{resolve_peak_premium, resolve_vehicle_rate, vehicle_rate};

pub use tollgate_core::{TimeBand, TollError, TollResult, Vehicle, VehicleCategory};
