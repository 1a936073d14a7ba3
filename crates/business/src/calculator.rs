//! Toll calculator
//!
//! Composes the flat vehicle rate with the peak-time premium for a
//! concrete crossing.

use crate::derive::derive_weekday_flag;
use crate::resolver::{resolve_peak_premium, vehicle_rate};
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tollgate_core::{TimeBand, TollError, TollResult, Vehicle, VehicleCategory};
use tracing::debug;

/// Priced crossing: flat rate times the peak premium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TollQuote {
    pub category: VehicleCategory,
    pub at: NaiveDateTime,
    pub inbound: bool,
    pub weekday: bool,
    pub band: TimeBand,
    pub base_rate: Decimal,
    pub premium: Decimal,
    /// `base_rate * premium`, rounded half away from zero to cents
    pub total: Decimal,
}

/// One row of the premium table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremiumEntry {
    pub weekday: bool,
    pub band: TimeBand,
    pub inbound: bool,
    pub premium: Decimal,
}

/// Stateless calculator over the rate tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TollCalculator;

impl TollCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Flat toll for a vehicle, `MissingCategory` when there is none.
    pub fn calculate_toll(&self, vehicle: Option<&Vehicle>) -> TollResult<Decimal> {
        let vehicle = vehicle.ok_or(TollError::MissingCategory)?;
        Ok(vehicle_rate(vehicle.category()))
    }

    /// Premium for a crossing at `at` in the given direction.
    pub fn peak_time_premium(&self, at: NaiveDateTime, inbound: bool) -> Decimal {
        resolve_peak_premium(derive_weekday_flag(&at), TimeBand::of(&at), inbound)
    }

    /// Full quote for a crossing.
    pub fn quote(&self, category: VehicleCategory, at: NaiveDateTime, inbound: bool) -> TollQuote {
        let weekday = derive_weekday_flag(&at);
        let band = TimeBand::of(&at);
        let base_rate = vehicle_rate(category);
        let premium = resolve_peak_premium(weekday, band, inbound);
        let total = (base_rate * premium)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        debug!(
            category = %category,
            %at,
            inbound,
            band = %band,
            %base_rate,
            %premium,
            %total,
            "toll quoted"
        );

        TollQuote {
            category,
            at,
            inbound,
            weekday,
            band,
            base_rate,
            premium,
            total,
        }
    }

    /// All 16 premium combinations: weekdays first, bands in declaration
    /// order, inbound before outbound.
    pub fn premium_table(&self) -> Vec<PremiumEntry> {
        let mut rows = Vec::with_capacity(16);
        for weekday in [true, false] {
            for band in TimeBand::all() {
                for inbound in [true, false] {
                    rows.push(PremiumEntry {
                        weekday,
                        band,
                        inbound,
                        premium: resolve_peak_premium(weekday, band, inbound),
                    });
                }
            }
        }
        rows
    }
}
