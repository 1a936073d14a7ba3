//! Rate resolution - pure decision-table lookups.
//!
//! Both tables are total over their input domain and carry no state.

use rust_decimal::Decimal;
use tollgate_core::{TimeBand, TollResult, VehicleCategory};

/// Flat toll rate for a vehicle category.
///
/// | category       | rate  |
/// |----------------|-------|
/// | Car            | 2.00  |
/// | Taxi           | 3.50  |
/// | Bus            | 5.00  |
/// | DeliveryTruck  | 10.00 |
pub fn vehicle_rate(category: VehicleCategory) -> Decimal {
    match category {
        VehicleCategory::Car => Decimal::new(200, 2),
        VehicleCategory::Taxi => Decimal::new(350, 2),
        VehicleCategory::Bus => Decimal::new(500, 2),
        VehicleCategory::DeliveryTruck => Decimal::new(1000, 2),
    }
}

/// Flat toll rate for an untyped, possibly absent category tag.
///
/// # Errors
/// - `MissingCategory` when `tag` is `None` or blank
/// - `InvalidCategory` when `tag` names no known vehicle type
pub fn resolve_vehicle_rate(tag: Option<&str>) -> TollResult<Decimal> {
    let category = VehicleCategory::from_tag(tag)?;
    Ok(vehicle_rate(category))
}

/// Peak-time premium multiplier.
///
/// Weekends are a flat 1.00. On weekdays the morning rush favours outbound
/// traffic and the evening rush favours inbound traffic.
pub fn resolve_peak_premium(is_weekday: bool, band: TimeBand, inbound: bool) -> Decimal {
    match (is_weekday, band, inbound) {
        (true, TimeBand::MorningRush, true) => Decimal::new(200, 2),
        (true, TimeBand::MorningRush, false) => Decimal::new(100, 2),
        (true, TimeBand::Daytime, true) => Decimal::new(150, 2),
        (true, TimeBand::Daytime, false) => Decimal::new(150, 2),
        (true, TimeBand::EveningRush, true) => Decimal::new(100, 2),
        (true, TimeBand::EveningRush, false) => Decimal::new(200, 2),
        (true, TimeBand::Overnight, true) => Decimal::new(75, 2),
        (true, TimeBand::Overnight, false) => Decimal::new(75, 2),
        (false, TimeBand::MorningRush, true) => Decimal::new(100, 2),
        (false, TimeBand::MorningRush, false) => Decimal::new(100, 2),
        (false, TimeBand::Daytime, true) => Decimal::new(100, 2),
        (false, TimeBand::Daytime, false) => Decimal::new(100, 2),
        (false, TimeBand::EveningRush, true) => Decimal::new(100, 2),
        (false, TimeBand::EveningRush, false) => Decimal::new(100, 2),
        (false, TimeBand::Overnight, true) => Decimal::new(100, 2),
        (false, TimeBand::Overnight, false) => Decimal::new(100, 2),
    }
}
