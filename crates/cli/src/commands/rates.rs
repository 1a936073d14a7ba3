//! Rate lookups: rate, premium, quote, table

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tollgate_business::{
    derive_weekday_flag, resolve_peak_premium, resolve_vehicle_rate, TimeBand, TollCalculator,
    VehicleCategory,
};
use tracing::info;

use super::{emit, parse_timestamp};
use crate::OutputFormat;

#[derive(Serialize)]
struct RateOutput<'a> {
    vehicle: &'a str,
    rate: Decimal,
}

#[derive(Serialize)]
struct PremiumOutput {
    at: chrono::NaiveDateTime,
    weekday: bool,
    band: TimeBand,
    inbound: bool,
    premium: Decimal,
}

/// Flat rate for a free-text vehicle tag
pub fn rate(vehicle: Option<&str>, format: OutputFormat) -> Result<()> {
    let rate = resolve_vehicle_rate(vehicle).context("Cannot resolve toll rate")?;
    let vehicle = vehicle.unwrap_or_default().trim();
    info!(vehicle, %rate, "rate resolved");

    emit(format, &RateOutput { vehicle, rate }, || {
        println!("🚗 Toll for {}: {}", vehicle, rate);
    })
}

/// Peak premium for a crossing
pub fn premium(at: Option<&str>, inbound: bool, format: OutputFormat) -> Result<()> {
    let at = parse_timestamp(at)?;
    let weekday = derive_weekday_flag(&at);
    let band = TimeBand::of(&at);
    let premium = resolve_peak_premium(weekday, band, inbound);
    info!(%at, inbound, %premium, "premium resolved");

    let output = PremiumOutput {
        at,
        weekday,
        band,
        inbound,
        premium,
    };
    emit(format, &output, || {
        println!("⏱️  Peak premium");
        println!("   At:        {}", at);
        println!("   Weekday:   {}", weekday);
        println!("   Band:      {}", band);
        println!("   Direction: {}", direction(inbound));
        println!("   Premium:   x{}", premium);
    })
}

/// Full quote for a crossing
pub fn quote(vehicle: &str, at: Option<&str>, inbound: bool, format: OutputFormat) -> Result<()> {
    let category = VehicleCategory::from_tag(Some(vehicle)).context("Cannot quote toll")?;
    let at = parse_timestamp(at)?;
    let quote = TollCalculator::new().quote(category, at, inbound);
    info!(%category, total = %quote.total, "quote issued");

    emit(format, &quote, || {
        println!("🧾 Toll quote");
        println!("   Vehicle:   {}", quote.category);
        println!("   At:        {} ({})", quote.at, quote.band);
        println!("   Direction: {}", direction(quote.inbound));
        println!("   Base rate: {}", quote.base_rate);
        println!("   Premium:   x{}", quote.premium);
        println!("   Total:     {}", quote.total);
    })
}

/// All 16 premium cells
pub fn table(format: OutputFormat) -> Result<()> {
    let rows = TollCalculator::new().premium_table();

    emit(format, &rows, || {
        println!("| weekday | band         | direction | premium |");
        println!("|---------|--------------|-----------|---------|");
        for row in &rows {
            println!(
                "| {:<7} | {:<12} | {:<9} | {:>7} |",
                row.weekday,
                row.band,
                direction(row.inbound),
                row.premium
            );
        }
    })
}

fn direction(inbound: bool) -> &'static str {
    if inbound {
        "inbound"
    } else {
        "outbound"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_reports_error_kind() {
        let err = rate(Some("boat"), OutputFormat::Text).unwrap_err();
        let toll = err.downcast_ref::<tollgate_business::TollError>().unwrap();
        assert!(toll.is_invalid_category());

        let err = rate(None, OutputFormat::Text).unwrap_err();
        let toll = err.downcast_ref::<tollgate_business::TollError>().unwrap();
        assert!(toll.is_missing_category());
    }

    #[test]
    fn test_quote_rejects_bad_input() {
        assert!(quote("boat", Some("2026-10-21T08:00"), true, OutputFormat::Json).is_err());
        assert!(quote("bus", Some("not a time"), true, OutputFormat::Json).is_err());
        assert!(quote("bus", Some("2026-10-21T08:00"), true, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_direction() {
        assert_eq!(direction(true), "inbound");
        assert_eq!(direction(false), "outbound");
    }
}
