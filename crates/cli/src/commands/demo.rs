//! Demo walkthrough: the four sample vehicles, then both failure paths

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tollgate_business::{TollCalculator, TollError, Vehicle};
use tracing::warn;

use super::emit;
use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct DemoOutput {
    tolls: Vec<DemoToll>,
    failures: Vec<DemoFailure>,
}

#[derive(Debug, Serialize)]
struct DemoToll {
    vehicle: Vehicle,
    toll: Decimal,
}

#[derive(Debug, Serialize)]
struct DemoFailure {
    input: String,
    kind: &'static str,
    message: String,
}

pub fn run(format: OutputFormat) -> Result<()> {
    let output = collect()?;

    emit(format, &output, || {
        for toll in &output.tolls {
            println!("The toll for a {} is {}", toll.vehicle, toll.toll);
        }
        for failure in &output.failures {
            println!("❌ Caught {} for {}: {}", failure.kind, failure.input, failure.message);
        }
    })
}

fn collect() -> Result<DemoOutput> {
    let calc = TollCalculator::new();

    let vehicles = [
        Vehicle::car(2),
        Vehicle::taxi(1),
        Vehicle::bus(90, 60),
        Vehicle::delivery_truck(4000),
    ];

    let mut tolls = Vec::with_capacity(vehicles.len());
    for vehicle in vehicles {
        let toll = calc.calculate_toll(Some(&vehicle))?;
        tolls.push(DemoToll { vehicle, toll });
    }

    let attempts = [
        ("\"this will fail\"", tollgate_business::resolve_vehicle_rate(Some("this will fail"))),
        ("empty tag", tollgate_business::resolve_vehicle_rate(Some(""))),
        ("no vehicle", calc.calculate_toll(None)),
    ];

    let mut failures = Vec::new();
    for (input, attempt) in attempts {
        match attempt {
            Err(err) if err.is_category_error() => {
                warn!(input, error = %err, "toll rejected");
                failures.push(DemoFailure {
                    input: input.to_string(),
                    kind: error_kind(&err),
                    message: err.to_string(),
                });
            }
            Err(err) => return Err(err.into()),
            Ok(_) => {}
        }
    }

    Ok(DemoOutput { tolls, failures })
}

fn error_kind(err: &TollError) -> &'static str {
    match err {
        TollError::InvalidCategory(_) => "InvalidCategory",
        TollError::MissingCategory => "MissingCategory",
        TollError::InvalidHour(_) => "InvalidHour",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_covers_all_paths() {
        let output = collect().unwrap();

        let tolls: Vec<_> = output.tolls.iter().map(|t| t.toll).collect();
        assert_eq!(tolls, vec![dec!(2.00), dec!(3.50), dec!(5.00), dec!(10.00)]);

        let kinds: Vec<_> = output.failures.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec!["InvalidCategory", "InvalidCategory", "MissingCategory"]
        );
    }
}
