use crate::engine::advice::{advice_for, color_for};
use crate::engine::classifier::classify;
use crate::engine::error::BmiError;
use crate::engine::types::{BmiResult, ValidatedMeasurement};
use crate::units::UnitSystem;
use log::{info, warn};

/// Conversion factor for the pounds/inches formula
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Unrounded BMI for a validated measurement
pub fn raw_bmi(measurement: &ValidatedMeasurement) -> f64 {
    let height = measurement.height();
    let weight = measurement.weight();
    match measurement.unit_system() {
        UnitSystem::Metric => weight / (height / 100.0).powi(2),
        UnitSystem::Imperial => IMPERIAL_FACTOR * weight / height.powi(2),
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute, classify, then round.
///
/// Classification sees the unrounded value, so a raw 24.96 is shown as 25.0
/// while still classified as normal weight.
pub fn compute(measurement: &ValidatedMeasurement) -> Result<BmiResult, BmiError> {
    let raw = raw_bmi(measurement);
    if !raw.is_finite() {
        warn!(
            "Non-finite BMI from height={} weight={} ({})",
            measurement.height(),
            measurement.weight(),
            measurement.unit_system()
        );
        return Err(BmiError::Calculation(format!(
            "BMI is not a finite number ({})",
            raw
        )));
    }

    let classification = classify(raw);
    let result = BmiResult {
        bmi: round_one_decimal(raw),
        classification,
        advice: advice_for(classification),
        color_tag: color_for(classification),
        unit_system: measurement.unit_system(),
    };

    info!(
        "BMI {:.1} ({}) from {} {} / {} {}",
        result.bmi,
        classification,
        measurement.height(),
        measurement.unit_system().height_unit(),
        measurement.weight(),
        measurement.unit_system().weight_unit()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Classification;

    #[test]
    fn test_metric_formula() {
        let m = ValidatedMeasurement::new(UnitSystem::Metric, 200.0, 100.0);
        assert!((raw_bmi(&m) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_imperial_formula() {
        let m = ValidatedMeasurement::new(UnitSystem::Imperial, 70.0, 140.0);
        let expected = 703.0 * 140.0 / 4900.0;
        assert!((raw_bmi(&m) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_one_decimal(24.2214), 24.2);
        assert_eq!(round_one_decimal(22.8049), 22.8);
        assert_eq!(round_one_decimal(24.96), 25.0);
        assert_eq!(round_one_decimal(20.0), 20.0);
    }

    #[test]
    fn test_classifies_before_rounding() {
        // 24.96 rounds to 25.0 but is still normal weight
        let height = 200.0;
        let weight = 24.96 * 4.0;
        let m = ValidatedMeasurement::new(UnitSystem::Metric, height, weight);
        let result = compute(&m).unwrap();
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.classification, Classification::NormalWeight);
    }

    #[test]
    fn test_non_finite_is_calculation_error() {
        // Never produced by the validator, but must not panic
        let m = ValidatedMeasurement::new(UnitSystem::Metric, 0.0, 70.0);
        let err = compute(&m).unwrap_err();
        assert!(matches!(err, BmiError::Calculation(_)));
    }
}
