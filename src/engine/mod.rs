// BMI engine: validation, calculation, classification and advice lookup.
// Everything here is a pure function of its inputs.

pub mod advice;
pub mod calculator;
pub mod classifier;
pub mod error;
pub mod types;
pub mod validator;


pub use advice::{advice_for, color_for};
pub use calculator::{compute, raw_bmi, round_one_decimal};
pub use classifier::{classify, classify_checked};
pub use error::{BmiError, ErrorKind, ValidationFailure};
pub use types::{
    BmiResult, Classification, ColorTag, ErrorReport, Measurement, ValidatedMeasurement,
};
pub use validator::{validate, validate_measurement};

use crate::units::UnitSystem;
use log::debug;

/// Run a form submission through the whole engine
pub fn calculate(measurement: &Measurement) -> Result<BmiResult, BmiError> {
    let validated = validate_measurement(measurement).map_err(|failure| {
        debug!(
            "Rejected {} input (height={:?}, weight={:?}): {}",
            measurement.unit_system, measurement.height_text, measurement.weight_text, failure
        );
        failure
    })?;

    compute(&validated)
}

/// Convenience wrapper taking the fields directly
pub fn calculate_from_text(
    unit_system: UnitSystem,
    height_text: &str,
    weight_text: &str,
) -> Result<BmiResult, BmiError> {
    calculate(&Measurement::new(unit_system, height_text, weight_text))
}
