use crate::engine::error::ValidationFailure;
use crate::engine::types::{Measurement, ValidatedMeasurement};
use crate::units::{parse_decimal, Dimension, UnitSystem};

/// Check raw field text against the rules for `unit_system`.
///
/// Rules run in a fixed order and the first one that fails is reported:
/// both fields present, both numeric, both positive, height in range,
/// weight in range. Range bounds are exclusive.
pub fn validate(
    unit_system: UnitSystem,
    height_text: &str,
    weight_text: &str,
) -> Result<ValidatedMeasurement, ValidationFailure> {
    if height_text.trim().is_empty() || weight_text.trim().is_empty() {
        return Err(ValidationFailure::MissingInput);
    }

    let height = parse_decimal(height_text).ok_or(ValidationFailure::NotANumber {
        field: Dimension::Height,
    })?;
    let weight = parse_decimal(weight_text).ok_or(ValidationFailure::NotANumber {
        field: Dimension::Weight,
    })?;

    if height <= 0.0 {
        return Err(ValidationFailure::NonPositiveValue {
            field: Dimension::Height,
        });
    }
    if weight <= 0.0 {
        return Err(ValidationFailure::NonPositiveValue {
            field: Dimension::Weight,
        });
    }

    if !unit_system.bounds_for(Dimension::Height).contains(height) {
        return Err(out_of_range(unit_system, Dimension::Height));
    }
    if !unit_system.bounds_for(Dimension::Weight).contains(weight) {
        return Err(out_of_range(unit_system, Dimension::Weight));
    }

    Ok(ValidatedMeasurement::new(unit_system, height, weight))
}

fn out_of_range(unit_system: UnitSystem, dimension: Dimension) -> ValidationFailure {
    let bounds = unit_system.bounds_for(dimension);
    let unit = unit_system.unit_for(dimension);
    match dimension {
        Dimension::Height => ValidationFailure::HeightOutOfRange { bounds, unit },
        Dimension::Weight => ValidationFailure::WeightOutOfRange { bounds, unit },
    }
}

/// Validate a [`Measurement`] value
pub fn validate_measurement(
    measurement: &Measurement,
) -> Result<ValidatedMeasurement, ValidationFailure> {
    validate(
        measurement.unit_system,
        &measurement.height_text,
        &measurement.weight_text,
    )
}
