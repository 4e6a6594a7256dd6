use crate::engine::error::{BmiError, ErrorKind};
use crate::units::{Bounds, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw form input: the two fields exactly as typed, plus the selected system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub unit_system: UnitSystem,
    pub height_text: String,
    pub weight_text: String,
}

impl Measurement {
    pub fn new(
        unit_system: UnitSystem,
        height_text: impl Into<String>,
        weight_text: impl Into<String>,
    ) -> Self {
        Self {
            unit_system,
            height_text: height_text.into(),
            weight_text: weight_text.into(),
        }
    }
}

/// Height and weight that passed every validation rule.
/// Only the validator builds these, so the calculator never sees raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedMeasurement {
    unit_system: UnitSystem,
    height: f64,
    weight: f64,
}

impl ValidatedMeasurement {
    pub(crate) fn new(unit_system: UnitSystem, height: f64, weight: f64) -> Self {
        Self {
            unit_system,
            height,
            weight,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Health category, ordered by ascending BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Classification {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Underweight,
        Classification::NormalWeight,
        Classification::Overweight,
        Classification::Obese,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Classification::Underweight => "Underweight",
            Classification::NormalWeight => "Normal Weight",
            Classification::Overweight => "Overweight",
            Classification::Obese => "Obese",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color the classification is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Orange,
    Red,
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
        };
        f.write_str(name)
    }
}

/// Outcome of one successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// Rounded to one decimal place
    pub bmi: f64,
    /// Derived from the unrounded value
    pub classification: Classification,
    pub advice: &'static str,
    pub color_tag: ColorTag,
    pub unit_system: UnitSystem,
}

/// Serializable view of a [`BmiError`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_range: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub message: String,
}

impl From<&BmiError> for ErrorReport {
    fn from(err: &BmiError) -> Self {
        Self {
            error: err.kind(),
            expected_range: err.expected_range(),
            unit: err.unit(),
            message: err.to_string(),
        }
    }
}
