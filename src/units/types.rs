use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system the user enters height and weight in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

impl UnitSystem {
    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    pub fn unit_for(self, dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Height => self.height_unit(),
            Dimension::Weight => self.weight_unit(),
        }
    }

    /// Exclusive range of accepted heights
    pub fn height_bounds(self) -> Bounds {
        match self {
            UnitSystem::Metric => Bounds::new(50.0, 250.0),
            UnitSystem::Imperial => Bounds::new(20.0, 100.0),
        }
    }

    /// Exclusive range of accepted weights
    pub fn weight_bounds(self) -> Bounds {
        match self {
            UnitSystem::Metric => Bounds::new(20.0, 500.0),
            UnitSystem::Imperial => Bounds::new(45.0, 1000.0),
        }
    }

    pub fn bounds_for(self, dimension: Dimension) -> Bounds {
        match dimension {
            Dimension::Height => self.height_bounds(),
            Dimension::Weight => self.weight_bounds(),
        }
    }

    /// Label used on the selector, e.g. "Metric (kg, cm)"
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg, cm)",
            UnitSystem::Imperial => "Imperial (lb, in)",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!(
                "Unknown unit system '{}' (expected 'metric' or 'imperial')",
                other
            )),
        }
    }
}

/// The two measured quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Height,
    Weight,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Height => write!(f, "Height"),
            Dimension::Weight => write!(f, "Weight"),
        }
    }
}

/// Open interval `(min, max)`; both ends are rejected
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "between {} and {}", self.min, self.max)
    }
}
