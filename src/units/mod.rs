// Unit systems, their labels and the measurement ranges accepted for each

pub mod detector;
pub mod types;

pub use detector::{looks_like_decimal, parse_decimal};
pub use types::{Bounds, Dimension, UnitSystem};
