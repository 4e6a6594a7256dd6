use crate::engine::types::Classification;

/// Lowest BMI classified as normal weight
pub const NORMAL_WEIGHT_FROM: f64 = 18.5;
/// Lowest BMI classified as overweight
pub const OVERWEIGHT_FROM: f64 = 25.0;
/// Lowest BMI classified as obese
pub const OBESE_FROM: f64 = 30.0;

/// Map a BMI to its category using half-open bins
pub fn classify(bmi: f64) -> Classification {
    if bmi < NORMAL_WEIGHT_FROM {
        Classification::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        Classification::NormalWeight
    } else if bmi < OBESE_FROM {
        Classification::Overweight
    } else {
        Classification::Obese
    }
}

/// [`classify`] for a BMI that did not come from the calculator.
/// Only finite positive values have a category.
pub fn classify_checked(bmi: f64) -> Result<Classification, String> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(format!("BMI must be a positive number, got {}", bmi));
    }
    Ok(classify(bmi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exact() {
        assert_eq!(classify(18.499), Classification::Underweight);
        assert_eq!(classify(18.5), Classification::NormalWeight);
        assert_eq!(classify(24.999), Classification::NormalWeight);
        assert_eq!(classify(25.0), Classification::Overweight);
        assert_eq!(classify(29.999), Classification::Overweight);
        assert_eq!(classify(30.0), Classification::Obese);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.1), Classification::Underweight);
        assert_eq!(classify(250.0), Classification::Obese);
    }

    #[test]
    fn test_classify_checked_rejects_non_positive_and_non_finite() {
        assert!(classify_checked(f64::NAN).is_err());
        assert!(classify_checked(f64::INFINITY).is_err());
        assert!(classify_checked(-5.0).is_err());
        assert!(classify_checked(0.0).is_err());
        assert_eq!(
            classify_checked(-5.0).unwrap_err(),
            "BMI must be a positive number, got -5"
        );
        assert_eq!(classify_checked(22.0), Ok(Classification::NormalWeight));
        assert_eq!(classify_checked(30.0), Ok(Classification::Obese));
    }

    #[test]
    fn test_monotonic() {
        let mut previous = classify(1.0);
        let mut bmi = 1.0;
        while bmi < 60.0 {
            let current = classify(bmi);
            assert!(current >= previous, "{} went backwards at {}", current, bmi);
            previous = current;
            bmi += 0.05;
        }
    }
}
