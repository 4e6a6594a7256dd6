use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal literal: optional sign, digits with an optional fraction
    /// (or a bare fraction), optional exponent.
    /// Examples: "170", "70.5", ".5", "-3", "1.7e2"
    static ref DECIMAL_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Check if a string is a decimal number as typed into a form field.
/// Surrounding whitespace is ignored; `NaN`, `inf` and the like are rejected.
pub fn looks_like_decimal(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    DECIMAL_PATTERN.is_match(trimmed)
}

/// Parse form-field text as an `f64`.
///
/// Literals too large for `f64` come back infinite and literals too small
/// come back as the smallest normal value of the same sign, so the range
/// checks reject them instead of the number or sign checks.
pub fn parse_decimal(s: &str) -> Option<f64> {
    if !looks_like_decimal(s) {
        return None;
    }

    let trimmed = s.trim();
    let value = trimmed.parse::<f64>().ok()?;
    if value == 0.0 && has_nonzero_mantissa(trimmed) {
        return Some(if trimmed.starts_with('-') {
            -f64::MIN_POSITIVE
        } else {
            f64::MIN_POSITIVE
        });
    }

    Some(value)
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| (b'1'..=b'9').contains(&b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_detection() {
        assert!(looks_like_decimal("170"));
        assert!(looks_like_decimal("70.5"));
        assert!(looks_like_decimal(" 68 "));
        assert!(looks_like_decimal(".5"));
        assert!(looks_like_decimal("5."));
        assert!(looks_like_decimal("-20"));
        assert!(looks_like_decimal("+1.7e2"));

        assert!(!looks_like_decimal(""));
        assert!(!looks_like_decimal("abc"));
        assert!(!looks_like_decimal("NaN"));
        assert!(!looks_like_decimal("inf"));
        assert!(!looks_like_decimal("1,000"));
        assert!(!looks_like_decimal("0x10"));
        assert!(!looks_like_decimal("70 kg"));
        assert!(!looks_like_decimal("."));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("170"), Some(170.0));
        assert_eq!(parse_decimal(" 70.5\t"), Some(70.5));
        assert_eq!(parse_decimal("1.7e2"), Some(170.0));
        assert_eq!(parse_decimal("-0"), Some(-0.0));
        assert_eq!(parse_decimal("seventy"), None);
        assert_eq!(parse_decimal("0e-400"), Some(0.0));
    }

    #[test]
    fn test_parse_decimal_out_of_f64_range() {
        assert_eq!(parse_decimal("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_decimal("-1e400"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_decimal("1e-400"), Some(f64::MIN_POSITIVE));
        assert_eq!(parse_decimal("-2.5E-400"), Some(-f64::MIN_POSITIVE));
    }
}
