use crate::engine::{BmiError, BmiResult, ColorTag, ErrorReport};
use crate::units::UnitSystem;
use colored::{Color, Colorize};

fn terminal_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Green => Color::Green,
        ColorTag::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        ColorTag::Red => Color::Red,
    }
}

/// Results screen as plain text. `color` paints the classification.
pub fn format_result_text(result: &BmiResult, color: bool) -> String {
    let label = result.classification.label();
    let classification = if color {
        label
            .color(terminal_color(result.color_tag))
            .bold()
            .to_string()
    } else {
        label.to_string()
    };

    format!(
        "Your BMI Results\n\
         Your BMI:        {:.1}\n\
         Classification:  {}\n\
         \n\
         Health Recommendation:\n  {}",
        result.bmi, classification, result.advice
    )
}

pub fn format_error_text(err: &BmiError) -> String {
    match err {
        BmiError::Validation(failure) => format!("Input Error: {}", failure),
        BmiError::Calculation(_) => err.to_string(),
    }
}

pub fn format_result_json(result: &BmiResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

pub fn format_error_json(err: &BmiError) -> String {
    let report = ErrorReport::from(err);
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.message.clone())
}

/// Accepted input ranges for a unit system
pub fn format_ranges(system: UnitSystem) -> String {
    format!(
        "{}\n  Height: {} {} (exclusive)\n  Weight: {} {} (exclusive)",
        system.label(),
        system.height_bounds(),
        system.height_unit(),
        system.weight_bounds(),
        system.weight_unit()
    )
}
