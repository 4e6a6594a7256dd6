// WebAssembly bindings for a browser front end
use crate::engine::{self, ErrorReport, Measurement};
use crate::format;
use crate::units::UnitSystem;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct BmiWasm {}

impl Default for BmiWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RangesJson {
    unit_system: UnitSystem,
    height_unit: &'static str,
    weight_unit: &'static str,
    height: crate::units::Bounds,
    weight: crate::units::Bounds,
}

fn parse_system(unit_system: &str) -> Result<UnitSystem, JsValue> {
    unit_system
        .parse::<UnitSystem>()
        .map_err(|e| JsValue::from_str(&e))
}

/// Result or error report for one measurement, as JSON
fn report_json(measurement: &Measurement) -> Result<String, JsValue> {
    match engine::calculate(measurement) {
        Ok(result) => serde_json::to_string(&result),
        Err(e) => serde_json::to_string(&ErrorReport::from(&e)),
    }
    .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

#[wasm_bindgen]
impl BmiWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Calculate BMI from raw form text.
    /// Returns JSON of either the result or an error report; validation
    /// failures are data, not exceptions. Only an unknown unit system throws.
    #[wasm_bindgen]
    pub fn calculate(
        &self,
        unit_system: &str,
        height_text: &str,
        weight_text: &str,
    ) -> Result<String, JsValue> {
        let system = parse_system(unit_system)?;
        report_json(&Measurement::new(system, height_text, weight_text))
    }

    /// Same as `calculate`, taking a JSON `Measurement`
    /// (`{"unitSystem", "heightText", "weightText"}`)
    #[wasm_bindgen]
    pub fn calculate_json(&self, measurement_json: &str) -> Result<String, JsValue> {
        let measurement: Measurement = serde_json::from_str(measurement_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse measurement JSON: {}", e)))?;

        report_json(&measurement)
    }

    /// Classification name for a BMI value; throws unless it is finite and positive
    #[wasm_bindgen]
    pub fn classify(&self, bmi: f64) -> Result<String, JsValue> {
        engine::classify_checked(bmi)
            .map(|c| c.label().to_string())
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Accepted ranges and unit labels for a unit system, as JSON
    #[wasm_bindgen]
    pub fn ranges(&self, unit_system: &str) -> Result<String, JsValue> {
        let system = parse_system(unit_system)?;
        let ranges = RangesJson {
            unit_system: system,
            height_unit: system.height_unit(),
            weight_unit: system.weight_unit(),
            height: system.height_bounds(),
            weight: system.weight_bounds(),
        };

        serde_json::to_string(&ranges)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize ranges: {}", e)))
    }

    /// Human-readable results text (no terminal colors)
    #[wasm_bindgen]
    pub fn describe(
        &self,
        unit_system: &str,
        height_text: &str,
        weight_text: &str,
    ) -> Result<String, JsValue> {
        let system = parse_system(unit_system)?;
        let text = match engine::calculate_from_text(system, height_text, weight_text) {
            Ok(result) => format::format_result_text(&result, false),
            Err(e) => format::format_error_text(&e),
        };
        Ok(text)
    }
}
