// Mutable form state owned by a front end. The engine itself stays pure;
// this is the one place the current inputs and result live.

pub mod command;

#[cfg(test)]
mod tests;

pub use command::{parse_command, Command};

use crate::config::Config;
use crate::engine::{self, BmiError, BmiResult, Measurement};
use crate::units::UnitSystem;

/// Which screen the front end should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Input,
    Results,
}

#[derive(Debug, Clone)]
pub struct Session {
    unit_system: UnitSystem,
    height_text: String,
    weight_text: String,
    result: Option<BmiResult>,
    view: View,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

impl Session {
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            height_text: String::new(),
            weight_text: String::new(),
            result: None,
            view: View::Input,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_system)
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn height_unit(&self) -> &'static str {
        self.unit_system.height_unit()
    }

    pub fn weight_unit(&self) -> &'static str {
        self.unit_system.weight_unit()
    }

    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    pub fn weight_text(&self) -> &str {
        &self.weight_text
    }

    /// Result of the last successful calculation, while it is on screen
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch units. Entered text is kept as typed and an existing result
    /// keeps the system it was computed in; nothing is converted.
    pub fn select_unit_system(&mut self, unit_system: UnitSystem) {
        if self.unit_system != unit_system {
            log::debug!("Unit system {} -> {}", self.unit_system, unit_system);
        }
        self.unit_system = unit_system;
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height_text = text.into();
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight_text = text.into();
    }

    pub fn clear_inputs(&mut self) {
        self.height_text.clear();
        self.weight_text.clear();
    }

    /// Snapshot of the form as it would be submitted
    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.unit_system, &self.height_text, &self.weight_text)
    }

    /// Submit the form. A failure drops any previous result, so a result
    /// is only ever present after a successful validation.
    pub fn calculate(&mut self) -> Result<&BmiResult, BmiError> {
        match engine::calculate(&self.measurement()) {
            Ok(result) => {
                self.view = View::Results;
                Ok(self.result.insert(result))
            }
            Err(e) => {
                self.result = None;
                self.view = View::Input;
                Err(e)
            }
        }
    }

    /// Leave the results screen; the result is discarded
    pub fn back_to_input(&mut self) {
        self.result = None;
        self.view = View::Input;
    }
}
