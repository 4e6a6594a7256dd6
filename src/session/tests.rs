#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::Config;
    use crate::engine::{Classification, ErrorKind};
    use crate::units::UnitSystem;

    #[test]
    fn test_starts_on_input_without_result() {
        let session = Session::new(UnitSystem::Imperial);
        assert_eq!(session.view(), View::Input);
        assert!(session.result().is_none());
        assert_eq!(session.height_unit(), "in");
        assert_eq!(session.weight_unit(), "lb");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::empty();
        config.default_system = UnitSystem::Imperial;
        assert_eq!(
            Session::from_config(&config).unit_system(),
            UnitSystem::Imperial
        );
    }

    #[test]
    fn test_successful_calculation_shows_results() {
        let mut session = Session::new(UnitSystem::Metric);
        session.set_height("170");
        session.set_weight("70");
        let result = session.calculate().unwrap();
        assert_eq!(result.bmi, 24.2);
        assert_eq!(session.view(), View::Results);
        assert!(session.result().is_some());
    }

    #[test]
    fn test_failure_discards_previous_result() {
        let mut session = Session::new(UnitSystem::Metric);
        session.set_height("170");
        session.set_weight("70");
        session.calculate().unwrap();

        session.set_weight("9000");
        let err = session.calculate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WeightOutOfRange);
        assert!(session.result().is_none());
        assert_eq!(session.view(), View::Input);
    }

    #[test]
    fn test_unit_switch_does_not_reinterpret() {
        let mut session = Session::new(UnitSystem::Metric);
        session.set_height("170");
        session.set_weight("70");
        session.calculate().unwrap();

        session.select_unit_system(UnitSystem::Imperial);

        // Text stays as typed and the shown result is untouched
        assert_eq!(session.height_text(), "170");
        assert_eq!(session.weight_text(), "70");
        let result = session.result().unwrap();
        assert_eq!(result.bmi, 24.2);
        assert_eq!(result.unit_system, UnitSystem::Metric);
        assert_eq!(session.height_unit(), "in");

        // The next submission reads the same text in the new units
        let err = session.calculate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeightOutOfRange);
    }

    #[test]
    fn test_switch_then_recalculate_in_new_units() {
        let mut session = Session::new(UnitSystem::Metric);
        session.select_unit_system(UnitSystem::Imperial);
        session.set_height("68");
        session.set_weight("150");
        let result = session.calculate().unwrap();
        assert_eq!(result.bmi, 22.8);
        assert_eq!(result.classification, Classification::NormalWeight);
        assert_eq!(result.unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn test_clear_inputs_keeps_unit_system() {
        let mut session = Session::new(UnitSystem::Imperial);
        session.set_height("68");
        session.set_weight("150");
        session.clear_inputs();
        assert_eq!(session.height_text(), "");
        assert_eq!(session.weight_text(), "");
        assert_eq!(session.unit_system(), UnitSystem::Imperial);
        assert_eq!(
            session.calculate().unwrap_err().kind(),
            ErrorKind::MissingInput
        );
    }

    #[test]
    fn test_back_to_input_discards_result() {
        let mut session = Session::new(UnitSystem::Metric);
        session.set_height("150");
        session.set_weight("45");
        session.calculate().unwrap();
        session.back_to_input();
        assert_eq!(session.view(), View::Input);
        assert!(session.result().is_none());
        // Inputs survive going back
        assert_eq!(session.height_text(), "150");
    }
}
