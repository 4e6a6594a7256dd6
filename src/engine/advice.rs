use crate::engine::types::{Classification, ColorTag};

pub fn advice_for(classification: Classification) -> &'static str {
    match classification {
        Classification::Underweight => {
            "Consult a healthcare provider about healthy weight gain strategies."
        }
        Classification::NormalWeight => {
            "Maintain your healthy weight with balanced nutrition and exercise."
        }
        Classification::Overweight => {
            "Consider dietary improvements and increased physical activity."
        }
        Classification::Obese => "Consult a healthcare provider for a weight management plan.",
    }
}

pub fn color_for(classification: Classification) -> ColorTag {
    match classification {
        Classification::Underweight => ColorTag::Blue,
        Classification::NormalWeight => ColorTag::Green,
        Classification::Overweight => ColorTag::Orange,
        Classification::Obese => ColorTag::Red,
    }
}
