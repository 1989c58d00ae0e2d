use strum::{Display, EnumIter};

/// Weight category derived from a BMI value. Static reference data: each
/// variant carries a display name, a description, and a styling tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    #[strum(serialize = "Underweight")]
    Underweight,
    #[strum(serialize = "Normal Weight")]
    NormalWeight,
    #[strum(serialize = "Overweight")]
    Overweight,
    #[strum(serialize = "Obese")]
    Obese,
}

impl Category {
    /// Partitions the BMI line at 18.5, 25 and 30. Boundary values belong
    /// to the upper category, so exactly 25.0 is Overweight.
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::NormalWeight
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "You may need to gain weight. Consider consulting a healthcare \
                 provider for guidance on healthy weight gain."
            }
            Category::NormalWeight => {
                "Great! You have a healthy weight for your height. Maintain your \
                 current lifestyle."
            }
            Category::Overweight => {
                "You may want to consider losing some weight. A balanced diet and \
                 regular exercise can help."
            }
            Category::Obese => {
                "It's recommended to consult a healthcare provider for guidance \
                 on weight management."
            }
        }
    }

    /// Lowercase tag consumed by presentation layers for styling. Carries
    /// no business logic.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Underweight => "underweight",
            Category::NormalWeight => "normal",
            Category::Overweight => "overweight",
            Category::Obese => "obese",
        }
    }
}
