use bmical_model::category::Category;

use crate::command::Field;

/// Everything the result surface needs to present one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub bmi: f64,
    pub category: Category,
}

impl Outcome {
    pub fn new(bmi: f64) -> Self {
        Self {
            bmi,
            category: Category::of(bmi),
        }
    }
}

/// Raw form values as the user typed them, plus the form-level actions the
/// engine triggers on reset.
#[mockall::automock]
pub trait FormSurface: Send + Sync {
    fn raw_height(&self) -> String;
    fn raw_weight(&self) -> String;
    fn clear_inputs(&self);
    fn focus_height(&self);
}

/// One message slot per field. A field becoming valid clears its slot.
#[mockall::automock]
pub trait ErrorSurface: Send + Sync {
    fn show(&self, field: Field, message: &str);
    fn clear(&self, field: Field);
}

/// Consumes the outcome of a calculation. `update_value` receives animation
/// frames until the displayed value reaches the final BMI.
#[mockall::automock]
pub trait ResultSurface: Send + Sync {
    fn show_outcome(&self, outcome: &Outcome);
    fn update_value(&self, bmi: f64);
    fn hide(&self);
}
