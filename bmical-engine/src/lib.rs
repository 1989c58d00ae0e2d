pub mod animation;
pub mod command;
pub mod validate;
pub mod view;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use bmical_model::measurement::Measurement;

use crate::animation::Animator;
use crate::command::{Command, Field};
use crate::validate::{validate_height, validate_weight, ValidationError};
use crate::view::{ErrorSurface, FormSurface, Outcome, ResultSurface};

/// Dispatches the command set against the view surfaces. One synchronous
/// pass per command; only the value animation outlives the call, running
/// on the async runtime until it completes or is superseded.
pub struct Session {
    form: Arc<dyn FormSurface>,
    errors: Arc<dyn ErrorSurface>,
    result: Arc<dyn ResultSurface>,
    animator: Animator,
    animation_duration: Duration,
}

impl Session {
    pub fn new(
        form: Arc<dyn FormSurface>,
        errors: Arc<dyn ErrorSurface>,
        result: Arc<dyn ResultSurface>,
    ) -> Self {
        Self::with_animation_duration(form, errors, result, animation::DURATION)
    }

    pub fn with_animation_duration(
        form: Arc<dyn FormSurface>,
        errors: Arc<dyn ErrorSurface>,
        result: Arc<dyn ResultSurface>,
        animation_duration: Duration,
    ) -> Self {
        Self {
            form,
            errors,
            result,
            animator: Animator::new(),
            animation_duration,
        }
    }

    pub fn handle(&self, command: Command) {
        debug!("Handling {:?}", command);
        match command {
            Command::FieldChanged(field) => self.revalidate(field),
            Command::Submit => self.submit(),
            Command::Reset => self.reset(),
        }
    }

    fn revalidate(&self, field: Field) {
        let checked = match field {
            Field::Height => validate_height(&self.form.raw_height()).map(|_| ()),
            Field::Weight => validate_weight(&self.form.raw_weight()).map(|_| ()),
        };
        match checked {
            Ok(()) => self.errors.clear(field),
            Err(e) => self.errors.show(field, &e.to_string()),
        }
    }

    fn submit(&self) {
        let height = self.checked(Field::Height, validate_height(&self.form.raw_height()));
        let weight = self.checked(Field::Weight, validate_weight(&self.form.raw_weight()));
        let (Some(height), Some(weight)) = (height, weight) else {
            info!("Submission blocked by validation errors");
            return;
        };

        let outcome = Outcome::new(Measurement::new(height, weight).bmi());
        info!("Computed BMI {:.1}, category {}", outcome.bmi, outcome.category);
        self.result.show_outcome(&outcome);
        self.animator
            .start_with_duration(self.result.clone(), outcome.bmi, self.animation_duration);
    }

    fn checked<T>(&self, field: Field, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.errors.clear(field);
                Some(value)
            }
            Err(e) => {
                debug!("{:?} rejected: {}", field, e);
                self.errors.show(field, &e.to_string());
                None
            }
        }
    }

    fn reset(&self) {
        info!("Resetting calculator");
        self.animator.cancel();
        self.form.clear_inputs();
        self.errors.clear(Field::Height);
        self.errors.clear(Field::Weight);
        self.result.hide();
        self.form.focus_height();
    }
}
