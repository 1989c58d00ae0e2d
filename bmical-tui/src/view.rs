use std::sync::{Arc, Mutex, MutexGuard};

use bmical_engine::command::Field;
use bmical_engine::view::{ErrorSurface, FormSurface, Outcome, ResultSurface};

/// Everything the draw loop renders. Written by [`TermView`] on behalf of
/// the engine and by the key loop while editing.
#[derive(Debug)]
pub struct ViewState {
    pub height_input: String,
    pub weight_input: String,
    pub focused: Field,
    pub height_error: Option<String>,
    pub weight_error: Option<String>,
    pub displayed_bmi: Option<f64>,
    pub outcome: Option<Outcome>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            height_input: String::new(),
            weight_input: String::new(),
            focused: Field::Height,
            height_error: None,
            weight_error: None,
            displayed_bmi: None,
            outcome: None,
        }
    }
}

impl ViewState {
    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.height_input,
            Field::Weight => &self.weight_input,
        }
    }

    pub fn input_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Height => &mut self.height_input,
            Field::Weight => &mut self.weight_input,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        match field {
            Field::Height => self.height_error.as_deref(),
            Field::Weight => self.weight_error.as_deref(),
        }
    }

    /// The reset affordance is shown together with the result panel.
    pub fn result_visible(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Adapter between the engine's view surfaces and the shared [`ViewState`]
/// the terminal renders from.
#[derive(Clone)]
pub struct TermView {
    state: Arc<Mutex<ViewState>>,
}

impl TermView {
    pub fn new(state: Arc<Mutex<ViewState>>) -> Self {
        Self { state }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap()
    }
}

impl FormSurface for TermView {
    fn raw_height(&self) -> String {
        self.state().height_input.clone()
    }

    fn raw_weight(&self) -> String {
        self.state().weight_input.clone()
    }

    fn clear_inputs(&self) {
        let mut state = self.state();
        state.height_input.clear();
        state.weight_input.clear();
    }

    fn focus_height(&self) {
        self.state().focused = Field::Height;
    }
}

impl ErrorSurface for TermView {
    fn show(&self, field: Field, message: &str) {
        let mut state = self.state();
        match field {
            Field::Height => state.height_error = Some(message.to_owned()),
            Field::Weight => state.weight_error = Some(message.to_owned()),
        }
    }

    fn clear(&self, field: Field) {
        let mut state = self.state();
        match field {
            Field::Height => state.height_error = None,
            Field::Weight => state.weight_error = None,
        }
    }
}

impl ResultSurface for TermView {
    fn show_outcome(&self, outcome: &Outcome) {
        let mut state = self.state();
        state.outcome = Some(outcome.clone());
        state.displayed_bmi = Some(0.0);
    }

    fn update_value(&self, bmi: f64) {
        self.state().displayed_bmi = Some(bmi);
    }

    fn hide(&self) {
        let mut state = self.state();
        state.outcome = None;
        state.displayed_bmi = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> (TermView, Arc<Mutex<ViewState>>) {
        let state = Arc::new(Mutex::new(ViewState::default()));
        (TermView::new(state.clone()), state)
    }

    #[test]
    fn form_surface_reads_and_clears_the_inputs() {
        let (term_view, state) = view();
        {
            let mut state = state.lock().unwrap();
            state.height_input.push_str("170");
            state.weight_input.push_str("70");
            state.focused = Field::Weight;
        }

        assert_eq!(term_view.raw_height(), "170");
        assert_eq!(term_view.raw_weight(), "70");

        term_view.clear_inputs();
        term_view.focus_height();
        let state = state.lock().unwrap();
        assert_eq!(state.height_input, "");
        assert_eq!(state.weight_input, "");
        assert_eq!(state.focused, Field::Height);
    }

    #[test]
    fn error_surface_targets_one_slot_per_field() {
        let (term_view, state) = view();

        term_view.show(Field::Weight, "Please enter a valid weight");
        assert_eq!(
            state.lock().unwrap().error(Field::Weight),
            Some("Please enter a valid weight")
        );
        assert_eq!(state.lock().unwrap().error(Field::Height), None);

        term_view.clear(Field::Weight);
        assert_eq!(state.lock().unwrap().error(Field::Weight), None);
    }

    #[test]
    fn result_surface_toggles_the_reset_affordance() {
        let (term_view, state) = view();
        assert!(!state.lock().unwrap().result_visible());

        term_view.show_outcome(&Outcome::new(24.2));
        term_view.update_value(12.1);
        {
            let state = state.lock().unwrap();
            assert!(state.result_visible());
            assert_eq!(state.displayed_bmi, Some(12.1));
        }

        term_view.hide();
        let state = state.lock().unwrap();
        assert!(!state.result_visible());
        assert_eq!(state.displayed_bmi, None);
    }
}
