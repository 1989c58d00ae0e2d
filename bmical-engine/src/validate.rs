use std::ops::RangeInclusive;

use bmical_model::measurement::{ValidHeight, ValidWeight, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

use crate::command::Field;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid {}", .0.name())]
    NotANumber(Field),
    #[error("{} must be between {} and {} {}", .0.label(), .1.start(), .1.end(), .0.unit())]
    OutOfRange(Field, RangeInclusive<f64>),
}

pub fn validate_height(raw: &str) -> Result<ValidHeight, ValidationError> {
    let value = parse_positive(raw).ok_or(ValidationError::NotANumber(Field::Height))?;
    ValidHeight::try_new(value)
        .ok_or(ValidationError::OutOfRange(Field::Height, HEIGHT_RANGE_CM))
}

pub fn validate_weight(raw: &str) -> Result<ValidWeight, ValidationError> {
    let value = parse_positive(raw).ok_or(ValidationError::NotANumber(Field::Weight))?;
    ValidWeight::try_new(value)
        .ok_or(ValidationError::OutOfRange(Field::Weight, WEIGHT_RANGE_KG))
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_within_bounds_is_accepted() {
        let test_data = [("50", 50.0), ("300", 300.0), ("170", 170.0), (" 62.5 ", 62.5)];

        for (i, (raw, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                validate_height(raw).map(|h| h.cm()),
                Ok(expected),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn unparsable_or_non_positive_height_is_not_a_number() {
        let test_data = ["", "abc", "12abc", "-170", "0", "inf", "NaN"];

        for (i, raw) in test_data.into_iter().enumerate() {
            assert_eq!(
                validate_height(raw),
                Err(ValidationError::NotANumber(Field::Height)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn height_outside_bounds_is_rejected() {
        for raw in ["49.99", "300.01", "12", "1000"] {
            assert_eq!(
                validate_height(raw),
                Err(ValidationError::OutOfRange(Field::Height, HEIGHT_RANGE_CM))
            );
        }
    }

    #[test]
    fn weight_within_bounds_is_accepted() {
        let test_data = [("10", 10.0), ("500", 500.0), ("70", 70.0)];

        for (i, (raw, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                validate_weight(raw).map(|w| w.kg()),
                Ok(expected),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn weight_outside_bounds_is_rejected() {
        for raw in ["9.99", "500.01", "5"] {
            assert_eq!(
                validate_weight(raw),
                Err(ValidationError::OutOfRange(Field::Weight, WEIGHT_RANGE_KG))
            );
        }
        assert_eq!(
            validate_weight("-70"),
            Err(ValidationError::NotANumber(Field::Weight))
        );
    }

    #[test]
    fn messages_match_the_form_surface_text() {
        assert_eq!(
            ValidationError::NotANumber(Field::Height).to_string(),
            "Please enter a valid height"
        );
        assert_eq!(
            ValidationError::OutOfRange(Field::Height, HEIGHT_RANGE_CM).to_string(),
            "Height must be between 50 and 300 cm"
        );
        assert_eq!(
            ValidationError::NotANumber(Field::Weight).to_string(),
            "Please enter a valid weight"
        );
        assert_eq!(
            ValidationError::OutOfRange(Field::Weight, WEIGHT_RANGE_KG).to_string(),
            "Weight must be between 10 and 500 kg"
        );
    }
}
