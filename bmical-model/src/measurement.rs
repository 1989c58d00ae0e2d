use std::ops::RangeInclusive;

/// Heights outside this range are not accepted for a calculation.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 50.0..=300.0;

/// Weights outside this range are not accepted for a calculation.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 10.0..=500.0;

/// Height in centimeters, guaranteed to lie within [`HEIGHT_RANGE_CM`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidHeight(f64);

impl ValidHeight {
    pub fn try_new(cm: f64) -> Option<Self> {
        HEIGHT_RANGE_CM.contains(&cm).then_some(Self(cm))
    }

    pub fn cm(&self) -> f64 {
        self.0
    }

    pub fn meters(&self) -> f64 {
        self.0 / 100.0
    }
}

/// Weight in kilograms, guaranteed to lie within [`WEIGHT_RANGE_KG`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidWeight(f64);

impl ValidWeight {
    pub fn try_new(kg: f64) -> Option<Self> {
        WEIGHT_RANGE_KG.contains(&kg).then_some(Self(kg))
    }

    pub fn kg(&self) -> f64 {
        self.0
    }
}

/// One set of inputs for a single calculation. Transient: callers own it
/// only for the duration of the calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub height: ValidHeight,
    pub weight: ValidWeight,
}

impl Measurement {
    pub fn new(height: ValidHeight, weight: ValidWeight) -> Self {
        Self { height, weight }
    }

    /// Body Mass Index, rounded to one decimal place. The height lower
    /// bound rules out division by zero.
    pub fn bmi(&self) -> f64 {
        let meters = self.height.meters();
        round_to_tenth(self.weight.kg() / (meters * meters))
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(height_cm: f64, weight_kg: f64) -> Measurement {
        Measurement::new(
            ValidHeight::try_new(height_cm).unwrap(),
            ValidWeight::try_new(weight_kg).unwrap(),
        )
    }

    #[test]
    fn bmi_matches_reference_values() {
        let test_data = [
            ((170.0, 70.0), 24.2),
            ((160.0, 45.0), 17.6),
            ((180.0, 100.0), 30.9),
            ((100.0, 25.0), 25.0),
            ((200.0, 98.0), 24.5),
        ];

        for (i, ((height, weight), expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                measurement(height, weight).bmi(),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn height_bounds_are_inclusive() {
        assert!(ValidHeight::try_new(50.0).is_some());
        assert!(ValidHeight::try_new(300.0).is_some());
        assert!(ValidHeight::try_new(49.99).is_none());
        assert!(ValidHeight::try_new(300.01).is_none());
    }

    #[test]
    fn weight_bounds_are_inclusive() {
        assert!(ValidWeight::try_new(10.0).is_some());
        assert!(ValidWeight::try_new(500.0).is_some());
        assert!(ValidWeight::try_new(9.99).is_none());
        assert!(ValidWeight::try_new(500.01).is_none());
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 90.3 kg at 190 cm is 25.01...; 88.445 kg at 200 cm is 22.11125.
        assert_eq!(measurement(190.0, 90.3).bmi(), 25.0);
        assert_eq!(measurement(200.0, 88.445).bmi(), 22.1);
        assert_eq!(round_to_tenth(24.25), 24.3);
        assert_eq!(round_to_tenth(24.24999), 24.2);
    }
}
