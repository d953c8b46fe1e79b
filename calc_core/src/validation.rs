//! # Input Validation
//!
//! Range and selection checks shared by every calculator. A failed check
//! returns a [`CalcError`] naming the field; nothing is computed.
//!
//! Bounds differ between calculators (the macro planner accepts older users
//! and taller heights but a higher minimum weight), so they are grouped into
//! [`BodyLimits`] profiles rather than hard-coded per check.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Height, Kilograms, Weight};

/// Bounds applied to anthropometric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLimits {
    /// Inclusive age range in years
    pub age_years: (u32, u32),
    /// Minimum weight in kg (inclusive); `None` means "greater than zero"
    pub min_weight_kg: Option<f64>,
    /// Inclusive height range when entered in centimeters
    pub height_cm: (f64, f64),
    /// Inclusive range of the feet field when entered as feet + inches
    pub height_feet: (f64, f64),
}

impl BodyLimits {
    /// Limits used by the BMI, BMR, calorie and body-composition calculators
    pub const STANDARD: BodyLimits = BodyLimits {
        age_years: (15, 80),
        min_weight_kg: None,
        height_cm: (50.0, 250.0),
        height_feet: (1.0, 8.0),
    };

    /// Limits used by the TDEE path of the macro planner
    pub const MACRO_PLANNER: BodyLimits = BodyLimits {
        age_years: (15, 100),
        min_weight_kg: Some(30.0),
        height_cm: (50.0, 250.0),
        height_feet: (1.0, 9.0),
    };
}

impl Default for BodyLimits {
    fn default() -> Self {
        BodyLimits::STANDARD
    }
}

/// Inclusive range of the inches field of a feet + inches height
pub const INCHES_RANGE: (f64, f64) = (0.0, 11.0);

/// Require that an optional selection was made.
pub fn require<T: Copy>(value: Option<T>, field: &str) -> CalcResult<T> {
    value.ok_or_else(|| CalcError::missing_selection(field))
}

/// Require `min <= value <= max`.
pub fn in_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<f64> {
    if value.is_nan() || value < min || value > max {
        return Err(CalcError::out_of_range(field, value, min, max));
    }
    Ok(value)
}

/// Require `value > 0`.
pub fn positive(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(CalcError::not_positive(field, value));
    }
    Ok(value)
}

/// Require `value >= 0` (zero allowed, used for optional intakes).
pub fn non_negative(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(CalcError::below_minimum(field, value, 0.0));
    }
    Ok(value)
}

/// Validate an age against the limits.
pub fn age(age: u32, limits: &BodyLimits) -> CalcResult<u32> {
    let (min, max) = limits.age_years;
    if age < min || age > max {
        return Err(CalcError::out_of_range("age", age as f64, min as f64, max as f64));
    }
    Ok(age)
}

/// Validate a weight and convert it to kilograms.
pub fn weight(weight: Weight, limits: &BodyLimits) -> CalcResult<Kilograms> {
    positive("weight", weight.value())?;
    let kg = weight.to_kg();
    if let Some(min) = limits.min_weight_kg {
        if kg.0 < min {
            return Err(CalcError::below_minimum("weight_kg", kg.0, min));
        }
    }
    Ok(kg)
}

/// Validate a height in whichever unit it was entered and convert to centimeters.
pub fn height(height: Height, limits: &BodyLimits) -> CalcResult<Centimeters> {
    match height {
        Height::Cm(cm) => {
            in_range("height_cm", cm, limits.height_cm.0, limits.height_cm.1)?;
        }
        Height::FeetInches { feet, inches } => {
            in_range("height_feet", feet, limits.height_feet.0, limits.height_feet.1)?;
            in_range("height_inches", inches, INCHES_RANGE.0, INCHES_RANGE.1)?;
        }
        Height::DecimalFeet(ft) => {
            let max = limits.height_feet.1 + INCHES_RANGE.1 / 12.0;
            in_range("height_feet", ft, limits.height_feet.0, max)?;
        }
    }
    Ok(height.to_cm())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCategory;

    #[test]
    fn test_age_bounds_are_inclusive() {
        assert!(age(15, &BodyLimits::STANDARD).is_ok());
        assert!(age(80, &BodyLimits::STANDARD).is_ok());
        assert!(age(81, &BodyLimits::STANDARD).is_err());
        assert!(age(95, &BodyLimits::MACRO_PLANNER).is_ok());
        assert!(age(14, &BodyLimits::MACRO_PLANNER).is_err());
    }

    #[test]
    fn test_weight_minimums() {
        assert!(weight(Weight::Kg(0.0), &BodyLimits::STANDARD).is_err());
        assert!(weight(Weight::Kg(20.0), &BodyLimits::STANDARD).is_ok());
        let err = weight(Weight::Kg(20.0), &BodyLimits::MACRO_PLANNER).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::OutOfRange);
        // 70 lb is about 31.8 kg
        assert!(weight(Weight::Lb(70.0), &BodyLimits::MACRO_PLANNER).is_ok());
    }

    #[test]
    fn test_height_limits_per_unit() {
        assert!(height(Height::Cm(49.0), &BodyLimits::STANDARD).is_err());
        assert!(height(Height::Cm(250.0), &BodyLimits::STANDARD).is_ok());

        let tall = Height::FeetInches { feet: 9.0, inches: 0.0 };
        assert!(height(tall, &BodyLimits::STANDARD).is_err());
        assert!(height(tall, &BodyLimits::MACRO_PLANNER).is_ok());

        let bad_inches = Height::FeetInches { feet: 5.0, inches: 12.0 };
        let err = height(bad_inches, &BodyLimits::STANDARD).unwrap_err();
        assert_eq!(err.field(), Some("height_inches"));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(positive("weight", f64::NAN).is_err());
        assert!(in_range("reps", f64::NAN, 1.0, 15.0).is_err());
    }

    #[test]
    fn test_require_selection() {
        assert_eq!(require(Some(3), "x").unwrap(), 3);
        let err = require::<u8>(None, "gender").unwrap_err();
        assert_eq!(err, CalcError::missing_selection("gender"));
    }
}
