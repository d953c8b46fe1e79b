//! # Unit Types
//!
//! Type-safe wrappers for body measurements. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Metric Internally
//!
//! Every formula in calc_core works on metric values:
//! - Mass: kilograms (kg)
//! - Length: centimeters (cm), meters (m) for BMI
//!
//! Pounds, feet and inches are accepted at the input boundary through the
//! [`Weight`] and [`Height`] enums and converted before any formula runs.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Height, Weight};
//!
//! let weight = Weight::Lb(176.0);
//! assert!((weight.to_kg().0 - 79.832).abs() < 0.001);
//!
//! let height = Height::FeetInches { feet: 5.0, inches: 11.0 };
//! assert!((height.to_cm().0 - 180.34).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Kilograms per avoirdupois pound, as used by every weight input
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb_to_kg(lb.0))
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KG_PER_LB)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Centimeters {
    fn from(ft: Feet) -> Self {
        Centimeters(feet_inches_to_cm(ft.0, 0.0))
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert pounds to kilograms.
#[inline]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

/// Convert a feet + inches height to centimeters.
///
/// ```text
/// cm = (feet × 12 + inches) × 2.54
/// ```
///
/// This is the one height conversion used everywhere. The expanded form
/// `feet × 30.48 + inches × 2.54` is the same polynomial.
#[inline]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet * 12.0 + inches) * CM_PER_INCH
}

// ============================================================================
// Input Measurements
// ============================================================================

/// Unit a weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    /// Short label for display ("kg", "lb")
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

/// A body weight as entered by the user.
///
/// ## JSON
///
/// ```json
/// { "kg": 80.0 }
/// { "lb": 176.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Kilograms
    Kg(f64),
    /// Pounds
    Lb(f64),
}

impl Weight {
    /// Convert to kilograms
    pub fn to_kg(self) -> Kilograms {
        match self {
            Weight::Kg(kg) => Kilograms(kg),
            Weight::Lb(lb) => Pounds(lb).into(),
        }
    }

    /// The raw number as entered
    pub fn value(self) -> f64 {
        match self {
            Weight::Kg(v) | Weight::Lb(v) => v,
        }
    }

    /// The unit the value was entered in
    pub fn unit(self) -> WeightUnit {
        match self {
            Weight::Kg(_) => WeightUnit::Kg,
            Weight::Lb(_) => WeightUnit::Lb,
        }
    }

    /// Express a kilogram quantity back in this weight's input unit
    pub fn in_input_unit(self, kg: Kilograms) -> f64 {
        match self {
            Weight::Kg(_) => kg.0,
            Weight::Lb(_) => Pounds::from(kg).0,
        }
    }
}

/// A body height as entered by the user.
///
/// ## JSON
///
/// ```json
/// { "cm": 180.0 }
/// { "feet_inches": { "feet": 5.0, "inches": 11.0 } }
/// { "decimal_feet": 5.9 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    /// Centimeters
    Cm(f64),
    /// Separate feet and inches fields
    FeetInches { feet: f64, inches: f64 },
    /// Feet with the inches folded in (`feet + inches / 12`)
    DecimalFeet(f64),
}

impl Height {
    /// Convert to centimeters
    pub fn to_cm(self) -> Centimeters {
        match self {
            Height::Cm(cm) => Centimeters(cm),
            Height::FeetInches { feet, inches } => Centimeters(feet_inches_to_cm(feet, inches)),
            Height::DecimalFeet(ft) => Feet(ft).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lb_to_kg() {
        let kg: Kilograms = Pounds(100.0).into();
        assert!((kg.0 - 45.3592).abs() < 1e-9);
    }

    #[test]
    fn test_both_height_derivations_agree() {
        for feet in 1..=8 {
            for inches in 0..=11 {
                let (f, i) = (feet as f64, inches as f64);
                let expanded = f * 30.48 + i * 2.54;
                assert!((feet_inches_to_cm(f, i) - expanded).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_decimal_feet_matches_feet_inches() {
        let split = Height::FeetInches { feet: 5.0, inches: 6.0 }.to_cm();
        let decimal = Height::DecimalFeet(5.5).to_cm();
        assert!((split.0 - decimal.0).abs() < 1e-9);
        assert!((split.0 - 167.64).abs() < 1e-9);
    }

    #[test]
    fn test_weight_round_trip_to_input_unit() {
        let w = Weight::Lb(150.0);
        assert!((w.in_input_unit(w.to_kg()) - 150.0).abs() < 1e-9);
        assert_eq!(w.unit().label(), "lb");
    }

    #[test]
    fn test_centimeters_to_meters() {
        let m: Meters = Height::Cm(180.0).to_cm().into();
        assert!((m.0 - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(72.5);
        assert_eq!(serde_json::to_string(&kg).unwrap(), "72.5");

        let h: Height = serde_json::from_str(r#"{"feet_inches":{"feet":6.0,"inches":0.0}}"#).unwrap();
        assert!((h.to_cm().0 - 182.88).abs() < 1e-9);

        let w: Weight = serde_json::from_str(r#"{"kg":80.0}"#).unwrap();
        assert_eq!(w, Weight::Kg(80.0));
    }
}
