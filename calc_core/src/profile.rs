//! # Body Profile
//!
//! The anthropometric inputs shared by most calculators: weight, height, age,
//! gender and habitual activity level.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::profile::{AnthropometricInput, Gender};
//! use calc_core::units::{Height, Weight};
//! use calc_core::validation::BodyLimits;
//!
//! let input = AnthropometricInput {
//!     weight: Weight::Lb(176.0),
//!     height: Height::FeetInches { feet: 5.0, inches: 11.0 },
//!     age: 30,
//!     gender: Some(Gender::Male),
//! };
//!
//! let metrics = input.resolve(&BodyLimits::STANDARD).unwrap();
//! assert!((metrics.height_cm - 180.34).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{Height, Weight};
use crate::validation::{self, BodyLimits};

/// Biological sex used by the sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All variants for UI selection
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Habitual activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Very active",
            ActivityLevel::VeryActive => "Extra active",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Some(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "veryactive" | "extraactive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Weight, height, age and gender as entered.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": { "kg": 80.0 },
///   "height": { "cm": 180.0 },
///   "age": 30,
///   "gender": "male"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    /// Body weight with its unit
    pub weight: Weight,

    /// Height with its unit
    pub height: Height,

    /// Age in whole years
    pub age: u32,

    /// Gender; `None` is rejected wherever a formula needs it
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Validated, metric body measurements handed to the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

impl AnthropometricInput {
    /// Validate every field against `limits` and convert to metric.
    ///
    /// Checks run in form order (gender, age, weight, height) so the first
    /// reported problem matches what the user sees first.
    pub fn resolve(&self, limits: &BodyLimits) -> CalcResult<BodyMetrics> {
        let gender = validation::require(self.gender, "gender")?;
        let age = validation::age(self.age, limits)?;
        let weight_kg = validation::weight(self.weight, limits)?.0;
        let height_cm = validation::height(self.height, limits)?.0;
        Ok(BodyMetrics {
            weight_kg,
            height_cm,
            age,
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn sample() -> AnthropometricInput {
        AnthropometricInput {
            weight: Weight::Kg(80.0),
            height: Height::Cm(180.0),
            age: 30,
            gender: Some(Gender::Male),
        }
    }

    #[test]
    fn test_resolve_metric() {
        let m = sample().resolve(&BodyLimits::STANDARD).unwrap();
        assert_eq!(m.weight_kg, 80.0);
        assert_eq!(m.height_cm, 180.0);
        assert_eq!(m.gender, Gender::Male);
    }

    #[test]
    fn test_missing_gender() {
        let mut input = sample();
        input.gender = None;
        assert_eq!(
            input.resolve(&BodyLimits::STANDARD).unwrap_err(),
            CalcError::missing_selection("gender")
        );
    }

    #[test]
    fn test_activity_multipliers() {
        let multipliers: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.multiplier()).collect();
        assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_activity_serialization() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"veryActive\"");
        assert_eq!(
            ActivityLevel::from_str_flexible("very-active"),
            Some(ActivityLevel::VeryActive)
        );
    }

    #[test]
    fn test_input_deserializes_without_gender() {
        let json = r#"{"weight":{"lb":150.0},"height":{"decimal_feet":5.5},"age":40}"#;
        let input: AnthropometricInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.gender, None);
    }
}
