//! # BMR Calculation (Mifflin-St Jeor)
//!
//! Basal metabolic rate from the Mifflin-St Jeor equation, with the
//! maintenance-calorie table for every activity level.
//!
//! The daily-calorie calculator uses Harris-Benedict instead; see
//! [`super::daily_calories`]. The two are intentionally separate.

use serde::{Deserialize, Serialize};

use crate::equations;
use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, AnthropometricInput};
use crate::validation::BodyLimits;

/// Input parameters for a BMR calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "body": {
///     "weight": { "kg": 80.0 },
///     "height": { "cm": 180.0 },
///     "age": 30,
///     "gender": "male"
///   },
///   "activity_level": "moderate"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrInput {
    pub body: AnthropometricInput,

    /// Optional; when set, the result highlights that level's TDEE
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
}

/// Maintenance calories at one activity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityCalories {
    pub activity_level: ActivityLevel,
    pub multiplier: f64,
    /// Rounded TDEE (kcal/day)
    pub calories: u32,
}

/// Results from a BMR calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// Unrounded BMR (kcal/day)
    pub bmr: f64,

    /// TDEE at the selected activity level, if one was given
    pub tdee: Option<u32>,

    /// TDEE at every activity level, least active first
    pub activity_table: Vec<ActivityCalories>,
}

impl BmrResult {
    /// BMR rounded for display
    pub fn bmr_rounded(&self) -> u32 {
        self.bmr.round().max(0.0) as u32
    }
}

/// Build the TDEE table for a BMR value.
pub fn activity_table(bmr: f64) -> Vec<ActivityCalories> {
    ActivityLevel::ALL
        .iter()
        .map(|&level| ActivityCalories {
            activity_level: level,
            multiplier: level.multiplier(),
            calories: equations::tdee(bmr, level.multiplier()),
        })
        .collect()
}

/// Calculate Mifflin-St Jeor BMR.
pub fn calculate(input: &BmrInput) -> CalcResult<BmrResult> {
    let m = input.body.resolve(&BodyLimits::STANDARD)?;
    let bmr = equations::mifflin_st_jeor(m.weight_kg, m.height_cm, m.age, m.gender);
    let tdee = input
        .activity_level
        .map(|level| equations::tdee(bmr, level.multiplier()));

    tracing::debug!(bmr, ?tdee, gender = %m.gender, "Mifflin-St Jeor BMR calculated");

    Ok(BmrResult {
        bmr,
        tdee,
        activity_table: activity_table(bmr),
    })
}
