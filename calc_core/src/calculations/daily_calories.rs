//! # Daily Calorie Calculation (Harris-Benedict)
//!
//! Maintenance calories from the revised Harris-Benedict BMR and an activity
//! multiplier. The same conversion-aware function feeds the TDEE path of the
//! macro planner.

use serde::{Deserialize, Serialize};

use crate::equations;
use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, AnthropometricInput, Gender};
use crate::units::{Height, Weight};
use crate::validation::{self, BodyLimits};

/// Daily deficit/surplus for roughly 0.5 kg (1 lb) change per week
pub const WEEKLY_HALF_KG_DELTA_KCAL: u32 = 500;

/// Daily calories from raw measurements in any supported unit.
///
/// Converts weight and height to metric, applies Harris-Benedict and the
/// activity multiplier, and rounds to whole kcal. Performs no validation.
pub fn daily_calories(
    weight: Weight,
    height: Height,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
) -> u32 {
    let bmr = equations::harris_benedict(weight.to_kg().0, height.to_cm().0, age, gender);
    equations::tdee(bmr, activity_level.multiplier())
}

/// Input parameters for the daily calorie calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "body": {
///     "weight": { "lb": 150.0 },
///     "height": { "feet_inches": { "feet": 5.0, "inches": 6.0 } },
///     "age": 35,
///     "gender": "female"
///   },
///   "activity_level": "light"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCaloriesInput {
    pub body: AnthropometricInput,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
}

/// Results from the daily calorie calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCaloriesResult {
    /// Unrounded Harris-Benedict BMR (kcal/day)
    pub bmr: f64,
    /// Maintenance calories (kcal/day)
    pub maintenance: u32,
    /// Target for ~0.5 kg/week loss
    pub weight_loss: u32,
    /// Target for ~0.5 kg/week gain
    pub weight_gain: u32,
}

/// Calculate daily calorie needs.
pub fn calculate(input: &DailyCaloriesInput) -> CalcResult<DailyCaloriesResult> {
    let m = input.body.resolve(&BodyLimits::STANDARD)?;
    let activity_level = validation::require(input.activity_level, "activity_level")?;

    let bmr = equations::harris_benedict(m.weight_kg, m.height_cm, m.age, m.gender);
    let maintenance = daily_calories(
        input.body.weight,
        input.body.height,
        m.age,
        m.gender,
        activity_level,
    );

    tracing::debug!(bmr, maintenance, activity = %activity_level, "Harris-Benedict calories calculated");

    Ok(DailyCaloriesResult {
        bmr,
        maintenance,
        weight_loss: maintenance.saturating_sub(WEEKLY_HALF_KG_DELTA_KCAL),
        weight_gain: maintenance.saturating_add(WEEKLY_HALF_KG_DELTA_KCAL),
    })
}
