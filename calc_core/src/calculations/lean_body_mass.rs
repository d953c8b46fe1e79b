//! # Lean Body Mass Calculation (Boer)
//!
//! Lean body mass, fat mass and body fat percentage from the Boer (1984)
//! equations. Results are reported in kilograms and in the input weight unit.

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::equations;
use crate::errors::CalcResult;
use crate::profile::Gender;
use crate::units::{Height, Kilograms, Weight, WeightUnit};
use crate::validation::{self, BodyLimits};

/// Input parameters for the lean body mass calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": { "kg": 80.0 },
///   "height": { "cm": 180.0 },
///   "gender": "male"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeanBodyMassInput {
    pub weight: Weight,
    pub height: Height,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Results from the lean body mass calculator. All values 1 decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeanBodyMassResult {
    pub lean_body_mass_kg: f64,
    pub fat_mass_kg: f64,
    pub body_fat_percent: f64,
    /// Lean mass in the input weight unit
    pub lean_body_mass: f64,
    /// Fat mass in the input weight unit
    pub fat_mass: f64,
    pub weight_unit: WeightUnit,
}

/// Calculate lean body mass and body fat percentage.
///
/// Very light, tall inputs can produce a lean mass above total weight; the
/// formula result is reported unchanged (negative body fat) rather than
/// clamped.
pub fn calculate(input: &LeanBodyMassInput) -> CalcResult<LeanBodyMassResult> {
    let limits = BodyLimits::STANDARD;
    let gender = validation::require(input.gender, "gender")?;
    let weight_kg = validation::weight(input.weight, &limits)?.0;
    let height_cm = validation::height(input.height, &limits)?.0;

    let lbm = equations::boer_lean_body_mass(weight_kg, height_cm, gender);
    let fat_mass = weight_kg - lbm;
    let body_fat = equations::body_fat_percent(weight_kg, lbm);

    tracing::debug!(lbm, body_fat, gender = %gender, "Boer lean body mass calculated");

    Ok(LeanBodyMassResult {
        lean_body_mass_kg: round_to(lbm, 1),
        fat_mass_kg: round_to(fat_mass, 1),
        body_fat_percent: round_to(body_fat, 1),
        lean_body_mass: round_to(input.weight.in_input_unit(Kilograms(lbm)), 1),
        fat_mass: round_to(input.weight.in_input_unit(Kilograms(fat_mass)), 1),
        weight_unit: input.weight.unit(),
    })
}
