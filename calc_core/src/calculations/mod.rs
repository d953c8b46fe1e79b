//! # Health and Fitness Calculations
//!
//! This module contains all calculator types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The macro planner lives in [`crate::macronutrients`] because of its size,
//! but is dispatched from here like every other tool.
//!
//! ## Available Calculations
//!
//! - [`bmi`] - Body Mass Index and healthy weight range
//! - [`bmr`] - Mifflin-St Jeor BMR with activity table
//! - [`daily_calories`] - Harris-Benedict maintenance calories
//! - [`lean_body_mass`] - Boer lean body mass and body fat
//! - [`heart_rate`] - Heart rate training zones
//! - [`one_rep_max`] - One-rep-max estimate and rep-max table
//! - [`micronutrients`] - Micronutrient sufficiency score
//! - [`glycemic_load`] - Meal glycemic load
//! - [`workout_nutrition`] - Pre- and post-workout nutrition
//!
//! ## Running from JSON
//!
//! ```rust
//! use calc_core::calculations::{CalculationItem, CalculationOutput};
//!
//! let item: CalculationItem = serde_json::from_str(
//!     r#"{ "type": "heart-rate", "age": 30 }"#,
//! ).unwrap();
//!
//! match item.run().unwrap() {
//!     CalculationOutput::HeartRate(result) => assert_eq!(result.max_heart_rate, 190),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

pub mod bmi;
pub mod bmr;
pub mod daily_calories;
pub mod glycemic_load;
pub mod heart_rate;
pub mod lean_body_mass;
pub mod micronutrients;
pub mod one_rep_max;
pub mod workout_nutrition;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ToolCard};
use crate::errors::CalcResult;
use crate::macronutrients::{self, MacroInput, MacroResult};

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use bmr::{BmrInput, BmrResult};
pub use daily_calories::{DailyCaloriesInput, DailyCaloriesResult};
pub use glycemic_load::{GlycemicLoadInput, GlycemicLoadResult, Meal};
pub use heart_rate::{HeartRateInput, HeartRateResult};
pub use lean_body_mass::{LeanBodyMassInput, LeanBodyMassResult};
pub use micronutrients::{MicronutrientInput, MicronutrientResult};
pub use one_rep_max::{OneRepMaxInput, OneRepMaxResult};
pub use workout_nutrition::{
    PostWorkoutInput, PostWorkoutResult, PreWorkoutInput, PreWorkoutResult,
};

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Enum wrapper for all calculation types.
///
/// The `type` tag matches the tool's catalog slug, so any calculator can be
/// driven from a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CalculationItem {
    Bmi(BmiInput),
    Bmr(BmrInput),
    DailyCalories(DailyCaloriesInput),
    LeanBodyMass(LeanBodyMassInput),
    HeartRate(HeartRateInput),
    OneRepMax(OneRepMaxInput),
    Macros(MacroInput),
    Micronutrients(MicronutrientInput),
    GlycemicLoad(GlycemicLoadInput),
    PreWorkout(PreWorkoutInput),
    PostWorkout(PostWorkoutInput),
}

/// Result of running a [`CalculationItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CalculationOutput {
    Bmi(BmiResult),
    Bmr(BmrResult),
    DailyCalories(DailyCaloriesResult),
    LeanBodyMass(LeanBodyMassResult),
    HeartRate(HeartRateResult),
    OneRepMax(OneRepMaxResult),
    Macros(MacroResult),
    Micronutrients(MicronutrientResult),
    GlycemicLoad(GlycemicLoadResult),
    PreWorkout(PreWorkoutResult),
    PostWorkout(PostWorkoutResult),
}

impl CalculationItem {
    /// Get the calculation type as its catalog slug
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Bmi(_) => "bmi",
            CalculationItem::Bmr(_) => "bmr",
            CalculationItem::DailyCalories(_) => "daily-calories",
            CalculationItem::LeanBodyMass(_) => "lean-body-mass",
            CalculationItem::HeartRate(_) => "heart-rate",
            CalculationItem::OneRepMax(_) => "one-rep-max",
            CalculationItem::Macros(_) => "macros",
            CalculationItem::Micronutrients(_) => "micronutrients",
            CalculationItem::GlycemicLoad(_) => "glycemic-load",
            CalculationItem::PreWorkout(_) => "pre-workout",
            CalculationItem::PostWorkout(_) => "post-workout",
        }
    }

    /// Catalog card for this calculation
    pub fn tool(&self) -> Option<&'static ToolCard> {
        catalog::find_tool(self.calc_type())
    }

    /// Human-readable name of the tool
    pub fn label(&self) -> &'static str {
        self.tool().map_or(self.calc_type(), |t| t.title)
    }

    /// Run the calculation, recording a tool-usage event.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        tracing::info!(tool = self.calc_type(), "Tool used");

        let output = match self {
            CalculationItem::Bmi(i) => CalculationOutput::Bmi(bmi::calculate(i)?),
            CalculationItem::Bmr(i) => CalculationOutput::Bmr(bmr::calculate(i)?),
            CalculationItem::DailyCalories(i) => {
                CalculationOutput::DailyCalories(daily_calories::calculate(i)?)
            }
            CalculationItem::LeanBodyMass(i) => {
                CalculationOutput::LeanBodyMass(lean_body_mass::calculate(i)?)
            }
            CalculationItem::HeartRate(i) => CalculationOutput::HeartRate(heart_rate::calculate(i)?),
            CalculationItem::OneRepMax(i) => CalculationOutput::OneRepMax(one_rep_max::calculate(i)?),
            CalculationItem::Macros(i) => CalculationOutput::Macros(macronutrients::calculate(i)?),
            CalculationItem::Micronutrients(i) => {
                CalculationOutput::Micronutrients(micronutrients::calculate(i)?)
            }
            CalculationItem::GlycemicLoad(i) => {
                CalculationOutput::GlycemicLoad(glycemic_load::calculate(i)?)
            }
            CalculationItem::PreWorkout(i) => {
                CalculationOutput::PreWorkout(workout_nutrition::pre_workout(i)?)
            }
            CalculationItem::PostWorkout(i) => {
                CalculationOutput::PostWorkout(workout_nutrition::post_workout(i)?)
            }
        };
        Ok(output)
    }

    /// Parse an item from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(30.655, 1), 30.7);
        assert_eq!(round_to(23.25, 0), 23.0);
        assert_eq!(round_to(-0.05, 1), -0.1);
        assert_eq!(round_to(133.333, 1), 133.3);
    }

    #[test]
    fn test_every_item_has_a_catalog_card() {
        let items = [
            r#"{"type":"bmi","weight":{"kg":70.0},"height":{"cm":175.0}}"#,
            r#"{"type":"heart-rate","age":40}"#,
            r#"{"type":"one-rep-max","weight":100.0,"reps":5,"formula":"epley"}"#,
            r#"{"type":"glycemic-load","items":[{"food":"white-rice","amount_g":100.0}]}"#,
            r#"{"type":"pre-workout","body_weight":{"kg":70.0},"workout_type":"hiit","intensity":"low"}"#,
        ];
        for json in items {
            let item = CalculationItem::from_json(json).unwrap();
            assert!(item.tool().is_some(), "{}", item.calc_type());
            assert!(item.run().is_ok(), "{}", item.calc_type());
        }
    }

    #[test]
    fn test_label_is_card_title() {
        let item = CalculationItem::HeartRate(HeartRateInput { age: 30 });
        assert_eq!(item.label(), "Heart Rate Zone Calculator");
    }

    #[test]
    fn test_malformed_json() {
        let err = CalculationItem::from_json(r#"{"type":"tarot"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_output_is_tagged() {
        let out = CalculationItem::HeartRate(HeartRateInput { age: 30 })
            .run()
            .unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["type"], "heart-rate");
        assert_eq!(json["max_heart_rate"], 190);
    }
}
