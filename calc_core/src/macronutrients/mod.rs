//! # Macronutrient Planner
//!
//! Turns a daily calorie target into protein, carbohydrate and fat grams and
//! a per-meal split.
//!
//! ## Pipeline
//!
//! 1. **Calories**: either computed (Harris-Benedict TDEE from body
//!    measurements and activity) or entered manually (800-5000 kcal).
//! 2. **Goal ratio**: table lookup by [`FitnessGoal`], or a validated custom
//!    ratio.
//! 3. **Diet adjustment**: [`DietPreference::adjust`], renormalized to 100 %.
//! 4. **Grams**: 4 kcal/g protein and carbs, 9 kcal/g fat.
//! 5. **Meals**: 25 % breakfast, 35 % lunch, 30 % dinner, snacks get the rest.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::macronutrients::{calculate, CalorieTarget, DietPreference, FitnessGoal, MacroInput};
//!
//! let input = MacroInput {
//!     calorie_target: Some(CalorieTarget::Manual { daily_calories: 2759.0 }),
//!     goal: Some(FitnessGoal::Maintain),
//!     custom_ratio: None,
//!     diet: DietPreference::Standard,
//! };
//!
//! let plan = calculate(&input).unwrap();
//! assert_eq!((plan.grams.protein, plan.grams.carbs, plan.grams.fats), (207, 276, 92));
//! ```

pub mod diet;
pub mod meals;
pub mod ratios;

pub use diet::{renormalize, DietPreference, MIN_MACRO_PERCENT};
pub use meals::{MacroCalories, MacroGrams, MealPlan};
pub use ratios::{ratio_for_goal, FitnessGoal, MacroRatio};

use serde::{Deserialize, Serialize};

use crate::calculations::daily_calories::daily_calories;
use crate::equations;
use crate::errors::CalcResult;
use crate::profile::{ActivityLevel, AnthropometricInput};
use crate::validation::{self, BodyLimits};

/// Accepted range for a manually entered calorie target (kcal/day)
pub const MANUAL_CALORIES_RANGE: (f64, f64) = (800.0, 5000.0);

/// How the daily calorie target is obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum CalorieTarget {
    /// Harris-Benedict BMR × activity multiplier
    Tdee {
        body: AnthropometricInput,
        #[serde(default)]
        activity_level: Option<ActivityLevel>,
    },
    /// A known target
    Manual { daily_calories: f64 },
}

/// Input parameters for the macro planner.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calorie_target": {
///     "method": "tdee",
///     "body": {
///       "weight": { "kg": 80.0 },
///       "height": { "cm": 180.0 },
///       "age": 30,
///       "gender": "male"
///     },
///     "activity_level": "moderate"
///   },
///   "goal": "maintain",
///   "diet": "standard"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroInput {
    #[serde(default)]
    pub calorie_target: Option<CalorieTarget>,
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    /// Required when `goal` is `custom`
    #[serde(default)]
    pub custom_ratio: Option<MacroRatio>,
    #[serde(default)]
    pub diet: DietPreference,
}

/// Results from the macro planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroResult {
    /// kcal/day the plan is built on
    pub daily_calories: f64,
    /// Harris-Benedict BMR, TDEE path only
    pub bmr: Option<f64>,
    pub goal: FitnessGoal,
    pub diet: DietPreference,
    /// Ratio before diet adjustment
    pub base_ratio: MacroRatio,
    /// Ratio actually used, sums to 100
    pub ratio: MacroRatio,
    pub grams: MacroGrams,
    pub calories: MacroCalories,
    pub meal_plan: MealPlan,
    pub recommendations: Vec<String>,
}

/// Resolved calorie target: (daily kcal, BMR if computed)
fn resolve_calories(target: &CalorieTarget) -> CalcResult<(f64, Option<f64>)> {
    match *target {
        CalorieTarget::Tdee {
            body,
            activity_level,
        } => {
            let m = body.resolve(&BodyLimits::MACRO_PLANNER)?;
            let activity = validation::require(activity_level, "activity_level")?;
            let bmr = equations::harris_benedict(m.weight_kg, m.height_cm, m.age, m.gender);
            let kcal = daily_calories(body.weight, body.height, m.age, m.gender, activity);
            Ok((kcal as f64, Some(bmr)))
        }
        CalorieTarget::Manual { daily_calories } => {
            let kcal = validation::in_range(
                "daily_calories",
                daily_calories,
                MANUAL_CALORIES_RANGE.0,
                MANUAL_CALORIES_RANGE.1,
            )?;
            Ok((kcal, None))
        }
    }
}

/// Build a macro plan.
pub fn calculate(input: &MacroInput) -> CalcResult<MacroResult> {
    let target = validation::require(input.calorie_target, "method")?;
    let goal = validation::require(input.goal, "goal")?;
    let base_ratio = ratio_for_goal(goal, input.custom_ratio)?;
    let (daily_calories, bmr) = resolve_calories(&target)?;

    let ratio = input.diet.adjust(base_ratio);
    let (grams, calories) = MacroGrams::from_ratio(daily_calories, &ratio);
    let meal_plan = MealPlan::distribute(&grams);

    let mut recommendations: Vec<String> =
        goal.recommendations().iter().map(|s| s.to_string()).collect();
    if let Some(extra) = input.diet.recommendation() {
        recommendations.push(extra.to_string());
    }

    tracing::debug!(
        daily_calories,
        ?bmr,
        goal = %goal,
        diet = %input.diet,
        ratio = %ratio,
        protein_g = grams.protein,
        carbs_g = grams.carbs,
        fats_g = grams.fats,
        "Macro plan built"
    );

    Ok(MacroResult {
        daily_calories,
        bmr,
        goal,
        diet: input.diet,
        base_ratio,
        ratio,
        grams,
        calories,
        meal_plan,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::profile::Gender;
    use crate::units::{Height, Weight};

    fn tdee_input(weight: Weight) -> MacroInput {
        MacroInput {
            calorie_target: Some(CalorieTarget::Tdee {
                body: AnthropometricInput {
                    weight,
                    height: Height::Cm(180.0),
                    age: 30,
                    gender: Some(Gender::Male),
                },
                activity_level: Some(ActivityLevel::Moderate),
            }),
            goal: Some(FitnessGoal::Maintain),
            custom_ratio: None,
            diet: DietPreference::Standard,
        }
    }

    #[test]
    fn test_tdee_path() {
        let plan = calculate(&tdee_input(Weight::Kg(80.0))).unwrap();
        assert!((plan.bmr.unwrap() - 1853.632).abs() < 1e-6);
        assert_eq!(plan.daily_calories, 2873.0);
        assert_eq!(plan.ratio, MacroRatio::new(30.0, 40.0, 30.0));
        assert_eq!(
            plan.grams,
            MacroGrams {
                protein: 215,
                carbs: 287,
                fats: 96
            }
        );
    }

    #[test]
    fn test_manual_path() {
        let input = MacroInput {
            calorie_target: Some(CalorieTarget::Manual {
                daily_calories: 2759.0,
            }),
            ..tdee_input(Weight::Kg(80.0))
        };
        let plan = calculate(&input).unwrap();
        assert_eq!(plan.bmr, None);
        assert_eq!(
            plan.grams,
            MacroGrams {
                protein: 207,
                carbs: 276,
                fats: 92
            }
        );
    }

    #[test]
    fn test_manual_bounds() {
        let input = MacroInput {
            calorie_target: Some(CalorieTarget::Manual {
                daily_calories: 700.0,
            }),
            ..tdee_input(Weight::Kg(80.0))
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("daily_calories"));
    }

    #[test]
    fn test_planner_weight_minimum() {
        let err = calculate(&tdee_input(Weight::Kg(25.0))).unwrap_err();
        assert_eq!(err.field(), Some("weight_kg"));
    }

    #[test]
    fn test_missing_selections() {
        let no_method = MacroInput {
            calorie_target: None,
            ..tdee_input(Weight::Kg(80.0))
        };
        assert_eq!(
            calculate(&no_method).unwrap_err(),
            CalcError::missing_selection("method")
        );

        let no_goal = MacroInput {
            goal: None,
            ..tdee_input(Weight::Kg(80.0))
        };
        assert_eq!(calculate(&no_goal).unwrap_err(), CalcError::missing_selection("goal"));
    }

    #[test]
    fn test_vegan_recommendation_added() {
        let input = MacroInput {
            diet: DietPreference::Vegan,
            ..tdee_input(Weight::Kg(80.0))
        };
        let plan = calculate(&input).unwrap();
        assert!(plan.recommendations.iter().any(|r| r.contains("B12")));
        assert!(plan.ratio.is_complete());
    }

    #[test]
    fn test_json_method_tag() {
        let json = r#"{
            "calorie_target": { "method": "manual", "daily_calories": 2000 },
            "goal": "ketogenic",
            "diet": "low-carb"
        }"#;
        let input: MacroInput = serde_json::from_str(json).unwrap();
        let plan = calculate(&input).unwrap();
        // keto 25/5/70 low-carb -> carbs 5, protein 35, fats 60
        assert_eq!(plan.ratio, MacroRatio::new(35.0, 5.0, 60.0));
        assert_eq!(plan.grams.fats, 133);
    }
}
