//! # BMI Calculation
//!
//! Body Mass Index with WHO adult categories and the healthy weight range for
//! the given height.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bmi::{calculate, BmiCategory, BmiInput};
//! use calc_core::units::{Height, Weight};
//!
//! let input = BmiInput {
//!     weight: Weight::Kg(70.0),
//!     height: Height::Cm(175.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.bmi, 22.9);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::equations;
use crate::errors::CalcResult;
use crate::units::{Height, Kilograms, Meters, Weight, WeightUnit};
use crate::validation::{self, BodyLimits};

/// Lower bound of the normal BMI band
pub const HEALTHY_BMI_MIN: f64 = 18.5;
/// Upper end of the normal band used for the healthy weight range
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Input parameters for a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": { "lb": 154.0 },
///   "height": { "feet_inches": { "feet": 5.0, "inches": 9.0 } }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight: Weight,
    pub height: Height,
}

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an unrounded BMI. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    fn recommendation(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Your BMI is below the healthy range. Consider a nutrient-dense calorie surplus \
                 and speak with a healthcare provider."
            }
            BmiCategory::NormalWeight => {
                "Your BMI is in the healthy range. Keep up balanced eating and regular activity."
            }
            BmiCategory::Overweight => {
                "Your BMI is above the healthy range. A modest calorie deficit and more daily \
                 movement can help."
            }
            BmiCategory::Obese => {
                "Your BMI is in the obese range. A healthcare provider can help you build a \
                 safe, sustainable plan."
            }
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Results from a BMI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to 1 decimal
    pub bmi: f64,

    /// Category from the unrounded BMI
    pub category: BmiCategory,

    /// Lowest healthy weight at this height, in the input weight unit (1 decimal)
    pub healthy_weight_min: f64,

    /// Highest healthy weight at this height, in the input weight unit (1 decimal)
    pub healthy_weight_max: f64,

    /// Unit of the healthy weight range
    pub weight_unit: WeightUnit,

    pub recommendation: String,
}

/// Calculate BMI.
///
/// The category is taken from the unrounded value, so 24.96 displays as
/// 25.0 but is still "Normal weight".
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    let limits = BodyLimits::STANDARD;
    let weight_kg = validation::weight(input.weight, &limits)?;
    let height_m = Meters::from(validation::height(input.height, &limits)?).0;

    let bmi = equations::bmi(weight_kg.0, height_m);
    let category = BmiCategory::from_bmi(bmi);

    let healthy_min = Kilograms(equations::weight_for_bmi(HEALTHY_BMI_MIN, height_m));
    let healthy_max = Kilograms(equations::weight_for_bmi(HEALTHY_BMI_MAX, height_m));

    tracing::debug!(bmi, category = %category, "BMI calculated");

    Ok(BmiResult {
        bmi: round_to(bmi, 1),
        category,
        healthy_weight_min: round_to(input.weight.in_input_unit(healthy_min), 1),
        healthy_weight_max: round_to(input.weight.in_input_unit(healthy_max), 1),
        weight_unit: input.weight.unit(),
        recommendation: category.recommendation().to_string(),
    })
}
