//! Goal-based macronutrient ratios

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation;

/// Bounds for custom percentages: (min, max)
pub const CUSTOM_PROTEIN_RANGE: (f64, f64) = (5.0, 50.0);
pub const CUSTOM_CARBS_RANGE: (f64, f64) = (5.0, 70.0);
pub const CUSTOM_FATS_RANGE: (f64, f64) = (5.0, 60.0);

/// Share of daily calories per macronutrient, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroRatio {
    pub const fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            protein,
            carbs,
            fats,
        }
    }

    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Exact equality with 100; no tolerance
    pub fn is_complete(&self) -> bool {
        self.sum() == 100.0
    }

    /// Check a user-entered ratio against the custom bounds.
    pub fn validate_custom(&self) -> CalcResult<()> {
        validation::in_range(
            "protein_percent",
            self.protein,
            CUSTOM_PROTEIN_RANGE.0,
            CUSTOM_PROTEIN_RANGE.1,
        )?;
        validation::in_range(
            "carbs_percent",
            self.carbs,
            CUSTOM_CARBS_RANGE.0,
            CUSTOM_CARBS_RANGE.1,
        )?;
        validation::in_range(
            "fats_percent",
            self.fats,
            CUSTOM_FATS_RANGE.0,
            CUSTOM_FATS_RANGE.1,
        )?;
        if !self.is_complete() {
            return Err(CalcError::invariant_violation(
                "macro_ratio_sum",
                format!(
                    "protein + carbs + fats must equal 100% (got {}%)",
                    self.sum()
                ),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for MacroRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.protein, self.carbs, self.fats)
    }
}

/// Training goal driving the base ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    LoseWeight,
    Maintain,
    GainMuscle,
    GainStrength,
    Endurance,
    Ketogenic,
    /// User-supplied ratio
    Custom,
    /// Unknown goal key; treated as [`FitnessGoal::Maintain`]
    #[serde(other)]
    Unrecognized,
}

impl FitnessGoal {
    /// Goals with a table ratio
    pub const PRESETS: [FitnessGoal; 6] = [
        FitnessGoal::LoseWeight,
        FitnessGoal::Maintain,
        FitnessGoal::GainMuscle,
        FitnessGoal::GainStrength,
        FitnessGoal::Endurance,
        FitnessGoal::Ketogenic,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Lose weight",
            FitnessGoal::Maintain => "Maintain",
            FitnessGoal::GainMuscle => "Gain muscle",
            FitnessGoal::GainStrength => "Gain strength",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Ketogenic => "Ketogenic",
            FitnessGoal::Custom => "Custom",
            FitnessGoal::Unrecognized => "Unrecognized",
        }
    }

    /// Table ratio for this goal.
    ///
    /// `Custom` has no table entry and, like `Unrecognized`, reads as the
    /// maintenance ratio here; callers resolve custom ratios separately.
    pub fn base_ratio(&self) -> MacroRatio {
        match self {
            FitnessGoal::LoseWeight => MacroRatio::new(40.0, 30.0, 30.0),
            FitnessGoal::GainMuscle => MacroRatio::new(30.0, 45.0, 25.0),
            FitnessGoal::GainStrength => MacroRatio::new(35.0, 40.0, 25.0),
            FitnessGoal::Endurance => MacroRatio::new(25.0, 55.0, 20.0),
            FitnessGoal::Ketogenic => MacroRatio::new(25.0, 5.0, 70.0),
            FitnessGoal::Maintain | FitnessGoal::Custom | FitnessGoal::Unrecognized => {
                MacroRatio::new(30.0, 40.0, 30.0)
            }
        }
    }

    /// Short advice shown with the plan
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            FitnessGoal::LoseWeight => &[
                "Keep protein high to preserve lean mass while in a deficit.",
                "Favor high-fiber vegetables to stay full on fewer calories.",
                "Aim for a loss of 0.5-1 kg per week.",
            ],
            FitnessGoal::GainMuscle => &[
                "Spread protein evenly across meals, about 20-40 g each.",
                "Eat carbohydrates around training to fuel progressive overload.",
                "Aim for a slow gain of 0.25-0.5 kg per week.",
            ],
            FitnessGoal::GainStrength => &[
                "Prioritize protein and total calories on heavy training days.",
                "Include carbohydrates before lifting sessions.",
            ],
            FitnessGoal::Endurance => &[
                "Carbohydrates are your main fuel; time them around long sessions.",
                "Replace fluids and electrolytes during sessions over an hour.",
            ],
            FitnessGoal::Ketogenic => &[
                "Keep net carbohydrates low to stay in ketosis.",
                "Choose unsaturated fats from nuts, seeds, olive oil and fish.",
                "Watch sodium and magnesium intake during adaptation.",
            ],
            FitnessGoal::Custom => &[
                "Review your custom split every few weeks against your progress.",
            ],
            FitnessGoal::Maintain | FitnessGoal::Unrecognized => &[
                "Keep a balanced plate with protein, vegetables and whole grains.",
                "Monitor body weight weekly and adjust calories as needed.",
            ],
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolve the pre-diet ratio for a goal.
///
/// `custom` is required and validated for [`FitnessGoal::Custom`], ignored
/// otherwise.
pub fn ratio_for_goal(goal: FitnessGoal, custom: Option<MacroRatio>) -> CalcResult<MacroRatio> {
    match goal {
        FitnessGoal::Custom => {
            let ratio = validation::require(custom, "custom_ratio")?;
            ratio.validate_custom()?;
            Ok(ratio)
        }
        FitnessGoal::Unrecognized => {
            tracing::warn!("Unrecognized fitness goal; using maintenance ratio");
            Ok(goal.base_ratio())
        }
        _ => Ok(goal.base_ratio()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_sum_to_100() {
        for goal in FitnessGoal::PRESETS {
            assert!(goal.base_ratio().is_complete(), "{}", goal);
        }
    }

    #[test]
    fn test_unrecognized_goal_is_maintain() {
        let goal: FitnessGoal = serde_json::from_str("\"bulk\"").unwrap();
        assert_eq!(goal, FitnessGoal::Unrecognized);
        assert_eq!(
            ratio_for_goal(goal, None).unwrap(),
            FitnessGoal::Maintain.base_ratio()
        );
    }

    #[test]
    fn test_custom_ratio() {
        let ratio = MacroRatio::new(35.0, 35.0, 30.0);
        assert_eq!(ratio_for_goal(FitnessGoal::Custom, Some(ratio)).unwrap(), ratio);
        assert_eq!(
            ratio_for_goal(FitnessGoal::Custom, None).unwrap_err(),
            CalcError::missing_selection("custom_ratio")
        );
    }

    #[test]
    fn test_custom_ratio_must_sum_exactly() {
        let err = MacroRatio::new(33.3, 33.3, 33.3).validate_custom().unwrap_err();
        assert_eq!(err.error_code(), "INVARIANT_VIOLATION");

        let err = MacroRatio::new(30.0, 40.0, 31.0).validate_custom().unwrap_err();
        assert_eq!(err.error_code(), "INVARIANT_VIOLATION");
    }

    #[test]
    fn test_custom_bounds() {
        let err = MacroRatio::new(55.0, 25.0, 20.0).validate_custom().unwrap_err();
        assert_eq!(err.field(), Some("protein_percent"));
        let err = MacroRatio::new(20.0, 75.0, 5.0).validate_custom().unwrap_err();
        assert_eq!(err.field(), Some("carbs_percent"));
        let err = MacroRatio::new(5.0, 5.0, 90.0).validate_custom().unwrap_err();
        assert_eq!(err.field(), Some("fats_percent"));
    }

    #[test]
    fn test_goal_keys() {
        let goal: FitnessGoal = serde_json::from_str("\"gain-strength\"").unwrap();
        assert_eq!(goal, FitnessGoal::GainStrength);
    }
}
