//! Diet-preference adjustment of macro ratios
//!
//! Each preference rewrites two of the three percentages and derives the
//! third from the remainder, never below [`MIN_MACRO_PERCENT`]. Because of
//! that floor the result can overshoot 100; [`renormalize`] then rescales
//! protein and carbs and lets fats absorb the rounding.

use serde::{Deserialize, Serialize};

use super::ratios::MacroRatio;

/// Floor applied to the derived macro
pub const MIN_MACRO_PERCENT: f64 = 5.0;

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    #[default]
    Standard,
    LowCarb,
    HighCarb,
    LowFat,
    HighFat,
    Vegetarian,
    Vegan,
}

impl DietPreference {
    pub const ALL: [DietPreference; 7] = [
        DietPreference::Standard,
        DietPreference::LowCarb,
        DietPreference::HighCarb,
        DietPreference::LowFat,
        DietPreference::HighFat,
        DietPreference::Vegetarian,
        DietPreference::Vegan,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DietPreference::Standard => "Standard",
            DietPreference::LowCarb => "Low carb",
            DietPreference::HighCarb => "High carb",
            DietPreference::LowFat => "Low fat",
            DietPreference::HighFat => "High fat",
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Vegan => "Vegan",
        }
    }

    /// Extra advice for plant-based diets
    pub fn recommendation(&self) -> Option<&'static str> {
        match self {
            DietPreference::Vegetarian => {
                Some("Combine legumes, dairy and eggs to cover all essential amino acids.")
            }
            DietPreference::Vegan => Some(
                "Combine legumes, grains and soy for complete protein; consider a B12 supplement.",
            ),
            _ => None,
        }
    }

    /// Apply this preference to a goal ratio, then renormalize to 100.
    pub fn adjust(&self, ratio: MacroRatio) -> MacroRatio {
        let MacroRatio {
            mut protein,
            mut carbs,
            mut fats,
        } = ratio;

        match self {
            DietPreference::Standard => {}
            DietPreference::LowCarb => {
                carbs = carbs.min(20.0);
                protein = protein.max(35.0);
                fats = remainder(carbs, protein);
            }
            DietPreference::HighCarb => {
                carbs = carbs.clamp(50.0, 70.0);
                fats = fats.min(25.0);
                protein = remainder(carbs, fats);
            }
            DietPreference::LowFat => {
                fats = fats.min(20.0);
                protein = protein.max(35.0);
                carbs = remainder(fats, protein);
            }
            DietPreference::HighFat => {
                fats = fats.clamp(40.0, 70.0);
                carbs = carbs.min(30.0);
                protein = remainder(fats, carbs);
            }
            DietPreference::Vegetarian | DietPreference::Vegan => {
                protein = (protein + 5.0).min(40.0);
                carbs = (carbs - 2.0).max(MIN_MACRO_PERCENT);
                fats = remainder(carbs, protein);
            }
        }

        renormalize(MacroRatio::new(protein, carbs, fats))
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn remainder(a: f64, b: f64) -> f64 {
    (100.0 - a - b).max(MIN_MACRO_PERCENT)
}

/// Force a ratio to sum to exactly 100.
///
/// Complete ratios pass through untouched.
pub fn renormalize(ratio: MacroRatio) -> MacroRatio {
    if ratio.is_complete() {
        return ratio;
    }

    let total = ratio.sum();
    let protein = (ratio.protein * 100.0 / total).round();
    let carbs = (ratio.carbs * 100.0 / total).round();
    let fats = 100.0 - protein - carbs;

    tracing::warn!(
        before = %ratio,
        total,
        protein,
        carbs,
        fats,
        "Macro ratio renormalized to 100%"
    );

    MacroRatio::new(protein, carbs, fats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macronutrients::ratios::FitnessGoal;

    fn adjusted(goal: FitnessGoal, diet: DietPreference) -> MacroRatio {
        diet.adjust(goal.base_ratio())
    }

    #[test]
    fn test_standard_is_identity() {
        for goal in FitnessGoal::PRESETS {
            assert_eq!(adjusted(goal, DietPreference::Standard), goal.base_ratio());
        }
    }

    #[test]
    fn test_low_carb() {
        // maintain 30/40/30 -> carbs 20, protein 35, fats 45
        assert_eq!(
            adjusted(FitnessGoal::Maintain, DietPreference::LowCarb),
            MacroRatio::new(35.0, 20.0, 45.0)
        );
    }

    #[test]
    fn test_high_carb_on_ketogenic() {
        // 25/5/70 -> carbs 50, fats 25, protein 25
        assert_eq!(
            adjusted(FitnessGoal::Ketogenic, DietPreference::HighCarb),
            MacroRatio::new(25.0, 50.0, 25.0)
        );
    }

    #[test]
    fn test_low_fat_and_high_fat() {
        assert_eq!(
            adjusted(FitnessGoal::LoseWeight, DietPreference::LowFat),
            MacroRatio::new(40.0, 40.0, 20.0)
        );
        assert_eq!(
            adjusted(FitnessGoal::Endurance, DietPreference::HighFat),
            MacroRatio::new(30.0, 30.0, 40.0)
        );
    }

    #[test]
    fn test_vegetarian_and_vegan_match() {
        for goal in FitnessGoal::PRESETS {
            assert_eq!(
                adjusted(goal, DietPreference::Vegetarian),
                adjusted(goal, DietPreference::Vegan)
            );
        }
        // gain-muscle 30/45/25 -> 35/43/22
        assert_eq!(
            adjusted(FitnessGoal::GainMuscle, DietPreference::Vegan),
            MacroRatio::new(35.0, 43.0, 22.0)
        );
    }

    #[test]
    fn test_floor_triggers_renormalization() {
        // 25/70/5 vegetarian -> 30/68/5 = 103 -> 29/66/5
        let result = DietPreference::Vegetarian.adjust(MacroRatio::new(25.0, 70.0, 5.0));
        assert_eq!(result, MacroRatio::new(29.0, 66.0, 5.0));
        assert!(result.is_complete());
    }

    #[test]
    fn test_every_diet_goal_pair_sums_to_100() {
        for goal in FitnessGoal::PRESETS {
            for diet in DietPreference::ALL {
                let r = adjusted(goal, diet);
                assert!(r.is_complete(), "{} / {} gave {}", goal, diet, r);
                assert!(r.protein >= 0.0 && r.carbs >= 0.0 && r.fats >= 0.0);
            }
        }
    }
}
