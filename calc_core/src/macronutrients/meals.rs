//! Macro grams and their split across the day's meals

use serde::{Deserialize, Serialize};

use super::ratios::MacroRatio;

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily grams per macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// Calories per macronutrient (rounded kcal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacroCalories {
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl MacroGrams {
    /// Grams for a calorie target and ratio: `round(kcal × pct / 100 / kcal_per_g)`
    pub fn from_ratio(daily_calories: f64, ratio: &MacroRatio) -> (Self, MacroCalories) {
        let protein_cal = daily_calories * ratio.protein / 100.0;
        let carbs_cal = daily_calories * ratio.carbs / 100.0;
        let fats_cal = daily_calories * ratio.fats / 100.0;

        let grams = Self {
            protein: grams(protein_cal, KCAL_PER_G_PROTEIN),
            carbs: grams(carbs_cal, KCAL_PER_G_CARBS),
            fats: grams(fats_cal, KCAL_PER_G_FAT),
        };
        let calories = MacroCalories {
            protein: protein_cal.round() as u32,
            carbs: carbs_cal.round() as u32,
            fats: fats_cal.round() as u32,
        };
        (grams, calories)
    }

    /// Exact calories contained in these grams
    pub fn calories(&self) -> MacroCalories {
        MacroCalories {
            protein: self.protein.saturating_mul(KCAL_PER_G_PROTEIN as u32),
            carbs: self.carbs.saturating_mul(KCAL_PER_G_CARBS as u32),
            fats: self.fats.saturating_mul(KCAL_PER_G_FAT as u32),
        }
    }

    /// Grams from per-macro calories
    pub fn from_calories(calories: &MacroCalories) -> Self {
        Self {
            protein: grams(calories.protein as f64, KCAL_PER_G_PROTEIN),
            carbs: grams(calories.carbs as f64, KCAL_PER_G_CARBS),
            fats: grams(calories.fats as f64, KCAL_PER_G_FAT),
        }
    }
}

fn grams(kcal: f64, kcal_per_g: f64) -> u32 {
    (kcal / kcal_per_g).round().max(0.0) as u32
}

/// Fixed meal shares; snacks take the remainder
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.30;

/// Macro grams per meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: MacroGrams,
    pub lunch: MacroGrams,
    pub dinner: MacroGrams,
    pub snacks: MacroGrams,
}

impl MealPlan {
    /// Split daily grams 25/35/30 with snacks absorbing the rounding.
    pub fn distribute(total: &MacroGrams) -> Self {
        let share = |g: u32, s: f64| (g as f64 * s).round() as u32;
        let split = |s: f64| MacroGrams {
            protein: share(total.protein, s),
            carbs: share(total.carbs, s),
            fats: share(total.fats, s),
        };

        let breakfast = split(BREAKFAST_SHARE);
        let lunch = split(LUNCH_SHARE);
        let dinner = split(DINNER_SHARE);

        let snacks = MacroGrams {
            protein: snack_remainder(
                "protein",
                total.protein,
                [breakfast.protein, lunch.protein, dinner.protein],
            ),
            carbs: snack_remainder(
                "carbs",
                total.carbs,
                [breakfast.carbs, lunch.carbs, dinner.carbs],
            ),
            fats: snack_remainder("fats", total.fats, [breakfast.fats, lunch.fats, dinner.fats]),
        };

        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
        }
    }

    /// Meals in display order with their labels
    pub fn meals(&self) -> [(&'static str, MacroGrams); 4] {
        [
            ("Breakfast", self.breakfast),
            ("Lunch", self.lunch),
            ("Dinner", self.dinner),
            ("Snacks", self.snacks),
        ]
    }
}

fn snack_remainder(macro_name: &str, total: u32, meals: [u32; 3]) -> u32 {
    let assigned: u32 = meals.iter().sum();
    if assigned > total {
        tracing::warn!(
            macro_name,
            total,
            assigned,
            "Meal rounding exceeds daily total; snacks clamped to 0 g"
        );
    }
    total.saturating_sub(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_from_ratio() {
        let (grams, calories) = MacroGrams::from_ratio(2873.0, &MacroRatio::new(30.0, 40.0, 30.0));
        assert_eq!(
            grams,
            MacroGrams {
                protein: 215,
                carbs: 287,
                fats: 96
            }
        );
        assert_eq!(calories.protein, 862);
        assert_eq!(calories.carbs, 1149);
    }

    #[test]
    fn test_calorie_round_trip() {
        let grams = MacroGrams {
            protein: 207,
            carbs: 276,
            fats: 92,
        };
        assert_eq!(MacroGrams::from_calories(&grams.calories()), grams);
    }

    #[test]
    fn test_meal_split() {
        let plan = MealPlan::distribute(&MacroGrams {
            protein: 215,
            carbs: 287,
            fats: 96,
        });
        // protein: 53.75 -> 54, 75.25 -> 75, 64.5 -> 65, remainder 21
        assert_eq!(plan.breakfast.protein, 54);
        assert_eq!(plan.lunch.protein, 75);
        assert_eq!(plan.dinner.protein, 65);
        assert_eq!(plan.snacks.protein, 21);

        let total_carbs: u32 = plan.meals().iter().map(|(_, m)| m.carbs).sum();
        assert_eq!(total_carbs, 287);
    }

    #[test]
    fn test_negative_snack_is_clamped() {
        // 2 g: 0.5 -> 1, 0.7 -> 1, 0.6 -> 1 (3 g assigned)
        let plan = MealPlan::distribute(&MacroGrams {
            protein: 2,
            carbs: 2,
            fats: 2,
        });
        assert_eq!(plan.snacks, MacroGrams::default());
        assert_eq!(plan.breakfast.fats, 1);
    }

    #[test]
    fn test_calories_saturate() {
        let grams = MacroGrams {
            protein: u32::MAX / 2,
            carbs: 10,
            fats: u32::MAX,
        };
        let calories = grams.calories();
        assert_eq!(calories.protein, u32::MAX);
        assert_eq!(calories.carbs, 40);
        assert_eq!(calories.fats, u32::MAX);
    }
}
