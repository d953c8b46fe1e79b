//! # Glycemic Load Aggregation
//!
//! Builds a meal from the glycemic food table and totals its glycemic load.
//!
//! ## Formulas
//!
//! ```text
//! carbs = carbs_per_100g × amount_g / 100
//! GL    = GI × carbs / 100
//! avgGI = Σ(GI_i × carbs_i) / Σcarbs_i
//! ```
//!
//! The meal average GI is carb-weighted and is absent for a meal with no
//! carbohydrate.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::glycemic_load::{Meal, GlycemicLoadCategory};
//!
//! let mut meal = Meal::new();
//! let item = meal.add_food("white-rice", 150.0).unwrap();
//! assert_eq!(item.carbs, 42.0);
//!
//! let totals = meal.totals();
//! assert_eq!(totals.category, GlycemicLoadCategory::High);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::nutrition_data::{find_food, GiBand};
use crate::validation;

/// Meal-level glycemic load category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlycemicLoadCategory {
    /// GL < 10
    Low,
    /// GL 10-19
    Medium,
    /// GL ≥ 20
    High,
}

impl GlycemicLoadCategory {
    pub fn from_load(gl: f64) -> Self {
        if gl < 10.0 {
            GlycemicLoadCategory::Low
        } else if gl < 20.0 {
            GlycemicLoadCategory::Medium
        } else {
            GlycemicLoadCategory::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GlycemicLoadCategory::Low => "Low",
            GlycemicLoadCategory::Medium => "Medium",
            GlycemicLoadCategory::High => "High",
        }
    }
}

/// A food portion in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub id: Uuid,
    pub food_key: String,
    pub name: String,
    pub amount_g: f64,
    pub glycemic_index: f64,
    pub gi_band: GiBand,
    /// Carbohydrate in this portion (grams)
    pub carbs: f64,
    pub glycemic_load: f64,
}

/// Totals over all items of a meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// 2 decimals
    pub total_glycemic_load: f64,
    /// 1 decimal
    pub total_carbs: f64,
    /// Carb-weighted mean GI (whole number); `None` when the meal has no carbs
    pub average_gi: Option<f64>,
    pub category: GlycemicLoadCategory,
}

/// An in-progress meal owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    items: Vec<MealItem>,
}

impl Meal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `amount_g` grams of a food from the table.
    pub fn add_food(&mut self, food_key: &str, amount_g: f64) -> CalcResult<&MealItem> {
        if food_key.trim().is_empty() {
            return Err(CalcError::missing_selection("food"));
        }
        let food = find_food(food_key)?;
        validation::positive("amount_g", amount_g)?;

        let carbs = food.carbs_per_100g * amount_g / 100.0;
        let glycemic_load = food.glycemic_index * carbs / 100.0;

        tracing::debug!(food = food.key, amount_g, carbs, glycemic_load, "Food added to meal");

        self.items.push(MealItem {
            id: Uuid::new_v4(),
            food_key: food.key.to_string(),
            name: food.name.to_string(),
            amount_g,
            glycemic_index: food.glycemic_index,
            gi_band: GiBand::from_index(food.glycemic_index),
            carbs,
            glycemic_load,
        });
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Remove an item by id; returns it if present
    pub fn remove_item(&mut self, id: Uuid) -> Option<MealItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn totals(&self) -> MealTotals {
        let total_gl: f64 = self.items.iter().map(|i| i.glycemic_load).sum();
        let total_carbs: f64 = self.items.iter().map(|i| i.carbs).sum();
        let average_gi = (total_carbs > 0.0).then(|| {
            let weighted: f64 = self.items.iter().map(|i| i.glycemic_index * i.carbs).sum();
            (weighted / total_carbs).round()
        });

        MealTotals {
            total_glycemic_load: round_to(total_gl, 2),
            total_carbs: round_to(total_carbs, 1),
            average_gi,
            category: GlycemicLoadCategory::from_load(total_gl),
        }
    }
}

/// One requested portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPortion {
    /// Food table key, e.g. `"white-rice"`
    #[serde(default)]
    pub food: Option<String>,
    pub amount_g: f64,
}

/// Input parameters for a one-shot glycemic load calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "items": [
///     { "food": "white-rice", "amount_g": 150.0 },
///     { "food": "lentils", "amount_g": 100.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlycemicLoadInput {
    pub items: Vec<FoodPortion>,
}

/// Results from a one-shot glycemic load calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlycemicLoadResult {
    pub items: Vec<MealItem>,
    pub totals: MealTotals,
}

/// Build a meal from all portions and total it.
pub fn calculate(input: &GlycemicLoadInput) -> CalcResult<GlycemicLoadResult> {
    if input.items.is_empty() {
        return Err(CalcError::missing_selection("food"));
    }

    let mut meal = Meal::new();
    for portion in &input.items {
        let key = portion
            .food
            .as_deref()
            .ok_or_else(|| CalcError::missing_selection("food"))?;
        meal.add_food(key, portion.amount_g)?;
    }

    let totals = meal.totals();
    Ok(GlycemicLoadResult {
        items: meal.items,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_rice_reference() {
        let mut meal = Meal::new();
        let item = meal.add_food("white-rice", 150.0).unwrap();
        assert!((item.carbs - 42.0).abs() < 1e-9);
        assert!((item.glycemic_load - 30.66).abs() < 1e-9);
        assert_eq!(item.gi_band, GiBand::High);

        let totals = meal.totals();
        assert_eq!(totals.total_glycemic_load, 30.66);
        assert_eq!(totals.total_carbs, 42.0);
        assert_eq!(totals.average_gi, Some(73.0));
        assert_eq!(totals.category, GlycemicLoadCategory::High);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(GlycemicLoadCategory::from_load(9.99), GlycemicLoadCategory::Low);
        assert_eq!(GlycemicLoadCategory::from_load(10.0), GlycemicLoadCategory::Medium);
        assert_eq!(GlycemicLoadCategory::from_load(19.99), GlycemicLoadCategory::Medium);
        assert_eq!(GlycemicLoadCategory::from_load(20.0), GlycemicLoadCategory::High);
    }

    #[test]
    fn test_empty_meal_has_no_average() {
        let totals = Meal::new().totals();
        assert_eq!(totals.average_gi, None);
        assert_eq!(totals.total_glycemic_load, 0.0);
        assert_eq!(totals.category, GlycemicLoadCategory::Low);
    }

    #[test]
    fn test_average_is_carb_weighted() {
        let mut meal = Meal::new();
        meal.add_food("white-rice", 100.0).unwrap(); // 28 g carbs, GI 73
        meal.add_food("white-rice", 100.0).unwrap();
        let totals = meal.totals();
        assert_eq!(totals.average_gi, Some(73.0));
        assert_eq!(meal.items().len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut meal = Meal::new();
        let id = meal.add_food("white-rice", 150.0).unwrap().id;
        meal.add_food("white-rice", 50.0).unwrap();

        let removed = meal.remove_item(id).unwrap();
        assert_eq!(removed.amount_g, 150.0);
        assert!(meal.remove_item(id).is_none());
        assert_eq!(meal.totals().total_carbs, 14.0);

        meal.clear();
        assert!(meal.is_empty());
    }

    #[test]
    fn test_add_food_errors() {
        let mut meal = Meal::new();
        assert_eq!(
            meal.add_food("", 100.0).unwrap_err(),
            CalcError::missing_selection("food")
        );
        assert_eq!(meal.add_food("durian", 100.0).unwrap_err().error_code(), "UNKNOWN_SELECTION");
        assert_eq!(meal.add_food("white-rice", 0.0).unwrap_err().field(), Some("amount_g"));
        assert!(meal.is_empty());
    }

    #[test]
    fn test_calculate() {
        let input: GlycemicLoadInput =
            serde_json::from_str(r#"{"items":[{"food":"white-rice","amount_g":150.0}]}"#).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.totals.total_glycemic_load, 30.66);

        let missing = calculate(&GlycemicLoadInput {
            items: vec![FoodPortion {
                food: None,
                amount_g: 100.0,
            }],
        });
        assert_eq!(missing.unwrap_err(), CalcError::missing_selection("food"));
    }
}
