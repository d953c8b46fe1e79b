//! Glycemic Index Food Table
//!
//! Glycemic index (glucose = 100) and available carbohydrate per 100 g for
//! common foods. Values are typical published figures from the University of
//! Sydney GI database and USDA FoodData Central.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A food in the glycemic table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlycemicFood {
    /// Lookup key (kebab-case)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Glycemic index, 0-100
    pub glycemic_index: f64,
    /// Available carbohydrate in grams per 100 g serving
    pub carbs_per_100g: f64,
}

/// GI band of a single food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiBand {
    /// GI ≤ 55
    Low,
    /// GI 56-69
    Medium,
    /// GI ≥ 70
    High,
}

impl GiBand {
    /// Classify a glycemic index
    pub fn from_index(gi: f64) -> Self {
        if gi <= 55.0 {
            GiBand::Low
        } else if gi < 70.0 {
            GiBand::Medium
        } else {
            GiBand::High
        }
    }
}

const fn food(key: &'static str, name: &'static str, gi: f64, carbs: f64) -> GlycemicFood {
    GlycemicFood {
        key,
        name,
        glycemic_index: gi,
        carbs_per_100g: carbs,
    }
}

/// All foods, in the order a picker should list them
pub static FOODS: [GlycemicFood; 30] = [
    // Grains and starches
    food("white-rice", "White rice (boiled)", 73.0, 28.0),
    food("brown-rice", "Brown rice (boiled)", 68.0, 23.0),
    food("basmati-rice", "Basmati rice (boiled)", 58.0, 25.0),
    food("white-bread", "White bread", 75.0, 49.0),
    food("whole-wheat-bread", "Whole wheat bread", 74.0, 41.0),
    food("oatmeal", "Oatmeal (porridge)", 55.0, 12.0),
    food("cornflakes", "Cornflakes", 81.0, 84.0),
    food("pasta", "Spaghetti (boiled)", 49.0, 25.0),
    food("potato", "Potato (boiled)", 78.0, 17.0),
    food("sweet-potato", "Sweet potato (boiled)", 63.0, 20.0),
    food("french-fries", "French fries", 63.0, 41.0),
    food("sweet-corn", "Sweet corn", 52.0, 19.0),
    food("popcorn", "Popcorn", 65.0, 78.0),
    // Fruit
    food("apple", "Apple", 36.0, 14.0),
    food("banana", "Banana", 51.0, 23.0),
    food("orange", "Orange", 43.0, 12.0),
    food("watermelon", "Watermelon", 76.0, 8.0),
    food("grapes", "Grapes", 59.0, 18.0),
    food("mango", "Mango", 51.0, 15.0),
    food("pineapple", "Pineapple", 59.0, 13.0),
    food("strawberries", "Strawberries", 41.0, 8.0),
    // Vegetables and legumes
    food("carrots", "Carrots (boiled)", 39.0, 10.0),
    food("chickpeas", "Chickpeas (boiled)", 28.0, 27.0),
    food("lentils", "Lentils (boiled)", 32.0, 20.0),
    food("kidney-beans", "Kidney beans (boiled)", 24.0, 22.0),
    // Dairy
    food("milk", "Milk (full fat)", 39.0, 5.0),
    food("yogurt", "Plain yogurt", 41.0, 5.0),
    // Sugars and sweets
    food("honey", "Honey", 61.0, 82.0),
    food("table-sugar", "Table sugar (sucrose)", 65.0, 100.0),
    food("dark-chocolate", "Dark chocolate", 40.0, 46.0),
];

static FOOD_INDEX: Lazy<HashMap<&'static str, &'static GlycemicFood>> =
    Lazy::new(|| FOODS.iter().map(|f| (f.key, f)).collect());

/// Look up a food by key (case-insensitive, spaces/underscores accepted)
pub fn find_food(key: &str) -> CalcResult<&'static GlycemicFood> {
    let normalized = key.trim().to_lowercase().replace([' ', '_'], "-");
    FOOD_INDEX
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| CalcError::unknown_selection("food", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(FOOD_INDEX.len(), FOODS.len());
    }

    #[test]
    fn test_white_rice() {
        let rice = find_food("White Rice").unwrap();
        assert_eq!(rice.glycemic_index, 73.0);
        assert_eq!(rice.carbs_per_100g, 28.0);
    }

    #[test]
    fn test_unknown_food() {
        let err = find_food("durian").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SELECTION");
    }

    #[test]
    fn test_values_in_range() {
        for f in FOODS.iter() {
            assert!((0.0..=100.0).contains(&f.glycemic_index), "{}", f.key);
            assert!((0.0..=100.0).contains(&f.carbs_per_100g), "{}", f.key);
        }
    }

    #[test]
    fn test_gi_bands() {
        assert_eq!(GiBand::from_index(55.0), GiBand::Low);
        assert_eq!(GiBand::from_index(69.0), GiBand::Medium);
        assert_eq!(GiBand::from_index(70.0), GiBand::High);
    }
}
