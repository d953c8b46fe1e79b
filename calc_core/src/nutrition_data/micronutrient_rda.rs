//! Micronutrient Reference Values
//!
//! Recommended Dietary Allowances for adults aged 19-50 from the NIH Office of
//! Dietary Supplements fact sheets (Food and Nutrition Board, National
//! Academies). Where only an Adequate Intake exists (vitamin K, potassium) the
//! AI is used in its place.

use serde::{Deserialize, Serialize};

use crate::profile::Gender;

/// Mass unit a nutrient is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientUnit {
    #[serde(rename = "mg")]
    Milligrams,
    #[serde(rename = "mcg")]
    Micrograms,
}

impl NutrientUnit {
    /// Short label ("mg", "mcg")
    pub fn label(&self) -> &'static str {
        match self {
            NutrientUnit::Milligrams => "mg",
            NutrientUnit::Micrograms => "mcg",
        }
    }
}

/// The 18 tracked micronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Micronutrient {
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Thiamin,
    Riboflavin,
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Selenium,
    Zinc,
}

impl Micronutrient {
    /// All nutrients in display order (vitamins, then minerals)
    pub const ALL: [Micronutrient; 18] = [
        Micronutrient::VitaminA,
        Micronutrient::VitaminC,
        Micronutrient::VitaminD,
        Micronutrient::VitaminE,
        Micronutrient::VitaminK,
        Micronutrient::Thiamin,
        Micronutrient::Riboflavin,
        Micronutrient::Niacin,
        Micronutrient::VitaminB6,
        Micronutrient::Folate,
        Micronutrient::VitaminB12,
        Micronutrient::Calcium,
        Micronutrient::Iron,
        Micronutrient::Magnesium,
        Micronutrient::Phosphorus,
        Micronutrient::Potassium,
        Micronutrient::Selenium,
        Micronutrient::Zinc,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Micronutrient::VitaminA => "Vitamin A",
            Micronutrient::VitaminC => "Vitamin C",
            Micronutrient::VitaminD => "Vitamin D",
            Micronutrient::VitaminE => "Vitamin E",
            Micronutrient::VitaminK => "Vitamin K",
            Micronutrient::Thiamin => "Thiamin (B1)",
            Micronutrient::Riboflavin => "Riboflavin (B2)",
            Micronutrient::Niacin => "Niacin (B3)",
            Micronutrient::VitaminB6 => "Vitamin B6",
            Micronutrient::Folate => "Folate",
            Micronutrient::VitaminB12 => "Vitamin B12",
            Micronutrient::Calcium => "Calcium",
            Micronutrient::Iron => "Iron",
            Micronutrient::Magnesium => "Magnesium",
            Micronutrient::Phosphorus => "Phosphorus",
            Micronutrient::Potassium => "Potassium",
            Micronutrient::Selenium => "Selenium",
            Micronutrient::Zinc => "Zinc",
        }
    }

    /// Unit intake and RDA are expressed in
    pub fn unit(&self) -> NutrientUnit {
        match self {
            Micronutrient::VitaminA
            | Micronutrient::VitaminD
            | Micronutrient::VitaminK
            | Micronutrient::Folate
            | Micronutrient::VitaminB12
            | Micronutrient::Selenium => NutrientUnit::Micrograms,
            _ => NutrientUnit::Milligrams,
        }
    }

    /// Daily allowance for the given gender, in [`Self::unit`]
    pub fn rda(&self, gender: Gender) -> f64 {
        let (male, female) = match self {
            Micronutrient::VitaminA => (900.0, 700.0),
            Micronutrient::VitaminC => (90.0, 75.0),
            Micronutrient::VitaminD => (15.0, 15.0),
            Micronutrient::VitaminE => (15.0, 15.0),
            Micronutrient::VitaminK => (120.0, 90.0),
            Micronutrient::Thiamin => (1.2, 1.1),
            Micronutrient::Riboflavin => (1.3, 1.1),
            Micronutrient::Niacin => (16.0, 14.0),
            Micronutrient::VitaminB6 => (1.3, 1.3),
            Micronutrient::Folate => (400.0, 400.0),
            Micronutrient::VitaminB12 => (2.4, 2.4),
            Micronutrient::Calcium => (1000.0, 1000.0),
            Micronutrient::Iron => (8.0, 18.0),
            Micronutrient::Magnesium => (420.0, 320.0),
            Micronutrient::Phosphorus => (700.0, 700.0),
            Micronutrient::Potassium => (3400.0, 2600.0),
            Micronutrient::Selenium => (55.0, 55.0),
            Micronutrient::Zinc => (11.0, 8.0),
        };
        match gender {
            Gender::Male => male,
            Gender::Female => female,
        }
    }

    /// A few foods rich in this nutrient
    pub fn food_sources(&self) -> &'static [&'static str] {
        match self {
            Micronutrient::VitaminA => &["sweet potato", "carrots", "spinach"],
            Micronutrient::VitaminC => &["citrus fruit", "bell peppers", "broccoli"],
            Micronutrient::VitaminD => &["fatty fish", "fortified milk", "egg yolks"],
            Micronutrient::VitaminE => &["almonds", "sunflower seeds", "spinach"],
            Micronutrient::VitaminK => &["kale", "spinach", "broccoli"],
            Micronutrient::Thiamin => &["pork", "whole grains", "legumes"],
            Micronutrient::Riboflavin => &["dairy", "eggs", "lean meat"],
            Micronutrient::Niacin => &["poultry", "fish", "peanuts"],
            Micronutrient::VitaminB6 => &["chickpeas", "salmon", "potatoes"],
            Micronutrient::Folate => &["leafy greens", "lentils", "asparagus"],
            Micronutrient::VitaminB12 => &["meat", "fish", "dairy"],
            Micronutrient::Calcium => &["dairy", "fortified plant milk", "tofu"],
            Micronutrient::Iron => &["red meat", "lentils", "spinach"],
            Micronutrient::Magnesium => &["pumpkin seeds", "almonds", "black beans"],
            Micronutrient::Phosphorus => &["dairy", "meat", "whole grains"],
            Micronutrient::Potassium => &["bananas", "potatoes", "beans"],
            Micronutrient::Selenium => &["brazil nuts", "tuna", "eggs"],
            Micronutrient::Zinc => &["oysters", "beef", "pumpkin seeds"],
        }
    }
}

impl std::fmt::Display for Micronutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nutrients_have_positive_rda() {
        for n in Micronutrient::ALL {
            for g in Gender::ALL {
                assert!(n.rda(g) > 0.0, "{} {}", n, g);
            }
            assert!(!n.food_sources().is_empty());
        }
    }

    #[test]
    fn test_gender_specific_values() {
        assert_eq!(Micronutrient::Iron.rda(Gender::Male), 8.0);
        assert_eq!(Micronutrient::Iron.rda(Gender::Female), 18.0);
        assert_eq!(Micronutrient::VitaminA.unit().label(), "mcg");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Micronutrient::VitaminB12).unwrap();
        assert_eq!(json, "\"vitamin_b12\"");
    }
}
