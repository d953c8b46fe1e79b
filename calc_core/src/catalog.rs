//! # Tool Catalog
//!
//! The fixed list of calculators offered to users, with category filtering
//! and plain substring search. There is no ranking: results keep catalog
//! order.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::{filter_by_category, search, ToolCategory};
//!
//! let strength = filter_by_category(Some(ToolCategory::Strength));
//! assert_eq!(strength[0].slug, "one-rep-max");
//!
//! let hits = search("GLYCEMIC");
//! assert_eq!(hits.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Category a tool card is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    BodyComposition,
    Nutrition,
    Strength,
    Cardio,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 4] = [
        ToolCategory::BodyComposition,
        ToolCategory::Nutrition,
        ToolCategory::Strength,
        ToolCategory::Cardio,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolCategory::BodyComposition => "Body Composition",
            ToolCategory::Nutrition => "Nutrition",
            ToolCategory::Strength => "Strength",
            ToolCategory::Cardio => "Cardio",
        }
    }

    /// Lookup key as used in filters
    pub fn key(&self) -> &'static str {
        match self {
            ToolCategory::BodyComposition => "body-composition",
            ToolCategory::Nutrition => "nutrition",
            ToolCategory::Strength => "strength",
            ToolCategory::Cardio => "cardio",
        }
    }

    /// Parse a filter key. `"all"` (or empty) means no filter.
    pub fn parse_filter(s: &str) -> CalcResult<Option<Self>> {
        let key = s.trim().to_lowercase().replace([' ', '_'], "-");
        if key.is_empty() || key == "all" {
            return Ok(None);
        }
        Self::ALL
            .iter()
            .find(|c| c.key() == key)
            .copied()
            .map(Some)
            .ok_or_else(|| CalcError::unknown_selection("category", s))
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A calculator as listed in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
}

const fn card(
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    category: ToolCategory,
) -> ToolCard {
    ToolCard {
        slug,
        title,
        description,
        category,
    }
}

/// Every tool, in display order
pub static TOOLS: [ToolCard; 11] = [
    card(
        "bmi",
        "BMI Calculator",
        "Body Mass Index with category and healthy weight range for your height.",
        ToolCategory::BodyComposition,
    ),
    card(
        "bmr",
        "BMR Calculator",
        "Basal metabolic rate (Mifflin-St Jeor) and calories for every activity level.",
        ToolCategory::Nutrition,
    ),
    card(
        "daily-calories",
        "Daily Calorie Calculator",
        "Maintenance, weight-loss and weight-gain calories from the Harris-Benedict equation.",
        ToolCategory::Nutrition,
    ),
    card(
        "lean-body-mass",
        "Lean Body Mass Calculator",
        "Lean mass, fat mass and body fat percentage using the Boer formula.",
        ToolCategory::BodyComposition,
    ),
    card(
        "heart-rate",
        "Heart Rate Zone Calculator",
        "Maximum heart rate and warm-up, fat burn, cardio and peak training zones.",
        ToolCategory::Cardio,
    ),
    card(
        "one-rep-max",
        "One Rep Max Calculator",
        "Estimate your 1RM with seven formulas and see a rep-max table.",
        ToolCategory::Strength,
    ),
    card(
        "macros",
        "Macro Calculator",
        "Protein, carb and fat targets by goal and diet, split across your meals.",
        ToolCategory::Nutrition,
    ),
    card(
        "micronutrients",
        "Micronutrient Checker",
        "Score vitamin and mineral intake against recommended dietary allowances.",
        ToolCategory::Nutrition,
    ),
    card(
        "glycemic-load",
        "Glycemic Load Calculator",
        "Build a meal and total its glycemic load and average glycemic index.",
        ToolCategory::Nutrition,
    ),
    card(
        "pre-workout",
        "Pre-Workout Nutrition",
        "Carbohydrate and protein to eat before strength, endurance or HIIT training.",
        ToolCategory::Strength,
    ),
    card(
        "post-workout",
        "Post-Workout Recovery",
        "Recovery protein, carbohydrate and fluid replacement after training.",
        ToolCategory::Strength,
    ),
];

/// Tools in a category; `None` returns every tool.
pub fn filter_by_category(category: Option<ToolCategory>) -> Vec<&'static ToolCard> {
    TOOLS
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}

/// Case-insensitive substring match over title and description.
///
/// A blank query returns every tool.
pub fn search(query: &str) -> Vec<&'static ToolCard> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return TOOLS.iter().collect();
    }
    TOOLS
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Look up a tool by slug
pub fn find_tool(slug: &str) -> Option<&'static ToolCard> {
    TOOLS.iter().find(|t| t.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_everything() {
        assert_eq!(filter_by_category(None).len(), TOOLS.len());
        assert_eq!(ToolCategory::parse_filter("all").unwrap(), None);
    }

    #[test]
    fn test_every_category_is_used() {
        let total: usize = ToolCategory::ALL
            .iter()
            .map(|&c| filter_by_category(Some(c)).len())
            .sum();
        assert_eq!(total, TOOLS.len());
        for c in ToolCategory::ALL {
            assert!(!filter_by_category(Some(c)).is_empty(), "{}", c);
        }
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            ToolCategory::parse_filter("Body Composition").unwrap(),
            Some(ToolCategory::BodyComposition)
        );
        let err = ToolCategory::parse_filter("yoga").unwrap_err();
        assert_eq!(err.field(), Some("category"));
    }

    #[test]
    fn test_search() {
        let hits = search("calorie");
        let slugs: Vec<&str> = hits.iter().map(|t| t.slug).collect();
        assert!(slugs.contains(&"daily-calories"));
        assert!(slugs.contains(&"bmr"));

        assert_eq!(search("   ").len(), TOOLS.len());
        assert!(search("crossfit").is_empty());
    }

    #[test]
    fn test_slugs_unique() {
        for t in TOOLS.iter() {
            assert_eq!(find_tool(t.slug), Some(t));
        }
    }
}
