//! # Micronutrient Sufficiency Scoring
//!
//! Compares daily intakes against the gender-specific RDA table and produces
//! a per-nutrient status, an overall score and food-source recommendations.
//!
//! Nutrients with no recorded intake are left out of the score entirely; they
//! are neither penalized nor reported.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use calc_core::calculations::micronutrients::{calculate, MicronutrientInput, NutrientStatus};
//! use calc_core::nutrition_data::Micronutrient;
//! use calc_core::profile::Gender;
//!
//! let mut intakes = BTreeMap::new();
//! intakes.insert(Micronutrient::VitaminC, 90.0);
//! intakes.insert(Micronutrient::Iron, 4.0);
//!
//! let result = calculate(&MicronutrientInput {
//!     gender: Some(Gender::Male),
//!     intakes,
//! })
//! .unwrap();
//!
//! assert_eq!(result.overall_score, 75.0);
//! assert_eq!(result.nutrients[1].status, NutrientStatus::Deficient);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::nutrition_data::{Micronutrient, NutrientUnit};
use crate::profile::Gender;
use crate::validation;

/// Per-nutrient percentage is capped here so one megadose cannot mask
/// deficiencies elsewhere.
pub const PERCENT_CAP: f64 = 200.0;

/// Sufficiency of a single nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Adequate,
    Insufficient,
    Deficient,
}

impl NutrientStatus {
    /// Classify a percent-of-RDA value
    #[allow(clippy::if_same_then_else)]
    pub fn from_percent(percent: f64) -> Self {
        // >= 100 and >= 80 both read "adequate"; `meets_rda` carries the difference
        if percent >= 100.0 {
            NutrientStatus::Adequate
        } else if percent >= 80.0 {
            NutrientStatus::Adequate
        } else if percent >= 60.0 {
            NutrientStatus::Insufficient
        } else {
            NutrientStatus::Deficient
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NutrientStatus::Adequate => "Adequate",
            NutrientStatus::Insufficient => "Insufficient",
            NutrientStatus::Deficient => "Deficient",
        }
    }
}

/// Band for the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Adequate,
    SomeDeficiencies,
    MultipleDeficiencies,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Excellent
        } else if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 70.0 {
            ScoreBand::Adequate
        } else if score >= 60.0 {
            ScoreBand::SomeDeficiencies
        } else {
            ScoreBand::MultipleDeficiencies
        }
    }

    /// One-line description of the band
    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent micronutrient intake.",
            ScoreBand::Good => "Good micronutrient intake with minor gaps.",
            ScoreBand::Adequate => "Adequate intake, but several nutrients could improve.",
            ScoreBand::SomeDeficiencies => "Some deficiencies detected.",
            ScoreBand::MultipleDeficiencies => "Multiple deficiencies detected.",
        }
    }
}

/// Input parameters for micronutrient scoring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gender": "female",
///   "intakes": { "iron": 12.0, "calcium": 1100.0, "vitamin_d": 5.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientInput {
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Daily intake per nutrient, in that nutrient's unit
    #[serde(default)]
    pub intakes: BTreeMap<Micronutrient, f64>,
}

/// Assessment of one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAssessment {
    pub nutrient: Micronutrient,
    pub intake: f64,
    pub rda: f64,
    pub unit: NutrientUnit,
    /// Percent of RDA, capped at [`PERCENT_CAP`] (1 decimal)
    pub percent: f64,
    pub status: NutrientStatus,
    pub meets_rda: bool,
}

/// Results from micronutrient scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientResult {
    /// Assessed nutrients in table order
    pub nutrients: Vec<NutrientAssessment>,
    /// Mean capped percent over assessed nutrients (1 decimal)
    pub overall_score: f64,
    pub band: ScoreBand,
    pub summary: String,
    pub recommendations: Vec<String>,
}

/// Score micronutrient intakes.
pub fn calculate(input: &MicronutrientInput) -> CalcResult<MicronutrientResult> {
    let gender = validation::require(input.gender, "gender")?;
    for (nutrient, &intake) in &input.intakes {
        validation::non_negative(&format!("intakes.{}", key_of(*nutrient)), intake)?;
    }

    let nutrients: Vec<NutrientAssessment> = Micronutrient::ALL
        .iter()
        .filter_map(|&nutrient| {
            let intake = input.intakes.get(&nutrient).copied().unwrap_or(0.0);
            (intake > 0.0).then(|| assess(nutrient, intake, gender))
        })
        .collect();

    if nutrients.is_empty() {
        return Err(CalcError::missing_selection("intakes"));
    }

    let score = nutrients.iter().map(|n| n.percent).sum::<f64>() / nutrients.len() as f64;
    let band = ScoreBand::from_score(score);

    let recommendations = nutrients
        .iter()
        .filter(|n| n.status != NutrientStatus::Adequate)
        .map(|n| {
            format!(
                "Increase {} ({}): try {}.",
                n.nutrient.display_name(),
                n.status.label().to_lowercase(),
                n.nutrient.food_sources().join(", ")
            )
        })
        .collect();

    tracing::debug!(
        assessed = nutrients.len(),
        score,
        band = ?band,
        "Micronutrient intake scored"
    );

    let nutrients = nutrients
        .into_iter()
        .map(|n| NutrientAssessment {
            percent: round_to(n.percent, 1),
            ..n
        })
        .collect();

    Ok(MicronutrientResult {
        nutrients,
        overall_score: round_to(score, 1),
        band,
        summary: band.description().to_string(),
        recommendations,
    })
}

fn assess(nutrient: Micronutrient, intake: f64, gender: Gender) -> NutrientAssessment {
    let rda = nutrient.rda(gender);
    let percent = (intake / rda * 100.0).min(PERCENT_CAP);
    NutrientAssessment {
        nutrient,
        intake,
        rda,
        unit: nutrient.unit(),
        percent,
        status: NutrientStatus::from_percent(percent),
        meets_rda: percent >= 100.0,
    }
}

fn key_of(nutrient: Micronutrient) -> String {
    serde_json::to_value(nutrient)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_else(|| nutrient.display_name().to_owned())
}
