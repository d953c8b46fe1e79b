//! # One-Rep-Max Calculation
//!
//! Estimates the one-repetition maximum from a submaximal set using one of
//! seven published formulas, and builds a rep-max table for 1-12 reps.
//!
//! The table always uses the Lombardi curve regardless of the selected
//! formula, so switching formulas changes the 1RM but not the percentages.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::one_rep_max::{calculate, OneRepMaxFormula, OneRepMaxInput};
//!
//! let input = OneRepMaxInput {
//!     weight: 100.0,
//!     reps: 10,
//!     formula: Some(OneRepMaxFormula::Epley),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.one_rep_max, 133.3);
//! assert_eq!(result.rep_max_table.len(), 12);
//! ```

use serde::{Deserialize, Serialize};

use super::round_to;
use crate::equations;
use crate::errors::CalcResult;
use crate::validation;

/// Allowed repetition range; estimates degrade above 15 reps
pub const REPS_RANGE: (u32, u32) = (1, 15);

/// Number of rows in the rep-max table
pub const REP_MAX_TABLE_ROWS: u32 = 12;

/// Named one-rep-max formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OneRepMaxFormula {
    Epley,
    Brzycki,
    Lander,
    Mcglothin,
    Lombardi,
    /// O'Conner et al.
    #[serde(rename = "okane")]
    OConner,
    Wathan,
    /// Any key not listed above. Estimates 0 rather than failing.
    #[serde(other)]
    Unrecognized,
}

impl OneRepMaxFormula {
    /// All named formulas for UI selection
    pub const ALL: [OneRepMaxFormula; 7] = [
        OneRepMaxFormula::Epley,
        OneRepMaxFormula::Brzycki,
        OneRepMaxFormula::Lander,
        OneRepMaxFormula::Mcglothin,
        OneRepMaxFormula::Lombardi,
        OneRepMaxFormula::OConner,
        OneRepMaxFormula::Wathan,
    ];

    /// Estimate 1RM (unrounded) for `weight` lifted `reps` times.
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        let r = reps as f64;
        match self {
            OneRepMaxFormula::Epley => equations::epley(weight, r),
            OneRepMaxFormula::Brzycki => equations::brzycki(weight, r),
            OneRepMaxFormula::Lander | OneRepMaxFormula::Mcglothin => equations::lander(weight, r),
            OneRepMaxFormula::Lombardi => equations::lombardi(weight, r),
            OneRepMaxFormula::OConner => equations::oconner(weight, r),
            OneRepMaxFormula::Wathan => equations::wathan(weight, r),
            OneRepMaxFormula::Unrecognized => 0.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            OneRepMaxFormula::Epley => "Epley",
            OneRepMaxFormula::Brzycki => "Brzycki",
            OneRepMaxFormula::Lander => "Lander",
            OneRepMaxFormula::Mcglothin => "McGlothin",
            OneRepMaxFormula::Lombardi => "Lombardi",
            OneRepMaxFormula::OConner => "O'Conner",
            OneRepMaxFormula::Wathan => "Wathan",
            OneRepMaxFormula::Unrecognized => "Unrecognized",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['\'', ' ', '-'], "").as_str() {
            "epley" => OneRepMaxFormula::Epley,
            "brzycki" => OneRepMaxFormula::Brzycki,
            "lander" => OneRepMaxFormula::Lander,
            "mcglothin" => OneRepMaxFormula::Mcglothin,
            "lombardi" => OneRepMaxFormula::Lombardi,
            "okane" | "oconner" | "oconnor" => OneRepMaxFormula::OConner,
            "wathan" => OneRepMaxFormula::Wathan,
            _ => OneRepMaxFormula::Unrecognized,
        }
    }
}

/// Input parameters for a one-rep-max estimate.
///
/// `weight` is unit-agnostic; results come back in the same unit.
///
/// ## JSON Example
///
/// ```json
/// { "weight": 225.0, "reps": 5, "formula": "brzycki" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxInput {
    pub weight: f64,
    pub reps: u32,
    #[serde(default)]
    pub formula: Option<OneRepMaxFormula>,
}

/// One row of the rep-max table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepMaxRow {
    pub reps: u32,
    /// Percentage of 1RM (1 decimal)
    pub percentage: f64,
    /// Weight liftable for `reps` repetitions (1 decimal)
    pub estimated_weight: f64,
}

/// Results from a one-rep-max estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxResult {
    pub formula: OneRepMaxFormula,
    /// Estimated 1RM (1 decimal)
    pub one_rep_max: f64,
    pub rep_max_table: Vec<RepMaxRow>,
}

/// Build the Lombardi rep-max table for a given 1RM.
pub fn rep_max_table(one_rep_max: f64) -> Vec<RepMaxRow> {
    (1..=REP_MAX_TABLE_ROWS)
        .map(|reps| {
            let percentage = equations::rep_max_percentage(reps as f64);
            RepMaxRow {
                reps,
                percentage: round_to(percentage, 1),
                estimated_weight: round_to(one_rep_max * percentage / 100.0, 1),
            }
        })
        .collect()
}

/// Calculate a one-rep-max estimate.
pub fn calculate(input: &OneRepMaxInput) -> CalcResult<OneRepMaxResult> {
    validation::positive("weight", input.weight)?;
    validation::in_range(
        "reps",
        input.reps as f64,
        REPS_RANGE.0 as f64,
        REPS_RANGE.1 as f64,
    )?;
    let formula = validation::require(input.formula, "formula")?;

    if formula == OneRepMaxFormula::Unrecognized {
        tracing::warn!("Unrecognized one-rep-max formula; estimating 0");
    }

    let one_rep_max = formula.estimate(input.weight, input.reps);
    tracing::debug!(formula = formula.display_name(), one_rep_max, "One-rep max estimated");

    Ok(OneRepMaxResult {
        formula,
        one_rep_max: round_to(one_rep_max, 1),
        rep_max_table: rep_max_table(one_rep_max),
    })
}
