//! # Workout Nutrition Planning
//!
//! Two independent calculators:
//!
//! - [`pre_workout`]: carbohydrate and protein to eat before training, scaled
//!   by workout type and a four-step intensity.
//! - [`post_workout`]: recovery protein and carbohydrate plus a fluid
//!   replacement target, scaled by a 1-10 intensity slider and duration.
//!
//! Body weight is accepted in kg or lb; all outputs are grams, kcal or ml.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::Weight;
use crate::validation;

/// Kind of training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Endurance,
    Hiit,
    /// Anything else (mixed, sport, yoga); uses base rates
    #[serde(other)]
    General,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Strength,
        WorkoutType::Endurance,
        WorkoutType::Hiit,
        WorkoutType::General,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Endurance => "Endurance",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::General => "General",
        }
    }

    /// Pre-workout (carbs g/kg, protein g/kg) before intensity scaling
    fn pre_rates(&self) -> (f64, f64) {
        match self {
            WorkoutType::Endurance => (3.0, 0.2),
            WorkoutType::Hiit => (2.0, 0.3),
            WorkoutType::Strength => (1.0, 0.4),
            WorkoutType::General => (1.5, 0.25),
        }
    }

    /// Post-workout protein g/kg at intensity 5
    fn post_protein_rate(&self) -> f64 {
        match self {
            WorkoutType::Strength => 0.3,
            WorkoutType::Endurance => 0.2,
            WorkoutType::Hiit => 0.35,
            WorkoutType::General => 0.25,
        }
    }

    /// Post-workout carbs g/kg before duration adjustment
    fn post_carb_rate(&self) -> f64 {
        match self {
            WorkoutType::Endurance => 1.2,
            WorkoutType::Strength => 0.8,
            WorkoutType::Hiit | WorkoutType::General => 1.0,
        }
    }
}

/// Pre-workout intensity step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    #[serde(other)]
    VeryHigh,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Moderate,
        Intensity::High,
        Intensity::VeryHigh,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::Low => 0.8,
            Intensity::Moderate => 1.0,
            Intensity::High => 1.2,
            Intensity::VeryHigh => 1.4,
        }
    }
}

// ============================================================================
// Pre-workout
// ============================================================================

/// Input parameters for pre-workout nutrition.
///
/// ## JSON Example
///
/// ```json
/// {
///   "body_weight": { "kg": 70.0 },
///   "workout_type": "endurance",
///   "intensity": "high",
///   "minutes_before": 90
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreWorkoutInput {
    pub body_weight: Weight,
    #[serde(default)]
    pub workout_type: Option<WorkoutType>,
    #[serde(default)]
    pub intensity: Option<Intensity>,
    /// Minutes between eating and training
    #[serde(default)]
    pub minutes_before: Option<u32>,
}

/// Results from pre-workout nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreWorkoutResult {
    /// grams
    pub carbs: u32,
    /// grams
    pub protein: u32,
    pub calories: u32,
    pub timing: Option<String>,
}

fn timing_advice(minutes_before: u32) -> &'static str {
    if minutes_before >= 120 {
        "Eat a full balanced meal with complex carbohydrates and lean protein."
    } else if minutes_before >= 60 {
        "Eat a light meal low in fat and fiber."
    } else {
        "Choose a small, easily digested snack such as a banana or a sports drink."
    }
}

/// Calculate pre-workout carbohydrate and protein.
pub fn pre_workout(input: &PreWorkoutInput) -> CalcResult<PreWorkoutResult> {
    let kg = validation::positive("body_weight", input.body_weight.to_kg().0)?;
    let workout_type = validation::require(input.workout_type, "workout_type")?;
    let intensity = validation::require(input.intensity, "intensity")?;
    let (carb_rate, protein_rate) = workout_type.pre_rates();
    let m = intensity.multiplier();

    let carbs = (carb_rate * m * kg).round() as u32;
    let protein = (protein_rate * m * kg).round() as u32;

    tracing::debug!(
        workout = workout_type.display_name(),
        intensity = ?intensity,
        carbs,
        protein,
        "Pre-workout nutrition calculated"
    );

    Ok(PreWorkoutResult {
        carbs,
        protein,
        calories: carbs.saturating_add(protein).saturating_mul(4),
        timing: input.minutes_before.map(|m| timing_advice(m).to_string()),
    })
}

// ============================================================================
// Post-workout
// ============================================================================

/// Post-workout protein is clamped to this range (grams)
pub const POST_PROTEIN_RANGE: (f64, f64) = (20.0, 40.0);

/// Intensity slider range
pub const INTENSITY_RANGE: (f64, f64) = (1.0, 10.0);

/// Maximum accepted session length (minutes)
pub const MAX_DURATION_MIN: f64 = 480.0;

/// Sweat loss per minute at intensity 5 (ml)
const FLUID_ML_PER_MIN: f64 = 15.0;

/// Input parameters for post-workout recovery.
///
/// ## JSON Example
///
/// ```json
/// {
///   "body_weight": { "lb": 180.0 },
///   "workout_type": "strength",
///   "intensity": 7,
///   "duration_min": 75
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostWorkoutInput {
    pub body_weight: Weight,
    #[serde(default)]
    pub workout_type: Option<WorkoutType>,
    /// 1 (easy) to 10 (maximal)
    #[serde(default)]
    pub intensity: Option<f64>,
    pub duration_min: f64,
}

/// Results from post-workout recovery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostWorkoutResult {
    /// grams, within [`POST_PROTEIN_RANGE`]
    pub protein: u32,
    /// grams
    pub carbs: u32,
    pub calories: u32,
    /// Estimated sweat loss (ml)
    pub fluid_loss_ml: u32,
    /// 150 % of the loss (ml)
    pub rehydration_ml: u32,
}

fn duration_factor(duration_min: f64) -> f64 {
    if duration_min > 90.0 {
        1.2
    } else if duration_min < 30.0 {
        0.7
    } else {
        1.0
    }
}

/// Calculate post-workout recovery nutrition.
pub fn post_workout(input: &PostWorkoutInput) -> CalcResult<PostWorkoutResult> {
    let kg = validation::positive("body_weight", input.body_weight.to_kg().0)?;
    let workout_type = validation::require(input.workout_type, "workout_type")?;
    let intensity = validation::in_range(
        "intensity",
        validation::require(input.intensity, "intensity")?,
        INTENSITY_RANGE.0,
        INTENSITY_RANGE.1,
    )?;
    let duration = validation::positive("duration_min", input.duration_min)?;
    let duration = validation::in_range("duration_min", duration, 0.0, MAX_DURATION_MIN)?;

    let scale = intensity / 5.0;
    let protein = (workout_type.post_protein_rate() * scale * kg)
        .clamp(POST_PROTEIN_RANGE.0, POST_PROTEIN_RANGE.1)
        .round() as u32;
    let carbs = (workout_type.post_carb_rate() * duration_factor(duration) * kg).round() as u32;

    let fluid_loss = duration * FLUID_ML_PER_MIN * scale;

    tracing::debug!(
        workout = workout_type.display_name(),
        intensity,
        duration,
        protein,
        carbs,
        fluid_loss,
        "Post-workout nutrition calculated"
    );

    Ok(PostWorkoutResult {
        protein,
        carbs,
        calories: protein.saturating_add(carbs).saturating_mul(4),
        fluid_loss_ml: fluid_loss.round() as u32,
        rehydration_ml: (fluid_loss * 1.5).round() as u32,
    })
}
