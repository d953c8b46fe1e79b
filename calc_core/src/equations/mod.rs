//! # Health and Fitness Equations
//!
//! This module contains every closed-form formula used by the calculators.
//! Having equations in one place enables:
//! - Easy verification against the published references
//! - Two coexisting BMR equations without either leaking into the other's calculator
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`body`] - BMI, BMR (Mifflin-St Jeor, Harris-Benedict), TDEE, lean body mass, HR max
//! - [`strength`] - One-rep-max estimators and the rep-max percentage curve
//!
//! ## Conventions
//!
//! - Inputs are metric (kg, cm) and ages are whole years
//! - Results are unrounded unless the name says otherwise

pub mod body;
pub mod strength;

pub use body::{
    bmi,
    body_fat_percent,
    boer_lean_body_mass,
    harris_benedict,
    max_heart_rate,
    mifflin_st_jeor,
    tdee,
    weight_for_bmi,
};

pub use strength::{brzycki, epley, lander, lombardi, oconner, rep_max_percentage, wathan};
