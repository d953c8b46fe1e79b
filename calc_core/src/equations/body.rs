//! # Body Composition and Energy Formulas
//!
//! Closed-form anthropometric equations. Every function takes metric inputs
//! (kg, cm, years) and returns an unrounded value; rounding is a presentation
//! step done by the calculators.
//!
//! ## References
//!
//! - Mifflin, M.D. et al. (1990). A new predictive equation for resting energy
//!   expenditure in healthy individuals. *Am J Clin Nutr* 51(2).
//! - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation
//!   reevaluated. *Am J Clin Nutr* 40(1).
//! - Boer, P. (1984). Estimated lean body mass as an index for normalization
//!   of body fluid volumes in humans. *Am J Physiol* 247.

use crate::profile::Gender;

// =============================================================================
// BMI
// =============================================================================

/// Body Mass Index
///
/// ```text
/// BMI = kg / m²
/// ```
#[inline]
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Weight (kg) that gives `target_bmi` at the given height
#[inline]
pub fn weight_for_bmi(target_bmi: f64, height_m: f64) -> f64 {
    target_bmi * height_m * height_m
}

// =============================================================================
// BASAL METABOLIC RATE
// =============================================================================

/// Mifflin-St Jeor BMR (kcal/day)
///
/// ```text
/// male   = 10·kg + 6.25·cm − 5·age + 5
/// female = 10·kg + 6.25·cm − 5·age − 161
/// ```
#[inline]
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Revised Harris-Benedict BMR (kcal/day)
///
/// ```text
/// male   = 88.362  + 13.397·kg + 4.799·cm − 5.677·age
/// female = 447.593 +  9.247·kg + 3.098·cm − 4.330·age
/// ```
#[inline]
pub fn harris_benedict(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let age = age as f64;
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Total daily energy expenditure, rounded to whole kcal
#[inline]
pub fn tdee(bmr: f64, activity_multiplier: f64) -> u32 {
    (bmr * activity_multiplier).round().max(0.0) as u32
}

// =============================================================================
// LEAN BODY MASS
// =============================================================================

/// Boer lean body mass (kg)
///
/// ```text
/// male   = 0.407·kg + 0.267·cm − 19.2
/// female = 0.252·kg + 0.473·cm − 48.3
/// ```
#[inline]
pub fn boer_lean_body_mass(weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 0.407 * weight_kg + 0.267 * height_cm - 19.2,
        Gender::Female => 0.252 * weight_kg + 0.473 * height_cm - 48.3,
    }
}

/// Body fat percentage implied by a lean mass estimate
#[inline]
pub fn body_fat_percent(weight_kg: f64, lean_mass_kg: f64) -> f64 {
    (weight_kg - lean_mass_kg) / weight_kg * 100.0
}

// =============================================================================
// HEART RATE
// =============================================================================

/// Age-predicted maximum heart rate (bpm)
///
/// ```text
/// HRmax = 220 − age
/// ```
#[inline]
pub fn max_heart_rate(age: u32) -> u32 {
    220u32.saturating_sub(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert!((bmi(70.0, 1.75) - 22.857).abs() < 0.001);
        assert!((weight_for_bmi(22.857_142_857, 1.75) - 70.0).abs() < 1e-6);
    }

    #[test]
    fn test_mifflin_offset_between_sexes() {
        for (kg, cm, age) in [(80.0, 180.0, 30), (55.5, 162.3, 47), (120.0, 199.0, 18)] {
            let diff = mifflin_st_jeor(kg, cm, age, Gender::Male)
                - mifflin_st_jeor(kg, cm, age, Gender::Female);
            assert!((diff - 166.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mifflin_reference_value() {
        // 800 + 1125 - 150 + 5
        assert!((mifflin_st_jeor(80.0, 180.0, 30, Gender::Male) - 1780.0).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict_reference_values() {
        // 88.362 + 1071.76 + 863.82 - 170.31
        let male = harris_benedict(80.0, 180.0, 30, Gender::Male);
        assert!((male - 1853.632).abs() < 1e-9);

        // 447.593 + 554.82 + 511.17 - 151.55
        let female = harris_benedict(60.0, 165.0, 35, Gender::Female);
        assert!((female - 1362.033).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rounding() {
        assert_eq!(tdee(1853.632, 1.55), 2873);
        assert_eq!(tdee(1780.0, 1.2), 2136);
    }

    #[test]
    fn test_boer() {
        // 0.407*80 + 0.267*180 - 19.2 = 32.56 + 48.06 - 19.2
        let lbm = boer_lean_body_mass(80.0, 180.0, Gender::Male);
        assert!((lbm - 61.42).abs() < 1e-9);
        assert!((body_fat_percent(80.0, lbm) - 23.225).abs() < 1e-6);
    }

    #[test]
    fn test_max_heart_rate() {
        assert_eq!(max_heart_rate(40), 180);
    }
}
