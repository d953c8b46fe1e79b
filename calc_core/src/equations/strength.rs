//! # One-Rep-Max Formulas
//!
//! Estimates of the heaviest single repetition from a submaximal set of
//! `reps` repetitions at weight `w`. Units pass through: the result is in
//! whatever unit `w` was given in.
//!
//! ## Notation
//!
//! - `w` = Weight lifted
//! - `r` = Repetitions completed
//!
//! ## References
//!
//! - Epley, B. (1985). *Poundage Chart*. Boyd Epley Workout.
//! - Brzycki, M. (1993). Strength testing: predicting a one-rep max from
//!   reps-to-fatigue. *JOPERD* 64(1).
//! - Lander, J. (1985). Maximums based on reps. *NSCA Journal* 6.
//! - Lombardi, V.P. (1989). *Beginning Weight Training*.
//! - O'Conner, B. et al. (1989). *Weight Training Today*.
//! - Wathan, D. (1994). Load assignment. *Essentials of Strength Training*.

/// Epley: `w × (1 + r/30)`
#[inline]
pub fn epley(w: f64, r: f64) -> f64 {
    w * (1.0 + r / 30.0)
}

/// Brzycki: `w / (1.0278 − 0.0278·r)`
#[inline]
pub fn brzycki(w: f64, r: f64) -> f64 {
    w / (1.0278 - 0.0278 * r)
}

/// Lander: `100·w / (101.3 − 2.671·r)`
///
/// The McGlothin formula has the same coefficients.
#[inline]
pub fn lander(w: f64, r: f64) -> f64 {
    100.0 * w / (101.3 - 2.671 * r)
}

/// Lombardi: `w × r^0.10`
#[inline]
pub fn lombardi(w: f64, r: f64) -> f64 {
    w * r.powf(0.10)
}

/// O'Conner: `w × (1 + 0.025·r)`
#[inline]
pub fn oconner(w: f64, r: f64) -> f64 {
    w * (1.0 + 0.025 * r)
}

/// Wathan: `100·w / (48.8 + 53.8·e^(−0.075·r))`
#[inline]
pub fn wathan(w: f64, r: f64) -> f64 {
    100.0 * w / (48.8 + 53.8 * (-0.075 * r).exp())
}

/// Percentage of 1RM liftable for `r` reps, from the inverted Lombardi curve
///
/// ```text
/// %1RM = 100 × r^(−0.10)
/// ```
#[inline]
pub fn rep_max_percentage(r: f64) -> f64 {
    100.0 * r.powf(-0.10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epley_reference() {
        assert!((epley(100.0, 10.0) - 133.333).abs() < 0.001);
    }

    #[test]
    fn test_single_rep_is_near_weight() {
        let w = 100.0;
        for f in [epley, brzycki, lander, lombardi, oconner, wathan] {
            let est = f(w, 1.0);
            assert!((est - w).abs() < 4.0, "estimate {} too far from {}", est, w);
        }
        assert_eq!(lombardi(w, 1.0), w);
        assert!((brzycki(w, 1.0) - w).abs() < 1e-9);
    }

    #[test]
    fn test_estimates_grow_with_reps() {
        for f in [epley, brzycki, lander, lombardi, oconner, wathan] {
            assert!(f(100.0, 10.0) > f(100.0, 5.0));
        }
    }

    #[test]
    fn test_rep_max_percentage() {
        assert_eq!(rep_max_percentage(1.0), 100.0);
        assert!((rep_max_percentage(10.0) - 79.433).abs() < 0.001);
    }
}
