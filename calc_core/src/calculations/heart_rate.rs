//! # Heart Rate Zones
//!
//! Training zones as fractions of the age-predicted maximum heart rate
//! (220 − age).

use serde::{Deserialize, Serialize};

use crate::equations;
use crate::errors::CalcResult;
use crate::validation::{self, BodyLimits};

/// A named training zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeartRateZoneKind {
    /// 50-60 % of max
    WarmUp,
    /// 60-70 % of max
    FatBurn,
    /// 70-80 % of max
    Cardio,
    /// 80-90 % of max
    Peak,
}

impl HeartRateZoneKind {
    /// All zones, easiest first
    pub const ALL: [HeartRateZoneKind; 4] = [
        HeartRateZoneKind::WarmUp,
        HeartRateZoneKind::FatBurn,
        HeartRateZoneKind::Cardio,
        HeartRateZoneKind::Peak,
    ];

    /// Fractions of max heart rate bounding this zone
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            HeartRateZoneKind::WarmUp => (0.5, 0.6),
            HeartRateZoneKind::FatBurn => (0.6, 0.7),
            HeartRateZoneKind::Cardio => (0.7, 0.8),
            HeartRateZoneKind::Peak => (0.8, 0.9),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HeartRateZoneKind::WarmUp => "Warm-up",
            HeartRateZoneKind::FatBurn => "Fat burn",
            HeartRateZoneKind::Cardio => "Cardio",
            HeartRateZoneKind::Peak => "Peak",
        }
    }
}

/// Input for the heart rate zone calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateInput {
    pub age: u32,
}

/// One zone with rounded bpm bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    pub zone: HeartRateZoneKind,
    pub min_bpm: u32,
    pub max_bpm: u32,
}

/// Results from the heart rate zone calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateResult {
    pub max_heart_rate: u32,
    pub zones: Vec<HeartRateZone>,
}

/// Calculate heart rate training zones.
pub fn calculate(input: &HeartRateInput) -> CalcResult<HeartRateResult> {
    let age = validation::age(input.age, &BodyLimits::STANDARD)?;
    let max = equations::max_heart_rate(age);
    let bpm = |fraction: f64| (max as f64 * fraction).round() as u32;

    let zones = HeartRateZoneKind::ALL
        .iter()
        .map(|&zone| {
            let (lo, hi) = zone.bounds();
            HeartRateZone {
                zone,
                min_bpm: bpm(lo),
                max_bpm: bpm(hi),
            }
        })
        .collect();

    tracing::debug!(age, max, "Heart rate zones calculated");

    Ok(HeartRateResult {
        max_heart_rate: max,
        zones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones_for_age_30() {
        let result = calculate(&HeartRateInput { age: 30 }).unwrap();
        assert_eq!(result.max_heart_rate, 190);
        let bounds: Vec<(u32, u32)> = result.zones.iter().map(|z| (z.min_bpm, z.max_bpm)).collect();
        assert_eq!(bounds, vec![(95, 114), (114, 133), (133, 152), (152, 171)]);
    }

    #[test]
    fn test_rounding() {
        // max 187: 93.5 -> 94, 112.2 -> 112
        let result = calculate(&HeartRateInput { age: 33 }).unwrap();
        assert_eq!(result.zones[0].min_bpm, 94);
        assert_eq!(result.zones[0].max_bpm, 112);
    }

    #[test]
    fn test_age_validated() {
        assert!(calculate(&HeartRateInput { age: 10 }).is_err());
    }
}
