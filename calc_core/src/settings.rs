//! # Settings
//!
//! Caller preferences that affect how bare numbers are interpreted. There is
//! no settings file; front ends fill [`Settings`] from flags or environment.

use serde::{Deserialize, Serialize};

use crate::units::{Height, Weight};

/// Measurement system for weight and height entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds, feet and inches
    Imperial,
}

impl UnitSystem {
    /// Interpret a bare weight number in this system
    pub fn weight(&self, value: f64) -> Weight {
        match self {
            UnitSystem::Metric => Weight::Kg(value),
            UnitSystem::Imperial => Weight::Lb(value),
        }
    }

    /// Interpret a bare height in this system.
    ///
    /// Metric reads `primary` as centimeters and ignores `inches`; imperial
    /// reads `primary` as feet plus the separate inches field.
    pub fn height(&self, primary: f64, inches: f64) -> Height {
        match self {
            UnitSystem::Metric => Height::Cm(primary),
            UnitSystem::Imperial => Height::FeetInches {
                feet: primary,
                inches,
            },
        }
    }

    /// Weight unit label ("kg" or "lb")
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" | "kg" => Some(UnitSystem::Metric),
            "imperial" | "us" | "lb" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

/// Global calculator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// How bare weight/height numbers are read
    pub units: UnitSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_metric() {
        assert_eq!(Settings::default().units, UnitSystem::Metric);
    }

    #[test]
    fn test_imperial_interpretation() {
        let units = UnitSystem::Imperial;
        assert_eq!(units.weight(150.0), Weight::Lb(150.0));
        assert_eq!(
            units.height(5.0, 10.0),
            Height::FeetInches { feet: 5.0, inches: 10.0 }
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(UnitSystem::from_str_flexible("Imperial"), Some(UnitSystem::Imperial));
        assert_eq!(UnitSystem::from_str_flexible("parsecs"), None);
    }
}
