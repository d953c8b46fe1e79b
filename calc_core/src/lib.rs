//! # calc_core - Health and Fitness Calculation Engine
//!
//! `calc_core` is the computational heart of FitCalc: body composition,
//! energy expenditure, strength and nutrition calculators with a clean,
//! JSON-friendly API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Fallbacks**: Unknown selections map to documented enum variants
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::bmi::{calculate, BmiInput};
//! use calc_core::units::{Height, Weight};
//!
//! let result = calculate(&BmiInput {
//!     weight: Weight::Kg(70.0),
//!     height: Height::Cm(175.0),
//! })
//! .unwrap();
//!
//! assert_eq!(result.bmi, 22.9);
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - One module per calculator plus the JSON dispatcher
//! - [`macronutrients`] - Macro and calorie planning
//! - [`equations`] - Pure formulas (BMI, BMR, Boer, 1RM)
//! - [`nutrition_data`] - Glycemic food and RDA reference tables
//! - [`profile`] - Gender, activity level and body measurements
//! - [`units`] - Type-safe unit wrappers
//! - [`validation`] - Shared input checks
//! - [`settings`] - Unit system preference
//! - [`catalog`] - Tool cards, category filter and search
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod macronutrients;
pub mod nutrition_data;
pub mod profile;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use profile::{ActivityLevel, AnthropometricInput, Gender};
pub use settings::{Settings, UnitSystem};
