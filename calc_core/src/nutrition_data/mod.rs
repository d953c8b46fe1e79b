//! # Nutrition Reference Data
//!
//! Fixed lookup tables used by the nutrition calculators. Tables are
//! immutable statics; nothing here changes at runtime.
//!
//! ## Tables
//!
//! - **Glycemic foods**: GI and carbohydrate density for 30 common foods
//! - **Micronutrient RDAs**: gender-specific daily allowances for 18 nutrients
//!
//! ## Example
//!
//! ```rust
//! use calc_core::nutrition_data::{find_food, Micronutrient};
//! use calc_core::profile::Gender;
//!
//! let rice = find_food("white-rice").unwrap();
//! assert_eq!(rice.glycemic_index, 73.0);
//!
//! assert_eq!(Micronutrient::Iron.rda(Gender::Female), 18.0);
//! ```

pub mod glycemic_foods;
pub mod micronutrient_rda;

pub use glycemic_foods::{find_food, GiBand, GlycemicFood, FOODS};
pub use micronutrient_rda::{Micronutrient, NutrientUnit};
