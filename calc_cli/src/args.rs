//! Command-line arguments and their conversion into calculation items

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

use calc_core::calculations::glycemic_load::FoodPortion;
use calc_core::calculations::one_rep_max::OneRepMaxFormula;
use calc_core::calculations::workout_nutrition::{Intensity, WorkoutType};
use calc_core::calculations::{
    BmiInput, BmrInput, DailyCaloriesInput, GlycemicLoadInput, HeartRateInput, LeanBodyMassInput,
    MicronutrientInput, OneRepMaxInput, PostWorkoutInput, PreWorkoutInput,
};
use calc_core::macronutrients::{CalorieTarget, DietPreference, FitnessGoal, MacroInput, MacroRatio};
use calc_core::nutrition_data::Micronutrient;
use calc_core::{ActivityLevel, AnthropometricInput, CalculationItem, Gender, Settings, UnitSystem};

#[derive(Parser)]
#[command(
    name = "calc_cli",
    version,
    about = "FitCalc health and fitness calculators",
    long_about = "Body composition, energy, strength and nutrition calculators. \
                  Results print as text or JSON; logs go to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// How bare --weight/--height numbers are read (metric: kg/cm, imperial: lb/ft)
    #[arg(long, global = true, env = "FITCALC_UNITS", default_value = "metric", value_parser = parse_units)]
    pub units: UnitSystem,

    /// Output format
    #[arg(long, global = true, env = "FITCALC_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for calc_core and calc_cli (overrides RUST_LOG)
    #[arg(long, global = true, env = "FITCALC_LOG")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings { units: self.units }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalorieMethod {
    Tdee,
    Manual,
}

#[derive(Subcommand)]
pub enum Command {
    /// Body Mass Index
    Bmi(MeasureArgs),

    /// Basal metabolic rate (Mifflin-St Jeor)
    Bmr {
        #[command(flatten)]
        body: BodyArgs,
        /// sedentary, light, moderate, active, very-active
        #[arg(long, value_parser = parse_activity)]
        activity: Option<ActivityLevel>,
    },

    /// Daily calorie needs (Harris-Benedict)
    Calories {
        #[command(flatten)]
        body: BodyArgs,
        #[arg(long, value_parser = parse_activity)]
        activity: Option<ActivityLevel>,
    },

    /// Lean body mass and body fat (Boer)
    Lbm {
        #[command(flatten)]
        measure: MeasureArgs,
        #[arg(long, value_parser = parse_key::<Gender>)]
        gender: Option<Gender>,
    },

    /// Heart rate training zones
    HeartRate {
        #[arg(long)]
        age: u32,
    },

    /// One-rep max estimate and rep-max table
    OneRepMax {
        /// Weight lifted (any unit)
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        reps: u32,
        /// epley, brzycki, lander, mcglothin, lombardi, okane, wathan
        #[arg(long, value_parser = parse_formula)]
        formula: Option<OneRepMaxFormula>,
    },

    /// Macronutrient plan
    Macros(MacroArgs),

    /// Micronutrient sufficiency score
    Micronutrients {
        #[arg(long, value_parser = parse_key::<Gender>)]
        gender: Option<Gender>,
        /// Intake as nutrient=amount, e.g. iron=12 (repeatable)
        #[arg(long = "intake", value_name = "NUTRIENT=AMOUNT")]
        intakes: Vec<String>,
    },

    /// Glycemic load of a meal
    Glycemic {
        /// Portion as food=grams, e.g. white-rice=150 (repeatable)
        #[arg(long = "food", value_name = "FOOD=GRAMS")]
        foods: Vec<String>,
    },

    /// Pre-workout carbohydrate and protein
    PreWorkout {
        #[arg(long)]
        weight: f64,
        #[arg(long = "type", value_parser = parse_key::<WorkoutType>, default_value = "general")]
        workout_type: WorkoutType,
        /// low, moderate, high, very-high
        #[arg(long, value_parser = parse_key::<Intensity>, default_value = "moderate")]
        intensity: Intensity,
        /// Minutes between eating and training
        #[arg(long)]
        minutes_before: Option<u32>,
    },

    /// Post-workout recovery nutrition
    PostWorkout {
        #[arg(long)]
        weight: f64,
        #[arg(long = "type", value_parser = parse_key::<WorkoutType>, default_value = "general")]
        workout_type: WorkoutType,
        /// 1 (easy) to 10 (maximal)
        #[arg(long)]
        intensity: f64,
        /// Session length in minutes
        #[arg(long)]
        duration: f64,
    },

    /// List calculators, optionally filtered by category or search text
    Tools {
        /// body-composition, nutrition, strength, cardio or all
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },

    /// Run a JSON calculation item from a file, or stdin when omitted
    Run {
        file: Option<PathBuf>,
    },
}

/// Weight and height in the configured unit system
#[derive(Args)]
pub struct MeasureArgs {
    /// Body weight (kg or lb)
    #[arg(long)]
    pub weight: f64,
    /// Height (cm, or feet with --inches)
    #[arg(long)]
    pub height: f64,
    /// Extra inches for imperial height
    #[arg(long, default_value_t = 0.0)]
    pub inches: f64,
}

/// Full body measurements
#[derive(Args)]
pub struct BodyArgs {
    #[command(flatten)]
    pub measure: MeasureArgs,
    #[arg(long)]
    pub age: u32,
    /// male or female
    #[arg(long, value_parser = parse_key::<Gender>)]
    pub gender: Option<Gender>,
}

#[derive(Args)]
pub struct MacroArgs {
    /// tdee (compute from body) or manual (use --calories)
    #[arg(long, value_enum)]
    pub method: Option<CalorieMethod>,

    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    pub inches: f64,
    #[arg(long)]
    pub age: Option<u32>,
    #[arg(long, value_parser = parse_key::<Gender>)]
    pub gender: Option<Gender>,
    #[arg(long, value_parser = parse_activity)]
    pub activity: Option<ActivityLevel>,

    /// Daily calories for the manual method
    #[arg(long)]
    pub calories: Option<f64>,

    /// lose-weight, maintain, gain-muscle, gain-strength, endurance, ketogenic, custom
    #[arg(long, value_parser = parse_key::<FitnessGoal>)]
    pub goal: Option<FitnessGoal>,
    /// Custom protein percent
    #[arg(long)]
    pub protein: Option<f64>,
    /// Custom carbohydrate percent
    #[arg(long)]
    pub carbs: Option<f64>,
    /// Custom fat percent
    #[arg(long)]
    pub fats: Option<f64>,

    /// standard, low-carb, high-carb, low-fat, high-fat, vegetarian, vegan
    #[arg(long, value_parser = parse_key::<DietPreference>, default_value = "standard")]
    pub diet: DietPreference,
}

// ============================================================================
// Value parsers
// ============================================================================

fn parse_units(s: &str) -> std::result::Result<UnitSystem, String> {
    UnitSystem::from_str_flexible(s).ok_or_else(|| format!("unknown unit system '{}'", s))
}

fn parse_activity(s: &str) -> std::result::Result<ActivityLevel, String> {
    ActivityLevel::from_str_flexible(s).ok_or_else(|| format!("unknown activity level '{}'", s))
}

fn parse_formula(s: &str) -> std::result::Result<OneRepMaxFormula, String> {
    Ok(OneRepMaxFormula::from_str_flexible(s))
}

/// Parse a selection key the same way JSON input would
pub fn parse_key<T: DeserializeOwned>(s: &str) -> std::result::Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.trim().to_lowercase()))
        .map_err(|_| format!("unknown value '{}'", s))
}

fn split_pair(s: &str) -> Result<(&str, f64)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=AMOUNT, got '{}'", s))?;
    let amount = value
        .trim()
        .parse()
        .with_context(|| format!("invalid amount in '{}'", s))?;
    Ok((key.trim(), amount))
}

// ============================================================================
// Item construction
// ============================================================================

impl MeasureArgs {
    fn body(&self, units: UnitSystem, age: u32, gender: Option<Gender>) -> AnthropometricInput {
        AnthropometricInput {
            weight: units.weight(self.weight),
            height: units.height(self.height, self.inches),
            age,
            gender,
        }
    }
}

impl BodyArgs {
    fn to_input(&self, units: UnitSystem) -> AnthropometricInput {
        self.measure.body(units, self.age, self.gender)
    }
}

impl MacroArgs {
    fn to_input(&self, units: UnitSystem) -> Result<MacroInput> {
        let calorie_target = match self.method {
            None => None,
            Some(CalorieMethod::Manual) => Some(CalorieTarget::Manual {
                daily_calories: self
                    .calories
                    .context("--calories is required for the manual method")?,
            }),
            Some(CalorieMethod::Tdee) => {
                let (Some(weight), Some(height), Some(age)) = (self.weight, self.height, self.age)
                else {
                    bail!("--weight, --height and --age are required for the tdee method");
                };
                Some(CalorieTarget::Tdee {
                    body: AnthropometricInput {
                        weight: units.weight(weight),
                        height: units.height(height, self.inches),
                        age,
                        gender: self.gender,
                    },
                    activity_level: self.activity,
                })
            }
        };

        let custom_ratio = match (self.protein, self.carbs, self.fats) {
            (Some(p), Some(c), Some(f)) => Some(MacroRatio::new(p, c, f)),
            (None, None, None) => None,
            _ => bail!("--protein, --carbs and --fats must be given together"),
        };

        Ok(MacroInput {
            calorie_target,
            goal: self.goal,
            custom_ratio,
            diet: self.diet,
        })
    }
}

impl Command {
    /// Build the calculation item for a calculator subcommand.
    ///
    /// Returns `None` for `tools` and `run`, which are handled separately.
    pub fn to_item(&self, settings: &Settings) -> Result<Option<CalculationItem>> {
        let units = settings.units;
        let item = match self {
            Command::Bmi(m) => CalculationItem::Bmi(BmiInput {
                weight: units.weight(m.weight),
                height: units.height(m.height, m.inches),
            }),
            Command::Bmr { body, activity } => CalculationItem::Bmr(BmrInput {
                body: body.to_input(units),
                activity_level: *activity,
            }),
            Command::Calories { body, activity } => {
                CalculationItem::DailyCalories(DailyCaloriesInput {
                    body: body.to_input(units),
                    activity_level: *activity,
                })
            }
            Command::Lbm { measure, gender } => CalculationItem::LeanBodyMass(LeanBodyMassInput {
                weight: units.weight(measure.weight),
                height: units.height(measure.height, measure.inches),
                gender: *gender,
            }),
            Command::HeartRate { age } => CalculationItem::HeartRate(HeartRateInput { age: *age }),
            Command::OneRepMax {
                weight,
                reps,
                formula,
            } => CalculationItem::OneRepMax(OneRepMaxInput {
                weight: *weight,
                reps: *reps,
                formula: *formula,
            }),
            Command::Macros(args) => CalculationItem::Macros(args.to_input(units)?),
            Command::Micronutrients { gender, intakes } => {
                let mut map = std::collections::BTreeMap::new();
                for pair in intakes {
                    let (key, amount) = split_pair(pair)?;
                    let nutrient: Micronutrient = parse_key(&key.replace('-', "_"))
                        .map_err(|e| anyhow!("{} (nutrient)", e))?;
                    map.insert(nutrient, amount);
                }
                CalculationItem::Micronutrients(MicronutrientInput {
                    gender: *gender,
                    intakes: map,
                })
            }
            Command::Glycemic { foods } => {
                let items = foods
                    .iter()
                    .map(|pair| {
                        split_pair(pair).map(|(food, amount_g)| FoodPortion {
                            food: Some(food.to_string()),
                            amount_g,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                CalculationItem::GlycemicLoad(GlycemicLoadInput { items })
            }
            Command::PreWorkout {
                weight,
                workout_type,
                intensity,
                minutes_before,
            } => CalculationItem::PreWorkout(PreWorkoutInput {
                body_weight: units.weight(*weight),
                workout_type: Some(*workout_type),
                intensity: Some(*intensity),
                minutes_before: *minutes_before,
            }),
            Command::PostWorkout {
                weight,
                workout_type,
                intensity,
                duration,
            } => CalculationItem::PostWorkout(PostWorkoutInput {
                body_weight: units.weight(*weight),
                workout_type: Some(*workout_type),
                intensity: Some(*intensity),
                duration_min: *duration,
            }),
            Command::Tools { .. } | Command::Run { .. } => return Ok(None),
        };
        Ok(Some(item))
    }
}
