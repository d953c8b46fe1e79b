//! End-to-end scenarios driven through JSON calculation items.

use calc_core::calculations::{BmiCategory, CalculationOutput};
use calc_core::errors::ErrorCategory;
use calc_core::{CalcError, CalculationItem};

fn run(json: &str) -> Result<CalculationOutput, CalcError> {
    CalculationItem::from_json(json)?.run()
}

#[test]
fn macro_plan_tdee_scenario() {
    let json = r#"{
        "type": "macros",
        "calorie_target": {
            "method": "tdee",
            "body": {
                "weight": { "kg": 80.0 },
                "height": { "cm": 180.0 },
                "age": 30,
                "gender": "male"
            },
            "activity_level": "moderate"
        },
        "goal": "maintain",
        "diet": "standard"
    }"#;

    let CalculationOutput::Macros(plan) = run(json).unwrap() else {
        panic!("expected macro output");
    };

    let bmr = plan.bmr.unwrap();
    assert!((bmr - 1853.632).abs() < 1e-6, "bmr = {}", bmr);
    assert_eq!(plan.daily_calories, 2873.0);
    assert_eq!((plan.ratio.protein, plan.ratio.carbs, plan.ratio.fats), (30.0, 40.0, 30.0));
    assert_eq!(
        (plan.grams.protein, plan.grams.carbs, plan.grams.fats),
        (215, 287, 96)
    );

    let meal_total: u32 = plan.meal_plan.meals().iter().map(|(_, m)| m.protein).sum();
    assert_eq!(meal_total, 215);
}

#[test]
fn macro_plan_manual_2759() {
    let json = r#"{
        "type": "macros",
        "calorie_target": { "method": "manual", "daily_calories": 2759 },
        "goal": "maintain"
    }"#;

    let CalculationOutput::Macros(plan) = run(json).unwrap() else {
        panic!("expected macro output");
    };
    assert_eq!(
        (plan.grams.protein, plan.grams.carbs, plan.grams.fats),
        (207, 276, 92)
    );
}

#[test]
fn imperial_macro_plan_matches_metric() {
    let json = r#"{
        "type": "macros",
        "calorie_target": {
            "method": "tdee",
            "body": {
                "weight": { "lb": 176.3699 },
                "height": { "decimal_feet": 5.905512 },
                "age": 30,
                "gender": "male"
            },
            "activity_level": "moderate"
        },
        "goal": "maintain"
    }"#;

    let CalculationOutput::Macros(plan) = run(json).unwrap() else {
        panic!("expected macro output");
    };
    assert_eq!(plan.daily_calories, 2873.0);
}

#[test]
fn custom_goal_rejects_bad_sum() {
    let json = r#"{
        "type": "macros",
        "calorie_target": { "method": "manual", "daily_calories": 2000 },
        "goal": "custom",
        "custom_ratio": { "protein": 30.0, "carbs": 40.0, "fats": 25.0 }
    }"#;

    let err = run(json).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvariantViolation);
    assert!(err.is_recoverable());
}

#[test]
fn bmi_boundaries() {
    // 18.5 exactly at 2 m
    let bmi = |kg: f64| {
        let json = format!(
            r#"{{"type":"bmi","weight":{{"kg":{}}},"height":{{"cm":200.0}}}}"#,
            kg
        );
        match run(&json).unwrap() {
            CalculationOutput::Bmi(r) => r.category,
            other => panic!("unexpected {:?}", other),
        }
    };
    assert_eq!(bmi(74.0), BmiCategory::NormalWeight);
    assert_eq!(bmi(99.996), BmiCategory::NormalWeight);
    assert_eq!(bmi(100.0), BmiCategory::Overweight);
    assert_eq!(bmi(73.9), BmiCategory::Underweight);
}

#[test]
fn mifflin_sex_offset_through_json() {
    let bmr = |gender: &str| {
        let json = format!(
            r#"{{"type":"bmr","body":{{"weight":{{"kg":65.0}},"height":{{"cm":170.0}},"age":40,"gender":"{}"}}}}"#,
            gender
        );
        match run(&json).unwrap() {
            CalculationOutput::Bmr(r) => r.bmr,
            other => panic!("unexpected {:?}", other),
        }
    };
    assert!((bmr("male") - bmr("female") - 166.0).abs() < 1e-9);
}

#[test]
fn one_rep_max_fallback_and_table() {
    let CalculationOutput::OneRepMax(r) =
        run(r#"{"type":"one-rep-max","weight":100.0,"reps":10,"formula":"epley"}"#).unwrap()
    else {
        panic!("expected 1RM output");
    };
    assert_eq!(r.one_rep_max, 133.3);
    assert_eq!(r.rep_max_table.len(), 12);

    let CalculationOutput::OneRepMax(r) =
        run(r#"{"type":"one-rep-max","weight":100.0,"reps":10,"formula":"unknown"}"#).unwrap()
    else {
        panic!("expected 1RM output");
    };
    assert_eq!(r.one_rep_max, 0.0);
}

#[test]
fn glycemic_meal() {
    let json = r#"{
        "type": "glycemic-load",
        "items": [{ "food": "white-rice", "amount_g": 150.0 }]
    }"#;
    let CalculationOutput::GlycemicLoad(r) = run(json).unwrap() else {
        panic!("expected glycemic output");
    };
    assert_eq!(r.totals.total_carbs, 42.0);
    assert_eq!(r.totals.total_glycemic_load, 30.66);
}

#[test]
fn micronutrient_score() {
    let json = r#"{
        "type": "micronutrients",
        "gender": "male",
        "intakes": { "vitamin_c": 90.0, "iron": 4.0, "zinc": 0.0 }
    }"#;
    let CalculationOutput::Micronutrients(r) = run(json).unwrap() else {
        panic!("expected micronutrient output");
    };
    assert_eq!(r.nutrients.len(), 2);
    assert_eq!(r.overall_score, 75.0);
}

#[test]
fn validation_errors_are_structured() {
    let missing_gender = run(
        r#"{"type":"lean-body-mass","weight":{"kg":80.0},"height":{"cm":180.0}}"#,
    )
    .unwrap_err();
    assert_eq!(missing_gender, CalcError::missing_selection("gender"));

    let too_short = run(r#"{"type":"bmi","weight":{"kg":80.0},"height":{"cm":40.0}}"#).unwrap_err();
    assert_eq!(too_short.category(), ErrorCategory::OutOfRange);
    assert_eq!(too_short.field(), Some("height_cm"));

    let json = serde_json::to_value(&too_short).unwrap();
    assert_eq!(json["type"], "OutOfRange");
    assert_eq!(json["details"]["field"], "height_cm");
}

#[test]
fn heart_rate_and_workouts() {
    let CalculationOutput::HeartRate(hr) = run(r#"{"type":"heart-rate","age":30}"#).unwrap() else {
        panic!("expected heart rate output");
    };
    assert_eq!(hr.max_heart_rate, 190);

    let CalculationOutput::PostWorkout(post) = run(
        r#"{"type":"post-workout","body_weight":{"kg":80.0},"workout_type":"strength","intensity":5,"duration_min":60}"#,
    )
    .unwrap() else {
        panic!("expected post-workout output");
    };
    assert_eq!(post.rehydration_ml, 1350);
}

#[test]
fn huge_body_weight_does_not_overflow() {
    let CalculationOutput::PreWorkout(pre) = run(
        r#"{"type":"pre-workout","body_weight":{"kg":1e12},"workout_type":"endurance","intensity":"high"}"#,
    )
    .unwrap() else {
        panic!("expected pre-workout output");
    };
    assert_eq!(pre.calories, u32::MAX);

    let CalculationOutput::DailyCalories(daily) = run(
        r#"{"type":"daily-calories","body":{"weight":{"kg":1e12},"height":{"cm":180.0},"age":30,"gender":"male"},"activity_level":"moderate"}"#,
    )
    .unwrap() else {
        panic!("expected daily calorie output");
    };
    assert_eq!(daily.weight_gain, u32::MAX);
}

#[test]
fn workout_selections_missing_from_json() {
    let err = run(r#"{"type":"pre-workout","body_weight":{"kg":70.0},"intensity":"high"}"#)
        .unwrap_err();
    assert_eq!(err, CalcError::missing_selection("workout_type"));
    assert_eq!(err.category(), ErrorCategory::MissingSelection);

    let err = run(
        r#"{"type":"post-workout","body_weight":{"kg":70.0},"workout_type":"hiit","duration_min":45}"#,
    )
    .unwrap_err();
    assert_eq!(err, CalcError::missing_selection("intensity"));
}
