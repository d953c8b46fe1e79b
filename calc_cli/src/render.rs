//! Plain-text rendering of calculation results

use std::fmt::Write;

use calc_core::calculations::CalculationOutput;
use calc_core::catalog::ToolCard;

const RULE: &str = "═══════════════════════════════════════";

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title.to_uppercase());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

/// Render a result for the terminal
pub fn output(title: &str, output: &CalculationOutput) -> String {
    let mut out = String::new();
    header(&mut out, title);

    match output {
        CalculationOutput::Bmi(r) => {
            let unit = r.weight_unit.label();
            let _ = writeln!(out, "  BMI:       {:.1}", r.bmi);
            let _ = writeln!(out, "  Category:  {}", r.category.label());
            let _ = writeln!(
                out,
                "  Healthy:   {:.1} - {:.1} {}",
                r.healthy_weight_min, r.healthy_weight_max, unit
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}", r.recommendation);
        }
        CalculationOutput::Bmr(r) => {
            let _ = writeln!(out, "  BMR:  {} kcal/day", r.bmr_rounded());
            if let Some(tdee) = r.tdee {
                let _ = writeln!(out, "  TDEE: {} kcal/day", tdee);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "  Activity level        Calories");
            for row in &r.activity_table {
                let _ = writeln!(
                    out,
                    "  {:<20}  {:>8}",
                    row.activity_level.display_name(),
                    row.calories
                );
            }
        }
        CalculationOutput::DailyCalories(r) => {
            let _ = writeln!(out, "  BMR:          {:.0} kcal/day", r.bmr);
            let _ = writeln!(out, "  Maintenance:  {} kcal/day", r.maintenance);
            let _ = writeln!(out, "  Weight loss:  {} kcal/day", r.weight_loss);
            let _ = writeln!(out, "  Weight gain:  {} kcal/day", r.weight_gain);
        }
        CalculationOutput::LeanBodyMass(r) => {
            let unit = r.weight_unit.label();
            let _ = writeln!(out, "  Lean body mass: {:.1} {}", r.lean_body_mass, unit);
            let _ = writeln!(out, "  Fat mass:       {:.1} {}", r.fat_mass, unit);
            let _ = writeln!(out, "  Body fat:       {:.1} %", r.body_fat_percent);
        }
        CalculationOutput::HeartRate(r) => {
            let _ = writeln!(out, "  Max heart rate: {} bpm", r.max_heart_rate);
            let _ = writeln!(out);
            for z in &r.zones {
                let _ = writeln!(
                    out,
                    "  {:<10} {:>3} - {:>3} bpm",
                    z.zone.display_name(),
                    z.min_bpm,
                    z.max_bpm
                );
            }
        }
        CalculationOutput::OneRepMax(r) => {
            let _ = writeln!(
                out,
                "  1RM ({}): {:.1}",
                r.formula.display_name(),
                r.one_rep_max
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "  Reps   %1RM   Weight");
            for row in &r.rep_max_table {
                let _ = writeln!(
                    out,
                    "  {:>4}  {:>5.1}  {:>7.1}",
                    row.reps, row.percentage, row.estimated_weight
                );
            }
        }
        CalculationOutput::Macros(r) => {
            let _ = writeln!(out, "  Daily calories: {:.0} kcal", r.daily_calories);
            if let Some(bmr) = r.bmr {
                let _ = writeln!(out, "  BMR:            {:.0} kcal", bmr);
            }
            let _ = writeln!(out, "  Goal / diet:    {} / {}", r.goal, r.diet);
            let _ = writeln!(out, "  Ratio P/C/F:    {}", r.ratio);
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "  Protein {} g ({} kcal)  Carbs {} g ({} kcal)  Fats {} g ({} kcal)",
                r.grams.protein,
                r.calories.protein,
                r.grams.carbs,
                r.calories.carbs,
                r.grams.fats,
                r.calories.fats
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "  Meal        Protein  Carbs  Fats");
            for (name, g) in r.meal_plan.meals() {
                let _ = writeln!(
                    out,
                    "  {:<10} {:>7}  {:>5}  {:>4}",
                    name, g.protein, g.carbs, g.fats
                );
            }
            let _ = writeln!(out);
            bullets(&mut out, &r.recommendations);
        }
        CalculationOutput::Micronutrients(r) => {
            let _ = writeln!(out, "  Score: {:.1} ({})", r.overall_score, r.summary);
            let _ = writeln!(out);
            for n in &r.nutrients {
                let _ = writeln!(
                    out,
                    "  {:<12} {:>8.1} {:<3} {:>6.1} %  {}",
                    n.nutrient.display_name(),
                    n.intake,
                    n.unit.label(),
                    n.percent,
                    n.status.label()
                );
            }
            if !r.recommendations.is_empty() {
                let _ = writeln!(out);
                bullets(&mut out, &r.recommendations);
            }
        }
        CalculationOutput::GlycemicLoad(r) => {
            for item in &r.items {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>6.0} g  GI {:>3.0}  carbs {:>5.1} g  GL {:>5.2}",
                    item.name, item.amount_g, item.glycemic_index, item.carbs, item.glycemic_load
                );
            }
            let t = &r.totals;
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "  Total GL: {:.2} ({})",
                t.total_glycemic_load,
                t.category.label()
            );
            let _ = writeln!(out, "  Carbs:    {:.1} g", t.total_carbs);
            match t.average_gi {
                Some(gi) => {
                    let _ = writeln!(out, "  Avg GI:   {:.0}", gi);
                }
                None => {
                    let _ = writeln!(out, "  Avg GI:   n/a");
                }
            }
        }
        CalculationOutput::PreWorkout(r) => {
            let _ = writeln!(out, "  Carbs:    {} g", r.carbs);
            let _ = writeln!(out, "  Protein:  {} g", r.protein);
            let _ = writeln!(out, "  Calories: {} kcal", r.calories);
            if let Some(timing) = &r.timing {
                let _ = writeln!(out);
                let _ = writeln!(out, "  {}", timing);
            }
        }
        CalculationOutput::PostWorkout(r) => {
            let _ = writeln!(out, "  Protein:      {} g", r.protein);
            let _ = writeln!(out, "  Carbs:        {} g", r.carbs);
            let _ = writeln!(out, "  Calories:     {} kcal", r.calories);
            let _ = writeln!(out, "  Fluid loss:   {} ml", r.fluid_loss_ml);
            let _ = writeln!(out, "  Rehydrate:    {} ml", r.rehydration_ml);
        }
    }

    out
}

/// Render a list of tool cards
pub fn tools(cards: &[&ToolCard]) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        let _ = writeln!(out, "No tools found.");
        return out;
    }
    for card in cards {
        let _ = writeln!(out, "{:<16} [{}] {}", card.slug, card.category, card.title);
        let _ = writeln!(out, "{:<16} {}", "", card.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::HeartRateInput;
    use calc_core::CalculationItem;

    #[test]
    fn test_heart_rate_text() {
        let item = CalculationItem::HeartRate(HeartRateInput { age: 30 });
        let text = output(item.label(), &item.run().unwrap());
        assert!(text.contains("HEART RATE ZONE CALCULATOR"));
        assert!(text.contains("Max heart rate: 190 bpm"));
        assert!(text.contains("Warm-up"));
    }

    #[test]
    fn test_empty_tool_list() {
        assert_eq!(tools(&[]), "No tools found.\n");
    }
}
