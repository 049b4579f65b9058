//! Nutrition facts display.

use std::fmt;

use super::progress::ProgressBar;
use crate::models::NutritionFacts;

/// Calories plus one bar per macronutrient showing its share of the combined
/// macro weight.
pub struct NutritionBars<'a>(pub &'a NutritionFacts);

impl fmt::Display for NutritionBars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facts = self.0;
        let split = facts.macro_split();

        writeln!(f, "- Calories: {} kcal", facts.calories.round())?;
        writeln!(f)?;
        writeln!(f, "### Macronutrients")?;
        writeln!(f)?;
        for (label, grams, share) in [
            ("Protein", facts.protein, split.protein),
            ("Carbohydrates", facts.carbs, split.carbs),
            ("Fats", facts.fats, split.fats),
        ] {
            writeln!(
                f,
                "- {label}: {grams}g ({}%) `{}`",
                share.round(),
                ProgressBar::new(share)
            )?;
        }

        let extras: Vec<String> = [
            ("Sugar", facts.sugar, "g"),
            ("Fiber", facts.fiber, "g"),
            ("Sodium", facts.sodium, "mg"),
        ]
        .into_iter()
        .filter_map(|(label, value, unit)| value.map(|v| format!("- {label}: {v}{unit}")))
        .collect();
        if !extras.is_empty() {
            writeln!(f)?;
            for line in extras {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
