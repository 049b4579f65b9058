//! Nutrition facts and macronutrient distribution.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts. Macronutrients are in grams, sodium in
/// milligrams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

/// Share of each macronutrient in the combined macro weight, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionFacts {
    /// Computes the macronutrient distribution.
    ///
    /// Every share is zero when the recipe declares no macros at all.
    pub fn macro_split(&self) -> MacroSplit {
        let total = self.protein + self.carbs + self.fats;
        if total <= 0.0 {
            return MacroSplit {
                protein: 0.0,
                carbs: 0.0,
                fats: 0.0,
            };
        }
        MacroSplit {
            protein: self.protein / total * 100.0,
            carbs: self.carbs / total * 100.0,
            fats: self.fats / total * 100.0,
        }
    }

    /// Names of fields holding a negative or non-finite value.
    pub(crate) fn invalid_fields(&self) -> Vec<&'static str> {
        let required = [
            ("calories", Some(self.calories)),
            ("protein", Some(self.protein)),
            ("carbs", Some(self.carbs)),
            ("fats", Some(self.fats)),
            ("sugar", self.sugar),
            ("fiber", self.fiber),
            ("sodium", self.sodium),
        ];
        required
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(v) if !v.is_finite() || v < 0.0 => Some(name),
                _ => None,
            })
            .collect()
    }
}
