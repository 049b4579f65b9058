//! Recipe and ingredient models.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CookingStep, Difficulty, NutritionFacts};
use crate::error::{Result, SousError};

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ingredient {
    /// Ingredient name, e.g. "flour"
    pub name: String,

    /// Free-text quantity, e.g. "2" or "a pinch"
    #[serde(default)]
    pub amount: String,

    /// Free-text measurement unit, e.g. "cups"
    #[serde(default)]
    pub unit: String,

    /// Whether the dish works without it
    #[serde(default)]
    pub optional: bool,

    /// Suggested alternatives
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
}

impl Ingredient {
    /// Creates a required ingredient without substitutes.
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
            optional: false,
            substitutes: Vec::new(),
        }
    }

    /// Renders the line as "amount unit name", skipping empty parts.
    pub fn line(&self) -> String {
        [self.amount.as_str(), self.unit.as_str(), self.name.as_str()]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A generated recipe. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Recipe {
    /// Opaque identifier; assigned locally when the generator omits it
    #[serde(default)]
    pub id: String,

    /// Recipe title
    pub title: String,

    /// Short description of the dish
    #[serde(default)]
    pub description: String,

    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,

    /// Ordered cooking steps
    pub steps: Vec<CookingStep>,

    /// Illustration URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Preparation time in minutes
    pub prep_time: u32,

    /// Cooking time in minutes
    pub cook_time: u32,

    /// Number of servings
    pub servings: u32,

    /// Cuisine type, e.g. "Italian"
    #[serde(default)]
    pub cuisine: String,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Free-form tags, unique
    #[serde(default)]
    pub tags: Vec<String>,

    /// Per-serving nutrition facts
    pub nutrition_facts: NutritionFacts,
}

impl Recipe {
    /// Preparation plus cooking time, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Assigns an id when missing and drops duplicate tags, keeping the first
    /// occurrence of each.
    pub fn normalize(&mut self) {
        if self.id.trim().is_empty() {
            self.id = uuid::Uuid::new_v4().to_string();
        }
        let mut seen = Vec::with_capacity(self.tags.len());
        self.tags.retain(|tag| {
            let key = tag.trim().to_lowercase();
            if key.is_empty() || seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        });
    }

    /// Checks the structural rules every recipe must satisfy before it is
    /// shown or cooked.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SousError::invalid_input("title").with_reason("Title cannot be empty"));
        }
        if self.steps.is_empty() {
            return Err(
                SousError::invalid_input("steps").with_reason("Recipe must have at least one step")
            );
        }
        for (index, step) in self.steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.id != expected {
                return Err(SousError::invalid_input("steps").with_reason(format!(
                    "Step at position {expected} has id {}",
                    step.id
                )));
            }
            if step.instruction.trim().is_empty() {
                return Err(SousError::invalid_input("steps")
                    .with_reason(format!("Step {expected} has an empty instruction")));
            }
        }
        if self.servings == 0 {
            return Err(
                SousError::invalid_input("servings").with_reason("Servings must be at least 1")
            );
        }
        if let Some(field) = self.nutrition_facts.invalid_fields().first() {
            return Err(SousError::invalid_input("nutritionFacts")
                .with_reason(format!("'{field}' must be a non-negative number")));
        }
        Ok(())
    }

    /// Loads and validates a recipe from a JSON file.
    pub fn load(path: &Path) -> Result<Recipe> {
        let raw = std::fs::read_to_string(path).map_err(|e| SousError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut recipe: Recipe = serde_json::from_str(&raw)?;
        recipe.normalize();
        recipe.validate()?;
        Ok(recipe)
    }

    /// Writes the recipe as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| SousError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
