//! User-facing recipe operations on top of a [`TextGenerator`].
//!
//! Each operation turns any fetch failure into its empty value plus exactly
//! one error notice, so callers only ever deal with "got it" or "nothing".

use std::sync::Arc;

use log::{error, info};

use crate::client::TextGenerator;
use crate::error::FetchError;
use crate::models::Recipe;
use crate::notice::{Notice, Notifier};
use crate::params::RecipeRequest;
use crate::payload;
use crate::prompts;

/// Returned by [`RecipeAssistant::nutrition_analysis`] when no analysis
/// could be produced.
pub const ANALYSIS_UNAVAILABLE: &str = "Nutritional analysis unavailable";

const GENERATE_FAILED: &str = "Failed to generate recipe. Please try again.";
const SUBSTITUTES_FAILED: &str = "Failed to find substitutes. Please try again.";
const ANALYSIS_FAILED: &str = "Failed to analyze nutrition. Please try again.";

/// Recipe generation, substitutions and nutrition analysis.
pub struct RecipeAssistant {
    generator: Arc<dyn TextGenerator>,
    notifier: Arc<dyn Notifier>,
}

impl RecipeAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            generator,
            notifier,
        }
    }

    /// Generates a recipe for the request. `None` on any failure.
    pub async fn generate_recipe(&self, request: &RecipeRequest) -> Option<Recipe> {
        let result = self
            .generator
            .generate_text(&prompts::recipe_prompt(request))
            .await
            .and_then(|text| payload::parse_recipe(&text));
        match result {
            Ok(recipe) => {
                info!("Generated recipe '{}' ({} steps)", recipe.title, recipe.steps.len());
                self.notifier
                    .notify(Notice::success("Recipe generated successfully!"));
                Some(recipe)
            }
            Err(e) => {
                self.report("Error generating recipe", GENERATE_FAILED, &e);
                None
            }
        }
    }

    /// Three substitutes for `ingredient`. Empty on any failure.
    pub async fn substitutions(&self, ingredient: &str) -> Vec<String> {
        self.generator
            .generate_text(&prompts::substitutions_prompt(ingredient))
            .await
            .and_then(|text| payload::parse_substitutions(&text))
            .unwrap_or_else(|e| {
                self.report("Error getting substitutions", SUBSTITUTES_FAILED, &e);
                Vec::new()
            })
    }

    /// A short prose analysis of the recipe's health benefits, or
    /// [`ANALYSIS_UNAVAILABLE`].
    pub async fn nutrition_analysis(&self, recipe: &Recipe) -> String {
        let result = self
            .generator
            .generate_text(&prompts::nutrition_prompt(recipe))
            .await
            .and_then(|text| {
                let text = text.trim();
                if text.is_empty() {
                    Err(FetchError::unparsable("Analysis text is empty"))
                } else {
                    Ok(text.to_string())
                }
            });
        result.unwrap_or_else(|e| {
            self.report("Error analyzing nutrition", ANALYSIS_FAILED, &e);
            ANALYSIS_UNAVAILABLE.to_string()
        })
    }

    fn report(&self, context: &str, title: &str, e: &FetchError) {
        error!("{context}: {e}");
        self.notifier.notify(Notice::error(title));
    }
}
