//! Parameter structures for recipe operations.
//!
//! These are shared between the interactive form, the search bar and the
//! one-shot CLI commands. Interface layers build them from their own argument
//! types and hand them to [`crate::assistant::RecipeAssistant`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  RecipeForm /   │    │  RecipeRequest  │
//! │  (clap derives) │───▶│  SearchQuery    │───▶│  (core params)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SousError};
use crate::models::Difficulty;

/// Parameters for generating a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// Ingredients the cook has on hand
    pub ingredients: Vec<String>,
    /// Dietary restrictions the recipe must satisfy
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Preferred cuisine
    pub cuisine: Option<String>,
    /// Preferred difficulty
    pub difficulty: Option<Difficulty>,
    /// A recipe name to search for instead of (or alongside) ingredients
    pub search_term: Option<String>,
}

impl RecipeRequest {
    /// Request for a recipe built from the given ingredients.
    pub fn from_ingredients<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Request for a recipe by name.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Checks that the request can be sent.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` when there are no ingredients and no
    /// search term.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sous_core::params::RecipeRequest;
    ///
    /// assert!(RecipeRequest::default().validate().is_err());
    /// assert!(RecipeRequest::search("Lasagna").validate().is_ok());
    /// assert!(RecipeRequest::from_ingredients(["eggs"]).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let has_term = self
            .search_term
            .as_deref()
            .is_some_and(|term| !term.trim().is_empty());
        let has_ingredient = self.ingredients.iter().any(|i| !i.trim().is_empty());
        if !has_term && !has_ingredient {
            return Err(SousError::invalid_input("ingredients")
                .with_reason("Please add at least one ingredient"));
        }
        Ok(())
    }
}
