//! The recipe generator form.
//!
//! [`RecipeForm`] collects ingredients and preferences one edit at a time and
//! turns them into a [`RecipeRequest`]. Edits never fail; the only rejection
//! happens when the form is submitted without anything to cook from.

use log::debug;

use crate::error::Result;
use crate::models::Difficulty;
use crate::params::RecipeRequest;

/// Dietary restrictions offered by the form.
pub const DIETARY_OPTIONS: [&str; 7] = [
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
    "Low-Carb",
    "Paleo",
];

/// Cuisines offered by the form.
pub const CUISINE_OPTIONS: [&str; 7] = [
    "Italian",
    "Mexican",
    "Asian",
    "Mediterranean",
    "Indian",
    "American",
    "French",
];

/// Editable state of the generator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    ingredients: Vec<String>,
    dietary: Vec<String>,
    cuisine: Option<String>,
    difficulty: Option<Difficulty>,
    search_term: Option<String>,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient. Blank input and exact duplicates are ignored.
    /// Returns whether the list changed.
    pub fn add_ingredient(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() || self.ingredients.iter().any(|i| i == ingredient) {
            return false;
        }
        debug!("Added ingredient {ingredient}");
        self.ingredients.push(ingredient.to_string());
        true
    }

    /// Removes an ingredient. Returns whether it was present.
    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i != ingredient.trim());
        self.ingredients.len() != before
    }

    /// Selects or deselects a dietary option. Returns whether the option is
    /// selected afterwards.
    pub fn toggle_dietary(&mut self, option: &str) -> bool {
        let option = canonical(&DIETARY_OPTIONS, option);
        if let Some(position) = self.dietary.iter().position(|d| *d == option) {
            self.dietary.remove(position);
            false
        } else {
            self.dietary.push(option);
            true
        }
    }

    /// Sets the cuisine, or clears it when `cuisine` is blank.
    pub fn set_cuisine(&mut self, cuisine: &str) {
        let cuisine = cuisine.trim();
        self.cuisine = (!cuisine.is_empty()).then(|| canonical(&CUISINE_OPTIONS, cuisine));
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// Sets the recipe name to search for, or clears it when blank.
    pub fn set_search_term(&mut self, term: &str) {
        let term = term.trim();
        self.search_term = (!term.is_empty()).then(|| term.to_string());
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn dietary(&self) -> &[String] {
        &self.dietary
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Builds the request to send.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` ("Please add at least one
    /// ingredient") when the ingredient list is empty and no search term is
    /// set.
    pub fn to_request(&self) -> Result<RecipeRequest> {
        let request = RecipeRequest {
            ingredients: self.ingredients.clone(),
            dietary: self.dietary.clone(),
            cuisine: self.cuisine.clone(),
            difficulty: self.difficulty,
            search_term: self.search_term.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Maps user input onto the listed spelling when it matches one
/// case-insensitively; otherwise keeps the trimmed input.
fn canonical(options: &[&str], input: &str) -> String {
    let input = input.trim();
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(input))
        .map_or_else(|| input.to_string(), |option| (*option).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ingredient_trims_and_dedupes() {
        let mut form = RecipeForm::new();
        assert!(form.add_ingredient("  chicken "));
        assert!(!form.add_ingredient("chicken"));
        assert!(!form.add_ingredient("   "));
        assert!(form.add_ingredient("rice"));
        assert_eq!(form.ingredients(), ["chicken", "rice"]);
    }

    #[test]
    fn test_remove_ingredient() {
        let mut form = RecipeForm::new();
        form.add_ingredient("chicken");
        assert!(form.remove_ingredient("chicken"));
        assert!(!form.remove_ingredient("chicken"));
        assert!(form.ingredients().is_empty());
    }

    #[test]
    fn test_toggle_dietary_uses_listed_spelling() {
        let mut form = RecipeForm::new();
        assert!(form.toggle_dietary("gluten-free"));
        assert_eq!(form.dietary(), ["Gluten-Free"]);
        assert!(!form.toggle_dietary("Gluten-Free"));
        assert!(form.dietary().is_empty());
    }

    #[test]
    fn test_cuisine_set_and_clear() {
        let mut form = RecipeForm::new();
        form.set_cuisine("italian");
        assert_eq!(form.cuisine(), Some("Italian"));
        form.set_cuisine("");
        assert_eq!(form.cuisine(), None);
    }

    #[test]
    fn test_empty_form_rejected() {
        let form = RecipeForm::new();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.reason(), "Please add at least one ingredient");
    }

    #[test]
    fn test_search_term_allows_empty_ingredients() {
        let mut form = RecipeForm::new();
        form.set_search_term("Pad Thai");
        let request = form.to_request().unwrap();
        assert_eq!(request.search_term.as_deref(), Some("Pad Thai"));
        assert!(request.ingredients.is_empty());
    }

    #[test]
    fn test_request_carries_preferences() {
        let mut form = RecipeForm::new();
        form.add_ingredient("tofu");
        form.toggle_dietary("Vegan");
        form.set_cuisine("Asian");
        form.set_difficulty(Some(Difficulty::Medium));
        let request = form.to_request().unwrap();
        assert_eq!(request.ingredients, ["tofu"]);
        assert_eq!(request.dietary, ["Vegan"]);
        assert_eq!(request.cuisine.as_deref(), Some("Asian"));
        assert_eq!(request.difficulty, Some(Difficulty::Medium));

        form.reset();
        assert_eq!(form, RecipeForm::default());
    }
}
