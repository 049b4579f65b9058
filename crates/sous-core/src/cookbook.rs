//! Saved and recently viewed recipes for the current process.

use std::collections::VecDeque;

use jiff::Timestamp;
use log::debug;

use crate::models::Recipe;

/// Number of recently viewed recipes kept.
pub const RECENT_CAPACITY: usize = 10;

/// A recipe together with the moment it entered a list.
#[derive(Debug, Clone, PartialEq)]
pub struct CookbookEntry {
    pub recipe: Recipe,
    pub added_at: Timestamp,
}

impl CookbookEntry {
    fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            added_at: Timestamp::now(),
        }
    }
}

/// In-memory cookbook: recipes the user saved plus a bounded history of
/// viewed recipes, most recent first.
#[derive(Debug, Default)]
pub struct Cookbook {
    saved: Vec<CookbookEntry>,
    recent: VecDeque<CookbookEntry>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the recipe, or removes it if it is already saved. Returns
    /// whether the recipe is saved afterwards.
    pub fn toggle_saved(&mut self, recipe: &Recipe) -> bool {
        if self.remove(&recipe.id).is_some() {
            return false;
        }
        debug!("Saved recipe {}", recipe.id);
        self.saved.push(CookbookEntry::new(recipe.clone()));
        true
    }

    /// Removes a saved recipe by id.
    pub fn remove(&mut self, id: &str) -> Option<Recipe> {
        let position = self.saved.iter().position(|entry| entry.recipe.id == id)?;
        debug!("Removed saved recipe {id}");
        Some(self.saved.remove(position).recipe)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.saved.iter().any(|entry| entry.recipe.id == id)
    }

    /// Records a view. A recipe viewed again moves to the front.
    pub fn record_view(&mut self, recipe: &Recipe) {
        self.recent.retain(|entry| entry.recipe.id != recipe.id);
        self.recent.push_front(CookbookEntry::new(recipe.clone()));
        self.recent.truncate(RECENT_CAPACITY);
    }

    pub fn saved(&self) -> &[CookbookEntry] {
        &self.saved
    }

    pub fn recent(&self) -> impl Iterator<Item = &CookbookEntry> {
        self.recent.iter()
    }

    /// Looks a recipe up by id in the saved list, then the recent list.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.saved
            .iter()
            .chain(self.recent.iter())
            .map(|entry| &entry.recipe)
            .find(|recipe| recipe.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty() && self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CookingStep, Difficulty, NutritionFacts};

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            description: String::new(),
            ingredients: vec![],
            steps: vec![CookingStep::new(1, "Cook")],
            image_url: None,
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            cuisine: String::new(),
            difficulty: Difficulty::Easy,
            tags: vec![],
            nutrition_facts: NutritionFacts::default(),
        }
    }

    #[test]
    fn test_toggle_saved() {
        let mut cookbook = Cookbook::new();
        let soup = recipe("soup");
        assert!(cookbook.toggle_saved(&soup));
        assert!(cookbook.contains("soup"));
        assert!(!cookbook.toggle_saved(&soup));
        assert!(!cookbook.contains("soup"));
        assert!(cookbook.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut cookbook = Cookbook::new();
        assert!(cookbook.remove("missing").is_none());
    }

    #[test]
    fn test_recent_order_and_capacity() {
        let mut cookbook = Cookbook::new();
        for i in 0..12 {
            cookbook.record_view(&recipe(&i.to_string()));
        }
        let ids: Vec<&str> = cookbook.recent().map(|e| e.recipe.id.as_str()).collect();
        assert_eq!(ids.len(), RECENT_CAPACITY);
        assert_eq!(ids[0], "11");
        assert_eq!(ids[9], "2");

        cookbook.record_view(&recipe("5"));
        let ids: Vec<&str> = cookbook.recent().map(|e| e.recipe.id.as_str()).collect();
        assert_eq!(ids[0], "5");
        assert_eq!(ids.len(), RECENT_CAPACITY);
        assert_eq!(ids.iter().filter(|id| **id == "5").count(), 1);
    }

    #[test]
    fn test_find_searches_both_lists() {
        let mut cookbook = Cookbook::new();
        cookbook.toggle_saved(&recipe("saved"));
        cookbook.record_view(&recipe("viewed"));
        assert!(cookbook.find("saved").is_some());
        assert!(cookbook.find("viewed").is_some());
        assert!(cookbook.find("other").is_none());
    }
}
