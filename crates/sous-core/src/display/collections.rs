//! Display of recipe collections.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::cookbook::{Cookbook, CookbookEntry};

fn entry_line(f: &mut fmt::Formatter<'_>, index: usize, entry: &CookbookEntry) -> fmt::Result {
    let recipe = &entry.recipe;
    writeln!(
        f,
        "{}. **{}** ({}, {} min) `{}` _{}_",
        index + 1,
        recipe.title,
        recipe.difficulty,
        recipe.total_time(),
        recipe.id,
        LocalDateTime(&entry.added_at)
    )
}

/// The cookbook screen: saved recipes, then recently viewed ones.
pub struct CookbookView<'a>(pub &'a Cookbook);

impl fmt::Display for CookbookView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cookbook = self.0;
        if cookbook.is_empty() {
            writeln!(f, "# No Saved Recipes Yet")?;
            writeln!(f)?;
            return writeln!(f, "Generate a recipe and save it to see it here.");
        }

        writeln!(f, "# Saved")?;
        writeln!(f)?;
        if cookbook.saved().is_empty() {
            writeln!(f, "No saved recipes yet")?;
        }
        for (index, entry) in cookbook.saved().iter().enumerate() {
            entry_line(f, index, entry)?;
        }
        writeln!(f)?;

        writeln!(f, "# Recent")?;
        writeln!(f)?;
        let mut any = false;
        for (index, entry) in cookbook.recent().enumerate() {
            any = true;
            entry_line(f, index, entry)?;
        }
        if !any {
            writeln!(f, "No recent recipes")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CookingStep, Difficulty, NutritionFacts, Recipe};

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            ingredients: vec![],
            steps: vec![CookingStep::new(1, "Cook")],
            image_url: None,
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            cuisine: String::new(),
            difficulty: Difficulty::Medium,
            tags: vec![],
            nutrition_facts: NutritionFacts::default(),
        }
    }

    #[test]
    fn test_empty_cookbook() {
        let output = CookbookView(&Cookbook::new()).to_string();
        assert!(output.contains("No Saved Recipes Yet"));
    }

    #[test]
    fn test_sections() {
        let mut cookbook = Cookbook::new();
        cookbook.record_view(&recipe("a", "Chili"));
        let output = CookbookView(&cookbook).to_string();
        assert!(output.contains("No saved recipes yet"));
        assert!(output.contains("1. **Chili** (medium, 15 min) `a`"));

        cookbook.toggle_saved(&recipe("b", "Curry"));
        let output = CookbookView(&cookbook).to_string();
        assert!(output.contains("1. **Curry**"));
        assert!(!output.contains("No saved recipes yet"));
    }
}
