//! Display implementations for recipes.
//!
//! A recipe renders as a markdown card: a header with the title, timing,
//! difficulty, servings and the first three tags, followed by one of three
//! tabs (ingredients, steps, nutrition).

use std::fmt;
use std::str::FromStr;

use super::clock::Clock;
use super::nutrition::NutritionBars;
use crate::models::{Difficulty, Recipe};

/// Number of tags shown on the card header.
const HEADER_TAGS: usize = 3;

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sections of the recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeTab {
    #[default]
    Ingredients,
    Steps,
    Nutrition,
}

impl RecipeTab {
    pub const ALL: [RecipeTab; 3] = [RecipeTab::Ingredients, RecipeTab::Steps, RecipeTab::Nutrition];

    pub fn title(&self) -> &'static str {
        match self {
            RecipeTab::Ingredients => "Ingredients",
            RecipeTab::Steps => "Steps",
            RecipeTab::Nutrition => "Nutrition",
        }
    }
}

impl FromStr for RecipeTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" | "i" => Ok(RecipeTab::Ingredients),
            "steps" | "s" => Ok(RecipeTab::Steps),
            "nutrition" | "n" => Ok(RecipeTab::Nutrition),
            _ => Err(format!("Invalid tab: {s}")),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        writeln!(f, "- Time: {} min", self.total_time())?;
        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        writeln!(f, "- Servings: {}", self.servings)?;
        if !self.cuisine.is_empty() {
            writeln!(f, "- Cuisine: {}", self.cuisine)?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self
                .tags
                .iter()
                .take(HEADER_TAGS)
                .map(String::as_str)
                .collect();
            writeln!(f, "- Tags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}

/// A recipe card showing one tab, with the optional on-demand extras the
/// tabs can reveal: substitutes for one ingredient and the health analysis.
pub struct RecipeView<'a> {
    recipe: &'a Recipe,
    tab: RecipeTab,
    substitutes: Option<(&'a str, &'a [String])>,
    analysis: Option<&'a str>,
}

impl<'a> RecipeView<'a> {
    pub fn new(recipe: &'a Recipe, tab: RecipeTab) -> Self {
        Self {
            recipe,
            tab,
            substitutes: None,
            analysis: None,
        }
    }

    /// Shows substitutes under the ingredient named `ingredient`.
    pub fn with_substitutes(mut self, ingredient: &'a str, substitutes: &'a [String]) -> Self {
        self.substitutes = Some((ingredient, substitutes));
        self
    }

    /// Shows the free-text health analysis on the nutrition tab.
    pub fn with_analysis(mut self, analysis: &'a str) -> Self {
        self.analysis = Some(analysis);
        self
    }

    fn fmt_ingredients(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in &self.recipe.ingredients {
            write!(f, "- {}", ingredient.line())?;
            if ingredient.optional {
                write!(f, " _(optional)_")?;
            }
            writeln!(f)?;
            if let Some((name, substitutes)) = self.substitutes {
                if name.eq_ignore_ascii_case(&ingredient.name) {
                    if substitutes.is_empty() {
                        writeln!(f, "  - No substitutes found")?;
                    }
                    for substitute in substitutes {
                        writeln!(f, "  - {substitute}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn fmt_steps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.recipe.steps.iter().enumerate() {
            write!(f, "{}. {}", index + 1, step.instruction)?;
            if step.is_timed() {
                write!(f, " `{}`", Clock(step.timer_seconds()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn fmt_nutrition(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NutritionBars(&self.recipe.nutrition_facts))?;
        if let Some(analysis) = self.analysis {
            writeln!(f)?;
            writeln!(f, "### Health Analysis")?;
            writeln!(f)?;
            writeln!(f, "{}", analysis.trim())?;
        }
        Ok(())
    }
}

impl fmt::Display for RecipeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.recipe)?;
        writeln!(f)?;
        let tabs: Vec<String> = RecipeTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.tab {
                    format!("**[{}]**", tab.title())
                } else {
                    tab.title().to_string()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" | "))?;
        writeln!(f)?;
        writeln!(f, "## {}", self.tab.title())?;
        writeln!(f)?;
        match self.tab {
            RecipeTab::Ingredients => self.fmt_ingredients(f),
            RecipeTab::Steps => self.fmt_steps(f),
            RecipeTab::Nutrition => self.fmt_nutrition(f),
        }
    }
}
