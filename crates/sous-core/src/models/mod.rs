//! Data models for recipes and their steps.
//!
//! Display implementations for these models live in [`crate::display`] so the
//! data structures stay free of presentation logic. All models serialize with
//! the camelCase field names used by the generative text endpoint, which lets
//! a generated payload and a recipe file share one representation.
//!
//! # Examples
//!
//! ```rust
//! use sous_core::models::{CookingStep, Difficulty, Ingredient, NutritionFacts, Recipe};
//!
//! let recipe = Recipe {
//!     id: "tomato-soup".to_string(),
//!     title: "Tomato Soup".to_string(),
//!     description: "Weeknight soup".to_string(),
//!     ingredients: vec![Ingredient::new("tomatoes", "6", "")],
//!     steps: vec![
//!         CookingStep::new(1, "Chop the tomatoes"),
//!         CookingStep::new(2, "Simmer").with_duration(600),
//!     ],
//!     image_url: None,
//!     prep_time: 10,
//!     cook_time: 20,
//!     servings: 2,
//!     cuisine: String::new(),
//!     difficulty: Difficulty::Easy,
//!     tags: vec![],
//!     nutrition_facts: NutritionFacts::default(),
//! };
//! assert!(recipe.validate().is_ok());
//! assert_eq!(recipe.total_time(), 30);
//! ```

pub mod difficulty;
pub mod nutrition;
pub mod recipe;
pub mod step;


pub use difficulty::Difficulty;
pub use nutrition::{MacroSplit, NutritionFacts};
pub use recipe::{Ingredient, Recipe};
pub use step::CookingStep;
