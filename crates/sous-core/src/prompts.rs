//! Prompt text sent to the generative text endpoint.

use std::sync::OnceLock;

use crate::models::Recipe;
use crate::params::RecipeRequest;
use crate::payload::SUBSTITUTION_COUNT;

/// JSON schema of [`Recipe`], rendered once.
fn recipe_schema() -> &'static str {
    static SCHEMA: OnceLock<String> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let schema = schemars::schema_for!(Recipe);
        format!("{:#}", schema.as_value())
    })
}

/// Prompt asking for one recipe as a JSON object.
///
/// # Examples
///
/// ```rust
/// use sous_core::params::RecipeRequest;
/// use sous_core::prompts::recipe_prompt;
///
/// let prompt = recipe_prompt(&RecipeRequest::from_ingredients(["eggs", "leeks"]));
/// assert!(prompt.contains("using these ingredients: eggs, leeks."));
/// ```
pub fn recipe_prompt(request: &RecipeRequest) -> String {
    let mut prompt = String::new();
    let ingredients = request
        .ingredients
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let term = request
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match (term, ingredients.is_empty()) {
        (Some(term), true) => {
            prompt.push_str(&format!("Generate a detailed cooking recipe for {term}.\n"));
        }
        (Some(term), false) => {
            prompt.push_str(&format!(
                "Generate a detailed cooking recipe for {term} using these ingredients: {ingredients}.\n"
            ));
        }
        (None, _) => {
            prompt.push_str(&format!(
                "Generate a detailed cooking recipe using these ingredients: {ingredients}.\n"
            ));
        }
    }
    if !request.dietary.is_empty() {
        prompt.push_str(&format!(
            "The recipe should be suitable for {} diets.\n",
            request.dietary.join(", ")
        ));
    }
    if let Some(cuisine) = request.cuisine.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("The cuisine should be {cuisine}.\n"));
    }
    if let Some(difficulty) = request.difficulty {
        prompt.push_str(&format!(
            "The difficulty level should be {}.\n",
            difficulty.as_str()
        ));
    }
    prompt.push_str(
        "\nRespond with a single JSON object and nothing else. Number the steps \
         from 1 in order and give timed steps a duration in seconds. The object \
         must match this JSON schema:\n",
    );
    prompt.push_str(recipe_schema());
    prompt
}

/// Prompt asking for substitutes for one ingredient as a JSON array.
pub fn substitutions_prompt(ingredient: &str) -> String {
    format!(
        "Suggest {SUBSTITUTION_COUNT} substitutions for {} in cooking recipes. \
         Only return a JSON array of {SUBSTITUTION_COUNT} strings with the substitutions.",
        ingredient.trim()
    )
}

/// Prompt asking for a short prose analysis of a recipe's health benefits.
pub fn nutrition_prompt(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| format!("{} {} {}", i.amount, i.unit, i.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Analyze the nutritional benefits of this recipe:\n\
         Recipe: {}\n\
         Ingredients: {ingredients}\n\n\
         Provide a brief paragraph about its health benefits and dietary suitability.",
        recipe.title
    )
}
