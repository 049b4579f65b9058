//! The search bar: find a recipe by name or by what is in the fridge.

use std::str::FromStr;

use crate::params::RecipeRequest;

/// What the search text means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    /// The text names a dish
    #[default]
    Recipe,
    /// The text is a comma separated ingredient list
    Ingredients,
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recipe" | "name" => Ok(SearchKind::Recipe),
            "ingredients" | "ingredient" => Ok(SearchKind::Ingredients),
            _ => Err(format!(
                "Invalid search kind: {s}. Must be 'recipe' or 'ingredients'"
            )),
        }
    }
}

/// A search as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub kind: SearchKind,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, kind: SearchKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Turns the query into a generation request. Blank queries yield
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sous_core::search::{SearchKind, SearchQuery};
    ///
    /// let request = SearchQuery::new("eggs, spinach,", SearchKind::Ingredients)
    ///     .to_request()
    ///     .unwrap();
    /// assert_eq!(request.ingredients, ["eggs", "spinach"]);
    ///
    /// assert!(SearchQuery::new("   ", SearchKind::Recipe).to_request().is_none());
    /// ```
    pub fn to_request(&self) -> Option<RecipeRequest> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        match self.kind {
            SearchKind::Recipe => Some(RecipeRequest::search(text)),
            SearchKind::Ingredients => {
                let ingredients: Vec<&str> = text
                    .split(',')
                    .map(str::trim)
                    .filter(|i| !i.is_empty())
                    .collect();
                if ingredients.is_empty() {
                    return None;
                }
                Some(RecipeRequest::from_ingredients(ingredients))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_search_sets_term() {
        let request = SearchQuery::new(" Shakshuka ", SearchKind::default())
            .to_request()
            .unwrap();
        assert_eq!(request.search_term.as_deref(), Some("Shakshuka"));
        assert!(request.ingredients.is_empty());
    }

    #[test]
    fn test_only_commas_is_blank() {
        assert!(SearchQuery::new(" , ,", SearchKind::Ingredients)
            .to_request()
            .is_none());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Ingredients".parse::<SearchKind>(), Ok(SearchKind::Ingredients));
        assert_eq!("recipe".parse::<SearchKind>(), Ok(SearchKind::Recipe));
        assert!("dish".parse::<SearchKind>().is_err());
    }
}
