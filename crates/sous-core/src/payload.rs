//! Strict parsing of generated text into typed payloads.
//!
//! The generated text must be exactly one JSON document. A single markdown
//! code fence around it (```` ```json ... ``` ````) is tolerated because the
//! model adds one more often than not; anything else around the document,
//! including a second document, is rejected. Every rejection is a
//! [`FetchError::UnparsableResponse`].

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::Recipe;

/// Number of substitutions requested per ingredient.
pub const SUBSTITUTION_COUNT: usize = 3;

const FENCE: &str = "```";

/// Returns the JSON document inside `text`, without any surrounding fence.
///
/// # Examples
///
/// ```rust
/// use sous_core::payload::json_document;
///
/// assert_eq!(json_document("```json\n[1, 2]\n```").unwrap(), "[1, 2]");
/// assert!(json_document("Sure! Here it is: [1, 2]").is_err());
/// ```
pub fn json_document(text: &str) -> Result<&str, FetchError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FetchError::unparsable("Response text is empty"));
    }

    let body = match text.strip_prefix(FENCE) {
        Some(rest) => {
            let (tag, rest) = rest.split_once('\n').unwrap_or((rest, ""));
            let tag = tag.trim();
            if !tag.is_empty() && !tag.eq_ignore_ascii_case("json") {
                return Err(FetchError::unparsable(format!(
                    "Unexpected code fence language '{tag}'"
                )));
            }
            let inner = rest
                .trim_end()
                .strip_suffix(FENCE)
                .ok_or_else(|| FetchError::unparsable("Code fence is not closed"))?;
            if inner.contains(FENCE) {
                return Err(FetchError::unparsable("Response contains more than one code block"));
            }
            inner.trim()
        }
        None => text,
    };

    // serde_json rejects trailing characters, which covers trailing
    // commentary and concatenated documents.
    serde_json::from_str::<serde_json::Value>(body)
        .map_err(|e| FetchError::unparsable(format!("Response is not a single JSON document: {e}")))?;
    Ok(body)
}

fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    let body = json_document(text)?;
    serde_json::from_str(body)
        .map_err(|e| FetchError::unparsable(format!("Response does not match the expected shape: {e}")))
}

/// Parses a generated recipe, assigning an id when missing and checking the
/// recipe rules.
pub fn parse_recipe(text: &str) -> Result<Recipe, FetchError> {
    let mut recipe: Recipe = parse_document(text)?;
    recipe.normalize();
    recipe
        .validate()
        .map_err(|e| FetchError::unparsable(e.reason()))?;
    Ok(recipe)
}

/// Parses a substitution list: exactly three non-empty strings.
pub fn parse_substitutions(text: &str) -> Result<Vec<String>, FetchError> {
    let items: Vec<String> = parse_document(text)?;
    if items.len() != SUBSTITUTION_COUNT {
        return Err(FetchError::unparsable(format!(
            "Expected {SUBSTITUTION_COUNT} substitutions, got {}",
            items.len()
        )));
    }
    let items: Vec<String> = items.iter().map(|s| s.trim().to_string()).collect();
    if items.iter().any(String::is_empty) {
        return Err(FetchError::unparsable("Substitution list contains an empty entry"));
    }
    Ok(items)
}
