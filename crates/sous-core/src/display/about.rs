//! The about page.

use std::fmt;

/// Static description of what the assistant can do.
pub struct About;

impl fmt::Display for About {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Sous")?;
        writeln!(f)?;
        writeln!(
            f,
            "A recipe assistant for the terminal. Tell it what is in your kitchen, \
             get a recipe, then cook it one step at a time."
        )?;
        writeln!(f)?;
        writeln!(f, "## Features")?;
        writeln!(f)?;
        writeln!(f, "- **Recipe generator**: recipes from your ingredients, diet, cuisine and skill level")?;
        writeln!(f, "- **Cooking timer**: guided steps with countdowns, narration and an alert")?;
        writeln!(f, "- **Nutritional analysis**: macro breakdown and a short health summary")?;
        writeln!(f, "- **Ingredient substitutions**: three alternatives for any ingredient")?;
        writeln!(f)?;
        writeln!(f, "## How it works")?;
        writeln!(f)?;
        writeln!(
            f,
            "Recipes come from a generative text model. Every answer is checked \
             before it is shown, and a malformed answer is reported instead of \
             guessed at. Set `GEMINI_API_KEY` or pass `--api-key` to enable \
             generation."
        )?;
        writeln!(f)?;
        writeln!(f, "Version {}", env!("CARGO_PKG_VERSION"))
    }
}
