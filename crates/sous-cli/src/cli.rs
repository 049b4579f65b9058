//! One-shot command handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;
use sous_core::display::{About, FeedbackSummary, RecipeTab, RecipeView};
use sous_core::{
    Config, FeedbackForm, GenerativeClient, Recipe, RecipeAssistant, RecipeForm, RecipeRequest,
    SearchQuery,
};

use crate::args::{FeedbackArgs, GenerateArgs, RecipeFileArgs, SearchArgs, ShowArgs, SubstitutesArgs};
use crate::cooking::{self, InputLines};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    config: Config,
    renderer: Arc<TerminalRenderer>,
    audio_enabled: bool,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer, mute: bool) -> Self {
        Self {
            config,
            renderer: Arc::new(renderer),
            audio_enabled: !mute,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    /// Builds the assistant on first use, so commands that never reach the
    /// endpoint work without an API key.
    pub fn assistant(&self) -> Result<RecipeAssistant> {
        let client = GenerativeClient::new(&self.config.api)
            .context("Failed to create the generative text client")?;
        Ok(RecipeAssistant::new(Arc::new(client), self.renderer.clone()))
    }

    pub async fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let request = RecipeForm::from(args)
            .to_request()
            .context("Cannot generate a recipe")?;
        let recipe = self.request_recipe(&request).await?;
        self.show_recipe(&recipe, args.output.tab.into())?;
        save_recipe(&recipe, args.output.save.as_deref())
    }

    pub async fn search(&self, args: &SearchArgs) -> Result<()> {
        let Some(request) = SearchQuery::from(args).to_request() else {
            return self.renderer.render("Nothing to search for.\n");
        };
        let recipe = self.request_recipe(&request).await?;
        self.show_recipe(&recipe, args.output.tab.into())?;
        save_recipe(&recipe, args.output.save.as_deref())
    }

    pub fn show(&self, args: &ShowArgs) -> Result<()> {
        let recipe = load_recipe(&args.file)?;
        self.show_recipe(&recipe, args.tab.into())
    }

    pub async fn substitutes(&self, args: &SubstitutesArgs) -> Result<()> {
        let ingredient = args.ingredient.trim();
        if ingredient.is_empty() {
            bail!("Please name an ingredient to replace");
        }
        let substitutes = self.assistant()?.substitutions(ingredient).await;
        if substitutes.is_empty() {
            bail!("No substitutes found for {ingredient}");
        }

        let mut out = format!("# Substitutes for {ingredient}\n\n");
        for substitute in &substitutes {
            out.push_str(&format!("- {substitute}\n"));
        }
        self.renderer.render(&out)
    }

    pub async fn analyze(&self, args: &RecipeFileArgs) -> Result<()> {
        let recipe = load_recipe(&args.file)?;
        let analysis = self.assistant()?.nutrition_analysis(&recipe).await;
        let view = RecipeView::new(&recipe, RecipeTab::Nutrition).with_analysis(&analysis);
        self.renderer.render(&view.to_string())
    }

    pub async fn cook(&self, args: &RecipeFileArgs) -> Result<()> {
        let recipe = load_recipe(&args.file)?;
        let mut input = cooking::stdin_lines();
        self.cook_recipe(&recipe, &mut input).await
    }

    /// Runs cooking mode for `recipe` on the shared input.
    pub async fn cook_recipe(&self, recipe: &Recipe, input: &mut InputLines) -> Result<()> {
        info!("Cooking {}", recipe.title);
        let effects = cooking::effects(&self.config, self.renderer.clone());
        let last = cooking::cook(recipe, effects, self.audio_enabled, &self.renderer, input).await?;
        self.renderer.render(&format!(
            "\nStopped on step {} of {}.\n",
            last.current_step_index + 1,
            last.total_steps
        ))
    }

    pub fn feedback(&self, args: &FeedbackArgs) -> Result<()> {
        let recipe = load_recipe(&args.file)?;
        let mut form = FeedbackForm::new(&recipe.id, &recipe.title);
        if let Some(rating) = args.rating {
            form.set_rating(rating).context("Invalid rating")?;
        }
        if let Some(text) = &args.text {
            form.set_text(text);
        }
        for photo in &args.photo {
            form.attach_photo(photo)
                .with_context(|| format!("Cannot attach {}", photo.display()))?;
        }

        let feedback = form.submit();
        info!("Feedback submitted for {}", feedback.recipe_title);
        self.renderer.render(&FeedbackSummary(&feedback).to_string())?;

        if let Some(path) = &args.save {
            let json = serde_json::to_string_pretty(&feedback)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Ok(())
    }

    pub fn about(&self) -> Result<()> {
        self.renderer.render(&About.to_string())
    }

    pub async fn request_recipe(&self, request: &RecipeRequest) -> Result<Recipe> {
        match self.assistant()?.generate_recipe(request).await {
            Some(recipe) => Ok(recipe),
            None => bail!("No recipe was generated"),
        }
    }

    pub fn show_recipe(&self, recipe: &Recipe, tab: RecipeTab) -> Result<()> {
        self.renderer.render(&RecipeView::new(recipe, tab).to_string())
    }
}

pub fn load_recipe(path: &Path) -> Result<Recipe> {
    Recipe::load(path).with_context(|| format!("Failed to load recipe from {}", path.display()))
}

fn save_recipe(recipe: &Recipe, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        recipe
            .save(path)
            .with_context(|| format!("Failed to save recipe to {}", path.display()))?;
        info!("Saved recipe to {}", path.display());
    }
    Ok(())
}
