//! Command-line interface definitions using clap.
//!
//! Each command's clap arguments convert into the core parameter types, so
//! argument parsing concerns stay here and validation stays in `sous_core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → RecipeAssistant / Session
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use sous_core::display::RecipeTab;
use sous_core::{Difficulty, RecipeForm, SearchKind, SearchQuery};

/// A terminal recipe assistant with a guided cooking timer
///
/// Generate recipes from the ingredients you have, look up substitutes and
/// nutrition, then cook step by step with timers, narration and an alert.
/// Run without a subcommand for interactive mode.
#[derive(Parser)]
#[command(version, about, name = "sous")]
pub struct Args {
    /// Path to the config file. Defaults to $XDG_CONFIG_HOME/sous/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for the generative text endpoint. Overrides the config file
    /// and the GEMINI_API_KEY / GOOGLE_API_KEY environment variables
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Start cooking with narration and alerts muted
    #[arg(long, global = true)]
    pub mute: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a recipe from ingredients and preferences
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Find a recipe by name or by ingredients
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Show a recipe file
    Show(ShowArgs),
    /// Suggest three substitutes for an ingredient
    #[command(alias = "sub")]
    Substitutes(SubstitutesArgs),
    /// Analyze the health benefits of a recipe file
    Analyze(RecipeFileArgs),
    /// Cook a recipe file step by step
    #[command(alias = "c")]
    Cook(RecipeFileArgs),
    /// Rate a cooked recipe and attach photos
    Feedback(FeedbackArgs),
    /// About Sous
    About,
}

/// Difficulty choices on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(val: DifficultyArg) -> Self {
        match val {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Recipe card tabs on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Ingredients,
    Steps,
    Nutrition,
}

impl From<TabArg> for RecipeTab {
    fn from(val: TabArg) -> Self {
        match val {
            TabArg::Ingredients => RecipeTab::Ingredients,
            TabArg::Steps => RecipeTab::Steps,
            TabArg::Nutrition => RecipeTab::Nutrition,
        }
    }
}

/// Generate a recipe
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Ingredients you have, separated by commas or given one by one
    #[arg(value_delimiter = ',')]
    pub ingredients: Vec<String>,

    /// Dietary restriction (Vegetarian, Vegan, Gluten-Free, Dairy-Free,
    /// Keto, Low-Carb, Paleo); repeat or separate with commas
    #[arg(short, long = "diet", value_delimiter = ',')]
    pub dietary: Vec<String>,

    /// Preferred cuisine, e.g. Italian
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// Preferred difficulty
    #[arg(short = 'l', long)]
    pub difficulty: Option<DifficultyArg>,

    /// Name of a dish to generate instead of (or alongside) ingredients
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<&GenerateArgs> for RecipeForm {
    fn from(val: &GenerateArgs) -> Self {
        let mut form = RecipeForm::new();
        for ingredient in &val.ingredients {
            form.add_ingredient(ingredient);
        }
        for option in &val.dietary {
            form.toggle_dietary(option);
        }
        if let Some(cuisine) = &val.cuisine {
            form.set_cuisine(cuisine);
        }
        form.set_difficulty(val.difficulty.map(Into::into));
        if let Some(name) = &val.name {
            form.set_search_term(name);
        }
        form
    }
}

/// Where and how to show a generated recipe
#[derive(ClapArgs)]
pub struct OutputArgs {
    /// Tab of the recipe card to show
    #[arg(short, long, value_enum, default_value = "ingredients")]
    pub tab: TabArg,

    /// Write the recipe as JSON to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Search for a recipe
#[derive(ClapArgs)]
pub struct SearchArgs {
    /// Dish name, or a comma separated ingredient list with --ingredients
    pub query: String,

    /// Treat the query as ingredients rather than a dish name
    #[arg(short, long)]
    pub ingredients: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<&SearchArgs> for SearchQuery {
    fn from(val: &SearchArgs) -> Self {
        let kind = if val.ingredients {
            SearchKind::Ingredients
        } else {
            SearchKind::Recipe
        };
        SearchQuery::new(val.query.clone(), kind)
    }
}

/// Show a recipe file
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Recipe JSON file
    pub file: PathBuf,

    /// Tab of the recipe card to show
    #[arg(short, long, value_enum, default_value = "ingredients")]
    pub tab: TabArg,
}

/// A command that only needs a recipe file
#[derive(ClapArgs)]
pub struct RecipeFileArgs {
    /// Recipe JSON file
    pub file: PathBuf,
}

/// Look up substitutes
#[derive(ClapArgs)]
pub struct SubstitutesArgs {
    /// Ingredient to replace
    pub ingredient: String,
}

/// Submit feedback for a recipe
#[derive(ClapArgs)]
pub struct FeedbackArgs {
    /// Recipe JSON file that was cooked
    pub file: PathBuf,

    /// Star rating from 1 to 5
    #[arg(short, long)]
    pub rating: Option<u8>,

    /// How it went
    #[arg(short = 'm', long)]
    pub text: Option<String>,

    /// Photo of the dish; repeat for more
    #[arg(short, long)]
    pub photo: Vec<PathBuf>,

    /// Write the submitted feedback as JSON to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
