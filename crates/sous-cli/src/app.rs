//! Interactive mode: a line-driven version of the assistant's screens.
//!
//! The generator form, a recipe card with its tabs, the cooking screen, the
//! feedback form, the cookbook and the about page are all reachable from
//! here. Every screen reads commands from the same stdin reader the cooking
//! screen uses.

use anyhow::{Context, Result};
use log::debug;
use sous_core::display::{
    About, CookbookView, FeedbackFormView, FeedbackSummary, RecipeTab, RecipeView,
};
use sous_core::generator::DIETARY_OPTIONS;
use sous_core::{
    Cookbook, Difficulty, FeedbackForm, Recipe, RecipeForm, RecipeRequest, SearchKind, SearchQuery,
};

use crate::cli::Cli;
use crate::cooking;

/// Extras revealed on a recipe card.
#[derive(Default)]
struct CardExtras {
    substitutes: Option<(String, Vec<String>)>,
    analysis: Option<String>,
}

enum Mode {
    Generator,
    Recipe {
        recipe: Box<Recipe>,
        tab: RecipeTab,
        extras: CardExtras,
    },
    /// Hands the terminal to the cooking screen, then moves to feedback.
    Cooking(Box<Recipe>),
    Feedback(FeedbackForm),
    Cookbook,
    About,
}

pub struct App<'a> {
    cli: &'a Cli,
    form: RecipeForm,
    cookbook: Cookbook,
    mode: Mode,
}

/// What a handled line asks the loop to do next.
enum Flow {
    Continue,
    Quit,
}

impl<'a> App<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            form: RecipeForm::new(),
            cookbook: Cookbook::new(),
            mode: Mode::Generator,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut input = cooking::stdin_lines();
        loop {
            if let Mode::Cooking(recipe) = &self.mode {
                self.cli.cook_recipe(recipe, &mut input).await?;
                self.mode = Mode::Feedback(FeedbackForm::new(&recipe.id, &recipe.title));
            }
            self.draw()?;

            let Some(line) = input.next_line().await.context("Failed to read input")? else {
                break;
            };
            let line = line.trim();
            let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
            if let Flow::Quit = self.handle(command, rest.trim()).await? {
                break;
            }
        }
        debug!("Leaving interactive mode");
        Ok(())
    }

    async fn handle(&mut self, command: &str, rest: &str) -> Result<Flow> {
        match command {
            "quit" | "q" => return Ok(Flow::Quit),
            "home" => self.mode = Mode::Generator,
            "book" => self.mode = Mode::Cookbook,
            "about" => self.mode = Mode::About,
            "" => {}
            "help" | "?" => self.help()?,
            _ => match self.mode {
                Mode::Generator => self.handle_generator(command, rest).await?,
                Mode::Recipe { .. } => self.handle_recipe(command, rest).await?,
                Mode::Feedback(_) => self.handle_feedback(command, rest)?,
                Mode::Cookbook => self.handle_cookbook(command, rest)?,
                Mode::About => self.mode = Mode::Generator,
                Mode::Cooking(_) => {}
            },
        }
        Ok(Flow::Continue)
    }

    async fn handle_generator(&mut self, command: &str, rest: &str) -> Result<()> {
        match command {
            "add" => {
                for ingredient in rest.split(',') {
                    self.form.add_ingredient(ingredient);
                }
            }
            "rm" => {
                self.form.remove_ingredient(rest);
            }
            "diet" => {
                self.form.toggle_dietary(rest);
            }
            "cuisine" => self.form.set_cuisine(rest),
            "level" => self.form.set_difficulty(rest.parse::<Difficulty>().ok()),
            "reset" => self.form.reset(),
            "go" => match self.form.to_request() {
                Ok(request) => self.request(&request).await?,
                Err(e) => self.cli.renderer().render(&format!("{e}\n"))?,
            },
            "find" | "with" => {
                let kind = if command == "with" {
                    SearchKind::Ingredients
                } else {
                    SearchKind::Recipe
                };
                if let Some(request) = SearchQuery::new(rest, kind).to_request() {
                    self.request(&request).await?;
                }
            }
            _ => self.help()?,
        }
        Ok(())
    }

    async fn handle_recipe(&mut self, command: &str, rest: &str) -> Result<()> {
        let Mode::Recipe { recipe, tab, extras } = &mut self.mode else {
            return Ok(());
        };
        match command {
            "tab" | "t" => match rest.parse() {
                Ok(next) => *tab = next,
                Err(e) => self.cli.renderer().render(&format!("{e}\n"))?,
            },
            "sub" => match self.cli.assistant() {
                Ok(assistant) => {
                    let substitutes = assistant.substitutions(rest).await;
                    extras.substitutes = Some((rest.to_string(), substitutes));
                    *tab = RecipeTab::Ingredients;
                }
                Err(e) => self.cli.renderer().render(&format!("{e:#}\n"))?,
            },
            "analyze" => match self.cli.assistant() {
                Ok(assistant) => {
                    let analysis = assistant.nutrition_analysis(recipe).await;
                    extras.analysis = Some(analysis);
                    *tab = RecipeTab::Nutrition;
                }
                Err(e) => self.cli.renderer().render(&format!("{e:#}\n"))?,
            },
            "save" => {
                let saved = self.cookbook.toggle_saved(recipe);
                let message = if saved { "Saved to cookbook.\n" } else { "Removed from cookbook.\n" };
                self.cli.renderer().render(message)?;
            }
            "cook" => self.mode = Mode::Cooking(recipe.clone()),
            "back" => self.mode = Mode::Generator,
            _ => self.help()?,
        }
        Ok(())
    }

    fn handle_feedback(&mut self, command: &str, rest: &str) -> Result<()> {
        let Mode::Feedback(form) = &mut self.mode else {
            return Ok(());
        };
        let renderer = self.cli.renderer();
        match command {
            "rate" => {
                let rated = match rest.parse::<u8>() {
                    Ok(rating) => form.set_rating(rating).map_err(|e| e.to_string()),
                    Err(_) => Err(format!("Invalid rating: {rest}")),
                };
                if let Err(message) = rated {
                    renderer.render(&format!("{message}\n"))?;
                }
            }
            "say" => form.set_text(rest),
            "photo" => {
                if let Err(e) = form.attach_photo(rest) {
                    renderer.render(&format!("{e}\n"))?;
                }
            }
            "unphoto" => {
                let removed = rest
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .is_some_and(|index| form.remove_photo(index));
                if !removed {
                    renderer.render("No such photo.\n")?;
                }
            }
            "submit" => {
                let form = std::mem::take(form);
                let feedback = form.submit();
                renderer.render(&FeedbackSummary(&feedback).to_string())?;
                self.mode = Mode::Generator;
            }
            "skip" => self.mode = Mode::Generator,
            _ => self.help()?,
        }
        Ok(())
    }

    fn handle_cookbook(&mut self, command: &str, rest: &str) -> Result<()> {
        match command {
            "open" => match self.cookbook.find(rest).cloned() {
                Some(recipe) => self.open(recipe),
                None => self.cli.renderer().render("No recipe with that id.\n")?,
            },
            "rm" => {
                if self.cookbook.remove(rest).is_none() {
                    self.cli.renderer().render("No saved recipe with that id.\n")?;
                }
            }
            "back" => self.mode = Mode::Generator,
            _ => self.help()?,
        }
        Ok(())
    }

    /// Opens the generated recipe, or reports why there is none and stays
    /// on the current screen.
    async fn request(&mut self, request: &RecipeRequest) -> Result<()> {
        match self.cli.request_recipe(request).await {
            Ok(recipe) => {
                self.open(recipe);
                Ok(())
            }
            Err(e) => self.cli.renderer().render(&format!("{e:#}\n")),
        }
    }

    fn open(&mut self, recipe: Recipe) {
        self.cookbook.record_view(&recipe);
        self.mode = Mode::Recipe {
            recipe: Box::new(recipe),
            tab: RecipeTab::Ingredients,
            extras: CardExtras::default(),
        };
    }

    fn draw(&self) -> Result<()> {
        let screen = match &self.mode {
            Mode::Generator => generator_screen(&self.form),
            Mode::Recipe { recipe, tab, extras } => {
                let mut view = RecipeView::new(recipe, *tab);
                if let Some((ingredient, substitutes)) = &extras.substitutes {
                    view = view.with_substitutes(ingredient, substitutes);
                }
                if let Some(analysis) = &extras.analysis {
                    view = view.with_analysis(analysis);
                }
                let saved = if self.cookbook.contains(&recipe.id) { " (saved)" } else { "" };
                format!("{view}\n_Recipe{saved}: tab, sub, analyze, save, cook, back_\n")
            }
            Mode::Feedback(form) => format!(
                "{}\n_Feedback: rate, say, photo, unphoto, submit, skip_\n",
                FeedbackFormView(form)
            ),
            Mode::Cookbook => format!("{}\n_Cookbook: open, rm, back_\n", CookbookView(&self.cookbook)),
            Mode::About => About.to_string(),
            Mode::Cooking(_) => String::new(),
        };
        self.cli.renderer().render(&screen)
    }

    fn help(&self) -> Result<()> {
        self.cli.renderer().render(
            "Commands: add, rm, diet, cuisine, level, reset, go, find, with, \
             home, book, about, help, quit\n",
        )
    }
}

fn generator_screen(form: &RecipeForm) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "_none_".to_string()
        } else {
            items.join(", ")
        }
    };
    let mut out = String::from("# Recipe Generator\n\n");
    out.push_str(&format!("- Ingredients: {}\n", list(form.ingredients())));
    out.push_str(&format!(
        "- Dietary: {} _(options: {})_\n",
        list(form.dietary()),
        DIETARY_OPTIONS.join(", ")
    ));
    out.push_str(&format!("- Cuisine: {}\n", form.cuisine().unwrap_or("Any")));
    out.push_str(&format!(
        "- Difficulty: {}\n",
        form.difficulty().map_or("Any", |d| d.label())
    ));
    out.push_str("\n_add, rm, diet, cuisine, level, reset, go, find, with, book, about, quit_\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_screen_lists_form() {
        let mut form = RecipeForm::new();
        form.add_ingredient("rice");
        form.add_ingredient("eggs");
        form.toggle_dietary("vegetarian");
        let screen = generator_screen(&form);
        assert!(screen.contains("- Ingredients: rice, eggs"));
        assert!(screen.contains("- Dietary: Vegetarian"));
        assert!(screen.contains("- Cuisine: Any"));
    }

    #[test]
    fn test_generator_screen_empty_form() {
        let screen = generator_screen(&RecipeForm::new());
        assert!(screen.contains("- Ingredients: _none_"));
        assert!(screen.contains("- Difficulty: Any"));
    }
}
