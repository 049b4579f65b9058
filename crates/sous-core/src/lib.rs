//! Core library for the Sous recipe assistant.
//!
//! This crate holds everything that is not terminal I/O: the recipe data
//! model, the client for the generative text endpoint and the strict parsing
//! of its answers, and the guided cooking step sequencer with its timer,
//! narration and alert.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): recipes, ingredients, steps and nutrition facts
//! - **Generation** ([`client`], [`prompts`], [`payload`], [`assistant`]):
//!   prompt in, validated recipe (or nothing plus a notice) out
//! - **Cooking** ([`sequencer`], [`session`], [`narrator`], [`alert`]): the
//!   step state machine and its driver
//! - **Forms** ([`generator`], [`search`], [`cookbook`], [`feedback`]): the
//!   editable state behind each screen
//! - **Display** ([`display`]): markdown rendering of all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sous_core::{
//!     Config, GenerativeClient, LogNotifier, RecipeAssistant, RecipeForm,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(None)?.with_api_key(None);
//! let client = GenerativeClient::new(&config.api)?;
//! let assistant = RecipeAssistant::new(Arc::new(client), Arc::new(LogNotifier));
//!
//! let mut form = RecipeForm::new();
//! form.add_ingredient("chickpeas");
//! form.add_ingredient("spinach");
//!
//! if let Some(recipe) = assistant.generate_recipe(&form.to_request()?).await {
//!     println!("{recipe}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod assistant;
pub mod client;
pub mod config;
pub mod cookbook;
pub mod display;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod models;
pub mod narrator;
pub mod notice;
pub mod params;
pub mod payload;
pub mod prompts;
pub mod search;
pub mod sequencer;
pub mod session;

// Re-export commonly used types
pub use alert::{AlertPlayer, AlertSink};
pub use assistant::RecipeAssistant;
pub use client::{GenerativeClient, TextGenerator};
pub use config::Config;
pub use cookbook::Cookbook;
pub use error::{FetchError, Result, SousError};
pub use feedback::{Feedback, FeedbackForm};
pub use generator::RecipeForm;
pub use models::{CookingStep, Difficulty, Ingredient, NutritionFacts, Recipe};
pub use narrator::{Narrator, SpeechNarrator};
pub use notice::{LogNotifier, Notice, NoticeLevel, Notifier};
pub use params::RecipeRequest;
pub use search::{SearchKind, SearchQuery};
pub use sequencer::{Phase, SequencerEffects, SequencerState, StepSequencer};
pub use session::{CookingSession, SessionCommand};
