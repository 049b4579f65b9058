//! Display formatting for recipes, cooking sessions and notices.
//!
//! Domain models implement [`std::fmt::Display`] directly where there is one
//! obvious rendering ([`Recipe`](crate::models::Recipe),
//! [`Notice`](crate::notice::Notice)). Screens that combine a model with view
//! state are small wrapper types holding references.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  View Wrappers  │    │    Markdown     │
//! │ (Recipe, State) │───▶│ (RecipeView...) │───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, rendered by the CLI's terminal renderer.
//!
//! # Examples
//!
//! ```rust
//! use sous_core::display::{format_time, ProgressBar};
//!
//! assert_eq!(format_time(65), "1:05");
//! assert_eq!(ProgressBar::new(50.0).with_width(4).to_string(), "██░░");
//! ```

pub mod about;
pub mod clock;
pub mod collections;
pub mod datetime;
pub mod feedback;
pub mod nutrition;
pub mod progress;
pub mod recipe;
pub mod session;
pub mod status;

pub use about::About;
pub use clock::{format_time, Clock};
pub use collections::CookbookView;
pub use datetime::LocalDateTime;
pub use feedback::{FeedbackFormView, FeedbackSummary};
pub use nutrition::NutritionBars;
pub use progress::ProgressBar;
pub use recipe::{RecipeTab, RecipeView};
pub use session::SessionView;
