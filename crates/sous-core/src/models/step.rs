//! Cooking step model definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One instruction unit of a recipe, optionally time-boxed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CookingStep {
    /// Position of the step within the recipe (1-based, matches order)
    pub id: u32,

    /// What to do
    pub instruction: String,

    /// Countdown length in whole seconds; absent or zero means untimed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    /// Optional illustration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CookingStep {
    /// Creates an untimed step.
    pub fn new(id: u32, instruction: impl Into<String>) -> Self {
        Self {
            id,
            instruction: instruction.into(),
            duration: None,
            image: None,
        }
    }

    /// Sets the countdown length in seconds.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Countdown length in seconds, with absent durations reading as zero.
    pub fn timer_seconds(&self) -> u32 {
        self.duration.unwrap_or(0)
    }

    /// Whether this step carries a countdown at all.
    pub fn is_timed(&self) -> bool {
        self.timer_seconds() > 0
    }
}
