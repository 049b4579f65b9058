//! Guided cooking step sequencer.
//!
//! [`StepSequencer`] walks a cook through a recipe's steps one at a time. It
//! owns the current step index, the per-step countdown, the running flag and
//! the overall progress, and it drives narration, the completion alert and
//! the "step completed" notice as side effects of its transitions.
//!
//! # State machine
//!
//! ```text
//!            toggle()                 tick() reaches 0
//!   Idle(i) ─────────▶ Running(i) ───────────────────▶ StepComplete(i)
//!      ▲    ◀─────────     │
//!      │      toggle()     │
//!      └── next()/previous() from any state enter Idle(i±1)
//! ```
//!
//! Side effects belong to transitions only:
//!
//! - narration fires once per step entry (construction, `next`, `previous`)
//! - the alert fires once per completed countdown, never again while the
//!   sequencer lingers on the completed step
//!
//! Navigation never fails. Requests past either end are ignored.
//!
//! The sequencer has no clock of its own; a driver calls [`StepSequencer::tick`]
//! once per elapsed second (see [`crate::session`]).
//!
//! # Examples
//!
//! ```rust
//! use sous_core::models::CookingStep;
//! use sous_core::sequencer::{Phase, SequencerEffects, StepSequencer};
//!
//! let steps = vec![
//!     CookingStep::new(1, "Boil water").with_duration(2),
//!     CookingStep::new(2, "Add pasta"),
//! ];
//! let mut sequencer = StepSequencer::new(steps, SequencerEffects::silent()).unwrap();
//! sequencer.toggle();
//! sequencer.tick();
//! sequencer.tick();
//! assert_eq!(sequencer.phase(), Phase::StepComplete);
//! assert!(sequencer.next());
//! assert_eq!(sequencer.state().overall_progress_percent, 50.0);
//! ```

use std::sync::Arc;

use log::debug;

use crate::alert::AlertSink;
use crate::error::{Result, SousError};
use crate::models::CookingStep;
use crate::narrator::Narrator;
use crate::notice::{Notice, Notifier};

pub mod state;

#[cfg(test)]
mod tests;

pub use crate::display::clock::format_time;
pub use state::{Phase, SequencerState, TickOutcome};

/// Collaborators the sequencer drives as side effects.
#[derive(Clone)]
pub struct SequencerEffects {
    pub narrator: Arc<dyn Narrator>,
    pub alert: Arc<dyn AlertSink>,
    pub notifier: Arc<dyn Notifier>,
}

impl SequencerEffects {
    pub fn new(
        narrator: Arc<dyn Narrator>,
        alert: Arc<dyn AlertSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            narrator,
            alert,
            notifier,
        }
    }

    /// Effects that do nothing, for headless use.
    pub fn silent() -> Self {
        Self {
            narrator: Arc::new(Silent),
            alert: Arc::new(Silent),
            notifier: Arc::new(Silent),
        }
    }
}

struct Silent;

impl Narrator for Silent {
    fn speak(&self, _text: &str) {}
    fn cancel(&self) {}
}

impl AlertSink for Silent {
    fn play_alert(&self) {}
}

impl Notifier for Silent {
    fn notify(&self, _notice: Notice) {}
}

/// Step-by-step cooking state machine for one cooking session.
pub struct StepSequencer {
    steps: Vec<CookingStep>,
    current_step_index: usize,
    time_remaining_seconds: u32,
    is_running: bool,
    audio_enabled: bool,
    overall_progress_percent: f64,
    phase: Phase,
    effects: SequencerEffects,
}

impl StepSequencer {
    /// Enters cooking mode on the first step, with audio enabled.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` when `steps` is empty.
    pub fn new(steps: Vec<CookingStep>, effects: SequencerEffects) -> Result<Self> {
        Self::with_audio(steps, effects, true)
    }

    /// Enters cooking mode on the first step with the given audio setting.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidInput` when `steps` is empty.
    pub fn with_audio(
        steps: Vec<CookingStep>,
        effects: SequencerEffects,
        audio_enabled: bool,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(SousError::invalid_input("steps")
                .with_reason("Cannot start cooking a recipe without steps"));
        }
        let mut sequencer = Self {
            steps,
            current_step_index: 0,
            time_remaining_seconds: 0,
            is_running: false,
            audio_enabled,
            overall_progress_percent: 0.0,
            phase: Phase::Idle,
            effects,
        };
        sequencer.enter_step(0);
        Ok(sequencer)
    }

    /// Starts or pauses the countdown.
    ///
    /// Ignored on untimed steps and on a step whose countdown already
    /// finished.
    pub fn toggle(&mut self) {
        if !self.current_step().is_timed() || self.phase == Phase::StepComplete {
            debug!("Toggle ignored on step {}", self.current_step_index);
            return;
        }
        self.is_running = !self.is_running;
        self.phase = if self.is_running {
            Phase::Running
        } else {
            Phase::Idle
        };
        debug!(
            "Step {} countdown {}",
            self.current_step_index,
            self.phase.as_str()
        );
    }

    /// Advances the countdown by one second.
    ///
    /// Reaching zero completes the step: the countdown stops, the alert plays
    /// (when audio is enabled) and a "Step completed!" notice is published.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.time_remaining_seconds == 0 {
            return TickOutcome::Ignored;
        }
        self.time_remaining_seconds -= 1;
        if self.time_remaining_seconds > 0 {
            return TickOutcome::Counting(self.time_remaining_seconds);
        }
        self.complete();
        TickOutcome::Completed
    }

    /// Moves to the next step. Returns `false` on the last step.
    pub fn next(&mut self) -> bool {
        if self.current_step_index + 1 >= self.steps.len() {
            return false;
        }
        self.enter_step(self.current_step_index + 1);
        true
    }

    /// Moves to the previous step. Returns `false` on the first step.
    pub fn previous(&mut self) -> bool {
        if self.current_step_index == 0 {
            return false;
        }
        self.enter_step(self.current_step_index - 1);
        true
    }

    /// Mutes or unmutes narration and alerts. Muting cuts off any utterance
    /// in flight.
    pub fn toggle_audio(&mut self) {
        self.audio_enabled = !self.audio_enabled;
        if !self.audio_enabled {
            self.effects.narrator.cancel();
        }
        debug!("Audio enabled: {}", self.audio_enabled);
    }

    /// Stops narration when leaving cooking mode.
    pub fn shutdown(&mut self) {
        self.is_running = false;
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
        }
        self.effects.narrator.cancel();
    }

    pub fn current_step(&self) -> &CookingStep {
        &self.steps[self.current_step_index]
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn time_remaining_seconds(&self) -> u32 {
        self.time_remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the countdown needs a live one-second timer right now.
    pub fn needs_timer(&self) -> bool {
        self.is_running && self.time_remaining_seconds > 0
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SequencerState {
        let step = self.current_step();
        SequencerState {
            current_step_index: self.current_step_index,
            total_steps: self.steps.len(),
            time_remaining_seconds: self.time_remaining_seconds,
            is_running: self.is_running,
            audio_enabled: self.audio_enabled,
            overall_progress_percent: self.overall_progress_percent,
            phase: self.phase,
            instruction: step.instruction.clone(),
            step_duration: step.duration.filter(|d| *d > 0),
        }
    }

    fn enter_step(&mut self, index: usize) {
        self.current_step_index = index;
        self.is_running = false;
        self.phase = Phase::Idle;
        self.time_remaining_seconds = self.steps[index].timer_seconds();
        self.overall_progress_percent = progress_percent(index, self.steps.len());
        debug!(
            "Entered step {} of {} ({}s)",
            index + 1,
            self.steps.len(),
            self.time_remaining_seconds
        );
        if self.audio_enabled {
            self.effects.narrator.speak(&self.steps[index].instruction);
        }
    }

    fn complete(&mut self) {
        self.is_running = false;
        self.phase = Phase::StepComplete;
        debug!("Step {} completed", self.current_step_index + 1);
        if self.audio_enabled {
            self.effects.alert.play_alert();
        }
        self.effects.notifier.notify(
            Notice::success("Step completed!")
                .with_description("Move to the next step when you're ready"),
        );
    }
}

/// Share of steps already behind the cook, in percent.
pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * index as f64 / total as f64
}
