//! Cooking session display.

use std::fmt;

use super::clock::Clock;
use super::progress::ProgressBar;
use crate::sequencer::{Phase, SequencerState};

/// The cooking screen: overall progress, the current instruction and its
/// countdown.
pub struct SessionView<'a> {
    pub title: &'a str,
    pub state: &'a SequencerState,
}

impl<'a> SessionView<'a> {
    pub fn new(title: &'a str, state: &'a SequencerState) -> Self {
        Self { title, state }
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "# Cooking: {}", self.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "Step {} of {} `{}` {}%",
            state.current_step_index + 1,
            state.total_steps,
            ProgressBar::new(state.overall_progress_percent),
            state.overall_progress_percent.round()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", state.instruction)?;
        writeln!(f)?;

        if state.step_duration.is_some() {
            let status = match state.phase {
                Phase::Running => "running",
                Phase::StepComplete => "done",
                Phase::Idle => "paused",
            };
            writeln!(f, "Time: **{}** ({status})", Clock(state.time_remaining_seconds))?;
        } else {
            writeln!(f, "_No timer for this step_")?;
        }
        writeln!(f)?;

        let mut controls = Vec::new();
        if state.step_duration.is_some() && state.phase != Phase::StepComplete {
            controls.push(if state.is_running {
                "[t] pause"
            } else {
                "[t] start"
            });
        }
        if state.has_previous() {
            controls.push("[p] previous");
        }
        if state.has_next() {
            controls.push("[n] next");
        }
        controls.push(if state.audio_enabled {
            "[m] mute"
        } else {
            "[m] unmute"
        });
        controls.push("[q] close");
        writeln!(f, "{}", controls.join("  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(index: usize, duration: Option<u32>, phase: Phase) -> SequencerState {
        SequencerState {
            current_step_index: index,
            total_steps: 3,
            time_remaining_seconds: duration.unwrap_or(0),
            is_running: phase == Phase::Running,
            audio_enabled: true,
            overall_progress_percent: 100.0 * index as f64 / 3.0,
            phase,
            instruction: "Simmer the sauce".to_string(),
            step_duration: duration,
        }
    }

    #[test]
    fn test_timed_step_shows_countdown() {
        let state = state(0, Some(65), Phase::Running);
        let output = SessionView::new("Ragu", &state).to_string();
        assert!(output.contains("# Cooking: Ragu"));
        assert!(output.contains("Step 1 of 3"));
        assert!(output.contains("**1:05** (running)"));
        assert!(output.contains("[t] pause"));
        assert!(!output.contains("[p] previous"));
        assert!(output.contains("[n] next"));
    }

    #[test]
    fn test_untimed_step_has_no_timer_controls() {
        let state = state(1, None, Phase::Idle);
        let output = SessionView::new("Ragu", &state).to_string();
        assert!(output.contains("No timer for this step"));
        assert!(!output.contains("[t]"));
        assert!(output.contains("[p] previous"));
    }

    #[test]
    fn test_last_step_hides_next() {
        let state = state(2, Some(5), Phase::StepComplete);
        let output = SessionView::new("Ragu", &state).to_string();
        assert!(output.contains("(done)"));
        assert!(!output.contains("[n] next"));
        assert!(!output.contains("[t]"));
    }
}
