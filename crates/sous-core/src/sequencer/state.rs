//! Sequencer state snapshot types.

/// State-machine position of the sequencer on its current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown stopped: never started, paused, or an untimed step
    Idle,
    /// Countdown advancing once per tick
    Running,
    /// Countdown reached zero; the alert has fired for this step
    StepComplete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::StepComplete => "step-complete",
        }
    }
}

/// Point-in-time copy of the sequencer state, handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencerState {
    pub current_step_index: usize,
    pub total_steps: usize,
    pub time_remaining_seconds: u32,
    pub is_running: bool,
    pub audio_enabled: bool,
    pub overall_progress_percent: f64,
    pub phase: Phase,
    /// Instruction of the current step
    pub instruction: String,
    /// Countdown length of the current step, `None` when untimed
    pub step_duration: Option<u32>,
}

impl SequencerState {
    /// Whether `next()` would move.
    pub fn has_next(&self) -> bool {
        self.current_step_index + 1 < self.total_steps
    }

    /// Whether `previous()` would move.
    pub fn has_previous(&self) -> bool {
        self.current_step_index > 0
    }
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or nothing left to count
    Ignored,
    /// Still counting; carries the seconds remaining
    Counting(u32),
    /// This tick finished the countdown
    Completed,
}
