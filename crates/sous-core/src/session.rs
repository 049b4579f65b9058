//! A live cooking session: the step sequencer driven by a one-second timer.
//!
//! [`CookingSession`] owns the [`StepSequencer`] and the only
//! [`CountdownTimer`] of the session. Front ends never touch the sequencer
//! directly; they send [`SessionCommand`]s and watch [`SequencerState`]
//! snapshots.
//!
//! ```text
//!  commands (mpsc) ──▶ ┌──────────────────────┐ ──▶ snapshots (watch)
//!                      │ CookingSession::run  │
//!  CountdownTimer ───▶ │   StepSequencer      │
//!                      └──────────────────────┘
//! ```
//!
//! The timer is armed exactly while the sequencer is running with time left,
//! and it is dropped together with the session.

use std::future;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::sequencer::{SequencerState, StepSequencer, TickOutcome};

/// Countdown resolution.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Controls available while cooking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start or pause the countdown
    Toggle,
    /// Go to the next step
    Next,
    /// Go back one step
    Previous,
    /// Mute or unmute narration and alerts
    ToggleAudio,
    /// Leave cooking mode
    Exit,
}

/// A one-second periodic timer that can be switched on and off.
///
/// Arming creates a fresh interval whose first tick is one period later, so
/// a resumed countdown always waits a full second before losing one.
#[derive(Debug, Default)]
pub struct CountdownTimer {
    interval: Option<Interval>,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking. Does nothing if already armed.
    pub fn arm(&mut self) {
        if self.interval.is_none() {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            self.interval = Some(interval);
            debug!("Countdown timer armed");
        }
    }

    /// Stops ticking and releases the interval.
    pub fn disarm(&mut self) {
        if self.interval.take().is_some() {
            debug!("Countdown timer disarmed");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Waits for the next tick. Never completes while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending().await,
        }
    }
}

/// Owns one cooking session.
pub struct CookingSession {
    sequencer: StepSequencer,
    timer: CountdownTimer,
    state_tx: watch::Sender<SequencerState>,
}

impl CookingSession {
    /// Wraps a sequencer. The receiver sees the initial state immediately.
    pub fn new(sequencer: StepSequencer) -> (Self, watch::Receiver<SequencerState>) {
        let (state_tx, state_rx) = watch::channel(sequencer.state());
        let session = Self {
            sequencer,
            timer: CountdownTimer::new(),
            state_tx,
        };
        (session, state_rx)
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Applies one command, re-synchronizes the timer and publishes the new
    /// state. Returns `false` for [`SessionCommand::Exit`].
    pub fn apply(&mut self, command: SessionCommand) -> bool {
        debug!("Session command {command:?}");
        match command {
            SessionCommand::Toggle => self.sequencer.toggle(),
            SessionCommand::Next => {
                self.sequencer.next();
            }
            SessionCommand::Previous => {
                self.sequencer.previous();
            }
            SessionCommand::ToggleAudio => self.sequencer.toggle_audio(),
            SessionCommand::Exit => return false,
        }
        self.sync();
        true
    }

    /// Processes commands and timer ticks until [`SessionCommand::Exit`]
    /// arrives or every command sender is dropped. Returns the final state.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand>) -> SequencerState {
        info!(
            "Cooking session started ({} steps)",
            self.sequencer.total_steps()
        );
        loop {
            tokio::select! {
                biased;
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if !self.apply(command) {
                        break;
                    }
                }
                () = self.timer.tick() => {
                    if self.sequencer.tick() == TickOutcome::Completed {
                        info!("Step {} completed", self.sequencer.current_step_index() + 1);
                    }
                    self.sync();
                }
            }
        }
        self.finish()
    }

    fn sync(&mut self) {
        if self.sequencer.needs_timer() {
            self.timer.arm();
        } else {
            self.timer.disarm();
        }
        self.state_tx.send_replace(self.sequencer.state());
    }

    fn finish(mut self) -> SequencerState {
        self.timer.disarm();
        self.sequencer.shutdown();
        let state = self.sequencer.state();
        self.state_tx.send_replace(state.clone());
        info!("Cooking session ended on step {}", state.current_step_index + 1);
        state
    }
}
