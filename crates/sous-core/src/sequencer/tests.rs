//! Tests for the step sequencer.

use std::sync::{Arc, Mutex};

use super::*;
use crate::models::CookingStep;

#[derive(Debug, Clone, PartialEq)]
enum Effect {
    Speak(String),
    Cancel,
    Alert,
    Notice(String),
}

/// Records every side effect in order and tracks the utterance in flight.
#[derive(Default)]
struct Recorder {
    effects: Mutex<Vec<Effect>>,
    speaking: Mutex<Option<String>>,
}

impl Recorder {
    fn effects(&self) -> Vec<Effect> {
        self.effects.lock().unwrap().clone()
    }

    fn count(&self, wanted: fn(&Effect) -> bool) -> usize {
        self.effects().iter().filter(|e| wanted(e)).count()
    }

    fn speaking(&self) -> Option<String> {
        self.speaking.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.effects.lock().unwrap().clear();
    }
}

impl Narrator for Recorder {
    fn speak(&self, text: &str) {
        *self.speaking.lock().unwrap() = Some(text.to_string());
        self.effects.lock().unwrap().push(Effect::Speak(text.to_string()));
    }

    fn cancel(&self) {
        *self.speaking.lock().unwrap() = None;
        self.effects.lock().unwrap().push(Effect::Cancel);
    }
}

impl AlertSink for Recorder {
    fn play_alert(&self) {
        self.effects.lock().unwrap().push(Effect::Alert);
    }
}

impl Notifier for Recorder {
    fn notify(&self, notice: Notice) {
        self.effects.lock().unwrap().push(Effect::Notice(notice.title));
    }
}

fn is_alert(e: &Effect) -> bool {
    matches!(e, Effect::Alert)
}

fn is_speak(e: &Effect) -> bool {
    matches!(e, Effect::Speak(_))
}

fn three_steps() -> Vec<CookingStep> {
    vec![
        CookingStep::new(1, "Sear the steak").with_duration(10),
        CookingStep::new(2, "Rest the meat"),
        CookingStep::new(3, "Slice and serve").with_duration(5),
    ]
}

fn create_test_sequencer(steps: Vec<CookingStep>) -> (Arc<Recorder>, StepSequencer) {
    let recorder = Arc::new(Recorder::default());
    let effects = SequencerEffects::new(recorder.clone(), recorder.clone(), recorder.clone());
    let sequencer = StepSequencer::new(steps, effects).expect("Failed to create sequencer");
    (recorder, sequencer)
}

#[test]
fn test_empty_recipe_is_rejected() {
    let result = StepSequencer::new(vec![], SequencerEffects::silent());
    assert!(matches!(result, Err(SousError::InvalidInput { .. })));
}

#[test]
fn test_starts_idle_on_first_step_and_narrates_it() {
    let (recorder, sequencer) = create_test_sequencer(three_steps());

    let state = sequencer.state();
    assert_eq!(state.current_step_index, 0);
    assert_eq!(state.time_remaining_seconds, 10);
    assert_eq!(state.phase, Phase::Idle);
    assert!(!state.is_running);
    assert!(state.audio_enabled);
    assert_eq!(state.overall_progress_percent, 0.0);
    assert_eq!(recorder.effects(), vec![Effect::Speak("Sear the steak".to_string())]);
}

#[test]
fn test_untimed_first_step_starts_at_zero() {
    let (_recorder, sequencer) =
        create_test_sequencer(vec![CookingStep::new(1, "Wash the rice")]);
    assert_eq!(sequencer.time_remaining_seconds(), 0);
    assert_eq!(sequencer.state().step_duration, None);
}

#[test]
fn test_zero_duration_is_untimed() {
    let (_recorder, mut sequencer) =
        create_test_sequencer(vec![CookingStep::new(1, "Stir").with_duration(0)]);
    sequencer.toggle();
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.state().step_duration, None);
}

#[test]
fn test_toggle_starts_and_pauses() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());

    sequencer.toggle();
    assert!(sequencer.is_running());
    assert_eq!(sequencer.phase(), Phase::Running);
    assert_eq!(sequencer.tick(), TickOutcome::Counting(9));

    sequencer.toggle();
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.phase(), Phase::Idle);
    assert_eq!(sequencer.tick(), TickOutcome::Ignored);
    assert_eq!(sequencer.time_remaining_seconds(), 9);
}

#[test]
fn test_toggle_is_noop_on_untimed_step() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());
    sequencer.next();
    sequencer.toggle();
    sequencer.toggle();
    sequencer.toggle();
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.phase(), Phase::Idle);
}

#[test]
fn test_tick_while_idle_is_ignored() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());
    assert_eq!(sequencer.tick(), TickOutcome::Ignored);
    assert_eq!(sequencer.time_remaining_seconds(), 10);
}

#[test]
fn test_countdown_completes_exactly_once() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());
    sequencer.toggle();

    for expected in (1..10).rev() {
        assert_eq!(sequencer.tick(), TickOutcome::Counting(expected));
    }
    assert_eq!(sequencer.tick(), TickOutcome::Completed);
    assert_eq!(sequencer.time_remaining_seconds(), 0);
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.phase(), Phase::StepComplete);

    // Lingering on the completed step never re-fires the alert.
    for _ in 0..5 {
        assert_eq!(sequencer.tick(), TickOutcome::Ignored);
    }
    sequencer.toggle();
    assert_eq!(sequencer.tick(), TickOutcome::Ignored);
    assert_eq!(sequencer.phase(), Phase::StepComplete);

    assert_eq!(recorder.count(is_alert), 1);
    assert_eq!(
        recorder.count(|e| matches!(e, Effect::Notice(t) if t == "Step completed!")),
        1
    );
    assert_eq!(sequencer.time_remaining_seconds(), 0);
}

#[test]
fn test_completion_without_audio_still_notifies() {
    let (recorder, mut sequencer) =
        create_test_sequencer(vec![CookingStep::new(1, "Toast").with_duration(1)]);
    sequencer.toggle_audio();
    sequencer.toggle();
    assert_eq!(sequencer.tick(), TickOutcome::Completed);
    assert_eq!(recorder.count(is_alert), 0);
    assert_eq!(recorder.count(|e| matches!(e, Effect::Notice(_))), 1);
}

#[test]
fn test_entering_any_step_resets_remaining_time() {
    let steps = three_steps();
    let (_recorder, mut sequencer) = create_test_sequencer(steps.clone());
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(sequencer.current_step_index(), index);
        assert_eq!(sequencer.time_remaining_seconds(), step.timer_seconds());
        sequencer.next();
    }
    for (index, step) in steps.iter().enumerate().rev() {
        assert_eq!(sequencer.current_step_index(), index);
        assert_eq!(sequencer.time_remaining_seconds(), step.timer_seconds());
        sequencer.previous();
    }
}

#[test]
fn test_navigation_stops_running_countdown() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());
    sequencer.toggle();
    sequencer.tick();
    assert!(sequencer.next());
    assert!(!sequencer.is_running());
    assert!(sequencer.previous());
    assert!(!sequencer.is_running());
    assert_eq!(sequencer.time_remaining_seconds(), 10);
    assert_eq!(sequencer.phase(), Phase::Idle);
}

#[test]
fn test_progress_tracks_index_after_every_transition() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());
    let check = |s: &StepSequencer| {
        let state = s.state();
        let expected = 100.0 * state.current_step_index as f64 / state.total_steps as f64;
        assert_eq!(state.overall_progress_percent, expected);
    };

    check(&sequencer);
    sequencer.toggle();
    check(&sequencer);
    sequencer.tick();
    check(&sequencer);
    sequencer.next();
    check(&sequencer);
    sequencer.next();
    check(&sequencer);
    sequencer.toggle_audio();
    check(&sequencer);
    sequencer.previous();
    check(&sequencer);
}

#[test]
fn test_boundaries_are_noops() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());
    recorder.clear();

    let before = sequencer.state();
    assert!(!sequencer.previous());
    assert_eq!(sequencer.state(), before);
    assert!(recorder.effects().is_empty());

    sequencer.next();
    sequencer.next();
    recorder.clear();
    let before = sequencer.state();
    assert!(!sequencer.next());
    assert_eq!(sequencer.state(), before);
    assert!(recorder.effects().is_empty());
}

#[test]
fn test_single_step_recipe_cannot_move() {
    let (_recorder, mut sequencer) = create_test_sequencer(vec![CookingStep::new(1, "Serve")]);
    assert!(!sequencer.next());
    assert!(!sequencer.previous());
    assert!(!sequencer.state().has_next());
    assert!(!sequencer.state().has_previous());
}

#[test]
fn test_narration_fires_once_per_step_entry() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());
    sequencer.toggle();
    for _ in 0..4 {
        sequencer.tick();
    }
    assert_eq!(recorder.count(is_speak), 1);

    sequencer.next();
    sequencer.previous();
    assert_eq!(
        recorder
            .effects()
            .into_iter()
            .filter(is_speak)
            .collect::<Vec<_>>(),
        vec![
            Effect::Speak("Sear the steak".to_string()),
            Effect::Speak("Rest the meat".to_string()),
            Effect::Speak("Sear the steak".to_string()),
        ]
    );
}

#[test]
fn test_muting_cancels_in_flight_narration() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());
    assert_eq!(recorder.speaking().as_deref(), Some("Sear the steak"));

    sequencer.toggle_audio();
    assert!(!sequencer.audio_enabled());
    assert_eq!(recorder.speaking(), None);
    assert_eq!(recorder.effects().last(), Some(&Effect::Cancel));

    // Muted transitions stay silent.
    sequencer.next();
    assert_eq!(recorder.count(is_speak), 1);

    // Re-enabling alone does not narrate; the next transition does.
    sequencer.toggle_audio();
    assert_eq!(recorder.count(is_speak), 1);
    sequencer.next();
    assert_eq!(recorder.speaking().as_deref(), Some("Slice and serve"));
    assert_eq!(recorder.count(is_speak), 2);
}

#[test]
fn test_started_muted_never_narrates() {
    let recorder = Arc::new(Recorder::default());
    let effects = SequencerEffects::new(recorder.clone(), recorder.clone(), recorder.clone());
    let mut sequencer = StepSequencer::with_audio(three_steps(), effects, false).unwrap();
    sequencer.next();
    assert_eq!(recorder.count(is_speak), 0);
}

#[test]
fn test_shutdown_cancels_narration_and_stops_countdown() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());
    sequencer.toggle();
    sequencer.shutdown();
    assert!(!sequencer.is_running());
    assert!(!sequencer.needs_timer());
    assert_eq!(recorder.speaking(), None);
}

#[test]
fn test_needs_timer() {
    let (_recorder, mut sequencer) = create_test_sequencer(three_steps());
    assert!(!sequencer.needs_timer());
    sequencer.toggle();
    assert!(sequencer.needs_timer());
    for _ in 0..10 {
        sequencer.tick();
    }
    assert!(!sequencer.needs_timer());
}

/// Three steps: 10s, untimed, 5s.
#[test]
fn test_guided_cooking_scenario() {
    let (recorder, mut sequencer) = create_test_sequencer(three_steps());

    assert_eq!(sequencer.phase(), Phase::Idle);
    assert_eq!(sequencer.time_remaining_seconds(), 10);

    sequencer.toggle();
    assert!(sequencer.is_running());
    let outcomes: Vec<_> = (0..10).map(|_| sequencer.tick()).collect();
    assert_eq!(outcomes.last(), Some(&TickOutcome::Completed));
    assert_eq!(recorder.count(is_alert), 1);
    assert!(!sequencer.is_running());

    assert!(sequencer.next());
    assert_eq!(sequencer.current_step_index(), 1);
    assert_eq!(sequencer.time_remaining_seconds(), 0);
    assert_eq!(recorder.speaking().as_deref(), Some("Rest the meat"));

    assert!(sequencer.next());
    assert_eq!(sequencer.current_step_index(), 2);
    assert_eq!(sequencer.time_remaining_seconds(), 5);

    let before = sequencer.state();
    assert!(!sequencer.next());
    assert_eq!(sequencer.state(), before);
}

#[test]
fn test_progress_percent_helper() {
    assert_eq!(progress_percent(0, 4), 0.0);
    assert_eq!(progress_percent(3, 4), 75.0);
    assert_eq!(progress_percent(0, 0), 0.0);
}

#[test]
fn test_format_time_is_reexported() {
    assert_eq!(format_time(5), "0:05");
    assert_eq!(format_time(65), "1:05");
    assert_eq!(format_time(0), "0:00");
}
