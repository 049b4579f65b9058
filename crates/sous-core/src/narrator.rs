//! Step narration through the platform's text-to-speech.
//!
//! Narration is fire-and-forget: [`Narrator::speak`] starts an utterance and
//! returns immediately, and nothing reports completion back to the caller.
//! Starting a new utterance always cancels the one in flight.
//!
//! Windows and macOS speak through the native engine via `tts`. Linux has no
//! engine without speech-dispatcher, so it runs `espeak` as a child process.
//! A configured command replaces the default on every platform.

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use log::{debug, warn};

use crate::config::SpeechConfig;

/// Reads text aloud.
pub trait Narrator: Send + Sync {
    /// Cancels any in-flight utterance, then starts speaking `text`.
    fn speak(&self, text: &str);

    /// Stops any in-flight utterance. Safe to call when nothing is speaking.
    fn cancel(&self);
}

/// Narrator backed by the platform speech engine or an external program.
pub struct SpeechNarrator {
    voice: Voice,
}

enum Voice {
    Disabled,
    /// One child process per utterance; cancelling kills and reaps it.
    Command {
        program: String,
        args: Vec<String>,
        current: Mutex<Option<Child>>,
    },
    #[cfg(not(target_os = "linux"))]
    Engine(engine::Engine),
}

static SHARED_NARRATOR: OnceLock<Arc<SpeechNarrator>> = OnceLock::new();

impl SpeechNarrator {
    /// Creates a narrator for the given configuration. A disabled
    /// configuration produces a narrator that never speaks.
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            voice: voice(config),
        }
    }

    /// Returns the process-wide narrator, creating it on first use.
    ///
    /// The configuration of the first caller wins.
    pub fn shared(config: &SpeechConfig) -> Arc<SpeechNarrator> {
        SHARED_NARRATOR
            .get_or_init(|| Arc::new(SpeechNarrator::new(config)))
            .clone()
    }

    /// Whether a narration process is still running. Always false for the
    /// native engine, which does not report progress.
    pub fn is_speaking(&self) -> bool {
        let Voice::Command { current, .. } = &self.voice else {
            return false;
        };
        let mut current = current.lock().unwrap_or_else(PoisonError::into_inner);
        match current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    fn stop(current: &mut Option<Child>) {
        let Some(mut child) = current.take() else {
            return;
        };
        if let Ok(Some(_)) = child.try_wait() {
            return;
        }
        if let Err(e) = child.kill() {
            warn!("Failed to stop narration: {e}");
        }
        if let Err(e) = child.wait() {
            debug!("Failed to reap narration process: {e}");
        }
    }
}

impl Narrator for SpeechNarrator {
    fn speak(&self, text: &str) {
        match &self.voice {
            Voice::Disabled => debug!("Narration disabled, skipping: {text}"),
            Voice::Command {
                program,
                args,
                current,
            } => {
                let mut current = current.lock().unwrap_or_else(PoisonError::into_inner);
                Self::stop(&mut current);
                match Command::new(program)
                    .args(args)
                    .arg(text)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                {
                    Ok(child) => *current = Some(child),
                    Err(e) => warn!("Failed to start narration with '{program}': {e}"),
                }
            }
            #[cfg(not(target_os = "linux"))]
            Voice::Engine(engine) => engine.speak(text),
        }
    }

    fn cancel(&self) {
        match &self.voice {
            Voice::Disabled => {}
            Voice::Command { current, .. } => {
                let mut current = current.lock().unwrap_or_else(PoisonError::into_inner);
                Self::stop(&mut current);
            }
            #[cfg(not(target_os = "linux"))]
            Voice::Engine(engine) => engine.stop(),
        }
    }
}

impl Drop for SpeechNarrator {
    fn drop(&mut self) {
        if let Voice::Command { current, .. } = &mut self.voice {
            Self::stop(current.get_mut().unwrap_or_else(PoisonError::into_inner));
        }
    }
}

fn voice(config: &SpeechConfig) -> Voice {
    if !config.enabled {
        return Voice::Disabled;
    }
    match &config.command {
        Some(command) => split_command(command).map_or(Voice::Disabled, |(program, args)| {
            Voice::command(program, args)
        }),
        None => default_voice(config),
    }
}

impl Voice {
    fn command(program: String, args: Vec<String>) -> Self {
        Voice::Command {
            program,
            args,
            current: Mutex::new(None),
        }
    }
}

/// Splits a configured command line into program and leading arguments.
fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

#[cfg(target_os = "linux")]
fn default_voice(config: &SpeechConfig) -> Voice {
    Voice::command(
        "espeak".to_string(),
        vec![
            "-s".to_string(),
            config.rate_wpm.to_string(),
            "-p".to_string(),
            config.pitch.min(99).to_string(),
        ],
    )
}

#[cfg(not(target_os = "linux"))]
fn default_voice(config: &SpeechConfig) -> Voice {
    Voice::Engine(engine::Engine::spawn(config.rate_wpm))
}

/// The native speech engine. `tts::Tts` lives on the thread that created it
/// and is driven over a channel.
#[cfg(not(target_os = "linux"))]
mod engine {
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread;

    use log::{debug, warn};

    /// Words per minute the engine's normal rate roughly corresponds to.
    const NORMAL_WPM: f32 = 175.0;

    enum Request {
        Speak(String),
        Stop,
    }

    pub(super) struct Engine {
        requests: Sender<Request>,
    }

    impl Engine {
        pub(super) fn spawn(rate_wpm: u32) -> Self {
            let (requests, rx) = mpsc::channel();
            let spawned = thread::Builder::new()
                .name("sous-tts".to_string())
                .spawn(move || run(rx, rate_wpm));
            if let Err(e) = spawned {
                warn!("Failed to start the speech engine: {e}");
            }
            Self { requests }
        }

        pub(super) fn speak(&self, text: &str) {
            self.send(Request::Speak(text.to_string()));
        }

        pub(super) fn stop(&self) {
            self.send(Request::Stop);
        }

        fn send(&self, request: Request) {
            if self.requests.send(request).is_err() {
                debug!("Speech engine is not running");
            }
        }
    }

    /// Serves requests until every sender is dropped.
    fn run(requests: Receiver<Request>, rate_wpm: u32) {
        let mut tts = match tts::Tts::default() {
            Ok(tts) => tts,
            Err(e) => {
                warn!("Text-to-speech is unavailable: {e}");
                return;
            }
        };
        let rate = scaled_rate(tts.normal_rate(), tts.min_rate(), tts.max_rate(), rate_wpm);
        if let Err(e) = tts.set_rate(rate) {
            debug!("Failed to set speech rate: {e}");
        }

        for request in requests {
            let result = match request {
                Request::Speak(text) => tts.speak(text, true).map(|_| ()),
                Request::Stop => tts.stop().map(|_| ()),
            };
            if let Err(e) = result {
                warn!("Narration failed: {e}");
            }
        }
    }

    /// Scales the engine's normal rate by `rate_wpm`, within its limits.
    fn scaled_rate(normal: f32, min: f32, max: f32, rate_wpm: u32) -> f32 {
        (normal * rate_wpm as f32 / NORMAL_WPM).clamp(min, max)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_command(command: &str) -> SpeechConfig {
        SpeechConfig {
            command: Some(command.to_string()),
            ..SpeechConfig::default()
        }
    }

    #[test]
    fn test_disabled_config_is_silent() {
        let config = SpeechConfig {
            enabled: false,
            ..config_with_command("espeak")
        };
        assert!(matches!(voice(&config), Voice::Disabled));
    }

    #[test]
    fn test_custom_command_is_split() {
        let Voice::Command { program, args, .. } = voice(&config_with_command("espeak -v en-us"))
        else {
            panic!("expected a command voice");
        };
        assert_eq!(program, "espeak");
        assert_eq!(args, vec!["-v".to_string(), "en-us".to_string()]);
    }

    #[test]
    fn test_blank_custom_command_disables_narration() {
        assert!(matches!(voice(&config_with_command("   ")), Voice::Disabled));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_default_voice_is_espeak_with_rate_and_pitch() {
        let Voice::Command { program, args, .. } = voice(&SpeechConfig::default()) else {
            panic!("expected espeak");
        };
        assert_eq!(program, "espeak");
        assert_eq!(args, vec!["-s", "157", "-p", "50"]);
    }

    #[test]
    fn test_missing_program_is_swallowed() {
        let narrator = SpeechNarrator::new(&config_with_command("sous-no-such-tts-binary"));
        narrator.speak("Chop the onions");
        assert!(!narrator.is_speaking());
        narrator.cancel();
    }

    #[cfg(unix)]
    #[test]
    fn test_cancel_stops_in_flight_utterance() {
        // `sleep` stands in for a long utterance; the text is its argument.
        let narrator = SpeechNarrator::new(&config_with_command("sleep"));
        narrator.speak("30");
        assert!(narrator.is_speaking());
        narrator.cancel();
        assert!(!narrator.is_speaking());
    }

    #[cfg(unix)]
    #[test]
    fn test_speak_replaces_previous_utterance() {
        let narrator = SpeechNarrator::new(&config_with_command("sleep"));
        narrator.speak("30");
        narrator.speak("30");
        assert!(narrator.is_speaking());
        narrator.cancel();
        assert!(!narrator.is_speaking());
    }
}
