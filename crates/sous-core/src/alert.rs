//! Completion alert playback.
//!
//! [`AlertPlayer`] builds its playback handle lazily on the first alert and
//! reuses it afterwards. Every call restarts the clip from the beginning;
//! alerts never queue behind each other. Playback is best-effort: failures
//! are logged and never reach the caller.
//!
//! With the `playback` feature the handle owns a dedicated audio thread that
//! plays the configured clip through `rodio`. Without it the handle rings the
//! terminal bell.

use std::sync::{Arc, OnceLock};

use log::debug;

use crate::config::AlertConfig;

/// Plays the step-completed alert.
pub trait AlertSink: Send + Sync {
    fn play_alert(&self);
}

/// Alert player with a lazily created, reusable handle.
pub struct AlertPlayer {
    enabled: bool,
    clip: String,
    handle: OnceLock<AlertHandle>,
}

static SHARED_PLAYER: OnceLock<Arc<AlertPlayer>> = OnceLock::new();

impl AlertPlayer {
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            enabled: config.enabled,
            clip: config.clip.clone(),
            handle: OnceLock::new(),
        }
    }

    /// Returns the process-wide player, creating it on first use.
    ///
    /// The configuration of the first caller wins.
    pub fn shared(config: &AlertConfig) -> Arc<AlertPlayer> {
        SHARED_PLAYER
            .get_or_init(|| Arc::new(AlertPlayer::new(config)))
            .clone()
    }

    /// Whether the playback handle has been created yet.
    pub fn is_initialized(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl AlertSink for AlertPlayer {
    fn play_alert(&self) {
        if !self.enabled {
            debug!("Alert disabled, skipping");
            return;
        }
        self.handle
            .get_or_init(|| AlertHandle::open(&self.clip))
            .restart();
    }
}

#[cfg(not(feature = "playback"))]
use bell::AlertHandle;
#[cfg(feature = "playback")]
use playback::AlertHandle;

#[cfg(not(feature = "playback"))]
mod bell {
    use std::io::Write;

    use log::{debug, warn};

    pub(super) struct AlertHandle;

    impl AlertHandle {
        pub(super) fn open(clip: &str) -> Self {
            debug!("Audio playback not compiled in, using terminal bell instead of {clip}");
            AlertHandle
        }

        pub(super) fn restart(&self) {
            let mut stderr = std::io::stderr();
            if let Err(e) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
                warn!("Error playing alert: {e}");
            }
        }
    }
}

#[cfg(feature = "playback")]
mod playback {
    use std::io::{Cursor, Read};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::Arc;
    use std::thread;

    use log::{debug, warn};
    use rodio::{Decoder, OutputStream, Sink};

    /// Largest clip accepted from a remote URL.
    const MAX_CLIP_BYTES: u64 = 8 * 1024 * 1024;

    pub(super) struct AlertHandle {
        trigger: Option<Sender<()>>,
    }

    impl AlertHandle {
        pub(super) fn open(clip: &str) -> Self {
            let (trigger, requests) = mpsc::channel();
            let clip = clip.to_string();
            let spawned = thread::Builder::new()
                .name("sous-alert".to_string())
                .spawn(move || run(&clip, &requests));
            match spawned {
                Ok(_) => Self {
                    trigger: Some(trigger),
                },
                Err(e) => {
                    warn!("Failed to start alert thread: {e}");
                    Self { trigger: None }
                }
            }
        }

        pub(super) fn restart(&self) {
            let Some(trigger) = &self.trigger else {
                return;
            };
            if trigger.send(()).is_err() {
                warn!("Alert thread is gone, alert dropped");
            }
        }
    }

    fn run(clip: &str, requests: &Receiver<()>) {
        let mut clip_bytes: Option<Arc<[u8]>> = None;
        let mut output = None;
        let mut playing: Option<Sink> = None;

        while requests.recv().is_ok() {
            if let Some(sink) = playing.take() {
                sink.stop();
            }

            if clip_bytes.is_none() {
                match load_clip(clip) {
                    Ok(bytes) => clip_bytes = Some(bytes.into()),
                    Err(e) => {
                        warn!("Error loading alert clip {clip}: {e}");
                        continue;
                    }
                }
            }
            if output.is_none() {
                match OutputStream::try_default() {
                    Ok(stream) => output = Some(stream),
                    Err(e) => {
                        warn!("Error opening audio output: {e}");
                        continue;
                    }
                }
            }

            let (Some(bytes), Some((_stream, handle))) = (&clip_bytes, &output) else {
                continue;
            };
            let source = match Decoder::new(Cursor::new(Arc::clone(bytes))) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Error decoding alert clip: {e}");
                    continue;
                }
            };
            match Sink::try_new(handle) {
                Ok(sink) => {
                    sink.append(source);
                    playing = Some(sink);
                }
                Err(e) => warn!("Error playing sound: {e}"),
            }
        }
        debug!("Alert thread exiting");
    }

    fn load_clip(clip: &str) -> Result<Vec<u8>, String> {
        if clip.starts_with("http://") || clip.starts_with("https://") {
            let response = ureq::get(clip).call().map_err(|e| e.to_string())?;
            let mut bytes = Vec::new();
            response
                .into_reader()
                .take(MAX_CLIP_BYTES)
                .read_to_end(&mut bytes)
                .map_err(|e| e.to_string())?;
            Ok(bytes)
        } else {
            std::fs::read(clip).map_err(|e| e.to_string())
        }
    }
}
