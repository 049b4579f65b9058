//! The cooking screen: drives a [`CookingSession`] from terminal input.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use sous_core::display::SessionView;
use sous_core::{
    AlertPlayer, Config, CookingSession, Recipe, SequencerEffects, SequencerState,
    SessionCommand, SpeechNarrator, StepSequencer,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

/// Line-oriented stdin shared by every interactive screen.
pub type InputLines = Lines<BufReader<Stdin>>;

pub fn stdin_lines() -> InputLines {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Maps a typed line to a session command.
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    match line.trim().to_lowercase().as_str() {
        "t" | "toggle" | "start" | "pause" | "" => Some(SessionCommand::Toggle),
        "n" | "next" => Some(SessionCommand::Next),
        "p" | "prev" | "previous" => Some(SessionCommand::Previous),
        "m" | "mute" | "unmute" => Some(SessionCommand::ToggleAudio),
        "q" | "quit" | "exit" | "close" => Some(SessionCommand::Exit),
        _ => None,
    }
}

/// Builds the sequencer effects from the process-wide speech and alert
/// players.
pub fn effects(config: &Config, renderer: Arc<TerminalRenderer>) -> SequencerEffects {
    SequencerEffects::new(
        SpeechNarrator::shared(&config.speech),
        AlertPlayer::shared(&config.alert),
        renderer,
    )
}

/// Runs cooking mode for `recipe` until the cook closes it or input ends.
/// Returns the state the session ended in.
pub async fn cook(
    recipe: &Recipe,
    effects: SequencerEffects,
    audio_enabled: bool,
    renderer: &TerminalRenderer,
    input: &mut InputLines,
) -> Result<SequencerState> {
    let sequencer = StepSequencer::with_audio(recipe.steps.clone(), effects, audio_enabled)
        .context("Failed to start cooking mode")?;
    let (session, mut state_rx) = CookingSession::new(sequencer);
    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(session.run(rx));

    let mut shown = state_rx.borrow_and_update().clone();
    draw(renderer, &recipe.title, &shown)?;

    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = state_rx.borrow_and_update().clone();
                if needs_redraw(renderer, &shown, &state) {
                    draw(renderer, &recipe.title, &state)?;
                }
                shown = state;
            }
            line = input.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed, leaving cooking mode");
                    break;
                };
                match parse_command(&line) {
                    Some(SessionCommand::Exit) => break,
                    Some(command) => {
                        if tx.send(command).await.is_err() {
                            break;
                        }
                    }
                    None => renderer.render("Commands: [t]oggle timer, [n]ext, [p]revious, [m]ute, [q]uit\n")?,
                }
            }
        }
    }

    // Exit is best-effort: the session also stops when the sender drops.
    let _ = tx.send(SessionCommand::Exit).await;
    drop(tx);
    handle.await.context("Cooking session task failed")
}

/// Plain output only reprints when something other than the countdown
/// changed; rich output redraws every second.
fn needs_redraw(renderer: &TerminalRenderer, shown: &SequencerState, state: &SequencerState) -> bool {
    if renderer.is_rich() {
        return shown != state;
    }
    shown.current_step_index != state.current_step_index
        || shown.phase != state.phase
        || shown.audio_enabled != state.audio_enabled
}

fn draw(renderer: &TerminalRenderer, title: &str, state: &SequencerState) -> Result<()> {
    renderer.clear()?;
    renderer.render(&SessionView::new(title, state).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("n"), Some(SessionCommand::Next));
        assert_eq!(parse_command(" Previous "), Some(SessionCommand::Previous));
        assert_eq!(parse_command(""), Some(SessionCommand::Toggle));
        assert_eq!(parse_command("mute"), Some(SessionCommand::ToggleAudio));
        assert_eq!(parse_command("q"), Some(SessionCommand::Exit));
        assert_eq!(parse_command("dance"), None);
    }
}
