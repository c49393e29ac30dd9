use std::io::{BufRead, Write};

use pong_core::{FrameReport, GameConfig, GameOverSummary, GameState, Phase, Scoreboard};
use serde::Serialize;

use crate::error::HostError;
use crate::protocol::{parse_frame, Command, Frame};

/// Result of feeding one frame to a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Drives a [`GameState`] one frame at a time.
///
/// Commands are applied after the frame's tick, the same order a key press
/// read at the end of a frame would have.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    resets: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            resets: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle(&mut self, frame: &Frame) -> (FrameReport, Step) {
        let report = self.state.tick(&frame.observations);

        let step = match frame.command {
            Some(Command::Reset) => {
                self.state.reset();
                self.resets += 1;
                Step::Continue
            }
            Some(Command::Quit) => Step::Quit,
            None => Step::Continue,
        };

        (report, step)
    }

    pub fn summary(&self, quit: bool) -> SessionSummary {
        SessionSummary {
            frames: self.state.frame,
            resets: self.resets,
            final_phase: self.state.phase,
            scoreboard: self.state.scoreboard,
            game_over: self.state.game_over_summary(),
            quit,
        }
    }
}

/// Totals reported when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub resets: u32,
    pub final_phase: Phase,
    pub scoreboard: Scoreboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<GameOverSummary>,
    /// Ended by a quit command rather than end of input.
    pub quit: bool,
}

/// Reads frames from `input` until quit or end of input, writing one
/// snapshot JSON line per frame to `output`.
pub fn run_session<R: BufRead, W: Write>(
    config: GameConfig,
    input: R,
    mut output: W,
) -> Result<SessionSummary, HostError> {
    let mut session = Session::new(config);
    tracing::info!("Session started");

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let frame = match parse_frame(&line) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(source) => return Err(HostError::Protocol { line: idx + 1, source }),
        };

        let (report, step) = session.handle(&frame);
        if report.hits.any() {
            tracing::debug!(
                "Frame {}: score {}-{}",
                report.frame,
                session.state().scoreboard.left,
                session.state().scoreboard.right
            );
        }
        if report.round_over {
            if let Some(summary) = session.state().game_over_summary() {
                tracing::info!("Game over on frame {}, rallies: {}", report.frame, summary.display);
            }
        }

        let snapshot = session.state().snapshot();
        serde_json::to_writer(&mut output, &snapshot).map_err(HostError::Encode)?;
        writeln!(output)?;

        if step == Step::Quit {
            output.flush()?;
            let summary = session.summary(true);
            tracing::info!("Session ended by quit after {} frames", summary.frames);
            return Ok(summary);
        }
    }

    output.flush()?;
    let summary = session.summary(false);
    tracing::info!("Input closed after {} frames", summary.frames);
    Ok(summary)
}
