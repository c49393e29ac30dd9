//! Line-oriented JSON protocol between the tracker and the game.
//!
//! Each input line describes one camera frame:
//!
//! ```json
//! {"hands":[{"type":"Left","bbox":[412,300,180,210]}],"command":"reset"}
//! ```
//!
//! Both keys are optional. Hand entries are decoded one by one so a single
//! bad entry does not discard the rest of the frame.

use pong_core::{HandObservation, RawHandObservation};
use serde::Deserialize;
use serde_json::Value;

/// Control command attached to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reset" | "r" => Ok(Command::Reset),
            "quit" | "q" => Ok(Command::Quit),
            _ => Err(format!(
                "Invalid command: '{}'. Must be 'reset' or 'quit'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Reset => write!(f, "reset"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// Frame as it arrives on the wire.
#[derive(Debug, Default, Deserialize)]
struct FrameInput {
    #[serde(default)]
    hands: Option<Vec<Value>>,
    #[serde(default)]
    command: Option<String>,
}

/// One decoded frame: the usable observations and an optional command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub observations: Vec<HandObservation>,
    pub command: Option<Command>,
}

/// Decodes one protocol line. Blank lines yield `Ok(None)`.
///
/// Only a line that is not a JSON object of the expected shape is an error;
/// undecodable hands and unknown commands are skipped.
pub fn parse_frame(line: &str) -> Result<Option<Frame>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let input: FrameInput = serde_json::from_str(line)?;

    let observations = input
        .hands
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawHandObservation>(value) {
            Ok(raw) => raw.decode(),
            Err(e) => {
                tracing::debug!("Skipping malformed hand entry: {}", e);
                None
            }
        })
        .collect();

    let command = input.command.and_then(|s| match s.parse::<Command>() {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    });

    Ok(Some(Frame {
        observations,
        command,
    }))
}
