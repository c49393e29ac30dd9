//! Frame pump connecting the game core to a hand tracker and a renderer.
//!
//! The tracker writes one JSON frame per line; the host ticks the game once
//! per frame and answers with one snapshot line for the renderer.

pub mod config;
pub mod error;
pub mod protocol;
pub mod session;

pub use config::{load_config, parse_config};
pub use error::HostError;
pub use protocol::{parse_frame, Command, Frame};
pub use session::{run_session, Session, SessionSummary, Step};
