//! Per-frame game logic for two-player hand-tracked pong.
//!
//! Each player's paddle follows the bounding box of a tracked hand. A
//! [`GameState`] is advanced once per rendered frame with [`GameState::tick`];
//! capture, tracking and drawing live outside this crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adapter;
pub mod collision;
pub mod config;
pub mod constants;
pub mod game;
pub mod physics;
pub mod round;
pub mod snapshot;
pub mod types;

pub use adapter::TrackedSides;
pub use collision::Hits;
pub use config::{ConfigError, GameConfig};
pub use game::GameState;
pub use snapshot::{FrameReport, GameOverSummary, PaddleView, Snapshot};
pub use types::{
    Ball, BoundingBox, HandObservation, Paddle, Phase, RawHandObservation, Scoreboard, Side,
    UnknownSide, Vector2,
};
