use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::adapter::TrackedSides;
use crate::collision::Hits;
use crate::types::{Paddle, Phase, Scoreboard, Side, Vector2};

/// Paddle as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub x: i32,
    pub y_top: i32,
    pub width: i32,
    pub height: i32,
    /// Only paddles with a hand in view are drawn.
    pub tracked: bool,
}

impl PaddleView {
    pub fn new(paddle: &Paddle, tracked: bool) -> Self {
        Self {
            side: paddle.side,
            x: paddle.x,
            y_top: paddle.y_top,
            width: paddle.width,
            height: paddle.height,
            tracked,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub ball: Vector2,
    pub ball_velocity: Vector2,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    pub scoreboard: Scoreboard,
    pub phase: Phase,
    /// Present once the round is over.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub game_over: Option<GameOverSummary>,
}

/// Game-over screen contents: the combined rally count, zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub left: u32,
    pub right: u32,
    pub total: u32,
    pub display: String,
}

impl From<&Scoreboard> for GameOverSummary {
    fn from(scores: &Scoreboard) -> Self {
        let total = scores.total();
        Self {
            left: scores.left,
            right: scores.right,
            total,
            display: format!("{:02}", total),
        }
    }
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    pub tracked: TrackedSides,
    pub hits: Hits,
    /// The round ended on this frame.
    pub round_over: bool,
    /// The ball moved on this frame.
    pub ball_moved: bool,
}
