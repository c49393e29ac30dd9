use alloc::string::String;
use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GameConfig;

/// Axis pair used for both position and velocity, in field units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x.saturating_add(rhs.x);
        self.y = self.y.saturating_add(rhs.y);
    }
}

/// Which player a hand (and its paddle) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Slot index for per-side arrays: Left = 0, Right = 1.
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Returned when a hand classification is neither left nor right.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand side: '{0}'")]
pub struct UnknownSide(pub String);

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("left") {
            Ok(Side::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Side::Right)
        } else {
            Err(UnknownSide(s.into()))
        }
    }
}

/// Tracked hand extent in the current frame: (x, y, width, height).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<[i32; 4]> for BoundingBox {
    fn from([x, y, width, height]: [i32; 4]) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One detected hand for one frame. Consumed by the adapter and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandObservation {
    pub side: Side,
    pub bounding_box: BoundingBox,
}

impl HandObservation {
    pub fn new(side: Side, bounding_box: impl Into<BoundingBox>) -> Self {
        Self {
            side,
            bounding_box: bounding_box.into(),
        }
    }
}

/// Hand record as emitted by the tracker, before validation.
///
/// Both fields are optional so a partially filled record still decodes;
/// [`RawHandObservation::decode`] drops anything incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHandObservation {
    #[serde(rename = "type", default)]
    pub hand_type: Option<String>,
    #[serde(default)]
    pub bbox: Option<[i32; 4]>,
}

impl RawHandObservation {
    /// Returns `None` for an unknown side or a missing bounding box.
    pub fn decode(&self) -> Option<HandObservation> {
        let side = match self.hand_type.as_deref()?.parse::<Side>() {
            Ok(side) => side,
            Err(e) => {
                tracing::debug!("Skipping hand observation: {}", e);
                return None;
            }
        };
        let Some(bbox) = self.bbox else {
            tracing::debug!("Skipping {} hand observation without bbox", side);
            return None;
        };
        Some(HandObservation::new(side, bbox))
    }
}

/// A player's bat. Only `y_top` changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: i32,
    pub y_top: i32,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let (y_min, _) = config.paddle_clip_range();
        Self {
            side,
            x: config.paddle_x(side),
            y_top: y_min,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Strict vertical overlap test against a point's y.
    pub fn spans_y(&self, y: i32) -> bool {
        self.y_top < y && y < self.y_top.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Ball {
    /// Ball at its configured start position and velocity.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.ball_start.into(),
            velocity: config.ball_velocity.into(),
        }
    }
}

/// Successful paddle contacts per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn record_hit(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Combined rally count shown on the game-over screen.
    pub fn total(&self) -> u32 {
        self.left.saturating_add(self.right)
    }
}

/// Round macro-state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}
