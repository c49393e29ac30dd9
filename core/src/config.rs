use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Side;

/// Tunable geometry of a game.
///
/// Defaults reproduce the 1280x720 layout. Fields missing from a config
/// file fall back to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Paddle sprite width; both paddles share the sprite size.
    pub paddle_width: i32,
    /// Paddle sprite height.
    pub paddle_height: i32,
    pub paddle_y_min: i32,
    pub paddle_y_max: i32,
    pub left_paddle_x: i32,
    pub right_paddle_x: i32,
    pub right_hit_depth: i32,
    pub push_out: i32,
    pub wall_top: i32,
    pub wall_bottom: i32,
    pub out_left: i32,
    pub out_right: i32,
    pub ball_start: (i32, i32),
    pub ball_velocity: (i32, i32),
    /// Score a paddle contact once instead of on every overlapping frame.
    pub latch_contacts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y_min: PADDLE_Y_MIN,
            paddle_y_max: PADDLE_Y_MAX,
            left_paddle_x: LEFT_PADDLE_X,
            right_paddle_x: RIGHT_PADDLE_X,
            right_hit_depth: RIGHT_HIT_DEPTH,
            push_out: PUSH_OUT,
            wall_top: WALL_TOP,
            wall_bottom: WALL_BOTTOM,
            out_left: OUT_LEFT,
            out_right: OUT_RIGHT,
            ball_start: BALL_START,
            ball_velocity: BALL_VELOCITY,
            latch_contacts: false,
        }
    }
}

impl GameConfig {
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Allowed range for a paddle's top edge. An inverted range collapses
    /// to its lower bound so clamping never panics.
    pub fn paddle_clip_range(&self) -> (i32, i32) {
        if self.paddle_y_min > self.paddle_y_max {
            (self.paddle_y_min, self.paddle_y_min)
        } else {
            (self.paddle_y_min, self.paddle_y_max)
        }
    }

    /// Checks the values a config file could get wrong.
    ///
    /// The defaults always pass. An inverted paddle clip range is tolerated
    /// (see [`GameConfig::paddle_clip_range`]); inverted walls or bounds are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.wall_top >= self.wall_bottom {
            return Err(ConfigError::Walls {
                top: self.wall_top,
                bottom: self.wall_bottom,
            });
        }
        if self.out_left >= self.out_right {
            return Err(ConfigError::Bounds {
                left: self.out_left,
                right: self.out_right,
            });
        }
        if self.push_out < 0 || self.right_hit_depth < 0 {
            return Err(ConfigError::Negative);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("paddle size must be positive, got {width}x{height}")]
    PaddleSize { width: i32, height: i32 },

    #[error("wall_top ({top}) must be above wall_bottom ({bottom})")]
    Walls { top: i32, bottom: i32 },

    #[error("out_left ({left}) must be less than out_right ({right})")]
    Bounds { left: i32, right: i32 },

    #[error("push_out and right_hit_depth must not be negative")]
    Negative,
}
