//! Maps per-frame hand detections onto paddle positions.

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::types::{HandObservation, Side};

/// Sides that had a hand in view this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSides {
    pub left: bool,
    pub right: bool,
}

impl TrackedSides {
    pub fn contains(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn insert(&mut self, side: Side) {
        match side {
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }
}

/// Paddle top edge for a hand whose bounding box starts at `bbox_y`:
/// the paddle is centred on that y, then clipped into `[min, max]`.
pub fn paddle_top_for(bbox_y: i32, paddle_height: i32, (min, max): (i32, i32)) -> i32 {
    bbox_y.saturating_sub(paddle_height / 2).clamp(min, max)
}

/// Moves each observed side's paddle and reports which sides were seen.
///
/// The first observation for a side wins; later duplicates are ignored.
/// Unobserved paddles keep their previous position.
pub fn apply_observations(state: &mut GameState, observations: &[HandObservation]) -> TrackedSides {
    let range = state.config.paddle_clip_range();
    let mut tracked = TrackedSides::default();

    for obs in observations {
        if tracked.contains(obs.side) {
            tracing::debug!("Ignoring duplicate {} hand observation", obs.side);
            continue;
        }
        tracked.insert(obs.side);

        let paddle = state.paddle_mut(obs.side);
        paddle.y_top = paddle_top_for(obs.bounding_box.y, paddle.height, range);
    }

    tracked
}
