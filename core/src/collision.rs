//! Ball-paddle contact detection and response.
//!
//! Contact is a point-in-rectangle test on the ball's position against the
//! paddle's rectangle, with strict inequalities on every edge.

use serde::{Deserialize, Serialize};

use crate::adapter::TrackedSides;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::types::{Ball, Paddle, Side};

/// Sides whose paddle returned the ball this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hits {
    pub left: bool,
    pub right: bool,
}

impl Hits {
    pub fn any(&self) -> bool {
        self.left || self.right
    }

    fn set(&mut self, side: Side) {
        match side {
            Side::Left => self.left = true,
            Side::Right => self.right = true,
        }
    }
}

/// Horizontal extent `(lo, hi)` of a paddle's hit zone, exclusive on both ends.
///
/// The left zone extends rightwards by the sprite width; the right zone
/// extends leftwards from the paddle's x by a fixed depth.
pub fn hit_zone_x(paddle: &Paddle, config: &GameConfig) -> (i32, i32) {
    match paddle.side {
        Side::Left => (paddle.x, paddle.x.saturating_add(paddle.width)),
        Side::Right => (paddle.x.saturating_sub(config.right_hit_depth), paddle.x),
    }
}

/// Whether the ball's point position lies strictly inside the paddle's hit zone.
pub fn in_contact(ball: &Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    let (lo, hi) = hit_zone_x(paddle, config);
    let x = ball.position.x;
    lo < x && x < hi && paddle.spans_y(ball.position.y)
}

/// Bounces the ball off every tracked paddle it overlaps and credits the hit.
///
/// Untracked sides are never tested and keep their latch. With
/// `latch_contacts` off, a ball that stays inside a zone for several frames
/// scores on each of them.
pub fn resolve_collisions(state: &mut GameState, tracked: TrackedSides) -> Hits {
    let config = state.config;
    let mut hits = Hits::default();

    for side in Side::ALL {
        if !tracked.contains(side) {
            continue;
        }
        let paddle = *state.paddle(side);
        let touching = in_contact(&state.ball, &paddle, &config);

        if config.latch_contacts {
            // Only leaving the zone clears the latch.
            let latch = &mut state.latches[side.index()];
            if !touching {
                *latch = false;
                continue;
            }
            if *latch {
                continue;
            }
            *latch = true;
        } else if !touching {
            continue;
        }

        state.ball.velocity.x = state.ball.velocity.x.saturating_neg();
        let x = state.ball.position.x;
        state.ball.position.x = match side {
            Side::Left => x.saturating_add(config.push_out),
            Side::Right => x.saturating_sub(config.push_out),
        };
        state.scoreboard.record_hit(side);
        hits.set(side);

        tracing::debug!(
            "{} paddle hit at ({}, {}), score {}",
            side,
            state.ball.position.x,
            state.ball.position.y,
            state.scoreboard.get(side)
        );
    }

    hits
}
