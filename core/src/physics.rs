use crate::config::GameConfig;
use crate::types::Ball;

/// Advances the ball by one frame.
///
/// The wall test runs on the pre-move position, so a ball may overshoot a
/// wall by up to one step before it is reflected on the next frame.
/// Arithmetic saturates at the `i32` limits.
pub fn step_ball(ball: &mut Ball, config: &GameConfig) {
    let y = ball.position.y;
    if y >= config.wall_bottom || y <= config.wall_top {
        ball.velocity.y = ball.velocity.y.saturating_neg();
    }

    ball.position += ball.velocity;
}
