use crate::game::GameState;
use crate::types::{Ball, Phase, Scoreboard};

/// Whether the ball has left the play field horizontally.
pub fn out_of_bounds(state: &GameState) -> bool {
    let x = state.ball.position.x;
    x < state.config.out_left || x > state.config.out_right
}

/// Ends the round when the ball is out. Returns true only on the frame
/// the phase actually changes.
pub fn check_round_over(state: &mut GameState) -> bool {
    if state.phase == Phase::GameOver || !out_of_bounds(state) {
        return false;
    }
    state.phase = Phase::GameOver;
    tracing::info!(
        "Round over at x={}: score {}-{}",
        state.ball.position.x,
        state.scoreboard.left,
        state.scoreboard.right
    );
    true
}

/// Restores ball, scores and phase to their start values in one step.
///
/// Paddles keep their positions. Resetting a fresh round changes nothing.
pub fn reset_round(state: &mut GameState) {
    let ball = Ball::new(&state.config);
    state.ball = ball;
    state.scoreboard = Scoreboard::default();
    state.phase = Phase::Playing;
    state.latches = [false; 2];
    tracing::info!("Round reset");
}
