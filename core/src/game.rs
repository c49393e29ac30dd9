use crate::adapter::{self, TrackedSides};
use crate::collision;
use crate::config::GameConfig;
use crate::physics;
use crate::round;
use crate::snapshot::{FrameReport, GameOverSummary, PaddleView, Snapshot};
use crate::types::{Ball, HandObservation, Paddle, Phase, Scoreboard, Side};

/// The single mutable aggregate advanced once per rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    /// Indexed by [`Side::index`].
    pub paddles: [Paddle; 2],
    pub scoreboard: Scoreboard,
    pub phase: Phase,
    /// Frames ticked since start, across resets.
    pub frame: u64,
    /// Sides seen on the most recent tick.
    pub tracked: TrackedSides,
    /// Per-side "already scored this contact" flags, used with `latch_contacts`.
    pub(crate) latches: [bool; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            ball: Ball::new(&config),
            paddles: [Paddle::new(Side::Left, &config), Paddle::new(Side::Right, &config)],
            scoreboard: Scoreboard::default(),
            phase: Phase::Playing,
            frame: 0,
            tracked: TrackedSides::default(),
            latches: [false; 2],
            config,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Runs one frame: paddles, collisions, the out-of-bounds check, then
    /// ball movement. The ball is frozen once the round is over.
    pub fn tick(&mut self, observations: &[HandObservation]) -> FrameReport {
        self.frame += 1;

        let tracked = adapter::apply_observations(self, observations);
        self.tracked = tracked;

        let mut report = FrameReport {
            frame: self.frame,
            tracked,
            ..FrameReport::default()
        };

        if self.is_over() {
            return report;
        }

        report.hits = collision::resolve_collisions(self, tracked);
        report.round_over = round::check_round_over(self);

        if !self.is_over() {
            physics::step_ball(&mut self.ball, &self.config);
            report.ball_moved = true;
        }

        report
    }

    /// Starts a new round. See [`round::reset_round`].
    pub fn reset(&mut self) {
        round::reset_round(self);
    }

    pub fn game_over_summary(&self) -> Option<GameOverSummary> {
        self.is_over().then(|| GameOverSummary::from(&self.scoreboard))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            ball: self.ball.position,
            ball_velocity: self.ball.velocity,
            left_paddle: PaddleView::new(self.paddle(Side::Left), self.tracked.left),
            right_paddle: PaddleView::new(self.paddle(Side::Right), self.tracked.right),
            scoreboard: self.scoreboard,
            phase: self.phase,
            game_over: self.game_over_summary(),
        }
    }
}
