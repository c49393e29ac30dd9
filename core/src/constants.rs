// Play-field constants for the 1280x720 camera frame.
// Every value is in field units (pixels) and applies once per rendered frame.

/// Fixed x of the left paddle's top-left corner
pub const LEFT_PADDLE_X: i32 = 59;

/// Fixed x of the right paddle's top-left corner
pub const RIGHT_PADDLE_X: i32 = 1195;

/// Depth of the right paddle's hit zone, measured leftwards from its x
pub const RIGHT_HIT_DEPTH: i32 = 50;

/// Lowest allowed paddle top edge
pub const PADDLE_Y_MIN: i32 = 20;

/// Highest allowed paddle top edge
pub const PADDLE_Y_MAX: i32 = 415;

/// Paddle sprite width (pixels)
pub const PADDLE_WIDTH: i32 = 50;

/// Paddle sprite height (pixels)
pub const PADDLE_HEIGHT: i32 = 120;

/// Distance the ball is pushed away from a paddle after a hit
pub const PUSH_OUT: i32 = 30;

/// Ball bounces off the top wall at or above this y
pub const WALL_TOP: i32 = 10;

/// Ball bounces off the bottom wall at or below this y
pub const WALL_BOTTOM: i32 = 500;

/// Round ends when the ball's x drops below this
pub const OUT_LEFT: i32 = 40;

/// Round ends when the ball's x exceeds this
pub const OUT_RIGHT: i32 = 1200;

/// Ball position at the start of a round
pub const BALL_START: (i32, i32) = (100, 100);

/// Ball velocity at the start of a round (field units per frame)
pub const BALL_VELOCITY: (i32, i32) = (15, 15);
