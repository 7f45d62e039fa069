//! Duo Pong - a classic two-player ball-and-paddle game
//!
//! Core modules:
//! - `sim`: deterministic fixed-frame simulation (paddles, ball, scoring)
//! - `platform`: boundary traits for input, drawing and sound, plus
//!   headless implementations
//! - `app`: the 60 Hz frame loop composing the two
//! - `settings`: user preferences
//!
//! The simulation works in exact integer pixels and carries no platform
//! dependencies; all real-time behavior (the frame cap, the post-point
//! pause) lives in `app`.

pub mod app;
pub mod platform;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

/// Field geometry and timing constants
pub mod consts {
    use glam::IVec2;
    use std::time::Duration;

    /// Field dimensions in pixels
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Playable vertical band; the walls occupy the strips above and below
    pub const BAND_TOP: i32 = 50;
    pub const BAND_BOTTOM: i32 = 550;

    /// Paddle geometry
    pub const PADDLE_WIDTH: i32 = 25;
    pub const PADDLE_HEIGHT: i32 = 50;
    /// Vertical paddle speed in pixels per frame
    pub const PADDLE_SPEED: i32 = 10;
    pub const LEFT_PADDLE_X: i32 = 50;
    pub const RIGHT_PADDLE_X: i32 = 725;
    pub const PADDLE_START_Y: i32 = 263;
    /// Bottom clamp target; a paddle overshooting the band snaps here.
    /// Not derived from `BAND_BOTTOM - PADDLE_HEIGHT`, though the two agree
    /// for the stock paddle height.
    pub const PADDLE_FLOOR_Y: i32 = 500;

    /// Ball geometry
    pub const BALL_SIZE: i32 = 20;

    /// Strike planes: paddle collision fires only on the frame where the
    /// ball's x lands exactly on one of these
    pub const LEFT_STRIKE_X: i32 = 75;
    pub const RIGHT_STRIKE_X: i32 = 705;
    /// The strike window spans `(paddle_y - BALL_SIZE, paddle_y + STRIKE_WINDOW)`
    pub const STRIKE_WINDOW: i32 = 75;

    /// Edge positions where an exited ball comes to rest; the scoring check
    /// matches on these exactly
    pub const FREEZE_LEFT_X: i32 = 0;
    pub const FREEZE_RIGHT_X: i32 = 780;

    /// Serve states after a point, toward the side that conceded
    pub const SERVE_TOWARD_LEFT_POS: IVec2 = IVec2::new(705, 300);
    pub const SERVE_TOWARD_LEFT_VEL: IVec2 = IVec2::new(-5, 5);
    pub const SERVE_TOWARD_RIGHT_POS: IVec2 = IVec2::new(85, 300);
    pub const SERVE_TOWARD_RIGHT_VEL: IVec2 = IVec2::new(5, 5);

    /// Target frame rate (best-effort cap, no catch-up on overrun)
    pub const FRAMES_PER_SECOND: u64 = 60;
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND);
    /// Real-time freeze between a point being decided and the next serve
    pub const POINT_PAUSE: Duration = Duration::from_millis(1000);

    /// Fixed draw positions for the static field furniture
    pub const TOP_WALL_POS: IVec2 = IVec2::new(50, 25);
    pub const BOTTOM_WALL_POS: IVec2 = IVec2::new(50, 550);
    pub const NET_POS: IVec2 = IVec2::new(395, 50);
    pub const LEFT_SCORE_POS: IVec2 = IVec2::new(275, 50);
    /// The left glyph shifts here once the score needs two digits
    pub const LEFT_SCORE_WIDE_POS: IVec2 = IVec2::new(225, 50);
    pub const RIGHT_SCORE_POS: IVec2 = IVec2::new(450, 50);
}
