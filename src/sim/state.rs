//! Match state and core simulation entities
//!
//! Everything here is plain data plus deterministic mutation. Positions and
//! velocities are exact integer pixels; the strike-plane and scoring checks
//! rely on integer equality, so nothing in this module may round.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Discrete control state for one paddle, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    Up,
    Down,
    #[default]
    Idle,
}

/// Which player / side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Phase of the current rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball is live
    InPlay,
    /// Ball exited the field this frame; the named side takes the point
    JustScored(Side),
}

/// A player's paddle. x is fixed per side; y moves within the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
    pub vel_y: i32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            pos: IVec2::new(x, PADDLE_START_Y),
            vel_y: 0,
        }
    }

    /// Set velocity directly from the sampled control state. No inertia:
    /// `Idle` stops the paddle dead.
    pub fn handle_input(&mut self, cmd: PaddleCommand) {
        self.vel_y = match cmd {
            PaddleCommand::Up => -PADDLE_SPEED,
            PaddleCommand::Down => PADDLE_SPEED,
            PaddleCommand::Idle => 0,
        };
    }

    /// Step vertically, then clamp to the band.
    ///
    /// The bottom clamp snaps to the literal `PADDLE_FLOOR_Y`, not to
    /// `BAND_BOTTOM - PADDLE_HEIGHT`.
    pub fn advance(&mut self) {
        self.pos.y += self.vel_y;

        if self.pos.y < BAND_TOP {
            self.pos.y = BAND_TOP;
        }
        if self.pos.y + PADDLE_HEIGHT > BAND_BOTTOM {
            self.pos.y = PADDLE_FLOOR_Y;
        }
    }
}

/// The ball: a 20x20 box travelling in straight segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    /// Ball at the opening serve state (toward the right player)
    pub fn new() -> Self {
        let mut ball = Self {
            pos: IVec2::ZERO,
            vel: IVec2::ZERO,
        };
        ball.serve(Side::Right);
        ball
    }

    /// Reposition and relaunch toward the given side
    pub fn serve(&mut self, toward: Side) {
        match toward {
            Side::Left => {
                self.pos = SERVE_TOWARD_LEFT_POS;
                self.vel = SERVE_TOWARD_LEFT_VEL;
            }
            Side::Right => {
                self.pos = SERVE_TOWARD_RIGHT_POS;
                self.vel = SERVE_TOWARD_RIGHT_VEL;
            }
        }
    }

    /// Advance one frame given both paddle y positions.
    ///
    /// Returns true if the ball bounced off a paddle this frame.
    pub fn advance(&mut self, left_paddle_y: i32, right_paddle_y: i32) -> bool {
        self.pos += self.vel;

        // Wall reflection: undo the vertical step, flip vy. The two checks
        // run independently every frame; if both fired in one step only the
        // second undo would stand.
        if self.pos.y < BAND_TOP {
            self.pos.y -= self.vel.y;
            self.vel.y = -self.vel.y;
        }
        if self.pos.y + BALL_SIZE > BAND_BOTTOM {
            self.pos.y -= self.vel.y;
            self.vel.y = -self.vel.y;
        }

        let bounced = self.strikes_paddle(left_paddle_y, right_paddle_y);
        if bounced {
            self.vel.x = -self.vel.x;
        }

        // Past either paddle the ball freezes on the field edge; the scoring
        // check reads the resting position.
        if self.pos.x < 0 {
            self.pos.x = FREEZE_LEFT_X;
            self.vel = IVec2::ZERO;
        }
        if self.pos.x + BALL_SIZE > FIELD_WIDTH {
            self.pos.x = FREEZE_RIGHT_X;
            self.vel = IVec2::ZERO;
        }

        bounced
    }

    /// Plane-exact paddle collision test.
    ///
    /// Fires only on the frame where x lands exactly on a strike plane with
    /// y inside that paddle's strike window; there is no swept or range
    /// test. Pure predicate, no side effects.
    pub fn strikes_paddle(&self, left_paddle_y: i32, right_paddle_y: i32) -> bool {
        if self.pos.x == LEFT_STRIKE_X
            && self.pos.y > left_paddle_y - BALL_SIZE
            && self.pos.y < left_paddle_y + STRIKE_WINDOW
        {
            return true;
        }

        if self.pos.x == RIGHT_STRIKE_X
            && self.pos.y > right_paddle_y - BALL_SIZE
            && self.pos.y < right_paddle_y + STRIKE_WINDOW
        {
            return true;
        }

        false
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete match state: both paddles, the ball, scores and rally phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score_left: u32,
    pub score_right: u32,
    pub phase: RallyPhase,
}

impl MatchState {
    /// Fresh match: zero scores, opening serve toward the right player
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball::new(),
            score_left: 0,
            score_right: 0,
            phase: RallyPhase::InPlay,
        }
    }

    /// Score of the given side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.score_left,
            Side::Right => self.score_right,
        }
    }

    /// Complete a `JustScored` transition: credit the scorer, serve toward
    /// the side that conceded, return to `InPlay`. No-op while the rally is
    /// live, so the transition can fire at most once per exit.
    pub fn resolve_point(&mut self) {
        if let RallyPhase::JustScored(scorer) = self.phase {
            match scorer {
                Side::Left => self.score_left += 1,
                Side::Right => self.score_right += 1,
            }
            self.ball.serve(scorer.opponent());
            self.phase = RallyPhase::InPlay;
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
